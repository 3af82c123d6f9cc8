//! Skills pane: proficiency bars, grouped by category while viewing.

use dossier_core::{record::Skill, session::Section};
use ratatui::{
  Frame,
  layout::Rect,
  style::{Modifier, Style},
  text::{Line, Span},
  widgets::Paragraph,
};

use super::{pane, row_style, scroll_to};
use crate::{app::App, theme::Palette};

const BAR_WIDTH: usize = 20;

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let palette = app.theme.palette();
  let block = pane(app, Section::Skills);
  let inner = block.inner(area);
  f.render_widget(block, area);

  let skills = app.session.skills.draft();
  let mut lines = Vec::new();
  let mut cursor_line = 0;

  if app.is_editing() {
    // Flat, in list order, so the cursor row matches the item it edits.
    for (i, skill) in skills.0.iter().enumerate() {
      if i == app.cursor {
        cursor_line = lines.len();
      }
      let mut line = skill_line(skill, &palette, row_style(app, Section::Skills, i));
      line.push_span(Span::styled(format!("  {}", skill.category), palette.dim()));
      lines.push(line);
    }
  } else {
    for (category, members) in skills.by_category() {
      lines.push(Line::from(Span::styled(
        category.to_string(),
        palette.title(),
      )));
      for skill in members {
        lines.push(skill_line(skill, &palette, palette.text()));
      }
    }
  }

  if lines.is_empty() {
    lines.push(Line::from(Span::styled("No skills listed.", palette.dim())));
  }
  f.render_widget(
    Paragraph::new(lines).scroll((scroll_to(cursor_line, inner.height), 0)),
    inner,
  );
}

fn skill_line(skill: &Skill, palette: &Palette, name_style: Style) -> Line<'static> {
  let (filled, empty) = bar(skill.level, BAR_WIDTH);
  Line::from(vec![
    Span::styled(format!("{:<18}", skill.name), name_style),
    Span::styled(filled, Style::default().fg(palette.bar)),
    Span::styled(empty, palette.dim()),
    Span::styled(
      format!(" {:>3}", skill.level),
      palette.text().add_modifier(Modifier::BOLD),
    ),
  ])
}

/// Filled and empty halves of a `width`-cell bar for `level` out of 100.
fn bar(level: u8, width: usize) -> (String, String) {
  let filled = usize::from(level.min(100)) * width / 100;
  ("█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn bar_scales_and_saturates() {
    assert_eq!(bar(0, 10), (String::new(), "░".repeat(10)));
    assert_eq!(bar(50, 10).0.chars().count(), 5);
    assert_eq!(bar(100, 10).0.chars().count(), 10);
    assert_eq!(bar(250, 10).1, "");
  }
}
