//! Projects pane: one row per project, details for the selected one.

use dossier_core::{date, record::Project, session::Section};
use ratatui::{
  Frame,
  layout::Rect,
  style::Modifier,
  text::{Line, Span},
  widgets::Paragraph,
};

use super::{pane, row_style, scroll_to};
use crate::{app::App, theme::Palette};

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let palette = app.theme.palette();
  let block = pane(app, Section::Projects);
  let inner = block.inner(area);
  f.render_widget(block, area);

  let mut lines = Vec::new();
  let mut cursor_line = 0;

  for (i, project) in app.session.projects.items().iter().enumerate() {
    let selected = app.focus == Section::Projects && app.cursor == i;
    if selected {
      cursor_line = lines.len();
    }
    lines.push(Line::from(vec![
      Span::styled(project.name.clone(), row_style(app, Section::Projects, i)),
      Span::styled(
        format!(
          "  {}",
          date::format_range(&project.start_date, project.end_date.as_deref())
        ),
        palette.dim(),
      ),
    ]));
    if !project.technologies.is_empty() {
      lines.push(Line::from(Span::styled(
        format!("  [{}]", project.technologies.join(", ")),
        palette.dim(),
      )));
    }

    let open = app.selected_project.as_ref() == Some(&project.id)
      || (app.is_editing() && selected);
    if open {
      details(project, &palette, &mut lines);
    }
  }

  if lines.is_empty() {
    lines.push(Line::from(Span::styled("No projects yet.", palette.dim())));
  }
  f.render_widget(
    Paragraph::new(lines).scroll((scroll_to(cursor_line, inner.height), 0)),
    inner,
  );
}

fn details(project: &Project, palette: &Palette, lines: &mut Vec<Line<'static>>) {
  lines.push(Line::from(Span::styled(
    format!("  {}", project.description),
    palette.text(),
  )));
  if let Some(link) = &project.link {
    lines.push(Line::from(Span::styled(format!("  ↗ {link}"), palette.title())));
  }
  for collaborator in &project.collaborators {
    lines.push(Line::from(vec![
      Span::styled(
        format!("    {}", collaborator.name),
        palette.text().add_modifier(Modifier::BOLD),
      ),
      Span::styled(format!("  {}", collaborator.role), palette.dim()),
    ]));
  }
}
