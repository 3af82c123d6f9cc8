//! Timeline pane: newest event first.

use dossier_core::{date, record::TimelineEvent, session::Section};
use ratatui::{
  Frame,
  layout::Rect,
  text::{Line, Span},
  widgets::Paragraph,
};

use super::{pane, row_style, scroll_to};
use crate::app::App;

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let palette = app.theme.palette();
  let block = pane(app, Section::Timeline);
  let inner = block.inner(area);
  f.render_widget(block, area);

  let events = app.session.timeline.display_order();
  let mut lines = Vec::new();
  let mut cursor_line = 0;

  for (i, event) in events.iter().enumerate() {
    let selected = app.focus == Section::Timeline && app.cursor == i;
    if selected {
      cursor_line = lines.len();
    }
    lines.push(Line::from(vec![
      Span::styled(format!("{:<12}", date::format_day(&event.date)), palette.dim()),
      Span::styled(format!("{:<14}", label(event)), palette.title()),
      Span::styled(event.title.clone(), row_style(app, Section::Timeline, i)),
    ]));

    let open = app.expanded.as_ref() == Some(&event.id)
      || (app.is_editing() && selected);
    if open {
      if !event.description.is_empty() {
        lines.push(Line::from(Span::styled(
          format!("{:>12}  {}", "", event.description),
          palette.text(),
        )));
      }
      for highlight in &event.highlights {
        lines.push(Line::from(Span::styled(
          format!("{:>12}  • {highlight}", ""),
          palette.dim(),
        )));
      }
    }
  }

  if lines.is_empty() {
    lines.push(Line::from(Span::styled("Nothing on the timeline.", palette.dim())));
  }
  f.render_widget(
    Paragraph::new(lines).scroll((scroll_to(cursor_line, inner.height), 0)),
    inner,
  );
}

/// Kind, prefixed with the event's icon when it has one.
fn label(event: &TimelineEvent) -> String {
  match &event.icon {
    Some(icon) => format!("{icon} {}", event.kind),
    None => event.kind.to_string(),
  }
}
