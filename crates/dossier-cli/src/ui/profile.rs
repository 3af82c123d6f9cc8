//! Profile header pane: name, position, bio.

use dossier_core::{session::Section, slices::ProfileField};
use ratatui::{
  Frame,
  layout::Rect,
  style::Modifier,
  text::{Line, Span},
  widgets::{Paragraph, Wrap},
};
use strum::IntoEnumIterator;

use super::{pane, row_style};
use crate::app::App;

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let palette = app.theme.palette();
  let block = pane(app, Section::Profile);
  let inner = block.inner(area);
  f.render_widget(block, area);

  let fields = app.session.profile.draft();

  if app.is_editing() {
    let lines: Vec<Line> = ProfileField::iter()
      .enumerate()
      .map(|(i, field)| {
        Line::from(vec![
          Span::styled(format!("{:<16}", field.to_string()), palette.dim()),
          Span::styled(fields.get(field).to_string(), row_style(app, Section::Profile, i)),
        ])
      })
      .collect();
    f.render_widget(Paragraph::new(lines), inner);
    return;
  }

  let name = format!("{} {}", fields.first_name, fields.last_name);
  let mut lines = vec![
    Line::from(Span::styled(
      name.trim().to_string(),
      palette.title().add_modifier(Modifier::UNDERLINED),
    )),
    Line::from(vec![
      Span::styled(fields.position.clone(), palette.text()),
      Span::styled(format!("  ·  {}", fields.department), palette.dim()),
    ]),
    Line::from(Span::styled(format!("📍 {}", fields.location), palette.dim())),
    Line::from(""),
    Line::from(Span::styled(fields.bio.clone(), palette.text())),
  ];
  if !fields.cover_image_url.is_empty() {
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
      format!("cover: {}", fields.cover_image_url),
      palette.dim(),
    )));
  }
  f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
