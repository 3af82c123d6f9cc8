//! Left column: contact details, join date, work preference and badges.

use dossier_core::{date, session::Section, slices::ContactField};
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::Modifier,
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph, Wrap},
};
use strum::IntoEnumIterator;

use super::{pane, row_style};
use crate::app::App;

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(ContactField::iter().count() as u16 + 2),
      Constraint::Length(7),
      Constraint::Min(0),
    ])
    .split(area);

  draw_contact(f, rows[0], app);
  draw_about(f, rows[1], app);
  draw_badges(f, rows[2], app);
}

fn draw_contact(f: &mut Frame, area: Rect, app: &App) {
  let palette = app.theme.palette();
  let block = pane(app, Section::Contact);
  let inner = block.inner(area);
  f.render_widget(block, area);

  let links = app.session.contact.draft();
  let lines: Vec<Line> = ContactField::iter()
    .enumerate()
    .map(|(i, field)| {
      let value = match links.get(field) {
        "" => "-",
        value => value,
      };
      Line::from(vec![
        Span::styled(format!("{:<10}", field.to_string()), palette.dim()),
        Span::styled(value.to_string(), row_style(app, Section::Contact, i)),
      ])
    })
    .collect();
  f.render_widget(Paragraph::new(lines), inner);
}

fn draw_about(f: &mut Frame, area: Rect, app: &App) {
  let palette = app.theme.palette();
  let block = Block::default()
    .title(" About ")
    .borders(Borders::ALL)
    .border_style(palette.dim());
  let inner = block.inner(area);
  f.render_widget(block, area);

  let record = app.session.record();
  let pref = &record.work_preference;
  let row = |label: &str, value: &str| {
    Line::from(vec![
      Span::styled(format!("{label:<10}"), palette.dim()),
      Span::styled(value.to_string(), palette.text()),
    ])
  };
  let lines = vec![
    row("Joined", &date::format_day(&record.join_date)),
    row("Style", &pref.style),
    row("Talks", &pref.communication),
    row("Setting", &pref.environment),
    row("Hours", &pref.working_hours),
  ];
  f.render_widget(Paragraph::new(lines), inner);
}

fn draw_badges(f: &mut Frame, area: Rect, app: &App) {
  let palette = app.theme.palette();
  let block = Block::default()
    .title(" Badges ")
    .borders(Borders::ALL)
    .border_style(palette.dim());
  let inner = block.inner(area);
  f.render_widget(block, area);

  let mut lines = Vec::new();
  for badge in &app.session.record().badges {
    lines.push(Line::from(vec![
      Span::styled(badge.name.clone(), palette.text().add_modifier(Modifier::BOLD)),
      Span::styled(
        format!("  {}", date::format_month(&badge.earned_date)),
        palette.dim(),
      ),
    ]));
    lines.push(Line::from(Span::styled(badge.description.clone(), palette.dim())));
  }
  if lines.is_empty() {
    lines.push(Line::from(Span::styled("No badges yet.", palette.dim())));
  }
  f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
