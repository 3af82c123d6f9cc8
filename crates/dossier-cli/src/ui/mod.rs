//! TUI rendering: orchestrates all panes.

pub mod profile;
pub mod projects;
pub mod sidebar;
pub mod skills;
pub mod timeline;

use chrono::Local;
use dossier_core::session::Section;
use ratatui::{
  Frame,
  layout::{Alignment, Constraint, Direction, Layout, Rect},
  style::{Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw(f: &mut Frame, app: &App) {
  let area = f.area();
  let palette = app.theme.palette();
  f.render_widget(Block::default().style(Style::default().bg(palette.bg)), area);

  if app.loading {
    draw_loading(f, area, app);
    return;
  }

  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Min(0),    // body
      Constraint::Length(1), // status bar
    ])
    .split(area);

  draw_header(f, rows[0], app);
  draw_body(f, rows[1], app);
  draw_status(f, rows[2], app);
}

fn draw_loading(f: &mut Frame, area: Rect, app: &App) {
  let palette = app.theme.palette();
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Percentage(45),
      Constraint::Length(1),
      Constraint::Min(0),
    ])
    .split(area);
  f.render_widget(
    Paragraph::new("Loading profile…")
      .style(palette.dim())
      .alignment(Alignment::Center),
    rows[1],
  );
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
  let palette = app.theme.palette();
  let date = Local::now().format("%Y-%m-%d").to_string();

  let left = Span::styled(
    format!(" dossier  {}", app.session.record().full_name()),
    Style::default()
      .fg(palette.fg)
      .add_modifier(Modifier::BOLD),
  );
  let right = Span::styled(format!("{}  {date} ", app.theme), palette.dim());

  let pad = area
    .width
    .saturating_sub(left.width() as u16)
    .saturating_sub(right.width() as u16);

  let line = Line::from(vec![left, Span::raw(" ".repeat(pad as usize)), right]);
  f.render_widget(
    Paragraph::new(line).style(Style::default().bg(palette.muted)),
    area,
  );
}

// ─── Body ─────────────────────────────────────────────────────────────────────

fn draw_body(f: &mut Frame, area: Rect, app: &App) {
  let cols = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
    .split(area);

  sidebar::draw(f, cols[0], app);

  let main = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(10),
      Constraint::Percentage(30),
      Constraint::Percentage(35),
      Constraint::Min(0),
    ])
    .split(cols[1]);

  profile::draw(f, main[0], app);
  skills::draw(f, main[1], app);
  timeline::draw(f, main[2], app);
  projects::draw(f, main[3], app);
}

/// Bordered block for `section`, coloured by focus and mode. A `*` marks
/// uncommitted edits.
pub(crate) fn pane<'a>(app: &App, section: Section) -> Block<'a> {
  let palette = app.theme.palette();
  let border = match (app.focus == section, app.is_editing()) {
    (true, true) => palette.edit,
    (true, false) => palette.accent,
    (false, _) => palette.muted,
  };
  let dirty = if app.session.is_dirty(section) { " *" } else { "" };
  Block::default()
    .title(format!(" {section}{dirty} "))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(border))
}

/// Style for row `index` of `section`: highlighted under the cursor.
pub(crate) fn row_style(app: &App, section: Section, index: usize) -> Style {
  let palette = app.theme.palette();
  if app.focus == section && app.cursor == index {
    palette.selected()
  } else {
    palette.text()
  }
}

/// Vertical scroll that keeps line `target` inside a pane of `height` rows.
pub(crate) fn scroll_to(target: usize, height: u16) -> u16 {
  target.saturating_sub(usize::from(height.saturating_sub(1))) as u16
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
  let palette = app.theme.palette();

  if let Some(prompt) = &app.prompt {
    let line = Line::from(vec![
      Span::styled(
        format!(" {} ", prompt.label),
        Style::default()
          .fg(palette.bg)
          .bg(palette.edit)
          .add_modifier(Modifier::BOLD),
      ),
      Span::styled(format!(" {}█", prompt.buffer), palette.text()),
      Span::styled("   Enter apply  Esc close", palette.dim()),
    ]);
    f.render_widget(Paragraph::new(line), area);
    return;
  }

  let hints = if app.is_editing() {
    match app.focus {
      Section::Profile | Section::Contact => {
        "Enter edit  s save  Esc cancel  Tab section  e view"
      }
      Section::Skills => {
        "Enter rename  a add  d remove  +/- level  c category  s save  Esc cancel"
      }
      Section::Timeline => {
        "Enter title  D date  x text  i icon  a add  d remove  c kind  h/H highlight  s save  Esc cancel"
      }
      Section::Projects => {
        "Enter name  x text  S/E dates  l link  m image  a add  d remove  g/G tech  o/O team  s save  Esc cancel"
      }
    }
  } else {
    "↑↓/jk move  Tab section  Enter open  e edit  t theme  q quit"
  };

  let status = if app.status_msg.is_empty() {
    hints.to_string()
  } else {
    app.status_msg.clone()
  };

  let badge = if app.is_editing() {
    palette.edit
  } else {
    palette.accent
  };
  let line = Line::from(vec![
    Span::styled(
      format!(" {} ", app.mode()),
      Style::default()
        .fg(palette.bg)
        .bg(badge)
        .add_modifier(Modifier::BOLD),
    ),
    Span::styled(format!("  {status}"), palette.dim()),
  ]);
  f.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
  use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
  use dossier_core::fixture;
  use ratatui::{Terminal, backend::TestBackend};

  use super::*;
  use crate::theme::Theme;

  fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(140, 48)).unwrap();
    terminal.draw(|f| draw(f, app)).unwrap();
    terminal
      .backend()
      .buffer()
      .content()
      .iter()
      .map(|cell| cell.symbol())
      .collect()
  }

  #[test]
  fn loading_screen_hides_profile() {
    let mut app = App::new(fixture::sample_employee(), Theme::Dark);
    app.loading = true;
    let screen = render(&app);
    assert!(screen.contains("Loading profile"));
    assert!(!screen.contains("Ming Li"));
  }

  #[test]
  fn renders_every_section() {
    let app = App::new(fixture::sample_employee(), Theme::Light);
    let screen = render(&app);
    assert!(screen.contains("Ming Li"));
    assert!(screen.contains("VIEWING"));
    for section in ["Profile", "Skills", "Timeline", "Projects", "Contact"] {
      assert!(screen.contains(section), "{section} pane missing");
    }
  }

  #[test]
  fn dirty_sections_are_marked_and_prompt_shown() {
    let mut app = App::new(fixture::sample_employee(), Theme::Dark);
    for code in [
      KeyCode::Char('e'),
      KeyCode::Tab,
      KeyCode::Char('d'),
      KeyCode::Char('a'),
    ] {
      app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    let screen = render(&app);
    assert!(screen.contains("Skills *"));
    assert!(screen.contains("New skill"));
    assert!(screen.contains("EDITING"));
  }

  #[test]
  fn emptied_end_date_renders_present() {
    let mut app = App::new(fixture::sample_employee(), Theme::Dark);
    app.handle_key(KeyEvent::new(KeyCode::Char('e'), KeyModifiers::NONE));
    while app.focus != Section::Projects {
      app.handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
    }
    assert!(render(&app).contains("Jun 2020 - Feb 2021"));

    app.handle_key(KeyEvent::new(KeyCode::Char('E'), KeyModifiers::NONE));
    for _ in 0..10 {
      app.handle_key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
    }
    app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

    let screen = render(&app);
    assert!(screen.contains("Jun 2020 - Present"));
    assert!(!screen.contains("Jun 2020 - Feb 2021"));
  }

  #[test]
  fn scroll_keeps_target_visible() {
    assert_eq!(scroll_to(0, 5), 0);
    assert_eq!(scroll_to(4, 5), 0);
    assert_eq!(scroll_to(9, 5), 5);
  }
}
