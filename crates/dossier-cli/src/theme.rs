//! Dark and light colour palettes.

use clap::ValueEnum;
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;
use strum::Display;

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
  #[default]
  Dark,
  Light,
}

impl Theme {
  pub fn toggled(self) -> Self {
    match self {
      Self::Dark => Self::Light,
      Self::Light => Self::Dark,
    }
  }

  pub fn palette(self) -> Palette {
    match self {
      Self::Dark => Palette {
        bg:     Color::Black,
        fg:     Color::White,
        muted:  Color::DarkGray,
        accent: Color::Cyan,
        bar:    Color::Blue,
        edit:   Color::Yellow,
        cursor: Color::Blue,
      },
      Self::Light => Palette {
        bg:     Color::White,
        fg:     Color::Black,
        muted:  Color::Gray,
        accent: Color::Blue,
        bar:    Color::LightBlue,
        edit:   Color::Magenta,
        cursor: Color::LightCyan,
      },
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
  pub bg:     Color,
  pub fg:     Color,
  pub muted:  Color,
  pub accent: Color,
  /// Filled part of a skill bar.
  pub bar:    Color,
  /// Border and badge colour while editing.
  pub edit:   Color,
  pub cursor: Color,
}

impl Palette {
  pub fn text(&self) -> Style { Style::default().fg(self.fg) }

  pub fn dim(&self) -> Style { Style::default().fg(self.muted) }

  pub fn title(&self) -> Style {
    Style::default()
      .fg(self.accent)
      .add_modifier(Modifier::BOLD)
  }

  pub fn selected(&self) -> Style {
    Style::default()
      .bg(self.cursor)
      .fg(self.fg)
      .add_modifier(Modifier::BOLD)
  }
}
