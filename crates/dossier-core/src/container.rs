//! The record owner and the shared edit-mode flag.

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::record::{Employee, EmployeePatch};

// ─── Mode ────────────────────────────────────────────────────────────────────

/// The single view/edit flag shared by every editor of a record. Either all
/// sections are editable or none are.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Mode {
  #[default]
  Viewing,
  Editing,
}

impl Mode {
  pub fn is_editing(self) -> bool { matches!(self, Self::Editing) }

  pub fn toggled(self) -> Self {
    match self {
      Self::Viewing => Self::Editing,
      Self::Editing => Self::Viewing,
    }
  }
}

// ─── Host ────────────────────────────────────────────────────────────────────

/// What a draft editor sees of the record owner.
///
/// `on_save` and `on_toggle_edit` are the only ways an editor influences the
/// record; everything else is read-only.
pub trait RecordHost {
  fn record(&self) -> &Employee;
  fn mode(&self) -> Mode;

  /// Bumped on every change to the record.
  fn generation(&self) -> u64;

  /// Merge `patch` into the record and leave edit mode.
  fn on_save(&mut self, patch: EmployeePatch);

  fn on_toggle_edit(&mut self);

  /// Leave edit mode without touching the record. Does nothing while
  /// viewing.
  fn exit_edit(&mut self);
}

// ─── RecordContainer ─────────────────────────────────────────────────────────

/// Owns the authoritative [`Employee`] and the shared [`Mode`].
#[derive(Debug, Clone)]
pub struct RecordContainer {
  record:     Employee,
  mode:       Mode,
  generation: u64,
}

impl RecordContainer {
  pub fn new(record: Employee) -> Self {
    Self {
      record,
      mode: Mode::Viewing,
      generation: 0,
    }
  }

  pub fn record(&self) -> &Employee { &self.record }

  pub fn mode(&self) -> Mode { self.mode }

  pub fn generation(&self) -> u64 { self.generation }

  /// Flip between viewing and editing.
  pub fn toggle_edit(&mut self) {
    self.mode = self.mode.toggled();
    tracing::debug!(mode = %self.mode, "edit mode toggled");
  }

  pub fn exit_edit(&mut self) {
    if self.mode.is_editing() {
      self.toggle_edit();
    }
  }

  /// Shallow-merge `patch` into the record without touching the mode. This
  /// is how changes that do not come from an editor's commit arrive.
  pub fn merge(&mut self, patch: EmployeePatch) {
    self.record.merge(patch);
    self.generation += 1;
  }

  /// Merge a committed draft and leave edit mode.
  pub fn apply_update(&mut self, patch: EmployeePatch) {
    let keys = patch.keys();
    self.merge(patch);
    // Saving stays in memory; the log line is its only trace.
    tracing::info!(
      employee = %self.record.id,
      keys = ?keys,
      generation = self.generation,
      "saved employee record"
    );
    self.exit_edit();
  }

  pub fn into_record(self) -> Employee { self.record }
}

impl RecordHost for RecordContainer {
  fn record(&self) -> &Employee { &self.record }

  fn mode(&self) -> Mode { self.mode }

  fn generation(&self) -> u64 { self.generation }

  fn on_save(&mut self, patch: EmployeePatch) { self.apply_update(patch); }

  fn on_toggle_edit(&mut self) { self.toggle_edit(); }

  fn exit_edit(&mut self) { RecordContainer::exit_edit(self); }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::fixture;

  #[test]
  fn starts_viewing() {
    let c = RecordContainer::new(fixture::sample_employee());
    assert_eq!(c.mode(), Mode::Viewing);
    assert_eq!(c.generation(), 0);
  }

  #[test]
  fn toggle_flips_both_ways() {
    let mut c = RecordContainer::new(fixture::sample_employee());
    c.toggle_edit();
    assert_eq!(c.mode(), Mode::Editing);
    c.toggle_edit();
    assert_eq!(c.mode(), Mode::Viewing);
  }

  #[test]
  fn apply_update_merges_and_exits_edit() {
    let original = fixture::sample_employee();
    let mut c = RecordContainer::new(original.clone());
    c.toggle_edit();

    c.apply_update(EmployeePatch {
      position: Some("Staff Engineer".into()),
      ..EmployeePatch::default()
    });

    assert_eq!(c.mode(), Mode::Viewing);
    assert_eq!(c.generation(), 1);
    assert_eq!(c.record().position, "Staff Engineer");
    assert_eq!(c.record().bio, original.bio);
  }

  #[test]
  fn apply_update_while_viewing_stays_viewing() {
    let mut c = RecordContainer::new(fixture::sample_employee());
    c.apply_update(EmployeePatch::default());
    assert_eq!(c.mode(), Mode::Viewing);
  }

  #[test]
  fn merge_keeps_mode() {
    let mut c = RecordContainer::new(fixture::sample_employee());
    c.toggle_edit();
    c.merge(EmployeePatch {
      location: Some("Remote".into()),
      ..EmployeePatch::default()
    });
    assert_eq!(c.mode(), Mode::Editing);
    assert_eq!(c.record().location, "Remote");
  }

  #[test]
  fn mode_labels() {
    assert_eq!(Mode::Viewing.to_string(), "VIEWING");
    assert_eq!(Mode::Editing.to_string(), "EDITING");
  }
}
