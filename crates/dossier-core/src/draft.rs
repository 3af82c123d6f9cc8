//! The draft editor: one implementation behind every editable section.
//!
//! An editor keeps a private copy of its slice of the record. Edits land on
//! that copy only; the record changes when the draft is committed through
//! [`RecordHost::on_save`]. Whenever the record or the shared mode changes,
//! the next [`DraftEditor::sync`] throws the draft away and copies the slice
//! again, uncommitted edits included.

use std::fmt;

use crate::{
  container::{Mode, RecordHost},
  id::ItemId,
  list::{self, Item, ItemRef, Parent},
  record::{Employee, EmployeePatch},
};

// ─── Slice ───────────────────────────────────────────────────────────────────

/// The part of the record one editor is responsible for.
pub trait Slice: Clone + PartialEq + fmt::Debug {
  /// A single field-level change.
  type Edit: fmt::Debug;

  /// The new-item form kept alongside the draft (`()` when the slice has no
  /// list).
  type Pending: Default + Clone + fmt::Debug;

  /// Section name used in log lines.
  const NAME: &'static str;

  /// Copy this slice out of `record`.
  fn extract(record: &Employee) -> Self;

  /// The partial update that writes this slice back.
  fn into_patch(self) -> EmployeePatch;

  /// Apply `edit`. Returns `false` when it addresses nothing.
  fn apply(&mut self, edit: Self::Edit) -> bool;
}

/// A slice that is one ID-addressed list.
pub trait Collection: Slice {
  type Item: Item + Default + fmt::Debug;

  fn items(&self) -> &[Self::Item];
  fn items_mut(&mut self) -> &mut Vec<Self::Item>;
}

/// Replace one scalar field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEdit<F> {
  pub field: F,
  pub value: String,
}

impl<F> FieldEdit<F> {
  pub fn new(field: F, value: impl Into<String>) -> Self {
    Self {
      field,
      value: value.into(),
    }
  }
}

/// Change one field of one list element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEdit<C> {
  pub at:     ItemRef,
  pub change: C,
}

impl<C> ListEdit<C> {
  pub fn new(at: impl Into<ItemRef>, change: C) -> Self {
    Self {
      at: at.into(),
      change,
    }
  }
}

// ─── DraftEditor ─────────────────────────────────────────────────────────────

/// What the editor last synchronised against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Seen {
  generation: u64,
  mode:       Mode,
}

impl Seen {
  fn of(host: &impl RecordHost) -> Self {
    Self {
      generation: host.generation(),
      mode:       host.mode(),
    }
  }
}

#[derive(Debug, Clone)]
pub struct DraftEditor<S: Slice> {
  draft:   S,
  pending: S::Pending,
  seen:    Seen,
}

impl<S: Slice> DraftEditor<S> {
  pub fn new(host: &impl RecordHost) -> Self {
    Self {
      draft:   S::extract(host.record()),
      pending: S::Pending::default(),
      seen:    Seen::of(host),
    }
  }

  pub fn draft(&self) -> &S { &self.draft }

  /// The item under construction. Survives resets; only a successful add
  /// clears it.
  pub fn pending(&self) -> &S::Pending { &self.pending }

  pub fn pending_mut(&mut self) -> &mut S::Pending { &mut self.pending }

  pub fn set_field(&mut self, edit: S::Edit) -> bool {
    let applied = self.draft.apply(edit);
    if !applied {
      tracing::debug!(section = S::NAME, "edit addressed a missing item");
    }
    applied
  }

  /// Re-copy the draft if the record or the mode changed since the last
  /// sync. Returns whether the draft was reset.
  pub fn sync(&mut self, host: &impl RecordHost) -> bool {
    if Seen::of(host) == self.seen {
      return false;
    }
    if self.is_dirty(host) {
      tracing::debug!(section = S::NAME, "discarding uncommitted draft");
    }
    self.reset(&*host);
    true
  }

  /// Hand the draft to the host and leave edit mode.
  pub fn commit<H: RecordHost>(&mut self, host: &mut H) {
    host.on_save(self.draft.clone().into_patch());
    self.reset(&*host);
  }

  /// Drop every uncommitted edit and leave edit mode.
  pub fn cancel<H: RecordHost>(&mut self, host: &mut H) {
    host.exit_edit();
    self.reset(&*host);
  }

  /// Whether the draft differs from the record's current slice.
  pub fn is_dirty(&self, host: &impl RecordHost) -> bool {
    self.draft != S::extract(host.record())
  }

  fn reset(&mut self, host: &impl RecordHost) {
    self.draft = S::extract(host.record());
    self.seen = Seen::of(host);
  }
}

impl<S> DraftEditor<S>
where
  S: Collection + Slice<Pending = <S as Collection>::Item>,
{
  pub fn items(&self) -> &[S::Item] { self.draft.items() }

  /// Append `item` under a fresh ID. Ignored if a required field is blank.
  pub fn add_item(&mut self, item: S::Item) -> Option<ItemId> {
    list::insert(self.draft.items_mut(), item)
  }

  /// Add the pending item and clear the form. A rejected item stays in the
  /// form.
  pub fn add_pending(&mut self) -> Option<ItemId> {
    let id = self.add_item(self.pending.clone())?;
    self.pending = Default::default();
    Some(id)
  }

  pub fn remove_item(&mut self, at: impl Into<ItemRef>) -> Option<S::Item> {
    list::remove(self.draft.items_mut(), &at.into())
  }

  pub(crate) fn parent_mut(&mut self, parent: &Parent) -> Option<&mut S::Item> {
    match parent {
      Parent::Existing(id) => {
        list::find_mut(self.draft.items_mut(), &ItemRef::Id(id.clone()))
      }
      Parent::Pending => Some(&mut self.pending),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    container::RecordContainer,
    fixture,
    record::Skill,
    slices::{ProfileField, ProfileFields, SkillChange, Skills},
  };

  /// A host that records what editors hand it instead of merging.
  #[derive(Default)]
  struct RecordingHost {
    record:     Option<Employee>,
    mode:       Mode,
    generation: u64,
    saved:      Vec<EmployeePatch>,
    toggles:    usize,
  }

  impl RecordingHost {
    fn editing() -> Self {
      Self {
        record: Some(fixture::sample_employee()),
        mode: Mode::Editing,
        ..Self::default()
      }
    }
  }

  impl RecordHost for RecordingHost {
    fn record(&self) -> &Employee { self.record.as_ref().unwrap() }

    fn mode(&self) -> Mode { self.mode }

    fn generation(&self) -> u64 { self.generation }

    fn on_save(&mut self, patch: EmployeePatch) {
      self.saved.push(patch);
      self.mode = Mode::Viewing;
    }

    fn on_toggle_edit(&mut self) {
      self.toggles += 1;
      self.mode = self.mode.toggled();
    }

    fn exit_edit(&mut self) { self.mode = Mode::Viewing; }
  }

  #[test]
  fn commit_hands_draft_to_host() {
    let mut host = RecordingHost::editing();
    let mut editor = DraftEditor::<ProfileFields>::new(&host);

    editor.set_field(FieldEdit::new(ProfileField::Bio, "Rewritten"));
    editor.commit(&mut host);

    assert_eq!(host.saved.len(), 1);
    assert_eq!(host.saved[0].bio.as_deref(), Some("Rewritten"));
    assert_eq!(host.mode, Mode::Viewing);
    assert_eq!(host.toggles, 0);
  }

  #[test]
  fn cancel_requests_view_mode_without_saving() {
    let mut host = RecordingHost::editing();
    let mut editor = DraftEditor::<ProfileFields>::new(&host);

    editor.set_field(FieldEdit::new(ProfileField::Location, "Moon"));
    editor.cancel(&mut host);

    assert!(host.saved.is_empty());
    assert_eq!(host.mode, Mode::Viewing);
    assert_eq!(editor.draft().location, host.record().location);
  }

  #[test]
  fn sync_is_quiet_when_nothing_changed() {
    let host = RecordingHost::editing();
    let mut editor = DraftEditor::<ProfileFields>::new(&host);
    editor.set_field(FieldEdit::new(ProfileField::Bio, "draft"));

    assert!(!editor.sync(&host));
    assert_eq!(editor.draft().bio, "draft");
  }

  #[test]
  fn mode_change_resets_draft() {
    let mut host = RecordingHost::editing();
    let mut editor = DraftEditor::<ProfileFields>::new(&host);
    editor.set_field(FieldEdit::new(ProfileField::Bio, "draft"));
    assert!(editor.is_dirty(&host));

    host.on_toggle_edit();
    assert!(editor.sync(&host));
    assert!(!editor.is_dirty(&host));
  }

  #[test]
  fn pending_form_survives_reset_and_clears_on_add() {
    let mut container = RecordContainer::new(fixture::sample_employee());
    container.toggle_edit();
    let mut editor = DraftEditor::<Skills>::new(&container);

    editor.pending_mut().name = "Go".into();
    container.toggle_edit();
    editor.sync(&container);
    assert_eq!(editor.pending().name, "Go");

    let id = editor.add_pending().unwrap();
    assert_eq!(editor.items().last().unwrap().id, id);
    assert_eq!(editor.pending(), &Skill::default());
  }

  #[test]
  fn rejected_pending_item_stays_in_form() {
    let container = RecordContainer::new(fixture::sample_employee());
    let mut editor = DraftEditor::<Skills>::new(&container);
    let before = editor.items().len();

    editor.pending_mut().name = "  ".into();
    editor.pending_mut().level = 77;
    assert!(editor.add_pending().is_none());
    assert_eq!(editor.items().len(), before);
    assert_eq!(editor.pending().level, 77);
  }

  #[test]
  fn edits_to_missing_items_are_noops() {
    let container = RecordContainer::new(fixture::sample_employee());
    let mut editor = DraftEditor::<Skills>::new(&container);
    let before = editor.draft().clone();

    let hit = editor.set_field(ListEdit::new(
      ItemId::from("no-such-skill"),
      SkillChange::Level(1),
    ));
    assert!(!hit);
    assert_eq!(editor.draft(), &before);
  }
}
