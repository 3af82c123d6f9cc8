//! One record container plus an editor per profile section.

use strum::{Display, EnumIter};

use crate::{
  container::{Mode, RecordContainer},
  draft::DraftEditor,
  record::{Employee, EmployeePatch},
  slices::{ContactLinks, ProfileFields, Projects, Skills, Timeline},
};

/// The editable sections of a profile, in screen order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Section {
  Profile,
  Skills,
  Timeline,
  Projects,
  Contact,
}

/// Owns the record and one draft editor per [`Section`].
///
/// After every operation all editors are re-synchronised against the
/// container, so they always follow the shared mode.
#[derive(Debug, Clone)]
pub struct ProfileSession {
  container:    RecordContainer,
  pub profile:  DraftEditor<ProfileFields>,
  pub skills:   DraftEditor<Skills>,
  pub timeline: DraftEditor<Timeline>,
  pub projects: DraftEditor<Projects>,
  pub contact:  DraftEditor<ContactLinks>,
}

impl ProfileSession {
  pub fn new(record: Employee) -> Self {
    let container = RecordContainer::new(record);
    Self {
      profile: DraftEditor::new(&container),
      skills: DraftEditor::new(&container),
      timeline: DraftEditor::new(&container),
      projects: DraftEditor::new(&container),
      contact: DraftEditor::new(&container),
      container,
    }
  }

  pub fn container(&self) -> &RecordContainer { &self.container }

  pub fn record(&self) -> &Employee { self.container.record() }

  pub fn mode(&self) -> Mode { self.container.mode() }

  pub fn toggle_edit(&mut self) {
    self.container.toggle_edit();
    self.sync();
  }

  /// Commit one section's draft; every section leaves edit mode.
  pub fn commit(&mut self, section: Section) {
    let container = &mut self.container;
    match section {
      Section::Profile => self.profile.commit(container),
      Section::Skills => self.skills.commit(container),
      Section::Timeline => self.timeline.commit(container),
      Section::Projects => self.projects.commit(container),
      Section::Contact => self.contact.commit(container),
    }
    self.sync();
  }

  /// Discard one section's draft and leave edit mode.
  pub fn cancel(&mut self, section: Section) {
    let container = &mut self.container;
    match section {
      Section::Profile => self.profile.cancel(container),
      Section::Skills => self.skills.cancel(container),
      Section::Timeline => self.timeline.cancel(container),
      Section::Projects => self.projects.cancel(container),
      Section::Contact => self.contact.cancel(container),
    }
    self.sync();
  }

  /// A record change from outside the editors. The mode is untouched, but
  /// every draft is refreshed and in-progress edits are lost.
  pub fn merge_external(&mut self, patch: EmployeePatch) {
    self.container.merge(patch);
    self.sync();
  }

  /// Bring every draft up to date with the container.
  pub fn sync(&mut self) {
    let container = &self.container;
    self.profile.sync(container);
    self.skills.sync(container);
    self.timeline.sync(container);
    self.projects.sync(container);
    self.contact.sync(container);
  }

  /// Whether `section` has uncommitted edits.
  pub fn is_dirty(&self, section: Section) -> bool {
    let container = &self.container;
    match section {
      Section::Profile => self.profile.is_dirty(container),
      Section::Skills => self.skills.is_dirty(container),
      Section::Timeline => self.timeline.is_dirty(container),
      Section::Projects => self.projects.is_dirty(container),
      Section::Contact => self.contact.is_dirty(container),
    }
  }
}
