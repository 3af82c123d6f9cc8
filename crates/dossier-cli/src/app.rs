//! Application state machine and key dispatcher.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use dossier_core::{
  container::Mode,
  draft::{FieldEdit, ListEdit},
  id::ItemId,
  list::Parent,
  record::{Collaborator, Employee, Project, TimelineEvent},
  session::{ProfileSession, Section},
  slices::{ContactField, EventChange, ProfileField, ProjectChange, SkillChange},
};
use strum::IntoEnumIterator;

use crate::theme::Theme;

/// Step applied by `+`/`-` to a skill level.
const LEVEL_STEP: i16 = 5;

// ─── Prompt ───────────────────────────────────────────────────────────────────

/// Where a submitted prompt line goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
  Profile(ProfileField),
  Contact(ContactField),
  SkillName(ItemId),
  EventTitle(ItemId),
  EventDate(ItemId),
  EventDescription(ItemId),
  /// Empty clears the icon.
  EventIcon(ItemId),
  ProjectName(ItemId),
  ProjectDescription(ItemId),
  ProjectStart(ItemId),
  /// Empty marks the project as ongoing.
  ProjectEnd(ItemId),
  ProjectLink(ItemId),
  ProjectImage(ItemId),
  Highlight(ItemId),
  Technology(ItemId),
  /// Entered as `name, role`.
  Collaborator(ItemId),
  NewSkill,
  NewEvent,
  NewEventDate,
  NewEventDescription,
  NewProject,
  NewProjectStart,
  /// Comma-separated tags.
  NewProjectTech,
  /// `name, role` pairs separated by `;`.
  NewProjectTeam,
}

/// What a submitted line led to.
enum Outcome {
  /// An edit to the draft, and whether it took.
  Edited(bool),
  /// The new-item form continues with another prompt.
  Next(Prompt),
  /// The new-item form is complete: add the pending item.
  Finish(Section),
}

/// Empty input unsets an optional field.
fn optional(buffer: String) -> Option<String> {
  (!buffer.is_empty()).then_some(buffer)
}

/// A one-line input shown in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
  pub target: Target,
  pub label:  String,
  pub buffer: String,
}

impl Prompt {
  fn new(target: Target, label: impl Into<String>) -> Self {
    Self {
      target,
      label: label.into(),
      buffer: String::new(),
    }
  }

  fn prefilled(target: Target, label: impl Into<String>, value: &str) -> Self {
    Self {
      buffer: value.to_string(),
      ..Self::new(target, label)
    }
  }
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub struct App {
  /// The record plus one draft editor per section.
  pub session: ProfileSession,

  /// Section receiving movement and edit keys.
  pub focus: Section,

  /// Row within the focused section. Timeline rows follow display order.
  pub cursor: usize,

  /// Open input line, if any. Captures all keys except Ctrl-C.
  pub prompt: Option<Prompt>,

  pub theme: Theme,

  /// Mirrors the startup task; only quitting works while set.
  pub loading: bool,

  /// Timeline event whose description and highlights are shown.
  pub expanded: Option<ItemId>,

  /// Project whose details are shown below the project list.
  pub selected_project: Option<ItemId>,

  /// One-line status message shown in the status bar.
  pub status_msg: String,
}

impl App {
  pub fn new(record: Employee, theme: Theme) -> Self {
    Self {
      session: ProfileSession::new(record),
      focus: Section::Profile,
      cursor: 0,
      prompt: None,
      theme,
      loading: false,
      expanded: None,
      selected_project: None,
      status_msg: String::new(),
    }
  }

  pub fn mode(&self) -> Mode { self.session.mode() }

  pub fn is_editing(&self) -> bool { self.mode().is_editing() }

  // ── Selection ─────────────────────────────────────────────────────────────

  /// Number of selectable rows in the focused section. The profile header
  /// and the grouped skill bars have no rows while viewing.
  pub fn rows(&self) -> usize {
    let editing = self.is_editing();
    match self.focus {
      Section::Profile if editing => ProfileField::iter().count(),
      Section::Skills if editing => self.session.skills.items().len(),
      Section::Profile | Section::Skills => 0,
      Section::Contact => ContactField::iter().count(),
      Section::Timeline => self.session.timeline.items().len(),
      Section::Projects => self.session.projects.items().len(),
    }
  }

  fn profile_field(&self) -> Option<ProfileField> {
    ProfileField::iter().nth(self.cursor)
  }

  fn contact_field(&self) -> Option<ContactField> {
    ContactField::iter().nth(self.cursor)
  }

  fn selected_skill(&self) -> Option<ItemId> {
    self
      .session
      .skills
      .items()
      .get(self.cursor)
      .map(|s| s.id.clone())
  }

  fn selected_event(&self) -> Option<ItemId> {
    self
      .session
      .timeline
      .display_order()
      .get(self.cursor)
      .map(|e| e.id.clone())
  }

  fn selected_project_id(&self) -> Option<ItemId> {
    self
      .session
      .projects
      .items()
      .get(self.cursor)
      .map(|p| p.id.clone())
  }

  fn clamp_cursor(&mut self) {
    self.cursor = self.cursor.min(self.rows().saturating_sub(1));
  }

  fn focus_on(&mut self, section: Section) {
    self.focus = section;
    self.cursor = 0;
  }

  fn cycle_focus(&mut self, forward: bool) {
    let sections: Vec<Section> = Section::iter().collect();
    let here = sections
      .iter()
      .position(|s| *s == self.focus)
      .unwrap_or_default();
    let next = if forward {
      (here + 1) % sections.len()
    } else {
      (here + sections.len() - 1) % sections.len()
    };
    self.focus_on(sections[next]);
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub fn handle_key(&mut self, key: KeyEvent) -> bool {
    // Global: Ctrl-C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL)
      && key.code == KeyCode::Char('c')
    {
      return false;
    }

    if self.loading {
      return key.code != KeyCode::Char('q');
    }

    if self.prompt.is_some() {
      self.handle_prompt_key(key);
      return true;
    }

    match key.code {
      KeyCode::Char('q') => return false,
      KeyCode::Char('e') => {
        self.session.toggle_edit();
        self.status_msg = match self.mode() {
          Mode::Editing => "Editing. s save  Esc cancel".into(),
          Mode::Viewing => "Edits discarded".into(),
        };
      }
      KeyCode::Char('t') => {
        self.theme = self.theme.toggled();
        self.status_msg = format!("Theme: {}", self.theme);
      }
      KeyCode::Tab => self.cycle_focus(true),
      KeyCode::BackTab => self.cycle_focus(false),
      KeyCode::Down | KeyCode::Char('j') => {
        if self.cursor + 1 < self.rows() {
          self.cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.cursor = self.cursor.saturating_sub(1);
      }
      _ if self.is_editing() => self.handle_edit_key(key),
      KeyCode::Enter => self.activate(),
      _ => {}
    }
    self.clamp_cursor();
    true
  }

  fn handle_prompt_key(&mut self, key: KeyEvent) {
    let Some(prompt) = self.prompt.as_mut() else {
      return;
    };
    match key.code {
      KeyCode::Esc => {
        self.prompt = None;
        self.status_msg.clear();
      }
      KeyCode::Enter => {
        if let Some(prompt) = self.prompt.take() {
          self.submit(prompt);
        }
      }
      KeyCode::Backspace => {
        prompt.buffer.pop();
      }
      KeyCode::Char(c) => prompt.buffer.push(c),
      _ => {}
    }
  }

  /// `Enter` while viewing.
  fn activate(&mut self) {
    match self.focus {
      Section::Timeline => {
        let id = self.selected_event();
        self.expanded = if self.expanded == id { None } else { id };
      }
      Section::Projects => {
        let id = self.selected_project_id();
        self.selected_project =
          if self.selected_project == id { None } else { id };
      }
      _ => {}
    }
  }

  fn handle_edit_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Enter => self.prompt = self.edit_prompt(),
      KeyCode::Char('a') => self.prompt = self.add_prompt(),
      KeyCode::Char('d') => self.remove_selected(),
      KeyCode::Char('+') | KeyCode::Char('=') => self.step_level(LEVEL_STEP),
      KeyCode::Char('-') => self.step_level(-LEVEL_STEP),
      KeyCode::Char('c') => self.cycle_kind(),
      KeyCode::Char('h') if self.focus == Section::Timeline => {
        self.prompt = self
          .selected_event()
          .map(|id| Prompt::new(Target::Highlight(id), "Highlight"));
      }
      KeyCode::Char('g') if self.focus == Section::Projects => {
        self.prompt = self
          .selected_project_id()
          .map(|id| Prompt::new(Target::Technology(id), "Technology"));
      }
      KeyCode::Char('o') if self.focus == Section::Projects => {
        self.prompt = self.selected_project_id().map(|id| {
          Prompt::new(Target::Collaborator(id), "Collaborator (name, role)")
        });
      }
      KeyCode::Char('D') => {
        self.prompt =
          self.event_prompt(Target::EventDate, "Date (YYYY-MM-DD)", |e| {
            e.date.clone()
          });
      }
      KeyCode::Char('i') => {
        self.prompt = self.event_prompt(Target::EventIcon, "Icon", |e| {
          e.icon.clone().unwrap_or_default()
        });
      }
      KeyCode::Char('x') => {
        self.prompt = match self.focus {
          Section::Timeline => {
            self.event_prompt(Target::EventDescription, "Description", |e| {
              e.description.clone()
            })
          }
          _ => self.project_prompt(
            Target::ProjectDescription,
            "Description",
            |p| p.description.clone(),
          ),
        };
      }
      KeyCode::Char('S') => {
        self.prompt =
          self.project_prompt(Target::ProjectStart, "Start date", |p| {
            p.start_date.clone()
          });
      }
      KeyCode::Char('E') => {
        self.prompt = self.project_prompt(
          Target::ProjectEnd,
          "End date (empty: ongoing)",
          |p| p.end_date.clone().unwrap_or_default(),
        );
      }
      KeyCode::Char('l') => {
        self.prompt = self.project_prompt(Target::ProjectLink, "Link", |p| {
          p.link.clone().unwrap_or_default()
        });
      }
      KeyCode::Char('m') => {
        self.prompt = self.project_prompt(Target::ProjectImage, "Image URL", |p| {
          p.image_url.clone().unwrap_or_default()
        });
      }
      KeyCode::Char('H') => self.remove_last_highlight(),
      KeyCode::Char('G') => self.remove_last_technology(),
      KeyCode::Char('O') => self.remove_last_collaborator(),
      KeyCode::Char('s') => {
        let dirty = self.session.is_dirty(self.focus);
        self.session.commit(self.focus);
        self.status_msg = if dirty {
          format!("Saved {}", self.focus)
        } else {
          format!("{} unchanged", self.focus)
        };
      }
      KeyCode::Esc => {
        self.session.cancel(self.focus);
        self.status_msg = format!("Discarded {} edits", self.focus);
      }
      _ => {}
    }
  }

  // ── Editing actions ───────────────────────────────────────────────────────

  fn edit_prompt(&self) -> Option<Prompt> {
    let s = &self.session;
    match self.focus {
      Section::Profile => self.profile_field().map(|field| {
        Prompt::prefilled(
          Target::Profile(field),
          field.to_string(),
          s.profile.draft().get(field),
        )
      }),
      Section::Contact => self.contact_field().map(|field| {
        Prompt::prefilled(
          Target::Contact(field),
          field.to_string(),
          s.contact.draft().get(field),
        )
      }),
      Section::Skills => {
        let skill = s.skills.items().get(self.cursor)?;
        Some(Prompt::prefilled(
          Target::SkillName(skill.id.clone()),
          "Skill",
          &skill.name,
        ))
      }
      Section::Timeline => {
        let order = s.timeline.display_order();
        let event = order.get(self.cursor)?;
        Some(Prompt::prefilled(
          Target::EventTitle(event.id.clone()),
          "Title",
          &event.title,
        ))
      }
      Section::Projects => {
        let project = s.projects.items().get(self.cursor)?;
        Some(Prompt::prefilled(
          Target::ProjectName(project.id.clone()),
          "Project",
          &project.name,
        ))
      }
    }
  }

  /// Prefilled prompt for one field of the selected timeline event.
  fn event_prompt(
    &self,
    target: fn(ItemId) -> Target,
    label: &str,
    value: impl Fn(&TimelineEvent) -> String,
  ) -> Option<Prompt> {
    if self.focus != Section::Timeline {
      return None;
    }
    let order = self.session.timeline.display_order();
    let event = order.get(self.cursor)?;
    Some(Prompt::prefilled(target(event.id.clone()), label, &value(event)))
  }

  /// Prefilled prompt for one field of the selected project.
  fn project_prompt(
    &self,
    target: fn(ItemId) -> Target,
    label: &str,
    value: impl Fn(&Project) -> String,
  ) -> Option<Prompt> {
    if self.focus != Section::Projects {
      return None;
    }
    let project = self.session.projects.items().get(self.cursor)?;
    Some(Prompt::prefilled(target(project.id.clone()), label, &value(project)))
  }

  fn add_prompt(&self) -> Option<Prompt> {
    match self.focus {
      Section::Skills => Some(Prompt::new(Target::NewSkill, "New skill")),
      Section::Timeline => Some(Prompt::new(Target::NewEvent, "New event")),
      Section::Projects => Some(Prompt::new(Target::NewProject, "New project")),
      Section::Profile | Section::Contact => None,
    }
  }

  fn submit(&mut self, prompt: Prompt) {
    let Prompt { target, buffer, .. } = prompt;
    let selected_event = match self.focus {
      Section::Timeline => self.selected_event(),
      _ => None,
    };
    let s = &mut self.session;
    let outcome = match target {
      Target::Profile(field) => {
        Outcome::Edited(s.profile.set_field(FieldEdit::new(field, buffer)))
      }
      Target::Contact(field) => {
        Outcome::Edited(s.contact.set_field(FieldEdit::new(field, buffer)))
      }
      Target::SkillName(id) => Outcome::Edited(
        s.skills
          .set_field(ListEdit::new(id, SkillChange::Name(buffer))),
      ),
      Target::EventTitle(id) => Outcome::Edited(
        s.timeline
          .set_field(ListEdit::new(id, EventChange::Title(buffer))),
      ),
      Target::EventDate(id) => Outcome::Edited(
        s.timeline
          .set_field(ListEdit::new(id, EventChange::Date(buffer))),
      ),
      Target::EventDescription(id) => Outcome::Edited(
        s.timeline
          .set_field(ListEdit::new(id, EventChange::Description(buffer))),
      ),
      Target::EventIcon(id) => Outcome::Edited(
        s.timeline
          .set_field(ListEdit::new(id, EventChange::Icon(optional(buffer)))),
      ),
      Target::ProjectName(id) => Outcome::Edited(
        s.projects
          .set_field(ListEdit::new(id, ProjectChange::Name(buffer))),
      ),
      Target::ProjectDescription(id) => Outcome::Edited(
        s.projects
          .set_field(ListEdit::new(id, ProjectChange::Description(buffer))),
      ),
      Target::ProjectStart(id) => Outcome::Edited(
        s.projects
          .set_field(ListEdit::new(id, ProjectChange::StartDate(buffer))),
      ),
      Target::ProjectEnd(id) => Outcome::Edited(s.projects.set_field(
        ListEdit::new(id, ProjectChange::EndDate(optional(buffer))),
      )),
      Target::ProjectLink(id) => Outcome::Edited(
        s.projects
          .set_field(ListEdit::new(id, ProjectChange::Link(optional(buffer)))),
      ),
      Target::ProjectImage(id) => Outcome::Edited(s.projects.set_field(
        ListEdit::new(id, ProjectChange::ImageUrl(optional(buffer))),
      )),
      Target::Highlight(id) => Outcome::Edited(
        s.timeline.add_highlight(&Parent::Existing(id), &buffer),
      ),
      Target::Technology(id) => Outcome::Edited(
        s.projects.add_technology(&Parent::Existing(id), &buffer),
      ),
      Target::Collaborator(id) => Outcome::Edited(match buffer.split_once(',') {
        Some((name, role)) => s
          .projects
          .add_collaborator(
            &Parent::Existing(id),
            Collaborator::new(name.trim(), role.trim()),
          )
          .is_some(),
        None => false,
      }),

      Target::NewSkill => {
        s.skills.pending_mut().name = buffer;
        Outcome::Finish(Section::Skills)
      }
      Target::NewEvent => {
        *s.timeline.pending_mut() = TimelineEvent {
          title: buffer,
          ..TimelineEvent::default()
        };
        let pending = s.timeline.pending();
        if pending.title.trim().is_empty() {
          Outcome::Finish(Section::Timeline)
        } else {
          Outcome::Next(Prompt::prefilled(
            Target::NewEventDate,
            "Date (YYYY-MM-DD)",
            &pending.date,
          ))
        }
      }
      Target::NewEventDate => {
        s.timeline.pending_mut().date = buffer;
        Outcome::Next(Prompt::new(Target::NewEventDescription, "Description"))
      }
      Target::NewEventDescription => {
        s.timeline.pending_mut().description = buffer;
        Outcome::Finish(Section::Timeline)
      }
      Target::NewProject => {
        *s.projects.pending_mut() = Project {
          name: buffer,
          ..Project::default()
        };
        let pending = s.projects.pending();
        if pending.name.trim().is_empty() {
          Outcome::Finish(Section::Projects)
        } else {
          Outcome::Next(Prompt::prefilled(
            Target::NewProjectStart,
            "Start date",
            &pending.start_date,
          ))
        }
      }
      Target::NewProjectStart => {
        s.projects.pending_mut().start_date = buffer;
        Outcome::Next(Prompt::new(Target::NewProjectTech, "Technologies (a, b)"))
      }
      Target::NewProjectTech => {
        for tag in buffer.split(',') {
          s.projects.add_technology(&Parent::Pending, tag.trim());
        }
        Outcome::Next(Prompt::new(
          Target::NewProjectTeam,
          "Team (name, role; name, role)",
        ))
      }
      Target::NewProjectTeam => {
        for member in buffer.split(';') {
          if let Some((name, role)) = member.split_once(',') {
            s.projects.add_collaborator(
              &Parent::Pending,
              Collaborator::new(name.trim(), role.trim()),
            );
          }
        }
        Outcome::Finish(Section::Projects)
      }
    };

    match outcome {
      Outcome::Edited(applied) => {
        // A new date can move the event; keep the cursor on it.
        if let Some(id) = &selected_event {
          self.select(id);
        }
        self.status_msg = if applied {
          "Updated".into()
        } else {
          "Ignored: nothing entered".into()
        };
      }
      Outcome::Next(prompt) => self.prompt = Some(prompt),
      Outcome::Finish(section) => self.add_pending(section),
    }
  }

  /// Add the item built up in `section`'s new-item form and select it.
  fn add_pending(&mut self, section: Section) {
    let s = &mut self.session;
    let (name, added) = match section {
      Section::Skills => (s.skills.pending().name.clone(), s.skills.add_pending()),
      Section::Timeline => {
        (s.timeline.pending().title.clone(), s.timeline.add_pending())
      }
      Section::Projects => {
        (s.projects.pending().name.clone(), s.projects.add_pending())
      }
      Section::Profile | Section::Contact => return,
    };
    match added {
      Some(id) => {
        self.select(&id);
        self.status_msg = format!("Added {name}");
      }
      None => self.status_msg = "Ignored: nothing entered".into(),
    }
  }

  /// Move the cursor onto a newly added item.
  fn select(&mut self, id: &ItemId) {
    let found = match self.focus {
      Section::Skills => {
        self.session.skills.items().iter().position(|s| &s.id == id)
      }
      Section::Timeline => self
        .session
        .timeline
        .display_order()
        .iter()
        .position(|e| &e.id == id),
      Section::Projects => {
        self.session.projects.items().iter().position(|p| &p.id == id)
      }
      Section::Profile | Section::Contact => None,
    };
    if let Some(row) = found {
      self.cursor = row;
    }
  }

  fn remove_selected(&mut self) {
    let removed = match self.focus {
      Section::Skills => self
        .selected_skill()
        .and_then(|id| self.session.skills.remove_item(id))
        .map(|skill| skill.name),
      Section::Timeline => self
        .selected_event()
        .and_then(|id| self.session.timeline.remove_item(id))
        .map(|event| event.title),
      Section::Projects => self
        .selected_project_id()
        .and_then(|id| self.session.projects.remove_item(id))
        .map(|project| project.name),
      Section::Profile | Section::Contact => None,
    };
    if let Some(name) = removed {
      self.status_msg = format!("Removed {name}");
    }
  }

  fn step_level(&mut self, delta: i16) {
    if self.focus != Section::Skills {
      return;
    }
    let Some(skill) = self.session.skills.items().get(self.cursor) else {
      return;
    };
    let level = (i16::from(skill.level) + delta).clamp(0, 100) as u8;
    let id = skill.id.clone();
    self
      .session
      .skills
      .set_field(ListEdit::new(id, SkillChange::Level(level)));
  }

  fn cycle_kind(&mut self) {
    let s = &mut self.session;
    match self.focus {
      Section::Skills => {
        if let Some(skill) = s.skills.items().get(self.cursor) {
          let edit =
            ListEdit::new(skill.id.clone(), SkillChange::Category(skill.category.cycle()));
          s.skills.set_field(edit);
        }
      }
      Section::Timeline => {
        let order = s.timeline.display_order();
        if let Some(event) = order.get(self.cursor) {
          let edit =
            ListEdit::new(event.id.clone(), EventChange::Kind(event.kind.cycle()));
          s.timeline.set_field(edit);
        }
      }
      _ => {}
    }
  }

  fn remove_last_highlight(&mut self) {
    if self.focus != Section::Timeline {
      return;
    }
    let last = {
      let order = self.session.timeline.display_order();
      order.get(self.cursor).and_then(|event| {
        let index = event.highlights.len().checked_sub(1)?;
        Some((event.id.clone(), index))
      })
    };
    if let Some((id, index)) = last {
      self
        .session
        .timeline
        .remove_highlight(&Parent::Existing(id), index);
    }
  }

  fn remove_last_technology(&mut self) {
    if self.focus != Section::Projects {
      return;
    }
    let last = self.session.projects.items().get(self.cursor).and_then(|p| {
      let index = p.technologies.len().checked_sub(1)?;
      Some((p.id.clone(), index))
    });
    if let Some((id, index)) = last {
      self
        .session
        .projects
        .remove_technology(&Parent::Existing(id), index);
    }
  }

  fn remove_last_collaborator(&mut self) {
    if self.focus != Section::Projects {
      return;
    }
    let last = self.session.projects.items().get(self.cursor).and_then(|p| {
      let collaborator = p.collaborators.last()?;
      Some((p.id.clone(), collaborator.id.clone()))
    });
    if let Some((id, collaborator)) = last {
      self
        .session
        .projects
        .remove_collaborator(&Parent::Existing(id), &collaborator);
    }
  }
}
