//! Career timeline events and their highlights.

use crate::{
  draft::{Collection, DraftEditor, ListEdit, Slice},
  list::{self, Parent},
  order,
  record::{Employee, EmployeePatch, EventKind, TimelineEvent},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventChange {
  Title(String),
  Description(String),
  Date(String),
  Kind(EventKind),
  Icon(Option<String>),
}

/// Events in insertion order. Display order comes from
/// [`Timeline::display_order`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timeline(pub Vec<TimelineEvent>);

impl Timeline {
  pub fn display_order(&self) -> Vec<&TimelineEvent> {
    order::timeline(&self.0)
  }
}

impl Slice for Timeline {
  type Edit = ListEdit<EventChange>;
  type Pending = TimelineEvent;

  const NAME: &'static str = "timeline";

  fn extract(record: &Employee) -> Self { Self(record.timeline.clone()) }

  fn into_patch(self) -> EmployeePatch {
    EmployeePatch {
      timeline: Some(self.0),
      ..EmployeePatch::default()
    }
  }

  fn apply(&mut self, edit: Self::Edit) -> bool {
    let Some(event) = list::find_mut(&mut self.0, &edit.at) else {
      return false;
    };
    match edit.change {
      EventChange::Title(title) => event.title = title,
      EventChange::Description(text) => event.description = text,
      EventChange::Date(date) => event.date = date,
      EventChange::Kind(kind) => event.kind = kind,
      EventChange::Icon(icon) => event.icon = icon,
    }
    true
  }
}

impl Collection for Timeline {
  type Item = TimelineEvent;

  fn items(&self) -> &[TimelineEvent] { &self.0 }

  fn items_mut(&mut self) -> &mut Vec<TimelineEvent> { &mut self.0 }
}

impl DraftEditor<Timeline> {
  /// Append a highlight to `parent`. Blank text and unknown parents are
  /// ignored.
  pub fn add_highlight(&mut self, parent: &Parent, text: &str) -> bool {
    self
      .parent_mut(parent)
      .is_some_and(|event| list::push_text(&mut event.highlights, text))
  }

  pub fn remove_highlight(
    &mut self,
    parent: &Parent,
    index: usize,
  ) -> Option<String> {
    self
      .parent_mut(parent)
      .and_then(|event| list::remove_text(&mut event.highlights, index))
  }

  pub fn display_order(&self) -> Vec<&TimelineEvent> {
    self.draft().display_order()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{container::RecordContainer, fixture, id::ItemId};

  fn editor() -> (RecordContainer, DraftEditor<Timeline>) {
    let mut container = RecordContainer::new(fixture::sample_employee());
    container.toggle_edit();
    let editor = DraftEditor::new(&container);
    (container, editor)
  }

  #[test]
  fn highlights_on_existing_events() {
    let (container, mut editor) = editor();
    let parent = Parent::Existing(ItemId::from("timeline3"));

    assert!(editor.add_highlight(&parent, "Scored 98%"));
    assert!(!editor.add_highlight(&parent, "  "));
    let event = editor.items().iter().find(|e| e.id.as_str() == "timeline3");
    assert_eq!(event.unwrap().highlights, ["Scored 98%"]);

    assert_eq!(
      editor.remove_highlight(&parent, 0).as_deref(),
      Some("Scored 98%")
    );
    assert!(editor.remove_highlight(&parent, 0).is_none());
    assert!(container.record().timeline[2].highlights.is_empty());
  }

  #[test]
  fn highlights_on_unknown_event_are_ignored() {
    let (_, mut editor) = editor();
    let before = editor.draft().clone();
    let parent = Parent::Existing(ItemId::from("ghost"));
    assert!(!editor.add_highlight(&parent, "boo"));
    assert!(editor.remove_highlight(&parent, 0).is_none());
    assert_eq!(editor.draft(), &before);
  }

  #[test]
  fn highlights_on_pending_event_travel_with_it() {
    let (_, mut editor) = editor();
    editor.pending_mut().title = "Promoted".into();
    editor.pending_mut().date = "2023-01-01".into();
    assert!(editor.add_highlight(&Parent::Pending, "Team of 8"));

    let id = editor.add_pending().unwrap();
    let added = editor.items().iter().find(|e| e.id == id).unwrap();
    assert_eq!(added.highlights, ["Team of 8"]);
    assert!(editor.pending().highlights.is_empty());
    assert_eq!(editor.display_order()[0].id, id);
  }

  #[test]
  fn edit_changes_date_and_kind() {
    let (_, mut editor) = editor();
    let id = ItemId::from("timeline4");
    assert!(editor.set_field(ListEdit::new(
      id.clone(),
      EventChange::Date("2030-01-01".into())
    )));
    assert!(editor.set_field(ListEdit::new(
      id.clone(),
      EventChange::Kind(EventKind::Achievement)
    )));
    assert_eq!(editor.display_order()[0].id, id);
    assert_eq!(editor.display_order()[0].kind, EventKind::Achievement);
  }
}
