//! Add/remove helpers shared by every list inside a draft.
//!
//! None of these report failure. Incomplete items and unknown addresses are
//! ignored, and the caller learns what happened from the return value only.

use std::collections::HashSet;

use crate::{
  id::ItemId,
  record::{Collaborator, Project, Skill, TimelineEvent},
};

// ─── Item ────────────────────────────────────────────────────────────────────

/// An element of an ID-addressed list.
pub trait Item: Clone {
  /// Prefix for IDs minted when the item is added to a draft.
  const ID_PREFIX: &'static str;

  fn id(&self) -> &ItemId;
  fn set_id(&mut self, id: ItemId);

  /// Whether every required field is non-blank.
  fn is_complete(&self) -> bool;
}

fn filled(s: &str) -> bool { !s.trim().is_empty() }

impl Item for Skill {
  const ID_PREFIX: &'static str = "skill";

  fn id(&self) -> &ItemId { &self.id }

  fn set_id(&mut self, id: ItemId) { self.id = id; }

  fn is_complete(&self) -> bool { filled(&self.name) }
}

impl Item for TimelineEvent {
  const ID_PREFIX: &'static str = "event";

  fn id(&self) -> &ItemId { &self.id }

  fn set_id(&mut self, id: ItemId) { self.id = id; }

  fn is_complete(&self) -> bool { filled(&self.title) }
}

impl Item for Project {
  const ID_PREFIX: &'static str = "project";

  fn id(&self) -> &ItemId { &self.id }

  fn set_id(&mut self, id: ItemId) { self.id = id; }

  fn is_complete(&self) -> bool { filled(&self.name) }
}

impl Item for Collaborator {
  const ID_PREFIX: &'static str = "collab";

  fn id(&self) -> &ItemId { &self.id }

  fn set_id(&mut self, id: ItemId) { self.id = id; }

  fn is_complete(&self) -> bool { filled(&self.name) && filled(&self.role) }
}

// ─── Addressing ──────────────────────────────────────────────────────────────

/// Addresses one element of a list, by ID or by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemRef {
  Id(ItemId),
  Index(usize),
}

impl From<ItemId> for ItemRef {
  fn from(id: ItemId) -> Self { Self::Id(id) }
}

impl From<&ItemId> for ItemRef {
  fn from(id: &ItemId) -> Self { Self::Id(id.clone()) }
}

impl From<usize> for ItemRef {
  fn from(index: usize) -> Self { Self::Index(index) }
}

/// The owner of a nested list (technologies, collaborators, highlights).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parent {
  /// An element already in the draft.
  Existing(ItemId),
  /// The item currently under construction in the editor's new-item form.
  Pending,
}

pub fn position<T: Item>(list: &[T], at: &ItemRef) -> Option<usize> {
  match at {
    ItemRef::Id(id) => list.iter().position(|item| item.id() == id),
    ItemRef::Index(index) => (*index < list.len()).then_some(*index),
  }
}

pub fn find_mut<'a, T: Item>(
  list: &'a mut [T],
  at: &ItemRef,
) -> Option<&'a mut T> {
  position(list, at).map(move |index| &mut list[index])
}

// ─── Mutation ────────────────────────────────────────────────────────────────

/// Append `item` under a freshly minted ID unique within `list`.
/// Returns the new ID, or `None` if a required field was blank.
pub fn insert<T: Item>(list: &mut Vec<T>, mut item: T) -> Option<ItemId> {
  if !item.is_complete() {
    tracing::debug!(prefix = T::ID_PREFIX, "ignored incomplete item");
    return None;
  }
  let id = ItemId::mint_unique(T::ID_PREFIX, |candidate| {
    list.iter().any(|existing| existing.id() == candidate)
  });
  item.set_id(id.clone());
  list.push(item);
  Some(id)
}

/// Remove the addressed element. Unknown addresses leave `list` untouched.
pub fn remove<T: Item>(list: &mut Vec<T>, at: &ItemRef) -> Option<T> {
  position(list, at).map(|index| list.remove(index))
}

/// Append a free-text entry (technology tag, highlight) unless it is blank.
/// The text is stored as given.
pub fn push_text(list: &mut Vec<String>, text: &str) -> bool {
  if !filled(text) {
    return false;
  }
  list.push(text.to_string());
  true
}

pub fn remove_text(list: &mut Vec<String>, index: usize) -> Option<String> {
  (index < list.len()).then(|| list.remove(index))
}

/// Give every repeated ID after its first occurrence a fresh one. Returns how
/// many items were re-minted.
pub fn remint_duplicates<T: Item>(list: &mut [T]) -> usize {
  let mut seen: HashSet<ItemId> = HashSet::with_capacity(list.len());
  let mut taken: HashSet<ItemId> =
    list.iter().map(|item| item.id().clone()).collect();
  let mut reminted = 0;
  for item in list.iter_mut() {
    if seen.insert(item.id().clone()) {
      continue;
    }
    let id = ItemId::mint_unique(T::ID_PREFIX, |candidate| {
      taken.contains(candidate)
    });
    taken.insert(id.clone());
    seen.insert(id.clone());
    item.set_id(id);
    reminted += 1;
  }
  reminted
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::record::SkillCategory;

  fn skill(name: &str, level: u8) -> Skill {
    Skill {
      name: name.into(),
      level,
      ..Skill::default()
    }
  }

  #[test]
  fn insert_assigns_fresh_ids() {
    let mut list = vec![];
    let a = insert(&mut list, skill("Go", 50)).unwrap();
    let b = insert(&mut list, skill("Rust", 70)).unwrap();
    assert_ne!(a, b);
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].id, a);
    assert!(a.as_str().starts_with("skill-"));
  }

  #[test]
  fn insert_replaces_caller_supplied_id() {
    let mut list = vec![];
    let mut s = skill("Go", 50);
    s.id = ItemId::from("mine");
    let id = insert(&mut list, s).unwrap();
    assert_ne!(id.as_str(), "mine");
  }

  #[test]
  fn blank_required_fields_are_ignored() {
    let mut list = vec![skill("React", 90)];
    assert!(insert(&mut list, skill("", 10)).is_none());
    assert!(insert(&mut list, skill("   \t", 10)).is_none());
    assert_eq!(list.len(), 1);

    let mut people = vec![];
    assert!(insert(&mut people, Collaborator::new("Wei", " ")).is_none());
    assert!(insert(&mut people, Collaborator::new("", "Designer")).is_none());
    assert!(insert(&mut people, Collaborator::new("Wei", "Designer")).is_some());
    assert_eq!(people.len(), 1);
  }

  #[test]
  fn remove_by_id_and_index() {
    let mut list = vec![skill("A", 1), skill("B", 2), skill("C", 3)];
    list[1].id = ItemId::from("b");

    let removed = remove(&mut list, &ItemRef::from(ItemId::from("b"))).unwrap();
    assert_eq!(removed.name, "B");
    let removed = remove(&mut list, &ItemRef::Index(0)).unwrap();
    assert_eq!(removed.name, "A");
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].category, SkillCategory::Technical);
  }

  #[test]
  fn remove_missing_is_noop() {
    let mut list = vec![skill("A", 1)];
    let before = list.clone();
    assert!(remove(&mut list, &ItemRef::Index(1)).is_none());
    assert!(remove(&mut list, &ItemRef::Id(ItemId::from("nope"))).is_none());
    assert_eq!(list, before);
  }

  #[test]
  fn remint_duplicates_keeps_first_occurrence() {
    let mut list = vec![skill("A", 1), skill("B", 2), skill("C", 3)];
    for s in &mut list {
      s.id = ItemId::from("dup");
    }
    list.push(skill("D", 4));
    list[3].id = ItemId::from("d");

    assert_eq!(remint_duplicates(&mut list), 2);
    assert_eq!(list[0].id.as_str(), "dup");
    assert!(list[1].id.as_str().starts_with("skill-"));
    assert_ne!(list[1].id, list[2].id);
    assert_eq!(list[3].id.as_str(), "d");
    assert_eq!(remint_duplicates(&mut list), 0);
  }

  #[test]
  fn text_entries() {
    let mut tags = vec![];
    assert!(!push_text(&mut tags, "  "));
    assert!(push_text(&mut tags, "React"));
    assert!(push_text(&mut tags, "D3.js"));
    assert_eq!(remove_text(&mut tags, 0).as_deref(), Some("React"));
    assert!(remove_text(&mut tags, 5).is_none());
    assert_eq!(tags, ["D3.js"]);
  }
}
