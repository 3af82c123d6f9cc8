//! Record types: the employee profile and everything it contains.
//!
//! Field names serialise as camelCase; that is the shape of a record file.

use chrono::Local;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::{id::ItemId, list};

// ─── Skills ──────────────────────────────────────────────────────────────────

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
  Display, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SkillCategory {
  #[default]
  Technical,
  Soft,
  Language,
  Other,
}

impl SkillCategory {
  /// The next category in declaration order, wrapping around.
  pub fn cycle(self) -> Self {
    match self {
      Self::Technical => Self::Soft,
      Self::Soft => Self::Language,
      Self::Language => Self::Other,
      Self::Other => Self::Technical,
    }
  }
}

/// A named proficiency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
  /// Profile documents usually omit skill IDs; one is minted on load.
  #[serde(default = "fresh_skill_id")]
  pub id:       ItemId,
  pub name:     String,
  /// 0–100 as delivered by the input widget. Not re-validated.
  pub level:    u8,
  pub category: SkillCategory,
}

fn fresh_skill_id() -> ItemId { ItemId::mint("skill") }

fn fresh_event_id() -> ItemId { ItemId::mint("event") }

fn fresh_project_id() -> ItemId { ItemId::mint("project") }

fn fresh_collab_id() -> ItemId { ItemId::mint("collab") }

impl Default for Skill {
  fn default() -> Self {
    Self {
      id:       ItemId::default(),
      name:     String::new(),
      level:    50,
      category: SkillCategory::Technical,
    }
  }
}

// ─── Timeline ────────────────────────────────────────────────────────────────

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
  Display, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EventKind {
  Education,
  #[default]
  Work,
  Achievement,
  Certification,
}

impl EventKind {
  pub fn cycle(self) -> Self {
    match self {
      Self::Education => Self::Work,
      Self::Work => Self::Achievement,
      Self::Achievement => Self::Certification,
      Self::Certification => Self::Education,
    }
  }
}

/// One entry on the career timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
  #[serde(default = "fresh_event_id")]
  pub id:          ItemId,
  pub title:       String,
  pub description: String,
  /// Raw date string, normally ISO `YYYY-MM-DD`. See [`crate::date`].
  pub date:        String,
  #[serde(rename = "type")]
  pub kind:        EventKind,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub icon:        Option<String>,
  #[serde(default)]
  pub highlights:  Vec<String>,
}

impl Default for TimelineEvent {
  /// A blank work event dated today.
  fn default() -> Self {
    Self {
      id:          ItemId::default(),
      title:       String::new(),
      description: String::new(),
      date:        today(),
      kind:        EventKind::Work,
      icon:        None,
      highlights:  Vec::new(),
    }
  }
}

// ─── Projects ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collaborator {
  #[serde(default = "fresh_collab_id")]
  pub id:         ItemId,
  pub name:       String,
  pub role:       String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub avatar_url: Option<String>,
}

impl Collaborator {
  pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      role: role.into(),
      ..Self::default()
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
  #[serde(default = "fresh_project_id")]
  pub id:            ItemId,
  pub name:          String,
  pub description:   String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub image_url:     Option<String>,
  #[serde(default)]
  pub technologies:  Vec<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub link:          Option<String>,
  pub start_date:    String,
  /// `None` while the project is ongoing.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub end_date:      Option<String>,
  #[serde(default)]
  pub collaborators: Vec<Collaborator>,
}

impl Default for Project {
  /// A blank project starting today.
  fn default() -> Self {
    Self {
      id:            ItemId::default(),
      name:          String::new(),
      description:   String::new(),
      image_url:     None,
      technologies:  Vec::new(),
      link:          None,
      start_date:    today(),
      end_date:      None,
      collaborators: Vec::new(),
    }
  }
}

// ─── Sidebar ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkPreference {
  pub style:         String,
  pub communication: String,
  pub environment:   String,
  pub working_hours: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
  pub id:          ItemId,
  pub name:        String,
  pub description: String,
  pub image_url:   String,
  pub earned_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub linkedin:  Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub github:    Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub twitter:   Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub portfolio: Option<String>,
}

// ─── Employee ────────────────────────────────────────────────────────────────

/// The authoritative record. Only [`crate::container::RecordContainer`]
/// holds one, and it only changes through [`EmployeePatch`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
  pub id:              String,
  pub first_name:      String,
  pub last_name:       String,
  pub position:        String,
  pub department:      String,
  pub avatar_url:      String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub cover_image_url: Option<String>,
  pub email:           String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub phone:           Option<String>,
  pub location:        String,
  pub bio:             String,
  pub join_date:       String,
  #[serde(default)]
  pub skills:          Vec<Skill>,
  #[serde(default)]
  pub timeline:        Vec<TimelineEvent>,
  #[serde(default)]
  pub projects:        Vec<Project>,
  #[serde(default)]
  pub work_preference: WorkPreference,
  #[serde(default)]
  pub badges:          Vec<Badge>,
  #[serde(default)]
  pub social_links:    SocialLinks,
}

impl Employee {
  pub fn full_name(&self) -> String {
    format!("{} {}", self.first_name, self.last_name)
      .trim()
      .to_string()
  }

  /// Shallow merge: every key present in `patch` replaces the current value
  /// wholesale; absent keys are left alone.
  pub fn merge(&mut self, patch: EmployeePatch) {
    let EmployeePatch {
      first_name,
      last_name,
      position,
      department,
      avatar_url,
      cover_image_url,
      email,
      phone,
      location,
      bio,
      join_date,
      skills,
      timeline,
      projects,
      work_preference,
      badges,
      social_links,
    } = patch;

    replace(&mut self.first_name, first_name);
    replace(&mut self.last_name, last_name);
    replace(&mut self.position, position);
    replace(&mut self.department, department);
    replace(&mut self.avatar_url, avatar_url);
    replace(&mut self.cover_image_url, cover_image_url);
    replace(&mut self.email, email);
    replace(&mut self.phone, phone);
    replace(&mut self.location, location);
    replace(&mut self.bio, bio);
    replace(&mut self.join_date, join_date);
    replace(&mut self.skills, skills);
    replace(&mut self.timeline, timeline);
    replace(&mut self.projects, projects);
    replace(&mut self.work_preference, work_preference);
    replace(&mut self.badges, badges);
    replace(&mut self.social_links, social_links);
  }

  /// Re-mint any ID that repeats within its list (skills, timeline, projects,
  /// each project's collaborators). Returns how many were replaced.
  pub fn normalize_ids(&mut self) -> usize {
    let mut reminted = list::remint_duplicates(&mut self.skills)
      + list::remint_duplicates(&mut self.timeline)
      + list::remint_duplicates(&mut self.projects);
    for project in &mut self.projects {
      reminted += list::remint_duplicates(&mut project.collaborators);
    }
    reminted
  }
}

fn replace<T>(slot: &mut T, value: Option<T>) {
  if let Some(value) = value {
    *slot = value;
  }
}

// ─── EmployeePatch ───────────────────────────────────────────────────────────

/// A partial update: the only data that flows from an editor back to the
/// record owner. `Some` means "overwrite this key".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeePatch {
  pub first_name:      Option<String>,
  pub last_name:       Option<String>,
  pub position:        Option<String>,
  pub department:      Option<String>,
  pub avatar_url:      Option<String>,
  pub cover_image_url: Option<Option<String>>,
  pub email:           Option<String>,
  pub phone:           Option<Option<String>>,
  pub location:        Option<String>,
  pub bio:             Option<String>,
  pub join_date:       Option<String>,
  pub skills:          Option<Vec<Skill>>,
  pub timeline:        Option<Vec<TimelineEvent>>,
  pub projects:        Option<Vec<Project>>,
  pub work_preference: Option<WorkPreference>,
  pub badges:          Option<Vec<Badge>>,
  pub social_links:    Option<SocialLinks>,
}

impl EmployeePatch {
  /// Names of the keys this patch overwrites, in record order.
  pub fn keys(&self) -> Vec<&'static str> {
    [
      ("firstName", self.first_name.is_some()),
      ("lastName", self.last_name.is_some()),
      ("position", self.position.is_some()),
      ("department", self.department.is_some()),
      ("avatarUrl", self.avatar_url.is_some()),
      ("coverImageUrl", self.cover_image_url.is_some()),
      ("email", self.email.is_some()),
      ("phone", self.phone.is_some()),
      ("location", self.location.is_some()),
      ("bio", self.bio.is_some()),
      ("joinDate", self.join_date.is_some()),
      ("skills", self.skills.is_some()),
      ("timeline", self.timeline.is_some()),
      ("projects", self.projects.is_some()),
      ("workPreference", self.work_preference.is_some()),
      ("badges", self.badges.is_some()),
      ("socialLinks", self.social_links.is_some()),
    ]
    .into_iter()
    .filter_map(|(key, present)| present.then_some(key))
    .collect()
  }

  pub fn is_empty(&self) -> bool { self.keys().is_empty() }
}

/// Today's local date as `YYYY-MM-DD`, the default for new dated items.
pub fn today() -> String {
  Local::now().date_naive().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::fixture;

  #[test]
  fn merge_overwrites_only_present_keys() {
    let original = fixture::sample_employee();
    let mut merged = original.clone();
    merged.merge(EmployeePatch {
      bio: Some("New bio".into()),
      skills: Some(Vec::new()),
      ..EmployeePatch::default()
    });

    assert_eq!(merged.bio, "New bio");
    assert!(merged.skills.is_empty());

    // Everything else untouched.
    assert_eq!(merged.first_name, original.first_name);
    assert_eq!(merged.timeline, original.timeline);
    assert_eq!(merged.projects, original.projects);
    assert_eq!(merged.social_links, original.social_links);
  }

  #[test]
  fn merge_can_clear_optional_fields() {
    let mut employee = fixture::sample_employee();
    assert!(employee.phone.is_some());
    employee.merge(EmployeePatch {
      phone: Some(None),
      ..EmployeePatch::default()
    });
    assert!(employee.phone.is_none());
  }

  #[test]
  fn empty_patch_is_identity() {
    let original = fixture::sample_employee();
    let mut merged = original.clone();
    merged.merge(EmployeePatch::default());
    assert_eq!(merged, original);
    assert!(EmployeePatch::default().is_empty());
  }

  #[test]
  fn patch_keys_list_present_fields() {
    let patch = EmployeePatch {
      email: Some("a@b.c".into()),
      social_links: Some(SocialLinks::default()),
      ..EmployeePatch::default()
    };
    assert_eq!(patch.keys(), vec!["email", "socialLinks"]);
  }

  #[test]
  fn skill_ids_are_minted_when_missing() {
    let json = r#"{"name": "React", "level": 90, "category": "technical"}"#;
    let skill: Skill = serde_json::from_str(json).unwrap();
    assert!(skill.id.as_str().starts_with("skill-"));
    assert_eq!(skill.level, 90);
  }

  #[test]
  fn nested_ids_are_minted_when_missing() {
    let json = r#"{
      "name": "Atlas",
      "description": "",
      "startDate": "2021-02-01",
      "collaborators": [{ "name": "Wei", "role": "Designer" }]
    }"#;
    let project: Project = serde_json::from_str(json).unwrap();
    assert!(project.id.as_str().starts_with("project-"));
    assert!(project.collaborators[0].id.as_str().starts_with("collab-"));

    let json = r#"{"title": "Joined", "description": "", "date": "2019-01-01", "type": "work"}"#;
    let event: TimelineEvent = serde_json::from_str(json).unwrap();
    assert!(event.id.as_str().starts_with("event-"));
  }

  #[test]
  fn normalize_ids_remints_repeats_in_every_list() {
    let mut employee = fixture::sample_employee();
    employee.skills[1].id = employee.skills[0].id.clone();
    employee.timeline[2].id = employee.timeline[0].id.clone();
    let first = employee.projects[0].collaborators[0].id.clone();
    employee.projects[0].collaborators[1].id = first.clone();

    assert_eq!(employee.normalize_ids(), 3);
    assert_ne!(employee.skills[0].id, employee.skills[1].id);
    assert_ne!(employee.timeline[0].id, employee.timeline[2].id);
    let people = &employee.projects[0].collaborators;
    assert_eq!(people[0].id, first);
    assert_ne!(people[1].id, first);
    assert_eq!(employee.normalize_ids(), 0);
  }

  #[test]
  fn event_kind_uses_type_key() {
    let json = r#"{
      "id": "timeline3",
      "title": "Certification",
      "description": "",
      "date": "2018-05-20",
      "type": "certification"
    }"#;
    let event: TimelineEvent = serde_json::from_str(json).unwrap();
    assert_eq!(event.kind, EventKind::Certification);
    assert!(event.highlights.is_empty());
  }

  #[test]
  fn categories_cycle_back_to_start() {
    let mut c = SkillCategory::Technical;
    for _ in 0..4 {
      c = c.cycle();
    }
    assert_eq!(c, SkillCategory::Technical);
    assert_eq!(EventKind::Certification.cycle(), EventKind::Education);
  }
}
