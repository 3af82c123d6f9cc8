//! The skill list and its grouping for the proficiency chart.

use strum::IntoEnumIterator;

use crate::{
  draft::{Collection, ListEdit, Slice},
  list,
  record::{Employee, EmployeePatch, Skill, SkillCategory},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillChange {
  Name(String),
  /// Stored as given; bounds are the input widget's business.
  Level(u8),
  Category(SkillCategory),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Skills(pub Vec<Skill>);

impl Skills {
  /// Skills grouped by category in chart order, skipping empty groups.
  /// Order within a group follows the list.
  pub fn by_category(&self) -> Vec<(SkillCategory, Vec<&Skill>)> {
    group(&self.0)
  }
}

/// See [`Skills::by_category`].
pub fn group(skills: &[Skill]) -> Vec<(SkillCategory, Vec<&Skill>)> {
  SkillCategory::iter()
    .filter_map(|category| {
      let members: Vec<&Skill> =
        skills.iter().filter(|s| s.category == category).collect();
      (!members.is_empty()).then_some((category, members))
    })
    .collect()
}

impl Slice for Skills {
  type Edit = ListEdit<SkillChange>;
  type Pending = Skill;

  const NAME: &'static str = "skills";

  fn extract(record: &Employee) -> Self { Self(record.skills.clone()) }

  fn into_patch(self) -> EmployeePatch {
    EmployeePatch {
      skills: Some(self.0),
      ..EmployeePatch::default()
    }
  }

  fn apply(&mut self, edit: Self::Edit) -> bool {
    let Some(skill) = list::find_mut(&mut self.0, &edit.at) else {
      return false;
    };
    match edit.change {
      SkillChange::Name(name) => skill.name = name,
      SkillChange::Level(level) => skill.level = level,
      SkillChange::Category(category) => skill.category = category,
    }
    true
  }
}

impl Collection for Skills {
  type Item = Skill;

  fn items(&self) -> &[Skill] { &self.0 }

  fn items_mut(&mut self) -> &mut Vec<Skill> { &mut self.0 }
}
