//! The project gallery, with technology tags and collaborators.

use crate::{
  draft::{Collection, DraftEditor, ListEdit, Slice},
  id::ItemId,
  list::{self, ItemRef, Parent},
  record::{Collaborator, Employee, EmployeePatch, Project},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectChange {
  Name(String),
  Description(String),
  ImageUrl(Option<String>),
  Link(Option<String>),
  StartDate(String),
  /// `None` marks the project as ongoing.
  EndDate(Option<String>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Projects(pub Vec<Project>);

impl Slice for Projects {
  type Edit = ListEdit<ProjectChange>;
  type Pending = Project;

  const NAME: &'static str = "projects";

  fn extract(record: &Employee) -> Self { Self(record.projects.clone()) }

  fn into_patch(self) -> EmployeePatch {
    EmployeePatch {
      projects: Some(self.0),
      ..EmployeePatch::default()
    }
  }

  fn apply(&mut self, edit: Self::Edit) -> bool {
    let Some(project) = list::find_mut(&mut self.0, &edit.at) else {
      return false;
    };
    match edit.change {
      ProjectChange::Name(name) => project.name = name,
      ProjectChange::Description(text) => project.description = text,
      ProjectChange::ImageUrl(url) => project.image_url = url,
      ProjectChange::Link(link) => project.link = link,
      ProjectChange::StartDate(date) => project.start_date = date,
      ProjectChange::EndDate(date) => project.end_date = date,
    }
    true
  }
}

impl Collection for Projects {
  type Item = Project;

  fn items(&self) -> &[Project] { &self.0 }

  fn items_mut(&mut self) -> &mut Vec<Project> { &mut self.0 }
}

impl DraftEditor<Projects> {
  pub fn add_technology(&mut self, parent: &Parent, tag: &str) -> bool {
    self
      .parent_mut(parent)
      .is_some_and(|project| list::push_text(&mut project.technologies, tag))
  }

  pub fn remove_technology(
    &mut self,
    parent: &Parent,
    index: usize,
  ) -> Option<String> {
    self
      .parent_mut(parent)
      .and_then(|project| list::remove_text(&mut project.technologies, index))
  }

  /// Add `collaborator` under a fresh ID. Both name and role are required.
  pub fn add_collaborator(
    &mut self,
    parent: &Parent,
    collaborator: Collaborator,
  ) -> Option<ItemId> {
    self
      .parent_mut(parent)
      .and_then(|project| list::insert(&mut project.collaborators, collaborator))
  }

  pub fn remove_collaborator(
    &mut self,
    parent: &Parent,
    id: &ItemId,
  ) -> Option<Collaborator> {
    self.parent_mut(parent).and_then(|project| {
      list::remove(&mut project.collaborators, &ItemRef::from(id))
    })
  }
}
