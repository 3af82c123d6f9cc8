//! Header fields: name, position, bio and imagery.

use strum::{Display, EnumIter};

use crate::{
  draft::{FieldEdit, Slice},
  record::{Employee, EmployeePatch},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "title_case")]
pub enum ProfileField {
  FirstName,
  LastName,
  Position,
  Department,
  Bio,
  Location,
  AvatarUrl,
  CoverImageUrl,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileFields {
  pub first_name:      String,
  pub last_name:       String,
  pub position:        String,
  pub department:      String,
  pub bio:             String,
  pub location:        String,
  pub avatar_url:      String,
  /// Empty when the record has no cover image.
  pub cover_image_url: String,
}

impl ProfileFields {
  pub fn get(&self, field: ProfileField) -> &str {
    match field {
      ProfileField::FirstName => &self.first_name,
      ProfileField::LastName => &self.last_name,
      ProfileField::Position => &self.position,
      ProfileField::Department => &self.department,
      ProfileField::Bio => &self.bio,
      ProfileField::Location => &self.location,
      ProfileField::AvatarUrl => &self.avatar_url,
      ProfileField::CoverImageUrl => &self.cover_image_url,
    }
  }

  fn slot_mut(&mut self, field: ProfileField) -> &mut String {
    match field {
      ProfileField::FirstName => &mut self.first_name,
      ProfileField::LastName => &mut self.last_name,
      ProfileField::Position => &mut self.position,
      ProfileField::Department => &mut self.department,
      ProfileField::Bio => &mut self.bio,
      ProfileField::Location => &mut self.location,
      ProfileField::AvatarUrl => &mut self.avatar_url,
      ProfileField::CoverImageUrl => &mut self.cover_image_url,
    }
  }
}

impl Slice for ProfileFields {
  type Edit = FieldEdit<ProfileField>;
  type Pending = ();

  const NAME: &'static str = "profile";

  fn extract(record: &Employee) -> Self {
    Self {
      first_name:      record.first_name.clone(),
      last_name:       record.last_name.clone(),
      position:        record.position.clone(),
      department:      record.department.clone(),
      bio:             record.bio.clone(),
      location:        record.location.clone(),
      avatar_url:      record.avatar_url.clone(),
      cover_image_url: record.cover_image_url.clone().unwrap_or_default(),
    }
  }

  fn into_patch(self) -> EmployeePatch {
    EmployeePatch {
      first_name: Some(self.first_name),
      last_name: Some(self.last_name),
      position: Some(self.position),
      department: Some(self.department),
      bio: Some(self.bio),
      location: Some(self.location),
      avatar_url: Some(self.avatar_url),
      cover_image_url: Some(super::non_empty(self.cover_image_url)),
      ..EmployeePatch::default()
    }
  }

  fn apply(&mut self, edit: Self::Edit) -> bool {
    *self.slot_mut(edit.field) = edit.value;
    true
  }
}

#[cfg(test)]
mod tests {
  use strum::IntoEnumIterator;

  use super::*;
  use crate::fixture;

  #[test]
  fn extract_then_patch_is_lossless() {
    let employee = fixture::sample_employee();
    let mut merged = employee.clone();
    merged.merge(ProfileFields::extract(&employee).into_patch());
    assert_eq!(merged, employee);
  }

  #[test]
  fn every_field_is_settable() {
    let mut fields = ProfileFields::default();
    for field in ProfileField::iter() {
      assert!(fields.apply(FieldEdit::new(field, field.to_string())));
      assert_eq!(fields.get(field), field.to_string());
    }
  }

  #[test]
  fn blank_cover_image_clears_it() {
    let mut fields = ProfileFields::extract(&fixture::sample_employee());
    fields.apply(FieldEdit::new(ProfileField::CoverImageUrl, ""));
    assert_eq!(fields.into_patch().cover_image_url, Some(None));
  }

  #[test]
  fn field_labels() {
    assert_eq!(ProfileField::CoverImageUrl.to_string(), "Cover Image Url");
    assert_eq!(ProfileField::Bio.to_string(), "Bio");
  }

  #[test]
  fn patch_leaves_collections_alone() {
    let patch = ProfileFields::default().into_patch();
    assert!(patch.skills.is_none());
    assert!(patch.email.is_none());
  }
}
