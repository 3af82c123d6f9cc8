//! The five editable sections of a profile, each a [`Slice`] of the record.
//!
//! [`Slice`]: crate::draft::Slice

mod contact;
mod profile;
mod projects;
mod skills;
mod timeline;

pub use contact::{ContactField, ContactLinks};
pub use profile::{ProfileField, ProfileFields};
pub use projects::{ProjectChange, Projects};
pub use skills::{SkillChange, Skills};
pub use timeline::{EventChange, Timeline};

/// An empty string means "not set" for optional record fields. Whitespace is
/// a value like any other.
fn non_empty(value: String) -> Option<String> {
  (!value.is_empty()).then_some(value)
}
