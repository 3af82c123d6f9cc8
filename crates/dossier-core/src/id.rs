//! Stable identifiers for list items.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifies one element within its containing list (a skill, a timeline
/// event, a project, a collaborator).
///
/// IDs from a loaded record are kept verbatim (`"timeline1"`, `"c4"`); IDs
/// minted inside a draft take the form `<prefix>-<uuid>`.
#[derive(
  Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
  Deserialize,
)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
  pub fn new(id: impl Into<String>) -> Self { Self(id.into()) }

  /// A fresh random ID with the given prefix.
  pub fn mint(prefix: &str) -> Self {
    Self(format!("{prefix}-{}", Uuid::new_v4().simple()))
  }

  /// Mint an ID that `taken` does not claim.
  pub fn mint_unique(
    prefix: &str,
    mut taken: impl FnMut(&ItemId) -> bool,
  ) -> Self {
    loop {
      let id = Self::mint(prefix);
      if !taken(&id) {
        return id;
      }
    }
  }

  pub fn as_str(&self) -> &str { &self.0 }

  /// Placeholder IDs carried by items that have not been added to a list yet.
  pub fn is_unassigned(&self) -> bool { self.0.is_empty() }
}

impl fmt::Display for ItemId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<&str> for ItemId {
  fn from(s: &str) -> Self { Self(s.to_string()) }
}
