//! Where the initial record comes from.
//!
//! A source is asked for the record exactly once, at startup. Nothing in the
//! core fetches it again.

use std::path::PathBuf;

use crate::{Error, Result, fixture, record::Employee};

pub trait RecordSource {
  fn load(&self) -> Result<Employee>;
}

/// The built-in sample profile.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleRecord;

impl RecordSource for SampleRecord {
  fn load(&self) -> Result<Employee> { Ok(fixture::sample_employee()) }
}

/// A record stored as JSON, in the camelCase shape of [`Employee`].
#[derive(Debug, Clone)]
pub struct JsonFile(pub PathBuf);

impl RecordSource for JsonFile {
  fn load(&self) -> Result<Employee> {
    let raw = std::fs::read_to_string(&self.0).map_err(|source| Error::Io {
      path: self.0.clone(),
      source,
    })?;
    let mut employee: Employee = serde_json::from_str(&raw)?;
    let reminted = employee.normalize_ids();
    if reminted > 0 {
      tracing::warn!(
        path = %self.0.display(),
        reminted,
        "record repeated item IDs; re-minted"
      );
    }
    tracing::info!(
      path = %self.0.display(),
      employee = %employee.id,
      "loaded record"
    );
    Ok(employee)
  }
}

#[cfg(test)]
mod tests {
  use std::io::Write;

  use tempfile::NamedTempFile;

  use super::*;

  #[test]
  fn sample_record_loads() {
    let employee = SampleRecord.load().unwrap();
    assert_eq!(employee.id, "emp001");
    assert_eq!(employee.skills.len(), 11);
  }

  #[test]
  fn json_file_roundtrips_the_sample() {
    let sample = fixture::sample_employee();
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", serde_json::to_string_pretty(&sample).unwrap()).unwrap();

    let loaded = JsonFile(file.path().to_path_buf()).load().unwrap();
    assert_eq!(loaded, sample);
  }

  #[test]
  fn json_file_accepts_minimal_camel_case_records() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
      file,
      r#"{{
        "id": "emp002",
        "firstName": "Ada",
        "lastName": "Lovelace",
        "position": "Analyst",
        "department": "Research",
        "avatarUrl": "",
        "email": "ada@example.com",
        "location": "London",
        "bio": "",
        "joinDate": "1843-01-01",
        "skills": [{{ "name": "Mathematics", "level": 100, "category": "technical" }}]
      }}"#
    )
    .unwrap();

    let loaded = JsonFile(file.path().to_path_buf()).load().unwrap();
    assert_eq!(loaded.full_name(), "Ada Lovelace");
    assert!(loaded.phone.is_none());
    assert!(loaded.timeline.is_empty());
    assert!(!loaded.skills[0].id.is_unassigned());
  }

  #[test]
  fn json_file_remints_repeated_ids() {
    let mut sample = fixture::sample_employee();
    sample.timeline[1].id = sample.timeline[0].id.clone();
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", serde_json::to_string(&sample).unwrap()).unwrap();

    let loaded = JsonFile(file.path().to_path_buf()).load().unwrap();
    assert_eq!(loaded.timeline[0].id, sample.timeline[0].id);
    assert_ne!(loaded.timeline[1].id, loaded.timeline[0].id);
    assert_eq!(loaded.timeline[1].title, sample.timeline[1].title);
  }

  #[test]
  fn missing_file_is_an_io_error() {
    let err = JsonFile("/definitely/not/here.json".into()).load().unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
  }

  #[test]
  fn malformed_json_is_a_json_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{ not json").unwrap();
    let err = JsonFile(file.path().to_path_buf()).load().unwrap_err();
    assert!(matches!(err, Error::Json(_)));
  }
}
