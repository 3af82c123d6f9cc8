//! Core types and editing state for the Dossier employee profile.
//!
//! The record lives in a [`container::RecordContainer`]. Each editable
//! section gets a [`draft::DraftEditor`] over its slice of the record; the
//! editors never touch the record directly and hand back an
//! [`record::EmployeePatch`] on commit.
//!
//! This crate has no terminal or I/O dependencies beyond reading a record
//! file.

pub mod container;
pub mod date;
pub mod draft;
pub mod error;
pub mod fixture;
pub mod id;
pub mod list;
pub mod order;
pub mod record;
pub mod session;
pub mod slices;
pub mod source;

pub use error::{Error, Result};
