//! Display ordering for the career timeline.
//!
//! Timeline events are stored in insertion order but always shown most
//! recent first. The display sequence is derived on every render and the
//! underlying list is never reordered.

use std::cmp::Ordering;

use crate::{date, record::TimelineEvent};

/// Compare two events for display: later dates first. Unparseable dates
/// count as older than any parseable one.
pub fn by_date_desc(a: &TimelineEvent, b: &TimelineEvent) -> Ordering {
  // `None < Some(_)`, so reversing the operands puts undated events last.
  date::parse(&b.date).cmp(&date::parse(&a.date))
}

/// The display sequence for `events`: descending by date, stable for ties.
pub fn timeline(events: &[TimelineEvent]) -> Vec<&TimelineEvent> {
  let mut sorted: Vec<&TimelineEvent> = events.iter().collect();
  sorted.sort_by(|a, b| by_date_desc(a, b));
  sorted
}
