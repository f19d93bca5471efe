pub mod commands;
pub mod data;
pub mod registry;

use std::fmt;

use serde::Serialize;

/// A named time range offered as a one-click shortcut in the time picker.
///
/// Each bound is either a date-math expression ("now-7d", "now/M") resolved
/// by the picker's evaluator at render time, or a literal "YYYY-MM-DD" date.
/// This crate treats date-math strings as opaque and preserves them verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PresetRange {
    pub from: &'static str,
    pub to: &'static str,
    pub display: &'static str,
    pub section: u32,
}

impl fmt::Display for PresetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} to {})", self.display, self.from, self.to)
    }
}
