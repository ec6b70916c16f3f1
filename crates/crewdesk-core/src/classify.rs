use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::category::{
    ActivityKind, AttendanceStatus, Category, Folder, MeetingKind, TaskPriority, TaskStatus,
};

/// Display attributes derived from a category value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Hex color (`#RRGGBB` or the short `#RGB` form).
    pub color: String,
    /// Single display glyph.
    pub icon: String,
}

impl Classification {
    /// Build a classification from its two display attributes.
    #[must_use]
    pub fn new(color: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            icon: icon.into(),
        }
    }
}

/// Exact-match lookup table from category label to display attributes.
///
/// `classify` is total: a label outside the table falls back to the table's
/// default classification instead of failing. One table exists per domain so
/// the mapping cannot drift between screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classifier {
    entries: BTreeMap<String, Classification>,
    default: Classification,
}

impl Classifier {
    /// Create an empty table with the given fallback classification.
    #[must_use]
    pub const fn new(default: Classification) -> Self {
        Self {
            entries: BTreeMap::new(),
            default,
        }
    }

    /// Add or replace the classification for a category label.
    #[must_use]
    pub fn with_entry(mut self, label: impl Into<String>, classification: Classification) -> Self {
        self.entries.insert(label.into(), classification);
        self
    }

    /// Replace the classification for a known label, returning whether the
    /// label was present. Used by configuration overrides.
    pub fn override_entry(&mut self, label: &str, classification: Classification) -> bool {
        match self.entries.get_mut(label) {
            Some(existing) => {
                *existing = classification;
                true
            }
            None => false,
        }
    }

    /// Look up display attributes for a raw category value.
    ///
    /// Deterministic and total: the same input always yields the same output,
    /// and unknown values yield the default instead of an error.
    #[must_use]
    pub fn classify(&self, raw: &str) -> &Classification {
        self.entries.get(raw).unwrap_or(&self.default)
    }

    /// Look up display attributes for a typed category.
    #[must_use]
    pub fn classify_category<C: Category>(&self, category: C) -> &Classification {
        self.classify(category.label())
    }

    /// Fallback classification used for unknown labels.
    #[must_use]
    pub const fn default_classification(&self) -> &Classification {
        &self.default
    }

    /// Iterate over the known labels and their classifications.
    pub fn known(&self) -> impl Iterator<Item = (&str, &Classification)> {
        self.entries.iter().map(|(label, c)| (label.as_str(), c))
    }
}

/// Color used when a category value is not in the table.
pub const DEFAULT_COLOR: &str = "#666";

fn table<C: Category>(
    default: Classification,
    attrs: impl Fn(C) -> (&'static str, &'static str),
) -> Classifier {
    C::ALL.iter().fold(Classifier::new(default), |acc, &category| {
        let (color, icon) = attrs(category);
        acc.with_entry(category.label(), Classification::new(color, icon))
    })
}

/// Task priority table: High red, Medium orange, Low green.
#[must_use]
pub fn task_priority() -> Classifier {
    table(Classification::new(DEFAULT_COLOR, "•"), |priority| match priority {
        TaskPriority::High => ("#F44336", "🔴"),
        TaskPriority::Medium => ("#FF9800", "🟠"),
        TaskPriority::Low => ("#4CAF50", "🟢"),
    })
}

/// Task status table.
#[must_use]
pub fn task_status() -> Classifier {
    table(Classification::new(DEFAULT_COLOR, "•"), |status| match status {
        TaskStatus::Completed => ("#4CAF50", "✅"),
        TaskStatus::InProgress => ("#2196F3", "🔄"),
        TaskStatus::Pending => ("#FF9800", "⏳"),
    })
}

/// Attendance status table.
#[must_use]
pub fn attendance_status() -> Classifier {
    table(Classification::new(DEFAULT_COLOR, "•"), |status| match status {
        AttendanceStatus::Present => ("#4CAF50", "✅"),
        AttendanceStatus::Late => ("#FF9800", "⏰"),
        AttendanceStatus::Absent => ("#F44336", "❌"),
        AttendanceStatus::HalfDay => ("#9C27B0", "🌓"),
    })
}

/// Meeting kind table; unknown kinds fall back to the plain calendar glyph.
#[must_use]
pub fn meeting_kind() -> Classifier {
    table(Classification::new(DEFAULT_COLOR, "📅"), |kind| match kind {
        MeetingKind::Virtual => ("#2196F3", "📹"),
        MeetingKind::InPerson => ("#4CAF50", "🏢"),
        MeetingKind::Hybrid => ("#FF9800", "🔄"),
    })
}

/// Dashboard activity table; unknown kinds fall back to the pin glyph.
#[must_use]
pub fn activity_kind() -> Classifier {
    table(Classification::new(DEFAULT_COLOR, "📌"), |kind| match kind {
        ActivityKind::Task => ("#4CAF50", "📋"),
        ActivityKind::Meeting => ("#2196F3", "📅"),
        ActivityKind::Leave => ("#FF9800", "🏖️"),
        ActivityKind::Document => ("#9C27B0", "📄"),
    })
}

/// Mailbox folder table.
#[must_use]
pub fn folder() -> Classifier {
    table(Classification::new(DEFAULT_COLOR, "📧"), |f| match f {
        Folder::Inbox => ("#2196F3", "📥"),
        Folder::Sent => ("#4CAF50", "📤"),
        Folder::Drafts => ("#FF9800", "📝"),
        Folder::Spam => ("#F44336", "🚫"),
        Folder::Trash => ("#9C27B0", "🗑️"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_categories_yield_documented_pairs() {
        let priorities = task_priority();
        assert_eq!(priorities.classify("High").color, "#F44336");
        assert_eq!(priorities.classify("Medium").color, "#FF9800");
        assert_eq!(priorities.classify("Low").color, "#4CAF50");

        let statuses = task_status();
        assert_eq!(statuses.classify("Completed").color, "#4CAF50");
        assert_eq!(statuses.classify("In Progress").color, "#2196F3");
        assert_eq!(statuses.classify("Pending").color, "#FF9800");

        let attendance = attendance_status();
        assert_eq!(attendance.classify("Half Day").color, "#9C27B0");

        let meetings = meeting_kind();
        assert_eq!(meetings.classify("Virtual").icon, "📹");
        assert_eq!(meetings.classify("In-Person").icon, "🏢");
    }

    #[test]
    fn unknown_categories_fall_back_to_default() {
        let statuses = task_status();
        let fallback = statuses.classify("Cancelled");
        assert_eq!(fallback, statuses.default_classification());
        assert_eq!(fallback.color, DEFAULT_COLOR);

        // Total over all strings, including empty input.
        assert_eq!(statuses.classify(""), statuses.default_classification());
        assert_eq!(meeting_kind().classify("Offsite").icon, "📅");
    }

    #[test]
    fn classify_is_deterministic() {
        let table = activity_kind();
        assert_eq!(table.classify("leave"), table.classify("leave"));
    }

    #[test]
    fn classify_category_matches_label_lookup() {
        use crate::category::TaskStatus;
        let statuses = task_status();
        assert_eq!(
            statuses.classify_category(TaskStatus::InProgress),
            statuses.classify("In Progress")
        );
    }

    #[test]
    fn override_entry_replaces_known_labels_only() {
        let mut statuses = task_status();
        let custom = Classification::new("#123456", "★");
        assert!(statuses.override_entry("Pending", custom.clone()));
        assert_eq!(statuses.classify("Pending"), &custom);
        assert!(!statuses.override_entry("Cancelled", custom));
    }

    #[test]
    fn every_table_covers_its_enumeration() {
        assert_eq!(task_priority().known().count(), 3);
        assert_eq!(task_status().known().count(), 3);
        assert_eq!(attendance_status().known().count(), 4);
        assert_eq!(meeting_kind().known().count(), 3);
        assert_eq!(activity_kind().known().count(), 4);
        assert_eq!(folder().known().count(), 5);
    }
}
