use serde::{Deserialize, Serialize};
use std::fmt;

/// Common surface of the closed category enumerations carried by records.
///
/// Every category has a canonical snake_case `token` used for parsing and CLI
/// flags, and a display `label` matching what the screens render.
pub trait Category: Copy + Eq + Sized + 'static {
    /// Every value of the enumeration, in display order.
    const ALL: &'static [Self];

    /// Canonical snake_case token (`"in_progress"`).
    fn token(self) -> &'static str;

    /// Display label exactly as the screens render it (`"In Progress"`).
    fn label(self) -> &'static str;

    /// Parse a user-supplied token, tolerating case, hyphens and spaces.
    ///
    /// `"In-Progress"`, `"in progress"` and `"in_progress"` all resolve to the
    /// same value; anything outside the enumeration yields `None`.
    fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Self::ALL.iter().copied().find(|c| c.token() == normalized)
    }
}

macro_rules! category_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => ($token:literal, $label:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl Category for $name {
            const ALL: &'static [Self] = &[ $( Self::$variant, )+ ];

            fn token(self) -> &'static str {
                match self {
                    $( Self::$variant => $token, )+
                }
            }

            fn label(self) -> &'static str {
                match self {
                    $( Self::$variant => $label, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

category_enum! {
    /// Workflow status of a task.
    TaskStatus {
        /// Not started yet.
        Pending => ("pending", "Pending"),
        /// Work has started but is not finished.
        InProgress => ("in_progress", "In Progress"),
        /// Finished.
        Completed => ("completed", "Completed"),
    }
}

category_enum! {
    /// Urgency of a task.
    TaskPriority {
        High => ("high", "High"),
        Medium => ("medium", "Medium"),
        Low => ("low", "Low"),
    }
}

category_enum! {
    /// Outcome recorded for one attendance day.
    AttendanceStatus {
        Present => ("present", "Present"),
        Late => ("late", "Late"),
        Absent => ("absent", "Absent"),
        HalfDay => ("half_day", "Half Day"),
    }
}

category_enum! {
    /// How a meeting is held.
    MeetingKind {
        Virtual => ("virtual", "Virtual"),
        InPerson => ("in_person", "In-Person"),
        Hybrid => ("hybrid", "Hybrid"),
    }
}

category_enum! {
    /// Kind of a dashboard activity entry.
    ActivityKind {
        Task => ("task", "task"),
        Meeting => ("meeting", "meeting"),
        Leave => ("leave", "leave"),
        Document => ("document", "document"),
    }
}

category_enum! {
    /// Mailbox folder an email lives in.
    Folder {
        Inbox => ("inbox", "Inbox"),
        Sent => ("sent", "Sent"),
        Drafts => ("drafts", "Drafts"),
        Spam => ("spam", "Spam"),
        Trash => ("trash", "Trash"),
    }
}

/// Category for screens whose list is never filtered (chat, dashboard).
///
/// The enumeration has no values, so the only selectable filter tag is the
/// `all` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NoCategory {}

impl Category for NoCategory {
    const ALL: &'static [Self] = &[];

    fn token(self) -> &'static str {
        match self {}
    }

    fn label(self) -> &'static str {
        match self {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_tolerates_case_hyphens_and_spaces() {
        assert_eq!(TaskStatus::parse("In-Progress"), Some(TaskStatus::InProgress));
        assert_eq!(TaskStatus::parse("in progress"), Some(TaskStatus::InProgress));
        assert_eq!(TaskStatus::parse(" COMPLETED "), Some(TaskStatus::Completed));
        assert_eq!(AttendanceStatus::parse("half day"), Some(AttendanceStatus::HalfDay));
        assert_eq!(MeetingKind::parse("In-Person"), Some(MeetingKind::InPerson));
    }

    #[test]
    fn parse_rejects_unknown_tokens() {
        assert_eq!(TaskStatus::parse("cancelled"), None);
        assert_eq!(Folder::parse(""), None);
    }

    #[test]
    fn labels_match_screen_rendering() {
        assert_eq!(TaskStatus::InProgress.to_string(), "In Progress");
        assert_eq!(AttendanceStatus::HalfDay.label(), "Half Day");
        assert_eq!(MeetingKind::InPerson.label(), "In-Person");
    }

    #[test]
    fn all_lists_every_variant_once() {
        assert_eq!(TaskStatus::ALL.len(), 3);
        assert_eq!(Folder::ALL.len(), 5);
        for folder in Folder::ALL {
            assert_eq!(Folder::parse(folder.token()), Some(*folder));
        }
    }
}
