use serde::{Deserialize, Serialize};
use time::Date;

use crate::category::{ActivityKind, AttendanceStatus, Folder, MeetingKind, TaskPriority, TaskStatus};
use crate::filter::Categorized;
use crate::id::RecordId;

/// A record addressable by id through a store.
pub trait Identified {
    /// Identifier of the record, unique within its screen's set.
    fn id(&self) -> RecordId;
}

macro_rules! identified {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl Identified for $ty {
                fn id(&self) -> RecordId {
                    self.id
                }
            }
        )+
    };
}

identified!(
    Task,
    AttendanceEntry,
    Email,
    Meeting,
    Conversation,
    ChatMessage,
    Activity,
    Announcement,
    Document,
);

/// A task assigned to someone, as shown on the Tasks screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique within the task fixture set.
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub assignee: String,
    pub due_date: Date,
    /// Completion percentage in `0..=100`.
    pub progress: u8,
}

impl Categorized for Task {
    type Category = TaskStatus;

    fn category(&self) -> TaskStatus {
        self.status
    }
}

/// One day of the attendance log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    pub id: RecordId,
    pub date: Date,
    /// Clock-in time as displayed (`09:15 AM`).
    pub check_in: String,
    /// Clock-out time as displayed (`06:30 PM`).
    pub check_out: String,
    pub status: AttendanceStatus,
    /// Hours worked that day.
    pub hours: f32,
}

impl Categorized for AttendanceEntry {
    type Category = AttendanceStatus;

    fn category(&self) -> AttendanceStatus {
        self.status
    }
}

/// An email in one of the mailbox folders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    pub id: RecordId,
    pub subject: String,
    pub sender: String,
    pub sender_name: String,
    /// First line of the body as shown in the list.
    pub preview: String,
    /// Relative display timestamp (`2 min ago`).
    pub timestamp: String,
    pub read: bool,
    pub starred: bool,
    pub has_attachment: bool,
    pub folder: Folder,
}

impl Categorized for Email {
    type Category = Folder;

    fn category(&self) -> Folder {
        self.folder
    }
}

/// A calendar meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub date: Date,
    /// Start time as displayed (`10:00 AM`).
    pub start_time: String,
    /// End time as displayed (`10:30 AM`).
    pub end_time: String,
    pub kind: MeetingKind,
    /// Join link for virtual and hybrid meetings.
    pub link: Option<String>,
    /// Room for in-person meetings.
    pub location: Option<String>,
    pub participants: Vec<String>,
}

impl Categorized for Meeting {
    type Category = MeetingKind;

    fn category(&self) -> MeetingKind {
        self.kind
    }
}

/// A chat conversation in the list view.
///
/// `unread_count` and `online` are display-only fixture fields; nothing in
/// this version updates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: RecordId,
    pub name: String,
    pub avatar: String,
    pub last_message: String,
    /// Relative display timestamp (`15 min ago`).
    pub timestamp: String,
    pub unread_count: u32,
    /// Whether this is a group conversation.
    pub group: bool,
    pub online: bool,
}

/// A single message within a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: RecordId,
    pub body: String,
    pub sender: String,
    /// Display timestamp (`9:00 AM`).
    pub timestamp: String,
    /// Whether the current user authored the message.
    pub own: bool,
}

/// A recent-activity entry on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: RecordId,
    pub action: String,
    pub detail: String,
    /// Relative display timestamp (`2 hours ago`).
    pub time: String,
    pub kind: ActivityKind,
}

impl Categorized for Activity {
    type Category = ActivityKind;

    fn category(&self) -> ActivityKind {
        self.kind
    }
}

/// A company announcement. The screen currently renders an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: RecordId,
    pub title: String,
    pub body: String,
}

/// A shared document. The screen currently renders an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: RecordId,
    pub name: String,
    /// Relative display timestamp of the upload.
    pub uploaded: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn task_category_is_its_status() {
        let task = Task {
            id: RecordId::new(1),
            title: "Review Q4 Financial Reports".into(),
            description: String::new(),
            priority: TaskPriority::High,
            status: TaskStatus::InProgress,
            assignee: "Nehal Gole".into(),
            due_date: date!(2024 - 01 - 20),
            progress: 75,
        };
        assert_eq!(task.category(), TaskStatus::InProgress);
    }

    #[test]
    fn email_category_is_its_folder() {
        let email = Email {
            id: RecordId::new(6),
            subject: "Draft: Quarterly Report".into(),
            sender: "nehal.gole@company.com".into(),
            sender_name: "Nehal Gole".into(),
            preview: String::new(),
            timestamp: "1 day ago".into(),
            read: true,
            starred: false,
            has_attachment: false,
            folder: Folder::Drafts,
        };
        assert_eq!(email.category(), Folder::Drafts);
    }
}
