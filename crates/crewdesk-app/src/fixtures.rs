//! The sample records every screen renders. All data is defined at process
//! start and never mutated; the stores only hand out references.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use time::macros::date;

use crewdesk_core::category::{
    ActivityKind, AttendanceStatus, Folder, MeetingKind, TaskPriority, TaskStatus,
};
use crewdesk_core::record::{
    Activity, Announcement, AttendanceEntry, ChatMessage, Conversation, Document, Email, Meeting,
    Task,
};
use crewdesk_core::RecordId;

use crate::store::{FixtureStore, RecordStore, StoreError};

/// The signed-in user shown on the dashboard and profile screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub role: String,
}

/// One stat card on the dashboard grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    pub color: String,
    pub icon: String,
}

/// One quick-action button on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickAction {
    pub title: String,
    pub icon: String,
    pub color: String,
}

/// All fixture stores of the application, seeded once at startup.
#[derive(Debug, Clone)]
pub struct Workspace {
    /// Tasks screen records.
    pub tasks: FixtureStore<Task>,
    /// Attendance log, most recent day first.
    pub attendance: FixtureStore<AttendanceEntry>,
    /// Emails across every folder.
    pub emails: FixtureStore<Email>,
    /// Calendar meetings.
    pub meetings: FixtureStore<Meeting>,
    /// Chat conversations.
    pub conversations: FixtureStore<Conversation>,
    /// Dashboard recent activities.
    pub activities: FixtureStore<Activity>,
    /// Announcements (empty in this version; the screen shows its empty state).
    pub announcements: FixtureStore<Announcement>,
    /// Documents (empty in this version; the screen shows its empty state).
    pub documents: FixtureStore<Document>,
    /// The signed-in user.
    pub profile: UserProfile,
    /// Dashboard stat cards.
    pub stats: Vec<StatCard>,
    /// Dashboard quick actions.
    pub quick_actions: Vec<QuickAction>,
    messages: HashMap<RecordId, Vec<ChatMessage>>,
}

impl Workspace {
    /// Seed every store with the sample data.
    ///
    /// # Errors
    /// Returns [`StoreError::DuplicateId`] if a fixture set repeats an id.
    pub fn seed() -> Result<Self, StoreError> {
        Ok(Self {
            tasks: FixtureStore::new(tasks())?,
            attendance: FixtureStore::new(attendance_log())?,
            emails: FixtureStore::new(emails())?,
            meetings: FixtureStore::new(meetings())?,
            conversations: FixtureStore::new(conversations())?,
            activities: FixtureStore::new(activities())?,
            announcements: FixtureStore::new(Vec::new())?,
            documents: FixtureStore::new(Vec::new())?,
            profile: UserProfile {
                name: "Nehal Gole".into(),
                role: "CEO".into(),
            },
            stats: stat_cards(),
            quick_actions: quick_actions(),
            messages: message_histories(),
        })
    }

    /// Message history of a conversation, oldest first.
    ///
    /// A known conversation without recorded history yields an empty slice;
    /// an unknown conversation id yields the explicit not-found error.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] when no conversation has the id.
    pub fn messages(&self, conversation: RecordId) -> Result<&[ChatMessage], StoreError> {
        self.conversations.get(conversation)?;
        Ok(self.messages.get(&conversation).map_or(&[], Vec::as_slice))
    }
}

fn tasks() -> Vec<Task> {
    let task = |id: u32,
                title: &str,
                description: &str,
                priority: TaskPriority,
                status: TaskStatus,
                assignee: &str,
                due_date,
                progress: u8| Task {
        id: RecordId::new(id),
        title: title.into(),
        description: description.into(),
        priority,
        status,
        assignee: assignee.into(),
        due_date,
        progress,
    };

    vec![
        task(
            1,
            "Review Q4 Financial Reports",
            "Analyze and prepare quarterly financial statements for board meeting",
            TaskPriority::High,
            TaskStatus::InProgress,
            "Nehal Gole",
            date!(2024 - 01 - 20),
            75,
        ),
        task(
            2,
            "Update Company Website",
            "Implement new design and content updates for corporate website",
            TaskPriority::Medium,
            TaskStatus::Pending,
            "John Doe",
            date!(2024 - 01 - 25),
            0,
        ),
        task(
            3,
            "Client Meeting Preparation",
            "Prepare presentation materials for upcoming client meeting",
            TaskPriority::High,
            TaskStatus::Completed,
            "Sarah Smith",
            date!(2024 - 01 - 18),
            100,
        ),
        task(
            4,
            "Team Building Event",
            "Organize quarterly team building activity for all departments",
            TaskPriority::Low,
            TaskStatus::InProgress,
            "Mike Johnson",
            date!(2024 - 01 - 30),
            40,
        ),
        task(
            5,
            "Database Migration",
            "Migrate legacy database to new cloud infrastructure",
            TaskPriority::High,
            TaskStatus::Pending,
            "Tech Team",
            date!(2024 - 02 - 05),
            0,
        ),
    ]
}

fn attendance_log() -> Vec<AttendanceEntry> {
    let entry = |id: u32, date, check_in: &str, check_out: &str, hours: f32| AttendanceEntry {
        id: RecordId::new(id),
        date,
        check_in: check_in.into(),
        check_out: check_out.into(),
        status: AttendanceStatus::Present,
        hours,
    };

    vec![
        entry(1, date!(2024 - 01 - 15), "09:15 AM", "06:30 PM", 9.25),
        entry(2, date!(2024 - 01 - 14), "08:45 AM", "05:45 PM", 9.0),
        entry(3, date!(2024 - 01 - 13), "09:30 AM", "06:00 PM", 8.5),
        entry(4, date!(2024 - 01 - 12), "08:30 AM", "05:30 PM", 9.0),
        entry(5, date!(2024 - 01 - 11), "09:00 AM", "06:15 PM", 9.25),
        entry(6, date!(2024 - 01 - 10), "08:15 AM", "05:45 PM", 9.5),
    ]
}

#[allow(clippy::too_many_lines)]
fn emails() -> Vec<Email> {
    struct Mail<'a> {
        id: u32,
        subject: &'a str,
        sender: &'a str,
        sender_name: &'a str,
        preview: &'a str,
        timestamp: &'a str,
        read: bool,
        starred: bool,
        has_attachment: bool,
        folder: Folder,
    }

    let build = |m: Mail<'_>| Email {
        id: RecordId::new(m.id),
        subject: m.subject.into(),
        sender: m.sender.into(),
        sender_name: m.sender_name.into(),
        preview: m.preview.into(),
        timestamp: m.timestamp.into(),
        read: m.read,
        starred: m.starred,
        has_attachment: m.has_attachment,
        folder: m.folder,
    };

    vec![
        build(Mail {
            id: 1,
            subject: "Project Update - Q4 Results",
            sender: "john.doe@company.com",
            sender_name: "John Doe",
            preview: "Hi team, I wanted to share the latest updates on our Q4 project results. We have achieved...",
            timestamp: "2 min ago",
            read: false,
            starred: true,
            has_attachment: true,
            folder: Folder::Inbox,
        }),
        build(Mail {
            id: 2,
            subject: "Meeting Schedule for Next Week",
            sender: "sarah.smith@company.com",
            sender_name: "Sarah Smith",
            preview: "Please find attached the meeting schedule for next week. We have several important...",
            timestamp: "15 min ago",
            read: true,
            starred: false,
            has_attachment: true,
            folder: Folder::Inbox,
        }),
        build(Mail {
            id: 3,
            subject: "New Employee Onboarding",
            sender: "hr@company.com",
            sender_name: "HR Department",
            preview: "Welcome to the team! This email contains important information about your onboarding process...",
            timestamp: "1 hour ago",
            read: false,
            starred: false,
            has_attachment: false,
            folder: Folder::Inbox,
        }),
        build(Mail {
            id: 4,
            subject: "Client Presentation Feedback",
            sender: "client@external.com",
            sender_name: "Client Feedback",
            preview: "Thank you for the excellent presentation yesterday. We were very impressed with...",
            timestamp: "2 hours ago",
            read: true,
            starred: true,
            has_attachment: false,
            folder: Folder::Inbox,
        }),
        build(Mail {
            id: 5,
            subject: "System Maintenance Notice",
            sender: "it@company.com",
            sender_name: "IT Department",
            preview: "Scheduled maintenance will be performed this weekend. Please save your work...",
            timestamp: "1 day ago",
            read: true,
            starred: false,
            has_attachment: false,
            folder: Folder::Inbox,
        }),
        build(Mail {
            id: 6,
            subject: "Draft: Quarterly Report",
            sender: "nehal.gole@company.com",
            sender_name: "Nehal Gole",
            preview: "Draft of the quarterly report for review. Please let me know if you need any changes...",
            timestamp: "2 days ago",
            read: true,
            starred: false,
            has_attachment: true,
            folder: Folder::Drafts,
        }),
    ]
}

fn meetings() -> Vec<Meeting> {
    vec![
        Meeting {
            id: RecordId::new(1),
            title: "Team Standup Meeting".into(),
            description: "Daily team synchronization and progress updates".into(),
            date: date!(2024 - 01 - 15),
            start_time: "10:00 AM".into(),
            end_time: "10:30 AM".into(),
            kind: MeetingKind::Virtual,
            link: Some("https://meet.google.com/abc-defg-hij".into()),
            location: None,
            participants: names(&["Nehal Gole", "John Doe", "Sarah Smith", "Mike Johnson"]),
        },
        Meeting {
            id: RecordId::new(2),
            title: "Client Presentation".into(),
            description: "Present quarterly results to key client stakeholders".into(),
            date: date!(2024 - 01 - 15),
            start_time: "2:00 PM".into(),
            end_time: "3:30 PM".into(),
            kind: MeetingKind::Hybrid,
            link: Some("https://meet.google.com/xyz-uvwq-rst".into()),
            location: None,
            participants: names(&["Nehal Gole", "Client Team", "Sales Team"]),
        },
        Meeting {
            id: RecordId::new(3),
            title: "Project Review".into(),
            description: "Review progress on ongoing development projects".into(),
            date: date!(2024 - 01 - 16),
            start_time: "11:00 AM".into(),
            end_time: "12:00 PM".into(),
            kind: MeetingKind::InPerson,
            link: None,
            location: Some("Conference Room A".into()),
            participants: names(&["Tech Team", "Project Managers"]),
        },
        Meeting {
            id: RecordId::new(4),
            title: "Board Meeting".into(),
            description: "Monthly board meeting to discuss company strategy".into(),
            date: date!(2024 - 01 - 17),
            start_time: "9:00 AM".into(),
            end_time: "11:00 AM".into(),
            kind: MeetingKind::Virtual,
            link: Some("https://meet.google.com/board-meeting-123".into()),
            location: None,
            participants: names(&["Board Members", "Executive Team"]),
        },
        Meeting {
            id: RecordId::new(5),
            title: "Training Session".into(),
            description: "New employee onboarding and system training".into(),
            date: date!(2024 - 01 - 18),
            start_time: "1:00 PM".into(),
            end_time: "3:00 PM".into(),
            kind: MeetingKind::Virtual,
            link: Some("https://meet.google.com/training-456".into()),
            location: None,
            participants: names(&["New Employees", "HR Team"]),
        },
    ]
}

fn conversations() -> Vec<Conversation> {
    let chat = |id: u32,
                name: &str,
                avatar: &str,
                last_message: &str,
                timestamp: &str,
                unread_count: u32,
                group: bool,
                online: bool| Conversation {
        id: RecordId::new(id),
        name: name.into(),
        avatar: avatar.into(),
        last_message: last_message.into(),
        timestamp: timestamp.into(),
        unread_count,
        group,
        online,
    };

    vec![
        chat(1, "Team Chat", "👥", "Great work on the project presentation!", "2 min ago", 3, true, true),
        chat(2, "John Doe", "👨‍💼", "Can you review the latest code changes?", "15 min ago", 1, false, true),
        chat(3, "Sarah Smith", "👩‍💻", "Meeting scheduled for tomorrow at 10 AM", "1 hour ago", 0, false, false),
        chat(4, "Project Alpha", "🚀", "New task assigned: UI/UX improvements", "2 hours ago", 5, true, true),
        chat(5, "Mike Johnson", "👨‍🔧", "The server deployment is complete", "3 hours ago", 0, false, false),
        chat(6, "HR Updates", "📋", "New company policy regarding remote work", "1 day ago", 2, true, false),
    ]
}

fn message_histories() -> HashMap<RecordId, Vec<ChatMessage>> {
    let msg = |id: u32, body: &str, sender: &str, timestamp: &str, own: bool| ChatMessage {
        id: RecordId::new(id),
        body: body.into(),
        sender: sender.into(),
        timestamp: timestamp.into(),
        own,
    };

    let mut histories = HashMap::new();
    histories.insert(
        RecordId::new(1),
        vec![
            msg(1, "Good morning team!", "Nehal Gole", "9:00 AM", true),
            msg(2, "Morning everyone!", "John Doe", "9:01 AM", false),
            msg(3, "Ready for the daily standup?", "Sarah Smith", "9:02 AM", false),
            msg(4, "Yes, I have some updates to share", "Nehal Gole", "9:03 AM", true),
            msg(5, "Great work on the project presentation!", "Mike Johnson", "9:05 AM", false),
        ],
    );
    histories.insert(
        RecordId::new(2),
        vec![
            msg(1, "Hi Nehal, how are you?", "John Doe", "8:30 AM", false),
            msg(2, "I'm good, thanks! How about you?", "Nehal Gole", "8:32 AM", true),
            msg(3, "Doing well! Can you review the latest code changes?", "John Doe", "8:35 AM", false),
            msg(4, "Sure, I'll take a look at it", "Nehal Gole", "8:40 AM", true),
        ],
    );
    histories
}

fn activities() -> Vec<Activity> {
    let activity = |id: u32, action: &str, detail: &str, time: &str, kind| Activity {
        id: RecordId::new(id),
        action: action.into(),
        detail: detail.into(),
        time: time.into(),
        kind,
    };

    vec![
        activity(1, "Task assigned", "Review Q4 reports", "2 hours ago", ActivityKind::Task),
        activity(2, "Meeting scheduled", "Team standup at 10 AM", "4 hours ago", ActivityKind::Meeting),
        activity(3, "Leave approved", "John Doe - Annual leave", "1 day ago", ActivityKind::Leave),
        activity(4, "Document uploaded", "Company policy v2.1", "2 days ago", ActivityKind::Document),
    ]
}

fn stat_cards() -> Vec<StatCard> {
    let card = |title: &str, value: &str, color: &str, icon: &str| StatCard {
        title: title.into(),
        value: value.into(),
        color: color.into(),
        icon: icon.into(),
    };

    vec![
        card("Total Employees", "24", "#4CAF50", "👥"),
        card("Active Tasks", "12", "#2196F3", "📋"),
        card("Meetings Today", "3", "#FF9800", "📅"),
        card("Pending Leaves", "2", "#F44336", "🏖️"),
    ]
}

fn quick_actions() -> Vec<QuickAction> {
    let action = |title: &str, icon: &str, color: &str| QuickAction {
        title: title.into(),
        icon: icon.into(),
        color: color.into(),
    };

    vec![
        action("Schedule Meeting", "📅", "#2196F3"),
        action("Assign Task", "📋", "#4CAF50"),
        action("Send Announcement", "📢", "#FF9800"),
        action("View Reports", "📊", "#9C27B0"),
    ]
}

fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(|&v| v.to_owned()).collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use super::*;
    use crewdesk_core::filter::{count, select_visible, FilterTag};
    use crewdesk_core::record::Identified;

    #[test]
    fn seed_builds_every_store() {
        let ws = Workspace::seed().expect("fixture ids are unique");
        assert_eq!(ws.tasks.len(), 5);
        assert_eq!(ws.attendance.len(), 6);
        assert_eq!(ws.emails.len(), 6);
        assert_eq!(ws.meetings.len(), 5);
        assert_eq!(ws.conversations.len(), 6);
        assert_eq!(ws.activities.len(), 4);
        assert!(ws.announcements.is_empty());
        assert!(ws.documents.is_empty());
        assert_eq!(ws.profile.name, "Nehal Gole");
        assert_eq!(ws.stats.len(), 4);
        assert_eq!(ws.quick_actions.len(), 4);
    }

    #[test]
    fn completed_filter_selects_exactly_task_three() {
        let ws = Workspace::seed().expect("fixture ids are unique");
        let completed = select_visible(ws.tasks.list(), FilterTag::Only(TaskStatus::Completed));
        let ids: Vec<RecordId> = completed.iter().map(|t| t.id()).collect();
        assert_eq!(ids, vec![RecordId::new(3)]);
        assert_eq!(count(ws.tasks.list(), FilterTag::Only(TaskStatus::Pending)), 2);
    }

    #[test]
    fn drafts_folder_holds_only_the_draft_report() {
        let ws = Workspace::seed().expect("fixture ids are unique");
        let drafts = select_visible(ws.emails.list(), FilterTag::Only(Folder::Drafts));
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].subject, "Draft: Quarterly Report");
        assert_eq!(count(ws.emails.list(), FilterTag::Only(Folder::Inbox)), 5);
        assert_eq!(count(ws.emails.list(), FilterTag::Only(Folder::Sent)), 0);
    }

    #[test]
    fn message_history_lookup_distinguishes_empty_from_missing() {
        let ws = Workspace::seed().expect("fixture ids are unique");
        assert_eq!(ws.messages(RecordId::new(1)).map(<[ChatMessage]>::len), Ok(5));
        // Conversation 3 exists but has no recorded history.
        assert_eq!(ws.messages(RecordId::new(3)).map(<[ChatMessage]>::len), Ok(0));
        assert_eq!(
            ws.messages(RecordId::new(999)),
            Err(StoreError::NotFound {
                id: RecordId::new(999)
            })
        );
    }

    #[test]
    fn attendance_log_is_most_recent_first() {
        let ws = Workspace::seed().expect("fixture ids are unique");
        let log = ws.attendance.list();
        assert!(log.windows(2).all(|pair| pair[0].date > pair[1].date));
    }
}
