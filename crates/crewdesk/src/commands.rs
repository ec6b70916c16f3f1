use anyhow::{Context, Result};
use serde::Serialize;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

use crewdesk_app::{
    average_hours, meetings_on, summarize, total_hours, upcoming_meetings, Classifiers,
    RecordStore, Workspace,
};
use crewdesk_core::classify::Classifier;
use crewdesk_core::filter::{select_visible, Categorized, FilterTag};
use crewdesk_core::record::{ChatMessage, Conversation, Meeting};
use crewdesk_core::{AttendanceStatus, Folder, RecordId, TaskStatus};

use crate::{Command, OutputFormat};

/// Execute one non-TUI subcommand against the seeded workspace.
pub(crate) fn run(cmd: &Command, workspace: &Workspace, classifiers: &Classifiers) -> Result<()> {
    match cmd {
        Command::Tasks { filter, format } => tasks(workspace, classifiers, filter, *format),
        Command::Attendance { filter, format } => attendance(workspace, classifiers, filter, *format),
        Command::Email { folder, format } => email(workspace, classifiers, folder, *format),
        Command::Calendar { date, format } => calendar(workspace, classifiers, date.as_deref(), *format),
        Command::Chat { conversation, format } => chat(workspace, *conversation, *format),
        Command::Summary => summary(workspace),
        Command::Tui => unreachable!("tui is dispatched before commands::run"),
    }
}

fn tasks(
    workspace: &Workspace,
    classifiers: &Classifiers,
    filter: &str,
    format: OutputFormat,
) -> Result<()> {
    let tag = FilterTag::<TaskStatus>::parse(filter)?;
    let visible = select_visible(workspace.tasks.list(), tag);
    if format == OutputFormat::Json {
        return print_json(&visible);
    }

    for task in visible {
        let status = classifiers.task_status.classify_category(task.status);
        let priority = classifiers.task_priority.classify_category(task.priority);
        println!(
            "{} #{} {} [{} {}] [{} {} priority] due {} · {} · {}%",
            status.icon,
            task.id,
            task.title,
            task.status,
            status.color,
            priority.icon,
            task.priority,
            fmt_date(task.due_date)?,
            task.assignee,
            task.progress,
        );
    }
    Ok(())
}

fn attendance(
    workspace: &Workspace,
    classifiers: &Classifiers,
    filter: &str,
    format: OutputFormat,
) -> Result<()> {
    let tag = FilterTag::<AttendanceStatus>::parse(filter)?;
    let visible = select_visible(workspace.attendance.list(), tag);
    if format == OutputFormat::Json {
        return print_json(&visible);
    }

    for entry in &visible {
        let status = classifiers.attendance_status.classify_category(entry.status);
        println!(
            "{} {} In: {}  Out: {}  {:.2}h  [{}]",
            status.icon,
            fmt_date(entry.date)?,
            entry.check_in,
            entry.check_out,
            entry.hours,
            entry.status,
        );
    }

    let owned: Vec<_> = visible.into_iter().cloned().collect();
    println!(
        "Total {:.2}h over {} days (avg {:.2}h)",
        total_hours(&owned),
        owned.len(),
        average_hours(&owned),
    );
    Ok(())
}

fn email(
    workspace: &Workspace,
    classifiers: &Classifiers,
    folder: &str,
    format: OutputFormat,
) -> Result<()> {
    let tag = FilterTag::<Folder>::parse(folder)?;
    let visible = select_visible(workspace.emails.list(), tag);
    if format == OutputFormat::Json {
        return print_json(&visible);
    }

    for mail in visible {
        let style = classifiers.folder.classify_category(mail.folder);
        let unread = if mail.read { " " } else { "●" };
        let starred = if mail.starred { "★" } else { " " };
        let attachment = if mail.has_attachment { "📎" } else { "  " };
        println!(
            "{} {}{}{} #{} {} — {} · {} · {}",
            style.icon, unread, starred, attachment, mail.id, mail.sender_name, mail.subject,
            mail.preview, mail.timestamp,
        );
    }
    Ok(())
}

fn calendar(
    workspace: &Workspace,
    classifiers: &Classifiers,
    date: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let today = match date {
        Some(raw) => Date::parse(raw, &format_description!("[year]-[month]-[day]"))
            .with_context(|| format!("invalid --date '{raw}', expected YYYY-MM-DD"))?,
        None => OffsetDateTime::now_utc().date(),
    };

    let todays = meetings_on(workspace.meetings.list(), today);
    let upcoming = upcoming_meetings(workspace.meetings.list(), today);

    if format == OutputFormat::Json {
        #[derive(Serialize)]
        struct Partition<'a> {
            today: Vec<&'a Meeting>,
            upcoming: Vec<&'a Meeting>,
        }
        return print_json(&Partition {
            today: todays,
            upcoming,
        });
    }

    println!("Today ({})", fmt_date(today)?);
    print_meetings(&todays, &classifiers.meeting_kind)?;
    println!("Upcoming");
    print_meetings(&upcoming, &classifiers.meeting_kind)?;
    Ok(())
}

fn print_meetings(meetings: &[&Meeting], kinds: &Classifier) -> Result<()> {
    for meeting in meetings {
        let kind = kinds.classify_category(meeting.kind);
        let place = meeting
            .location
            .as_deref()
            .or(meeting.link.as_deref())
            .unwrap_or("-");
        println!(
            "  {} #{} {} {} {}–{} [{}] {}",
            kind.icon,
            meeting.id,
            fmt_date(meeting.date)?,
            meeting.start_time,
            meeting.end_time,
            meeting.title,
            meeting.kind,
            place,
        );
    }
    Ok(())
}

fn chat(workspace: &Workspace, conversation: Option<u32>, format: OutputFormat) -> Result<()> {
    match conversation {
        Some(id) => {
            let id = RecordId::new(id);
            let peer = workspace.conversations.get(id)?;
            let history = workspace.messages(id)?;
            if format == OutputFormat::Json {
                return print_json(&history);
            }
            println!("{} {}", peer.avatar, peer.name);
            for message in history {
                print_message(message);
            }
        }
        None => {
            if format == OutputFormat::Json {
                return print_json(&workspace.conversations.list());
            }
            for peer in workspace.conversations.list() {
                print_conversation(peer);
            }
        }
    }
    Ok(())
}

fn print_message(message: &ChatMessage) {
    let who = if message.own { "you" } else { &message.sender };
    println!("  [{}] {}: {}", message.timestamp, who, message.body);
}

fn print_conversation(peer: &Conversation) {
    let presence = if peer.online { "●" } else { "○" };
    let unread = if peer.unread_count > 0 {
        format!(" ({} unread)", peer.unread_count)
    } else {
        String::new()
    };
    println!(
        "{} {} #{} {}{} — {} · {}",
        presence, peer.avatar, peer.id, peer.name, unread, peer.last_message, peer.timestamp,
    );
}

fn summary(workspace: &Workspace) -> Result<()> {
    print_chips("Tasks", &counts(workspace.tasks.list()));
    print_chips("Attendance", &counts(workspace.attendance.list()));
    print_chips("Email", &counts(workspace.emails.list()));
    print_chips("Calendar", &counts(workspace.meetings.list()));
    Ok(())
}

fn counts<R: Categorized>(records: &[R]) -> Vec<(String, usize)> {
    summarize(records)
        .into_iter()
        .map(|chip| (chip.label.to_owned(), chip.count))
        .collect()
}

fn print_chips(screen: &str, chips: &[(String, usize)]) {
    let rendered: Vec<String> = chips
        .iter()
        .map(|(label, count)| format!("{label} {count}"))
        .collect();
    println!("{screen}: {}", rendered.join(" | "));
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn fmt_date(date: Date) -> Result<String> {
    date.format(&format_description!("[year]-[month]-[day]"))
        .context("failed to format date")
}
