//! Rendering for every screen. Draw functions read the [`App`] state and never
//! mutate it; all mutation happens in the key handlers.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap};
use time::Date;
use time::macros::format_description;

use crewdesk_app::{FilterCount, RecordStore, average_hours, summarize, total_hours};
use crewdesk_core::record::{
    Activity, AttendanceEntry, Conversation, Email, Meeting, Task,
};
use crewdesk_core::{Category, FilterTag, RecordId, ViewMode};

use super::app::{App, Screen};
use super::constants::{
    LIST_HIGHLIGHT_SYMBOL, LIST_ROW_MAX_GRAPHEMES, OFFLINE_MARKER, ONLINE_MARKER, UNREAD_MARKER,
};
use super::cursor::ListCursor;
use super::util::{hex_color, truncate_with_ellipsis};

/// Draw one frame.
pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let [tabs_area, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    draw_tabs(frame, app, tabs_area);
    match app.screen {
        Screen::Dashboard => draw_dashboard(frame, app, body),
        Screen::Tasks => draw_tasks(frame, app, body),
        Screen::Attendance => draw_attendance(frame, app, body),
        Screen::Calendar => draw_calendar(frame, app, body),
        Screen::Email => draw_email(frame, app, body),
        Screen::Chat => draw_chat(frame, app, body),
    }
    draw_footer(frame, app, footer);
}

fn draw_tabs(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let titles: Vec<String> = Screen::ALL
        .iter()
        .enumerate()
        .map(|(index, screen)| format!("{} {}", index + 1, screen.title()))
        .collect();
    let selected = Screen::ALL.iter().position(|s| *s == app.screen).unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .block(Block::default().borders(Borders::ALL).title("crewdesk"))
        .highlight_style(Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED));
    frame.render_widget(tabs, area);
}

fn draw_footer(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let hints = match app.mode() {
        ViewMode::List => "q quit · tab/1-6 screens · j/k move · enter open · f filter · c compose",
        ViewMode::Detail(_) => "esc back · tab/1-6 screens",
        ViewMode::Compose => "s send · esc discard",
    };
    let footer = Paragraph::new(hints).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, area);
}

fn draw_dashboard(frame: &mut Frame<'_>, app: &App, area: Rect) {
    if let ViewMode::Detail(id) = app.dashboard.state.mode {
        match app.workspace.activities.get(id) {
            Ok(activity) => draw_activity_detail(frame, app, area, activity),
            Err(_) => draw_missing(frame, area, id),
        }
        return;
    }

    let [profile, stats, actions, activities] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(4),
        Constraint::Length(3),
        Constraint::Min(0),
    ])
    .areas(area);

    let who = format!("{} · {}", app.workspace.profile.name, app.workspace.profile.role);
    frame.render_widget(
        Paragraph::new(who).block(Block::default().borders(Borders::ALL).title("Welcome back")),
        profile,
    );

    let columns = u32::try_from(app.workspace.stats.len().max(1)).unwrap_or(1);
    let cells = Layout::horizontal(
        app.workspace
            .stats
            .iter()
            .map(|_| Constraint::Ratio(1, columns))
            .collect::<Vec<_>>(),
    )
    .split(stats);
    for (card, cell) in app.workspace.stats.iter().zip(cells.iter()) {
        let body = Line::from(vec![
            Span::raw(format!("{} ", card.icon)),
            Span::styled(
                card.value.clone(),
                Style::default().fg(hex_color(&card.color)).add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(
            Paragraph::new(body)
                .block(Block::default().borders(Borders::ALL).title(card.title.clone())),
            *cell,
        );
    }

    let action_spans: Vec<Span<'_>> = app
        .workspace
        .quick_actions
        .iter()
        .map(|action| {
            Span::styled(
                format!(" {} {} ", action.icon, action.title),
                Style::default().fg(hex_color(&action.color)),
            )
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(action_spans))
            .block(Block::default().borders(Borders::ALL).title("Quick Actions")),
        actions,
    );

    let records = app.workspace.activities.list();
    let items = rows(&app.dashboard.cursor, records, |activity: &Activity| {
        let style = app.classifiers.activity_kind.classify_category(activity.kind);
        Line::from(vec![
            Span::raw(format!("{} ", style.icon)),
            Span::styled(activity.action.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!(" {} · {}", truncate_row(&activity.detail), activity.time)),
        ])
    });
    render_list(frame, activities, "Recent Activity", items, &app.dashboard.cursor);
}

fn draw_activity_detail(frame: &mut Frame<'_>, app: &App, area: Rect, activity: &Activity) {
    let style = app.classifiers.activity_kind.classify_category(activity.kind);
    let lines = vec![
        Line::from(vec![
            Span::raw(format!("{} ", style.icon)),
            Span::styled(
                activity.action.clone(),
                Style::default().fg(hex_color(&style.color)).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::raw(""),
        Line::raw(activity.detail.clone()),
        Line::raw(format!("{} · {}", activity.kind, activity.time)),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title("Activity")),
        area,
    );
}

fn draw_tasks(frame: &mut Frame<'_>, app: &App, area: Rect) {
    if let ViewMode::Detail(id) = app.tasks.state.mode {
        match app.workspace.tasks.get(id) {
            Ok(task) => draw_task_detail(frame, app, area, task),
            Err(_) => draw_missing(frame, area, id),
        }
        return;
    }

    let [chips, list] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);
    draw_chips(frame, chips, &summarize(app.workspace.tasks.list()), app.tasks.state.filter);

    let records = app.workspace.tasks.list();
    let items = rows(&app.tasks.cursor, records, |task: &Task| {
        let status = app.classifiers.task_status.classify_category(task.status);
        let priority = app.classifiers.task_priority.classify_category(task.priority);
        Line::from(vec![
            Span::raw(format!("{} ", status.icon)),
            Span::raw(truncate_row(&task.title)),
            Span::styled(
                format!(" [{}]", task.status),
                Style::default().fg(hex_color(&status.color)),
            ),
            Span::styled(
                format!(" {}", task.priority),
                Style::default().fg(hex_color(&priority.color)),
            ),
            Span::raw(format!(" · {}%", task.progress)),
        ])
    });
    render_list(frame, list, "Tasks", items, &app.tasks.cursor);
}

fn draw_task_detail(frame: &mut Frame<'_>, app: &App, area: Rect, task: &Task) {
    let status = app.classifiers.task_status.classify_category(task.status);
    let priority = app.classifiers.task_priority.classify_category(task.priority);
    let lines = vec![
        Line::styled(task.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
        Line::raw(""),
        Line::raw(task.description.clone()),
        Line::raw(""),
        Line::from(vec![
            Span::raw("Status: "),
            Span::styled(
                format!("{} {}", status.icon, task.status),
                Style::default().fg(hex_color(&status.color)),
            ),
        ]),
        Line::from(vec![
            Span::raw("Priority: "),
            Span::styled(
                task.priority.to_string(),
                Style::default().fg(hex_color(&priority.color)),
            ),
        ]),
        Line::raw(format!("Assignee: {}", task.assignee)),
        Line::raw(format!("Due: {}", fmt_date(task.due_date))),
        Line::raw(format!("Progress: {}%", task.progress)),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title("Task")),
        area,
    );
}

fn draw_attendance(frame: &mut Frame<'_>, app: &App, area: Rect) {
    if let ViewMode::Detail(id) = app.attendance.state.mode {
        match app.workspace.attendance.get(id) {
            Ok(entry) => draw_attendance_detail(frame, app, area, entry),
            Err(_) => draw_missing(frame, area, id),
        }
        return;
    }

    let [clock, chips, list, totals] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    let clock_lines = vec![
        Line::styled(app.clock.clone(), Style::default().add_modifier(Modifier::BOLD)),
        Line::raw(app.day.clone()),
    ];
    frame.render_widget(
        Paragraph::new(clock_lines)
            .centered()
            .block(Block::default().borders(Borders::ALL).title("Current Time")),
        clock,
    );

    let log = app.workspace.attendance.list();
    draw_chips(frame, chips, &summarize(log), app.attendance.state.filter);

    let items = rows(&app.attendance.cursor, log, |entry: &AttendanceEntry| {
        let status = app.classifiers.attendance_status.classify_category(entry.status);
        Line::from(vec![
            Span::raw(format!("{} {} ", status.icon, fmt_date(entry.date))),
            Span::raw(format!("In {}  Out {}  {:.2}h", entry.check_in, entry.check_out, entry.hours)),
            Span::styled(
                format!(" [{}]", entry.status),
                Style::default().fg(hex_color(&status.color)),
            ),
        ])
    });
    render_list(frame, list, "Attendance Log", items, &app.attendance.cursor);

    let summary = format!(
        "Total {:.2}h over {} days · avg {:.2}h",
        total_hours(log),
        log.len(),
        average_hours(log),
    );
    frame.render_widget(
        Paragraph::new(summary).style(Style::default().fg(Color::DarkGray)),
        totals,
    );
}

fn draw_attendance_detail(frame: &mut Frame<'_>, app: &App, area: Rect, entry: &AttendanceEntry) {
    let status = app.classifiers.attendance_status.classify_category(entry.status);
    let lines = vec![
        Line::styled(fmt_date(entry.date), Style::default().add_modifier(Modifier::BOLD)),
        Line::raw(""),
        Line::from(vec![
            Span::raw("Status: "),
            Span::styled(
                format!("{} {}", status.icon, entry.status),
                Style::default().fg(hex_color(&status.color)),
            ),
        ]),
        Line::raw(format!("Check in: {}", entry.check_in)),
        Line::raw(format!("Check out: {}", entry.check_out)),
        Line::raw(format!("Hours: {:.2}", entry.hours)),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Attendance")),
        area,
    );
}

fn draw_calendar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    if let ViewMode::Detail(id) = app.calendar.state.mode {
        match app.workspace.meetings.get(id) {
            Ok(meeting) => draw_meeting_detail(frame, app, area, meeting),
            Err(_) => draw_missing(frame, area, id),
        }
        return;
    }

    let [chips, list] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);
    draw_chips(frame, chips, &summarize(app.workspace.meetings.list()), app.calendar.state.filter);

    let records = app.workspace.meetings.list();
    let items = rows(&app.calendar.cursor, records, |meeting: &Meeting| {
        let kind = app.classifiers.meeting_kind.classify_category(meeting.kind);
        Line::from(vec![
            Span::raw(format!("{} {} {}–{} ", kind.icon, fmt_date(meeting.date), meeting.start_time, meeting.end_time)),
            Span::raw(truncate_row(&meeting.title)),
            Span::styled(
                format!(" [{}]", meeting.kind),
                Style::default().fg(hex_color(&kind.color)),
            ),
        ])
    });
    render_list(frame, list, "Meetings", items, &app.calendar.cursor);
}

fn draw_meeting_detail(frame: &mut Frame<'_>, app: &App, area: Rect, meeting: &Meeting) {
    let kind = app.classifiers.meeting_kind.classify_category(meeting.kind);
    let place = meeting
        .location
        .as_deref()
        .or(meeting.link.as_deref())
        .unwrap_or("-");
    let lines = vec![
        Line::styled(meeting.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
        Line::raw(""),
        Line::raw(meeting.description.clone()),
        Line::raw(""),
        Line::from(vec![
            Span::raw("Kind: "),
            Span::styled(
                format!("{} {}", kind.icon, meeting.kind),
                Style::default().fg(hex_color(&kind.color)),
            ),
        ]),
        Line::raw(format!("When: {} {}–{}", fmt_date(meeting.date), meeting.start_time, meeting.end_time)),
        Line::raw(format!("Where: {place}")),
        Line::raw(format!("Participants: {}", meeting.participants.join(", "))),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title("Meeting")),
        area,
    );
}

fn draw_email(frame: &mut Frame<'_>, app: &App, area: Rect) {
    match app.email.state.mode {
        ViewMode::Compose => {
            draw_compose(frame, area);
            return;
        }
        ViewMode::Detail(id) => {
            match app.workspace.emails.get(id) {
                Ok(mail) => draw_email_detail(frame, app, area, mail),
                Err(_) => draw_missing(frame, area, id),
            }
            return;
        }
        ViewMode::List => {}
    }

    let [chips, list] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);
    draw_chips(frame, chips, &summarize(app.workspace.emails.list()), app.email.state.filter);

    let records = app.workspace.emails.list();
    let items = rows(&app.email.cursor, records, |mail: &Email| {
        let unread = if mail.read { " " } else { UNREAD_MARKER };
        let starred = if mail.starred { "★" } else { " " };
        let clip = if mail.has_attachment { "📎" } else { " " };
        let subject_style = if mail.read {
            Style::default()
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        Line::from(vec![
            Span::styled(format!("{unread}{starred}{clip} "), Style::default().fg(Color::Yellow)),
            Span::raw(format!("{} — ", mail.sender_name)),
            Span::styled(truncate_row(&mail.subject), subject_style),
            Span::styled(
                format!(" · {}", mail.timestamp),
                Style::default().fg(Color::DarkGray),
            ),
        ])
    });
    render_list(frame, list, "Mail", items, &app.email.cursor);
}

fn draw_email_detail(frame: &mut Frame<'_>, app: &App, area: Rect, mail: &Email) {
    let folder = app.classifiers.folder.classify_category(mail.folder);
    let lines = vec![
        Line::styled(mail.subject.clone(), Style::default().add_modifier(Modifier::BOLD)),
        Line::raw(format!("From: {} <{}>", mail.sender_name, mail.sender)),
        Line::from(vec![
            Span::raw("Folder: "),
            Span::styled(
                format!("{} {}", folder.icon, mail.folder),
                Style::default().fg(hex_color(&folder.color)),
            ),
        ]),
        Line::raw(format!("Received: {}", mail.timestamp)),
        Line::raw(""),
        Line::raw(mail.preview.clone()),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title("Message")),
        area,
    );
}

fn draw_compose(frame: &mut Frame<'_>, area: Rect) {
    // A static form; delivery is out of scope, send and discard both return
    // to the list.
    let lines = vec![
        Line::raw("To:      "),
        Line::raw("Subject: "),
        Line::raw(""),
        Line::raw("Body:"),
        Line::raw(""),
        Line::styled("s send · esc discard", Style::default().fg(Color::DarkGray)),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("New Message")),
        area,
    );
}

fn draw_chat(frame: &mut Frame<'_>, app: &App, area: Rect) {
    if let ViewMode::Detail(id) = app.chat.state.mode {
        match app.workspace.conversations.get(id) {
            Ok(peer) => draw_history(frame, app, area, peer),
            Err(_) => draw_missing(frame, area, id),
        }
        return;
    }

    let records = app.workspace.conversations.list();
    let items = rows(&app.chat.cursor, records, |peer: &Conversation| {
        let presence = if peer.online { ONLINE_MARKER } else { OFFLINE_MARKER };
        let unread = if peer.unread_count > 0 {
            format!(" ({})", peer.unread_count)
        } else {
            String::new()
        };
        Line::from(vec![
            Span::styled(
                format!("{presence} "),
                Style::default().fg(if peer.online { Color::Green } else { Color::DarkGray }),
            ),
            Span::raw(format!("{} ", peer.avatar)),
            Span::styled(
                format!("{}{unread}", peer.name),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" — {}", truncate_row(&peer.last_message))),
            Span::styled(
                format!(" · {}", peer.timestamp),
                Style::default().fg(Color::DarkGray),
            ),
        ])
    });
    render_list(frame, area, "Conversations", items, &app.chat.cursor);
}

fn draw_history(frame: &mut Frame<'_>, app: &App, area: Rect, peer: &Conversation) {
    let title = format!("{} {}", peer.avatar, peer.name);
    // A known conversation without recorded history renders an empty room.
    let history = app.workspace.messages(peer.id).unwrap_or_default();
    let mut lines: Vec<Line<'_>> = Vec::with_capacity(history.len().max(1));
    if history.is_empty() {
        lines.push(Line::styled(
            "No messages yet.",
            Style::default().fg(Color::DarkGray),
        ));
    }
    for message in history {
        let line = Line::from(vec![
            Span::styled(
                format!("[{}] ", message.timestamp),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                format!("{}: ", if message.own { "You" } else { &message.sender }),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(message.body.clone()),
        ]);
        lines.push(if message.own { line.right_aligned() } else { line });
    }
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title(title)),
        area,
    );
}

fn draw_chips<C: Category>(
    frame: &mut Frame<'_>,
    area: Rect,
    chips: &[FilterCount<C>],
    selected: FilterTag<C>,
) {
    let spans: Vec<Span<'_>> = chips
        .iter()
        .map(|chip| {
            let style = if chip.tag == selected {
                Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Span::styled(format!(" {} {} ", chip.label, chip.count), style)
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::ALL).title("Filters")),
        area,
    );
}

fn rows<'a, R>(
    cursor: &ListCursor,
    records: &'a [R],
    row: impl Fn(&'a R) -> Line<'a>,
) -> Vec<ListItem<'a>> {
    cursor
        .visible()
        .iter()
        .filter_map(|&index| records.get(index))
        .map(|record| ListItem::new(row(record)))
        .collect()
}

fn render_list(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &str,
    items: Vec<ListItem<'_>>,
    cursor: &ListCursor,
) {
    if cursor.is_empty() {
        frame.render_widget(
            Paragraph::new("Nothing here.")
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::default().borders(Borders::ALL).title(title.to_owned())),
            area,
        );
        return;
    }
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title.to_owned()))
        .highlight_symbol(LIST_HIGHLIGHT_SYMBOL)
        .highlight_style(Style::default().add_modifier(Modifier::BOLD));
    let mut state = ListState::default();
    state.select(cursor.selected_position());
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_missing(frame: &mut Frame<'_>, area: Rect, id: RecordId) {
    frame.render_widget(
        Paragraph::new(format!("Record {id} not found."))
            .style(Style::default().fg(Color::Red))
            .block(Block::default().borders(Borders::ALL).title("Not Found")),
        area,
    );
}

fn truncate_row(text: &str) -> String {
    truncate_with_ellipsis(text, LIST_ROW_MAX_GRAPHEMES)
}

fn fmt_date(date: Date) -> String {
    // The description is a literal; formatting it cannot fail.
    date.format(&format_description!("[year]-[month]-[day]"))
        .unwrap_or_default()
}
