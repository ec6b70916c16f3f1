//! TUI state: the active screen, one selection state per screen and the
//! attendance clock.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use time::OffsetDateTime;

use crewdesk_app::{format_clock, format_day, Classifiers, RecordStore, Workspace};
use crewdesk_core::filter::Categorized;
use crewdesk_core::{
    AttendanceStatus, Category, ComposeSupport, FilterTag, Folder, Identified, MeetingKind,
    NoCategory, ScreenAction, ScreenState, TaskStatus, ViewMode,
};

use super::cursor::ListCursor;

/// The six navigable screens, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Tasks,
    Attendance,
    Calendar,
    Email,
    Chat,
}

impl Screen {
    /// Tab order of the screens.
    pub const ALL: [Self; 6] = [
        Self::Dashboard,
        Self::Tasks,
        Self::Attendance,
        Self::Calendar,
        Self::Email,
        Self::Chat,
    ];

    /// Tab title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Tasks => "Tasks",
            Self::Attendance => "Attendance",
            Self::Calendar => "Calendar",
            Self::Email => "Email",
            Self::Chat => "Chat",
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Selection state and list cursor of one screen.
#[derive(Debug, Clone)]
pub struct Pane<C: Copy + Eq> {
    /// The screen's selection state machine.
    pub state: ScreenState<C>,
    /// Cursor over the visible rows.
    pub cursor: ListCursor,
    compose: ComposeSupport,
}

impl<C: Category> Pane<C> {
    fn new(compose: ComposeSupport) -> Self {
        Self {
            state: ScreenState::new(compose),
            cursor: ListCursor::default(),
            compose,
        }
    }

    /// Drop everything back to the initial list view with the `all` filter.
    /// Called when the user navigates away; screen state is transient.
    fn reset(&mut self) {
        self.state = ScreenState::new(self.compose);
        self.cursor = ListCursor::default();
    }

    fn apply(&mut self, action: ScreenAction<C>) {
        self.state = self.state.apply(action);
    }

    /// Recompute which rows the active filter keeps visible.
    fn rebuild<R: Categorized<Category = C>>(&mut self, records: &[R]) {
        let visible = records
            .iter()
            .enumerate()
            .filter(|(_, record)| self.state.filter.matches(record.category()))
            .map(|(index, _)| index)
            .collect();
        self.cursor.rebuild(visible);
    }

    /// Every row is visible; used by the unfiltered screens.
    fn rebuild_all(&mut self, len: usize) {
        self.cursor.rebuild((0..len).collect());
    }

    /// Advance to the next filter tag, wrapping after the last category.
    fn cycle_filter(&mut self) {
        let tags: Vec<FilterTag<C>> = FilterTag::all_tags().collect();
        let position = tags.iter().position(|tag| *tag == self.state.filter).unwrap_or(0);
        self.apply(ScreenAction::SetFilter(tags[(position + 1) % tags.len()]));
    }

    /// Open the detail view of the row under the cursor.
    fn open_selected<R: Identified>(&mut self, records: &[R]) {
        if let Some(record) = self.cursor.selected_index().and_then(|i| records.get(i)) {
            self.apply(ScreenAction::SelectItem(record.id()));
        }
    }
}

/// Everything the TUI draws and mutates.
pub struct App {
    pub workspace: Workspace,
    pub classifiers: Classifiers,
    pub screen: Screen,
    pub dashboard: Pane<NoCategory>,
    pub tasks: Pane<TaskStatus>,
    pub attendance: Pane<AttendanceStatus>,
    pub calendar: Pane<MeetingKind>,
    pub email: Pane<Folder>,
    pub chat: Pane<NoCategory>,
    /// Attendance clock line, refreshed every tick.
    pub clock: String,
    /// Long day line under the clock.
    pub day: String,
    pub should_quit: bool,
}

impl App {
    pub fn new(workspace: Workspace, classifiers: Classifiers) -> Self {
        let mut app = Self {
            workspace,
            classifiers,
            screen: Screen::Dashboard,
            dashboard: Pane::new(ComposeSupport::Disabled),
            tasks: Pane::new(ComposeSupport::Disabled),
            attendance: Pane::new(ComposeSupport::Disabled),
            calendar: Pane::new(ComposeSupport::Disabled),
            email: Pane::new(ComposeSupport::Enabled),
            chat: Pane::new(ComposeSupport::Disabled),
            clock: String::new(),
            day: String::new(),
            should_quit: false,
        };
        app.rebuild_active();
        app.tick();
        app
    }

    /// Advance the clock. Runs once per second from the event loop.
    pub fn tick(&mut self) {
        let now = OffsetDateTime::now_utc();
        self.clock = format_clock(now);
        self.day = format_day(now);
    }

    /// View mode of the active screen.
    #[must_use]
    pub fn mode(&self) -> ViewMode {
        match self.screen {
            Screen::Dashboard => self.dashboard.state.mode,
            Screen::Tasks => self.tasks.state.mode,
            Screen::Attendance => self.attendance.state.mode,
            Screen::Calendar => self.calendar.state.mode,
            Screen::Email => self.email.state.mode,
            Screen::Chat => self.chat.state.mode,
        }
    }

    /// Route one key press. Unknown keys are ignored.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Char('q') if self.mode() == ViewMode::List => self.should_quit = true,
            KeyCode::Tab => self.switch_to(self.screen.next()),
            KeyCode::BackTab => self.switch_to(self.screen.prev()),
            KeyCode::Char(digit @ '1'..='6') => {
                let index = digit as usize - '1' as usize;
                self.switch_to(Screen::ALL[index]);
            }
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Enter => self.open_selected(),
            KeyCode::Esc => self.back(),
            KeyCode::Char('f') => self.cycle_filter(),
            KeyCode::Char('c') => self.compose(),
            KeyCode::Char('s') => self.send(),
            _ => {}
        }
    }

    /// Leave the current screen, resetting its state, and enter `next`.
    fn switch_to(&mut self, next: Screen) {
        if next == self.screen {
            return;
        }
        match self.screen {
            Screen::Dashboard => self.dashboard.reset(),
            Screen::Tasks => self.tasks.reset(),
            Screen::Attendance => self.attendance.reset(),
            Screen::Calendar => self.calendar.reset(),
            Screen::Email => self.email.reset(),
            Screen::Chat => self.chat.reset(),
        }
        self.screen = next;
        self.rebuild_active();
    }

    fn rebuild_active(&mut self) {
        match self.screen {
            Screen::Dashboard => self.dashboard.rebuild_all(self.workspace.activities.list().len()),
            Screen::Tasks => self.tasks.rebuild(self.workspace.tasks.list()),
            Screen::Attendance => self.attendance.rebuild(self.workspace.attendance.list()),
            Screen::Calendar => self.calendar.rebuild(self.workspace.meetings.list()),
            Screen::Email => self.email.rebuild(self.workspace.emails.list()),
            Screen::Chat => self.chat.rebuild_all(self.workspace.conversations.list().len()),
        }
    }

    fn move_selection(&mut self, delta: i32) {
        if self.mode() != ViewMode::List {
            return;
        }
        let cursor = match self.screen {
            Screen::Dashboard => &mut self.dashboard.cursor,
            Screen::Tasks => &mut self.tasks.cursor,
            Screen::Attendance => &mut self.attendance.cursor,
            Screen::Calendar => &mut self.calendar.cursor,
            Screen::Email => &mut self.email.cursor,
            Screen::Chat => &mut self.chat.cursor,
        };
        if delta > 0 {
            cursor.select_next();
        } else {
            cursor.select_prev();
        }
    }

    fn open_selected(&mut self) {
        match self.screen {
            Screen::Dashboard => self.dashboard.open_selected(self.workspace.activities.list()),
            Screen::Tasks => self.tasks.open_selected(self.workspace.tasks.list()),
            Screen::Attendance => self.attendance.open_selected(self.workspace.attendance.list()),
            Screen::Calendar => self.calendar.open_selected(self.workspace.meetings.list()),
            Screen::Email => self.email.open_selected(self.workspace.emails.list()),
            Screen::Chat => self.chat.open_selected(self.workspace.conversations.list()),
        }
    }

    fn back(&mut self) {
        match self.screen {
            Screen::Dashboard => self.dashboard.apply(ScreenAction::GoBack),
            Screen::Tasks => self.tasks.apply(ScreenAction::GoBack),
            Screen::Attendance => self.attendance.apply(ScreenAction::GoBack),
            Screen::Calendar => self.calendar.apply(ScreenAction::GoBack),
            Screen::Email => {
                let action = if self.email.state.mode == ViewMode::Compose {
                    ScreenAction::CancelCompose
                } else {
                    ScreenAction::GoBack
                };
                self.email.apply(action);
            }
            Screen::Chat => self.chat.apply(ScreenAction::GoBack),
        }
    }

    fn cycle_filter(&mut self) {
        if self.mode() != ViewMode::List {
            return;
        }
        match self.screen {
            // No categories to cycle through on the unfiltered screens.
            Screen::Dashboard | Screen::Chat => {}
            Screen::Tasks => self.tasks.cycle_filter(),
            Screen::Attendance => self.attendance.cycle_filter(),
            Screen::Calendar => self.calendar.cycle_filter(),
            Screen::Email => self.email.cycle_filter(),
        }
        self.rebuild_active();
    }

    fn compose(&mut self) {
        // The state machine no-ops this everywhere but the email screen.
        match self.screen {
            Screen::Dashboard => self.dashboard.apply(ScreenAction::Compose),
            Screen::Tasks => self.tasks.apply(ScreenAction::Compose),
            Screen::Attendance => self.attendance.apply(ScreenAction::Compose),
            Screen::Calendar => self.calendar.apply(ScreenAction::Compose),
            Screen::Email => self.email.apply(ScreenAction::Compose),
            Screen::Chat => self.chat.apply(ScreenAction::Compose),
        }
    }

    fn send(&mut self) {
        if self.screen == Screen::Email {
            self.email.apply(ScreenAction::Send);
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use super::*;
    use crewdesk_core::RecordId;

    fn app() -> App {
        let workspace = Workspace::seed().expect("fixture ids are unique");
        App::new(workspace, Classifiers::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn starts_on_the_dashboard_in_list_view() {
        let app = app();
        assert_eq!(app.screen, Screen::Dashboard);
        assert_eq!(app.mode(), ViewMode::List);
        assert!(!app.clock.is_empty());
    }

    #[test]
    fn q_quits_from_the_list_view_only() {
        let mut app = app();
        app.switch_to(Screen::Tasks);
        app.handle_key(key(KeyCode::Enter));
        assert!(matches!(app.mode(), ViewMode::Detail(_)));

        app.handle_key(key(KeyCode::Char('q')));
        assert!(!app.should_quit);

        app.handle_key(key(KeyCode::Esc));
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn enter_opens_the_record_under_the_cursor() {
        let mut app = app();
        app.switch_to(Screen::Tasks);
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.tasks.state.selection(), Some(RecordId::new(2)));
    }

    #[test]
    fn cycling_the_filter_shrinks_the_visible_subset() {
        let mut app = app();
        app.switch_to(Screen::Tasks);
        assert_eq!(app.tasks.cursor.visible().len(), 5);

        // all -> pending
        app.handle_key(key(KeyCode::Char('f')));
        assert_eq!(app.tasks.state.filter, FilterTag::Only(TaskStatus::Pending));
        assert_eq!(app.tasks.cursor.visible().len(), 2);

        // pending -> in progress -> completed -> all again
        app.handle_key(key(KeyCode::Char('f')));
        app.handle_key(key(KeyCode::Char('f')));
        app.handle_key(key(KeyCode::Char('f')));
        assert!(app.tasks.state.filter.is_all());
        assert_eq!(app.tasks.cursor.visible().len(), 5);
    }

    #[test]
    fn leaving_a_screen_resets_its_state() {
        let mut app = app();
        app.switch_to(Screen::Tasks);
        app.handle_key(key(KeyCode::Char('f')));
        app.handle_key(key(KeyCode::Enter));

        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.screen, Screen::Attendance);

        assert!(app.tasks.state.filter.is_all());
        assert_eq!(app.tasks.state.mode, ViewMode::List);
    }

    #[test]
    fn compose_only_works_on_the_email_screen() {
        let mut app = app();
        app.switch_to(Screen::Chat);
        app.handle_key(key(KeyCode::Char('c')));
        assert_eq!(app.mode(), ViewMode::List);

        app.switch_to(Screen::Email);
        app.handle_key(key(KeyCode::Char('c')));
        assert_eq!(app.mode(), ViewMode::Compose);

        app.handle_key(key(KeyCode::Char('s')));
        assert_eq!(app.mode(), ViewMode::List);
    }

    #[test]
    fn digit_keys_jump_between_screens() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('5')));
        assert_eq!(app.screen, Screen::Email);
        app.handle_key(key(KeyCode::Char('1')));
        assert_eq!(app.screen, Screen::Dashboard);
    }

    #[test]
    fn filter_key_is_inert_on_unfiltered_screens() {
        let mut app = app();
        app.switch_to(Screen::Chat);
        let before = app.chat.cursor.visible().len();
        app.handle_key(key(KeyCode::Char('f')));
        assert!(app.chat.state.filter.is_all());
        assert_eq!(app.chat.cursor.visible().len(), before);
    }
}
