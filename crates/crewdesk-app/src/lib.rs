//! Application layer for crewdesk: record stores over fixture data, filter
//! summaries, the attendance clock and theme configuration.

/// Attendance clock and work-hour aggregation.
pub mod clock;
/// Theme configuration loaded from `crewdesk.toml`.
pub mod config;
/// Hard-coded sample records for every screen.
pub mod fixtures;
/// Repository-style access to fixture records.
pub mod store;
/// Per-filter counters for the summary chips.
pub mod summary;

pub use clock::{average_hours, format_clock, format_day, total_hours};
pub use config::{AppConfig, Classifiers};
pub use fixtures::{QuickAction, StatCard, UserProfile, Workspace};
pub use store::{FixtureStore, RecordStore, StoreError};
pub use summary::{meetings_on, summarize, upcoming_meetings, FilterCount};
