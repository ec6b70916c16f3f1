//! Domain types for the crewdesk screens: category enumerations, the display
//! classifier, the filter selector and the per-screen selection state machine.

/// Closed category enumerations carried by records.
pub mod category;
/// Category to display color/icon classification tables.
pub mod classify;
/// Filter tags and visible-subset derivation.
pub mod filter;
/// Record identifier type.
pub mod id;
/// Fixture record shapes for every screen.
pub mod record;
/// Per-screen selection state machine.
pub mod screen;

pub use category::{
    ActivityKind, AttendanceStatus, Category, Folder, MeetingKind, NoCategory, TaskPriority,
    TaskStatus,
};
pub use classify::{Classification, Classifier};
pub use filter::{Categorized, FilterTag, TagParseError, count, select_visible};
pub use id::RecordId;
pub use record::Identified;
pub use screen::{ComposeSupport, ScreenAction, ScreenState, ViewMode};
