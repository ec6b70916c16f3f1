//! Shared constants for the TUI to keep layout and timing in sync.

/// Interval in milliseconds between UI ticks. One second, the cadence of the
/// attendance clock.
pub const TUI_TICK_RATE_MS: u64 = 1_000;
/// Highlight symbol shown beside selected list entries.
pub const LIST_HIGHLIGHT_SYMBOL: &str = "▶ ";
/// Maximum graphemes of a list row before truncation.
pub const LIST_ROW_MAX_GRAPHEMES: usize = 96;
/// Marker shown next to unread emails.
pub const UNREAD_MARKER: &str = "●";
/// Marker shown next to online conversations.
pub const ONLINE_MARKER: &str = "●";
/// Marker shown next to offline conversations.
pub const OFFLINE_MARKER: &str = "○";
