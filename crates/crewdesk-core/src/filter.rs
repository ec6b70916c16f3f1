use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::category::Category;

/// Currently selected filter over a screen's record set.
///
/// Exactly one tag is selected at a time; [`FilterTag::All`] is the sentinel
/// that keeps every record visible and is the initial selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterTag<C> {
    /// Keep every record regardless of category.
    All,
    /// Keep only records whose category equals the tagged value.
    Only(C),
}

impl<C> Default for FilterTag<C> {
    fn default() -> Self {
        Self::All
    }
}

/// Error raised when a filter token cannot be resolved.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TagParseError {
    /// The token is neither `all` nor a known category of the screen.
    #[error("unknown filter tag: {token}")]
    UnknownTag {
        /// The offending input, as provided.
        token: String,
    },
}

impl<C: Category> FilterTag<C> {
    /// Whether this is the `all` sentinel.
    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Whether a record with the given category stays visible under this tag.
    pub fn matches(&self, category: C) -> bool {
        match self {
            Self::All => true,
            Self::Only(tagged) => *tagged == category,
        }
    }

    /// Canonical token for display and CLI round-trips.
    #[must_use]
    pub fn token(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(tagged) => tagged.token(),
        }
    }

    /// Parse a filter token with the same normalization as category parsing.
    ///
    /// # Errors
    /// Returns [`TagParseError::UnknownTag`] when the token is neither `all`
    /// nor a category of the screen's enumeration.
    pub fn parse(raw: &str) -> Result<Self, TagParseError> {
        if raw.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        C::parse(raw).map(Self::Only).ok_or_else(|| TagParseError::UnknownTag {
            token: raw.to_string(),
        })
    }

    /// Every selectable tag for the screen: `all` followed by each category.
    pub fn all_tags() -> impl Iterator<Item = Self> {
        std::iter::once(Self::All).chain(C::ALL.iter().copied().map(Self::Only))
    }
}

/// A record that carries one category from a closed enumeration.
pub trait Categorized {
    /// The category enumeration of the record's screen.
    type Category: Category;

    /// Category value of this record.
    fn category(&self) -> Self::Category;
}

/// Derive the visible subset of `records` under `tag`.
///
/// The result is the longest order-preserving subsequence whose elements match
/// the tag; with [`FilterTag::All`] it is the identity. The input is never
/// mutated and applying the same tag twice is idempotent.
pub fn select_visible<R: Categorized>(records: &[R], tag: FilterTag<R::Category>) -> Vec<&R> {
    records.iter().filter(|record| tag.matches(record.category())).collect()
}

/// Number of records visible under `tag`.
///
/// Equals `select_visible(records, tag).len()` for every tag; the summary
/// counters rendered next to each filter chip rely on this.
pub fn count<R: Categorized>(records: &[R], tag: FilterTag<R::Category>) -> usize {
    records.iter().filter(|record| tag.matches(record.category())).count()
}
