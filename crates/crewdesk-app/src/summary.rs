use time::Date;

use crewdesk_core::category::Category;
use crewdesk_core::filter::{count, Categorized, FilterTag};
use crewdesk_core::record::Meeting;

/// One summary chip: a selectable tag, its display label and how many records
/// it would keep visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCount<C> {
    /// The tag the chip selects.
    pub tag: FilterTag<C>,
    /// Display label (`All`, `In Progress`, ...).
    pub label: &'static str,
    /// Number of records visible under the tag.
    pub count: usize,
}

/// Build the summary chips for a record set: `all` first, then one chip per
/// category in display order.
///
/// Each count is derived through [`count`], so it always equals the length of
/// the corresponding visible subset; nothing is hard-coded.
pub fn summarize<R: Categorized>(records: &[R]) -> Vec<FilterCount<R::Category>> {
    FilterTag::<R::Category>::all_tags()
        .map(|tag| FilterCount {
            tag,
            label: match tag {
                FilterTag::All => "All",
                FilterTag::Only(category) => category.label(),
            },
            count: count(records, tag),
        })
        .collect()
}

/// Meetings scheduled on `today`, in fixture order.
pub fn meetings_on(meetings: &[Meeting], today: Date) -> Vec<&Meeting> {
    meetings.iter().filter(|meeting| meeting.date == today).collect()
}

/// Meetings scheduled after `today`, in fixture order.
pub fn upcoming_meetings(meetings: &[Meeting], today: Date) -> Vec<&Meeting> {
    meetings.iter().filter(|meeting| meeting.date > today).collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use super::*;
    use crate::fixtures::Workspace;
    use crate::store::RecordStore;
    use crewdesk_core::category::TaskStatus;
    use crewdesk_core::filter::select_visible;
    use time::macros::date;

    #[test]
    fn chips_match_the_tasks_screen() {
        let ws = Workspace::seed().expect("fixture ids are unique");
        let chips = summarize(ws.tasks.list());

        let rendered: Vec<(&str, usize)> =
            chips.iter().map(|chip| (chip.label, chip.count)).collect();
        assert_eq!(
            rendered,
            vec![("All", 5), ("Pending", 2), ("In Progress", 2), ("Completed", 1)]
        );
    }

    #[test]
    fn every_chip_count_equals_its_visible_subset() {
        let ws = Workspace::seed().expect("fixture ids are unique");
        for chip in summarize(ws.tasks.list()) {
            assert_eq!(chip.count, select_visible(ws.tasks.list(), chip.tag).len());
        }
        for chip in summarize(ws.emails.list()) {
            assert_eq!(chip.count, select_visible(ws.emails.list(), chip.tag).len());
        }
    }

    #[test]
    fn all_chip_counts_everything() {
        let ws = Workspace::seed().expect("fixture ids are unique");
        let chips = summarize(ws.attendance.list());
        assert_eq!(chips[0].tag, FilterTag::All);
        assert_eq!(chips[0].count, ws.attendance.len());
    }

    #[test]
    fn chip_tags_round_trip_through_tokens() {
        let ws = Workspace::seed().expect("fixture ids are unique");
        for chip in summarize(ws.tasks.list()) {
            assert_eq!(
                FilterTag::<TaskStatus>::parse(chip.tag.token()),
                Ok(chip.tag)
            );
        }
    }

    #[test]
    fn meeting_day_partition_is_order_preserving() {
        let ws = Workspace::seed().expect("fixture ids are unique");
        let today = date!(2024 - 01 - 15);

        let todays: Vec<&str> = meetings_on(ws.meetings.list(), today)
            .iter()
            .map(|m| m.title.as_str())
            .collect();
        assert_eq!(todays, vec!["Team Standup Meeting", "Client Presentation"]);

        let upcoming = upcoming_meetings(ws.meetings.list(), today);
        assert_eq!(upcoming.len(), 3);
        assert!(upcoming.iter().all(|m| m.date > today));
    }
}
