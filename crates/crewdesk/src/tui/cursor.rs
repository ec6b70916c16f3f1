//! List cursor over the visible subset of a screen's records.

/// Tracks which rows of a record set are visible under the active filter and
/// which visible row is highlighted.
///
/// `visible` holds indices into the screen's full record slice; `selected` is
/// a position within `visible`, clamped whenever the subset changes.
#[derive(Debug, Default, Clone)]
pub struct ListCursor {
    visible: Vec<usize>,
    selected: usize,
}

impl ListCursor {
    /// Replace the visible subset, keeping the highlight in bounds.
    pub fn rebuild(&mut self, visible: Vec<usize>) {
        self.visible = visible;
        if self.selected >= self.visible.len() {
            self.selected = self.visible.len().saturating_sub(1);
        }
    }

    /// Move the highlight one row down, clamped to the last row.
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.visible.len() {
            self.selected += 1;
        }
    }

    /// Move the highlight one row up, clamped to the first row.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Index into the full record slice of the highlighted row.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.visible.get(self.selected).copied()
    }

    /// Position of the highlight within the visible subset, for the list
    /// widget's state.
    #[must_use]
    pub fn selected_position(&self) -> Option<usize> {
        if self.visible.is_empty() {
            None
        } else {
            Some(self.selected)
        }
    }

    /// Indices of the visible rows, in display order.
    #[must_use]
    pub fn visible(&self) -> &[usize] {
        &self.visible
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cursor_has_no_selection() {
        let cursor = ListCursor::default();
        assert_eq!(cursor.selected_index(), None);
        assert_eq!(cursor.selected_position(), None);
    }

    #[test]
    fn movement_clamps_at_both_ends() {
        let mut cursor = ListCursor::default();
        cursor.rebuild(vec![0, 2, 4]);

        cursor.select_prev();
        assert_eq!(cursor.selected_index(), Some(0));

        cursor.select_next();
        cursor.select_next();
        cursor.select_next();
        assert_eq!(cursor.selected_index(), Some(4));
        assert_eq!(cursor.selected_position(), Some(2));
    }

    #[test]
    fn rebuild_to_smaller_subset_pulls_selection_in_bounds() {
        let mut cursor = ListCursor::default();
        cursor.rebuild(vec![0, 1, 2, 3]);
        cursor.select_next();
        cursor.select_next();
        cursor.select_next();

        cursor.rebuild(vec![1, 3]);
        assert_eq!(cursor.selected_position(), Some(1));
        assert_eq!(cursor.selected_index(), Some(3));

        cursor.rebuild(Vec::new());
        assert_eq!(cursor.selected_index(), None);
    }
}
