//! Point Pool
//!
//! Rows of dot tracks sharing one fixed budget (disciplines, backgrounds,
//! virtues).

use tracing::{debug, warn};

use crate::error::{ClickRejected, RowError};
use crate::rows::{RowId, RowList};
use crate::track::{Click, DotTrack};

/// One rated entry: what it rates and its dots.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    pub selection: Option<String>,
    pub track: DotTrack,
}

/// Fixed-budget pool over repeating rows.
#[derive(Debug, Clone, PartialEq)]
pub struct PointPool {
    budget: i32,
    len: u8,
    base: u8,
    requires_selection: bool,
    rows: RowList<Slot>,
}

impl PointPool {
    /// Pool whose rows must have an item selected before dots are bought.
    pub fn new(budget: i32, len: u8, base: u8) -> Self {
        Self {
            budget,
            len,
            base,
            requires_selection: true,
            rows: RowList::new(),
        }
    }

    /// Pool over fixed, pre-labelled rows with no selector (virtues).
    pub fn fixed<S: Into<String>>(
        budget: i32,
        len: u8,
        base: u8,
        labels: impl IntoIterator<Item = S>,
    ) -> Self {
        let mut pool = Self {
            requires_selection: false,
            ..Self::new(budget, len, base)
        };
        for label in labels {
            let track = pool.blank_track();
            pool.rows.push_permanent(Slot {
                selection: Some(label.into()),
                track,
            });
        }
        pool
    }

    /// Add `count` permanent, unselected rows.
    pub fn with_permanent_rows(mut self, count: usize) -> Self {
        for _ in 0..count {
            let track = self.blank_track();
            self.rows.push_permanent(Slot { selection: None, track });
        }
        self
    }

    fn blank_track(&self) -> DotTrack {
        DotTrack::new(self.len, self.base)
    }

    pub fn requires_selection(&self) -> bool {
        self.requires_selection
    }

    pub fn rows(&self) -> &RowList<Slot> {
        &self.rows
    }

    pub fn slot(&self, id: RowId) -> Option<&Slot> {
        self.rows.get(id).map(|row| &row.value)
    }

    /// Filled dots across every row.
    pub fn filled(&self) -> i32 {
        self.rows.iter().map(|row| i32::from(row.value.track.score())).sum()
    }

    pub fn spent(&self) -> i32 {
        let free = i32::from(self.base) * self.rows.len() as i32;
        self.filled() - free
    }

    pub fn remaining(&self) -> i32 {
        self.budget - self.spent()
    }

    /// Current selections in row order, `None` for unselected rows.
    pub fn selections(&self) -> Vec<Option<&str>> {
        self.rows
            .iter()
            .map(|row| row.value.selection.as_deref())
            .collect()
    }

    /// Try to move `row`'s score according to a click on cell `index`.
    ///
    /// Returns the new score; on rejection nothing changes.
    pub fn attempt_click(&mut self, row: RowId, index: usize) -> Result<u8, ClickRejected> {
        let result = self.plan_click(row, index);
        match result {
            Ok(click) => {
                if let Some(entry) = self.rows.get_mut(row) {
                    entry.value.track.apply(click);
                }
                debug!(?row, from = click.from, to = click.to, remaining = self.remaining(), "dots updated");
                Ok(click.to)
            }
            Err(err) => {
                warn!(?row, index, %err, "action denied");
                Err(err)
            }
        }
    }

    fn plan_click(&self, row: RowId, index: usize) -> Result<Click, ClickRejected> {
        let slot = self.slot(row).ok_or(ClickRejected::UnknownTarget)?;
        if self.requires_selection && slot.selection.is_none() {
            return Err(ClickRejected::Unassigned);
        }
        let click = slot.track.click(index)?;
        let remaining = self.remaining();
        if click.is_spend() && click.cost() > remaining {
            return Err(ClickRejected::InsufficientPoints {
                cost: click.cost(),
                remaining,
            });
        }
        Ok(click)
    }

    /// Change what a row rates; its dots go back to base.
    pub fn select(&mut self, row: RowId, selection: Option<String>) -> Result<(), RowError> {
        let entry = self.rows.get_mut(row).ok_or(RowError::UnknownRow(row))?;
        entry.value.selection = selection.filter(|value| !value.is_empty());
        entry.value.track.reset();
        Ok(())
    }

    /// Append a removable, unselected row.
    pub fn add_row(&mut self) -> RowId {
        let track = self.blank_track();
        self.rows.add(Slot { selection: None, track })
    }

    /// Remove a user row. Its dots stop counting against the budget.
    pub fn remove_row(&mut self, row: RowId) -> Result<(), RowError> {
        self.rows.remove(row)?;
        debug!(?row, remaining = self.remaining(), "row removed");
        Ok(())
    }

    /// Drop every user row and put all remaining dots back to base.
    pub fn clear_dynamic(&mut self) {
        self.rows.retain_permanent();
        self.reset_all();
    }

    pub fn reset_all(&mut self) {
        for row in self.rows.iter_mut() {
            row.value.track.reset();
        }
    }

    /// Ids of the permanent rows in order.
    pub fn permanent_rows(&self) -> Vec<RowId> {
        self.rows
            .iter()
            .filter(|row| !row.is_removable())
            .map(|row| row.id())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected(pool: &mut PointPool, value: &str) -> RowId {
        let id = pool.add_row();
        pool.select(id, Some(value.to_string())).unwrap();
        id
    }

    #[test]
    fn test_remaining_accounts_for_base() {
        let mut pool = PointPool::fixed(7, 5, 1, ["conscience", "self-control", "courage"]);
        assert_eq!(pool.remaining(), 7);
        let courage = pool.rows().ids()[2];
        pool.attempt_click(courage, 2).unwrap();
        assert_eq!(pool.filled(), 5);
        assert_eq!(pool.spent(), 2);
        assert_eq!(pool.remaining(), 5);
    }

    #[test]
    fn test_single_item_budget_seven() {
        let mut pool = PointPool::fixed(7, 5, 1, ["courage"]);
        let id = pool.rows().ids()[0];

        assert_eq!(pool.attempt_click(id, 4), Ok(5));
        assert_eq!(pool.remaining(), 3);
    }

    #[test]
    fn test_spend_beyond_remaining_rejected() {
        let mut pool = PointPool::fixed(7, 5, 1, ["conscience", "courage"]);
        let ids = pool.rows().ids();
        pool.attempt_click(ids[0], 4).unwrap();
        pool.attempt_click(ids[1], 2).unwrap();
        assert_eq!(pool.remaining(), 1);

        pool.attempt_click(ids[1], 1).unwrap();
        assert_eq!(pool.remaining(), 2);
        pool.attempt_click(ids[1], 2).unwrap();
        assert_eq!(pool.remaining(), 1);

        let before = pool.clone();
        assert_eq!(
            pool.attempt_click(ids[1], 4),
            Err(ClickRejected::InsufficientPoints { cost: 2, remaining: 1 })
        );
        assert_eq!(pool, before);
    }

    #[test]
    fn test_unassigned_row_rejected() {
        let mut pool = PointPool::new(3, 5, 0).with_permanent_rows(1);
        let id = pool.rows().ids()[0];
        assert_eq!(pool.attempt_click(id, 0), Err(ClickRejected::Unassigned));
        assert_eq!(pool.remaining(), 3);
    }

    #[test]
    fn test_select_resets_dots() {
        let mut pool = PointPool::new(3, 5, 0);
        let id = selected(&mut pool, "auspex");
        pool.attempt_click(id, 2).unwrap();
        assert_eq!(pool.remaining(), 0);

        pool.select(id, Some("celerity".to_string())).unwrap();
        assert_eq!(pool.slot(id).unwrap().track.score(), 0);
        assert_eq!(pool.remaining(), 3);
    }

    #[test]
    fn test_select_empty_is_none() {
        let mut pool = PointPool::new(3, 5, 0);
        let id = selected(&mut pool, "auspex");
        pool.select(id, Some(String::new())).unwrap();
        assert_eq!(pool.slot(id).unwrap().selection, None);
    }

    #[test]
    fn test_refund_allowed_when_overspent() {
        let mut pool = PointPool::new(3, 5, 0);
        let id = selected(&mut pool, "auspex");
        pool.rows.get_mut(id).unwrap().value.track.render(5);
        assert_eq!(pool.remaining(), -2);

        assert_eq!(pool.attempt_click(id, 4), Ok(4));
        assert_eq!(pool.remaining(), -1);
    }

    #[test]
    fn test_removed_row_frees_points() {
        let mut pool = PointPool::new(3, 5, 0);
        let first = selected(&mut pool, "auspex");
        let second = selected(&mut pool, "celerity");
        pool.attempt_click(first, 1).unwrap();
        pool.attempt_click(second, 0).unwrap();
        assert_eq!(pool.remaining(), 0);

        let third = selected(&mut pool, "dominate");
        assert!(matches!(
            pool.attempt_click(third, 0),
            Err(ClickRejected::InsufficientPoints { cost: 1, remaining: 0 })
        ));

        pool.remove_row(second).unwrap();
        assert_eq!(pool.remaining(), 1);
        assert_eq!(pool.attempt_click(third, 0), Ok(1));
        assert_eq!(pool.remaining(), 0);
    }

    #[test]
    fn test_permanent_row_not_removable() {
        let mut pool = PointPool::new(3, 5, 0).with_permanent_rows(2);
        let id = pool.rows().ids()[0];
        assert_eq!(pool.remove_row(id), Err(RowError::PermanentRow(id)));
        assert_eq!(pool.rows().len(), 2);
    }

    #[test]
    fn test_clear_dynamic() {
        let mut pool = PointPool::new(3, 5, 0).with_permanent_rows(1);
        let fixed = pool.permanent_rows()[0];
        pool.select(fixed, Some("auspex".to_string())).unwrap();
        pool.attempt_click(fixed, 0).unwrap();
        let extra = selected(&mut pool, "celerity");
        pool.attempt_click(extra, 1).unwrap();

        pool.clear_dynamic();
        assert_eq!(pool.rows().len(), 1);
        assert_eq!(pool.remaining(), 3);
        assert_eq!(pool.selections(), vec![Some("auspex")]);
    }

    #[test]
    fn test_click_path_never_goes_negative() {
        let mut pool = PointPool::new(5, 5, 0);
        let a = selected(&mut pool, "allies");
        let b = selected(&mut pool, "contacts");
        for (row, index) in [(a, 4), (b, 4), (b, 0), (a, 2), (b, 3), (a, 0), (b, 1)] {
            let _ = pool.attempt_click(row, index);
            assert!(pool.remaining() >= 0);
            assert_eq!(pool.remaining(), 5 - pool.filled());
        }
    }
}
