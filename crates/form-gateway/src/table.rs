//! Table View-Model
//!
//! Keyed rows with optimistic removal, a counter badge and an empty-state
//! placeholder. Per-row lifecycle:
//! `Visible -> Pending -> (removed | Failed)`, `Failed -> Pending` on retry.

/// Lifecycle of one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowState {
    Visible,
    Pending,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow<R> {
    pub key: u32,
    pub data: R,
    pub state: RowState,
    /// Hidden by the current search/filter
    pub hidden: bool,
}

/// What the table body should render
#[derive(Debug, PartialEq)]
pub enum DisplayRow<'a, R> {
    Row(&'a TableRow<R>),
    Placeholder(&'a str),
}

/// Text a row exposes to search and column filters
pub trait RowText {
    /// Whole-row text, matched case-insensitively against the search box
    fn text(&self) -> String;
    /// Value of a named column, matched against a filter dropdown
    fn column(&self, name: &str) -> Option<String>;
}

/// Placeholder when rows exist but the filter hides them all
pub const NO_MATCH_MESSAGE: &str = "No matching records";

#[derive(Debug, Clone, PartialEq)]
pub struct TableViewModel<R> {
    rows: Vec<TableRow<R>>,
    count: u32,
    empty_message: String,
}

impl<R> TableViewModel<R> {
    pub fn new(empty_message: &str) -> Self {
        Self {
            rows: Vec::new(),
            count: 0,
            empty_message: empty_message.to_string(),
        }
    }

    /// Replace all rows from a fresh fetch; the counter follows
    pub fn load(&mut self, rows: impl IntoIterator<Item = (u32, R)>) {
        self.rows = rows
            .into_iter()
            .map(|(key, data)| TableRow {
                key,
                data,
                state: RowState::Visible,
                hidden: false,
            })
            .collect();
        self.count = self.rows.len() as u32;
    }

    pub fn rows(&self) -> &[TableRow<R>] {
        &self.rows
    }

    pub fn get(&self, key: u32) -> Option<&TableRow<R>> {
        self.rows.iter().find(|r| r.key == key)
    }

    /// Counter badge value
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Mark a row as having an action in flight.
    ///
    /// False for unknown (already removed) or pending rows, so repeated
    /// clicks do nothing.
    pub fn begin_action(&mut self, key: u32) -> bool {
        match self.rows.iter_mut().find(|r| r.key == key) {
            Some(row) if row.state != RowState::Pending => {
                row.state = RowState::Pending;
                true
            }
            _ => false,
        }
    }

    /// Remove the row and decrement the counter, floored at zero
    pub fn complete_success(&mut self, key: u32) -> Option<R> {
        let idx = self.rows.iter().position(|r| r.key == key)?;
        let row = self.rows.remove(idx);
        self.count = self.count.saturating_sub(1);
        Some(row.data)
    }

    /// Success on a row that stays: back to `Visible`, counter untouched
    pub fn complete_in_place(&mut self, key: u32) {
        if let Some(row) = self.rows.iter_mut().find(|r| r.key == key) {
            row.state = RowState::Visible;
        }
    }

    /// Keep the row, showing the error next to it
    pub fn complete_failure(&mut self, key: u32, message: &str) {
        if let Some(row) = self.rows.iter_mut().find(|r| r.key == key) {
            row.state = RowState::Failed(message.to_string());
        }
    }

    /// Rows to draw, or exactly one placeholder when nothing is visible
    pub fn display(&self) -> Vec<DisplayRow<'_, R>> {
        if self.rows.is_empty() {
            return vec![DisplayRow::Placeholder(&self.empty_message)];
        }
        let visible: Vec<DisplayRow<'_, R>> = self.rows.iter().filter(|r| !r.hidden).map(DisplayRow::Row).collect();
        if visible.is_empty() {
            return vec![DisplayRow::Placeholder(NO_MATCH_MESSAGE)];
        }
        visible
    }
}

impl<R: RowText> TableViewModel<R> {
    /// Hide rows not containing `query` or whose `column` lacks `value`.
    /// Empty query/value match everything.
    pub fn filter(&mut self, query: &str, column: &str, value: &str) {
        let query = query.trim().to_lowercase();
        for row in self.rows.iter_mut() {
            let matches_search = query.is_empty() || row.data.text().to_lowercase().contains(&query);
            let matches_column = value.is_empty()
                || row
                    .data
                    .column(column)
                    .map_or(false, |c| c.contains(value));
            row.hidden = !(matches_search && matches_column);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Emp {
        name: &'static str,
        dept: &'static str,
    }

    impl RowText for Emp {
        fn text(&self) -> String {
            format!("{} {}", self.name, self.dept)
        }
        fn column(&self, name: &str) -> Option<String> {
            match name {
                "dept" => Some(self.dept.to_string()),
                _ => None,
            }
        }
    }

    fn table(n: u32) -> TableViewModel<u32> {
        let mut t = TableViewModel::new("No projects pending review");
        t.load((1..=n).map(|k| (k, k * 10)));
        t
    }

    #[test]
    fn test_removing_last_row_shows_one_placeholder() {
        let mut t = table(1);
        assert!(t.begin_action(1));
        assert_eq!(t.complete_success(1), Some(10));
        let shown = t.display();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0], DisplayRow::Placeholder("No projects pending review"));
        assert_eq!(t.count(), 0);
    }

    #[test]
    fn test_removing_non_last_row_decrements_by_one() {
        let mut t = table(3);
        t.begin_action(2);
        t.complete_success(2);
        assert_eq!(t.count(), 2);
        assert_eq!(t.display().len(), 2);
        assert!(t.get(2).is_none());
    }

    #[test]
    fn test_counter_floors_at_zero() {
        let mut t = table(2);
        // badge already out of sync with the rows
        t.count = 0;
        t.begin_action(1);
        t.complete_success(1);
        assert_eq!(t.count(), 0);
    }

    #[test]
    fn test_repeated_clicks_are_noops() {
        let mut t = table(2);
        assert!(t.begin_action(1));
        assert!(!t.begin_action(1), "pending row ignores a second click");
        t.complete_success(1);
        assert!(!t.begin_action(1), "removed row no longer exists");
        assert_eq!(t.complete_success(1), None);
        assert_eq!(t.count(), 1);
    }

    #[test]
    fn test_failure_keeps_row_and_allows_retry() {
        let mut t = table(1);
        t.begin_action(1);
        t.complete_failure(1, "Cannot delete Admin ❌");
        assert_eq!(t.get(1).unwrap().state, RowState::Failed("Cannot delete Admin ❌".into()));
        assert_eq!(t.count(), 1);
        assert!(t.begin_action(1));
    }

    #[test]
    fn test_filter_by_search_and_column() {
        let mut t = TableViewModel::new("No employees");
        t.load(vec![
            (1, Emp { name: "Asha Patel", dept: "Engineering" }),
            (2, Emp { name: "Ravi Shah", dept: "Design" }),
            (3, Emp { name: "Nisha Rao", dept: "Engineering" }),
        ]);

        t.filter("sha", "dept", "");
        assert_eq!(t.display().len(), 3);

        t.filter("SHA", "dept", "Engineering");
        let keys: Vec<u32> = t
            .display()
            .iter()
            .filter_map(|d| match d {
                DisplayRow::Row(r) => Some(r.key),
                DisplayRow::Placeholder(_) => None,
            })
            .collect();
        assert_eq!(keys, vec![1, 3]);

        t.filter("", "dept", "");
        assert_eq!(t.display().len(), 3);
    }

    #[test]
    fn test_filter_hiding_every_row_shows_placeholder() {
        let mut t = TableViewModel::new("No employees");
        t.load(vec![(1, Emp { name: "Asha Patel", dept: "Engineering" })]);

        t.filter("zzz", "dept", "");
        assert_eq!(t.display(), vec![DisplayRow::Placeholder(NO_MATCH_MESSAGE)]);
        assert_eq!(t.count(), 1);

        t.filter("", "dept", "Design");
        assert_eq!(t.display().len(), 1);
        assert!(matches!(t.display()[0], DisplayRow::Placeholder(_)));

        t.filter("asha", "dept", "");
        assert!(matches!(t.display()[0], DisplayRow::Row(r) if r.key == 1));
    }
}
