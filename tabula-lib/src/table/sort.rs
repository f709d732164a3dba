//! Sort state.

use std::fmt;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl Direction {
    /// Wire name used in sort specs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One column's sort request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortEntry {
    /// Column key.
    pub key: String,
    /// Requested direction.
    pub direction: Direction,
}

impl SortEntry {
    /// Creates a new entry.
    pub fn new(key: impl Into<String>, direction: Direction) -> Self {
        Self {
            key: key.into(),
            direction,
        }
    }
}

/// Ordered list of sort requests.
///
/// Only single-column sort is supported: the first entry wins. Further
/// entries are kept but never serialized or applied.
///
/// # Example
///
/// ```
/// use tabula_lib::table::{Direction, SortState};
///
/// let sort = SortState::none().toggled("name");
/// assert_eq!(sort.direction_of("name"), Some(Direction::Asc));
///
/// let sort = sort.toggled("name");
/// assert_eq!(sort.spec(), "name:desc");
///
/// assert!(sort.toggled("name").is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    entries: Vec<SortEntry>,
}

impl SortState {
    /// No sorting.
    pub fn none() -> Self {
        Self::default()
    }

    /// Sort by a single column.
    pub fn by(key: impl Into<String>, direction: Direction) -> Self {
        Self {
            entries: vec![SortEntry::new(key, direction)],
        }
    }

    /// Adds a secondary entry. Kept, but ignored by single-column sort.
    pub fn then(mut self, key: impl Into<String>, direction: Direction) -> Self {
        self.entries.push(SortEntry::new(key, direction));
        self
    }

    /// The effective sort entry.
    pub fn primary(&self) -> Option<&SortEntry> {
        self.entries.first()
    }

    /// All entries, in order.
    pub fn entries(&self) -> &[SortEntry] {
        &self.entries
    }

    /// Returns `true` if nothing is sorted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current direction of a column, if it is the sorted one.
    pub fn direction_of(&self, key: &str) -> Option<Direction> {
        self.primary()
            .filter(|entry| entry.key == key)
            .map(|entry| entry.direction)
    }

    /// Next state after toggling a column.
    ///
    /// Cycles `unsorted -> asc -> desc -> unsorted`. Toggling a column other
    /// than the sorted one starts it at ascending and drops the old entry.
    pub fn toggled(&self, key: &str) -> Self {
        match self.direction_of(key) {
            None => Self::by(key, Direction::Asc),
            Some(Direction::Asc) => Self::by(key, Direction::Desc),
            Some(Direction::Desc) => Self::none(),
        }
    }

    /// Keeps only the entries accepted by `keep`.
    pub(crate) fn retain(&mut self, keep: impl Fn(&SortEntry) -> bool) {
        self.entries.retain(|entry| keep(entry));
    }

    /// Serializes the first entry as `"<key>:<asc|desc>"`, or `""` when
    /// unsorted.
    pub fn spec(&self) -> String {
        self.primary()
            .map(|entry| format!("{}:{}", entry.key, entry.direction))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_toggles_return_to_unsorted() {
        let start = SortState::none();
        let once = start.toggled("name");
        let twice = once.toggled("name");
        let thrice = twice.toggled("name");

        assert_eq!(once.spec(), "name:asc");
        assert_eq!(twice.spec(), "name:desc");
        assert_eq!(thrice, start);
    }

    #[test]
    fn test_toggle_other_column_replaces() {
        let sort = SortState::by("name", Direction::Desc).toggled("revenue");
        assert_eq!(sort.entries().len(), 1);
        assert_eq!(sort.direction_of("revenue"), Some(Direction::Asc));
        assert_eq!(sort.direction_of("name"), None);
    }

    #[test]
    fn test_spec_uses_first_entry_only() {
        let sort = SortState::by("a", Direction::Desc).then("b", Direction::Asc);
        assert_eq!(sort.spec(), "a:desc");
        assert_eq!(SortState::none().spec(), "");
    }
}
