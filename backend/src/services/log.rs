//! Log query engine
//!
//! Applies the optional date bounds and limit of a log request to a
//! user's exercise history. Bounds are inclusive calendar dates; the
//! limit is a prefix take over the already-filtered sequence, preserving
//! insertion order.

use chrono::NaiveDate;

/// Parsed filter for a log request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogFilter {
    /// Inclusive lower bound
    pub from: Option<NaiveDate>,
    /// Inclusive upper bound
    pub to: Option<NaiveDate>,
    /// Maximum number of entries returned
    pub limit: Option<usize>,
}

impl LogFilter {
    /// Retain entries within the date bounds, then truncate to `limit`.
    ///
    /// `date_of` projects an entry to its calendar date.
    pub fn apply<T, F>(&self, entries: Vec<T>, date_of: F) -> Vec<T>
    where
        F: Fn(&T) -> NaiveDate,
    {
        let mut retained: Vec<T> = entries
            .into_iter()
            .filter(|entry| {
                let date = date_of(entry);
                self.from.map_or(true, |from| date >= from)
                    && self.to.map_or(true, |to| date <= to)
            })
            .collect();

        if let Some(limit) = self.limit {
            retained.truncate(limit);
        }

        retained
    }
}
