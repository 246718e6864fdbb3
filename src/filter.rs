use chrono::NaiveDate;

use crate::model::Transaction;

/// The user's date selection. The two filter modes are mutually exclusive;
/// the CLI enforces that, the engine just evaluates whichever is active.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DateFilter {
    /// Keep transactions on exactly this calendar day.
    ExactDate(NaiveDate),
    /// Keep transactions with `start <= date <= end`, both ends inclusive.
    DateRange { start: NaiveDate, end: NaiveDate },
    /// No filtering.
    All,
}

impl DateFilter {
    pub fn matches(&self, date: NaiveDate) -> bool {
        match self {
            Self::ExactDate(day) => date == *day,
            // An inverted range matches nothing, we don't swap the ends.
            Self::DateRange { start, end } => *start <= date && date <= *end,
            Self::All => true,
        }
    }
}

/// Pure and order-preserving. The input snapshot is never mutated.
pub fn filter_transactions(transactions: &[Transaction], filter: &DateFilter) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| filter.matches(t.date))
        .cloned()
        .collect()
}
