//! Human-readable phrasing of maintenance intervals and elapsed timespans.
//!
//! Pure functions over integer quantities; all locale concerns live behind
//! the [`PhraseProvider`] port.

use crate::domain::ports::{CompoundPhraseKey, PhraseKey, PhraseProvider};

/// A recurring maintenance interval, measured in whole months.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Periodicity {
    months: u32,
}

impl Periodicity {
    /// Builds an interval from a stored (possibly fractional) month count.
    /// Truncates toward zero; `as` saturates, so negative and NaN inputs
    /// land on zero.
    pub fn from_months(months: f32) -> Self {
        Self {
            months: months as u32,
        }
    }

    pub const fn from_whole_months(months: u32) -> Self {
        Self { months }
    }

    pub fn months(&self) -> u32 {
        self.months
    }

    /// Splits the interval into years and leftover months.
    /// The leftover is always in `0..=11`.
    pub fn decompose(&self) -> (u32, u32) {
        (self.months / 12, self.months % 12)
    }
}

/// Phrases a maintenance interval: "every 6 months", "every 2 years",
/// "every 1 year and 3 months".
///
/// An interval under one year always yields the months phrase, even at
/// zero months.
pub fn format_periodicity(periodicity: Periodicity, phrases: &dyn PhraseProvider) -> String {
    match periodicity.decompose() {
        (0, months) => phrases.quantity(PhraseKey::IntervalMonths, months.into()),
        (years, 0) => phrases.quantity(PhraseKey::IntervalYears, years.into()),
        (years, months) => phrases.compound(
            CompoundPhraseKey::IntervalYearsAndMonths,
            years.into(),
            months.into(),
        ),
    }
}

/// Phrases an elapsed span of whole days as its non-zero components, in
/// fixed years/months/days order: "1 year 2 months 5 days".
///
/// Uses the 365/30-day approximations rather than calendar arithmetic.
/// A zero-day span yields the empty string.
pub fn format_duration(total_days: u64, phrases: &dyn PhraseProvider) -> String {
    let years = total_days / 365;
    let months = (total_days % 365) / 30;
    let days = (total_days % 365) % 30;

    let mut segments = Vec::new();
    if years > 0 {
        segments.push(phrases.quantity(PhraseKey::Years, years));
    }
    if months > 0 {
        segments.push(phrases.quantity(PhraseKey::Months, months));
    }
    if days > 0 {
        segments.push(phrases.quantity(PhraseKey::Days, days));
    }

    segments.join(" ")
}
