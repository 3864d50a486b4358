use std::fmt;
use std::sync::Arc;

use chrono::{Days, Local, NaiveDate};

use crate::document::Document;

/// Source of "today" for recency windows.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local calendar date of the host.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to one date. Used for reproducible selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

pub type RecencyPredicate = Arc<dyn Fn(&Document) -> bool + Send + Sync>;

/// Which documents count as recent.
#[derive(Clone)]
pub enum Recency {
    /// Issued on or after `today - N days`.
    Days(u32),
    /// Issued on or after the given date.
    Since(NaiveDate),
    /// Caller-defined.
    Predicate(RecencyPredicate),
}

impl Recency {
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&Document) -> bool + Send + Sync + 'static,
    {
        Recency::Predicate(Arc::new(f))
    }

    /// Fix the window against a single reading of the clock.
    pub(crate) fn resolve(&self, today: NaiveDate) -> RecencyWindow<'_> {
        match self {
            Recency::Days(days) => RecencyWindow::Threshold(
                today
                    .checked_sub_days(Days::new(u64::from(*days)))
                    .unwrap_or(NaiveDate::MIN),
            ),
            Recency::Since(date) => RecencyWindow::Threshold(*date),
            Recency::Predicate(predicate) => RecencyWindow::Predicate(predicate.as_ref()),
        }
    }
}

impl fmt::Debug for Recency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recency::Days(days) => f.debug_tuple("Days").field(days).finish(),
            Recency::Since(date) => f.debug_tuple("Since").field(date).finish(),
            Recency::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

pub(crate) enum RecencyWindow<'a> {
    Threshold(NaiveDate),
    Predicate(&'a (dyn Fn(&Document) -> bool + Send + Sync)),
}

impl RecencyWindow<'_> {
    pub(crate) fn is_recent(&self, doc: &Document) -> bool {
        match self {
            RecencyWindow::Threshold(threshold) => doc.issued_on >= *threshold,
            RecencyWindow::Predicate(predicate) => predicate(doc),
        }
    }

    pub(crate) fn threshold(&self) -> Option<NaiveDate> {
        match self {
            RecencyWindow::Threshold(threshold) => Some(*threshold),
            RecencyWindow::Predicate(_) => None,
        }
    }
}
