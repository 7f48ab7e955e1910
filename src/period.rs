//! Billable periods of a proposal.
//!
//! A proposal is split into one or more base periods, optionally followed by option periods
//! (contractual extensions). Each is priced in the same way.
use crate::id::define_id_type;
use crate::units::{Hours, Participants};
use std::fmt;

define_id_type!(PeriodID);

/// Whether a period is part of the base contract or an optional extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeriodKind {
    /// A period of the base contract
    Base,
    /// An optional extension
    Option,
}

impl PeriodKind {
    /// The prefix used when constructing IDs for this kind of period
    fn id_prefix(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Option => "opt",
        }
    }
}

impl fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => write!(f, "Base Period"),
            Self::Option => write!(f, "Option Period"),
        }
    }
}

/// One billable time block
#[derive(Debug, Clone, PartialEq)]
pub struct Period {
    /// Unique identifier, e.g. `base1` or `opt2`
    pub id: PeriodID,
    /// The kind of period
    pub kind: PeriodKind,
    /// 1-based position of the period among others of the same kind
    pub number: u32,
    /// Total billable hours
    pub hours: Hours,
    /// Number of participants.
    ///
    /// Treated as a continuous quantity, as it is only ever used as a divisor.
    pub participants: Participants,
}

/// Replace negative and non-finite values with zero
fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

impl Period {
    /// Create a new [`Period`].
    ///
    /// Negative or non-finite values for `hours` and `participants` are treated as zero.
    pub fn new(kind: PeriodKind, number: u32, hours: f64, participants: f64) -> Self {
        Self {
            id: format!("{}{number}", kind.id_prefix()).into(),
            kind,
            number,
            hours: Hours(non_negative(hours)),
            participants: Participants(non_negative(participants)),
        }
    }

    /// A human-readable label for the period, e.g. "Base Period 1"
    pub fn label(&self) -> String {
        format!("{} {}", self.kind, self.number)
    }

    /// Whether any hours have been entered for this period
    pub fn has_hours(&self) -> bool {
        self.hours.is_positive()
    }

    /// Whether any participants have been entered for this period
    pub fn has_participants(&self) -> bool {
        self.participants.is_positive()
    }
}

/// Build the ordered list of periods for a proposal.
///
/// All base periods come first, followed by all option periods, each group numbered from 1.
///
/// # Arguments
///
/// * `base` - `(hours, participants)` for each base period
/// * `option` - `(hours, participants)` for each option period
pub fn build_periods<I, J>(base: I, option: J) -> Vec<Period>
where
    I: IntoIterator<Item = (f64, f64)>,
    J: IntoIterator<Item = (f64, f64)>,
{
    let base = (1..)
        .zip(base)
        .map(|(number, (hours, participants))| {
            Period::new(PeriodKind::Base, number, hours, participants)
        });
    let option = (1..)
        .zip(option)
        .map(|(number, (hours, participants))| {
            Period::new(PeriodKind::Option, number, hours, participants)
        });

    base.chain(option).collect()
}

/// The total number of hours across all periods
pub fn total_hours(periods: &[Period]) -> Hours {
    periods.iter().map(|period| period.hours).sum()
}
