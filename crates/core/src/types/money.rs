//! Whole-rupee amounts.
//!
//! Every price on the site is a whole number of Indian rupees (no paise), so
//! amounts are stored as `u64`. Percentage calculations such as GST go
//! through `rust_decimal` to avoid float rounding surprises.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A non-negative amount in whole rupees.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Rupees(u64);

impl Rupees {
    /// Zero rupees.
    pub const ZERO: Self = Self(0);

    /// GST rate applied at checkout, in percent.
    pub const GST_PERCENT: i64 = 18;

    /// Create an amount from whole rupees.
    #[must_use]
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// The amount as a plain integer.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Price of `quantity` units at this unit price.
    #[must_use]
    pub const fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(quantity as u64))
    }

    /// `percent`% of this amount, rounded half away from zero to whole rupees.
    #[must_use]
    pub fn percent(self, percent: i64) -> Self {
        let amount = Decimal::from(self.0) * Decimal::new(percent, 2);
        let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        Self(rounded.to_u64().unwrap_or(u64::MAX))
    }

    /// GST owed on this amount.
    #[must_use]
    pub fn gst(self) -> Self {
        self.percent(Self::GST_PERCENT)
    }
}

impl Add for Rupees {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Rupees {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Rupees {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl From<u64> for Rupees {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

/// Formats with the rupee sign and Indian digit grouping: `₹1,23,456`.
impl fmt::Display for Rupees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        if digits.len() <= 3 {
            return write!(f, "₹{digits}");
        }

        let (head, last_three) = digits.split_at(digits.len() - 3);
        let mut groups = Vec::new();
        let mut rest = head;
        while rest.len() > 2 {
            let (front, pair) = rest.split_at(rest.len() - 2);
            groups.push(pair);
            rest = front;
        }
        groups.push(rest);
        groups.reverse();

        write!(f, "₹{},{last_three}", groups.join(","))
    }
}
