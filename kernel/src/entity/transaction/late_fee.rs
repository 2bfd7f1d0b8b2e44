use std::fmt::{Display, Formatter};

use time::Date;
use vodca::{AsRefln, Fromln};

pub const LOAN_PERIOD_DAYS: i64 = 14;
pub const DAILY_LATE_FEE: u32 = 50;
pub const MAX_RENT_FEE: u32 = 500;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Fromln, AsRefln)]
pub struct LateFee(u32);

impl LateFee {
    pub fn new(fee: impl Into<u32>) -> Self {
        Self(fee.into())
    }
}

impl Display for LateFee {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct LateFeePolicy {
    loan_period_days: i64,
    daily_late_fee: u32,
    max_rent_fee: u32,
}

impl Default for LateFeePolicy {
    fn default() -> Self {
        Self::new(LOAN_PERIOD_DAYS, DAILY_LATE_FEE, MAX_RENT_FEE)
    }
}

impl LateFeePolicy {
    pub fn new(loan_period_days: i64, daily_late_fee: u32, max_rent_fee: u32) -> Self {
        Self {
            loan_period_days,
            daily_late_fee,
            max_rent_fee,
        }
    }

    /// Whole calendar days past the loan window. Time of day is ignored; negative means early.
    pub fn overdue_days(&self, issued_on: Date, returned_on: Date) -> i64 {
        (returned_on - issued_on).whole_days() - self.loan_period_days
    }

    pub fn fee_for(&self, overdue_days: i64) -> LateFee {
        if overdue_days <= 0 {
            return LateFee::default();
        }
        let fee = u64::try_from(overdue_days)
            .unwrap_or(u64::MAX)
            .saturating_mul(u64::from(self.daily_late_fee))
            .min(u64::from(self.max_rent_fee));
        LateFee(u32::try_from(fee).unwrap_or(self.max_rent_fee))
    }
}
