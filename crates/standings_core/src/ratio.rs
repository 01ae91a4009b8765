//! Exact fractions for win and points percentages
//!
//! Percentages are never compared as floats. Two ratios compare by
//! cross-multiplication, so `2/3 == 10/15` and two ratios that differ at all
//! are never reported as tied. Rounding only happens in [`Ratio::percent_display`].

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// Decimal places kept when a ratio is shown as a percentage
pub const PCT_DECIMALS: u32 = 3;

const PCT_SCALE: u128 = 100 * 10u128.pow(PCT_DECIMALS);

/// Non-negative fraction `num / den` with `den > 0`
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Ratio {
    num: u64,
    den: u64,
}

impl Ratio {
    /// Returns `None` for a zero denominator (no games, no points)
    pub fn new(num: u64, den: u64) -> Option<Self> {
        (den > 0).then_some(Self { num, den })
    }

    pub fn numerator(&self) -> u64 {
        self.num
    }

    pub fn denominator(&self) -> u64 {
        self.den
    }

    /// Percentage scaled by 10^PCT_DECIMALS, rounded half up
    pub fn percent_scaled(&self) -> u128 {
        let num = self.num as u128 * PCT_SCALE;
        let den = self.den as u128;
        (2 * num + den) / (2 * den)
    }

    /// Percentage rounded to [`PCT_DECIMALS`] places, e.g. `"66.667"`
    pub fn percent_display(&self) -> String {
        let scaled = self.percent_scaled();
        let unit = 10u128.pow(PCT_DECIMALS);
        format!(
            "{}.{:0width$}",
            scaled / unit,
            scaled % unit,
            width = PCT_DECIMALS as usize
        )
    }
}

impl PartialEq for Ratio {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ratio {}

impl PartialOrd for Ratio {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ratio {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.num as u128 * other.den as u128;
        let rhs = other.num as u128 * self.den as u128;
        lhs.cmp(&rhs)
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent_display())
    }
}

/// Format an optional percentage for tables; undefined values render as `-`
pub fn fmt_pct(value: Option<Ratio>) -> String {
    match value {
        Some(ratio) => ratio.percent_display(),
        None => "-".to_string(),
    }
}

#[cfg(test)]
#[path = "ratio_tests.rs"]
mod ratio_tests;
