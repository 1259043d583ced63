//! Billing period state and price display derivation.
//!
//! The pricing section is the only stateful part of the page. The state is
//! a [`BillingPeriod`] held in a [`Billing`] handle owned by one landing
//! page instance; every plan card derives its [`PriceDisplay`] from it on
//! each render.

use std::fmt;
use std::str::FromStr;

use leptos::prelude::*;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::content::Plan;

/// How the visitor wants prices shown.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingPeriod {
    #[default]
    Monthly,
    Annual,
}

impl BillingPeriod {
    /// Both periods, in toggle order.
    pub const ALL: [BillingPeriod; 2] = [BillingPeriod::Monthly, BillingPeriod::Annual];

    /// Machine name, used in `data-billing` attributes and on the CLI.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Annual => "annual",
        }
    }

    /// Toggle button label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Monthly => "Monthly",
            Self::Annual => "Annual",
        }
    }

    /// Unit shown after the amount.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Monthly => "/mo",
            Self::Annual => "/yr",
        }
    }
}

impl fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a billing period name is neither `monthly` nor `annual`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown billing period `{0}` (expected `monthly` or `annual`)")]
pub struct ParseBillingPeriodError(String);

impl FromStr for BillingPeriod {
    type Err = ParseBillingPeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" | "month" | "mo" => Ok(Self::Monthly),
            "annual" | "annually" | "yearly" | "yr" => Ok(Self::Annual),
            _ => Err(ParseBillingPeriodError(s.to_string())),
        }
    }
}

/// Percentage saved by paying annually instead of twelve monthly payments.
///
/// Computes `round(100 - 100 * annual / (monthly * 12))` in integer
/// arithmetic, rounding halves away from zero (Pro: 12.5% -> 13%).
/// The result is zero or negative when the annual price is not a discount.
/// Returns `None` for a free monthly price, where the ratio is undefined.
pub fn savings_percent(monthly: u32, annual: u32) -> Option<i64> {
    if monthly == 0 {
        return None;
    }
    let full_year = i64::from(monthly) * 12;
    let saved = (full_year - i64::from(annual)) * 100;

    // saved / full_year, rounded half away from zero
    let magnitude = (2 * saved.abs() + full_year) / (2 * full_year);
    Some(if saved < 0 { -magnitude } else { magnitude })
}

/// What a plan card shows for one billing period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceDisplay {
    pub amount: u32,
    pub suffix: &'static str,
    /// Present only for [`BillingPeriod::Annual`].
    pub savings_percent: Option<i64>,
}

impl PriceDisplay {
    /// `$36`
    pub fn amount_text(&self) -> String {
        format!("${}", self.amount)
    }

    /// `Save 25%`, or nothing outside the annual view.
    pub fn savings_text(&self) -> Option<String> {
        self.savings_percent.map(|pct| format!("Save {pct}%"))
    }
}

impl Plan {
    /// Configured price for a billing period.
    pub fn price_for(&self, period: BillingPeriod) -> u32 {
        match period {
            BillingPeriod::Monthly => self.monthly_price,
            BillingPeriod::Annual => self.annual_price,
        }
    }

    /// This plan's own savings figure.
    pub fn savings_percent(&self) -> Option<i64> {
        savings_percent(self.monthly_price, self.annual_price)
    }

    /// Derive the card display for a billing period.
    pub fn display(&self, period: BillingPeriod) -> PriceDisplay {
        PriceDisplay {
            amount: self.price_for(period),
            suffix: period.suffix(),
            savings_percent: match period {
                BillingPeriod::Monthly => None,
                BillingPeriod::Annual => self.savings_percent(),
            },
        }
    }
}

/// Billing selection owned by one landing page instance.
///
/// Wraps a reactive signal so every plan card re-derives its price when the
/// selection changes. Copying the handle shares the same state; creating a
/// new one always starts at [`BillingPeriod::Monthly`].
#[derive(Debug, Clone, Copy)]
pub struct Billing {
    period: RwSignal<BillingPeriod>,
}

impl Billing {
    pub fn new() -> Self {
        Self {
            period: RwSignal::new(BillingPeriod::default()),
        }
    }

    /// Current selection (tracked inside reactive closures).
    pub fn period(&self) -> BillingPeriod {
        self.period.get()
    }

    pub fn is(&self, period: BillingPeriod) -> bool {
        self.period() == period
    }

    pub fn set_monthly(&self) {
        self.select(BillingPeriod::Monthly);
    }

    pub fn set_annual(&self) {
        self.select(BillingPeriod::Annual);
    }

    // Selecting the active period leaves the signal untouched.
    fn select(&self, period: BillingPeriod) {
        if self.period.get_untracked() == period {
            return;
        }
        debug!(billing = %period, "billing period changed");
        self.period.set(period);
    }
}

impl Default for Billing {
    fn default() -> Self {
        Self::new()
    }
}
