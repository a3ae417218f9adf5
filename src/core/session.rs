use serde::Serialize;
use tracing::debug;

use super::convert::to_display_percent;
use super::engine::{CheckInputs, CheckReport, run_check};
use super::error::InputError;
use super::types::{Mode, RawAllocation, RawEquityBreakdown, RiskLevel};
use super::validate::{
    AmountStatus, PercentStatus, validate_amount_allocation, validate_percent_allocation,
};

pub const DEFAULT_AGE: i64 = 35;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum AllocationStatus {
    Percent(PercentStatus),
    Amount(AmountStatus),
}

impl AllocationStatus {
    pub fn sum_ok(&self) -> bool {
        match self {
            AllocationStatus::Percent(status) => status.sum_ok,
            AllocationStatus::Amount(status) => status.sum_ok,
        }
    }

    pub fn blocking_error(&self) -> Option<InputError> {
        match self {
            AllocationStatus::Percent(status) => status.blocking_error(),
            AllocationStatus::Amount(status) => status.blocking_error(),
        }
    }
}

/// What a form holds between input events: age, risk, mode and the raw
/// text of every field. Both field sets are kept; only the one for the
/// current mode is evaluated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckState {
    pub age: i64,
    pub risk: Option<RiskLevel>,
    pub mode: Mode,
    pub percent: RawAllocation,
    pub amount: RawAllocation,
    pub equity: RawEquityBreakdown,
}

impl Default for CheckState {
    fn default() -> Self {
        Self {
            age: DEFAULT_AGE,
            risk: None,
            mode: Mode::Amount,
            percent: RawAllocation::default(),
            amount: RawAllocation::default(),
            equity: RawEquityBreakdown::default(),
        }
    }
}

impl CheckState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn set_risk(&mut self, risk: RiskLevel) {
        self.risk = Some(risk);
    }

    /// Switch input mode, carrying entered values over where possible.
    ///
    /// Amount to percent writes the converted (one-decimal) percentages into
    /// the percent fields, or clears them when the amounts are not usable.
    /// Percent to amount always clears the amount fields since amounts cannot
    /// be recovered from percentages.
    pub fn set_mode(&mut self, next: Mode) {
        if self.mode == next {
            return;
        }
        let previous = self.mode;
        self.mode = next;

        match (previous, next) {
            (Mode::Amount, Mode::Percent) => {
                let status = validate_amount_allocation(&self.amount);
                let converted = status
                    .allocation
                    .filter(|_| status.ok && status.sum_ok)
                    .and_then(|amounts| to_display_percent(amounts, amounts.total()).ok());
                match converted {
                    Some(p) => {
                        debug!(
                            stocks = p.stocks,
                            bonds = p.bonds,
                            cash = p.cash,
                            other = p.other,
                            "carried amounts over as percentages"
                        );
                        self.percent = RawAllocation {
                            stocks: p.stocks.to_string(),
                            bonds: p.bonds.to_string(),
                            cash: p.cash.to_string(),
                            other: p.other.to_string(),
                        };
                    }
                    None => self.percent.clear(),
                }
            }
            (Mode::Percent, Mode::Amount) => self.amount.clear(),
            _ => {}
        }
    }

    pub fn active_fields(&self) -> &RawAllocation {
        match self.mode {
            Mode::Percent => &self.percent,
            Mode::Amount => &self.amount,
        }
    }

    pub fn allocation_status(&self) -> AllocationStatus {
        match self.mode {
            Mode::Percent => AllocationStatus::Percent(validate_percent_allocation(&self.percent)),
            Mode::Amount => AllocationStatus::Amount(validate_amount_allocation(&self.amount)),
        }
    }

    /// Whether the check action should be enabled.
    pub fn can_calculate(&self) -> bool {
        self.risk.is_some() && self.allocation_status().sum_ok()
    }

    pub fn inputs(&self) -> CheckInputs {
        CheckInputs {
            age: self.age,
            risk: self.risk,
            mode: self.mode,
            allocation: self.active_fields().clone(),
            equity: self.equity.clone(),
        }
    }

    pub fn calculate(&self) -> Result<CheckReport, InputError> {
        run_check(&self.inputs())
    }
}
