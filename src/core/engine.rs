use serde::Serialize;

use super::convert::to_display_percent;
use super::equity::{EquityStatus, equity_advisory};
use super::error::InputError;
use super::model::{age_band, lookup_model};
use super::types::{
    AgeBand, Allocation, CryptoNote, Diff, Mode, RawAllocation, RawEquityBreakdown, RiskLevel,
    Verdict,
};
use super::validate::{validate_amount_allocation, validate_percent_allocation};
use super::verdict::{compute_diff, compute_verdict};

/// Everything a single check needs. The caller owns this state; the engine
/// keeps none between calls.
#[derive(Debug, Clone, Default)]
pub struct CheckInputs {
    pub age: i64,
    pub risk: Option<RiskLevel>,
    pub mode: Mode,
    pub allocation: RawAllocation,
    pub equity: RawEquityBreakdown,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckReport {
    pub age: i64,
    pub age_band: AgeBand,
    pub risk: RiskLevel,
    pub mode: Mode,
    pub model: Allocation,
    pub user: Allocation,
    pub diff: Diff,
    pub verdict: Verdict,
    pub equity: EquityStatus,
    pub crypto_note: Option<CryptoNote>,
}

/// Resolve the user's allocation as percentages for the current mode.
///
/// Amount mode uses the converted values rounded to one decimal, which are
/// the numbers shown to the user (and written to the percent fields on a
/// mode switch), so the diff always matches what is displayed.
pub fn user_percentages(mode: Mode, raw: &RawAllocation) -> Result<Allocation, InputError> {
    match mode {
        Mode::Percent => {
            let status = validate_percent_allocation(raw);
            if let Some(err) = status.blocking_error() {
                return Err(err);
            }
            status.allocation.ok_or(InputError::SumMismatch { sum: 0.0 })
        }
        Mode::Amount => {
            let status = validate_amount_allocation(raw);
            if let Some(err) = status.blocking_error() {
                return Err(err);
            }
            let amounts = status.allocation.ok_or(InputError::ZeroOrNegativeTotal)?;
            to_display_percent(amounts, amounts.total())
        }
    }
}

pub fn run_check(inputs: &CheckInputs) -> Result<CheckReport, InputError> {
    let risk = inputs.risk.ok_or(InputError::RiskNotSelected)?;
    let user = user_percentages(inputs.mode, &inputs.allocation)?;

    let band = age_band(inputs.age);
    let model = lookup_model(band, risk);
    let diff = compute_diff(user, model);
    let verdict = compute_verdict(&diff);
    let advisory = equity_advisory(&inputs.equity);

    Ok(CheckReport {
        age: inputs.age,
        age_band: band,
        risk,
        mode: inputs.mode,
        model: model.as_allocation(),
        user,
        diff,
        verdict,
        equity: advisory.status,
        crypto_note: advisory.note,
    })
}
