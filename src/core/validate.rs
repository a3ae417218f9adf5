use serde::Serialize;

use super::convert::to_percent;
use super::error::InputError;
use super::types::{Allocation, Field, RawAllocation};

/// Absorbs floating-point noise in a sum, not user error. Deliberately
/// tighter than the one-decimal display rounding.
pub const SUM_TOLERANCE: f64 = 0.05;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PercentStatus {
    pub ok: bool,
    pub sum_ok: bool,
    pub sum: Option<f64>,
    /// `sum_gap` of the total: positive is still missing, negative is over.
    pub gap: Option<f64>,
    pub allocation: Option<Allocation>,
    pub error: Option<InputError>,
}

impl PercentStatus {
    fn failed(error: InputError) -> Self {
        Self {
            ok: false,
            sum_ok: false,
            sum: None,
            gap: None,
            allocation: None,
            error: Some(error),
        }
    }

    /// The reason a check cannot run on this status, if any.
    pub fn blocking_error(&self) -> Option<InputError> {
        if let Some(err) = self.error {
            return Some(err);
        }
        if self.sum_ok {
            None
        } else {
            Some(InputError::SumMismatch {
                sum: self.sum.unwrap_or(0.0),
            })
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AmountStatus {
    pub ok: bool,
    pub sum_ok: bool,
    pub sum: Option<f64>,
    pub allocation: Option<Allocation>,
    pub percent_allocation: Option<Allocation>,
    pub error: Option<InputError>,
}

impl AmountStatus {
    fn failed(error: InputError) -> Self {
        Self {
            ok: false,
            sum_ok: false,
            sum: None,
            allocation: None,
            percent_allocation: None,
            error: Some(error),
        }
    }

    pub fn blocking_error(&self) -> Option<InputError> {
        if let Some(err) = self.error {
            return Some(err);
        }
        if self.sum_ok {
            None
        } else {
            Some(InputError::ZeroOrNegativeTotal)
        }
    }
}

pub fn round1(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

pub fn nearly_equal(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

pub fn sum_gap(total: f64) -> f64 {
    round1(100.0 - total)
}

/// "still missing 5%" / "over by 2.5%"; `None` once the gap rounds to zero.
pub fn describe_gap(gap: f64) -> Option<String> {
    if gap > 0.0 {
        Some(format!("still missing {gap}%"))
    } else if gap < 0.0 {
        Some(format!("over by {}%", -gap))
    } else {
        None
    }
}

pub(crate) fn sum_is_hundred(total: f64) -> bool {
    nearly_equal(total, 100.0, SUM_TOLERANCE)
}

/// Blank is 0; anything else must be a finite number.
pub(crate) fn parse_field(field: Field, raw: &str) -> Result<f64, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InputError::NotANumber { field }),
    }
}

pub(crate) fn parse_percent_field(field: Field, raw: &str) -> Result<f64, InputError> {
    let value = parse_field(field, raw)?;
    if !(0.0..=100.0).contains(&value) {
        return Err(InputError::OutOfRange { field });
    }
    Ok(value)
}

fn parse_amount_field(field: Field, raw: &str) -> Result<f64, InputError> {
    let value = parse_field(field, raw)?;
    if value < 0.0 {
        return Err(InputError::Negative { field });
    }
    Ok(value)
}

fn parse_allocation(
    raw: &RawAllocation,
    parse: fn(Field, &str) -> Result<f64, InputError>,
) -> Result<Allocation, InputError> {
    let mut values = [0.0; 4];
    for (slot, (field, text)) in values.iter_mut().zip(raw.fields()) {
        *slot = parse(field, text)?;
    }
    let [stocks, bonds, cash, other] = values;
    Ok(Allocation {
        stocks,
        bonds,
        cash,
        other,
    })
}

pub fn validate_percent_allocation(raw: &RawAllocation) -> PercentStatus {
    let allocation = match parse_allocation(raw, parse_percent_field) {
        Ok(allocation) => allocation,
        Err(err) => return PercentStatus::failed(err),
    };

    let total = allocation.total();
    PercentStatus {
        ok: true,
        sum_ok: sum_is_hundred(total),
        sum: Some(round1(total)),
        gap: Some(sum_gap(total)),
        allocation: Some(allocation),
        error: None,
    }
}

pub fn validate_amount_allocation(raw: &RawAllocation) -> AmountStatus {
    let allocation = match parse_allocation(raw, parse_amount_field) {
        Ok(allocation) => allocation,
        Err(err) => return AmountStatus::failed(err),
    };

    let total = allocation.total();
    if total.is_infinite() {
        return AmountStatus::failed(InputError::TotalTooLarge);
    }
    let percent_allocation = to_percent(allocation, total).ok();
    AmountStatus {
        ok: true,
        sum_ok: percent_allocation.is_some(),
        sum: Some(round1(total)),
        allocation: Some(allocation),
        percent_allocation,
        error: None,
    }
}
