use super::error::InputError;
use super::types::Allocation;
use super::validate::round1;

/// Express amounts as percentages of `total`. No rounding here: callers
/// round right before display or diffing.
pub fn to_percent(amounts: Allocation, total: f64) -> Result<Allocation, InputError> {
    // Also rejects NaN.
    if !(total > 0.0) {
        return Err(InputError::ZeroOrNegativeTotal);
    }
    if total.is_infinite() {
        return Err(InputError::TotalTooLarge);
    }
    Ok(amounts.map(|value| value / total * 100.0))
}

/// The converted percentages as they are shown to the user and written
/// into the percent fields on a mode switch.
pub fn to_display_percent(amounts: Allocation, total: f64) -> Result<Allocation, InputError> {
    Ok(to_percent(amounts, total)?.map(round1))
}
