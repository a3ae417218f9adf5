use serde::Serialize;

use super::error::InputError;
use super::types::{CryptoNote, NoteLevel, RawEquityBreakdown};
use super::validate::{parse_percent_field, round1, sum_gap, sum_is_hundred};

pub const CRYPTO_CAUTION_ABOVE: f64 = 20.0;
pub const CRYPTO_INFO_FROM: f64 = 10.0;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EquityStatus {
    /// False when every breakdown field is blank; nothing else is evaluated.
    pub used: bool,
    pub ok: bool,
    pub sum_ok: bool,
    pub sum: Option<f64>,
    pub gap: Option<f64>,
    /// Only exposed when the breakdown adds up to 100.
    pub crypto: Option<f64>,
    pub error: Option<InputError>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EquityAdvisory {
    pub status: EquityStatus,
    pub note: Option<CryptoNote>,
}

pub fn validate_equity_breakdown(raw: &RawEquityBreakdown) -> EquityStatus {
    if raw.is_blank() {
        return EquityStatus::default();
    }

    let mut values = [0.0; 3];
    for (slot, (field, text)) in values.iter_mut().zip(raw.fields()) {
        match parse_percent_field(field, text) {
            Ok(value) => *slot = value,
            Err(err) => {
                return EquityStatus {
                    used: true,
                    error: Some(err),
                    ..EquityStatus::default()
                };
            }
        }
    }

    let [domestic, global, crypto] = values;
    let total = domestic + global + crypto;
    let sum_ok = sum_is_hundred(total);
    EquityStatus {
        used: true,
        ok: true,
        sum_ok,
        sum: Some(round1(total)),
        gap: Some(sum_gap(total)),
        crypto: sum_ok.then_some(crypto),
        error: None,
    }
}

/// Small crypto shares get no note so they do not dominate the result.
pub fn crypto_advisory(crypto_share: f64) -> Option<CryptoNote> {
    let shown = round1(crypto_share);
    if crypto_share > CRYPTO_CAUTION_ABOVE {
        Some(CryptoNote {
            level: NoteLevel::Caution,
            crypto_share: shown,
            text: format!(
                "Your crypto share is high ({shown}% of equities). Prices swing sharply, \
                 so check that this level of risk is what you intended."
            ),
        })
    } else if crypto_share >= CRYPTO_INFO_FROM {
        Some(CryptoNote {
            level: NoteLevel::Info,
            crypto_share: shown,
            text: format!(
                "Your equities include crypto ({shown}% of equities). It is a volatile \
                 component, so check that it fits your tolerance."
            ),
        })
    } else {
        None
    }
}

pub fn equity_advisory(raw: &RawEquityBreakdown) -> EquityAdvisory {
    let status = validate_equity_breakdown(raw);
    let note = match (status.used, status.sum_ok, status.crypto) {
        (true, true, Some(crypto)) => crypto_advisory(crypto),
        _ => None,
    };
    EquityAdvisory { status, note }
}
