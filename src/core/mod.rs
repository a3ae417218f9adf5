mod convert;
mod engine;
mod equity;
mod error;
mod model;
mod session;
mod types;
mod validate;
mod verdict;

pub use convert::{to_display_percent, to_percent};
pub use engine::{CheckInputs, CheckReport, run_check, user_percentages};
pub use equity::{
    EquityAdvisory, EquityStatus, crypto_advisory, equity_advisory, validate_equity_breakdown,
};
pub use error::InputError;
pub use model::{ModelEntry, age_band, lookup_model, model_table};
pub use session::{AllocationStatus, CheckState, DEFAULT_AGE};
pub use types::{
    AgeBand, Allocation, CryptoNote, Diff, Field, Mode, ModelAllocation, NoteLevel, RawAllocation,
    RawEquityBreakdown, RiskLevel, Verdict, VerdictKind,
};
pub use validate::{
    AmountStatus, PercentStatus, SUM_TOLERANCE, describe_gap, nearly_equal, round1, sum_gap,
    validate_amount_allocation, validate_percent_allocation,
};
pub use verdict::{RULES, Rule, classify, compute_diff, compute_verdict, verdict_for};
