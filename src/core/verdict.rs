use super::types::{Allocation, Diff, ModelAllocation, Verdict, VerdictKind};

/// Any single class further than this from the model is a large skew.
pub const LARGE_DEVIATION: f64 = 20.0;
/// Within this distance on every class the allocation is close enough.
pub const TOLERANCE: f64 = 10.0;

pub struct Rule {
    pub kind: VerdictKind,
    pub applies: fn(&Diff) -> bool,
}

/// Evaluated top to bottom, first match wins. The last rule always matches.
pub const RULES: [Rule; 5] = [
    Rule {
        kind: VerdictKind::LargeDeviation,
        applies: is_large_deviation,
    },
    Rule {
        kind: VerdictKind::WithinTolerance,
        applies: is_within_tolerance,
    },
    Rule {
        kind: VerdictKind::RiskierThanModel,
        applies: is_riskier,
    },
    Rule {
        kind: VerdictKind::SaferThanModel,
        applies: is_safer,
    },
    Rule {
        kind: VerdictKind::MinorDeviation,
        applies: |_| true,
    },
];

// `other` is left out: the model never allocates to it.
fn max_abs(d: &Diff) -> f64 {
    d.stocks.abs().max(d.bonds.abs()).max(d.cash.abs())
}

fn is_large_deviation(d: &Diff) -> bool {
    max_abs(d) > LARGE_DEVIATION
}

fn is_within_tolerance(d: &Diff) -> bool {
    max_abs(d) <= TOLERANCE
}

fn is_riskier(d: &Diff) -> bool {
    d.stocks > TOLERANCE && (d.cash < -TOLERANCE || d.bonds < -TOLERANCE)
}

fn is_safer(d: &Diff) -> bool {
    d.stocks < -TOLERANCE && (d.cash > TOLERANCE || d.bonds > TOLERANCE)
}

pub fn compute_diff(user: Allocation, model: ModelAllocation) -> Diff {
    let model = model.as_allocation();
    Diff {
        stocks: user.stocks - model.stocks,
        bonds: user.bonds - model.bonds,
        cash: user.cash - model.cash,
        other: user.other - model.other,
    }
}

pub fn classify(diff: &Diff) -> VerdictKind {
    RULES
        .iter()
        .find(|rule| (rule.applies)(diff))
        .map_or(VerdictKind::MinorDeviation, |rule| rule.kind)
}

pub fn compute_verdict(diff: &Diff) -> Verdict {
    verdict_for(classify(diff))
}

pub fn verdict_for(kind: VerdictKind) -> Verdict {
    let (badge, text, action) = match kind {
        VerdictKind::LargeDeviation => (
            "needs review (large skew)",
            "At least one asset class is far from the model. Writing down why you hold \
             this allocation makes the next review much easier.",
            "Note the reason for the skew (goal, deadline, comfort) in one line and \
             re-run this check once a year.",
        ),
        VerdictKind::WithinTolerance => (
            "broadly reasonable",
            "Your allocation is not far from the model. Once a year, confirm that your \
             circumstances and risk tolerance have not changed.",
            "Check once a year whether your life has changed and whether you were \
             comfortable with the swings.",
        ),
        VerdictKind::RiskierThanModel => (
            "somewhat higher risk",
            "Your stock share is above the model. This allocation may be hard to stick \
             with when markets move sharply.",
            "Picture a large drawdown and confirm it fits your tolerance, both \
             emotionally and financially.",
        ),
        VerdictKind::SaferThanModel => (
            "leaning conservative",
            "Your stock share is below the model, favouring stability. Confirm that \
             this is intentional.",
            "Confirm the allocation is deliberate; if it is, keeping it is fine.",
        ),
        VerdictKind::MinorDeviation => (
            "slight deviation",
            "Your allocation differs somewhat from the model. What the difference \
             means depends on your goals and time horizon.",
            "Write a one-line note on the intent behind the current allocation so the \
             next review is easier.",
        ),
    };
    Verdict {
        kind,
        badge,
        text,
        action,
    }
}
