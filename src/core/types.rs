use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
pub enum AgeBand {
    #[serde(rename = "20-34")]
    Age20To34,
    #[serde(rename = "35-49")]
    Age35To49,
    #[serde(rename = "50-64")]
    Age50To64,
    #[serde(rename = "65+")]
    Age65Plus,
}

impl AgeBand {
    pub const ALL: [AgeBand; 4] = [
        AgeBand::Age20To34,
        AgeBand::Age35To49,
        AgeBand::Age50To64,
        AgeBand::Age65Plus,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AgeBand::Age20To34 => "20-34",
            AgeBand::Age35To49 => "35-49",
            AgeBand::Age50To64 => "50-64",
            AgeBand::Age65Plus => "65+",
        }
    }
}

impl fmt::Display for AgeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Mid,
    High,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Mid, RiskLevel::High];

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Mid => "mid",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How the allocation fields are being entered.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Amount,
    Percent,
}

/// Every input field the core validates, in the order errors are reported.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Stocks,
    Bonds,
    Cash,
    Other,
    Domestic,
    Global,
    Crypto,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Stocks => "stocks",
            Field::Bonds => "bonds",
            Field::Cash => "cash",
            Field::Other => "other",
            Field::Domestic => "domestic",
            Field::Global => "global",
            Field::Crypto => "crypto",
        };
        f.write_str(name)
    }
}

/// Target split for one (age band, risk level) pair. `other` is always 0.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct ModelAllocation {
    pub stocks: f64,
    pub bonds: f64,
    pub cash: f64,
}

impl ModelAllocation {
    pub fn total(self) -> f64 {
        self.stocks + self.bonds + self.cash
    }

    pub fn as_allocation(self) -> Allocation {
        Allocation {
            stocks: self.stocks,
            bonds: self.bonds,
            cash: self.cash,
            other: 0.0,
        }
    }
}

/// Either percentages or amounts; which one depends on the current `Mode`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize)]
pub struct Allocation {
    pub stocks: f64,
    pub bonds: f64,
    pub cash: f64,
    pub other: f64,
}

impl Allocation {
    pub fn total(self) -> f64 {
        self.stocks + self.bonds + self.cash + self.other
    }

    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            stocks: f(self.stocks),
            bonds: f(self.bonds),
            cash: f(self.cash),
            other: f(self.other),
        }
    }
}

/// User percentage minus model percentage, per asset class.
pub type Diff = Allocation;

/// Raw allocation field text as entered; blank means 0.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawAllocation {
    pub stocks: String,
    pub bonds: String,
    pub cash: String,
    pub other: String,
}

impl RawAllocation {
    pub fn new(stocks: &str, bonds: &str, cash: &str, other: &str) -> Self {
        Self {
            stocks: stocks.to_string(),
            bonds: bonds.to_string(),
            cash: cash.to_string(),
            other: other.to_string(),
        }
    }

    pub(crate) fn fields(&self) -> [(Field, &str); 4] {
        [
            (Field::Stocks, self.stocks.as_str()),
            (Field::Bonds, self.bonds.as_str()),
            (Field::Cash, self.cash.as_str()),
            (Field::Other, self.other.as_str()),
        ]
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Raw split of the stocks sleeve; all blank means "not provided".
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawEquityBreakdown {
    pub domestic: String,
    pub global: String,
    pub crypto: String,
}

impl RawEquityBreakdown {
    pub fn new(domestic: &str, global: &str, crypto: &str) -> Self {
        Self {
            domestic: domestic.to_string(),
            global: global.to_string(),
            crypto: crypto.to_string(),
        }
    }

    pub(crate) fn fields(&self) -> [(Field, &str); 3] {
        [
            (Field::Domestic, self.domestic.as_str()),
            (Field::Global, self.global.as_str()),
            (Field::Crypto, self.crypto.as_str()),
        ]
    }

    pub fn is_blank(&self) -> bool {
        self.fields().iter().all(|(_, raw)| raw.trim().is_empty())
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum VerdictKind {
    LargeDeviation,
    WithinTolerance,
    RiskierThanModel,
    SaferThanModel,
    MinorDeviation,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub kind: VerdictKind,
    pub badge: &'static str,
    pub text: &'static str,
    pub action: &'static str,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteLevel {
    /// Shown prominently.
    Caution,
    Info,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CryptoNote {
    pub level: NoteLevel,
    pub crypto_share: f64,
    pub text: String,
}
