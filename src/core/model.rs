use serde::Serialize;

use super::types::{AgeBand, ModelAllocation, RiskLevel};

const fn model(stocks: f64, bonds: f64, cash: f64) -> ModelAllocation {
    ModelAllocation {
        stocks,
        bonds,
        cash,
    }
}

// Rows follow AgeBand::ALL, columns follow RiskLevel::ALL.
const MODELS: [[ModelAllocation; 3]; 4] = [
    [model(50.0, 30.0, 20.0), model(70.0, 20.0, 10.0), model(85.0, 10.0, 5.0)],
    [model(45.0, 35.0, 20.0), model(65.0, 25.0, 10.0), model(80.0, 15.0, 5.0)],
    [model(35.0, 45.0, 20.0), model(55.0, 35.0, 10.0), model(70.0, 25.0, 5.0)],
    [model(20.0, 55.0, 25.0), model(35.0, 50.0, 15.0), model(50.0, 40.0, 10.0)],
];

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelEntry {
    pub age_band: AgeBand,
    pub risk: RiskLevel,
    pub model: ModelAllocation,
}

/// Total over all integers; anything below 35 (including nonsense like
/// negative ages) lands in the youngest band.
pub fn age_band(age: i64) -> AgeBand {
    if age <= 34 {
        AgeBand::Age20To34
    } else if age <= 49 {
        AgeBand::Age35To49
    } else if age <= 64 {
        AgeBand::Age50To64
    } else {
        AgeBand::Age65Plus
    }
}

pub fn lookup_model(band: AgeBand, risk: RiskLevel) -> ModelAllocation {
    let row = match band {
        AgeBand::Age20To34 => 0,
        AgeBand::Age35To49 => 1,
        AgeBand::Age50To64 => 2,
        AgeBand::Age65Plus => 3,
    };
    let col = match risk {
        RiskLevel::Low => 0,
        RiskLevel::Mid => 1,
        RiskLevel::High => 2,
    };
    MODELS[row][col]
}

/// All entries, band-major.
pub fn model_table() -> Vec<ModelEntry> {
    AgeBand::ALL
        .iter()
        .flat_map(|&age_band| {
            RiskLevel::ALL.iter().map(move |&risk| ModelEntry {
                age_band,
                risk,
                model: lookup_model(age_band, risk),
            })
        })
        .collect()
}
