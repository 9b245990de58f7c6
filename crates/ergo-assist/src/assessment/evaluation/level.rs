use serde::{Deserialize, Serialize};

const HIGH_RISK_POINTS: u32 = 5;
const MODERATE_RISK_POINTS: u32 = 3;
const MILD_RISK_POINTS: u32 = 1;

/// Categorical bucket derived from the accumulated risk points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    None,
    Mild,
    Moderate,
    High,
}

impl RiskLevel {
    /// Thresholds are inclusive lower bounds checked from the highest down.
    pub const fn from_points(points: u32) -> Self {
        if points >= HIGH_RISK_POINTS {
            RiskLevel::High
        } else if points >= MODERATE_RISK_POINTS {
            RiskLevel::Moderate
        } else if points >= MILD_RISK_POINTS {
            RiskLevel::Mild
        } else {
            RiskLevel::None
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RiskLevel::None => "none",
            RiskLevel::Mild => "mild",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
        }
    }

    pub const fn summary(self) -> &'static str {
        match self {
            RiskLevel::None => "no elevated ergonomic risk detected",
            RiskLevel::Mild => "mild ergonomic risk: small adjustments recommended",
            RiskLevel::Moderate => "moderate ergonomic risk: review your setup and break routine",
            RiskLevel::High => {
                "high ergonomic risk: act on the recommendations below and consider professional advice"
            }
        }
    }
}
