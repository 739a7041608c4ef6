use serde::{Deserialize, Serialize};

use super::sheet::MAX_CRITERION_SCORE;
use crate::appraisal::catalog::Category;

pub const PREMIUM_THRESHOLD: f64 = 90.0;
pub const GREAT_OPPORTUNITY_THRESHOLD: f64 = 75.0;
pub const GOOD_WITH_CAVEATS_THRESHOLD: f64 = 60.0;

impl Category {
    /// Multiplier applied to the category mean. A fully rated sheet of tens sums to 100.
    pub const fn weight(self) -> f64 {
        match self {
            Self::Location => 2.5,
            Self::Lot => 2.0,
            Self::Construction => 2.0,
            Self::Neighborhood => 1.5,
            Self::Potential => 2.0,
        }
    }

    pub fn max_contribution(self) -> f64 {
        self.weight() * MAX_CRITERION_SCORE
    }
}

/// Qualitative tier derived from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    AwaitingEvaluation,
    NeedsAdjustment,
    GoodWithCaveats,
    GreatOpportunity,
    Premium,
}

impl Classification {
    pub const fn label(self) -> &'static str {
        match self {
            Self::AwaitingEvaluation => "Awaiting evaluation",
            Self::NeedsAdjustment => "Needs adjustment",
            Self::GoodWithCaveats => "Good with caveats",
            Self::GreatOpportunity => "Great opportunity",
            Self::Premium => "Premium",
        }
    }
}

/// A zero score with nothing rated means the appraisal has not started, which is different
/// from a poor result.
pub(crate) fn classify(final_score: f64, touched_count: usize) -> Classification {
    if final_score == 0.0 && touched_count == 0 {
        Classification::AwaitingEvaluation
    } else if final_score >= PREMIUM_THRESHOLD {
        Classification::Premium
    } else if final_score >= GREAT_OPPORTUNITY_THRESHOLD {
        Classification::GreatOpportunity
    } else if final_score >= GOOD_WITH_CAVEATS_THRESHOLD {
        Classification::GoodWithCaveats
    } else {
        Classification::NeedsAdjustment
    }
}
