use serde::Serialize;

use crate::appraisal::catalog::Criterion;
use crate::appraisal::scoring::ScoreSheet;

pub const HIGHLIGHT_LIMIT: usize = 3;
pub const STRENGTH_MIN_SCORE: f64 = 7.0;
pub const ATTENTION_MAX_SCORE: f64 = 6.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCriterion {
    pub criterion: Criterion,
    pub label: &'static str,
    pub value: f64,
}

impl RankedCriterion {
    pub fn line(&self) -> String {
        format!("- {}: {}", self.label, self.value)
    }
}

/// Best and worst rated criteria for the report.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Highlights {
    pub strengths: Vec<RankedCriterion>,
    pub attention_points: Vec<RankedCriterion>,
}

impl Highlights {
    /// Strengths are the top three touched criteria that reach 7, best first. Attention points
    /// are the bottom three that stay at or below 6, worst first. Equal values keep catalog
    /// order in both lists.
    pub fn from_sheet(sheet: &ScoreSheet) -> Self {
        let rated: Vec<RankedCriterion> = sheet
            .touched()
            .map(|(criterion, value)| RankedCriterion {
                criterion,
                label: criterion.label(),
                value,
            })
            .collect();

        let mut descending = rated.clone();
        descending.sort_by(|a, b| b.value.total_cmp(&a.value));
        let strengths = descending
            .into_iter()
            .take(HIGHLIGHT_LIMIT)
            .filter(|entry| entry.value >= STRENGTH_MIN_SCORE)
            .collect();

        let mut ascending = rated;
        ascending.sort_by(|a, b| a.value.total_cmp(&b.value));
        let attention_points = ascending
            .into_iter()
            .take(HIGHLIGHT_LIMIT)
            .filter(|entry| entry.value <= ATTENTION_MAX_SCORE)
            .collect();

        Self {
            strengths,
            attention_points,
        }
    }
}
