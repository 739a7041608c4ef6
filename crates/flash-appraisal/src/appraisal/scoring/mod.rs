mod policy;
mod rules;
mod sheet;

pub use policy::{
    Classification, GOOD_WITH_CAVEATS_THRESHOLD, GREAT_OPPORTUNITY_THRESHOLD, PREMIUM_THRESHOLD,
};
pub use sheet::{ScoreSheet, MAX_CRITERION_SCORE, UNTOUCHED_DISPLAY_SCORE};

use serde::Serialize;

use super::catalog::Category;

/// Weighted contribution of one category, kept for transparent breakdowns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryScore {
    pub category: Category,
    pub label: &'static str,
    pub rated: usize,
    pub total: usize,
    pub mean: Option<f64>,
    pub weight: f64,
    pub max_contribution: f64,
    pub contribution: f64,
}

/// Aggregated score for a sheet: per-category means, the 0–100 total and its tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scorecard {
    pub categories: Vec<CategoryScore>,
    pub final_score: f64,
    pub classification: Classification,
    pub touched_count: usize,
}

impl Scorecard {
    pub fn from_sheet(sheet: &ScoreSheet) -> Self {
        let categories = rules::score_categories(sheet);
        let final_score = categories
            .iter()
            .map(|category| category.contribution)
            .sum::<f64>();
        let touched_count = sheet.touched_count();

        Self {
            categories,
            final_score,
            classification: policy::classify(final_score, touched_count),
            touched_count,
        }
    }

    pub fn category(&self, category: Category) -> Option<&CategoryScore> {
        self.categories
            .iter()
            .find(|entry| entry.category == category)
    }

    /// Final score as shown to the user, rounded half away from zero.
    pub fn rounded_score(&self) -> f64 {
        self.final_score.round()
    }
}

#[cfg(test)]
pub(crate) fn classify_for_tests(final_score: f64, touched_count: usize) -> Classification {
    policy::classify(final_score, touched_count)
}
