use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::appraisal::catalog::{Category, Criterion};

/// Value the form shows on an untouched slider. Cosmetic only; never aggregated.
pub const UNTOUCHED_DISPLAY_SCORE: f64 = 5.0;
pub const MAX_CRITERION_SCORE: f64 = 10.0;

/// Criterion values the appraiser has explicitly set. A criterion is touched iff it has an
/// entry here; serializes as a map from criterion to value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<Criterion, f64>", into = "BTreeMap<Criterion, f64>")]
pub struct ScoreSheet {
    touched: BTreeMap<Criterion, f64>,
}

impl ScoreSheet {
    /// Record a slider value, snapping it to the 0.5 grid within [0, 10]. Returns the stored
    /// value.
    pub fn set(&mut self, criterion: Criterion, value: f64) -> f64 {
        let stored = snap_to_slider(value);
        self.touched.insert(criterion, stored);
        stored
    }

    pub fn clear(&mut self, criterion: Criterion) {
        self.touched.remove(&criterion);
    }

    /// Value as displayed: the stored value when touched, the neutral default otherwise.
    pub fn value(&self, criterion: Criterion) -> f64 {
        self.touched
            .get(&criterion)
            .copied()
            .unwrap_or(UNTOUCHED_DISPLAY_SCORE)
    }

    pub fn is_touched(&self, criterion: Criterion) -> bool {
        self.touched.contains_key(&criterion)
    }

    pub fn touched_count(&self) -> usize {
        self.touched.len()
    }

    /// Touched criteria with their values, in catalog order.
    pub fn touched(&self) -> impl Iterator<Item = (Criterion, f64)> + '_ {
        self.touched
            .iter()
            .map(|(criterion, value)| (*criterion, *value))
    }

    pub fn touched_in(&self, category: Category) -> impl Iterator<Item = f64> + '_ {
        self.touched()
            .filter(move |(criterion, _)| criterion.category() == category)
            .map(|(_, value)| value)
    }
}

fn snap_to_slider(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    (value.clamp(0.0, MAX_CRITERION_SCORE) * 2.0).round() / 2.0
}

impl From<BTreeMap<Criterion, f64>> for ScoreSheet {
    fn from(value: BTreeMap<Criterion, f64>) -> Self {
        let mut sheet = Self::default();
        for (criterion, score) in value {
            sheet.set(criterion, score);
        }
        sheet
    }
}

impl From<ScoreSheet> for BTreeMap<Criterion, f64> {
    fn from(value: ScoreSheet) -> Self {
        value.touched
    }
}
