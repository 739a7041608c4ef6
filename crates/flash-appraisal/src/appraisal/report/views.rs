use serde::Serialize;

use super::summary::RankedCriterion;
use crate::appraisal::domain::{LotShape, PropertyType};
use crate::appraisal::scoring::{CategoryScore, Classification};

#[derive(Debug, Clone, Serialize)]
pub struct PropertySummaryView {
    pub address: String,
    pub neighborhood: String,
    pub property_type: PropertyType,
    pub property_type_label: &'static str,
    pub lot_shape: LotShape,
    pub total_area: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub derived_area: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_band: Option<&'static str>,
    pub rural: bool,
    pub orientation_label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreView {
    pub final_score: f64,
    pub rounded_score: f64,
    pub classification: Classification,
    pub classification_label: &'static str,
    pub touched_count: usize,
    pub categories: Vec<CategoryScore>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PriceView {
    pub area: f64,
    pub price_per_area: f64,
    pub base_value: f64,
    pub adjustment_pct: f64,
    pub adjustment_display: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub factors: Vec<&'static str>,
    pub suggested: f64,
    pub min: f64,
    pub max: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asking_price: Option<f64>,
}

/// Everything the collaborator renders, in one serializable snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct AppraisalView {
    pub property: PropertySummaryView,
    pub score: ScoreView,
    pub price: PriceView,
    pub strengths: Vec<RankedCriterion>,
    pub attention_points: Vec<RankedCriterion>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub amenities: Vec<&'static str>,
    pub report: String,
}
