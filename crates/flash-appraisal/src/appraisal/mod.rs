//! Property appraisal: scoring of the rated criteria and the price estimate derived from it.
//!
//! Every function here is pure. The caller owns the form state (`AppraisalInput`) and calls
//! [`appraise`] again whenever any field changes.

pub mod area;
pub mod catalog;
pub mod domain;
pub mod normalizer;
pub mod pricing;
pub mod report;
pub mod scoring;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use area::{derive_area, LotEdges};
pub use catalog::{Amenity, Category, Criterion, SelectedAmenities, CRITERION_COUNT};
pub use domain::{AgeBand, LotShape, MarketContext, Orientation, PropertyRecord, PropertyType};
pub use normalizer::{
    format_digits_as_currency, format_locale_grouped, format_locale_number, parse_locale_number,
};
pub use pricing::{estimate_price, round_to_even, PriceEstimate, PriceFactor};
pub use report::views::AppraisalView;
pub use report::{Highlights, RankedCriterion};
pub use scoring::{CategoryScore, Classification, ScoreSheet, Scorecard};
pub use snapshot::{load_snapshot_from_path, load_snapshot_from_reader, SnapshotError};

use serde::{Deserialize, Serialize};

use report::views::{PriceView, PropertySummaryView, ScoreView};

/// Complete snapshot of the form at one moment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppraisalInput {
    pub property: PropertyRecord,
    pub market: MarketContext,
    pub scores: ScoreSheet,
    pub amenities: SelectedAmenities,
}

/// Result of one pass over the pipeline. Never stored; recompute on change.
#[derive(Debug, Clone, PartialEq)]
pub struct Appraisal {
    /// Property as priced: the total area already reflects any area derived from the lot.
    pub property: PropertyRecord,
    pub amenities: SelectedAmenities,
    pub derived_area: Option<f64>,
    pub scorecard: Scorecard,
    pub price: PriceEstimate,
    pub highlights: Highlights,
}

pub fn appraise(input: &AppraisalInput) -> Appraisal {
    let mut property = input.property.clone();
    let derived_area = property.refresh_total_area();

    let scorecard = Scorecard::from_sheet(&input.scores);
    let price = estimate_price(&property, &input.market, &scorecard);
    let highlights = Highlights::from_sheet(&input.scores);

    Appraisal {
        property,
        amenities: input.amenities.clone(),
        derived_area,
        scorecard,
        price,
        highlights,
    }
}

impl Appraisal {
    pub fn report_text(&self) -> String {
        report::render_report(self)
    }

    pub fn breakdown_text(&self, current_year: Option<i32>) -> String {
        report::render_breakdown(self, current_year)
    }

    pub fn view(&self, current_year: Option<i32>) -> AppraisalView {
        let property = &self.property;
        let asking_price = property.asking_price_value();

        AppraisalView {
            property: PropertySummaryView {
                address: property.address.clone(),
                neighborhood: property.neighborhood.clone(),
                property_type: property.property_type,
                property_type_label: property.property_type.label(),
                lot_shape: property.lot_shape,
                total_area: property.total_area_value(),
                derived_area: self.derived_area,
                age_band: current_year
                    .and_then(|year| property.age_band(year))
                    .map(AgeBand::label),
                rural: property.rural,
                orientation_label: property.orientation.label(),
            },
            score: ScoreView {
                final_score: self.scorecard.final_score,
                rounded_score: self.scorecard.rounded_score(),
                classification: self.scorecard.classification,
                classification_label: self.scorecard.classification.label(),
                touched_count: self.scorecard.touched_count,
                categories: self.scorecard.categories.clone(),
            },
            price: PriceView {
                area: self.price.area,
                price_per_area: self.price.price_per_area,
                base_value: self.price.base_value,
                adjustment_pct: self.price.adjustment_pct,
                adjustment_display: self.price.adjustment_display(),
                factors: self.price.factor_labels(),
                suggested: self.price.suggested,
                min: self.price.min,
                max: self.price.max,
                asking_price: (asking_price > 0.0).then_some(asking_price),
            },
            strengths: self.highlights.strengths.clone(),
            attention_points: self.highlights.attention_points.clone(),
            amenities: self.amenities.labels(),
            report: self.report_text(),
        }
    }
}
