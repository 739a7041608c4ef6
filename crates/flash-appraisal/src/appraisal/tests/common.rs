use crate::appraisal::catalog::{Amenity, Criterion, SelectedAmenities};
use crate::appraisal::domain::{MarketContext, Orientation, PropertyRecord, PropertyType};
use crate::appraisal::scoring::ScoreSheet;
use crate::appraisal::AppraisalInput;

pub(super) fn sheet(entries: &[(Criterion, f64)]) -> ScoreSheet {
    let mut sheet = ScoreSheet::default();
    for (criterion, value) in entries {
        sheet.set(*criterion, *value);
    }
    sheet
}

pub(super) fn uniform_sheet(value: f64) -> ScoreSheet {
    let mut sheet = ScoreSheet::default();
    for criterion in Criterion::ordered() {
        sheet.set(criterion, value);
    }
    sheet
}

/// House on a 10 x 20 regular lot, facing sunset, priced at 1.000,00 per m².
pub(super) fn house() -> PropertyRecord {
    PropertyRecord {
        address: "Rua das Flores, 120".to_string(),
        neighborhood: "Centro".to_string(),
        property_type: PropertyType::House,
        orientation: Orientation::Sunset,
        front: "10,00".to_string(),
        lateral: "20,00".to_string(),
        ..PropertyRecord::default()
    }
}

pub(super) fn market() -> MarketContext {
    MarketContext::new("1.000,00", 20.0)
}

pub(super) fn house_input(scores: ScoreSheet) -> AppraisalInput {
    AppraisalInput {
        property: house(),
        market: market(),
        scores,
        amenities: SelectedAmenities::default(),
    }
}

/// Partially rated sheet used by the report fixtures: final score 53.875.
pub(super) fn mixed_sheet() -> ScoreSheet {
    sheet(&[
        (Criterion::Region, 9.0),
        (Criterion::Topography, 7.5),
        (Criterion::Access, 8.0),
        (Criterion::Infrastructure, 7.0),
        (Criterion::Services, 7.0),
        (Criterion::Extent, 6.0),
        (Criterion::Shape, 4.0),
        (Criterion::Noise, 5.5),
        (Criterion::Safety, 6.0),
        (Criterion::UrbanGrowth, 8.0),
    ])
}

pub(super) fn amenities(items: &[Amenity]) -> SelectedAmenities {
    let mut selected = SelectedAmenities::default();
    for amenity in items {
        selected.toggle(*amenity);
    }
    selected
}
