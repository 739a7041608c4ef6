use clap::ValueEnum;
use flash_appraisal::appraisal::domain::{MAX_SENSITIVITY_PCT, MIN_SENSITIVITY_PCT};
use flash_appraisal::appraisal::{
    parse_locale_number, Amenity, AppraisalInput, Criterion, LotShape, MarketContext,
    Orientation, PropertyRecord, PropertyType, ScoreSheet, SelectedAmenities,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Shareable plain-text report
    #[default]
    Text,
    /// Full appraisal view as pretty-printed JSON
    Json,
}

pub(crate) fn parse_sensitivity(raw: &str) -> Result<f64, String> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("failed to parse '{raw}' as a percentage ({err})"))?;
    if (MIN_SENSITIVITY_PCT..=MAX_SENSITIVITY_PCT).contains(&value) {
        Ok(value)
    } else {
        Err(format!(
            "sensitivity must be between {MIN_SENSITIVITY_PCT} and {MAX_SENSITIVITY_PCT} (got {value})"
        ))
    }
}

/// Edge measurements are typed the way the form takes them ("12,50").
pub(crate) fn parse_edge(raw: &str) -> Result<f64, String> {
    let value = parse_locale_number(raw);
    if value > 0.0 {
        Ok(value)
    } else {
        Err(format!("'{raw}' is not a positive measurement"))
    }
}

/// House used by the demo: a regular 12 x 30 lot with 180 m² built, rated on most criteria.
pub(crate) fn sample_input(sensitivity_pct: f64) -> AppraisalInput {
    let property = PropertyRecord {
        address: "Rua das Acácias, 120".to_string(),
        neighborhood: "Vila Nova".to_string(),
        property_type: PropertyType::House,
        built_area: "180,00".to_string(),
        construction_year: "2012".to_string(),
        asking_price: "720.000,00".to_string(),
        rural: false,
        orientation: Orientation::Sunrise,
        lot_shape: LotShape::Regular,
        front: "12,00".to_string(),
        lateral: "30,00".to_string(),
        ..PropertyRecord::default()
    };

    let mut scores = ScoreSheet::default();
    for (criterion, value) in [
        (Criterion::Region, 8.5),
        (Criterion::Topography, 7.0),
        (Criterion::Access, 9.0),
        (Criterion::Infrastructure, 8.0),
        (Criterion::Services, 7.5),
        (Criterion::Extent, 7.0),
        (Criterion::Shape, 8.0),
        (Criterion::Ventilation, 6.5),
        (Criterion::Upkeep, 5.5),
        (Criterion::FinishStandard, 6.0),
        (Criterion::FloorPlan, 7.5),
        (Criterion::Age, 6.0),
        (Criterion::Zoning, 8.0),
        (Criterion::Noise, 4.5),
        (Criterion::Safety, 7.0),
        (Criterion::UrbanGrowth, 8.0),
        (Criterion::Scarcity, 6.5),
        (Criterion::RentalLiquidity, 9.5),
    ] {
        scores.set(criterion, value);
    }

    let mut amenities = SelectedAmenities::default();
    for amenity in [
        Amenity::Schools,
        Amenity::Supermarkets,
        Amenity::PublicTransport,
        Amenity::ParksSquares,
    ] {
        amenities.toggle(amenity);
    }

    AppraisalInput {
        property,
        market: MarketContext::new("3.800,00", sensitivity_pct),
        scores,
        amenities,
    }
}

/// Blank form snapshot carrying the configured market defaults.
pub(crate) fn template_input(sensitivity_pct: f64) -> AppraisalInput {
    AppraisalInput {
        market: MarketContext::new("", sensitivity_pct),
        ..AppraisalInput::default()
    }
}
