use super::summary::RankedCriterion;
use crate::appraisal::normalizer::{format_locale_grouped, format_locale_number};
use crate::appraisal::Appraisal;

pub const REPORT_HEADER: &str = "PRO > FLASH - APPRAISAL";
const CURRENCY: &str = "R$";

/// Shareable plain-text report. Users paste this elsewhere, so labels and line layout stay
/// fixed.
pub(crate) fn render_report(appraisal: &Appraisal) -> String {
    let property = &appraisal.property;
    let scorecard = &appraisal.scorecard;
    let price = &appraisal.price;

    let amenities = if appraisal.amenities.is_empty() {
        String::new()
    } else {
        format!(
            "\nNEARBY AMENITIES:\n{}",
            appraisal.amenities.labels().join(", ")
        )
    };

    let factor_labels = price.factor_labels();
    let factors = if factor_labels.is_empty() {
        String::new()
    } else {
        format!(" ({})", factor_labels.join(", "))
    };

    let lines = [
        REPORT_HEADER.to_string(),
        String::new(),
        format!("PROPERTY: {}", property.property_type.label()),
        format!("LOCATION: {}", property.neighborhood),
        format!(
            "AREA: {}m² ({})",
            property.total_area.trim(),
            property.lot_shape.label()
        ),
        String::new(),
        format!("FINAL SCORE: {:.0}/100", scorecard.rounded_score()),
        format!("CLASSIFICATION: {}", scorecard.classification.label()),
        String::new(),
        "STRENGTHS:".to_string(),
        bullet_lines(&appraisal.highlights.strengths),
        String::new(),
        "ATTENTION POINTS:".to_string(),
        format!(
            "{}{amenities}",
            bullet_lines(&appraisal.highlights.attention_points)
        ),
        String::new(),
        format!("BASE VALUE: {CURRENCY} {}", money(price.base_value, 3)),
        format!(
            "SUGGESTED VALUE: {CURRENCY} {}{factors}",
            money(price.suggested, 0)
        ),
        format!(
            "RANGE: {CURRENCY} {} - {CURRENCY} {}",
            money(price.min, 0),
            money(price.max, 0)
        ),
    ];

    lines.join("\n")
}

/// Calculation breakdown shown next to the price, one figure per line.
pub(crate) fn render_breakdown(appraisal: &Appraisal, current_year: Option<i32>) -> String {
    let price = &appraisal.price;
    let mut lines = vec![
        "CALCULATION BREAKDOWN".to_string(),
        format!(
            "Area used: {}m² x {CURRENCY} {}",
            format_locale_number(price.area),
            format_locale_number(price.price_per_area)
        ),
        format!("Base value (average): {CURRENCY} {}", money(price.base_value, 0)),
        format!(
            "Technical score: {:.0} / 100",
            appraisal.scorecard.rounded_score()
        ),
        format!("Applied adjustment: {}", price.adjustment_display()),
    ];

    for factor in &price.factors {
        lines.push(format!("Factor: {}", factor.label()));
    }

    if let Some(band) = current_year.and_then(|year| appraisal.property.age_band(year)) {
        lines.push(format!("Construction age: {}", band.label()));
    }

    lines.push(format!(
        "Suggested: {CURRENCY} {} (min {CURRENCY} {} | max {CURRENCY} {})",
        money(price.suggested, 0),
        money(price.min, 0),
        money(price.max, 0)
    ));

    lines.join("\n")
}

fn bullet_lines(entries: &[RankedCriterion]) -> String {
    entries
        .iter()
        .map(RankedCriterion::line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn money(value: f64, max_fraction_digits: usize) -> String {
    format_locale_grouped(value, max_fraction_digits)
}
