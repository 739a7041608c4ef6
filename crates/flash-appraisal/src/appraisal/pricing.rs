use serde::Serialize;

use super::domain::{MarketContext, Orientation, PropertyRecord};
use super::scoring::Scorecard;

/// Score at which the price is left at its base value.
pub const NEUTRAL_SCORE: f64 = 50.0;
pub const RANGE_SPREAD: f64 = 0.05;

/// Fixed multiplicative adjustments for property attributes, applied in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceFactor {
    Rural,
    Sunrise,
}

impl PriceFactor {
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Rural => 0.95,
            Self::Sunrise => 1.05,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Rural => "Rural (-5%)",
            Self::Sunrise => "Sunrise (+5%)",
        }
    }

    pub fn applicable(property: &PropertyRecord) -> Vec<Self> {
        let mut factors = Vec::new();
        if property.rural {
            factors.push(Self::Rural);
        }
        if property.orientation == Orientation::Sunrise {
            factors.push(Self::Sunrise);
        }
        factors
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceEstimate {
    pub area: f64,
    pub price_per_area: f64,
    pub base_value: f64,
    pub adjustment_pct: f64,
    pub factors: Vec<PriceFactor>,
    pub suggested: f64,
    pub min: f64,
    pub max: f64,
}

impl PriceEstimate {
    /// Signed percentage with one decimal, e.g. `+10.0%`.
    pub fn adjustment_display(&self) -> String {
        let sign = if self.adjustment_pct >= 0.0 { "+" } else { "" };
        format!("{sign}{:.1}%", self.adjustment_pct * 100.0)
    }

    pub fn factor_labels(&self) -> Vec<&'static str> {
        self.factors.iter().map(|factor| factor.label()).collect()
    }
}

/// Linear map of the score onto the sensitivity band: 50 is neutral, 0 and 100 move the
/// price by the full sensitivity. Nothing rated means no adjustment.
pub fn adjustment_pct(final_score: f64, sensitivity_pct: f64, touched_count: usize) -> f64 {
    if touched_count == 0 {
        return 0.0;
    }
    ((final_score - NEUTRAL_SCORE) / NEUTRAL_SCORE) * (sensitivity_pct / 100.0)
}

pub fn estimate_price(
    property: &PropertyRecord,
    market: &MarketContext,
    scorecard: &Scorecard,
) -> PriceEstimate {
    let area = property.pricing_area();
    let price_per_area = market.price_per_area();
    let base_value = area * price_per_area;
    let adjustment_pct = adjustment_pct(
        scorecard.final_score,
        market.sensitivity(),
        scorecard.touched_count,
    );

    let factors = PriceFactor::applicable(property);
    let raw = factors
        .iter()
        .fold(base_value * (1.0 + adjustment_pct), |value, factor| {
            value * factor.multiplier()
        });

    let suggested = round_to_even(raw);

    PriceEstimate {
        area,
        price_per_area,
        base_value,
        adjustment_pct,
        factors,
        suggested,
        min: round_to_even(suggested * (1.0 - RANGE_SPREAD)),
        max: round_to_even(suggested * (1.0 + RANGE_SPREAD)),
    }
}

/// Snap to the nearest even integer: round to an integer, then to the nearest multiple of
/// two. Ties go up.
pub fn round_to_even(value: f64) -> f64 {
    let integer = round_half_up(value);
    2.0 * round_half_up(integer / 2.0)
}

fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
