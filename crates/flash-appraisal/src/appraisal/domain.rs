use serde::{Deserialize, Serialize};

use super::normalizer::parse_locale_number;

pub const MIN_SENSITIVITY_PCT: f64 = 5.0;
pub const MAX_SENSITIVITY_PCT: f64 = 50.0;
pub const DEFAULT_SENSITIVITY_PCT: f64 = 20.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    #[default]
    Apartment,
    House,
    Land,
    Commercial,
}

impl PropertyType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Apartment => "Apartment",
            Self::House => "House",
            Self::Land => "Land",
            Self::Commercial => "Commercial",
        }
    }

    /// Whether the total area comes from lot edge measurements.
    pub const fn has_lot(self) -> bool {
        !matches!(self, Self::Apartment)
    }

    /// Land has no construction, so year and built area do not apply.
    pub const fn has_construction(self) -> bool {
        !matches!(self, Self::Land)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Sunrise,
    Sunset,
}

impl Orientation {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sunrise => "Sunrise",
            Self::Sunset => "Sunset",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LotShape {
    #[default]
    Regular,
    Irregular,
}

impl LotShape {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Regular => "Regular",
            Self::Irregular => "Irregular",
        }
    }
}

/// Apparent age of the construction relative to the current year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBand {
    OffPlan,
    New,
    SemiNew,
    Old,
}

impl AgeBand {
    pub const fn label(self) -> &'static str {
        match self {
            Self::OffPlan => "Off-plan",
            Self::New => "New",
            Self::SemiNew => "Semi-new",
            Self::Old => "Old",
        }
    }

    pub fn for_age(age: i32) -> Self {
        if age < 0 {
            Self::OffPlan
        } else if age <= 5 {
            Self::New
        } else if age <= 20 {
            Self::SemiNew
        } else {
            Self::Old
        }
    }
}

/// Property data as entered on the form. Numeric fields keep the locale text the user typed;
/// the accessors below run them through the normalizer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyRecord {
    pub address: String,
    pub neighborhood: String,
    pub property_type: PropertyType,
    pub total_area: String,
    pub built_area: String,
    pub construction_year: String,
    pub asking_price: String,
    pub rural: bool,
    pub orientation: Orientation,
    pub lot_shape: LotShape,
    pub front: String,
    pub lateral: String,
    pub back: String,
    pub left: String,
    pub right: String,
}

impl PropertyRecord {
    pub fn total_area_value(&self) -> f64 {
        parse_locale_number(&self.total_area)
    }

    pub fn built_area_value(&self) -> f64 {
        parse_locale_number(&self.built_area)
    }

    pub fn asking_price_value(&self) -> f64 {
        parse_locale_number(&self.asking_price)
    }

    /// Built area wins over total area whenever it is positive. Land has no construction, so a
    /// stale built area on a land record is ignored.
    pub fn pricing_area(&self) -> f64 {
        let built = self.built_area_value();
        if self.property_type.has_construction() && built > 0.0 {
            built
        } else {
            self.total_area_value()
        }
    }

    pub fn set_property_type(&mut self, property_type: PropertyType) {
        self.property_type = property_type;
        if !property_type.has_construction() {
            self.construction_year.clear();
            self.built_area.clear();
        }
    }

    /// Edge values are kept across shape switches so the user can flip back without retyping.
    pub fn set_lot_shape(&mut self, lot_shape: LotShape) {
        self.lot_shape = lot_shape;
    }

    pub fn construction_year_value(&self) -> Option<i32> {
        let trimmed = self.construction_year.trim();
        let digits: String = trimmed.chars().take_while(char::is_ascii_digit).collect();
        digits.parse::<i32>().ok()
    }

    pub fn age_band(&self, current_year: i32) -> Option<AgeBand> {
        if !self.property_type.has_construction() {
            return None;
        }
        let year = self.construction_year_value()?;
        current_year.checked_sub(year).map(AgeBand::for_age)
    }
}

/// Regional market inputs for the price estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketContext {
    pub average_price_per_area: String,
    pub sensitivity_pct: f64,
}

impl Default for MarketContext {
    fn default() -> Self {
        Self {
            average_price_per_area: String::new(),
            sensitivity_pct: DEFAULT_SENSITIVITY_PCT,
        }
    }
}

impl MarketContext {
    pub fn new(average_price_per_area: impl Into<String>, sensitivity_pct: f64) -> Self {
        Self {
            average_price_per_area: average_price_per_area.into(),
            sensitivity_pct,
        }
    }

    pub fn price_per_area(&self) -> f64 {
        parse_locale_number(&self.average_price_per_area)
    }

    /// Sensitivity clamped to the slider bounds; a non-finite value falls back to the default.
    pub fn sensitivity(&self) -> f64 {
        if self.sensitivity_pct.is_finite() {
            self.sensitivity_pct
                .clamp(MIN_SENSITIVITY_PCT, MAX_SENSITIVITY_PCT)
        } else {
            DEFAULT_SENSITIVITY_PCT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switching_to_land_clears_construction_fields() {
        let mut record = PropertyRecord {
            property_type: PropertyType::House,
            built_area: "150,00".to_string(),
            construction_year: "2010".to_string(),
            total_area: "300,00".to_string(),
            ..PropertyRecord::default()
        };

        record.set_property_type(PropertyType::Land);

        assert_eq!(record.property_type, PropertyType::Land);
        assert!(record.built_area.is_empty());
        assert!(record.construction_year.is_empty());
        assert_eq!(record.total_area, "300,00");
    }

    #[test]
    fn switching_shape_keeps_edges() {
        let mut record = PropertyRecord {
            front: "10,00".to_string(),
            lateral: "20,00".to_string(),
            back: "14,00".to_string(),
            ..PropertyRecord::default()
        };

        record.set_lot_shape(LotShape::Irregular);
        record.set_lot_shape(LotShape::Regular);

        assert_eq!(record.front, "10,00");
        assert_eq!(record.lateral, "20,00");
        assert_eq!(record.back, "14,00");
    }

    #[test]
    fn built_area_takes_precedence_for_pricing() {
        let mut record = PropertyRecord {
            total_area: "300,00".to_string(),
            ..PropertyRecord::default()
        };
        assert_eq!(record.pricing_area(), 300.0);

        record.built_area = "180,50".to_string();
        assert_eq!(record.pricing_area(), 180.5);
    }

    #[test]
    fn age_band_follows_construction_year() {
        let mut record = PropertyRecord {
            property_type: PropertyType::House,
            construction_year: "2027".to_string(),
            ..PropertyRecord::default()
        };
        assert_eq!(record.age_band(2026), Some(AgeBand::OffPlan));

        record.construction_year = "2021".to_string();
        assert_eq!(record.age_band(2026), Some(AgeBand::New));

        record.construction_year = "2006".to_string();
        assert_eq!(record.age_band(2026), Some(AgeBand::SemiNew));

        record.construction_year = "1990".to_string();
        assert_eq!(record.age_band(2026), Some(AgeBand::Old));

        record.construction_year = "abc".to_string();
        assert_eq!(record.age_band(2026), None);

        record.construction_year = "2010".to_string();
        record.property_type = PropertyType::Land;
        assert_eq!(record.age_band(2026), None);
    }

    #[test]
    fn extreme_current_year_does_not_overflow() {
        let record = PropertyRecord {
            property_type: PropertyType::House,
            construction_year: "2010".to_string(),
            ..PropertyRecord::default()
        };
        assert_eq!(record.age_band(i32::MIN), None);
        assert_eq!(record.age_band(i32::MAX), Some(AgeBand::Old));
    }

    #[test]
    fn sensitivity_is_clamped_to_slider_bounds() {
        assert_eq!(MarketContext::new("", 2.0).sensitivity(), 5.0);
        assert_eq!(MarketContext::new("", 80.0).sensitivity(), 50.0);
        assert_eq!(MarketContext::new("", 35.0).sensitivity(), 35.0);
        assert_eq!(MarketContext::new("", f64::NAN).sensitivity(), 20.0);
        assert_eq!(MarketContext::default().sensitivity(), 20.0);
    }
}
