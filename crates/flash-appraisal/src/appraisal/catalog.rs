//! Fixed appraisal catalog: the five categories, their criteria, and the amenity list.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Location,
    Lot,
    Construction,
    Neighborhood,
    Potential,
}

impl Category {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Location,
            Self::Lot,
            Self::Construction,
            Self::Neighborhood,
            Self::Potential,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Location => "Location",
            Self::Lot => "Lot",
            Self::Construction => "Construction",
            Self::Neighborhood => "Neighborhood",
            Self::Potential => "Potential",
        }
    }

    pub fn criteria(self) -> impl Iterator<Item = Criterion> {
        Criterion::ordered()
            .into_iter()
            .filter(move |criterion| criterion.category() == self)
    }
}

/// A single scored criterion. Declaration order is catalog order: category first, then the
/// order the form lists the sliders in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Region,
    Topography,
    Access,
    Infrastructure,
    Services,
    Extent,
    Shape,
    Improvements,
    Ventilation,
    ExpansionRoom,
    Upkeep,
    FinishStandard,
    FloorPlan,
    Comfort,
    Age,
    Zoning,
    NeighborProfile,
    Noise,
    Safety,
    UrbanGrowth,
    PublicWorks,
    NewDevelopments,
    Scarcity,
    AppreciationHistory,
    RentalLiquidity,
}

pub const CRITERION_COUNT: usize = 25;

impl Criterion {
    pub const fn ordered() -> [Self; CRITERION_COUNT] {
        [
            Self::Region,
            Self::Topography,
            Self::Access,
            Self::Infrastructure,
            Self::Services,
            Self::Extent,
            Self::Shape,
            Self::Improvements,
            Self::Ventilation,
            Self::ExpansionRoom,
            Self::Upkeep,
            Self::FinishStandard,
            Self::FloorPlan,
            Self::Comfort,
            Self::Age,
            Self::Zoning,
            Self::NeighborProfile,
            Self::Noise,
            Self::Safety,
            Self::UrbanGrowth,
            Self::PublicWorks,
            Self::NewDevelopments,
            Self::Scarcity,
            Self::AppreciationHistory,
            Self::RentalLiquidity,
        ]
    }

    pub const fn category(self) -> Category {
        match self {
            Self::Region | Self::Topography | Self::Access | Self::Infrastructure | Self::Services => {
                Category::Location
            }
            Self::Extent
            | Self::Shape
            | Self::Improvements
            | Self::Ventilation
            | Self::ExpansionRoom => Category::Lot,
            Self::Upkeep | Self::FinishStandard | Self::FloorPlan | Self::Comfort | Self::Age => {
                Category::Construction
            }
            Self::Zoning | Self::NeighborProfile | Self::Noise | Self::Safety => {
                Category::Neighborhood
            }
            Self::UrbanGrowth
            | Self::PublicWorks
            | Self::NewDevelopments
            | Self::Scarcity
            | Self::AppreciationHistory
            | Self::RentalLiquidity => Category::Potential,
        }
    }

    /// Short name used in the report's strengths and attention points.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Region => "Region",
            Self::Topography => "Topography",
            Self::Access => "Access",
            Self::Infrastructure => "Infrastructure",
            Self::Services => "Services",
            Self::Extent => "Extent",
            Self::Shape => "Shape",
            Self::Improvements => "Improvements",
            Self::Ventilation => "Ventilation",
            Self::ExpansionRoom => "Expansion",
            Self::Upkeep => "Upkeep",
            Self::FinishStandard => "Finish",
            Self::FloorPlan => "Floor plan",
            Self::Comfort => "Comfort",
            Self::Age => "Age",
            Self::Zoning => "Zoning",
            Self::NeighborProfile => "Neighbors",
            Self::Noise => "Noise",
            Self::Safety => "Safety",
            Self::UrbanGrowth => "Growth",
            Self::PublicWorks => "Public works",
            Self::NewDevelopments => "Developments",
            Self::Scarcity => "Scarcity",
            Self::AppreciationHistory => "Appreciation",
            Self::RentalLiquidity => "Liquidity",
        }
    }

    /// Guidance shown to the appraiser next to the slider.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Region => "Real-estate appreciation of the district and current demand.",
            Self::Topography => "Terrain. Flat (10) vs steep slope up or down (0).",
            Self::Access => "Ease of arrival, paving and traffic.",
            Self::Infrastructure => "Water, sewage, power, internet and drainage networks.",
            Self::Services => "Proximity to schools, markets, hospitals and transport.",
            Self::Extent => "Size of the lot compared with the regional standard.",
            Self::Shape => "Geometry (regular/rectangular scores higher).",
            Self::Improvements => "Existing walls, sidewalks, gates and landscaping.",
            Self::Ventilation => "Sun position and natural air flow.",
            Self::ExpansionRoom => "Space available for future construction.",
            Self::Upkeep => "General state of paint, floors and installations.",
            Self::FinishStandard => "Quality of finishes (luxury vs basic).",
            Self::FloorPlan => "Use of the floor plan and integration of rooms.",
            Self::Comfort => "Thermal and acoustic insulation.",
            Self::Age => "Apparent age and need for modernization.",
            Self::Zoning => "Flexibility of the land use and occupation rules.",
            Self::NeighborProfile => "Standard of the neighboring buildings.",
            Self::Noise => "Quietness (silent = 10).",
            Self::Safety => "Perceived safety and crime rates.",
            Self::UrbanGrowth => "Urban growth heading toward the property.",
            Self::PublicWorks => "Public works planned nearby.",
            Self::NewDevelopments => "Real-estate launches in the region.",
            Self::Scarcity => "Lack of available lots in the area (scarce = high score).",
            Self::AppreciationHistory => "Appreciation history over recent years.",
            Self::RentalLiquidity => "Ease of renting out or reselling (liquidity).",
        }
    }
}

/// Nearby points of interest the appraiser can tick. Report-only; never scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Amenity {
    Schools,
    Universities,
    HospitalsClinics,
    Pharmacies,
    Supermarkets,
    Bakeries,
    RestaurantsBars,
    ShoppingCenter,
    ParksSquares,
    Gyms,
    PublicTransport,
    Banks,
    GasStation,
    PoliceSecurity,
    FastAccessRoads,
}

impl Amenity {
    pub const fn ordered() -> [Self; 15] {
        [
            Self::Schools,
            Self::Universities,
            Self::HospitalsClinics,
            Self::Pharmacies,
            Self::Supermarkets,
            Self::Bakeries,
            Self::RestaurantsBars,
            Self::ShoppingCenter,
            Self::ParksSquares,
            Self::Gyms,
            Self::PublicTransport,
            Self::Banks,
            Self::GasStation,
            Self::PoliceSecurity,
            Self::FastAccessRoads,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Schools => "Schools / Colleges",
            Self::Universities => "Universities",
            Self::HospitalsClinics => "Hospitals / Clinics",
            Self::Pharmacies => "Pharmacies",
            Self::Supermarkets => "Supermarkets",
            Self::Bakeries => "Bakeries",
            Self::RestaurantsBars => "Restaurants / Bars",
            Self::ShoppingCenter => "Shopping Center",
            Self::ParksSquares => "Parks / Squares",
            Self::Gyms => "Gyms",
            Self::PublicTransport => "Public Transport",
            Self::Banks => "Banks",
            Self::GasStation => "Gas Station",
            Self::PoliceSecurity => "Police / Security",
            Self::FastAccessRoads => "Fast Access Roads",
        }
    }
}

/// Amenities in the order they were ticked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Amenity>", into = "Vec<Amenity>")]
pub struct SelectedAmenities {
    selected: Vec<Amenity>,
}

impl SelectedAmenities {
    /// Tick the amenity if absent, untick it otherwise. Returns whether it is now selected.
    pub fn toggle(&mut self, amenity: Amenity) -> bool {
        if let Some(index) = self.selected.iter().position(|item| *item == amenity) {
            self.selected.remove(index);
            false
        } else {
            self.selected.push(amenity);
            true
        }
    }

    pub fn contains(&self, amenity: Amenity) -> bool {
        self.selected.contains(&amenity)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Amenity> + '_ {
        self.selected.iter().copied()
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.iter().map(Amenity::label).collect()
    }
}

impl From<Vec<Amenity>> for SelectedAmenities {
    fn from(value: Vec<Amenity>) -> Self {
        let mut selected = Self::default();
        for amenity in value {
            if !selected.contains(amenity) {
                selected.selected.push(amenity);
            }
        }
        selected
    }
}

impl From<SelectedAmenities> for Vec<Amenity> {
    fn from(value: SelectedAmenities) -> Self {
        value.selected
    }
}
