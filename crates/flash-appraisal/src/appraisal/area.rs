use serde::{Deserialize, Serialize};

use super::domain::{LotShape, PropertyRecord};
use super::normalizer::{format_locale_number, parse_locale_number};

/// Parsed lot edge measurements. Irregular lots use all four; regular lots use `front` and
/// `lateral` only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LotEdges {
    pub front: f64,
    pub lateral: f64,
    pub back: f64,
    pub left: f64,
    pub right: f64,
}

/// Area of the lot for the active shape, or `None` while any required edge is missing.
pub fn derive_area(shape: LotShape, edges: &LotEdges) -> Option<f64> {
    match shape {
        LotShape::Regular => {
            if edges.front > 0.0 && edges.lateral > 0.0 {
                Some(edges.front * edges.lateral)
            } else {
                None
            }
        }
        LotShape::Irregular => {
            let all_present = [edges.front, edges.back, edges.left, edges.right]
                .iter()
                .all(|edge| *edge > 0.0);
            if !all_present {
                return None;
            }
            let average_width = (edges.front + edges.back) / 2.0;
            let average_height = (edges.left + edges.right) / 2.0;
            Some(average_width * average_height)
        }
    }
}

impl PropertyRecord {
    pub fn lot_edges(&self) -> LotEdges {
        LotEdges {
            front: parse_locale_number(&self.front),
            lateral: parse_locale_number(&self.lateral),
            back: parse_locale_number(&self.back),
            left: parse_locale_number(&self.left),
            right: parse_locale_number(&self.right),
        }
    }

    /// Area implied by the lot edges. Apartments have no lot and never derive one.
    pub fn derived_area(&self) -> Option<f64> {
        if !self.property_type.has_lot() {
            return None;
        }
        derive_area(self.lot_shape, &self.lot_edges())
    }

    /// Write the derived area into the total-area field. The field keeps its previous text
    /// when no area can be derived.
    pub fn refresh_total_area(&mut self) -> Option<f64> {
        let area = self.derived_area()?;
        self.total_area = format_locale_number(area);
        Some(area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appraisal::domain::PropertyType;

    fn lot(front: &str, lateral: &str, back: &str, left: &str, right: &str) -> PropertyRecord {
        PropertyRecord {
            property_type: PropertyType::Land,
            front: front.to_string(),
            lateral: lateral.to_string(),
            back: back.to_string(),
            left: left.to_string(),
            right: right.to_string(),
            ..PropertyRecord::default()
        }
    }

    #[test]
    fn regular_lot_is_front_times_lateral() {
        let mut record = lot("10,00", "20,00", "", "", "");

        assert_eq!(record.refresh_total_area(), Some(200.0));
        assert_eq!(record.total_area, "200,00");
    }

    #[test]
    fn derived_area_rounds_half_cent_up() {
        let mut record = lot("10,25", "10,50", "", "", "");

        assert_eq!(record.refresh_total_area(), Some(107.625));
        assert_eq!(record.total_area, "107,63");
    }

    #[test]
    fn irregular_lot_averages_opposite_edges() {
        let mut record = lot("10,00", "", "14,00", "8,00", "12,00");
        record.set_lot_shape(LotShape::Irregular);

        assert_eq!(record.refresh_total_area(), Some(120.0));
        assert_eq!(record.total_area, "120,00");
    }

    #[test]
    fn missing_edges_leave_area_unset() {
        let mut record = lot("10,00", "", "", "", "");
        record.total_area = "55,00".to_string();

        assert_eq!(record.refresh_total_area(), None);
        assert_eq!(record.total_area, "55,00");

        record.set_lot_shape(LotShape::Irregular);
        record.back = "14,00".to_string();
        record.left = "8,00".to_string();
        assert_eq!(record.derived_area(), None);
    }

    #[test]
    fn inactive_mode_edges_are_ignored() {
        let mut record = lot("10,00", "20,00", "14,00", "8,00", "12,00");
        assert_eq!(record.derived_area(), Some(200.0));

        record.set_lot_shape(LotShape::Irregular);
        assert_eq!(record.derived_area(), Some(120.0));
    }

    #[test]
    fn apartments_do_not_derive_area() {
        let mut record = lot("10,00", "20,00", "", "", "");
        record.property_type = PropertyType::Apartment;
        record.total_area = "75,00".to_string();

        assert_eq!(record.refresh_total_area(), None);
        assert_eq!(record.total_area, "75,00");
    }

    #[test]
    fn zero_or_negative_edges_do_not_count() {
        let edges = LotEdges {
            front: 10.0,
            lateral: 0.0,
            ..LotEdges::default()
        };
        assert_eq!(derive_area(LotShape::Regular, &edges), None);

        let edges = LotEdges {
            front: 10.0,
            lateral: -3.0,
            ..LotEdges::default()
        };
        assert_eq!(derive_area(LotShape::Regular, &edges), None);
    }
}
