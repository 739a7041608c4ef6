use std::io::Cursor;

use flash_appraisal::appraisal::{
    appraise, load_snapshot_from_path, load_snapshot_from_reader, parse_locale_number,
    Classification, Criterion, LotShape, PropertyType, SnapshotError,
};

const LAND_SNAPSHOT: &str = r#"{
    "property": {
        "neighborhood": "Jardim Europa",
        "property_type": "land",
        "rural": true,
        "orientation": "sunset",
        "lot_shape": "irregular",
        "front": "10,00",
        "back": "14,00",
        "left": "8,00",
        "right": "12,00"
    },
    "market": { "average_price_per_area": "500,00", "sensitivity_pct": 30 },
    "scores": {
        "region": 9.5,
        "topography": 9,
        "extent": 8,
        "shape": 3,
        "zoning": 10,
        "scarcity": 9.5
    },
    "amenities": ["fast_access_roads", "gas_station"]
}"#;

#[test]
fn snapshot_runs_through_the_whole_pipeline() {
    let input = load_snapshot_from_reader(Cursor::new(LAND_SNAPSHOT)).expect("snapshot parses");
    assert_eq!(input.property.property_type, PropertyType::Land);
    assert_eq!(input.property.lot_shape, LotShape::Irregular);
    assert!(input.scores.is_touched(Criterion::Scarcity));
    assert!(!input.scores.is_touched(Criterion::Upkeep));

    let appraisal = appraise(&input);

    assert_eq!(appraisal.derived_area, Some(120.0));
    assert_eq!(appraisal.property.total_area, "120,00");
    // location 9.25 * 2.5 + lot 5.5 * 2 + neighborhood 10 * 1.5 + potential 9.5 * 2
    assert_eq!(appraisal.scorecard.final_score, 68.125);
    assert_eq!(
        appraisal.scorecard.classification,
        Classification::GoodWithCaveats
    );
    assert_eq!(appraisal.price.base_value, 60_000.0);

    let report = appraisal.report_text();
    assert!(report.contains("PROPERTY: Land\nLOCATION: Jardim Europa\nAREA: 120,00m² (Irregular)"));
    assert!(report.contains("FINAL SCORE: 68/100\nCLASSIFICATION: Good with caveats"));
    assert!(report.contains("STRENGTHS:\n- Zoning: 10\n- Region: 9.5\n- Scarcity: 9.5"));
    assert!(report.contains("ATTENTION POINTS:\n- Shape: 3\nNEARBY AMENITIES:\nFast Access Roads, Gas Station"));
    assert!(report.contains("(Rural (-5%))"));
}

#[test]
fn regular_lot_example_derives_two_hundred() {
    let snapshot = r#"{"property": {"property_type": "house", "front": "10,00", "lateral": "20,00"}}"#;
    let input = load_snapshot_from_reader(Cursor::new(snapshot)).expect("snapshot parses");

    let appraisal = appraise(&input);

    assert_eq!(appraisal.derived_area, Some(200.0));
    assert_eq!(parse_locale_number(&appraisal.property.total_area), 200.0);
    assert_eq!(
        appraisal.scorecard.classification,
        Classification::AwaitingEvaluation
    );
}

#[test]
fn out_of_range_scores_are_snapped_on_load() {
    let snapshot = r#"{"scores": {"noise": 14, "safety": 6.3}}"#;
    let input = load_snapshot_from_reader(Cursor::new(snapshot)).expect("snapshot parses");

    assert_eq!(input.scores.value(Criterion::Noise), 10.0);
    assert_eq!(input.scores.value(Criterion::Safety), 6.5);
}

#[test]
fn malformed_snapshot_reports_json_error() {
    let error = load_snapshot_from_reader(Cursor::new("{\"scores\": {\"bogus\": 3}}"))
        .expect_err("unknown criterion rejected");

    match error {
        SnapshotError::Json(_) => {}
        other => panic!("expected json error, got {other:?}"),
    }
}

#[test]
fn missing_snapshot_file_reports_io_error() {
    let error =
        load_snapshot_from_path("./does-not-exist.json").expect_err("expected io error");

    match error {
        SnapshotError::Io(_) => {}
        other => panic!("expected io error, got {other:?}"),
    }
}
