use crate::infra::{parse_edge, parse_sensitivity, sample_input, template_input, OutputFormat};
use clap::Args;
use flash_appraisal::appraisal::{
    appraise, derive_area, format_locale_grouped, format_locale_number, load_snapshot_from_path,
    Appraisal, Category, LotEdges, LotShape,
};
use flash_appraisal::config::AppConfig;
use flash_appraisal::error::AppError;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Args, Debug)]
pub(crate) struct AppraiseArgs {
    /// JSON form snapshot (see the `template` command)
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Output format for the appraisal
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
    /// Year used for the construction age band (defaults to APP_CURRENT_YEAR or today)
    #[arg(long)]
    pub(crate) current_year: Option<i32>,
    /// Override the snapshot's market sensitivity (5-50)
    #[arg(long, value_parser = parse_sensitivity)]
    pub(crate) sensitivity: Option<f64>,
    /// Print the calculation breakdown after the text report
    #[arg(long)]
    pub(crate) breakdown: bool,
}

#[derive(Args, Debug)]
pub(crate) struct AreaArgs {
    /// Front edge, e.g. "10,00"
    #[arg(long, value_parser = parse_edge)]
    pub(crate) front: f64,
    /// Side edge of a regular lot
    #[arg(
        long,
        value_parser = parse_edge,
        required_unless_present = "back",
        conflicts_with_all = ["back", "left", "right"]
    )]
    pub(crate) lateral: Option<f64>,
    /// Back edge of an irregular lot
    #[arg(long, value_parser = parse_edge, requires_all = ["left", "right"])]
    pub(crate) back: Option<f64>,
    /// Left edge of an irregular lot
    #[arg(long, value_parser = parse_edge, requires = "back")]
    pub(crate) left: Option<f64>,
    /// Right edge of an irregular lot
    #[arg(long, value_parser = parse_edge, requires = "back")]
    pub(crate) right: Option<f64>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Year used for the construction age band (defaults to APP_CURRENT_YEAR or today)
    #[arg(long)]
    pub(crate) current_year: Option<i32>,
    /// Market sensitivity for the sample (defaults to APP_SENSITIVITY)
    #[arg(long, value_parser = parse_sensitivity)]
    pub(crate) sensitivity: Option<f64>,
}

pub(crate) fn run_appraisal(args: AppraiseArgs, config: &AppConfig) -> Result<(), AppError> {
    let AppraiseArgs {
        input,
        format,
        current_year,
        sensitivity,
        breakdown,
    } = args;

    let mut snapshot = load_snapshot_from_path(&input)?;
    if let Some(sensitivity) = sensitivity {
        snapshot.market.sensitivity_pct = sensitivity;
    }
    if snapshot.market.sensitivity() != snapshot.market.sensitivity_pct {
        warn!(
            requested = snapshot.market.sensitivity_pct,
            applied = snapshot.market.sensitivity(),
            "snapshot sensitivity outside slider bounds"
        );
    }

    let current_year = current_year.unwrap_or(config.market.current_year);
    let appraisal = appraise(&snapshot);
    log_appraisal(&appraisal, &input);

    match format {
        OutputFormat::Text => {
            println!("{}", appraisal.report_text());
            if breakdown {
                println!("\n{}", appraisal.breakdown_text(Some(current_year)));
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&appraisal.view(Some(current_year)))?;
            println!("{json}");
        }
    }

    Ok(())
}

pub(crate) fn run_area(args: AreaArgs) {
    let (shape, edges) = lot_from_args(&args);
    match derive_area(shape, &edges) {
        Some(area) => println!(
            "Lot area: {}m² ({})",
            format_locale_number(area),
            shape.label()
        ),
        None => println!(
            "Lot area unavailable: every edge of the {} lot is required",
            shape.label()
        ),
    }
}

fn lot_from_args(args: &AreaArgs) -> (LotShape, LotEdges) {
    let shape = if args.lateral.is_some() {
        LotShape::Regular
    } else {
        LotShape::Irregular
    };
    let edges = LotEdges {
        front: args.front,
        lateral: args.lateral.unwrap_or_default(),
        back: args.back.unwrap_or_default(),
        left: args.left.unwrap_or_default(),
        right: args.right.unwrap_or_default(),
    };
    (shape, edges)
}

pub(crate) fn run_demo(args: DemoArgs, config: &AppConfig) -> Result<(), AppError> {
    let DemoArgs {
        current_year,
        sensitivity,
    } = args;

    let current_year = current_year.unwrap_or(config.market.current_year);
    let sensitivity = sensitivity.unwrap_or(config.market.sensitivity_pct);
    let input = sample_input(sensitivity);
    let appraisal = appraise(&input);
    info!(
        ?config.environment,
        final_score = appraisal.scorecard.final_score,
        "demo appraisal computed"
    );

    println!("Flash appraisal demo");
    println!(
        "Sample: {} at {} ({}), market sensitivity {}%",
        appraisal.property.property_type.label(),
        appraisal.property.address,
        appraisal.property.neighborhood,
        input.market.sensitivity()
    );

    println!("\nCategory scores");
    for category in &appraisal.scorecard.categories {
        let mean = category
            .mean
            .map(|mean| format!("{mean:.2}"))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "- {}: {}/{} rated | mean {} | weight {} | {:.2} of {} points",
            category.label,
            category.rated,
            category.total,
            mean,
            category.weight,
            category.contribution,
            category.max_contribution
        );
    }

    println!("\n{}", appraisal.report_text());
    println!("\n{}", appraisal.breakdown_text(Some(current_year)));

    let asking_price = appraisal.property.asking_price_value();
    if asking_price > 0.0 && appraisal.price.suggested > 0.0 {
        let gap_pct = (asking_price / appraisal.price.suggested - 1.0) * 100.0;
        println!(
            "\nAsking price: R$ {} ({:+.1}% against the suggested value)",
            format_locale_grouped(asking_price, 0),
            gap_pct
        );
    }

    Ok(())
}

pub(crate) fn run_template(config: &AppConfig) -> Result<(), AppError> {
    let template = template_input(config.market.sensitivity_pct);
    let json = serde_json::to_string_pretty(&template)?;
    println!("{json}");
    Ok(())
}

pub(crate) fn run_criteria() -> Result<(), AppError> {
    println!("{}", criteria_listing()?);
    Ok(())
}

/// Slider guidance per category, with the key each criterion uses in a snapshot.
fn criteria_listing() -> Result<String, serde_json::Error> {
    let mut lines = Vec::new();
    for category in Category::ordered() {
        lines.push(format!("{} (weight {})", category.label(), category.weight()));
        for criterion in category.criteria() {
            let key = serde_json::to_value(criterion)?;
            lines.push(format!(
                "- {} [{}]: {}",
                criterion.label(),
                key.as_str().unwrap_or_default(),
                criterion.description()
            ));
        }
    }
    Ok(lines.join("\n"))
}

fn log_appraisal(appraisal: &Appraisal, input: &std::path::Path) {
    info!(
        input = %input.display(),
        final_score = appraisal.scorecard.final_score,
        classification = appraisal.scorecard.classification.label(),
        touched = appraisal.scorecard.touched_count,
        suggested = appraisal.price.suggested,
        "appraisal computed"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area_args(lateral: Option<f64>, back: Option<f64>) -> AreaArgs {
        AreaArgs {
            front: 10.0,
            lateral,
            back,
            left: back.map(|_| 8.0),
            right: back.map(|_| 12.0),
        }
    }

    #[test]
    fn criteria_listing_shows_keys_and_guidance() {
        let listing = criteria_listing().expect("criteria serialize");
        let lines: Vec<&str> = listing.lines().collect();

        assert_eq!(lines.len(), 30);
        assert_eq!(lines[0], "Location (weight 2.5)");
        assert_eq!(
            lines[2],
            "- Topography [topography]: Terrain. Flat (10) vs steep slope up or down (0)."
        );
        assert!(listing.contains("- Floor plan [floor_plan]: "));
        assert!(listing.contains("- Liquidity [rental_liquidity]: "));
    }

    #[test]
    fn lateral_edge_selects_regular_lot() {
        let (shape, edges) = lot_from_args(&area_args(Some(20.0), None));
        assert_eq!(shape, LotShape::Regular);
        assert_eq!(derive_area(shape, &edges), Some(200.0));
    }

    #[test]
    fn four_edges_select_irregular_lot() {
        let (shape, edges) = lot_from_args(&area_args(None, Some(14.0)));
        assert_eq!(shape, LotShape::Irregular);
        assert_eq!(derive_area(shape, &edges), Some(120.0));
    }

    #[test]
    fn sample_appraisal_prices_the_built_area() {
        let appraisal = appraise(&sample_input(20.0));
        assert_eq!(appraisal.derived_area, Some(360.0));
        assert_eq!(appraisal.price.area, 180.0);
        assert_eq!(appraisal.price.base_value, 684_000.0);
        assert!(appraisal.price.suggested > appraisal.price.base_value);
        assert_eq!(appraisal.amenities.len(), 4);
    }
}
