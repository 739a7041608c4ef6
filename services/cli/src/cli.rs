use crate::demo::{
    run_appraisal, run_area, run_criteria, run_demo, run_template, AppraiseArgs, AreaArgs,
    DemoArgs,
};
use clap::{Parser, Subcommand};
use flash_appraisal::config::AppConfig;
use flash_appraisal::error::AppError;
use flash_appraisal::telemetry;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "Flash Appraisal",
    about = "Score a property on 25 criteria and estimate its market value from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Appraise a form snapshot stored as JSON
    Appraise(AppraiseArgs),
    /// Derive the lot area from edge measurements
    Area(AreaArgs),
    /// Appraise a built-in sample property (default command)
    Demo(DemoArgs),
    /// Print an empty form snapshot to fill in
    Template,
    /// List the scored criteria with their snapshot keys and slider guidance
    Criteria,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));
    debug!(?config.environment, ?command, "dispatching command");

    match command {
        Command::Appraise(args) => run_appraisal(args, &config),
        Command::Area(args) => {
            run_area(args);
            Ok(())
        }
        Command::Demo(args) => run_demo(args, &config),
        Command::Template => run_template(&config),
        Command::Criteria => run_criteria(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::OutputFormat;

    #[test]
    fn appraise_accepts_format_and_overrides() {
        let cli = Cli::try_parse_from([
            "flash-appraisal",
            "appraise",
            "--input",
            "snapshot.json",
            "--format",
            "json",
            "--current-year",
            "2030",
            "--sensitivity",
            "35",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Appraise(args)) => {
                assert_eq!(args.format, OutputFormat::Json);
                assert_eq!(args.current_year, Some(2030));
                assert_eq!(args.sensitivity, Some(35.0));
                assert!(!args.breakdown);
            }
            other => panic!("expected appraise command, got {other:?}"),
        }
    }

    #[test]
    fn sensitivity_flag_outside_slider_bounds_is_rejected() {
        let result = Cli::try_parse_from([
            "flash-appraisal",
            "appraise",
            "--input",
            "snapshot.json",
            "--sensitivity",
            "80",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn area_accepts_regular_or_irregular_edges() {
        let regular = Cli::try_parse_from([
            "flash-appraisal",
            "area",
            "--front",
            "10,00",
            "--lateral",
            "20,00",
        ])
        .expect("regular edges parse");
        match regular.command {
            Some(Command::Area(args)) => {
                assert_eq!(args.front, 10.0);
                assert_eq!(args.lateral, Some(20.0));
            }
            other => panic!("expected area command, got {other:?}"),
        }

        let irregular = Cli::try_parse_from([
            "flash-appraisal",
            "area",
            "--front",
            "10",
            "--back",
            "14",
            "--left",
            "8",
            "--right",
            "12",
        ]);
        assert!(irregular.is_ok());

        let mixed = Cli::try_parse_from([
            "flash-appraisal",
            "area",
            "--front",
            "10",
            "--lateral",
            "20",
            "--back",
            "14",
        ]);
        assert!(mixed.is_err());

        let missing = Cli::try_parse_from(["flash-appraisal", "area", "--front", "10"]);
        assert!(missing.is_err());
    }

    #[test]
    fn criteria_subcommand_takes_no_arguments() {
        let cli = Cli::try_parse_from(["flash-appraisal", "criteria"]).expect("criteria parses");
        assert!(matches!(cli.command, Some(Command::Criteria)));
    }

    #[test]
    fn no_subcommand_leaves_demo_as_default() {
        let cli = Cli::try_parse_from(["flash-appraisal"]).expect("empty invocation parses");
        assert!(cli.command.is_none());
    }
}
