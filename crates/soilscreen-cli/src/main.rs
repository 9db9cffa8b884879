use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Arg, ArgMatches, Command, ValueHint};
use log::LevelFilter;

use soilscreen_classifiers::config::{load_service_config, ServiceConfig};
use soilscreen_classifiers::models::artifact::load_artifact;
use soilscreen_classifiers::predictor::PredictionService;
use soilscreen_classifiers::sample::SampleReading;
use soilscreen_cli::run::batch::run_batch;
use soilscreen_cli::run::single::run_single;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or(
            "SOILSCREEN_LOG",
            "error,soilscreen_classifiers=info,soilscreen_cli=info",
        ))
        .init();

    let matches = Command::new("soilscreen")
        .version(clap::crate_version!())
        .about("\u{1F331} SoilScreen - soil contamination prediction from sample readings")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            artifact_args(Command::new("predict"))
                .about("Predict contamination for a single sample reading")
                .args(reading_args()),
        )
        .subcommand(
            artifact_args(Command::new("batch"))
                .about("Predict contamination for every row of a samples CSV")
                .arg(
                    Arg::new("input")
                        .short('i')
                        .long("input")
                        .help("Path to a headered CSV of sample readings")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Path the predictions CSV will be written to")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("predict", sub)) => {
            let service = build_service(sub)?;
            let reading = reading_from_matches(sub);
            let prediction = run_single(&service, &reading)?;
            println!("{}", prediction.message);
            Ok(())
        }
        Some(("batch", sub)) => {
            let service = build_service(sub)?;
            let input: &PathBuf = sub.get_one("input").unwrap();
            let output: &PathBuf = sub.get_one("output").unwrap();
            let rows = run_batch(&service, input, output)?;
            println!("Wrote {} predictions to {}", rows, output.display());
            Ok(())
        }
        _ => unreachable!(),
    }
}

/// Flags shared by every subcommand that needs the loaded artifact.
fn artifact_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to a JSON serving configuration file")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("model")
                .short('m')
                .long("model")
                .help("Path to the classifier artifact. Overrides the config file.")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
}

/// One value flag per measured feature, in schema order.
fn reading_args() -> Vec<Arg> {
    [
        ("sand", "Sand %"),
        ("clay", "Clay %"),
        ("silt", "Silt %"),
        ("ph", "pH"),
        ("ec", "Electrical conductivity (mS/cm)"),
        ("om", "Organic matter %"),
        ("caco3", "Calcium carbonate %"),
        ("nitrate", "Nitrate nitrogen (N_NO3 ppm)"),
        ("phosphorus", "Phosphorus (P ppm)"),
        ("potassium", "Potassium (K ppm)"),
        ("magnesium", "Magnesium (Mg ppm)"),
        ("iron", "Iron (Fe ppm)"),
    ]
    .into_iter()
    .map(|(name, help)| {
        Arg::new(name)
            .long(name)
            .help(help)
            .value_parser(clap::value_parser!(f32))
    })
    .collect()
}

/// Resolve configuration, load the artifact, and build the service.
///
/// Artifact failures are fatal here, before any prediction is attempted.
fn build_service(matches: &ArgMatches) -> Result<PredictionService> {
    let mut config = if let Some(path) = matches.get_one::<PathBuf>("config") {
        load_service_config(path)?
    } else {
        ServiceConfig::default()
    };
    if let Some(model) = matches.get_one::<PathBuf>("model") {
        config.artifact_path = model.clone();
    }
    let artifact = load_artifact(&config.artifact_path, config.threshold)?;
    Ok(PredictionService::new(Arc::new(artifact)))
}

fn reading_from_matches(matches: &ArgMatches) -> SampleReading {
    let value = |name: &str| matches.get_one::<f32>(name).copied();
    SampleReading {
        sand: value("sand"),
        clay: value("clay"),
        silt: value("silt"),
        ph: value("ph"),
        ec: value("ec"),
        organic_matter: value("om"),
        caco3: value("caco3"),
        nitrate: value("nitrate"),
        phosphorus: value("phosphorus"),
        potassium: value("potassium"),
        magnesium: value("magnesium"),
        iron: value("iron"),
    }
}
