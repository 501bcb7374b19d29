//! Command-line intake front end.
//!
//! Wraps the pure validator core in the thin surface the intake service
//! exposes: read an MTB case file, validate it against the loaded catalogs
//! and turn the severity profile of the report into an intake decision.

#![deny(unsafe_code)]

mod decision;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use mtb_catalogs::CatalogSet;
use mtb_model::MtbFile;
use mtb_validate::{Catalogs, Validator};

use crate::decision::IntakeDecision;

#[derive(Debug, Parser)]
#[command(name = "mtb")]
#[command(about = "Validate Molecular Tumor Board case files")]
#[command(long_about = "Validate Molecular Tumor Board case files.\n\n\
    Exit codes for `check`: 0 = file accepted (report stored when issues \
    were found), 2 = file rejected due to fatal issues.")]
struct Cli {
    /// Path to the catalog directory (icd10gm.csv, icdo3-*.csv, atc.csv).
    #[arg(long, default_value = "catalogs")]
    catalogs: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate one MTB case file.
    Check {
        /// Input JSON file.
        #[arg(value_name = "PATH")]
        input: PathBuf,

        /// Write the data-quality report as JSON to this path. Use '-' for
        /// stdout.
        #[arg(long, value_name = "PATH")]
        json: Option<String>,
    },

    /// Load the catalogs and print a summary.
    Catalogs,
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Check { input, json } => {
            let catalogs = CatalogSet::load(&cli.catalogs)?;
            let text = std::fs::read_to_string(&input)?;
            let file: MtbFile = serde_json::from_str(&text)?;
            let patient_id = file.patient.id.clone();

            let validator = Validator::new(Catalogs {
                icd10: &catalogs.icd10,
                icd_o3: &catalogs.icd_o3,
                medications: &catalogs.atc,
            });

            match validator.check(file) {
                Ok(_) => {
                    tracing::info!(patient = %patient_id, "case file accepted");
                    println!("{patient_id}: accepted (no issues)");
                    Ok(ExitCode::SUCCESS)
                }
                Err(report) => {
                    if let Some(json) = json {
                        let out = serde_json::to_string_pretty(&report)?;
                        if json == "-" {
                            println!("{out}");
                        } else {
                            std::fs::write(&json, out)?;
                            println!("wrote {json}");
                        }
                    }

                    let decision = IntakeDecision::from_report(&report);
                    println!(
                        "{patient_id}: {decision} (infos={}, warnings={}, errors={}, fatals={})",
                        report.count_of(mtb_model::Severity::Info),
                        report.count_of(mtb_model::Severity::Warning),
                        report.count_of(mtb_model::Severity::Error),
                        report.count_of(mtb_model::Severity::Fatal),
                    );

                    match decision {
                        IntakeDecision::Rejected => {
                            tracing::error!(patient = %patient_id, "case file rejected");
                            Ok(ExitCode::from(2))
                        }
                        _ => Ok(ExitCode::SUCCESS),
                    }
                }
            }
        }
        Command::Catalogs => {
            let catalogs = CatalogSet::load(&cli.catalogs)?;
            println!("ICD-10-GM:");
            for version in catalogs.icd10.versions() {
                let count = catalogs.icd10.codes(version).map_or(0, |codes| codes.len());
                println!("  {version}: {count} codes");
            }
            println!("ICD-O-3:");
            for version in catalogs.icd_o3.versions() {
                let topography = catalogs
                    .icd_o3
                    .topography_codes(version)
                    .map_or(0, |codes| codes.len());
                let morphology = catalogs
                    .icd_o3
                    .morphology_codes(version)
                    .map_or(0, |codes| codes.len());
                println!("  {version}: {topography} topography, {morphology} morphology codes");
            }
            println!("ATC: {} codes", catalogs.atc.codes().len());
            Ok(ExitCode::SUCCESS)
        }
    }
}
