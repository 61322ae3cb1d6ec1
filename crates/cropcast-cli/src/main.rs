//! Crop-yield advisory CLI.
//!
//! Provides the `cropcast` binary with subcommands for requesting a
//! prediction from the hosted model and for listing the input catalogs.
//!
//! `predict` goes through the same `cropcast_gateway::InferenceClient`
//! pipeline as the HTTP server endpoint, ensuring identical prediction
//! behavior from both entry points. Upstream settings come from the same
//! environment variables the server reads.

mod present;

use std::process;

use clap::{Parser, Subcommand};

use cropcast_core::catalog::{crops_for_season, DISTRICTS, SEASONS};
use cropcast_core::{FormSession, NumericField, RawPredictionRequest, SubPlot};
use cropcast_gateway::{GatewayConfig, InferenceClient};

/// Crop-yield advisory tools.
#[derive(Parser)]
#[command(name = "cropcast", about = "Crop-yield advisory tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Request a yield prediction from the hosted model.
    Predict {
        /// District the farm is in.
        #[arg(short, long)]
        district: String,

        /// Crop to predict for.
        #[arg(short, long)]
        crop: String,

        /// Cropping season.
        #[arg(short, long)]
        season: String,

        /// Planting year.
        #[arg(short, long)]
        year: String,

        /// Cultivation area in hectares.
        #[arg(short, long)]
        area: String,

        /// Sub-plot division, as CROP:AREA (repeatable). Display only;
        /// sub-plots are not sent upstream.
        #[arg(long = "plot", value_name = "CROP:AREA")]
        plots: Vec<String>,
    },

    /// List the known districts and seasons, or one season's crops.
    Catalog {
        /// Show only the crops for this season.
        #[arg(long)]
        season: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Predict {
            district,
            crop,
            season,
            year,
            area,
            plots,
        } => run_predict(district, crop, season, year, area, &plots).await,
        Commands::Catalog { season } => run_catalog(season.as_deref()),
    };

    process::exit(exit_code);
}

async fn run_predict(
    district: String,
    crop: String,
    season: String,
    year: String,
    area: String,
    plots: &[String],
) -> i32 {
    let sub_plots = match parse_plots(plots) {
        Ok(sub_plots) => sub_plots,
        Err(message) => {
            eprintln!("error: {}", message);
            return 2;
        }
    };

    let raw = RawPredictionRequest {
        district: Some(district),
        crop: Some(crop),
        season: Some(season),
        year: Some(NumericField::Text(year)),
        area: Some(NumericField::Text(area)),
    };

    let mut session = FormSession::new();
    let request = match session.begin(&raw) {
        Ok(request) => request,
        Err(err) => {
            eprintln!("error: {}", err);
            return 2;
        }
    };

    let client = match InferenceClient::new(GatewayConfig::from_env()) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("error: {}", err);
            return 1;
        }
    };

    match client.predict_yield(&request).await {
        Ok(value) => {
            session.complete(Ok(value));
            let presentation = present::present(&mut rand::thread_rng(), &request, value);

            println!("Predicted yield: {} tons per hectare", presentation.yield_text);
            println!(
                "Comparative yield: +{}% above average",
                presentation.comparative_text
            );
            println!("Total area: {} hectares", request.area);
            println!("{}", presentation.advice);

            if !sub_plots.is_empty() {
                println!("Sub-plots (display only):");
                for plot in &sub_plots {
                    println!("  {}: {} ha", plot.crop, plot.area);
                }
            }
            0
        }
        Err(err) => {
            session.complete(Err(err.to_string()));
            if let Some(message) = session.take_error() {
                eprintln!("error: {}", message);
            }
            1
        }
    }
}

fn run_catalog(season: Option<&str>) -> i32 {
    match season {
        Some(name) => match crops_for_season(name) {
            Some(crops) => {
                for crop in crops {
                    println!("{}", crop);
                }
                0
            }
            None => {
                eprintln!(
                    "error: unknown season '{}' (expected one of: {})",
                    name,
                    SEASONS.join(", ")
                );
                2
            }
        },
        None => {
            println!("Districts:");
            for district in DISTRICTS {
                println!("  {}", district);
            }
            println!("Seasons:");
            for season in SEASONS {
                println!("  {}", season);
            }
            0
        }
    }
}

/// Parses repeated `--plot CROP:AREA` arguments into sub-plots.
fn parse_plots(plots: &[String]) -> Result<Vec<SubPlot>, String> {
    plots
        .iter()
        .map(|entry| {
            let (crop, area) = entry
                .split_once(':')
                .ok_or_else(|| format!("malformed --plot '{}', expected CROP:AREA", entry))?;
            let area: f64 = area
                .trim()
                .parse()
                .map_err(|_| format!("malformed --plot '{}', area is not a number", entry))?;
            if crop.trim().is_empty() || !area.is_finite() || area <= 0.0 {
                return Err(format!(
                    "malformed --plot '{}', need a crop name and a positive area",
                    entry
                ));
            }
            Ok(SubPlot {
                crop: crop.trim().to_string(),
                area,
            })
        })
        .collect()
}
