use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use collateral_core::config::AppConfig;
use collateral_core::types::OverrideRecord;
use collateral_refdata::loaders::load_reference_data;
use collateral_refdata::{normalise_lga_name, normalise_suburb_name};
use collateral_risk::metrics::EngineMetrics;
use collateral_risk::{AssessmentEngine, AssessmentSession, PropertyInput};

#[derive(Parser)]
#[command(name = "colrisk", version, about = "Collateral risk scoring")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
struct PropertyArgs {
    #[arg(long, default_value = "")]
    address: String,
    #[arg(long)]
    suburb: String,
    #[arg(long, default_value = "NSW")]
    state: String,
    #[arg(long, default_value = "")]
    postcode: String,
    #[arg(long, default_value = "")]
    zoning: String,
    #[arg(long, default_value = "")]
    lga: String,
    #[arg(long, default_value = "")]
    marketability: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a neighbourhood assessment and print it as JSON.
    Assess {
        #[arg(short, long, default_value = "config/colrisk.toml")]
        config: String,
        #[command(flatten)]
        property: PropertyArgs,
    },
    /// Assess, then apply a manual override and print the reconciled view.
    Override {
        #[arg(short, long, default_value = "config/colrisk.toml")]
        config: String,
        #[command(flatten)]
        property: PropertyArgs,
        #[arg(long)]
        component: String,
        #[arg(long)]
        adjusted_score: f64,
        #[arg(long)]
        justification: String,
        #[arg(long, default_value = "Policy Warning")]
        trigger: String,
    },
    /// Normalize a suburb or LGA name and print the matched rows.
    Lookup {
        #[arg(short, long, default_value = "config/colrisk.toml")]
        config: String,
        #[arg(long)]
        suburb: Option<String>,
        #[arg(long)]
        lga: Option<String>,
    },
    PrintConfig {
        #[arg(short, long, default_value = "config/colrisk.toml")]
        config: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Assess { config, property } => {
            let cfg = AppConfig::load(&config)?;
            init_tracing(&cfg.observability.log_level);
            let engine = build_engine(&cfg)?;
            let metrics = EngineMetrics::new()?;
            let assessment = engine.assess(&property.clone().into_input())?;
            metrics.inc_assessments();
            metrics.inc_lookup_misses_by(u64::from(assessment.lookup_misses));
            println!("{}", serde_json::to_string_pretty(&assessment)?);
            if cfg.observability.metrics_enabled {
                eprintln!("{}", metrics.gather());
            }
        }
        Commands::Override {
            config,
            property,
            component,
            adjusted_score,
            justification,
            trigger,
        } => {
            let cfg = AppConfig::load(&config)?;
            init_tracing(&cfg.observability.log_level);
            let engine = build_engine(&cfg)?;
            let metrics = EngineMetrics::new()?;
            let assessment = engine.assess(&property.clone().into_input())?;
            metrics.inc_assessments();
            metrics.inc_lookup_misses_by(u64::from(assessment.lookup_misses));

            let original_score = assessment
                .components
                .get(&component)
                .and_then(|result| result.score)
                .unwrap_or(0.0);
            let mut session = AssessmentSession::new(assessment);
            session.apply_override(OverrideRecord {
                component,
                original_score,
                adjusted_score,
                justification,
                trigger,
            })?;
            metrics.inc_overrides();
            println!("{}", serde_json::to_string_pretty(session.current())?);
            if cfg.observability.metrics_enabled {
                eprintln!("{}", metrics.gather());
            }
        }
        Commands::Lookup {
            config,
            suburb,
            lga,
        } => {
            let cfg = AppConfig::load(&config)?;
            init_tracing(&cfg.observability.log_level);
            let refdata = load_reference_data(&cfg.data)?;
            if let Some(suburb) = suburb {
                let key = normalise_suburb_name(&suburb);
                println!("suburb key: {key}");
                match refdata.find_crime(&key) {
                    Some(row) => println!(
                        "crime: {} ({} offences, p{:.0})",
                        row.suburb, row.crime_12m, row.crime_percentile
                    ),
                    None => println!("crime: not found"),
                }
                match refdata.find_seifa(&key) {
                    Some(row) => println!(
                        "seifa: IRSD {:?}, IRSAD {:?}",
                        row.irsd_decile, row.irsad_decile
                    ),
                    None => println!("seifa: not found"),
                }
            }
            if let Some(lga) = lga {
                let key = normalise_lga_name(&lga);
                println!("lga key: {key}");
                match refdata.find_lga(&key) {
                    Some(row) => {
                        println!("lga: {} (IRSAD decile {})", row.lga_name, row.irsad_decile)
                    }
                    None => println!("lga: not found"),
                }
            }
        }
        Commands::PrintConfig { config } => {
            let cfg = AppConfig::load(&config)?;
            init_tracing(&cfg.observability.log_level);
            let json = serde_json::to_string_pretty(&cfg)?;
            println!("{json}");
        }
    }

    info!("done");
    Ok(())
}

impl PropertyArgs {
    fn into_input(self) -> PropertyInput {
        PropertyInput {
            address: self.address,
            suburb: self.suburb,
            state: self.state,
            postcode: self.postcode,
            zoning: self.zoning,
            lga: self.lga,
            marketability: self.marketability,
        }
    }
}

fn build_engine(cfg: &AppConfig) -> Result<AssessmentEngine> {
    let refdata = load_reference_data(&cfg.data)?;
    Ok(AssessmentEngine::new(refdata).with_composite_weights(cfg.composite.weights.clone()))
}

fn init_tracing(log_level: &str) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(value) => EnvFilter::try_new(value).unwrap_or_else(|_| EnvFilter::new("info")),
        Err(_) => EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
