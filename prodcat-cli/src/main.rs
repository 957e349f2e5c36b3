//! Prodcat CLI - product category and manufacturer prediction from the command line.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use prodcat::{OpenAiClient, Prediction, Predictor, Taxonomy};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "prodcat")]
#[command(about = "Predict a product's category, subcategory, and manufacturers", long_about = None)]
#[command(version)]
struct Cli {
    /// Product name to classify (prompted on stdin when omitted)
    #[arg(value_name = "PRODUCT")]
    product: Option<String>,

    /// Path to the taxonomy JSON file
    #[arg(long, value_name = "FILE", default_value = "data.json")]
    taxonomy: PathBuf,

    /// Completion model to use
    #[arg(long, value_name = "MODEL")]
    model: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "human")]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let exit_code = run(cli).await;
    process::exit(exit_code);
}

async fn run(cli: Cli) -> i32 {
    let client = match OpenAiClient::from_env() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let client = match cli.model {
        Some(model) => client.with_model(model),
        None => client,
    };

    let taxonomy = Taxonomy::load(&cli.taxonomy);
    if taxonomy.is_empty() {
        tracing::warn!("No taxonomy available; category candidates will be empty");
    }

    let product_name = match cli.product {
        Some(name) => name,
        None => match read_product_name() {
            Ok(name) => name,
            Err(e) => {
                eprintln!("Error: {}", e);
                return 1;
            }
        },
    };

    let predictor = Predictor::new(&client, &taxonomy);
    match predictor.predict(&product_name).await {
        Ok(prediction) => {
            output_prediction(&prediction, &cli.format);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn read_product_name() -> io::Result<String> {
    print!("Enter the product name: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn output_prediction(prediction: &Prediction, format: &OutputFormat) {
    match format {
        OutputFormat::Human => {
            println!("Predicted Main Category: {}", prediction.main_category);
            println!("Predicted Subcategory: {}", prediction.subcategory);
            println!("Predicted Manufacturers: {}", prediction.manufacturers_list());
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(prediction).unwrap());
        }
    }
}

fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("prodcat=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr)
                .compact(),
        )
        .init();
}
