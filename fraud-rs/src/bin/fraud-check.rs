//! CLI tool for scoring emails against a model
//!
//! # Usage
//!
//! ```bash
//! # Score a literal body
//! fraud-check text "Your PayPal account has been restricted..."
//!
//! # Score a .txt or .eml file, printing the full result as JSON
//! fraud-check file suspicious.eml --json
//!
//! # Run labelled regression cases
//! fraud-check batch tests/fixtures/cases.toml
//!
//! # Use a different model directory
//! fraud-check --model-dir /srv/fraud/models text "..."
//! ```

use clap::{Parser, Subcommand};
use fraud_rs::batch;
use fraud_rs::config::{Config, ModelConfig};
use fraud_rs::engine::{PredictionResult, ScoringEngine};
use fraud_rs::ingest;
use fraud_rs::logging;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fraud-check")]
#[command(about = "Score emails for fraud", long_about = None)]
struct Cli {
    /// Configuration file (model paths and logging)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding classifier.json, vectorizer.json and feature_list.txt
    #[arg(short, long, global = true)]
    model_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score an email body given on the command line
    Text {
        /// Raw email text
        body: String,
        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Score a .txt or .eml file
    File {
        /// Path to the email file
        path: PathBuf,
        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run a TOML file of labelled cases
    Batch {
        /// Path to the cases file
        cases: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(dir) = &cli.model_dir {
        config.model = ModelConfig::with_model_dir(dir);
    }

    logging::init(&config.logging);

    let engine = ScoringEngine::load(&config.model)?;

    match cli.command {
        Commands::Text { body, json } => {
            report(&engine.predict(&body), json)?;
        }
        Commands::File { path, json } => {
            let text = ingest::read_email_file(&path)?;
            report(&engine.predict(&text), json)?;
        }
        Commands::Batch { cases } => {
            let report = batch::run_file(&engine, &cases)?;

            for outcome in &report.outcomes {
                println!("{}", "=".repeat(60));
                println!("Testing: {}", outcome.name);

                match (&outcome.prediction, &outcome.error) {
                    (Some((label, confidence)), _) => {
                        println!("→ Prediction: {} ({:.2}% confidence)", label, confidence * 100.0);
                        if outcome.passed() {
                            println!("✓ Expected result matched.");
                        } else {
                            println!("✗ Expected: {}", outcome.expected);
                        }
                    }
                    (None, Some(error)) => println!("✗ ERROR: {}", error),
                    (None, None) => println!("✗ Not scored"),
                }
            }

            println!("\nSummary:");
            println!("  Passed: {}", report.passed());
            println!("  Failed: {}", report.failed());
            println!("  Total:  {}", report.total());

            if !report.all_passed() {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn report(result: &PredictionResult, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    println!("Prediction:  {} ({:.2}% confidence)", result.label, result.confidence * 100.0);
    println!("Fraud score: {:.2}%", result.fraud_score);
    println!("Safe score:  {:.2}%", result.safe_score);
    println!("Fraud reason: {}", result.fraud_reason);
    println!("Safe reason:  {}", result.safe_reason);
    println!("Suggestion:   {}", result.suggestion);

    if !result.signals.is_empty() {
        println!("\nSignals:");
        for signal in &result.signals {
            println!("  {:<10} {:<24} {:+.3}", signal.category, signal.phrase, signal.delta);
        }
    }

    Ok(())
}
