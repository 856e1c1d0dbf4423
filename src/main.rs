//! Entry point for the payment and theaters services.
//!
//! # Usage
//!
//! ```bash
//! # Payment recorder on PAYMENT_LISTEN (default localhost:2900)
//! cargo run -- payment
//!
//! # Ticket/movie/theater queries on THEATERS_LISTEN (default localhost:2901)
//! CATALOG_PATH=catalog.json cargo run -- theaters
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use movie_aggregator::{config, server};

/// Movie aggregator microservices.
#[derive(Parser)]
#[command(name = "movie-aggregator")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    service: Service,
}

/// Service to run.
#[derive(Subcommand)]
enum Service {
    /// Payment recorder (`POST /payment`)
    Payment,
    /// Ticket, movie and theater queries (`GET /tickets`, `/movies`, `/theaters`)
    Theaters,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    server::init_tracing(&config.log_level, &config.log_format);
    config.print_summary();

    match cli.service {
        Service::Payment => server::run_payment(&config).await,
        Service::Theaters => server::run_theaters(&config).await,
    }
}
