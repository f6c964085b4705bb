#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the heat-map dashboard server.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "mapa_calor_server",
    about = "Suicide incident heat-map dashboard server"
)]
struct Cli {
    /// Path to the incident dataset CSV (falls back to the `MAPA_CALOR_DATA`
    /// environment variable)
    #[arg(long)]
    data: Option<PathBuf>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let cli = Cli::parse();
    let data_path = cli
        .data
        .or_else(|| std::env::var("MAPA_CALOR_DATA").ok().map(PathBuf::from))
        .expect("No dataset given: pass --data <PATH> or set MAPA_CALOR_DATA");

    mapa_calor_server::run_server(&data_path).await
}
