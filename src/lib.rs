pub mod auth;
pub mod cli;
pub mod config;
pub mod geometry;
pub mod imagery;
pub mod logging;
pub mod presenter;
pub mod runtime;
pub mod transport;
pub mod widget;

pub fn run_cli() -> Result<(), String> {
    cli::run_cli()
}
