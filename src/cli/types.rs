use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::geometry::{BoundingBox, LatLngBounds};

#[derive(Debug, Parser)]
#[command(
    name = "imagery",
    version,
    about = "Fetch satellite imagery for a bounding box from a process API"
)]
pub(super) struct Cli {
    /// YAML or JSON configuration file. Credentials may also come from
    /// IMAGERY_CLIENT_ID / IMAGERY_CLIENT_SECRET.
    #[arg(long, global = true)]
    pub(super) config: Option<PathBuf>,

    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub(super) verbose: u8,

    #[command(subcommand)]
    pub(super) command: Commands,
}

#[derive(Debug, Subcommand)]
pub(super) enum Commands {
    /// Authenticates, submits the bounding box and prints the image url.
    Submit {
        /// minLng,minLat,maxLng,maxLat in any corner order.
        #[arg(long, allow_hyphen_values = true)]
        bbox: LatLngBounds,
        #[arg(long)]
        evalscript: Option<PathBuf>,
        /// How long to wait for the token before submitting. 0 submits at once.
        #[arg(long, default_value_t = 30)]
        token_wait_secs: u64,
    },
    Token,
    /// Prints the request body without sending it.
    Body {
        #[arg(long, allow_hyphen_values = true)]
        bbox: LatLngBounds,
        #[arg(long)]
        evalscript: Option<PathBuf>,
    },
    Widget,
    Config {
        /// Writes the resolved configuration (without the secret) to this file.
        #[arg(long)]
        write: Option<PathBuf>,
    },
}

#[derive(Debug, Serialize)]
pub(super) struct SubmitReport {
    pub(super) status: &'static str,
    pub(super) image_url: String,
    pub(super) bbox: BoundingBox,
}

#[derive(Debug, Serialize)]
pub(super) struct TokenInfo {
    pub(super) token_url: String,
    pub(super) token_preview: String,
    pub(super) expires_in: Option<u64>,
}
