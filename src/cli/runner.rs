use std::fs;
use std::path::Path;
use std::time::Duration;

use clap::Parser;
use serde_json::json;
use tracing::warn;

use crate::config::{AppConfig, load_config, save_config};
use crate::geometry::{BoundingBox, DrawnRectangle, LatLngBounds};
use crate::logging::init_logging;
use crate::presenter::AlertLog;
use crate::runtime::{AppContext, AppError, Result, Session, SubmitOutcome};

use super::types::{Cli, Commands, SubmitReport, TokenInfo};

pub fn run_cli() -> std::result::Result<(), String> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(cli).map_err(|error| error.to_string())
}

fn run(cli: Cli) -> Result<()> {
    let mut config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Submit {
            bbox,
            evalscript,
            token_wait_secs,
        } => {
            apply_evalscript(&mut config, evalscript.as_deref())?;
            let report = submit(AppContext::new(config), bbox, token_wait_secs)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Token => {
            let app = AppContext::new(config);
            let client = app.token_client()?;
            let token = client.request_token()?;
            let info = TokenInfo {
                token_url: client.token_url().to_string(),
                token_preview: token.preview(),
                expires_in: token.expires_in(),
            };
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
        Commands::Body { bbox, evalscript } => {
            apply_evalscript(&mut config, evalscript.as_deref())?;
            let app = AppContext::new(config);
            let mut session = Session::new(&app, AlertLog::new());
            session.on_overlay_complete(Box::new(DrawnRectangle::from(bbox)));
            if let Some(body) = session.create_api_request_body() {
                println!("{}", serde_json::to_string_pretty(&body)?);
            }
        }
        Commands::Widget => {
            let app = AppContext::new(config);
            println!("{}", serde_json::to_string_pretty(app.widget_config())?);
        }
        Commands::Config { write } => match write {
            Some(path) => {
                save_config(&path, &config)?;
                println!("{}", json!({"status": "ok", "output": path}));
            }
            None => println!("{}", serde_json::to_string_pretty(&config)?),
        },
    }

    Ok(())
}

fn apply_evalscript(config: &mut AppConfig, path: Option<&Path>) -> Result<()> {
    if let Some(path) = path {
        config.imagery.params.evalscript = fs::read_to_string(path)?;
        config.validate()?;
    }
    Ok(())
}

fn submit(app: AppContext, bbox: LatLngBounds, token_wait_secs: u64) -> Result<SubmitReport> {
    let mut session = Session::start(&app, AlertLog::new());
    let captured = session.on_overlay_complete(Box::new(DrawnRectangle::from(bbox)));

    if token_wait_secs > 0 && !session.wait_for_token(Duration::from_secs(token_wait_secs)) {
        warn!(
            token_wait_secs,
            reason = session.token_failure().unwrap_or("still pending"),
            "no access token before submitting"
        );
    }

    let outcome = session.submit_coordinates();
    submit_report(outcome, session.notifier(), captured)
}

/// Alerts are not printed as they happen; the last one becomes the single
/// error message the binary reports.
pub(super) fn submit_report(
    outcome: SubmitOutcome,
    alerts: &AlertLog,
    bbox: BoundingBox,
) -> Result<SubmitReport> {
    match outcome {
        SubmitOutcome::Succeeded { image_url } => Ok(SubmitReport {
            status: "ok",
            image_url,
            bbox,
        }),
        SubmitOutcome::Rejected(rejection) => Err(AppError::Submission(
            alerts
                .last()
                .unwrap_or_else(|| rejection.message().to_string()),
        )),
        SubmitOutcome::Failed(error) => Err(alerts
            .last()
            .map(AppError::Submission)
            .unwrap_or_else(|| error.into())),
    }
}
