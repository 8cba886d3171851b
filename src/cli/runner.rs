use std::io::{self, Write};

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use parserelease::{
    INSUFFICIENT_ARGUMENTS, OutputParams, load_params, parse_to_json, process_batch, render_error,
};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Config file parameters (if any) with command line flags layered on top.
fn resolve_params(args: &CliArgs) -> Result<OutputParams, AppError> {
    let flags = args.flag_params();
    let Some(path) = args.config.as_deref() else {
        return Ok(flags);
    };
    if !path.exists() {
        return Err(AppError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(load_params(path)?.merge(flags))
}

/// The JSON document printed for a single invocation.
fn render_single(args: &CliArgs, params: &OutputParams) -> Result<String, AppError> {
    let document = match args.inputs() {
        Some((release, section)) => {
            debug!(release, section, ignored = args.rest.len(), "parsing release");
            parse_to_json(release, section, params)?
        }
        None => render_error(INSUFFICIENT_ARGUMENTS, params)?,
    };
    Ok(document)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        init_logging();
    }

    let params = resolve_params(&args)?;

    if args.batch {
        info!("Starting batch processing from stdin");
        let report = process_batch(io::stdin().lock(), io::stdout().lock(), &params)?;
        info!("Batch processing complete!");
        info!("Parsed: {}", report.parsed);
        info!("Insufficient: {}", report.insufficient);
        info!("Skipped: {}", report.skipped);
        return Ok(());
    }

    let document = render_single(&args, &params)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{document}")?;
    stdout.flush()?;
    Ok(())
}
