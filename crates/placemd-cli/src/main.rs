mod lookup;
mod output;

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use percent_encoding::percent_decode_str;
use placemd_core::AppConfig;
use placemd_places::PlacesClient;
use placemd_report::{ReportOptions, ReviewPolicy};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "placemd")]
#[command(about = "Look up a place and write its details as a markdown report")]
struct Cli {
    /// Free-text place name; percent-encoded input is decoded first.
    place_name: Option<String>,

    /// Directory the report is written to (overrides `PLACEMD_OUTPUT_DIR`).
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// How reviews are chosen and ordered.
    #[arg(long, default_value_t = ReviewPolicy::ArrivalOrder)]
    review_policy: ReviewPolicy,

    /// Print the report to stdout instead of writing a file.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.place_name.is_none() {
        Cli::command().print_help()?;
        return Ok(());
    }

    let config = placemd_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    run(&cli, &config, &mut std::io::stdout()).await
}

/// Looks the place up and writes the report, or prints it on `--dry-run`.
///
/// Outcomes the user needs to see (no match, dry-run output) go to `stdout`.
async fn run(cli: &Cli, config: &AppConfig, stdout: &mut impl Write) -> anyhow::Result<()> {
    let Some(raw_name) = cli.place_name.as_deref() else {
        return Ok(());
    };
    let place_name = decode_place_name(raw_name)?;

    let client = PlacesClient::with_base_url(
        &config.places_api_key,
        config.request_timeout_secs,
        &config.user_agent,
        &config.places_base_url,
    )?
    .with_language(&config.language_code);
    let options = ReportOptions::new(cli.review_policy, config.utc_offset_hours);

    let Some(report) = lookup::lookup_and_render(&client, &place_name, &options).await? else {
        tracing::info!(query = %place_name, "search returned no places");
        writeln!(stdout, "No results found.")?;
        return Ok(());
    };

    if cli.dry_run {
        write!(stdout, "{report}")?;
        return Ok(());
    }

    let output_dir = cli
        .output_dir
        .as_deref()
        .unwrap_or(config.output_dir.as_path());
    let path = output::write_report(output_dir, &place_name, &report)?;
    writeln!(stdout, "Report written: {}", path.display())?;
    tracing::info!(path = %path.display(), "report written");
    Ok(())
}

/// Percent-decodes the positional argument and rejects a blank result.
fn decode_place_name(raw: &str) -> anyhow::Result<String> {
    let decoded = percent_decode_str(raw)
        .decode_utf8()
        .with_context(|| format!("place name is not valid UTF-8 after decoding: {raw}"))?;
    let name = decoded.trim();
    if name.is_empty() {
        anyhow::bail!("place name must not be blank");
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests;
