//! Render the features section to a static HTML page.
//!
//! Run with:
//!
//! ```text
//! cargo run -p features-section --example render_static -- --overrides content.json --visible
//! cargo run -p features-section --example render_static -- --print-defaults > content.json
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use features_section::{ContentOverrides, FeatureContent, render_document};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Render the robotics features section to static HTML")]
struct Args {
    /// Flat JSON overrides, e.g. {"feature3Title": "Custom Title"}
    #[arg(long)]
    overrides: Option<PathBuf>,

    /// Render the settled (already scrolled into view) state
    #[arg(long)]
    visible: bool,

    /// Output file
    #[arg(long, default_value = "features.html")]
    out: PathBuf,

    /// Print every field with its default value as an overrides template and exit
    #[arg(long)]
    print_defaults: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .init();

    if args.print_defaults {
        let template = ContentOverrides::from(&FeatureContent::default());
        println!("{}", serde_json::to_string_pretty(&template)?);
        return Ok(());
    }

    let overrides = match &args.overrides {
        Some(path) => ContentOverrides::from_json_file(path)?,
        None => ContentOverrides::default(),
    };

    let html = render_document(&overrides, args.visible);
    std::fs::write(&args.out, &html)
        .with_context(|| format!("failed to write {}", args.out.display()))?;

    info!(
        path = %args.out.display(),
        bytes = html.len(),
        overridden = overrides.len(),
        "features page written"
    );
    Ok(())
}
