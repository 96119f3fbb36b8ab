//! # lintrag
//!
//! Static-site generator for the Lintrag landing page.
//!
//! ## Usage
//!
//! ```bash
//! # Render to dist/index.html
//! lintrag render
//!
//! # Serve images from a CDN and preview a filled-in form
//! lintrag render --out public/ --asset-base https://cdn.example.com \
//!     --prefill name="Jane Doe" --prefill org=Acme
//!
//! # Dump the page copy
//! lintrag content --pretty
//! ```

mod args;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use args::{Cli, Command, RenderArgs};
use lintrag_page::content::PageContent;
use lintrag_page::types::DemoForm;
use lintrag_page::{RenderConfig, render_page};

fn resolve_config(args: &RenderArgs) -> Result<RenderConfig> {
    let mut config = match &args.config {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::default(),
    };

    if let Some(base) = &args.asset_base {
        config.asset_base = base.clone();
    }
    if let Some(href) = &args.stylesheet {
        config.stylesheet = Some(href.clone());
    }
    if let Some(title) = &args.title {
        config.title = title.clone();
    }
    Ok(config)
}

fn initial_form(prefill: &[String]) -> Result<DemoForm> {
    prefill
        .iter()
        .try_fold(DemoForm::default(), |form, entry| form.with_prefill(entry))
        .context("Invalid --prefill")
}

fn output_path(out: &Path) -> PathBuf {
    if out.is_dir() {
        out.join("index.html")
    } else {
        out.to_path_buf()
    }
}

fn run_render(args: &RenderArgs) -> Result<()> {
    let config = resolve_config(args)?;
    let form = initial_form(&args.prefill)?;
    debug!(?config, prefilled = args.prefill.len(), "render settings");

    let html = render_page(&config, &form);

    let path = output_path(&args.out);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&path, &html).with_context(|| format!("Failed to write {}", path.display()))?;

    info!(path = %path.display(), bytes = html.len(), "page written");
    Ok(())
}

fn run_content(pretty: bool) -> Result<()> {
    let content = PageContent::current();
    let json = if pretty {
        serde_json::to_string_pretty(&content)
    } else {
        serde_json::to_string(&content)
    }
    .context("Failed to serialize page content")?;
    println!("{json}");
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.parse().unwrap_or_default()),
        )
        .init();

    debug!("lintrag v{}", env!("CARGO_PKG_VERSION"));

    match &cli.command {
        Command::Render(args) => run_render(args),
        Command::Content { pretty } => run_content(*pretty),
    }
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
