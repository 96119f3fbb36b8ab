//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "lintrag")]
#[command(about = "Render the Lintrag landing page to static HTML")]
#[command(version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the page to an HTML file
    Render(RenderArgs),
    /// Print the page copy (segments, features, contact) as JSON
    Content {
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Output file, or a directory to write index.html into
    #[arg(short, long, default_value = "dist/index.html")]
    pub out: PathBuf,

    /// JSON render config; flags below override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Prefix for image URLs (e.g. a CDN origin)
    #[arg(long)]
    pub asset_base: Option<String>,

    /// Link this stylesheet instead of inlining the built-in CSS
    #[arg(long)]
    pub stylesheet: Option<String>,

    /// Document title
    #[arg(long)]
    pub title: Option<String>,

    /// Seed a form field, e.g. --prefill name="Jane Doe" (repeatable)
    #[arg(long, value_name = "FIELD=VALUE")]
    pub prefill: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn prefill_is_repeatable() {
        let cli = Cli::try_parse_from([
            "lintrag",
            "render",
            "--prefill",
            "name=Jane",
            "--prefill",
            "org=Acme",
        ])
        .unwrap();

        match cli.command {
            Command::Render(args) => {
                assert_eq!(args.prefill, vec!["name=Jane", "org=Acme"]);
                assert_eq!(args.out, PathBuf::from("dist/index.html"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
