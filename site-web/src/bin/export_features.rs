//! Export the homepage features section as static HTML
//!
//! Usage: cargo run --bin export_features -- --out build/index.html

use clap::Parser;
use site_web::error::ExportError;
use site_web::export::{render_features_fragment, render_homepage, write_export};
use std::io::Write;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "export_features")]
struct Args {
    /// Output file. Writes to stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Emit only the features section instead of a full document.
    #[arg(long)]
    fragment: bool,

    /// Document title.
    #[arg(long, default_value = "Homepage")]
    title: String,
}

fn configure_logging() {
    // stdout may carry the exported HTML
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_line_number(true)
        .with_target(false)
        .with_file(true)
        .init();
}

fn run(args: &Args) -> Result<(), ExportError> {
    let html = if args.fragment {
        render_features_fragment()
    } else {
        render_homepage(&args.title)
    };

    match &args.out {
        Some(path) => write_export(path, &html),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

fn main() {
    configure_logging();
    let args = Args::parse();

    info!("Exporting homepage features");
    if let Err(e) = run(&args) {
        error!("{e}");
        std::process::exit(1);
    }
}
