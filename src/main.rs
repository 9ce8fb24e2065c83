mod outline;
mod parser;
mod report;

use std::fs;

use anyhow::Context;
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "summary_outline",
    about = "Print a book outline from SUMMARY.md with chapter/section counts"
)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let _cli = Cli::parse();

    let content = fs::read_to_string("SUMMARY.md").context("reading SUMMARY.md")?;
    let outline = parser::parse_summary(&content)?;
    tracing::debug!(
        chapters = outline.chapter_count(),
        sections = outline.section_count(),
        "summary parsed"
    );

    print!("{}", report::render(&outline));
    Ok(())
}
