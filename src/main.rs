//! CLI entry point for batch maze generation and blind solving

use clap::Parser;
use echomaze::io::cli::{BatchRunner, Cli};

// Allow print for the summary and requested previews
#[allow(clippy::print_stdout)]
fn main() -> echomaze::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let runner = BatchRunner::new(Cli::parse());

    let preview = runner.preview()?;
    if let Some(rendering) = preview.rendering {
        println!("{rendering}\n");
    }
    if let Some(probe) = preview.probe {
        println!("{probe}\n");
    }

    let summary = runner.process()?;
    println!("{summary}");
    Ok(())
}
