//! `graymill` CLI - convert an image to grayscale.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use graymill::{Config, Pipeline};

/// Convert an image to grayscale. The output extension selects the format.
#[derive(Parser, Debug)]
#[command(name = "graymill")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input image file path.
    #[arg(short, long, value_name = "PATH")]
    input: PathBuf,

    /// Output image file path (.png, .jpg, .jpeg, .bmp, .tga).
    #[arg(short, long, value_name = "PATH")]
    output: PathBuf,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            eprintln!("Error: {}", summarize(&err));
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "graymill=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    if let Err(err) = run(&args) {
        eprintln!("Error: {err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Collapse clap's rendered message to one line, dropping usage and hints.
fn summarize(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let message = rendered.strip_prefix("error: ").unwrap_or(&rendered);
    let headline = message.split("\n\n").next().unwrap_or_default();

    headline.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn run(args: &Args) -> Result<()> {
    let pipeline = Pipeline::new(Config::default());

    pipeline
        .process(&args.input, &args.output)
        .context("failed to convert image")?;

    tracing::info!(
        "Converted {} -> {}",
        args.input.display(),
        args.output.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_missing_argument() {
        let err = Args::try_parse_from(["graymill", "-i", "in.png"]).unwrap_err();
        let summary = summarize(&err);

        assert!(!summary.contains('\n'));
        assert!(!summary.starts_with("error:"));
        assert!(summary.contains("--output"), "{summary}");
        assert!(!summary.contains("Usage"), "{summary}");
    }
}
