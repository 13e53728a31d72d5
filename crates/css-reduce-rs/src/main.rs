//! css-reduce-rs: reduce a stylesheet to the rules a rendered page uses.

mod cli;
mod config;
mod output;

use camino::Utf8Path;
use clap::Parser;
use cli::{Args, SummaryFormat};
use config::ReduceConfig;
use content_scan::{ContentKind, ContentSource};
use css_reduce::{ReduceError, ReduceOptions};
use miette::Result;
use output::ReduceSummary;
use std::fs;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Errors specific to the CLI layer.
#[derive(Debug, Error)]
enum RunError {
    /// The reduction itself failed.
    #[error(transparent)]
    Reduce(#[from] ReduceError),

    /// Could not write the reduced stylesheet.
    #[error("failed to write {path}: {message}")]
    WriteFailed { path: String, message: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    match run(args).await {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

async fn run(args: Args) -> Result<(), RunError> {
    let config = ReduceConfig::load(&args.workspace);

    let mut safelist = config.safelist.clone();
    if let Some(raw) = &args.safelist {
        safelist.extend(cli::parse_safelist(raw));
    }

    let preserve_children = if args.flat {
        false
    } else {
        config.preserve_children.unwrap_or(true)
    };

    let timeout = args
        .timeout
        .or(config.timeout_secs)
        .map(Duration::from_secs);

    let css = read_text(&args.css)?;
    let sources = build_sources(&args)?;

    let start = Instant::now();
    let reduced = css_reduce::reduce(
        &css,
        &safelist,
        preserve_children,
        sources,
        ReduceOptions { timeout },
    )
    .await?;
    let duration = start.elapsed();

    match &args.output {
        Some(path) => {
            fs::write(path, &reduced).map_err(|e| RunError::WriteFailed {
                path: path.to_string(),
                message: e.to_string(),
            })?;
        }
        None => println!("{}", reduced),
    }

    if !args.quiet {
        let summary = ReduceSummary::measure(&css, &reduced, duration);
        match args.format {
            SummaryFormat::Human => eprintln!("{}", summary.format()),
            SummaryFormat::Json => eprintln!("{}", summary.to_json()),
        }
    }

    Ok(())
}

/// Assembles the content sources: the rendered markup, plus all script
/// files concatenated into a single source the way the page would see
/// them.
fn build_sources(args: &Args) -> Result<Vec<ContentSource>, RunError> {
    let mut sources = vec![ContentSource::new(
        "markup",
        ContentKind::Markup,
        read_bytes(&args.html)?,
    )];

    if !args.js.is_empty() {
        let mut script_bytes = Vec::new();
        for path in &args.js {
            script_bytes.extend_from_slice(&read_bytes(path)?);
            script_bytes.push(b'\n');
        }
        sources.push(ContentSource::new(
            "scripts",
            ContentKind::Script,
            script_bytes,
        ));
    }

    Ok(sources)
}

/// Reads an input file, surfacing failures as resource errors: obtaining
/// the inputs is the caller-side collaborator's job, not the engine's.
fn read_bytes(path: &Utf8Path) -> Result<Vec<u8>, RunError> {
    fs::read(path)
        .map_err(|e| RunError::Reduce(ReduceError::Resource(format!("{}: {}", path, e))))
}

fn read_text(path: &Utf8Path) -> Result<String, RunError> {
    fs::read_to_string(path)
        .map_err(|e| RunError::Reduce(ReduceError::Resource(format!("{}: {}", path, e))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_css_file_is_a_resource_error() {
        let args = Args::parse_from([
            "css-reduce-rs",
            "--css",
            "/nonexistent/styles.css",
            "--html",
            "/nonexistent/page.html",
        ]);
        let err = read_text(&args.css).unwrap_err();
        assert!(matches!(
            err,
            RunError::Reduce(ReduceError::Resource(_))
        ));
    }

    #[tokio::test]
    async fn test_run_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let root = camino::Utf8PathBuf::try_from(dir.path().to_path_buf()).unwrap();
        std::fs::write(
            root.join("styles.css"),
            ".used{color:red}.unused{color:blue}",
        )
        .unwrap();
        std::fs::write(root.join("page.html"), r#"<div class="used"></div>"#).unwrap();
        let out_path = root.join("reduced.css");

        let args = Args::parse_from([
            "css-reduce-rs",
            "--css",
            root.join("styles.css").as_str(),
            "--html",
            root.join("page.html").as_str(),
            "--output",
            out_path.as_str(),
            "--workspace",
            root.as_str(),
            "--quiet",
        ]);

        run(args).await.unwrap();
        let reduced = std::fs::read_to_string(&out_path).unwrap();
        assert_eq!(reduced, ".used { color:red }");
    }
}
