use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use manuscript_chunker::cli::{Cli, Command};
use manuscript_chunker::config::{MergeConfig, SplitConfig, StatusConfig};
use manuscript_chunker::error::ChunkError;
use manuscript_chunker::manifest::Manifest;
use manuscript_chunker::{merge, report, split};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        let code = e
            .downcast_ref::<ChunkError>()
            .map(ChunkError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Split {
            input_file,
            chunk_lines,
            output_dir,
        } => {
            let outcome = split::split_document(&SplitConfig {
                input: input_file,
                output_dir,
                chunk_lines,
            })?;
            println!(
                "split {} into {} chunks",
                outcome.manifest.original_file,
                outcome.manifest.chunks.len()
            );
            for chunk in &outcome.manifest.chunks {
                println!(
                    "  chunk {:3}: {:4} lines (lines {:5} - {:5}) -> {}",
                    chunk.chunk_number, chunk.lines, chunk.start_line, chunk.end_line,
                    chunk.filename
                );
            }
            println!("manifest: {}", outcome.manifest_path.display());
        }
        Command::Merge {
            base_name,
            output_file,
            chunks_dir,
            lint_command,
        } => {
            let outcome = merge::merge_chunks(&MergeConfig {
                base_name,
                output_file,
                chunks_dir,
                lint_command,
            })?;
            println!(
                "merged {} chunks into {}",
                outcome.chunks_merged,
                outcome.output_path.display()
            );
            if let Some(lint) = outcome.lint {
                let verdict = if lint.passed { "passed" } else { "reported problems" };
                println!("lint {verdict} ({} output lines)", lint.reported_lines);
            }
        }
        Command::Status {
            base_name,
            chunks_dir,
        } => {
            let config = StatusConfig {
                base_name,
                chunks_dir,
            };
            let manifest = Manifest::load(&config.chunks_dir, &config.base_name)?;
            print!("{}", report::render_report(&manifest));
        }
    }
    Ok(())
}
