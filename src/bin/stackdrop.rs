use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rayon::prelude::*;

use stacklib::{simulate, DropError, Grid};

/// Drop falling-block pieces into a 10-column field and report the stack
/// height left after each input line.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File with one comma-separated command list per line; stdin if omitted or "-"
    input: Option<PathBuf>,
    #[clap(short, long)]
    verbose: bool,
    /// Simulate lines on a thread pool
    #[clap(short, long)]
    parallel: bool,
    /// Print each final grid to stderr
    #[clap(short, long)]
    show_grid: bool,
}

fn read_input(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("unable to read {}", path.display())),
        _ => {
            let stdin = std::io::stdin();
            Ok(std::io::read_to_string(stdin)?)
        }
    }
}

/// Simulate every non-blank line of `input`, producing one output line each
/// (the height, or an `error:` marker) in input order, plus the failure count.
fn render(input: &str, parallel: bool, show_grid: bool) -> (Vec<String>, usize) {
    let lines = input
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .collect::<Vec<_>>();
    // collect() on an indexed parallel iterator keeps input order
    let results: Vec<Result<Grid, DropError>> = if parallel {
        lines.par_iter().map(|(_, line)| simulate(line)).collect()
    } else {
        lines.iter().map(|(_, line)| simulate(line)).collect()
    };
    let mut failed = 0;
    let output = lines
        .iter()
        .zip(results)
        .map(|((number, line), result)| match result {
            Ok(grid) => {
                if show_grid {
                    eprintln!("{}\n{}", line, grid);
                }
                grid.height().to_string()
            }
            Err(e) => {
                log::warn!("line {} ({:?}): {}", number, line, e);
                failed += 1;
                format!("error: {}", e)
            }
        })
        .collect::<Vec<_>>();
    (output, failed)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::builder()
        .format_module_path(false)
        .format_timestamp_millis()
        .filter_level(log_level)
        .init();
    let input = read_input(args.input.as_ref())?;
    let start = std::time::Instant::now();
    let (output, failed) = render(&input, args.parallel, args.show_grid);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for line in &output {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;
    log::info!(
        "{} lines, {} failed (in {:?})",
        output.len(),
        failed,
        start.elapsed()
    );
    if failed > 0 {
        anyhow::bail!("{} of {} lines could not be simulated", failed, output.len());
    }
    Ok(())
}
