use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use identicon::color::Color;
use identicon::grid::GridCell;
use identicon::pixel_map::PixelRect;
use identicon::Identicon;

mod logger;

/// Identicon generator: one deterministic 250x250 PNG per input string
#[derive(Parser)]
#[command(name = "identicon", version)]
struct Cli {
    /// More log output (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write `<input>.png` for each input
    Generate {
        /// Input strings, used verbatim
        #[arg(required = true)]
        inputs: Vec<String>,
        /// Output directory
        #[arg(short, long, default_value = ".")]
        output: String,
    },
    /// Write a single identicon to an explicit path
    Render {
        /// Input string, used verbatim
        input: String,
        /// Output file path, or "-" for stdout
        #[arg(short, long)]
        output: String,
    },
    /// Print digest, color, painted cells and rectangles as JSON
    Inspect {
        /// Input string, used verbatim
        input: String,
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(Serialize)]
struct InspectOutput<'a> {
    input: &'a str,
    digest: String,
    color: Color,
    cells: &'a [GridCell],
    pixel_map: &'a [PixelRect],
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::configure_logger(logger::level_for_verbosity(cli.verbose));

    match cli.command {
        Command::Generate { inputs, output } => cmd_generate(&inputs, &output),
        Command::Render { input, output } => cmd_render(&input, &output),
        Command::Inspect { input, pretty } => cmd_inspect(&input, pretty),
    }
}

/// File name for an input: the input itself plus `.png`.
///
/// Inputs that would escape the output directory are rejected.
fn output_file_name(input: &str) -> Result<PathBuf> {
    let name = PathBuf::from(format!("{input}.png"));
    anyhow::ensure!(
        name.file_name() == Some(name.as_os_str()),
        "input '{}' is not usable as a file name; use 'render --output' instead",
        input
    );
    Ok(name)
}

fn write_png(input: &str, path: &Path) -> Result<()> {
    let png = identicon::generate(input.as_bytes())
        .with_context(|| format!("generating identicon for '{input}'"))?;
    std::fs::write(path, &png).with_context(|| format!("writing {}", path.display()))?;
    log::info!("wrote {}", path.display());
    Ok(())
}

fn cmd_generate(inputs: &[String], output_dir: &str) -> Result<()> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("creating output directory '{}'", output_dir))?;

    for input in inputs {
        let path = Path::new(output_dir).join(output_file_name(input)?);
        write_png(input, &path)?;
    }
    Ok(())
}

fn cmd_render(input: &str, output: &str) -> Result<()> {
    if output == "-" {
        let png = identicon::generate(input.as_bytes())
            .with_context(|| format!("generating identicon for '{input}'"))?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(&png).context("writing PNG to stdout")?;
        stdout.flush().context("flushing stdout")?;
        return Ok(());
    }
    write_png(input, Path::new(output))
}

fn cmd_inspect(input: &str, pretty: bool) -> Result<()> {
    let icon = Identicon::new(input.as_bytes());
    let out = InspectOutput {
        input,
        digest: icon.digest.to_hex(),
        color: icon.color,
        cells: icon.grid.cells(),
        pixel_map: icon.pixel_map.rects(),
    };

    let json = if pretty {
        serde_json::to_string_pretty(&out)?
    } else {
        serde_json::to_string(&out)?
    };
    println!("{json}");
    Ok(())
}
