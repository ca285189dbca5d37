//! sheetgen - printable practice sheet generator
//!
//! Reads a row-based input file and writes a paginated A4 PDF of practice
//! boxes. See `--help` for the command-line surface.

mod cli;

use std::fs;
use std::process::ExitCode;

use anyhow::{bail, Context};
use cli::{Command, Mode};
use sheet_layout::SheetLayout;
use sheet_render::SheetOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let command = match cli::parse(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(error) => {
            eprint!("{}", cli::USAGE);
            bail!(error);
        }
    };
    let args = match command {
        Command::Help => {
            print!("{}", cli::USAGE);
            return Ok(());
        }
        Command::Run(args) => args,
    };

    let layout = SheetLayout::default();
    let options = SheetOptions::default();

    let pdf = match args.mode {
        Mode::Word => bail!("word sheets are not implemented yet"),
        Mode::Character => {
            let text = fs::read_to_string(&args.input)
                .with_context(|| format!("reading {}", args.input.display()))?;
            let rows = sheet_model::parse_character_rows(&text)
                .with_context(|| format!("parsing {}", args.input.display()))?;
            sheet_render::character_sheet(&rows, &layout, &options)?
        }
        Mode::Phrase => {
            let text = fs::read_to_string(&args.input)
                .with_context(|| format!("reading {}", args.input.display()))?;
            let rows = sheet_model::parse_phrase_rows(&text, layout.phrase_slots)
                .with_context(|| format!("parsing {}", args.input.display()))?;
            sheet_render::phrase_sheet(&rows, &layout, &options)?
        }
    };

    fs::write(&args.output, &pdf)
        .with_context(|| format!("writing {}", args.output.display()))?;
    tracing::info!("Wrote {} ({} bytes)", args.output.display(), pdf.len());
    Ok(())
}
