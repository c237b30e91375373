#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(
    clippy::collapsible_if,
    clippy::too_many_lines,
    clippy::redundant_closure_for_method_calls,
    clippy::missing_errors_doc,
    clippy::multiple_crate_versions
)]

mod cli;
mod config;
mod edits;
mod files;
mod report;

use std::{path::Path, process::ExitCode};

use anyhow::Context;
use cli::{CliResult, Settings, process_args};
use log::{LevelFilter, debug, error, info};
use multitag::{FileDescription, TagFile};

fn main() -> ExitCode {
    let cli = match cli::parse_from(std::env::args_os()) {
        Ok(cli) => cli,
        Err(code) => return code,
    };
    init_logging(cli.verbose);

    let settings = match process_args(cli) {
        Ok(CliResult::Exit) => return ExitCode::SUCCESS,
        Ok(CliResult::Continue(settings)) => settings,
        Err(err) => {
            error!("{err:?}");
            return ExitCode::FAILURE;
        }
    };

    if run(&settings) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let mut builder = colog::default_builder();
    builder.filter_level(level);
    builder.parse_default_env();
    builder.init();
}

/// Processes every input. Returns false if any of them failed.
fn run(settings: &Settings) -> bool {
    let mut all_ok = true;
    let mut descriptions = Vec::new();

    for input in &settings.files {
        let files = match files::expand(input, settings.recursive) {
            Ok(files) => files,
            Err(err) => {
                report_failure(input, &err);
                all_ok = false;
                continue;
            }
        };
        debug!("{} expanded to {} file(s)", input.display(), files.len());

        for path in files {
            match process_file(&path, settings) {
                Ok(Some(desc)) if settings.json => descriptions.push(desc),
                Ok(Some(desc)) => print!("{}", report::render_text(&desc)),
                Ok(None) => {}
                Err(err) => {
                    report_failure(&path, &err);
                    all_ok = false;
                }
            }
        }
    }

    if settings.json && !descriptions.is_empty() {
        match report::render_json(&descriptions) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                error!("Failed to serialize file information: {err}");
                all_ok = false;
            }
        }
    }

    all_ok
}

fn report_failure(path: &Path, err: &anyhow::Error) {
    eprintln!("Couldn't process given file {}", path.display());
    eprintln!("{err:#}");
}

/// Describes the file when there is nothing to write, otherwise applies the edits and saves.
fn process_file(path: &Path, settings: &Settings) -> anyhow::Result<Option<FileDescription>> {
    let mut file = TagFile::read_from_path(path).context("When reading tags")?;

    if settings.tags.is_empty() {
        return Ok(Some(file.describe()));
    }

    let outcome = settings
        .tags
        .apply(&mut file)
        .context("When applying tags")?;
    if !outcome.rejected.is_empty() {
        print!("{}", report::render_rejected(&outcome.rejected));
    }
    if outcome.picture_dropped {
        info!("{} keeps its pictures", path.display());
    }

    if outcome.processed {
        file.save(settings.save).context("When saving tags")?;
        info!("Updated {}", path.display());
    }
    Ok(None)
}
