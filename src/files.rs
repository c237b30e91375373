use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use log::{debug, warn};
use walkdir::WalkDir;

/// Resolves one command line input to the files to process.
///
/// An existing file is kept as it is. A directory contributes the audio files directly inside
/// it, or every audio file below it when `recursive` is set. Anything else is tried as a glob
/// pattern whose audio file matches are kept. An input that resolves to nothing is an error.
pub fn expand(input: &Path, recursive: bool) -> anyhow::Result<Vec<PathBuf>> {
    if input.is_dir() {
        let files = walk_dir(input, recursive);
        if files.is_empty() {
            return Err(anyhow!("{} contains no audio files", input.display()));
        }
        Ok(files)
    } else if input.exists() {
        Ok(vec![input.to_path_buf()])
    } else {
        expand_glob(input)
    }
}

fn walk_dir(dir: &Path, recursive: bool) -> Vec<PathBuf> {
    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .max_depth(max_depth)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| {
            e.inspect_err(|err| warn!("Skipping entry below {}: {err}", dir.display()))
                .ok()
        })
    {
        if entry.file_type().is_dir() {
            continue;
        }
        if multitag::is_supported_path(entry.path()) {
            files.push(entry.into_path());
        } else {
            debug!("Skipping {}, not an audio file", entry.path().display());
        }
    }
    files
}

fn expand_glob(input: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let pattern = input
        .to_str()
        .ok_or_else(|| anyhow!("{} does not exist", input.display()))?;
    let mut matches: Vec<PathBuf> = glob::glob(pattern)
        .with_context(|| format!("{pattern} does not exist and is no valid pattern"))?
        .filter_map(|e| {
            e.inspect_err(|err| warn!("Skipping glob match: {err}"))
                .ok()
        })
        .filter(|p| p.is_file())
        .filter(|p| {
            let supported = multitag::is_supported_path(p);
            if !supported {
                debug!("Skipping {}, not an audio file", p.display());
            }
            supported
        })
        .collect();
    matches.sort();

    if matches.is_empty() {
        return Err(anyhow!("{pattern} does not exist"));
    }
    Ok(matches)
}
