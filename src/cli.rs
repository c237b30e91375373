use std::{env, ffi::OsString, path::PathBuf, process::ExitCode};

use clap::{ArgAction, Parser, error::ErrorKind};
use multitag::SaveOptions;

use crate::config::{self, CONFIG_FILE_ENV, FileConfig};
use crate::edits::TagEdits;

const AFTER_HELP: &str = "\
If no tag option is given, information about each file is printed.
A missing option leaves the value unchanged.
An empty string (TEXT) or 0 (INT) clears the value.";

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nLicense GPL-3.0-or-later <https://gnu.org/licenses/gpl.html>.\n",
    "This is free software: you are free to change and redistribute it.\n",
    "There is NO WARRANTY, to the extent permitted by law."
);

#[derive(Parser, Debug)]
#[command(version, long_version = LONG_VERSION, about, after_help = AFTER_HELP)]
pub struct Cli {
    #[command(flatten)]
    pub tags: TagEdits,

    /// Configuration file with default tag values (or set TAGCLI_CONFIG_FILE)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print: bool,

    /// Print file information as JSON
    #[arg(long)]
    pub json: bool,

    /// Walk directories recursively
    #[arg(short, long)]
    pub recursive: bool,

    /// ID3v2 version written to MPEG, WAV and AIFF files [default: 3]
    #[arg(long = "id3v2-version", value_name = "3|4", value_parser = clap::value_parser!(u8).range(3..=4))]
    pub id3v2_version: Option<u8>,

    /// More log output (repeat for more)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Audio files, directories or glob patterns
    #[arg(value_name = "FILE", required_unless_present = "print")]
    pub files: Vec<PathBuf>,
}

/// Everything a run needs after the command line and configuration are merged.
#[derive(Debug)]
pub struct Settings {
    pub tags: TagEdits,
    pub save: SaveOptions,
    pub json: bool,
    pub recursive: bool,
    pub files: Vec<PathBuf>,
}

/// Parses the command line, printing help, version or the parse error.
///
/// Help and version requests map to success, every other parse error to failure.
pub fn parse_from<I, T>(args: I) -> Result<Cli, ExitCode>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|err| {
        let _ = err.print();
        match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
            _ => ExitCode::FAILURE,
        }
    })
}

pub enum CliResult {
    Exit,
    Continue(Settings),
}

pub fn process_args(cli: Cli) -> anyhow::Result<CliResult> {
    let config_path = cli
        .config
        .or_else(|| env::var_os(CONFIG_FILE_ENV).map(PathBuf::from));
    let file_config = FileConfig::load(config_path.as_deref(), FileConfig::environment())?;

    let tags = cli.tags.merge_over(file_config.tags);
    let id3v2_version = match cli.id3v2_version {
        Some(version) => config::parse_id3v2_version(version)?,
        None => file_config.id3v2_version.unwrap_or_default(),
    };

    if cli.print {
        print!("{}", config::to_toml(&tags, id3v2_version)?);
        return Ok(CliResult::Exit);
    }

    Ok(CliResult::Continue(Settings {
        tags,
        save: SaveOptions { id3v2_version },
        json: cli.json,
        recursive: cli.recursive,
        files: cli.files,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use multitag::Id3v2Version;

    fn settings(args: &[&str]) -> Settings {
        let cli = Cli::try_parse_from(args).unwrap();
        match process_args(cli).unwrap() {
            CliResult::Continue(settings) => settings,
            CliResult::Exit => panic!("unexpected exit"),
        }
    }

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_tag_flags() {
        let cli = Cli::try_parse_from([
            "tagcli",
            "-a",
            "Artist",
            "--albumArtist",
            "VA",
            "--trackId",
            "42",
            "--subtitle",
            "Live",
            "--owner",
            "CC-BY",
            "-y",
            "0",
            "-p",
            "",
            "song.mp3",
        ])
        .unwrap();

        assert_eq!(cli.tags.artist.as_deref(), Some("Artist"));
        assert_eq!(cli.tags.album_artist.as_deref(), Some("VA"));
        assert_eq!(cli.tags.track_id.as_deref(), Some("42"));
        assert_eq!(cli.tags.work.as_deref(), Some("Live"));
        assert_eq!(cli.tags.license.as_deref(), Some("CC-BY"));
        assert_eq!(cli.tags.year, Some(0));
        assert_eq!(cli.tags.picture, Some(PathBuf::new()));
        assert_eq!(cli.files, [PathBuf::from("song.mp3")]);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(Cli::try_parse_from(["tagcli", "-y", "soon", "a.mp3"]).is_err());
        assert!(Cli::try_parse_from(["tagcli", "--id3v2-version", "2", "a.mp3"]).is_err());
        assert!(Cli::try_parse_from(["tagcli"]).is_err());
        assert!(Cli::try_parse_from(["tagcli", "--print"]).is_ok());
    }

    #[test]
    fn parse_errors_exit_with_failure() {
        assert_eq!(
            parse_from(["tagcli", "-y", "soon", "a.mp3"]).unwrap_err(),
            ExitCode::FAILURE
        );
        assert_eq!(parse_from(["tagcli"]).unwrap_err(), ExitCode::FAILURE);
        assert_eq!(parse_from(["tagcli", "--help"]).unwrap_err(), ExitCode::SUCCESS);
        assert_eq!(parse_from(["tagcli", "--version"]).unwrap_err(), ExitCode::SUCCESS);
        assert!(parse_from(["tagcli", "a.mp3"]).is_ok());
    }

    #[test]
    fn verbosity_counts() {
        let cli = Cli::try_parse_from(["tagcli", "-vv", "a.mp3"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn cli_overrides_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tagcli.toml");
        std::fs::write(
            &path,
            "artist = \"From File\"\ngenre = \"Ambient\"\nid3v2_version = 4\n",
        )
        .unwrap();
        let path = path.to_str().unwrap();

        let s = settings(&["tagcli", "--config", path, "-a", "From Cli", "a.mp3"]);
        assert_eq!(s.tags.artist.as_deref(), Some("From Cli"));
        assert_eq!(s.tags.genre.as_deref(), Some("Ambient"));
        assert_eq!(s.save.id3v2_version, Id3v2Version::V4);

        let s = settings(&["tagcli", "--config", path, "--id3v2-version", "3", "a.mp3"]);
        assert_eq!(s.save.id3v2_version, Id3v2Version::V3);
    }

    #[test]
    fn defaults_without_options() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.toml");
        std::fs::write(&path, "").unwrap();

        let s = settings(&["tagcli", "--config", path.to_str().unwrap(), "-r", "music"]);
        assert!(s.tags.is_empty());
        assert!(s.recursive);
        assert!(!s.json);
        assert_eq!(s.save.id3v2_version, Id3v2Version::V3);
    }
}
