use std::path::Path;

use anyhow::{Context, bail};
use config::{Config, ConfigError, Environment, File, FileFormat};
use multitag::Id3v2Version;

use crate::edits::TagEdits;

pub const CONFIG_FILE_ENV: &str = "TAGCLI_CONFIG_FILE";
const ENV_PREFIX: &str = "TAGCLI";

/// Defaults read from the configuration file and `TAGCLI_*` variables.
#[derive(Debug, Default)]
pub struct FileConfig {
    pub tags: TagEdits,
    pub id3v2_version: Option<Id3v2Version>,
}

impl FileConfig {
    /// Reads the optional config file, then overlays the environment.
    pub fn load(path: Option<&Path>, env: Environment) -> anyhow::Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml));
        }
        let settings = builder
            .add_source(env)
            .build()
            .context("When loading configuration")?;

        let tags: TagEdits = settings
            .clone()
            .try_deserialize()
            .context("When reading tag defaults from configuration")?;

        let id3v2_version = match settings.get::<u8>("id3v2_version") {
            Ok(version) => Some(parse_id3v2_version(version)?),
            Err(ConfigError::NotFound(_)) => None,
            Err(err) => return Err(err).context("When reading id3v2_version"),
        };

        Ok(Self {
            tags,
            id3v2_version,
        })
    }

    pub fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX).try_parsing(true)
    }
}

pub fn parse_id3v2_version(version: u8) -> anyhow::Result<Id3v2Version> {
    match version {
        3 => Ok(Id3v2Version::V3),
        4 => Ok(Id3v2Version::V4),
        other => bail!("Unsupported ID3v2 version {other}, expected 3 or 4"),
    }
}

/// The effective tag values as TOML, loadable again with `--config`.
pub fn to_toml(tags: &TagEdits, id3v2_version: Id3v2Version) -> anyhow::Result<String> {
    let toml::Value::Table(mut table) =
        toml::Value::try_from(tags).context("When serializing configuration")?
    else {
        bail!("Tag values did not serialize to a table");
    };
    let version = match id3v2_version {
        Id3v2Version::V3 => 3,
        Id3v2Version::V4 => 4,
    };
    table.insert("id3v2_version".to_string(), toml::Value::Integer(version));
    Ok(toml::to_string(&table)?)
}
