//! Loading [`Options`] from JSON or YAML.

use std::path::Path;

use log::{debug, warn};

use crate::{
    chooser::Options,
    constants::config_formats,
    error::{Error, Result},
};

impl Options {
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str::<Options>(content)?.checked())
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str::<Options>(content)?.checked())
    }

    /// Warns about a default the user could never type as a valid option.
    fn checked(self) -> Self {
        if !self.default.is_empty()
            && !self.allowed.is_empty()
            && !self.allowed.iter().any(|option| option.to_lowercase() == self.default.to_lowercase())
        {
            warn!(
                "Default {:?} is not one of the allowed options {:?}",
                self.default, self.allowed
            );
        }
        self
    }
}

/// Loads options from a `.json`, `.yaml` or `.yml` file.
pub fn load_options<P: AsRef<Path>>(path: P) -> Result<Options> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    let parse: fn(&str) -> Result<Options> = if config_formats::JSON.contains(&extension.as_str()) {
        Options::from_json_str
    } else if config_formats::YAML.contains(&extension.as_str()) {
        Options::from_yaml_str
    } else {
        return Err(Error::UnsupportedConfigFormatError {
            path: path.display().to_string(),
            extensions: config_formats::JSON
                .iter()
                .chain(config_formats::YAML)
                .map(|ext| format!(".{ext}"))
                .collect::<Vec<_>>()
                .join(", "),
        });
    };

    debug!("Loading options from {}", path.display());
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}
