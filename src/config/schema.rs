use serde::{Deserialize, Serialize};

/// User configuration.
///
/// Example YAML:
/// ```yaml
/// format: text
/// color: auto
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default output format for `calc` and `bonus` (default: text)
    #[serde(default)]
    pub format: OutputFormat,

    /// When to colour text output (default: auto)
    #[serde(default)]
    pub color: ColorMode,
}

impl Config {
    /// Apply command-line overrides on top of the file values.
    pub fn with_overrides(self, format: Option<OutputFormat>, color: Option<ColorMode>) -> Self {
        Config {
            format: format.unwrap_or(self.format),
            color: color.unwrap_or(self.color),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Colour only when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}
