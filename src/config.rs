/// Report configuration loader - parses report.toml
///
/// Separates the dataset location, output location and ranking depths
/// from code, so a rerun against a different extract (or with a deeper
/// top-N) needs no recompilation. Every field has a default, so the file
/// itself is optional.

use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::model::ReportError;

/// Default location of the configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "report.toml";

/// Root configuration structure for TOML parsing
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Storm database export (`.csv`, `.csv.bz2` or `.csv.gz`).
    pub data_path: PathBuf,
    /// Directory the chart images are written to.
    pub output_dir: PathBuf,
    /// Drop events that began before this year. Unset keeps the whole record.
    pub min_year: Option<i32>,
    pub ranking: RankingConfig,
    pub charts: ChartConfig,
}

/// How many event types each ranking keeps.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RankingConfig {
    pub top_injuries: usize,
    pub top_fatalities: usize,
    pub top_damage: usize,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    pub format: ChartFormat,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ChartFormat {
    Png,
    Svg,
}

impl ChartFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ChartFormat::Png => "png",
            ChartFormat::Svg => "svg",
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/StormData.csv.bz2"),
            output_dir: PathBuf::from("figures"),
            min_year: None,
            ranking: RankingConfig::default(),
            charts: ChartConfig::default(),
        }
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_injuries: 5,
            top_fatalities: 5,
            top_damage: 3,
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            format: ChartFormat::Png,
            width: 1280,
            height: 720,
        }
    }
}

impl ReportConfig {
    /// Parses configuration from TOML text. Missing fields take their defaults.
    pub fn from_toml(contents: &str, origin: &Path) -> Result<Self, ReportError> {
        toml::from_str(contents).map_err(|source| ReportError::Config {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Loads configuration from `path`. The file must exist.
    pub fn load(path: &Path) -> Result<Self, ReportError> {
        let contents = fs::read_to_string(path).map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents, path)
    }

    /// Loads configuration from `path`, falling back to defaults only when
    /// the file does not exist. A file that exists but fails to parse is
    /// still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ReportError> {
        match fs::read_to_string(path) {
            Ok(contents) => Self::from_toml(&contents, path),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ReportError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Applies command-line / environment overrides on top of the file values.
    pub fn override_with(
        &mut self,
        data_path: Option<PathBuf>,
        output_dir: Option<PathBuf>,
        format: Option<ChartFormat>,
    ) {
        if let Some(path) = data_path {
            self.data_path = path;
        }
        if let Some(dir) = output_dir {
            self.output_dir = dir;
        }
        if let Some(format) = format {
            self.charts.format = format;
        }
    }

    /// Path of a chart image named `stem` inside the output directory.
    pub fn chart_path(&self, stem: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", stem, self.charts.format.extension()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_config_succeeds() {
        // The checked-in report.toml must always parse.
        let config = ReportConfig::load(Path::new(DEFAULT_CONFIG_PATH))
            .expect("report.toml should load");
        assert_eq!(config.ranking.top_injuries, 5);
        assert_eq!(config.ranking.top_fatalities, 5);
        assert_eq!(config.ranking.top_damage, 3);
    }

    #[test]
    fn test_empty_file_yields_defaults() {
        let config = ReportConfig::from_toml("", Path::new("inline.toml")).unwrap();
        assert_eq!(config, ReportConfig::default());
    }

    #[test]
    fn test_partial_file_overrides_only_named_fields() {
        let toml = r#"
            data_path = "extracts/storms_2011.csv"
            min_year = 1996

            [charts]
            format = "svg"
        "#;
        let config = ReportConfig::from_toml(toml, Path::new("inline.toml")).unwrap();

        assert_eq!(config.data_path, PathBuf::from("extracts/storms_2011.csv"));
        assert_eq!(config.min_year, Some(1996));
        assert_eq!(config.charts.format, ChartFormat::Svg);
        assert_eq!(config.charts.width, 1280, "unnamed chart fields keep defaults");
        assert_eq!(config.ranking, RankingConfig::default());
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result = ReportConfig::from_toml("top_n = 4", Path::new("inline.toml"));
        match result {
            Err(ReportError::Config { path, .. }) => assert_eq!(path, PathBuf::from("inline.toml")),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = ReportConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, ReportConfig::default());
    }

    #[test]
    fn test_load_or_default_malformed_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ranking\ntop_damage = 3").unwrap();
        assert!(ReportConfig::load_or_default(file.path()).is_err());
    }

    #[test]
    fn test_overrides_replace_only_given_values() {
        let mut config = ReportConfig::default();
        config.override_with(Some(PathBuf::from("/tmp/storms.csv")), None, Some(ChartFormat::Svg));

        assert_eq!(config.data_path, PathBuf::from("/tmp/storms.csv"));
        assert_eq!(config.output_dir, PathBuf::from("figures"));
        assert_eq!(config.charts.format, ChartFormat::Svg);
    }

    #[test]
    fn test_chart_path_uses_format_extension() {
        let mut config = ReportConfig::default();
        assert_eq!(config.chart_path("health_impact"), PathBuf::from("figures/health_impact.png"));

        config.charts.format = ChartFormat::Svg;
        assert_eq!(config.chart_path("health_impact"), PathBuf::from("figures/health_impact.svg"));
    }
}
