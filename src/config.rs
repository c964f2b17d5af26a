use std::path::PathBuf;

use anyhow::{Context, Result};
use arivu_text::{Abbreviations, Pipeline, PipelineOptions};
use clap::Args;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_MAX_TOKENS: usize = 10_000;

/// Command-line flags shared by every subcommand; they win over environment
/// variables.
#[derive(Args, Debug, Clone, Default)]
pub struct Overrides {
    /// Extra abbreviation rules, one `<short> <expansion...>` per line.
    #[arg(long, global = true, value_name = "PATH")]
    pub abbreviations: Option<PathBuf>,
    /// Keep stopwords in the output.
    #[arg(long, global = true)]
    pub no_stopwords: bool,
    /// Normalize without stemming.
    #[arg(long, global = true)]
    pub no_stem: bool,
    /// Do not lowercase tokens.
    #[arg(long, global = true)]
    pub keep_case: bool,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub abbreviations_path: Option<PathBuf>,
    pub max_tokens: usize,
    pub options: PipelineOptions,
}

/// Resolve configuration from flags and an environment lookup
/// (`std::env::var(..).ok()` in production).
pub fn load_config<F>(overrides: &Overrides, env: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    let host = env("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
    let port = env("PORT")
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);
    let abbreviations_path = overrides
        .abbreviations
        .clone()
        .or_else(|| env("ARIVU_ABBREVIATIONS").map(PathBuf::from));
    let max_tokens = env("ARIVU_MAX_TOKENS")
        .and_then(|v| v.parse::<usize>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(DEFAULT_MAX_TOKENS);

    let options = PipelineOptions {
        lowercase: !overrides.keep_case,
        remove_stopwords: !overrides.no_stopwords,
        stem: !overrides.no_stem,
        ..PipelineOptions::default()
    };

    Config {
        host,
        port,
        abbreviations_path,
        max_tokens,
        options,
    }
}

/// Log filter from `RUST_LOG`-style directives, `info` when absent or invalid.
/// Per-target directives are kept as written.
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

impl Config {
    pub fn build_pipeline(&self) -> Result<Pipeline> {
        let abbreviations = match &self.abbreviations_path {
            Some(path) => Abbreviations::load(path)
                .with_context(|| format!("loading abbreviations from {}", path.display()))?,
            None => Abbreviations::default(),
        };
        Ok(Pipeline::new(self.options, abbreviations))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_env() {
        let config = load_config(&Overrides::default(), env_from(&[]));
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.max_tokens, DEFAULT_MAX_TOKENS);
        assert!(config.abbreviations_path.is_none());
        assert_eq!(config.options, PipelineOptions::default());
    }

    #[test]
    fn reads_env_and_ignores_bad_values() {
        let config = load_config(
            &Overrides::default(),
            env_from(&[
                ("HOST", "127.0.0.1"),
                ("PORT", "not-a-port"),
                ("ARIVU_MAX_TOKENS", "0"),
                ("ARIVU_ABBREVIATIONS", "/etc/arivu/abbr.txt"),
            ]),
        );
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.max_tokens, DEFAULT_MAX_TOKENS);
        assert_eq!(
            config.abbreviations_path,
            Some(PathBuf::from("/etc/arivu/abbr.txt"))
        );
    }

    #[test]
    fn flags_override_env() {
        let overrides = Overrides {
            abbreviations: Some(PathBuf::from("local.txt")),
            no_stopwords: true,
            no_stem: true,
            keep_case: true,
        };
        let config = load_config(
            &overrides,
            env_from(&[("ARIVU_ABBREVIATIONS", "/etc/arivu/abbr.txt")]),
        );
        assert_eq!(config.abbreviations_path, Some(PathBuf::from("local.txt")));
        assert!(!config.options.remove_stopwords);
        assert!(!config.options.stem);
        assert!(!config.options.lowercase);
    }

    #[test]
    fn log_filter_defaults_to_info() {
        let filter = log_filter(None);
        assert_eq!(
            filter.max_level_hint(),
            Some(tracing_subscriber::filter::LevelFilter::INFO)
        );
    }

    #[test]
    fn log_filter_keeps_per_target_directives() {
        let filter = log_filter(Some("warn,arivu=debug"));
        assert!(filter.to_string().contains("arivu=debug"));
        assert_eq!(
            filter.max_level_hint(),
            Some(tracing_subscriber::filter::LevelFilter::DEBUG)
        );
    }

    #[test]
    fn missing_abbreviation_file_fails_pipeline_build() {
        let overrides = Overrides {
            abbreviations: Some(PathBuf::from("/definitely/missing/abbr.txt")),
            ..Overrides::default()
        };
        let config = load_config(&overrides, env_from(&[]));
        let err = config.build_pipeline().unwrap_err();
        assert!(format!("{err:#}").contains("loading abbreviations"));
    }
}
