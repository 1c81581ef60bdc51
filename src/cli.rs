use std::env;

use anyhow::{anyhow, Context, Result};
use tracing::level_filters::LevelFilter;

pub const USAGE: &str = "Usage: fraud-detection [model].json [input].csv [log_level:optional] [backpressure:optional] > [output].csv\n\
    Available log levels: off, error, warn, info, debug, trace (default: error)";

pub struct CliArgs {
    pub model_path: String,
    pub input_path: String,
    pub log_level: LevelFilter,
    /// Decoded rows allowed to queue ahead of the classifier.
    pub backpressure: Option<usize>
}

impl CliArgs {
    pub fn load() -> Result<Self> {
        Self::parse(env::args().skip(1))
    }

    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut args = args.into_iter();

        let model_path = args.next().ok_or_else(|| anyhow!("Model artifact path not passed"))?;
        let input_path = args.next().ok_or_else(|| anyhow!("Input file path not passed"))?;

        let log_level = match args.next() {
            Some(level) => level.parse::<LevelFilter>()
                .map_err(|_| anyhow!("Invalid log level [{level}]"))?,
            None => LevelFilter::ERROR
        };

        let backpressure = args.next()
            .map(|value| {
                value.parse::<usize>()
                    .ok()
                    .filter(|backpressure| *backpressure > 0)
                    .with_context(|| format!("Backpressure [{value}] must be a positive integer"))
            })
            .transpose()?;

        if let Some(extra) = args.next() {
            return Err(anyhow!("Unexpected argument [{extra}]"));
        }

        Ok(CliArgs { model_path, input_path, log_level, backpressure })
    }
}

#[cfg(test)]
mod tests {
    use super::CliArgs;

    use anyhow::Result;
    use tracing::level_filters::LevelFilter;

    fn parse(args: &[&str]) -> Result<CliArgs> {
        CliArgs::parse(args.iter().map(|arg| arg.to_string()))
    }

    #[test]
    fn test_paths_are_required() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["model.json"]).is_err());
    }

    #[test]
    fn test_defaults_apply_when_optional_arguments_are_omitted() -> Result<()> {
        let args = parse(&["model.json", "input.csv"])?;

        assert_eq!(args.model_path, "model.json");
        assert_eq!(args.input_path, "input.csv");
        assert_eq!(args.log_level, LevelFilter::ERROR);
        assert_eq!(args.backpressure, None);

        Ok(())
    }

    #[test]
    fn test_log_level_and_backpressure_are_parsed() -> Result<()> {
        let args = parse(&["model.json", "input.csv", "DEBUG", "16"])?;

        assert_eq!(args.log_level, LevelFilter::DEBUG);
        assert_eq!(args.backpressure, Some(16));

        Ok(())
    }

    #[test]
    fn test_invalid_optional_arguments_are_rejected() {
        assert!(parse(&["model.json", "input.csv", "loud"]).is_err());
        assert!(parse(&["model.json", "input.csv", "info", "0"]).is_err());
        assert!(parse(&["model.json", "input.csv", "info", "-3"]).is_err());
        assert!(parse(&["model.json", "input.csv", "info", "8", "extra"]).is_err());
    }
}
