//! [`Args`] definitions.

use clap::Parser;

/// Terminal front-end of the advertising-space marketplace.
///
/// Reads actions line by line from the standard input.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// Path to the catalog file, overriding the configured one.
    #[arg(long)]
    pub catalog: Option<String>,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}

#[cfg(test)]
mod spec {
    use clap::Parser as _;

    use super::Args;

    #[test]
    fn defaults_config_path() {
        let args = Args::try_parse_from(["application"]).unwrap();

        assert_eq!(args.config, "config.toml");
        assert!(args.catalog.is_none());
    }

    #[test]
    fn overrides_catalog() {
        let args = Args::try_parse_from([
            "application",
            "-c",
            "dev.toml",
            "--catalog",
            "venues.json",
        ])
        .unwrap();

        assert_eq!(args.config, "dev.toml");
        assert_eq!(args.catalog.as_deref(), Some("venues.json"));
    }
}
