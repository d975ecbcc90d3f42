//! Command-line flags.

use std::path::PathBuf;

use clap::Parser;

use skinsense::i18n::Locale;

#[derive(Parser, Debug)]
#[command(
    name = "skinsense",
    version,
    about = "Analyze skin tone from a photo using the SkinSense service"
)]
pub struct Cli {
    /// Config file to read instead of the default location.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Base URL of the analysis service (overrides config and SKINSENSE_API_URL).
    #[arg(long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,

    /// Interface language (en or es).
    #[arg(long, value_name = "LOCALE")]
    pub locale: Option<Locale>,

    /// Image to submit on startup.
    #[arg(long, value_name = "PATH")]
    pub image: Option<PathBuf>,

    /// Analyze --image, print the result and exit without starting the UI.
    #[arg(long, requires = "image")]
    pub print: bool,

    /// Append logs to this file.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
