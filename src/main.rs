use std::path::Path;

use anyhow::Context;
use clap::Parser;

use skinsense::analysis::AnalysisClient;
use skinsense::config::Config;
use skinsense::i18n::Translator;
use skinsense::logging::{init_tracing, LogSink};
use skinsense::oneshot::{analyze_once, print_report};
use skinsense::ui::runtime::run;

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    match try_main(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            std::process::exit(1);
        }
    }
}

fn try_main(cli: Cli) -> anyhow::Result<i32> {
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = load_config(&cli, &config_path)?;

    let sink = if cli.print {
        LogSink::Stderr
    } else {
        LogSink::Discard
    };
    init_tracing(&config.logging, sink)?;
    tracing::info!(
        config = %config_path.display(),
        api = %config.api.base_url,
        locale = %config.ui.locale,
        "Starting skinsense"
    );

    let client = AnalysisClient::new(&config.api.base_url)?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    if cli.print {
        let path = cli.image.context("--print needs --image")?;
        let translator = Translator::new(config.ui.locale);
        let report = runtime.block_on(analyze_once(&client, &translator, &path));
        return Ok(print_report(&report));
    }

    run(&config, client, runtime.handle().clone(), cli.image)
        .context("terminal UI failed")?;
    Ok(0)
}

/// File, then `SKINSENSE_API_URL`, then flags.
fn load_config(cli: &Cli, path: &Path) -> anyhow::Result<Config> {
    let mut config = Config::load_from(path)?;
    config.apply_env(|key| std::env::var(key).ok());

    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }
    if let Some(locale) = cli.locale {
        config.ui.locale = locale;
    }
    if let Some(file) = &cli.log_file {
        config.logging.file = Some(file.clone());
    }

    config.validate()?;
    Ok(config)
}
