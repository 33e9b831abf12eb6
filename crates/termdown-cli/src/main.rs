use anyhow::Result;
use clap::Parser;
use termdown_config::Config;
use termdown_engine::io;

mod cli;
mod run;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let mut config = load_config();

    if cli.save_theme {
        let config_path = Config::config_path();
        config = run::save_theme(&cli, &config, &config_path)?;
        log::info!("Saved theme '{}' to {}", config.theme, config_path.display());
    }

    let input = io::read_input(cli.input_path())?;
    if cli.stats && cli.view_mode() {
        log::info!("{} lines", input.lines().count());
    }

    let output = run::produce(&cli, &config, input);
    if let Some(stats) = &output.stats {
        if cli.stats {
            for line in run::stats_report(stats) {
                log::info!("{line}");
            }
        }
        if let Some(warning) = run::unterminated_warning(stats) {
            log::warn!("{warning}");
        }
    }

    let destination = cli.output_path(&config);
    run::write(&output.text, destination.as_deref(), &mut std::io::stdout().lock())?;
    if let Some(path) = &destination {
        log::info!("Saved {}", path.display());
    }

    Ok(())
}

/// Loads the config file, falling back to defaults when it is missing or broken.
fn load_config() -> Config {
    match Config::load() {
        Ok(Some(config)) => {
            log::debug!("Loaded config from {}", Config::config_path().display());
            config
        }
        Ok(None) => {
            log::debug!("No config file at {}", Config::config_path().display());
            Config::default()
        }
        Err(e) => {
            log::warn!("{e}; using defaults");
            Config::default()
        }
    }
}
