use anyhow::Result;
use clap::{Parser, Subcommand};
use panel_core::{Config, PanelController, WeatherClient};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::view::TermView;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weatherpanel", version, about = "Terminal weather panel")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com key and the default location.
    Configure,

    /// Fetch and render current conditions once, then exit.
    Show {
        /// Address or location name.
        location: String,
    },

    /// Live panel: ticking clock, re-search by typing a location and
    /// pressing Enter, exit with Ctrl-D.
    Watch {
        /// Address or location name; the configured default when absent.
        location: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { location } => show(&location).await,
            Command::Watch { location } => watch(location).await,
        }
    }
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Text::new("WeatherAPI.com API key:").prompt()?;

    let default_location = inquire::Text::new("Default location:")
        .with_default(&config.default_location)
        .prompt()?;

    config.api_key = Some(api_key.trim().to_string());
    if !default_location.trim().is_empty() {
        config.default_location = default_location.trim().to_string();
    }

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}

fn build_controller(
    config: &Config,
    tick_tx: mpsc::Sender<()>,
) -> Result<PanelController<TermView>> {
    let api_key = config.require_api_key()?;
    let client = WeatherClient::with_base_url(api_key.to_string(), config.base_url.clone());
    Ok(PanelController::new(client, TermView::new(), tick_tx))
}

async fn show(location: &str) -> Result<()> {
    let config = Config::load()?;
    // The tick channel goes unused here: one render, no ticking.
    let (tick_tx, _tick_rx) = mpsc::channel(1);
    let mut controller = build_controller(&config, tick_tx)?;

    controller.submit(location).await;
    Ok(())
}

async fn watch(location: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let (tick_tx, mut tick_rx) = mpsc::channel(4);
    let mut controller = build_controller(&config, tick_tx)?;

    let initial = location.unwrap_or_else(|| config.default_location.clone());
    tracing::debug!(location = %initial, "starting watch loop");
    controller.submit(&initial).await;

    // Single logical writer: submissions and clock ticks are multiplexed
    // onto this task, so a tick can never interleave with a render.
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => match line? {
                Some(input) => controller.submit(&input).await,
                None => break,
            },
            Some(()) = tick_rx.recv() => controller.tick(),
        }
    }

    Ok(())
}
