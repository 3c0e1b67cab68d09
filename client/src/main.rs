use std::{env, fs};

use anyhow::Context;
use liblife::Grid;
use serde::{Deserialize, Serialize};

mod cli;
mod render;

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct Config {
    rows: usize,
    cols: usize,

    /// Probability that any given cell starts alive.
    alive_probability: f64,

    /// Default delay between generations for the `run` command, in milliseconds.
    tick_millis: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 20,
            alive_probability: 0.3,
            tick_millis: 250,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let config = match env::args().nth(1) {
        Some(config_path) => {
            let serialized = fs::read(&config_path)
                .with_context(|| format!("Couldn't read config {config_path}"))?;
            serde_json::from_slice(&serialized).context("Couldn't deserialize config")?
        }
        None => Config::default(),
    };

    let grid = Grid::random(config.rows, config.cols, || {
        rand::random_bool(config.alive_probability)
    })?;

    cli::run_cli(config, grid);

    Ok(())
}
