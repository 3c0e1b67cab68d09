use std::{fs, io, process::exit, thread, time::Duration};

use anyhow::{Context, bail};
use liblife::{Grid, codec};

use crate::{Config, render};

pub fn run_cli(config: Config, mut grid: Grid) {
    render::draw(&grid);

    for line_res in io::stdin().lines() {
        let Ok(line) = line_res else { break };
        let args = line.split_whitespace();

        if let Err(e) = handle_cmd(&config, &mut grid, args) {
            eprintln!("! {e:?}");
        }
    }
}

fn handle_cmd<'a, I>(config: &Config, grid: &mut Grid, mut args: I) -> anyhow::Result<()>
where
    I: Iterator<Item = &'a str>,
{
    match args.next().context("No command")? {
        "step" => {
            let times = args.next().unwrap_or("1").parse::<usize>()?;

            for _ in 0..times {
                *grid = grid.step();
            }
            render::draw(grid);
        }

        "run" => {
            let generations = args
                .next()
                .context("missing generation count")?
                .parse::<usize>()?;
            let millis = args
                .next()
                .map(str::parse)
                .transpose()?
                .unwrap_or(config.tick_millis);

            for _ in 0..generations {
                *grid = grid.step();
                render::draw(grid);
                thread::sleep(Duration::from_millis(millis));
            }
        }

        "show" => {
            render::draw(grid);
        }

        "random" => {
            let probability = args
                .next()
                .map(str::parse)
                .transpose()?
                .unwrap_or(config.alive_probability);

            *grid = Grid::random(grid.rows(), grid.cols(), || {
                rand::random_bool(probability)
            })?;
            render::draw(grid);
        }

        "clear" => {
            *grid = Grid::dead(grid.rows(), grid.cols())?;
        }

        "resize" => {
            let rows = args.next().context("missing rows")?.parse::<usize>()?;
            let cols = args.next().context("missing cols")?.parse::<usize>()?;

            *grid = Grid::dead(rows, cols)?;
        }

        "load" => {
            let path = args.next().context("missing path")?;
            let text =
                fs::read_to_string(path).with_context(|| format!("Couldn't read {path}"))?;

            *grid = codec::decode(&text)?;
            render::draw(grid);
        }

        "save" => {
            let path = args.next().context("missing path")?;
            fs::write(path, codec::encode(grid))
                .with_context(|| format!("Couldn't write {path}"))?;
        }

        "stable" => {
            if grid.step() == *grid {
                println!("still life");
            } else {
                println!("changing");
            }
        }

        "exit" => {
            exit(0);
        }

        _ => bail!("Unknown command"),
    }

    println!("OK");
    Ok(())
}
