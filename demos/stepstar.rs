//! Watch A* search a grid, one expansion at a time.
//!
//! Run: cargo run --bin stepstar -- --size 20 --start 0,0 --end 19,19 --walls 0.3
//!
//! `--headless` runs the search to completion and prints the grid instead
//! of opening the terminal UI. Set `RUST_LOG=debug` to see the search log.

use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use stepstar_core::{Coord, GridConfig, MAX_UI_SIZE, MIN_UI_SIZE};
use stepstar_crossterm::{
    CrosstermDriver, DEFAULT_STEP_DELAY, DEFAULT_WALL_DENSITY, Msg, Visualizer,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "stepstar", version, about = "Step-by-step A* search visualizer")]
struct Args {
    /// Grid side length
    #[arg(long, default_value_t = 20)]
    size: i32,

    /// JSON file with size, start, end and walls; other flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start cell as ROW,COL
    #[arg(long, value_parser = parse_coord)]
    start: Option<Coord>,

    /// End cell as ROW,COL
    #[arg(long, value_parser = parse_coord)]
    end: Option<Coord>,

    /// Scatter random walls with this density (0.0 to 1.0)
    #[arg(long, value_parser = parse_density)]
    walls: Option<f64>,

    /// Seed for random walls
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds between search steps
    #[arg(long, default_value_t = DEFAULT_STEP_DELAY.as_millis() as u64)]
    delay_ms: u64,

    /// Run to completion and print the result
    #[arg(long)]
    headless: bool,
}

fn parse_coord(s: &str) -> Result<Coord, String> {
    let (r, c) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {s:?}"))?;
    let row = r.trim().parse().map_err(|e| format!("bad row {r:?}: {e}"))?;
    let col = c.trim().parse().map_err(|e| format!("bad column {c:?}: {e}"))?;
    Ok(Coord::new(row, col))
}

fn parse_density(s: &str) -> Result<f64, String> {
    let d: f64 = s.trim().parse().map_err(|e| format!("bad density {s:?}: {e}"))?;
    if (0.0..=1.0).contains(&d) {
        Ok(d)
    } else {
        Err(format!("density must be between 0.0 and 1.0, got {s}"))
    }
}

fn load_config(args: &Args) -> Result<GridConfig, Box<dyn Error>> {
    let mut cfg = match &args.config {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => GridConfig::new(args.size),
    };
    if args.start.is_some() {
        cfg.start = args.start;
    }
    if args.end.is_some() {
        cfg.end = args.end;
    }
    Ok(cfg)
}

fn headless(mut model: Visualizer) -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    model.update(Msg::Start);
    if !model.is_running() {
        return Err(model.status().into());
    }
    while model.is_running() {
        model.update(Msg::Tick);
    }
    print!("{}", model.render_text());
    println!("{}", model.status());
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let cfg = load_config(&args)?;

    let mut model = Visualizer::from_config(&cfg)?
        .with_wall_density(args.walls.unwrap_or(DEFAULT_WALL_DENSITY));
    if let Some(seed) = args.seed {
        model = model.with_seed(seed);
    }
    if args.walls.is_some() {
        model.update(Msg::RandomWalls);
    }

    if args.headless {
        return headless(model);
    }

    if !cfg.in_ui_range() {
        return Err(format!("Grid size must be between {MIN_UI_SIZE} and {MAX_UI_SIZE}").into());
    }
    let mut driver = CrosstermDriver::new();
    stepstar_crossterm::run(
        &mut model,
        &mut driver,
        Duration::from_millis(args.delay_ms),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn density_must_be_a_share() {
        assert_eq!(parse_density("0.3"), Ok(0.3));
        assert_eq!(parse_density("1"), Ok(1.0));
        assert!(parse_density("NaN").is_err());
        assert!(parse_density("inf").is_err());
        assert!(parse_density("-0.1").is_err());
        assert!(parse_density("1.5").is_err());
        assert!(parse_density("lots").is_err());
    }

    #[test]
    fn coords_parse_as_row_col() {
        assert_eq!(parse_coord("3, 4"), Ok(Coord::new(3, 4)));
        assert!(parse_coord("3").is_err());
    }
}
