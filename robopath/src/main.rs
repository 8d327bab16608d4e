//! robopath: drive a robot across a walled grid from the terminal.
//!
//! ```text
//! robopath --moves ddss --hint
//! robopath --layout board.txt --heuristic euclidean --solve --frames
//! ```

mod draw;
mod keys;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use robopath_core::Cell;
use robopath_paths::{Heuristic, Movement};
use robopath_world::{
    AnimationEvent, Layout, MoveOutcome, SolveOutcome, World, WorldConfig, render,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Board file (`#` wall, `.` floor, `R` robot, `G` goal)
    #[arg(short, long)]
    layout: Option<PathBuf>,

    /// Search heuristic: manhattan, euclidean, octile or chebyshev
    #[arg(long, default_value = "manhattan")]
    heuristic: Heuristic,

    /// Seed for goal placement
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Allow diagonal moves (q/e/z/c)
    #[arg(long)]
    diagonal: bool,

    /// Move keys to apply in order (w/a/s/d)
    #[arg(short, long, default_value = "")]
    moves: String,

    /// Toggle the wall at x,y (repeatable)
    #[arg(short, long, value_parser = parse_cell)]
    toggle: Vec<Cell>,

    /// Show the next step towards the goal
    #[arg(long)]
    hint: bool,

    /// Solve and animate the path to the goal
    #[arg(long)]
    solve: bool,

    /// Print every animation frame
    #[arg(long)]
    frames: bool,

    /// Colour the board
    #[arg(long)]
    color: bool,
}

fn parse_cell(s: &str) -> Result<Cell, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y, got {s:?}"))?;
    let x = x.trim().parse::<i32>().map_err(|e| format!("bad x in {s:?}: {e}"))?;
    let y = y.trim().parse::<i32>().map_err(|e| format!("bad y in {s:?}: {e}"))?;
    Ok(Cell::new(x, y))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.layout {
        Some(path) => Layout::parse(&std::fs::read_to_string(path)?)?.into_config(),
        None => WorldConfig::default(),
    };
    let mut config = config.with_heuristic(args.heuristic).with_seed(args.seed);
    if args.diagonal {
        config = config.with_robot_movement(Movement::Eight);
    }
    let mut world = World::new(config)?;
    let mut out = io::stdout();

    if !args.toggle.is_empty() {
        world.set_edit_mode(true);
        for &cell in &args.toggle {
            let is_wall = world.toggle_wall(cell)?;
            log::info!("{} wall at {cell}", if is_wall { "placed" } else { "cleared" });
        }
        world.set_edit_mode(false);
    }

    for key in args.moves.chars() {
        let Some(dir) = keys::dir_for_key(key, args.diagonal) else {
            log::warn!("ignoring key {key:?}");
            continue;
        };
        match world.move_robot(dir)? {
            MoveOutcome::Blocked(reason) => log::info!("move {dir:?} blocked: {reason:?}"),
            MoveOutcome::Moved(_) => {}
            MoveOutcome::ReachedGoal { robot, new_goal } => {
                println!("goal reached at {robot}, new goal {new_goal}");
            }
        }
    }

    if args.hint {
        match world.hint()? {
            Some(c) => println!("hint: step to {c}"),
            None => println!("hint: no path"),
        }
    }

    if args.solve {
        match world.solve()? {
            SolveOutcome::NoPath => println!("no path to the goal"),
            SolveOutcome::Started { steps } => {
                println!("solving with {} in {steps} steps", world.heuristic());
                while let Some(event) = world.tick()? {
                    if args.frames {
                        draw::print_board(&mut out, &render(&world), args.color)?;
                        println!();
                    }
                    match event {
                        AnimationEvent::Step(_) => {}
                        AnimationEvent::Arrived { robot, new_goal } => {
                            println!("arrived at {robot}, new goal {new_goal}");
                        }
                        AnimationEvent::Stopped => println!("path stopped short of the goal"),
                    }
                }
            }
        }
    }

    draw::print_board(&mut out, &render(&world), args.color)?;
    let stats = world.stats();
    println!(
        "robot {}  goal {}  distance {}  walls {}  reachable {}",
        world.robot(),
        world.goal(),
        stats.distance,
        stats.wall_count,
        world.reachable_count()
    );
    Ok(())
}
