use std::{error::Error, fs};

use clap::{Parser, ValueEnum};
use monkey_map::{parse_input, Board, Cube, Direction, FaceMap, Net, Start, TrailMap};

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
enum Part {
    /// walk the flat board, wrapping around its rows and columns
    Flat,
    /// fold the board into a cube and walk on its surface
    Cube,
    Both,
}

/// AoC problem for Dec 22 2022
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File to parse
    file: String,

    /// Which walk to run
    #[arg(long, value_enum, default_value_t = Part::Both)]
    part: Part,

    /// Row to start from (1-based), instead of the first open tile
    #[arg(long, requires = "start_col")]
    start_row: Option<usize>,

    /// Column to start from (1-based)
    #[arg(long, requires = "start_row")]
    start_col: Option<usize>,

    /// Direction to face when starting
    #[arg(long, default_value = "east")]
    facing: Direction,

    /// Dump the folded faces and the traversed path
    #[arg(long)]
    dump: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let Args {
        file,
        part,
        start_row,
        start_col,
        facing,
        dump,
    } = Args::parse();

    let (grid, path) = parse_input(&fs::read_to_string(file)?)?;

    let start = Start {
        tile: start_row.zip(start_col),
        facing,
    };

    if matches!(part, Part::Flat | Part::Both) {
        let board = Board::new(grid.clone());
        let (end, trail) = board.replay(&path, &start)?;

        if dump {
            print!("{}", TrailMap { grid: &grid, trail: &trail });
            println!();
        }

        println!("flat: {end}, password = {}", end.password());
    }

    if matches!(part, Part::Cube | Part::Both) {
        let cube = Cube::new(Net::new(&grid)?)?;

        if dump {
            // dump faces for easier understanding of how the net was folded
            print!("{}", FaceMap(&cube));
            println!();
        }

        let (end, trail) = cube.replay(&path, &start)?;

        if dump {
            print!("{}", TrailMap { grid: &grid, trail: &trail });
            println!();
        }

        println!("cube: {end}, password = {}", end.password());
    }

    Ok(())
}
