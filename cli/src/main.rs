use std::io::{self, Write};

use clap::Parser;
use cube_core::{CubeState, DEFAULT_SCRAMBLE_MOVES, parse_alg, scramble};
use itertools::Itertools;

mod render;

use render::render_net;

/// Simulates a 3x3x3 twisty puzzle in the terminal
#[derive(Parser)]
#[command(version, about)]
enum Commands {
    /// Print the solved cube
    Show,
    /// Apply a move sequence to the solved cube and print the result
    Apply {
        /// Whitespace-separated moves, e.g. "R U R' U'"
        alg: String,
    },
    /// Scramble the cube, printing the sequence and the result
    Scramble {
        /// How many random moves to apply
        #[arg(short, long, default_value_t = DEFAULT_SCRAMBLE_MOVES)]
        count: usize,
        /// Seed for a reproducible scramble
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Twist the cube interactively from stdin
    Play,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    pretty_env_logger::init();

    match Commands::parse() {
        Commands::Show => print!("{}", render_net(&CubeState::initial())),
        Commands::Apply { alg } => {
            let moves = parse_alg(&alg)?;
            log::debug!("applying {} moves", moves.len());
            let state = CubeState::initial().apply_all(&moves);
            print!("{}", render_net(&state));
        }
        Commands::Scramble { count, seed } => {
            let mut rng = match seed {
                Some(seed) => fastrand::Rng::with_seed(seed),
                None => fastrand::Rng::new(),
            };
            let (state, sequence) = scramble(&CubeState::initial(), count, &mut rng);
            println!("{}", sequence.iter().join(" "));
            print!("{}", render_net(&state));
        }
        Commands::Play => play()?,
    }

    Ok(())
}

fn play() -> color_eyre::Result<()> {
    let mut state = CubeState::initial();

    println!("Moves: F B R L U D, with ' for counter-clockwise and 2 to double.");
    println!("Words: scramble, reset, quit.");

    loop {
        print!("{}", render_net(&state));
        if state.is_solved() {
            println!("Solved!");
        }
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break Ok(());
        }

        match line.trim() {
            "" => {}
            "quit" | "exit" => break Ok(()),
            "reset" => state.reset(),
            "scramble" => {
                let (scrambled, sequence) =
                    scramble(&state, DEFAULT_SCRAMBLE_MOVES, &mut fastrand::Rng::new());
                println!("{}", sequence.iter().join(" "));
                state = scrambled;
            }
            alg => match parse_alg(alg) {
                Ok(moves) => state = state.apply_all(&moves),
                Err(err) => println!("{err}"),
            },
        }
    }
}
