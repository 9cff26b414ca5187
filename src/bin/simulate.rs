use std::time::{Duration, Instant};

use clap::Parser;
use owo_colors::OwoColorize;
use rand::rngs::SmallRng;
use rand::seq::IteratorRandom;
use rand::{Rng, SeedableRng};

use hermit::agents::Agent;
use hermit::env::{Player, Pos};
use hermit::game::Board;
use hermit::logging;

#[derive(Debug, Parser)]
#[command(
    name = "hermit simulator",
    about = "Simulate games between two agents."
)]
struct Opts {
    /// Time budget per move in ms.
    #[arg(long, default_value_t = 200)]
    runtime: u64,
    #[arg(long, default_value_t = 7)]
    width: usize,
    #[arg(long, default_value_t = 7)]
    height: usize,
    /// Fraction of cells blocked before the game starts.
    #[arg(long, default_value_t = 0.0)]
    blocked_rate: f64,
    #[arg(short, long, default_value_t = 1)]
    game_count: usize,
    #[arg(short, long)]
    verbose: bool,

    /// The two contestants, player one first.
    agents: Vec<Agent>,
}

fn main() {
    logging();

    let Opts {
        runtime,
        width,
        height,
        blocked_rate,
        game_count,
        verbose,
        agents,
    } = Opts::parse();

    assert_eq!(agents.len(), 2, "Exactly two agents are required");

    let start = Instant::now();
    let mut wins = 0;

    for i in 0..game_count {
        let win = play_game(&agents, width, height, runtime, blocked_rate, verbose);
        wins += win as usize;
        println!(
            "{}: {} {}ms",
            "Finish Game".bright_green(),
            i,
            start.elapsed().as_millis()
        );
    }

    println!("Result: {}/{}", wins, game_count);
}

fn init_game(width: usize, height: usize, blocked_rate: f64) -> Board {
    let mut rng = SmallRng::from_entropy();
    let start_positions = (0..width * height)
        .map(|i| Pos::new((i % width) as i16, (i / width) as i16))
        .choose_multiple(&mut rng, 2);

    let mut diagram = String::new();
    for y in 0..height as i16 {
        for x in 0..width as i16 {
            let p = Pos::new(x, y);
            if p == start_positions[0] {
                diagram.push_str("1 ");
            } else if p == start_positions[1] {
                diagram.push_str("2 ");
            } else if rng.gen::<f64>() < blocked_rate {
                diagram.push_str("# ");
            } else {
                diagram.push_str(". ");
            }
        }
        diagram.push('\n');
    }

    Board::parse(&diagram).expect("generated board is valid")
}

/// Plays a single game and returns whether the first agent won.
fn play_game(
    agents: &[Agent],
    width: usize,
    height: usize,
    runtime: u64,
    blocked_rate: f64,
    verbose: bool,
) -> bool {
    let mut board = init_game(width, height, blocked_rate);

    if verbose {
        println!("init: {:?}", board);
    }

    loop {
        let me = board.active();
        let deadline = Instant::now() + Duration::from_millis(runtime);
        let time_left =
            || deadline.saturating_duration_since(Instant::now()).as_secs_f64() * 1000.0;

        let mv = agents[me.idx()].select_move(&board, &time_left);
        if mv == Pos::NULL || !board.move_is_legal(me, mv) {
            println!(
                "game: {:?} gives up after {} moves",
                me,
                board.move_count()
            );
            return me == Player::Two;
        }

        board.apply(mv);
        if verbose {
            println!("{}: {:?}", board.move_count(), board);
        }
    }
}
