use std::time::{Duration, Instant};

use clap::Parser;
use log::info;

use hermit::agents::Agent;
use hermit::env::GameRequest;
use hermit::game::Board;
use hermit::logging;

#[derive(Debug, Parser)]
#[command(name = "hermit move", about = "Evaluate a single move request.")]
struct Opts {
    /// Default configuration.
    #[arg(long, default_value_t)]
    config: Agent,
    /// JSON Game request.
    #[arg(value_parser = parse_request)]
    request: GameRequest,
    /// Time in ms that is subtracted from the game timeouts.
    #[arg(long, default_value_t = 200)]
    latency: u64,
}

fn parse_request(s: &str) -> Result<GameRequest, serde_json::Error> {
    serde_json::from_str(s)
}

fn main() {
    logging();

    let Opts {
        config,
        request,
        latency,
    } = Opts::parse();

    let board = Board::from_request(&request);
    info!("{:?}", board);

    let budget = request.game.timeout.saturating_sub(latency);
    let deadline = Instant::now() + Duration::from_millis(budget);
    let time_left = || deadline.saturating_duration_since(Instant::now()).as_secs_f64() * 1000.0;

    let next_move = config.select_move(&board, &time_left);

    info!("Move: {:?}", next_move);
}
