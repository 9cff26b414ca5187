use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::Parser;
use log::{info, warn};
use warp::Filter;

use hermit::agents::Agent;
use hermit::env::{GameRequest, IndexResponse, MoveResponse, Pos, API_VERSION};
use hermit::game::Board;
use hermit::logging;

pub const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHOR: &str = "hermit";

/// Runtime server configuration.
struct State {
    latency: u64,
    config: Agent,
}

#[derive(Debug, Parser)]
#[command(name = "hermit server", about = "Isolation agent answering move requests.")]
struct Opt {
    /// IP and Port of the webserver.
    /// **Note**: Use the IP Address of your device if you want to access it
    /// from another device. (`127.0.0.1` or `localhost` is private to your
    /// computer)
    #[arg(long, default_value = "127.0.0.1:5001")]
    host: SocketAddr,
    /// Time in ms that is subtracted from the game timeouts.
    #[arg(long, default_value_t = 100)]
    latency: u64,
    /// Default configuration.
    #[arg(long, default_value_t)]
    config: Agent,
}

#[tokio::main]
async fn main() {
    logging();

    let Opt {
        host,
        latency,
        config,
    } = Opt::parse();

    let state = Arc::new(State { latency, config });

    let index = warp::get().and(warp::path::end()).map(|| {
        warn!("index");
        warp::reply::json(&IndexResponse::new(API_VERSION, AUTHOR, PACKAGE_VERSION))
    });

    let start = warp::path("start")
        .and(warp::post())
        .and(warp::body::json::<GameRequest>())
        .map(|request: GameRequest| {
            warn!("start game {}", request.game.id);
            warp::reply()
        });

    let r#move = warp::path("move")
        .and(with_state(state.clone()))
        .and(warp::post())
        .and(warp::body::json::<GameRequest>())
        .and_then(step);

    let end = warp::path("end")
        .and(warp::post())
        .and(warp::body::json::<GameRequest>())
        .map(|request: GameRequest| {
            warn!("end game {}", request.game.id);
            warp::reply()
        });

    warp::serve(index.or(start).or(r#move).or(end))
        .run(host)
        .await
}

fn with_state(
    state: Arc<State>,
) -> impl Filter<Extract = (Arc<State>,), Error = Infallible> + Clone {
    warp::any().map(move || state.clone())
}

async fn step(state: Arc<State>, request: GameRequest) -> Result<impl warp::Reply, Infallible> {
    warn!("move {} game {}", request.turn, request.game.id);

    let timer = Instant::now();
    let budget = request.game.timeout.saturating_sub(state.latency);
    let deadline = timer + Duration::from_millis(budget);

    let next_move = tokio::task::spawn_blocking(move || {
        let board = Board::from_request(&request);
        let time_left =
            || deadline.saturating_duration_since(Instant::now()).as_secs_f64() * 1000.0;
        state.config.select_move(&board, &time_left)
    })
    .await
    .unwrap_or(Pos::NULL);

    info!("response time {:?}ms", timer.elapsed().as_millis());

    Ok(warp::reply::json(&MoveResponse::new(next_move)))
}
