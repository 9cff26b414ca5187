use serde::{Deserialize, Serialize};

pub const API_VERSION: &str = "1";

/// A cell on the board.
///
/// `Pos::NULL` is the "no move available" sentinel returned by the agents
/// when the mover is already isolated.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: i16,
    pub y: i16,
}

impl Pos {
    pub const NULL: Pos = Pos { x: -1, y: -1 };

    pub fn new(x: i16, y: i16) -> Pos {
        Pos { x, y }
    }
}

impl Default for Pos {
    fn default() -> Pos {
        Pos::NULL
    }
}

impl From<(i16, i16)> for Pos {
    fn from(val: (i16, i16)) -> Self {
        Pos::new(val.0, val.1)
    }
}

/// One of the two competitors.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn idx(self) -> usize {
        self as usize
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct GameData {
    pub id: String,
    /// Time budget per move in milliseconds.
    pub timeout: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BoardData {
    pub width: usize,
    pub height: usize,
    pub blocked: Vec<Pos>,
    /// Current locations, player one first.
    pub players: [Pos; 2],
    #[serde(default)]
    pub move_count: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GameRequest {
    pub game: GameData,
    pub turn: usize,
    pub board: BoardData,
    /// The player whose move is requested; it is their turn.
    pub you: Player,
}

#[derive(Serialize, Debug)]
pub struct IndexResponse {
    pub apiversion: &'static str,
    pub author: &'static str,
    pub version: &'static str,
}

impl IndexResponse {
    pub fn new(apiversion: &'static str, author: &'static str, version: &'static str) -> Self {
        IndexResponse {
            apiversion,
            author,
            version,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct MoveResponse {
    pub r#move: Pos,
}

impl MoveResponse {
    pub fn new(r#move: Pos) -> MoveResponse {
        MoveResponse { r#move }
    }
}

impl Default for MoveResponse {
    fn default() -> MoveResponse {
        MoveResponse::new(Pos::NULL)
    }
}
