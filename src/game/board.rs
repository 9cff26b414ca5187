use std::fmt;

use owo_colors::OwoColorize;

use crate::env::{GameRequest, Player, Pos};

/// Knight jumps in the order they are enumerated.
/// This order is fixed so that searches are reproducible.
const KNIGHT_OFFSETS: [(i16, i16); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// A single ply of an isolation game.
///
/// Both players occupy one cell and move like chess knights. Every cell a
/// player leaves is blocked for the rest of the game. A player who cannot
/// move on their turn has lost.
///
/// Applying a move always happens on a fresh copy ([`Board::forecast`]), the
/// parent state is never touched, so search branches cannot interfere with
/// each other.
#[derive(Clone)]
pub struct Board {
    width: usize,
    height: usize,
    blocked: Vec<bool>,
    locations: [Pos; 2],
    active: Player,
    move_count: usize,
}

impl Board {
    pub fn new(width: usize, height: usize, one: Pos, two: Pos) -> Board {
        debug_assert!(one != two);
        let board = Board {
            width,
            height,
            blocked: vec![false; width * height],
            locations: [one, two],
            active: Player::One,
            move_count: 0,
        };
        debug_assert!(board.has(one) && board.has(two));
        board
    }

    /// Loads the board from the provided request.
    /// The player whose move is requested becomes the active player.
    pub fn from_request(request: &GameRequest) -> Board {
        let data = &request.board;
        let mut board = Board::new(data.width, data.height, data.players[0], data.players[1]);
        for &p in &data.blocked {
            if board.has(p) {
                let idx = board.idx(p);
                board.blocked[idx] = true;
            }
        }
        board.active = request.you;
        board.move_count = data.move_count;
        board
    }

    /// Parses a board diagram as used in tests and benchmarks:
    /// `.` free, `#` blocked, `1`/`2` the player locations.
    /// The first line is row `y = 0`; player one is to move.
    pub fn parse(s: &str) -> Option<Board> {
        let rows: Vec<Vec<&str>> = s
            .lines()
            .map(|l| l.split_whitespace().collect::<Vec<_>>())
            .filter(|l| !l.is_empty())
            .collect();
        let height = rows.len();
        let width = rows.first()?.len();

        let mut blocked = vec![false; width * height];
        let mut locations = [Pos::NULL; 2];
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return None;
            }
            for (x, token) in row.iter().enumerate() {
                let p = Pos::new(x as i16, y as i16);
                match *token {
                    "." => {}
                    "#" => blocked[y * width + x] = true,
                    "1" => locations[0] = p,
                    "2" => locations[1] = p,
                    _ => return None,
                }
            }
        }
        if locations[0] == Pos::NULL || locations[1] == Pos::NULL {
            return None;
        }

        Some(Board {
            width,
            height,
            blocked,
            locations,
            active: Player::One,
            move_count: 0,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of plies played so far.
    /// Strictly increases along any forecast chain.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// The player whose turn it is.
    pub fn active(&self) -> Player {
        self.active
    }

    pub fn location(&self, player: Player) -> Pos {
        self.locations[player.idx()]
    }

    pub fn has(&self, p: Pos) -> bool {
        0 <= p.x && p.x < self.width as i16 && 0 <= p.y && p.y < self.height as i16
    }

    fn idx(&self, p: Pos) -> usize {
        p.y as usize * self.width + p.x as usize
    }

    /// A cell that can still be moved onto: on the board, never visited, and
    /// not occupied by either player.
    pub fn is_free(&self, p: Pos) -> bool {
        self.has(p) && !self.blocked[self.idx(p)] && p != self.locations[0] && p != self.locations[1]
    }

    /// All legal moves of `player` in a deterministic order.
    pub fn legal_moves(&self, player: Player) -> Vec<Pos> {
        let Pos { x, y } = self.locations[player.idx()];
        KNIGHT_OFFSETS
            .iter()
            .map(|&(dx, dy)| Pos::new(x + dx, y + dy))
            .filter(|&p| self.is_free(p))
            .collect()
    }

    pub fn move_is_legal(&self, player: Player, mv: Pos) -> bool {
        let Pos { x, y } = self.locations[player.idx()];
        KNIGHT_OFFSETS
            .iter()
            .any(|&(dx, dy)| mv == Pos::new(x + dx, y + dy))
            && self.is_free(mv)
    }

    /// Executes a move of the active player: their current cell becomes
    /// blocked and the turn passes to the opponent.
    ///
    /// The move must be legal.
    pub fn apply(&mut self, mv: Pos) {
        debug_assert!(self.move_is_legal(self.active, mv));
        let idx = self.idx(self.locations[self.active.idx()]);
        self.blocked[idx] = true;
        self.locations[self.active.idx()] = mv;
        self.move_count += 1;
        self.active = self.active.opponent();
    }

    /// Returns the state after the active player made `mv`,
    /// leaving this state untouched.
    pub fn forecast(&self, mv: Pos) -> Board {
        let mut next = self.clone();
        next.apply(mv);
        next
    }

    /// `player` has lost: it is their turn and they cannot move.
    pub fn is_loser(&self, player: Player) -> bool {
        self.active == player && self.legal_moves(player).is_empty()
    }

    /// `player` has won: the opponent is to move and cannot.
    pub fn is_winner(&self, player: Player) -> bool {
        let opponent = player.opponent();
        self.active == opponent && self.legal_moves(opponent).is_empty()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board(move {}, {:?} to play)",
            self.move_count, self.active
        )?;
        for y in 0..self.height as i16 {
            for x in 0..self.width as i16 {
                let p = Pos::new(x, y);
                if p == self.locations[0] {
                    write!(f, "{} ", "P1".bright_green())?;
                } else if p == self.locations[1] {
                    write!(f, "{} ", "P2".bright_red())?;
                } else if self.blocked[self.idx(p)] {
                    write!(f, "## ")?;
                } else {
                    write!(f, "__ ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_and_accessors() {
        let board = Board::parse(
            r#"
            1 . #
            . . .
            . . 2"#,
        )
        .unwrap();

        assert_eq!(board.width(), 3);
        assert_eq!(board.height(), 3);
        assert_eq!(board.move_count(), 0);
        assert_eq!(board.active(), Player::One);
        assert_eq!(board.location(Player::One), Pos::new(0, 0));
        assert_eq!(board.location(Player::Two), Pos::new(2, 2));
        assert!(!board.is_free(Pos::new(2, 0)));
        assert!(board.is_free(Pos::new(1, 1)));
    }

    #[test]
    fn legal_move_order_is_stable() {
        let board = Board::parse(
            r#"
            . . . . .
            . . . . .
            . . 1 . .
            . . . 2 .
            . . . . ."#,
        )
        .unwrap();

        // Knight jumps from (2,2) in offset order.
        let expected = vec![
            Pos::new(0, 1),
            Pos::new(0, 3),
            Pos::new(1, 0),
            Pos::new(1, 4),
            Pos::new(3, 0),
            Pos::new(3, 4),
            Pos::new(4, 1),
            Pos::new(4, 3),
        ];
        assert_eq!(board.legal_moves(Player::One), expected);
        assert_eq!(board.legal_moves(Player::One), expected);
    }

    #[test]
    fn moves_exclude_blocked_and_occupied() {
        let board = Board::parse(
            r#"
            # . . .
            . . 2 .
            1 . . .
            . . . ."#,
        )
        .unwrap();

        // From (0,2): (2,1) holds player two, the rest is off the board.
        assert_eq!(
            board.legal_moves(Player::One),
            vec![Pos::new(1, 0), Pos::new(2, 3)]
        );
        // From (2,1): (0,0) is blocked and (0,2) holds player one.
        assert_eq!(
            board.legal_moves(Player::Two),
            vec![Pos::new(1, 3), Pos::new(3, 3)]
        );
    }

    #[test]
    fn apply_blocks_origin_and_flips_turn() {
        let mut board = Board::parse(
            r#"
            1 . .
            . . .
            . . 2"#,
        )
        .unwrap();

        board.apply(Pos::new(1, 2));
        assert_eq!(board.move_count(), 1);
        assert_eq!(board.active(), Player::Two);
        assert_eq!(board.location(Player::One), Pos::new(1, 2));
        assert!(!board.is_free(Pos::new(0, 0)));
    }

    #[test]
    fn forecast_does_not_alias_parent() {
        let board = Board::parse(
            r#"
            1 . .
            . . .
            . . 2"#,
        )
        .unwrap();

        let before = board.legal_moves(Player::One);
        for &mv in &before {
            let child = board.forecast(mv);
            assert_eq!(child.move_count(), board.move_count() + 1);
            // Parent is unchanged after each forecast.
            assert_eq!(board.legal_moves(Player::One), before);
            assert_eq!(board.location(Player::One), Pos::new(0, 0));
            assert_eq!(board.active(), Player::One);
            assert!(board.is_free(mv));
            assert_eq!(child.location(Player::One), mv);
        }
    }

    #[test]
    fn winner_and_loser() {
        // Player one is boxed in: all knight targets from the corner are
        // blocked.
        let board = Board::parse(
            r#"
            1 . .
            . . #
            . # 2"#,
        )
        .unwrap();

        assert!(board.is_loser(Player::One));
        assert!(board.is_winner(Player::Two));
        assert!(!board.is_loser(Player::Two));
        assert!(!board.is_winner(Player::One));
        assert!(board.legal_moves(Player::One).is_empty());
    }

    #[test]
    fn from_request() {
        let request: GameRequest = serde_json::from_str(
            r#"{
                "game": {"id": "g1", "timeout": 150},
                "turn": 3,
                "board": {
                    "width": 7, "height": 7,
                    "blocked": [{"x": 1, "y": 2}, {"x": 3, "y": 3}],
                    "players": [{"x": 0, "y": 0}, {"x": 6, "y": 6}],
                    "move_count": 6
                },
                "you": "two"
            }"#,
        )
        .unwrap();

        let board = Board::from_request(&request);
        assert_eq!(board.active(), Player::Two);
        assert_eq!(board.move_count(), 6);
        assert!(!board.is_free(Pos::new(1, 2)));
        assert!(!board.is_free(Pos::new(3, 3)));
        assert_eq!(board.location(Player::Two), Pos::new(6, 6));
    }
}
