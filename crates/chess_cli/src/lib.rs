//! Interactive console front end: player selection, the turn loop, board
//! rendering and move entry.

use std::io::{self, Write};

use chess_core::{Board, Color, CoordError, Move, Square};
use chess_engine::Engine;
use log::warn;

/// The game-over predicate handed to the engine and consulted by the turn
/// loop: the side to move has lost its king, is checkmated, or is
/// stalemated.
pub fn game_over(board: &Board, to_move: Color) -> bool {
    board.king_square(to_move).is_none()
        || board.is_checkmate(to_move)
        || board.is_stalemate(to_move)
}

pub enum Player {
    Human { name: String },
    Machine { name: String, engine: Engine },
}

impl Player {
    pub fn human(name: &str) -> Self {
        Player::Human {
            name: name.to_string(),
        }
    }

    pub fn machine(name: &str, color: Color) -> Self {
        Player::Machine {
            name: name.to_string(),
            engine: Engine::new(color),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Player::Human { name } | Player::Machine { name, .. } => name,
        }
    }
}

pub struct Game {
    board: Board,
    turn: Color,
    white: Player,
    black: Player,
}

impl Game {
    pub fn new(white: Player, black: Player) -> Self {
        Self {
            board: Board::standard(),
            turn: Color::White,
            white,
            black,
        }
    }

    /// Runs the game to completion: render, check for an ending, take a
    /// turn, alternate colors.
    pub fn play(&mut self) {
        loop {
            println!("{}", self.board);
            if self.announce_outcome() {
                break;
            }
            if !self.take_turn() {
                break;
            }
            self.turn = self.turn.opposite();
        }
    }

    fn current_player(&self) -> &Player {
        match self.turn {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    fn next_player(&self) -> &Player {
        match self.turn {
            Color::White => &self.black,
            Color::Black => &self.white,
        }
    }

    fn announce_outcome(&self) -> bool {
        let color = self.turn;
        if self.board.king_square(color).is_none() {
            let winner = self.next_player();
            println!("KING DEAD! {} ({}) WINS!", winner.name(), color.opposite());
            return true;
        }
        if self.board.is_checkmate(color) {
            let winner = self.next_player();
            println!("CHECKMATE! {} ({}) WINS!", winner.name(), color.opposite());
            return true;
        }
        if self.board.is_stalemate(color) {
            println!("STALEMATE!");
            return true;
        }
        false
    }

    fn take_turn(&mut self) -> bool {
        enum Turn {
            Human(String),
            Machine(String, Engine),
        }
        let turn = match self.current_player() {
            Player::Human { name } => Turn::Human(name.clone()),
            Player::Machine { name, engine } => Turn::Machine(name.clone(), engine.clone()),
        };
        match turn {
            Turn::Human(name) => self.human_turn(&name),
            Turn::Machine(name, engine) => self.machine_turn(&name, &engine),
        }
    }

    /// Prompts until a move is applied. Malformed coordinates, off-board
    /// squares and illegal moves all re-prompt; end of input abandons the
    /// game.
    fn human_turn(&mut self, name: &str) -> bool {
        let mover = self.turn;
        loop {
            let Some(text) = read_line(&format!("{}'s ({}) turn: ", title(mover), name)) else {
                return false;
            };
            let action = match parse_move(&text) {
                Ok(action) => action,
                Err(err) => {
                    println!("{err}");
                    continue;
                }
            };
            match self.board.move_piece(action.from, action.to, mover) {
                Ok(true) => return true,
                Ok(false) => println!("Invalid move"),
                Err(err) => println!("{err}"),
            }
        }
    }

    fn machine_turn(&mut self, name: &str, engine: &Engine) -> bool {
        let mover = self.turn;
        let Some(action) = engine.select_move(&self.board, &game_over) else {
            println!("{} ({}) has no move to play", name, mover);
            return false;
        };
        println!("{}'s ({}) turn:  {}", title(mover), name, action);
        match self.board.move_piece(action.from, action.to, mover) {
            Ok(true) => true,
            Ok(false) | Err(_) => {
                warn!("engine proposed a move the board rejected: {action}");
                false
            }
        }
    }
}

/// Reads a whitespace-separated move like `E7 E5`.
fn parse_move(text: &str) -> Result<Move, CoordError> {
    let mut tokens = text.split_whitespace();
    let from = Square::from_text(tokens.next().unwrap_or(""))?;
    let to = Square::from_text(tokens.next().unwrap_or(""))?;
    Ok(Move::new(from, to))
}

fn title(color: Color) -> &'static str {
    match color {
        Color::White => "White",
        Color::Black => "Black",
    }
}

fn read_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    io::stdout().flush().ok()?;
    let mut buffer = String::new();
    let read = io::stdin().read_line(&mut buffer).ok()?;
    if read == 0 {
        return None;
    }
    Some(buffer.trim().to_string())
}

/// Entry point: prompt for the player lineup, then run the game.
pub fn run() {
    let Some(count) = read_line("Enter number of players (1 or 2): ") else {
        return;
    };
    match count.as_str() {
        "1" => {
            let Some(color) = read_line("Enter color (white or black): ") else {
                return;
            };
            let (white, black) = match color.as_str() {
                "white" => (
                    Player::human("Human"),
                    Player::machine("AI-Bartholomew", Color::Black),
                ),
                "black" => (
                    Player::machine("AI-Bartholomew", Color::White),
                    Player::human("Human"),
                ),
                _ => {
                    println!("Invalid color");
                    return;
                }
            };
            Game::new(white, black).play();
        }
        "2" => Game::new(Player::human("Human 1"), Player::human("Human 2")).play(),
        _ => println!("Invalid number of players"),
    }
}
