//! Console front-end: mode selection, input collection, and rendering.

use std::env;
use std::io::{self, BufRead, Write};

use pentago::{
    Board, ComputerPlayer, GameOutcome, GameRng, GameSession, Phase, PieceColor, Placement,
    Player, RotationChoice, SearchConfig,
};

/// A player driven by console input.
///
/// Only syntax is validated here; occupancy and skip legality are the
/// session's call, and the game loop re-prompts on its errors.
struct HumanPlayer {
    name: String,
    color: PieceColor,
}

impl HumanPlayer {
    fn new(name: impl Into<String>, color: PieceColor) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

impl Player for HumanPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn color(&self) -> PieceColor {
        self.color
    }

    fn choose_placement(&mut self, _board: &Board) -> Placement {
        loop {
            let line = prompt(&format!("{} ({}) placement:", self.name, self.color));
            match line.parse() {
                Ok(placement) => return placement,
                Err(err) => println!("{err}"),
            }
        }
    }

    fn choose_rotation(&mut self, _board: &Board) -> RotationChoice {
        loop {
            let line = prompt(&format!("{} ({}) rotation/skip:", self.name, self.color));
            match line.parse() {
                Ok(rotation) => return rotation,
                Err(err) => println!("{err}"),
            }
        }
    }
}

fn prompt(message: &str) -> String {
    print!("{message} ");
    io::stdout().flush().expect("flush stdout");
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .expect("read stdin");
    line.trim_end().to_string()
}

fn main() {
    // Default to warnings only; RUST_LOG=debug exposes search diagnostics.
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "warn");
    }
    env_logger::init();

    loop {
        println!("Please select game mode,");
        println!("0. Exit");
        println!("1. One player (play with computer)");
        println!("2. Two player (play with opponent)");
        match prompt(">").as_str() {
            "0" => return,
            "1" => {
                let (first, second) = draw_colors();
                let mut players: [Box<dyn Player>; 2] = [
                    Box::new(HumanPlayer::new("Player1", first)),
                    Box::new(ComputerPlayer::new("Computer", second, SearchConfig::default())),
                ];
                play(&mut players);
            }
            "2" => {
                let (first, second) = draw_colors();
                let mut players: [Box<dyn Player>; 2] = [
                    Box::new(HumanPlayer::new("Player1", first)),
                    Box::new(HumanPlayer::new("Player2", second)),
                ];
                play(&mut players);
            }
            _ => println!("Invalid game mode, try again"),
        }
    }
}

/// Randomly assign colors to the two seats.
fn draw_colors() -> (PieceColor, PieceColor) {
    let mut rng = GameRng::from_entropy();
    let first = if rng.gen_bool() {
        PieceColor::Red
    } else {
        PieceColor::Black
    };
    (first, first.opponent())
}

fn play(players: &mut [Box<dyn Player>; 2]) {
    for player in players.iter() {
        println!("{} plays {}", player.name(), player.color());
    }

    let mut session = GameSession::new();
    while session.phase() != Phase::Finished {
        println!("{}", session.board());
        let current = seat_of(players, session.turn());

        loop {
            let placement = players[current].choose_placement(session.board());
            match session.place(placement) {
                Ok(()) => {
                    println!("{} places \"{placement}\"", players[current].name());
                    break;
                }
                Err(err) => println!("{err}"),
            }
        }
        if session.phase() == Phase::Finished {
            break;
        }

        loop {
            let rotation = players[current].choose_rotation(session.board());
            match session.rotate(rotation) {
                Ok(()) => {
                    println!("{} rotates \"{rotation}\"", players[current].name());
                    break;
                }
                Err(err) => println!("{err}"),
            }
        }
    }

    println!("{}", session.board());
    match session.outcome() {
        Some(GameOutcome::Winner(color)) => {
            let winner = seat_of(players, color);
            println!("{} Wins", players[winner].name());
        }
        _ => println!("Tie!!"),
    }
}

fn seat_of(players: &[Box<dyn Player>; 2], color: PieceColor) -> usize {
    usize::from(players[0].color() != color)
}
