use coinslide_solver::engine::{Game, GameStatus, Position, BOARD_SIZE};
use coinslide_solver::results::{GameResult, JsonResultStore};
use coinslide_solver::selector::{MoveSelector, Phase};
use std::io::{self, Write};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

const RESULT_FILE: &str = "results.json";
const BEST_LIMIT: usize = 10;

fn prompt(text: &str) -> Option<String> {
    print!("{}", text);
    io::stdout().flush().ok()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input).ok()?;
    Some(input.trim().to_string())
}

fn record_result(game: &Game, player: String, started: Instant) {
    let store = JsonResultStore::new(RESULT_FILE);
    let result = GameResult {
        player,
        solved: game.status() == GameStatus::Solved,
        moves: game.moves_made(),
        duration: started.elapsed(),
    };
    match store.add(result) {
        Ok(_) => println!("Result saved to {}.", RESULT_FILE),
        Err(e) => println!("Could not save result: {}", e),
    }
    if let Ok(best) = store.best(BEST_LIMIT) {
        if !best.is_empty() {
            println!("\nBest solved games:");
            for (i, r) in best.iter().enumerate() {
                println!("  {}. {} in {} moves", i + 1, r.player, r.moves);
            }
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut game = Game::new();
    let mut selector = MoveSelector::new();
    let started = Instant::now();
    println!("Welcome to the sliding-coin puzzle!");
    println!("Move the four coins to the four corners.");

    loop {
        println!("---------------------");
        println!("Moves made: {}", game.moves_made());
        println!("{}", game.board());

        match game.status() {
            GameStatus::Solved => {
                println!();
                println!("🎉 Solved in {} moves! 🎉", game.moves_made());
                break;
            }
            GameStatus::Stuck => {
                println!();
                println!("No moves left. The puzzle is stuck.");
                break;
            }
            GameStatus::InProgress => {}
        }

        let request = match selector.phase() {
            Phase::SelectingSource => "Select a coin to move (row col), or 'q' to quit: ",
            Phase::SelectingDestination => {
                "Select a destination (row col), 'r' to reselect, 'q' to quit: "
            }
            Phase::ReadyToCommit => unreachable!("pending moves are committed immediately"),
        };

        let Some(input) = prompt(request) else {
            println!("Error reading input. Please try again.");
            continue;
        };

        if input == "q" {
            println!("Thanks for playing!");
            break;
        }
        if input == "r" {
            selector.reset();
            continue;
        }

        let parts: Vec<&str> = input.split_whitespace().collect();
        let coords = if parts.len() == 2 {
            match (parts[0].parse::<i32>(), parts[1].parse::<i32>()) {
                (Ok(row), Ok(col)) => Some(Position::new(row, col)),
                _ => None,
            }
        } else {
            None
        };
        let Some(p) = coords else {
            println!("Invalid input format. Use 'row col', 'r', or 'q'.");
            continue;
        };

        selector.select(game.board(), p);
        if selector.is_invalid_selection() {
            println!(
                "Invalid selection ({}, {}): row and column must be between 0 and {}, \
                 the coin must be movable, and the move must be a clear straight slide.",
                p.row,
                p.col,
                BOARD_SIZE - 1
            );
            continue;
        }
        if selector.is_ready() {
            if let Some(m) = selector.commit(&mut game) {
                println!("Moved {}.", m);
            }
        }
    }

    if let Some(player) = prompt("Enter your name to record this game (empty to skip): ") {
        if !player.is_empty() {
            record_result(&game, player, started);
        }
    }
}
