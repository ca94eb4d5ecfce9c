use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use std::io::{stdin, stdout, Write};

use connect4_minimax::{
    board::{Board, Color, Game, GameState},
    player::{MinimaxPlayer, Player, SearchConfig},
    DEFAULT_SIZE,
};

mod display;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("Welcome to Connect 4\n");

    loop {
        match ask("Play a game or compare move ordering? p/c: ")?
            .to_lowercase()
            .chars()
            .next()
        {
            Some('p') => return play(),
            Some('c') => return compare(),
            _ => println!("Unknown answer given"),
        }
    }
}

fn play() -> Result<()> {
    let size = ask_size()?;
    let mut game = Game::new(size)?;

    let ai_players = (
        ask_yes_no("Is player 1 AI controlled? y/n: ")?,
        ask_yes_no("Is player 2 AI controlled? y/n: ")?,
    );
    let mut agent = if ai_players.0 || ai_players.1 {
        let config = ask_config()?;
        Some(MinimaxPlayer::with_config(config))
    } else {
        None
    };

    // game loop
    loop {
        display::draw(game.board()).expect("Failed to draw board!");

        match game.state {
            GameState::Playing => {
                let ai_turn = match game.to_move {
                    Color::PlayerOne => ai_players.0,
                    Color::PlayerTwo => ai_players.1,
                };
                let next_move = match agent.as_mut() {
                    // AI player
                    Some(agent) if ai_turn => {
                        println!("{} is thinking...", agent.name());
                        stdout().flush().expect("Failed to flush to stdout!");

                        // slow down play if both players are AI
                        if ai_players == (true, true) {
                            std::thread::sleep(std::time::Duration::new(1, 0));
                        }

                        let column = agent.select_move(game.board(), game.to_move)?;
                        println!("Best move: {}", column + 1);
                        column + 1
                    }
                    // human player
                    _ => {
                        let input_str = ask("Move input > ")?;
                        match input_str.trim().parse::<usize>() {
                            Err(_) => {
                                println!("Invalid number: {}", input_str.trim());
                                continue;
                            }
                            Ok(column) => column,
                        }
                    }
                };

                if let Err(err) = game.play_checked(next_move) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
            }

            // end states
            GameState::PlayerOneWin => {
                println!("Player 1 wins!");
                break;
            }
            GameState::PlayerTwoWin => {
                println!("Player 2 wins!");
                break;
            }
            GameState::Draw => {
                println!("Draw!");
                break;
            }
        }
    }
    info!("game over after moves {}", game.moves);
    Ok(())
}

/// Searches one position with and without move ordering at every depth up
/// to a maximum, reporting the chosen columns and the evaluation counts
fn compare() -> Result<()> {
    let size = ask_size()?;
    let board = loop {
        match Board::from_moves(size, ask("Position as a move string (empty for a new game) > ")?.trim()) {
            Ok(board) => break board,
            Err(err) => println!("{}", err),
        }
    };
    let max_depth = ask_config()?.depth();
    let color = if board.num_moves() % 2 == 0 {
        Color::PlayerOne
    } else {
        Color::PlayerTwo
    };

    let progress = ProgressBar::new(max_depth as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} depth {pos}/{len} {msg}")
            .progress_chars("##-"),
    );

    let mut rows = Vec::new();
    for depth in 1..=max_depth as i32 {
        progress.set_message(&format!("searching depth {}", depth));
        let mut ordered = MinimaxPlayer::with_config(SearchConfig::new(depth)?);
        let mut unordered =
            MinimaxPlayer::with_config(SearchConfig::new(depth)?.with_move_ordering(false));

        let (ordered_move, unordered_move) = rayon::join(
            || ordered.select_move(&board, color),
            || unordered.select_move(&board, color),
        );
        rows.push((depth, ordered_move?, unordered_move?, ordered.last_stats(), unordered.last_stats()));
        progress.inc(1);
    }
    progress.finish_with_message("done");

    println!(
        "{:>5} {:>6} {:>12} {:>12} {:>12}",
        "depth", "column", "ordered", "(+ordering)", "unordered"
    );
    for (depth, ordered_move, unordered_move, ordered, unordered) in rows {
        // both searches must agree on the move, ordering only changes the work done
        assert_eq!(ordered_move, unordered_move);
        println!(
            "{:>5} {:>6} {:>12} {:>12} {:>12}",
            depth,
            ordered_move + 1,
            ordered.leaf_evaluations,
            ordered.ordering_evaluations,
            unordered.leaf_evaluations
        );
    }
    Ok(())
}

fn ask(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    stdout().flush().expect("failed to flush to stdout!");

    let mut buffer = String::new();
    stdin().read_line(&mut buffer)?;
    Ok(buffer)
}

fn ask_yes_no(prompt: &str) -> Result<bool> {
    loop {
        match ask(prompt)?.to_lowercase().chars().next() {
            Some('y') => return Ok(true),
            Some('n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}

fn ask_size() -> Result<usize> {
    loop {
        let answer = ask(&format!("Board size (empty for {}) > ", DEFAULT_SIZE))?;
        if answer.trim().is_empty() {
            return Ok(DEFAULT_SIZE);
        }
        match answer.trim().parse::<usize>() {
            Ok(size) => match Board::new(size) {
                Ok(_) => return Ok(size),
                Err(err) => println!("{}", err),
            },
            Err(_) => println!("Invalid number: {}", answer.trim()),
        }
    }
}

fn ask_config() -> Result<SearchConfig> {
    loop {
        let answer = ask("Search depth > ")?;
        match answer.trim().parse::<i32>().map(SearchConfig::new) {
            Ok(Ok(config)) => return Ok(config),
            Ok(Err(err)) => println!("{}", err),
            Err(_) => println!("Invalid number: {}", answer.trim()),
        }
    }
}
