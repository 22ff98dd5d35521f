use crate::{Game, Move};
use std::io::{self, BufRead, Write};

/// Play an interactive Othello game on the console.
pub fn play_interactive() {
    let mut game = Game::new();
    let stdin = io::stdin();

    while !game.is_finished() {
        println!("\n{}", game);

        print!("Enter a move for {}: ", game.to_move());
        io::stdout().flush().unwrap();
        let mut line = String::new();
        stdin.lock().read_line(&mut line).unwrap();

        let mv: Move = match line.trim().parse() {
            Ok(mv) => mv,
            Err(_) => {
                println!("Cannot parse that; enter a square like D3, or 'pass'.");
                continue;
            }
        };

        if let Err(err) = game.apply(mv) {
            if game.legal_moves().is_empty() {
                println!("{}; you must pass.", err);
            } else {
                println!("{}; legal moves: {}", err, game.legal_moves());
            }
        }
    }

    println!("\n{}", game);
    match game.winner() {
        Some(player) => println!(
            "{} wins, {} to {}.",
            player,
            game.count(player),
            game.count(!player)
        ),
        None => println!("Draw."),
    }
}
