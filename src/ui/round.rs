use super::{prompt, show_instructions, show_statistics};
use crate::game::StatsStore;
use crate::model::{
    Command, Confirm, Difficulty, Feedback, Hint, RoundOutcome, Session, Submission,
};
use itertools::Itertools;
use log::warn;
use std::io;

enum RoundEnd {
    Completed,
    Restart,
    Quit,
}

/// Plays rounds back to back until the player quits or declines another
/// round, then drops back to the main menu.
pub fn play(store: &mut StatsStore, difficulty: Difficulty) -> io::Result<()> {
    loop {
        match play_round(store, difficulty)? {
            RoundEnd::Quit => break,
            RoundEnd::Restart => continue,
            RoundEnd::Completed => {
                if !ask_play_again()? {
                    break;
                }
            }
        }
    }

    println!("\nBack to the main menu...");
    Ok(())
}

fn seed_from_env() -> Option<u64> {
    std::env::var("SEED").ok().and_then(|v| v.parse::<u64>().ok())
}

fn play_round(store: &mut StatsStore, difficulty: Difficulty) -> io::Result<RoundEnd> {
    let (lower, upper) = difficulty.bounds();
    let mut session = match Session::start(lower, upper, difficulty.ceiling(), seed_from_env()) {
        Ok(session) => session,
        // difficulties are validated on entry, but a config rejection
        // here still must not crash the menu
        Err(e) => {
            println!("{}", e);
            return Ok(RoundEnd::Quit);
        }
    };

    println!(
        "\nNew round! I picked a number between {} and {}.",
        lower, upper
    );

    while !session.is_over() {
        show_progress(&session);

        let raw = match prompt(&format!(
            "Attempt {}/{}. Enter a number: ",
            session.attempts() + 1,
            session.ceiling()
        ))? {
            Some(line) => line,
            None => {
                session.abandon();
                return Ok(RoundEnd::Quit);
            }
        };

        let submission = match session.submit_guess(&raw) {
            Ok(submission) => submission,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        let guess = match submission {
            Submission::Command(Command::Quit) => {
                session.abandon();
                return Ok(RoundEnd::Quit);
            }
            Submission::Command(Command::Help) => {
                show_instructions(difficulty);
                continue;
            }
            Submission::Command(Command::Stats) => {
                show_statistics(store.record());
                continue;
            }
            Submission::Command(Command::Restart) => {
                session.abandon();
                return Ok(RoundEnd::Restart);
            }
            Submission::Accepted(guess) => guess,
        };

        match session.evaluate(guess) {
            Feedback::Win => {
                println!(
                    "Congratulations! You guessed {} in {} attempts!",
                    session.target(),
                    session.attempts()
                );
                finish_round(store, &session, RoundOutcome::Win);
            }
            feedback => {
                if feedback == Feedback::TooLow {
                    println!("Too low! Try a bigger number.");
                } else {
                    println!("Too high! Try a smaller number.");
                }

                // proximity hints fire even on the guess that exhausts
                // the ceiling, ahead of the loss reveal
                if let Some(hint) = session.hint(guess) {
                    println!("   {}", hint_text(hint));
                }

                if session.is_over() {
                    println!("\nYou are out of attempts!");
                    println!("The number was: {}", session.target());
                    finish_round(store, &session, RoundOutcome::Loss);
                }
            }
        }
    }

    Ok(RoundEnd::Completed)
}

fn hint_text(hint: Hint) -> &'static str {
    match hint {
        Hint::VeryClose => "Very close! Almost there!",
        Hint::FairlyClose => "Fairly close! Keep it up!",
        Hint::Parity { even: true } => "Hint: the number is even!",
        Hint::Parity { even: false } => "Hint: the number is odd!",
    }
}

fn show_progress(session: &Session) {
    let filled = session.attempts() as usize;
    let remaining = (session.ceiling() - session.attempts()) as usize;
    println!(
        "Progress: [{}{}] {}/{} attempts",
        "█".repeat(filled),
        "░".repeat(remaining),
        session.attempts(),
        session.ceiling()
    );
    if !session.used_guesses().is_empty() {
        println!(
            "Used numbers: {}",
            session.used_guesses().iter().sorted().join(", ")
        );
    }
}

/// Statistics loss is non-fatal: a failed write is reported and the game
/// carries on.
fn finish_round(store: &mut StatsStore, session: &Session, outcome: RoundOutcome) {
    if let Err(e) = store.record_round(
        outcome,
        session.attempts(),
        session.target(),
        session.used_guesses().to_vec(),
    ) {
        warn!(target: "round", "Failed to persist statistics: {}", e);
        println!("Warning: could not save statistics ({}).", e);
    }
}

fn ask_play_again() -> io::Result<bool> {
    loop {
        match prompt("\nPlay another round? (y/n): ")? {
            None => return Ok(false),
            Some(line) => match Confirm::parse(&line) {
                Some(Confirm::Yes) => return Ok(true),
                Some(Confirm::No) => return Ok(false),
                None => println!("Please answer 'y' (yes) or 'n' (no)."),
            },
        }
    }
}
