mod round;

use crate::game::StatsStore;
use crate::model::{Difficulty, StatisticsRecord};
use std::io::{self, Write};
use std::str::FromStr;

/// Main menu loop. Returns when the player exits or stdin closes.
pub fn run() -> io::Result<()> {
    let mut store = StatsStore::open_default();
    let mut difficulty = Difficulty::default();

    println!("WELCOME TO HILO, THE NUMBER GUESSING GAME!");

    loop {
        println!();
        println!("{}", "=".repeat(30));
        println!("MAIN MENU");
        println!("{}", "=".repeat(30));
        println!("1. Play");
        println!("2. Instructions");
        println!("3. Statistics");
        println!("4. Difficulty: {}", difficulty.label());
        println!("5. Exit");

        let choice = match prompt("\nChoose an option (1-5): ")? {
            Some(line) => line,
            None => break,
        };

        match choice.as_str() {
            "1" => round::play(&mut store, difficulty)?,
            "2" => show_instructions(difficulty),
            "3" => show_statistics(store.record()),
            "4" => difficulty = change_difficulty(difficulty)?,
            "5" => break,
            _ => println!("Please choose a number between 1 and 5."),
        }
    }

    println!("Thanks for playing! Goodbye!");
    Ok(())
}

/// Prints a prompt and reads one trimmed line. `None` means stdin closed,
/// which every caller treats as a quiet exit.
pub(crate) fn prompt(message: &str) -> io::Result<Option<String>> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

pub(crate) fn show_instructions(difficulty: Difficulty) {
    let (lower, upper) = difficulty.bounds();
    println!();
    println!("{}", "=".repeat(50));
    println!("HOW TO PLAY");
    println!("{}", "=".repeat(50));
    println!("I pick a number between {} and {}.", lower, upper);
    println!(
        "You have {} attempts to guess it!",
        difficulty.ceiling()
    );
    println!();
    println!("After every guess I will tell you:");
    println!("  'Too low'  - your number is below mine");
    println!("  'Too high' - your number is above mine");
    println!("  'Congratulations!' - you found it!");
    println!();
    println!("Commands at the guess prompt:");
    println!("  'help'    - show these instructions");
    println!("  'stats'   - show your play statistics");
    println!("  'restart' - start a new round");
    println!("  'quit'    - leave the round");
    println!("{}", "=".repeat(50));
}

pub(crate) fn show_statistics(record: &StatisticsRecord) {
    println!();
    println!("{}", "=".repeat(40));
    println!("PLAY STATISTICS");
    println!("{}", "=".repeat(40));

    let summary = match record.summarize() {
        Some(summary) => summary,
        None => {
            println!("No statistics yet. Play at least one game!");
            return;
        }
    };

    println!("Games played: {}", summary.games_played);
    println!(
        "Games won: {} ({:.1}%)",
        summary.games_won, summary.win_rate
    );
    if let Some(best) = summary.best_score {
        println!("Best result: {} attempts", best);
    }
    if let Some(mean) = summary.mean_attempts {
        println!("Average attempts per win: {:.1}", mean);
    }
    println!("Current win streak: {}", summary.current_streak);
    println!("Best win streak: {}", summary.win_streak);
    println!("{}", "=".repeat(40));
}

fn change_difficulty(current: Difficulty) -> io::Result<Difficulty> {
    println!();
    println!("{}", "=".repeat(30));
    println!("DIFFICULTY");
    println!("{}", "=".repeat(30));
    let presets = Difficulty::presets();
    for (index, preset) in presets.iter().enumerate() {
        println!("{}. {}", index + 1, preset.label());
    }
    println!("{}. Configure manually", presets.len() + 1);

    loop {
        let choice = match prompt("\nPick a difficulty (1-5): ")? {
            Some(line) => line,
            None => return Ok(current),
        };

        match choice.parse::<usize>() {
            Ok(index) if (1..=presets.len()).contains(&index) => {
                return Ok(presets[index - 1]);
            }
            Ok(index) if index == presets.len() + 1 => {
                return match read_custom_difficulty()? {
                    Some(custom) => Ok(custom),
                    None => Ok(current),
                };
            }
            _ => println!("Please choose a number between 1 and 5."),
        }
    }
}

/// Manual bounds entry. Loops until the player supplies a valid
/// combination; `None` means stdin closed mid-entry.
fn read_custom_difficulty() -> io::Result<Option<Difficulty>> {
    loop {
        let lower = match prompt_number::<i64>("Lower bound: ")? {
            Some(value) => value,
            None => return Ok(None),
        };
        let upper = match prompt_number::<i64>("Upper bound: ")? {
            Some(value) => value,
            None => return Ok(None),
        };
        let ceiling = match prompt_number::<u32>("Number of attempts: ")? {
            Some(value) => value,
            None => return Ok(None),
        };

        match Difficulty::custom(lower, upper, ceiling) {
            Ok(difficulty) => return Ok(Some(difficulty)),
            Err(e) => println!("{}", e),
        }
    }
}

fn prompt_number<T: FromStr>(message: &str) -> io::Result<Option<T>> {
    loop {
        match prompt(message)? {
            None => return Ok(None),
            Some(line) => match line.parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => println!("Please enter a whole number!"),
            },
        }
    }
}
