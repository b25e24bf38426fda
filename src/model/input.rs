/// Control commands recognized at the guess prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    Stats,
    Restart,
}

impl Command {
    pub fn parse(token: &str) -> Option<Command> {
        match token.trim().to_lowercase().as_str() {
            "quit" | "exit" | "q" => Some(Command::Quit),
            "help" | "h" => Some(Command::Help),
            "stats" | "statistics" => Some(Command::Stats),
            "restart" | "new" | "again" => Some(Command::Restart),
            _ => None,
        }
    }
}

/// Raw prompt input split into a control command or candidate guess text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput<'a> {
    Command(Command),
    Candidate(&'a str),
}

pub fn classify(raw: &str) -> RawInput<'_> {
    match Command::parse(raw) {
        Some(command) => RawInput::Command(command),
        None => RawInput::Candidate(raw.trim()),
    }
}

/// Yes/no answer at the play-again prompt. The original accepted Russian
/// short forms alongside the English ones; both survive here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirm {
    Yes,
    No,
}

impl Confirm {
    pub fn parse(token: &str) -> Option<Confirm> {
        match token.trim().to_lowercase().as_str() {
            "y" | "yes" | "da" | "d" => Some(Confirm::Yes),
            "n" | "no" | "net" => Some(Confirm::No),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_are_case_insensitive() {
        assert_eq!(Command::parse("QUIT"), Some(Command::Quit));
        assert_eq!(Command::parse("Exit"), Some(Command::Quit));
        assert_eq!(Command::parse("q"), Some(Command::Quit));
        assert_eq!(Command::parse("Help"), Some(Command::Help));
        assert_eq!(Command::parse("H"), Some(Command::Help));
        assert_eq!(Command::parse("STATS"), Some(Command::Stats));
        assert_eq!(Command::parse("statistics"), Some(Command::Stats));
        assert_eq!(Command::parse("restart"), Some(Command::Restart));
        assert_eq!(Command::parse("new"), Some(Command::Restart));
        assert_eq!(Command::parse("AGAIN"), Some(Command::Restart));
    }

    #[test]
    fn test_non_commands_classify_as_candidates() {
        assert_eq!(Command::parse("42"), None);
        assert_eq!(Command::parse("quitt"), None);
        assert_eq!(classify("  42  "), RawInput::Candidate("42"));
        assert_eq!(classify("q"), RawInput::Command(Command::Quit));
    }

    #[test]
    fn test_confirm_parse() {
        assert_eq!(Confirm::parse("Y"), Some(Confirm::Yes));
        assert_eq!(Confirm::parse("yes"), Some(Confirm::Yes));
        assert_eq!(Confirm::parse("da"), Some(Confirm::Yes));
        assert_eq!(Confirm::parse("No"), Some(Confirm::No));
        assert_eq!(Confirm::parse("n"), Some(Confirm::No));
        assert_eq!(Confirm::parse("maybe"), None);
    }
}
