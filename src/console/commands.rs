//! Module `commands`
//!
//! Parses console input lines into controller triggers.

/// A trigger typed at the console.
#[derive(Debug, PartialEq, Eq)]
pub enum Trigger {
    Start,
    End,
    Reset,
    Status,
    Quit,
    Empty,
    Unknown(String),
}

/// Parses a raw console line into a [`Trigger`]. Case-insensitive; anything
/// after the first word is ignored.
pub fn parse_command(raw: &str) -> Trigger {
    let trimmed = raw.trim();
    let word = trimmed
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_ascii_lowercase();

    match word.as_str() {
        "" => Trigger::Empty,
        "call" | "start" => Trigger::Start,
        "hangup" | "end" => Trigger::End,
        "reset" => Trigger::Reset,
        "status" => Trigger::Status,
        "quit" | "q" | "exit" => Trigger::Quit,
        _ => Trigger::Unknown(trimmed.to_string()),
    }
}
