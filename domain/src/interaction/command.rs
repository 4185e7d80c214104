//! Reserved commands recognised by the host loop.
//!
//! Bare words `quit`, `exit` and `clear` are matched exactly (after trimming
//! surrounding whitespace) and case-insensitively. Anything else that is not
//! a known slash command is a chat message.

use std::path::PathBuf;

/// What the host loop should do with one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    /// `quit` or `exit`: end the loop.
    Quit,
    /// `clear`: reset the conversation.
    Clear,
    /// `/help`: list commands.
    Help,
    /// `/stats`: show turn counts.
    Stats,
    /// `/export [path]`: write the transcript to a file.
    Export(Option<PathBuf>),
    /// Blank input: re-prompt.
    Empty,
    /// Anything else: send to the model.
    Message(String),
}

impl HostCommand {
    /// Classify a raw input line.
    pub fn parse(input: &str) -> Self {
        let line = input.trim();
        if line.is_empty() {
            return HostCommand::Empty;
        }

        let lowered = line.to_lowercase();
        match lowered.as_str() {
            "quit" | "exit" => return HostCommand::Quit,
            "clear" => return HostCommand::Clear,
            "/help" => return HostCommand::Help,
            "/stats" => return HostCommand::Stats,
            _ => {}
        }

        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        if verb.eq_ignore_ascii_case("/export") {
            let path = rest.trim();
            return HostCommand::Export((!path.is_empty()).then(|| PathBuf::from(path)));
        }

        HostCommand::Message(line.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_and_exit_case_insensitive() {
        assert_eq!(HostCommand::parse("quit"), HostCommand::Quit);
        assert_eq!(HostCommand::parse("EXIT"), HostCommand::Quit);
        assert_eq!(HostCommand::parse("  Quit  "), HostCommand::Quit);
    }

    #[test]
    fn test_clear_case_insensitive() {
        assert_eq!(HostCommand::parse("clear"), HostCommand::Clear);
        assert_eq!(HostCommand::parse("CLEAR"), HostCommand::Clear);
    }

    #[test]
    fn test_reserved_words_need_exact_match() {
        assert_eq!(
            HostCommand::parse("quit!"),
            HostCommand::Message("quit!".to_string())
        );
        assert_eq!(
            HostCommand::parse("please clear"),
            HostCommand::Message("please clear".to_string())
        );
        assert_eq!(
            HostCommand::parse("exit now"),
            HostCommand::Message("exit now".to_string())
        );
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(HostCommand::parse(""), HostCommand::Empty);
        assert_eq!(HostCommand::parse("   \t"), HostCommand::Empty);
    }

    #[test]
    fn test_message_is_trimmed() {
        assert_eq!(
            HostCommand::parse("  What is Rust?  "),
            HostCommand::Message("What is Rust?".to_string())
        );
    }

    #[test]
    fn test_slash_commands() {
        assert_eq!(HostCommand::parse("/help"), HostCommand::Help);
        assert_eq!(HostCommand::parse("/STATS"), HostCommand::Stats);
        assert_eq!(HostCommand::parse("/export"), HostCommand::Export(None));
        assert_eq!(
            HostCommand::parse("/export  notes/chat.txt "),
            HostCommand::Export(Some(PathBuf::from("notes/chat.txt")))
        );
    }

    #[test]
    fn test_unknown_slash_is_message() {
        assert_eq!(
            HostCommand::parse("/exporter"),
            HostCommand::Message("/exporter".to_string())
        );
    }
}
