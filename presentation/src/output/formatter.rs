//! Text blocks for the console: welcome banner, help, model list

use colored::Colorize;
use groq_chat_domain::{Model, TurnStats};

/// Builds the static console texts. Pass `color = false` for plain output.
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    pub fn welcome(model: &Model, stream: bool, color: bool) -> String {
        let mut output = String::new();
        output.push('\n');
        output.push_str("╭─────────────────────────────────────────────╮\n");
        output.push_str("│                 Groq Chat                   │\n");
        output.push_str("╰─────────────────────────────────────────────╯\n");
        output.push('\n');
        output.push_str(&format!(
            "{} {}{}\n",
            Self::heading("Model:", color),
            model,
            if stream { " (streaming)" } else { "" }
        ));
        output.push_str("Type 'quit' or 'exit' to leave, 'clear' to start over, /help for more.\n");
        output
    }

    pub fn help(color: bool) -> String {
        let mut output = String::new();
        output.push('\n');
        output.push_str(&format!("{}\n", Self::heading("Commands:", color)));
        output.push_str("  quit, exit       - Leave the chat (also Ctrl-D)\n");
        output.push_str("  clear            - Forget the conversation and start fresh\n");
        output.push_str("  /stats           - Show turn counts\n");
        output.push_str("  /export [PATH]   - Save the transcript as a text file\n");
        output.push_str("  /help            - Show this help\n");
        output.push_str("  Ctrl-C           - Cancel the reply being generated\n");
        output
    }

    pub fn stats(stats: &TurnStats, color: bool) -> String {
        format!("{} {}", Self::heading("Conversation:", color), stats)
    }

    pub fn model_list(color: bool) -> String {
        let mut output = format!("{}\n", Self::heading("Known models:", color));
        let default = Model::default();
        for model in Model::known_models() {
            let marker = if model == default { " (default)" } else { "" };
            output.push_str(&format!("  {}{}\n", model, marker));
        }
        output.push_str("Any other identifier is passed to the API unchanged.\n");
        output
    }

    fn heading(text: &str, color: bool) -> String {
        if color {
            text.cyan().bold().to_string()
        } else {
            text.to_string()
        }
    }
}
