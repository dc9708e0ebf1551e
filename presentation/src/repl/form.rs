//! Interactive summarization form
//!
//! Lines typed at the prompt accumulate in the text field; slash commands
//! submit, copy, and edit the model field.

use colored::Colorize;
use pareto_application::{CopyOutcome, SubmissionController};
use pareto_domain::{DEFAULT_MODEL, MAX_TEXT_CHARS, MIN_TEXT_CHARS};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// One parsed line of form input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    Submit,
    /// `/model` shows the current model, `/model <id>` replaces it
    Model(Option<String>),
    Copy,
    Clear,
    Show,
    Help,
    Quit,
    Unknown(String),
    /// Anything that is not a command is appended to the text field
    Text(String),
}

/// Parse a prompt line into a form command
pub fn parse_input(line: &str) -> FormCommand {
    let trimmed = line.trim();
    if !trimmed.starts_with('/') {
        return FormCommand::Text(line.trim_end_matches(['\r', '\n']).to_string());
    }

    // `//` escapes a text line that itself starts with `/`
    if trimmed.starts_with("//") {
        let mut text = line.trim_end_matches(['\r', '\n']).to_string();
        text.remove(line.len() - line.trim_start().len());
        return FormCommand::Text(text);
    }

    let (name, arg) = match trimmed.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (trimmed, ""),
    };

    match name {
        "/submit" | "/s" => FormCommand::Submit,
        "/model" | "/m" => {
            if arg.is_empty() {
                FormCommand::Model(None)
            } else {
                FormCommand::Model(Some(arg.to_string()))
            }
        }
        "/copy" | "/c" => FormCommand::Copy,
        "/clear" => FormCommand::Clear,
        "/show" => FormCommand::Show,
        "/help" | "/h" | "/?" => FormCommand::Help,
        "/quit" | "/exit" | "/q" => FormCommand::Quit,
        _ => FormCommand::Unknown(trimmed.to_string()),
    }
}

/// Interactive form REPL
pub struct FormRepl {
    controller: Arc<SubmissionController>,
    buffer: String,
    history_file: Option<PathBuf>,
}

impl FormRepl {
    pub fn new(controller: Arc<SubmissionController>) -> Self {
        Self {
            controller,
            buffer: String::new(),
            history_file: default_history_file(),
        }
    }

    /// Override the history location (`None` disables history)
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_file = path;
        self
    }

    /// Current contents of the text field
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.history_file {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();
        self.controller.initialize();

        loop {
            match rl.readline(">>> ") {
                Ok(line) => {
                    if line.trim_start().starts_with('/') {
                        let _ = rl.add_history_entry(line.trim());
                    }
                    if self.handle_line(&line).await {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = self.history_file {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    /// Handle one prompt line. Returns true if the REPL should exit.
    pub async fn handle_line(&mut self, line: &str) -> bool {
        match parse_input(line) {
            FormCommand::Text(text) => {
                // Leading blank lines are not part of the text
                if self.buffer.is_empty() && text.trim().is_empty() {
                    return false;
                }
                if !self.buffer.is_empty() {
                    self.buffer.push('\n');
                }
                self.buffer.push_str(&text);
                self.controller.on_text_changed(self.buffer.clone());
                false
            }
            FormCommand::Submit => {
                println!();
                // Failures were already reported through the view
                if let Err(e) = self.controller.submit().await {
                    debug!("Submission ended without summary: {}", e);
                }
                println!();
                false
            }
            FormCommand::Model(Some(model)) => {
                self.controller.on_model_changed(model);
                println!("Model: {}", self.controller.state().resolved_model());
                false
            }
            FormCommand::Model(None) => {
                println!("Model: {}", self.controller.state().resolved_model());
                false
            }
            FormCommand::Copy => {
                if let Ok(CopyOutcome::Empty) = self.controller.on_copy_requested().await {
                    println!("Nothing to copy yet");
                }
                false
            }
            FormCommand::Clear => {
                self.buffer.clear();
                self.controller.on_text_changed("");
                false
            }
            FormCommand::Show => {
                let state = self.controller.state();
                println!();
                if self.buffer.is_empty() {
                    println!("{}", "(empty)".dimmed());
                } else {
                    println!("{}", self.buffer);
                }
                println!();
                println!("{}", state.char_count_label().dimmed());
                false
            }
            FormCommand::Help => {
                Self::print_help();
                false
            }
            FormCommand::Quit => {
                println!("Bye!");
                true
            }
            FormCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands, or start the line with // to enter it as text");
                false
            }
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│            Pareto - Summary Form            │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Model: {}", self.controller.state().resolved_model());
        println!(
            "Type or paste between {} and {} characters, then /submit.",
            MIN_TEXT_CHARS, MAX_TEXT_CHARS
        );
        Self::print_help();
    }

    fn print_help() {
        println!();
        println!("Commands:");
        println!("  /submit, /s        - Summarize the text");
        println!("  /model, /m [id]    - Show or set the model (default: {})", DEFAULT_MODEL);
        println!("  /copy, /c          - Copy the summary to the clipboard");
        println!("  /clear             - Clear the text");
        println!("  /show              - Show the text entered so far");
        println!("  /help, /h, /?      - Show this help");
        println!("  /quit, /exit, /q   - Exit");
        println!("  //text             - Add a text line starting with /");
        println!();
    }
}

fn default_history_file() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("pareto").join("history.txt"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pareto_application::{GatewayError, NoClipboard, SummarizerGateway};
    use pareto_domain::{SubmissionRequest, SubmissionResult};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingGateway {
        requests: Mutex<Vec<(String, String)>>,
    }

    #[async_trait]
    impl SummarizerGateway for RecordingGateway {
        async fn summarize(
            &self,
            request: &SubmissionRequest,
        ) -> Result<SubmissionResult, GatewayError> {
            self.requests.lock().unwrap().push((
                request.text.as_str().to_string(),
                request.model.as_str().to_string(),
            ));
            Ok(SubmissionResult::Success {
                summary: "short".to_string(),
            })
        }
    }

    fn repl() -> (FormRepl, Arc<RecordingGateway>, Arc<SubmissionController>) {
        let gateway = Arc::new(RecordingGateway::default());
        let controller = Arc::new(SubmissionController::new(
            gateway.clone(),
            Arc::new(NoClipboard),
        ));
        let repl = FormRepl::new(controller.clone()).with_history_file(None);
        (repl, gateway, controller)
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_input("/submit"), FormCommand::Submit);
        assert_eq!(parse_input("  /s  "), FormCommand::Submit);
        assert_eq!(parse_input("/model"), FormCommand::Model(None));
        assert_eq!(
            parse_input("/model  openai/gpt-4o-mini "),
            FormCommand::Model(Some("openai/gpt-4o-mini".to_string()))
        );
        assert_eq!(parse_input("/copy"), FormCommand::Copy);
        assert_eq!(parse_input("/clear"), FormCommand::Clear);
        assert_eq!(parse_input("/show"), FormCommand::Show);
        assert_eq!(parse_input("/?"), FormCommand::Help);
        assert_eq!(parse_input("/q"), FormCommand::Quit);
        assert_eq!(
            parse_input("/frobnicate now"),
            FormCommand::Unknown("/frobnicate now".to_string())
        );
    }

    #[test]
    fn test_parse_text_keeps_indentation() {
        assert_eq!(
            parse_input("    indented line\n"),
            FormCommand::Text("    indented line".to_string())
        );
        assert_eq!(parse_input(""), FormCommand::Text(String::new()));
    }

    #[test]
    fn test_parse_escaped_slash_is_text() {
        assert_eq!(
            parse_input("//usr/bin is where the binary lives"),
            FormCommand::Text("/usr/bin is where the binary lives".to_string())
        );
        assert_eq!(
            parse_input("  //submit"),
            FormCommand::Text("  /submit".to_string())
        );
    }

    #[tokio::test]
    async fn test_escaped_slash_line_is_added_to_text() {
        let (mut repl, _, controller) = repl();

        repl.handle_line("Paths such as").await;
        repl.handle_line("//etc/hosts").await;
        repl.handle_line("/etc/hosts").await;

        assert_eq!(repl.text(), "Paths such as\n/etc/hosts");
        assert_eq!(controller.state().text, "Paths such as\n/etc/hosts");
    }

    #[tokio::test]
    async fn test_text_lines_accumulate_and_update_count() {
        let (mut repl, _, controller) = repl();

        assert!(!repl.handle_line("").await);
        assert!(!repl.handle_line("first line").await);
        assert!(!repl.handle_line("second line").await);

        assert_eq!(repl.text(), "first line\nsecond line");
        let state = controller.state();
        assert_eq!(state.text, "first line\nsecond line");
        assert_eq!(state.char_count, 22);
        assert!(!state.validity.is_valid());
    }

    #[tokio::test]
    async fn test_submit_sends_buffer_with_model() {
        let (mut repl, gateway, controller) = repl();

        repl.handle_line(&"a".repeat(60)).await;
        repl.handle_line("/model openai/gpt-4o-mini").await;
        repl.handle_line("/submit").await;

        let requests = gateway.requests.lock().unwrap().clone();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, "a".repeat(60));
        assert_eq!(requests[0].1, "openai/gpt-4o-mini");
        assert!(controller.state().result_visible);
    }

    #[tokio::test]
    async fn test_submit_short_text_sends_nothing() {
        let (mut repl, gateway, controller) = repl();

        repl.handle_line("too short").await;
        repl.handle_line("/submit").await;

        assert!(gateway.requests.lock().unwrap().is_empty());
        assert!(!controller.state().busy);
    }

    #[tokio::test]
    async fn test_model_query_keeps_model() {
        let (mut repl, gateway, _) = repl();

        repl.handle_line("/model openai/gpt-4o-mini").await;
        repl.handle_line(&"b".repeat(50)).await;
        repl.handle_line("/model").await;
        repl.handle_line("/submit").await;

        let requests = gateway.requests.lock().unwrap().clone();
        assert_eq!(requests[0].1, "openai/gpt-4o-mini");
    }

    #[tokio::test]
    async fn test_clear_resets_text_field() {
        let (mut repl, _, controller) = repl();

        repl.handle_line("some text").await;
        repl.handle_line("/clear").await;

        assert_eq!(repl.text(), "");
        assert_eq!(controller.state().char_count, 0);
    }

    #[tokio::test]
    async fn test_copy_before_submit_is_noop() {
        let (mut repl, _, controller) = repl();

        assert!(!repl.handle_line("/copy").await);
        assert_eq!(controller.state().copy_generation, 0);
    }

    #[tokio::test]
    async fn test_quit() {
        let (mut repl, _, _) = repl();

        assert!(!repl.handle_line("/help").await);
        assert!(!repl.handle_line("/nope").await);
        assert!(repl.handle_line("/quit").await);
    }
}
