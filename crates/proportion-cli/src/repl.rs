//! Interactive session for the proportion calculator
//!
//! Each line sets one operand and prints the recomputed result:
//!
//! ```text
//! >>> a 2
//! X =
//! >>> b 4
//! X =
//! >>> c 10
//! X = 20.00
//! ```
//!
//! History is kept in memory only and is gone when the session ends.

use anyhow::Result;
use proportion_core::{Field, ProportionState};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// REPL prompt shown at the start of each line
const PROMPT: &str = ">>> ";
/// Label of the computed term
const RESULT: &str = "X";

/// Result of executing one line
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Print this text and keep reading
    Print(String),
    /// Nothing to print
    Silent,
    /// Leave the session
    Exit,
}

/// Line interpreter over a [`ProportionState`]
#[derive(Debug, Default)]
pub struct Session {
    state: ProportionState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn state(&self) -> &ProportionState {
        &self.state
    }

    /// Execute one line of input
    pub fn execute(&mut self, line: &str) -> Outcome {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Outcome::Silent;
        }

        if let Some(cmd) = trimmed.strip_prefix(':') {
            return self.command(cmd.trim());
        }

        let (name, text) = trimmed
            .split_once(|c: char| c == '=' || c.is_whitespace())
            .unwrap_or((trimmed, ""));

        match Field::from_label(name.trim()) {
            Some(field) => {
                self.state.set(field, text.trim().trim_start_matches('=').trim());
                tracing::debug!(%field, result = self.state.result(), "operand set");
                Outcome::Print(format!("{RESULT} = {}", self.state.result()))
            }
            None => Outcome::Print(format!(
                "Unknown field: {name}\nType :help for available commands"
            )),
        }
    }

    fn command(&mut self, cmd: &str) -> Outcome {
        match cmd.to_lowercase().as_str() {
            "quit" | "q" | "exit" => Outcome::Exit,
            "help" | "h" | "?" => Outcome::Print(HELP.trim_end().to_string()),
            "show" | "s" => Outcome::Print(self.show()),
            "clear" => {
                self.state.clear();
                Outcome::Print("Cleared".to_string())
            }
            _ => Outcome::Print(format!(
                "Unknown command: :{cmd}\nType :help for available commands"
            )),
        }
    }

    fn show(&self) -> String {
        let mut lines: Vec<String> = Field::ALL
            .iter()
            .map(|&field| format!("{field} = {}", self.state.get(field)))
            .collect();
        lines.push(format!("{RESULT} = {}", self.state.result()));
        lines.join("\n")
    }
}

const HELP: &str = "\
Solves A:B = C:X for X = (B × C) / A

  a <number>    Set A (also b, c; `a=2` works too)
  :show         Show all fields
  :clear        Blank all fields
  :help         Show this help
  :quit         Exit
";

/// Terminal front end for [`Session`]
pub struct Repl {
    session: Session,
    editor: DefaultEditor,
}

impl Repl {
    pub fn new() -> Result<Self> {
        Ok(Self {
            session: Session::new(),
            editor: DefaultEditor::new()?,
        })
    }

    /// Run the REPL loop
    pub fn run(&mut self) -> Result<()> {
        println!("Regra de Três v{}", proportion_core::VERSION);
        println!("Type :help for help, :quit to exit");
        println!();

        loop {
            match self.editor.readline(PROMPT) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = self.editor.add_history_entry(line.as_str());
                    }
                    match self.session.execute(&line) {
                        Outcome::Print(text) => println!("{text}"),
                        Outcome::Silent => {}
                        Outcome::Exit => break,
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                }
                Err(ReadlineError::Eof) => break,
                Err(err) => {
                    tracing::error!(%err, "failed to read input");
                    return Err(err.into());
                }
            }
        }

        Ok(())
    }
}
