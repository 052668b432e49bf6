//! One interactive session: parses lines, feeds events to the state,
//! and produces the text to show after each one.

use std::path::Path;

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::info;

use cracking_portal::docx::generate_docx;
use cracking_portal::render::{PortalOptions, summarize};
use cracking_portal::styles::DocumentStyles;
use cracking_questionnaire::navigator::Step;

use crate::commands::{self, Command, HELP};
use crate::config::ShellConfig;
use crate::state::AppState;
use crate::view;

/// What to print after a line, and whether to stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub output: String,
    pub quit: bool,
}

impl Reply {
    fn show(output: String) -> Self {
        Self {
            output,
            quit: false,
        }
    }
}

pub struct Session {
    state: AppState,
    portal: PortalOptions,
    styles: DocumentStyles,
}

impl Session {
    pub fn new(config: &ShellConfig) -> Self {
        Self {
            state: AppState::new(config.default_audience),
            portal: PortalOptions {
                placeholder: config.placeholder.clone(),
                prepared_on: None,
            },
            styles: DocumentStyles::default(),
        }
    }

    /// Stamp the carer summary with a preparation date.
    pub fn with_prepared_on(mut self, date: jiff::civil::Date) -> Self {
        self.portal.prepared_on = Some(date);
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn prompt(&self) -> String {
        format!("{}> ", self.state.page())
    }

    /// The current page, or the render error as text.
    pub fn render(&self) -> String {
        view::render(&self.state, &self.portal).unwrap_or_else(|e| format!("error: {e}"))
    }

    /// Handle one input line. Rejected input is reported, never fatal.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let command = match commands::parse_line(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Reply::show(String::new()),
            Err(e) => return Reply::show(format!("{e}")),
        };

        match command {
            Command::Event(event) => match self.state.dispatch(event) {
                Ok(step) => {
                    let view = self.render();
                    match step {
                        Some(Step::Completed) => Reply::show(format!("Section complete.\n\n{view}")),
                        _ => Reply::show(view),
                    }
                }
                Err(e) => Reply::show(format!("{e}")),
            },
            Command::Show => Reply::show(self.render()),
            Command::Help => Reply::show(HELP.to_string()),
            Command::Export(path) => match self.export(&path) {
                Ok(()) => Reply::show(format!("Carer summary written to {}", path.display())),
                Err(e) => Reply::show(format!("export failed: {e}")),
            },
            Command::Quit => Reply {
                output: "Goodbye. Nothing entered in this session has been saved.".to_string(),
                quit: true,
            },
        }
    }

    fn export(&self, path: &Path) -> eyre::Result<()> {
        let summary = summarize(self.state.profile(), &self.portal);
        let bytes = generate_docx(&summary, &self.styles)?;
        std::fs::write(path, bytes)?;
        info!(path = %path.display(), "carer summary exported");
        Ok(())
    }
}

/// Run the interactive loop until `quit`, Ctrl-C or Ctrl-D.
pub fn run(session: &mut Session) -> eyre::Result<()> {
    let mut editor = DefaultEditor::new()?;
    println!("{}", session.render());

    loop {
        match editor.readline(&session.prompt()) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                editor.add_history_entry(line.as_str())?;
                let reply = session.handle_line(&line);
                println!("{}", reply.output);
                if reply.quit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}
