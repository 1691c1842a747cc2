use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::config::Config;
use crate::error::ShellError;
use crate::line::{History, LineSource};

/// Interactive line source backed by rustyline, with file-persisted history.
pub struct Repl {
    editor: DefaultEditor,
    history_path: std::path::PathBuf,
}

impl Repl {
    /// Open an editor and load history from the configured file.
    pub fn new(config: &Config) -> Result<Self, ShellError> {
        let rl_config = rustyline::Config::builder()
            .max_history_size(config.settings.history_size)?
            .auto_add_history(false)
            .build();
        let mut editor = DefaultEditor::with_config(rl_config)?;

        let history_path = config.history_path();
        if let Err(e) = editor.load_history(&history_path) {
            log::debug!("no history loaded from {}: {e}", history_path.display());
        }

        Ok(Self {
            editor,
            history_path,
        })
    }

    /// Write history back to disk.
    pub fn save(&mut self) -> Result<(), ShellError> {
        if let Some(dir) = self.history_path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        self.editor.save_history(&self.history_path)?;
        Ok(())
    }
}

impl History for Repl {
    fn append(&mut self, entry: &str) {
        if let Err(e) = self.editor.add_history_entry(entry) {
            log::warn!("history append failed: {e}");
        }
    }
}

impl LineSource for Repl {
    type Error = ShellError;

    /// Ctrl-C surfaces as [`ShellError::Interrupted`]; Ctrl-D ends input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ShellError> {
        match self.editor.readline(&format!("{prompt} ")) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Interrupted) => Err(ShellError::Interrupted),
            Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
