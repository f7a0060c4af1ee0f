//! Print by running a system command (`lp`, `lpr`, a browser in kiosk mode).

use async_trait::async_trait;
use std::path::Path;
use tokio::process::Command;

use super::PrintAction;
use crate::error::ReceiptError;

/// Runs a program with fixed arguments when fired.
///
/// ```
/// use std::path::Path;
/// use advisory_receipt::print::CommandAction;
///
/// let action = CommandAction::lp(Path::new("/tmp/ADV-1.html"), Some("kiosk-80mm"));
/// assert_eq!(action.program(), "lp");
/// assert_eq!(action.args(), ["-d", "kiosk-80mm", "/tmp/ADV-1.html"]);
/// ```
#[derive(Debug, Clone)]
pub struct CommandAction {
    program: String,
    args: Vec<String>,
}

impl CommandAction {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append an argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// `lp [-d PRINTER] FILE`
    pub fn lp(file: &Path, printer: Option<&str>) -> Self {
        let mut action = Self::new("lp");
        if let Some(printer) = printer {
            action = action.arg("-d").arg(printer);
        }
        action.arg(file.display().to_string())
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

#[async_trait]
impl PrintAction for CommandAction {
    async fn fire(&self) -> Result<(), ReceiptError> {
        tracing::info!(program = %self.program, args = ?self.args, "running print command");

        let status = Command::new(&self.program)
            .args(&self.args)
            .status()
            .await
            .map_err(|e| ReceiptError::Print(format!("Failed to run {}: {}", self.program, e)))?;

        if status.success() {
            Ok(())
        } else {
            Err(ReceiptError::Print(format!(
                "{} exited with {}",
                self.program, status
            )))
        }
    }
}
