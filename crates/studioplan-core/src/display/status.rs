//! One-line confirmations for actions with no resource to show.

use std::fmt;

use crate::export::ExportOutcome;

/// A success or failure line shown after an action.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }
}

impl From<&ExportOutcome> for OperationStatus {
    fn from(outcome: &ExportOutcome) -> Self {
        match outcome {
            ExportOutcome::Saved(path) => Self::success(format!("Exported plan to {}", path.display())),
            ExportOutcome::Skipped => {
                Self::failure("Another export is still running; nothing was written".to_string())
            }
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", if self.success { "Success:" } else { "Error:" }, self.message)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_export_outcomes() {
        let saved = OperationStatus::from(&ExportOutcome::Saved(PathBuf::from("out/plan.pdf")));
        assert!(saved.success);
        assert_eq!(saved.to_string(), "Success: Exported plan to out/plan.pdf\n");

        let skipped = OperationStatus::from(&ExportOutcome::Skipped);
        assert!(!skipped.success);
        assert!(skipped.to_string().starts_with("Error:"));
    }
}
