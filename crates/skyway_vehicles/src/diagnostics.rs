//! # Load Diagnostics
//!
//! Loading keeps going past bad entries. Every condition worth telling a
//! content author about is logged through `tracing` and also kept here, so
//! tools and tests can inspect what happened to a load pass.

use std::fmt;

/// How serious a load condition is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Informational.
    Info,
    /// Something was replaced or defaulted.
    Warning,
    /// Something was skipped or left unusable.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        })
    }
}

/// A single recorded load condition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity of the condition.
    pub severity: Severity,
    /// Definition being loaded when it happened, if known.
    pub definition: Option<String>,
    /// Human-readable description.
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.definition {
            Some(def) => write!(f, "{} [{def}]: {}", self.severity, self.message),
            None => write!(f, "{}: {}", self.severity, self.message),
        }
    }
}

/// Collects diagnostics for a load pass.
///
/// Info messages are logged but not stored.
#[derive(Debug, Default)]
pub struct Diagnostics {
    scope: Option<String>,
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the definition subsequent entries are attributed to.
    pub fn set_scope(&mut self, definition: Option<&str>) {
        self.scope = definition.map(str::to_owned);
    }

    /// Logs an informational message.
    pub fn info(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!(definition = self.scope.as_deref(), "{message}");
    }

    /// Logs and records a warning.
    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(definition = self.scope.as_deref(), "{message}");
        self.push(Severity::Warning, message);
    }

    /// Logs and records an error.
    pub fn error(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::error!(definition = self.scope.as_deref(), "{message}");
        self.push(Severity::Error, message);
    }

    fn push(&mut self, severity: Severity, message: String) {
        self.entries.push(Diagnostic {
            severity,
            definition: self.scope.clone(),
            message,
        });
    }

    /// All recorded entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    /// Number of recorded entries at the given severity.
    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.entries.iter().filter(|d| d.severity == severity).count()
    }

    /// Removes and returns all recorded entries.
    pub fn take(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_carry_scope() {
        let mut diags = Diagnostics::new();
        diags.warn("before scope");
        diags.set_scope(Some("skyfox"));
        diags.error("inside scope");
        diags.info("not stored");

        let entries = diags.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].definition, None);
        assert_eq!(entries[1].definition.as_deref(), Some("skyfox"));
        assert_eq!(entries[1].to_string(), "error [skyfox]: inside scope");
        assert_eq!(diags.count(Severity::Warning), 1);
    }

    #[test]
    fn test_take_drains() {
        let mut diags = Diagnostics::new();
        diags.warn("one");
        assert_eq!(diags.take().len(), 1);
        assert!(diags.entries().is_empty());
    }
}
