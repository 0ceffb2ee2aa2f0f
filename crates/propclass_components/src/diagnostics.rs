//! Render warnings
//!
//! Warnings describe usage that is probably a mistake but still renders.
//! They go to a [`Diagnostics`] sink and never change the output.

use parking_lot::Mutex;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    /// `decorate` and `as` were both given; `as` is ignored.
    AsIgnoredWhenDecorating,
    /// `decorate` was given without children; nothing is rendered.
    DecorateWithoutChildren,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::AsIgnoredWhenDecorating => write!(
                f,
                "You passed a \"decorate\" flag to a component which has an \"as\" property as well. \
                 Know that \"decorate\" flags supersede any given \"as\" values."
            ),
            Warning::DecorateWithoutChildren => write!(
                f,
                "You passed the \"decorate\" flag to a component without children. \
                 This will result in an empty component being rendered."
            ),
        }
    }
}

/// Receives render warnings.
pub trait Diagnostics: Send + Sync {
    fn warn(&self, component: &str, warning: Warning);
}

/// Sends warnings to `tracing` at WARN level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn warn(&self, component: &str, warning: Warning) {
        tracing::warn!(component, "{component} warning: {warning}");
    }
}

/// Keeps every warning in memory.
#[derive(Debug, Default)]
pub struct CollectedWarnings {
    warnings: Mutex<Vec<(String, Warning)>>,
}

impl CollectedWarnings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> Vec<Warning> {
        self.warnings.lock().iter().map(|(_, w)| *w).collect()
    }

    /// Warnings together with the name of the component that raised them.
    pub fn entries(&self) -> Vec<(String, Warning)> {
        self.warnings.lock().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.lock().is_empty()
    }

    pub fn clear(&self) {
        self.warnings.lock().clear();
    }
}

impl Diagnostics for CollectedWarnings {
    fn warn(&self, component: &str, warning: Warning) {
        self.warnings.lock().push((component.to_string(), warning));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collected_warnings() {
        let sink = CollectedWarnings::new();
        assert!(sink.is_empty());

        sink.warn("TextColor", Warning::DecorateWithoutChildren);
        sink.warn("TextColor", Warning::AsIgnoredWhenDecorating);

        assert_eq!(
            sink.warnings(),
            vec![
                Warning::DecorateWithoutChildren,
                Warning::AsIgnoredWhenDecorating
            ]
        );
        assert_eq!(sink.entries()[0].0, "TextColor");

        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_warning_messages() {
        assert!(Warning::AsIgnoredWhenDecorating
            .to_string()
            .contains("\"as\""));
        assert!(Warning::DecorateWithoutChildren
            .to_string()
            .contains("without children"));
    }

    #[test]
    fn test_tracing_diagnostics_does_not_panic() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        TracingDiagnostics.warn("TextColor", Warning::DecorateWithoutChildren);
    }
}
