use derive_more::Display;

/// Something the encoder worked around instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Diagnostic {
    #[display("property {key}: unsupported value type {type_name}, skipped")]
    SkippedProperty {
        key: String,
        type_name: &'static str,
    },
}

/// Receiver for [`Diagnostic`]s raised while encoding.
///
/// Implemented for `Vec<Diagnostic>` to collect them and for any
/// `FnMut(Diagnostic)` closure.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Default sink, forwards every diagnostic to `tracing` at WARN level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn report(&mut self, diagnostic: Diagnostic) {
        match diagnostic {
            Diagnostic::SkippedProperty { key, type_name } => {
                tracing::warn!(%key, type_name, "Unsupported value type, skipping property");
            }
        }
    }
}

impl DiagnosticSink for Vec<Diagnostic> {
    #[inline]
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

impl<F: FnMut(Diagnostic)> DiagnosticSink for F {
    #[inline]
    fn report(&mut self, diagnostic: Diagnostic) {
        self(diagnostic)
    }
}
