use super::{
    Emitter, EncoderOptions,
    diagnostics::{Diagnostic, DiagnosticSink, TracingDiagnostics},
    escape::escape_text,
    fold::write_folded,
};
use crate::{
    EncodeError, VALUE_DELIMITER,
    component::{Calendar, Event},
    property::{Properties, PropertyName},
    types::{UnsupportedValueType, Value},
};
use std::io::Write;

/// Streams components into a byte sink.
///
/// Output already written is left in the sink when an error is returned.
pub struct Encoder<'d, W: Write> {
    writer: W,
    options: EncoderOptions,
    diagnostics: Option<&'d mut dyn DiagnosticSink>,
}

impl<'d, W: Write> Encoder<'d, W> {
    /// Return a new `Encoder` writing into `writer`, reporting diagnostics
    /// through [`TracingDiagnostics`].
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            options: Default::default(),
            diagnostics: None,
        }
    }

    pub fn with_options(mut self, options: EncoderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: &'d mut dyn DiagnosticSink) -> Self {
        self.diagnostics = Some(diagnostics);
        self
    }

    #[inline]
    pub fn options(&self) -> &EncoderOptions {
        &self.options
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    pub fn encode_calendar(&mut self, calendar: &Calendar) -> Result<(), EncodeError> {
        calendar.emit(self)
    }

    pub fn encode_event(&mut self, event: &Event) -> Result<(), EncodeError> {
        event.emit(self)
    }

    /// Format, escape and fold a single property.
    ///
    /// Values without a textual form are skipped with a diagnostic, or
    /// rejected in strict mode.
    pub fn encode_property(&mut self, name: &PropertyName, value: &Value) -> Result<(), EncodeError> {
        let raw = match value.format() {
            Ok(raw) => raw,
            Err(UnsupportedValueType(type_name)) if self.options.strict => {
                return Err(EncodeError::UnsupportedValueType {
                    key: name.to_string(),
                    type_name,
                });
            }
            Err(UnsupportedValueType(type_name)) => {
                self.report(Diagnostic::SkippedProperty {
                    key: name.to_string(),
                    type_name,
                });
                return Ok(());
            }
        };
        let line = format!("{name}{VALUE_DELIMITER}{}", escape_text(&raw));
        self.write_line(line.as_bytes())
    }

    pub(crate) fn encode_properties(&mut self, properties: &Properties) -> Result<(), EncodeError> {
        for (name, value) in properties.sorted() {
            self.encode_property(name, value)?;
        }
        Ok(())
    }

    pub(crate) fn begin(&mut self, component: &str) -> Result<(), EncodeError> {
        self.write_line(format!("BEGIN{VALUE_DELIMITER}{component}").as_bytes())
    }

    pub(crate) fn end(&mut self, component: &str) -> Result<(), EncodeError> {
        self.write_line(format!("END{VALUE_DELIMITER}{component}").as_bytes())
    }

    fn write_line(&mut self, line: &[u8]) -> Result<(), EncodeError> {
        write_folded(&mut self.writer, line, self.options.fold)?;
        Ok(())
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        match self.diagnostics.as_deref_mut() {
            Some(sink) => sink.report(diagnostic),
            None => TracingDiagnostics.report(diagnostic),
        }
    }
}
