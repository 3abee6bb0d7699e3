//! Serialise calendars into iCalendar text.
//!
//! Every property goes through the same pipeline: the value is formatted
//! ([`Value::format`](crate::Value::format)), escaped ([`escape_text`]),
//! prefixed with its name and folded into CRLF-terminated lines of at most
//! [`MAX_LINE_OCTETS`] octets ([`fold_line`]).

mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticSink, TracingDiagnostics};

mod encoder;
pub use encoder::Encoder;

mod escape;
pub use escape::{escape_text, unescape_text};

mod fold;
pub use fold::{FoldBoundary, MAX_LINE_OCTETS, fold_line, write_folded};

mod ical;

use crate::EncodeError;
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncoderOptions {
    /// Fail on values without a textual form instead of skipping the
    /// property and reporting a [`Diagnostic`].
    pub strict: bool,
    pub fold: FoldBoundary,
}

pub trait Emitter {
    fn emit<W: Write>(&self, encoder: &mut Encoder<'_, W>) -> Result<(), EncodeError>;

    /// Encode into memory with the default options.
    ///
    /// The result is not necessarily valid UTF-8 since folding may split
    /// multi-octet characters.
    fn generate(&self) -> Result<Vec<u8>, EncodeError> {
        let mut encoder = Encoder::new(vec![]);
        self.emit(&mut encoder)?;
        Ok(encoder.into_inner())
    }
}
