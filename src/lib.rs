//! A small iCalendar (RFC 5545) encoder.
//!
//! Build a [`Calendar`] out of [`Event`]s and stream it into anything that
//! implements [`std::io::Write`].
//!
//! ```rust
//! use ics::{Calendar, Event};
//!
//! let mut cal = Calendar::new();
//! cal.push(Event::from([("summary", "Team meeting"), ("location", "Room 1, 2nd floor")]));
//!
//! let mut out = Vec::new();
//! cal.encode(&mut out).unwrap();
//! assert!(out.starts_with(b"BEGIN:VCALENDAR\r\n"));
//! ```

const VALUE_DELIMITER: char = ':';
const LINE_TERMINATOR: &[u8] = b"\r\n";
const CONTINUATION_PREFIX: &[u8] = b" ";

mod error;
pub use error::EncodeError;

pub mod component;
pub use component::{Calendar, Event};

pub mod property;
pub use property::{Properties, PropertyName};

pub mod generator;
pub use generator::{Emitter, Encoder, EncoderOptions};

pub mod types;
pub use types::Value;
