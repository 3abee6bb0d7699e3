use chrono::{DateTime, FixedOffset, Local, TimeZone, Utc};
use std::{
    any::{Any, type_name},
    borrow::Cow,
    fmt,
    sync::Arc,
};

/// Basic ISO 8601 in UTC, e.g. `20200615T083000Z`
pub const INSTANT_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Returned when a [`Value`] has no textual form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unsupported value type {0}")]
pub struct UnsupportedValueType(pub &'static str);

/// A typed property value.
#[derive(Clone)]
pub enum Value {
    Text(String),
    /// A point in time, written out in UTC regardless of its offset.
    Instant(DateTime<FixedOffset>),
    /// Anything with a `Display` implementation.
    Custom(Arc<dyn fmt::Display + Send + Sync>),
    /// A value of a type the encoder cannot format, see [`Value::from_any`].
    Unsupported(&'static str),
}

impl Value {
    pub fn custom(value: impl fmt::Display + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(value))
    }

    /// Runtime-typed conversion.
    ///
    /// Strings, `chrono` date-times and `Value`s are recognised, every other
    /// type becomes [`Value::Unsupported`] carrying its type name. Use
    /// [`Value::custom`] for types that should be written via `Display`.
    pub fn from_any<T: Any>(value: T) -> Self {
        let any = &value as &dyn Any;
        if let Some(value) = any.downcast_ref::<Value>() {
            return value.clone();
        }
        if let Some(text) = any.downcast_ref::<String>() {
            return Self::Text(text.clone());
        }
        if let Some(text) = any.downcast_ref::<&'static str>() {
            return Self::Text((*text).to_owned());
        }
        if let Some(dt) = any.downcast_ref::<DateTime<Utc>>() {
            return Self::from(*dt);
        }
        if let Some(dt) = any.downcast_ref::<DateTime<FixedOffset>>() {
            return Self::from(*dt);
        }
        if let Some(dt) = any.downcast_ref::<DateTime<Local>>() {
            return Self::from(*dt);
        }
        #[cfg(feature = "chrono-tz")]
        if let Some(dt) = any.downcast_ref::<DateTime<chrono_tz::Tz>>() {
            return Self::from(*dt);
        }
        Self::Unsupported(type_name::<T>())
    }

    /// The raw, unescaped text of this value.
    pub fn format(&self) -> Result<Cow<'_, str>, UnsupportedValueType> {
        match self {
            Self::Text(text) => Ok(Cow::Borrowed(text)),
            Self::Instant(dt) => Ok(Cow::Owned(
                dt.with_timezone(&Utc).format(INSTANT_FORMAT).to_string(),
            )),
            Self::Custom(custom) => Ok(Cow::Owned(custom.to_string())),
            Self::Unsupported(name) => Err(UnsupportedValueType(name)),
        }
    }

    #[inline]
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported(_))
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Instant(dt) => f.debug_tuple("Instant").field(dt).finish(),
            Self::Custom(custom) => f
                .debug_tuple("Custom")
                .field(&custom.to_string())
                .finish(),
            Self::Unsupported(name) => f.debug_tuple("Unsupported").field(name).finish(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Instant(a), Self::Instant(b)) => a == b,
            (Self::Custom(a), Self::Custom(b)) => a.to_string() == b.to_string(),
            (Self::Unsupported(a), Self::Unsupported(b)) => a == b,
            _ => false,
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<Cow<'_, str>> for Value {
    fn from(value: Cow<'_, str>) -> Self {
        Self::Text(value.into_owned())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    fn from(value: DateTime<Tz>) -> Self {
        Self::Instant(value.fixed_offset())
    }
}
