use crate::{
    EncodeError,
    component::Component,
    generator::Encoder,
    property::{Properties, PropertyName},
    types::Value,
};
use std::io::Write;

/// A single `VEVENT` entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Event {
    pub properties: Properties,
}

impl Event {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    pub fn set(&mut self, name: impl Into<PropertyName>, value: impl Into<Value>) -> Option<Value> {
        self.properties.set(name, value)
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.properties.remove(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Write this event on its own, with the default options.
    pub fn encode<W: Write>(&self, writer: W) -> Result<(), EncodeError> {
        Encoder::new(writer).encode_event(self)
    }
}

impl Component for Event {
    const NAME: &'static str = "VEVENT";

    #[inline]
    fn get_properties(&self) -> &Properties {
        &self.properties
    }
}

impl<K: Into<PropertyName>, V: Into<Value>, const N: usize> From<[(K, V); N]> for Event {
    fn from(value: [(K, V); N]) -> Self {
        value.into_iter().collect()
    }
}

impl<K: Into<PropertyName>, V: Into<Value>> FromIterator<(K, V)> for Event {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            properties: iter.into_iter().collect(),
        }
    }
}
