use crate::{
    EncodeError,
    component::{Component, Event},
    generator::Encoder,
    property::{Properties, PropertyName},
    types::Value,
};
use std::{
    any::{Any, type_name},
    io::Write,
};

pub const DEFAULT_PRODID: &str = "-//ics.rs//iCalendar Encoder//EN";

/// A `VCALENDAR` holding a list of events.
#[derive(Debug, Clone, PartialEq)]
pub struct Calendar {
    pub properties: Properties,
    pub(crate) events: Vec<Event>,
}

impl Default for Calendar {
    fn default() -> Self {
        Self {
            properties: [
                ("VERSION", "2.0"),
                ("PRODID", DEFAULT_PRODID),
                ("CALSCAL", "GREGORIAN"),
            ]
            .into_iter()
            .collect(),
            events: vec![],
        }
    }
}

impl Calendar {
    /// Return a new calendar with `VERSION`, `PRODID` and `CALSCAL` preset.
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

    /// Add an object to the calendar.
    ///
    /// Only [`Event`]s are accepted; anything else is rejected and leaves the
    /// calendar untouched.
    pub fn add<O: Any>(&mut self, object: O) -> Result<(), EncodeError> {
        let object: Box<dyn Any> = Box::new(object);
        let Ok(event) = object.downcast::<Event>() else {
            return Err(EncodeError::UnsupportedObjectType(type_name::<O>()));
        };
        self.events.push(*event);
        Ok(())
    }

    #[inline]
    pub fn push(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Events in the order they were added.
    #[inline]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Write the complete calendar with the default options.
    pub fn encode<W: Write>(&self, writer: W) -> Result<(), EncodeError> {
        Encoder::new(writer).encode_calendar(self)
    }
}

impl Component for Calendar {
    const NAME: &'static str = "VCALENDAR";

    #[inline]
    fn get_properties(&self) -> &Properties {
        &self.properties
    }
}

impl Extend<Event> for Calendar {
    fn extend<T: IntoIterator<Item = Event>>(&mut self, iter: T) {
        self.events.extend(iter);
    }
}
