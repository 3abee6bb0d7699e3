mod calendar;
pub use calendar::{Calendar, DEFAULT_PRODID};
mod event;
pub use event::Event;

use crate::{property::Properties, types::Value};

/// An immutable interface for an iCalendar component.
pub trait Component {
    const NAME: &'static str;

    fn get_properties(&self) -> &Properties;

    fn get_property(&self, name: &str) -> Option<&Value> {
        self.get_properties().get(name)
    }
}
