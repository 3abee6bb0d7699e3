use crate::types::Value;
use derive_more::{Deref, Display, Into};
use itertools::Itertools;
use std::{borrow::Borrow, collections::HashMap};

/// A property name in its canonical, upper-cased form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Deref, Into)]
pub struct PropertyName(String);

impl PropertyName {
    pub fn new(name: &str) -> Self {
        Self(name.to_uppercase())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PropertyName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PropertyName {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

impl Borrow<str> for PropertyName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Case-insensitive property map shared by events and calendars.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties(HashMap<PropertyName, Value>);

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(PropertyName::new(name).as_str())
    }

    /// Set a property, returning the value it replaced.
    pub fn set(&mut self, name: impl Into<PropertyName>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(name.into(), value.into())
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.0.remove(PropertyName::new(name).as_str())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Properties in byte-wise ascending order of their names.
    pub fn sorted(&self) -> impl Iterator<Item = (&PropertyName, &Value)> {
        self.0.iter().sorted_unstable_by(|(a, _), (b, _)| a.cmp(b))
    }
}

impl<K: Into<PropertyName>, V: Into<Value>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Self::new();
        for (name, value) in iter {
            props.set(name, value);
        }
        props
    }
}
