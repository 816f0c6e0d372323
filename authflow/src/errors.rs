//! Field-level validation messages.

#[cfg(test)]
#[path = "errors_test.rs"]
mod errors_test;

use std::collections::BTreeMap;

use crate::field::Field;

/// Mapping from field to message. A missing key means the field is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    by_field: BTreeMap<Field, String>,
}

impl FormErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.by_field.insert(field, message.into());
    }

    pub fn remove(&mut self, field: Field) -> Option<String> {
        self.by_field.remove(&field)
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.by_field.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.by_field.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.by_field.is_empty()
    }

    pub fn len(&self) -> usize {
        self.by_field.len()
    }

    /// Iterate in field declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.by_field.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl FromIterator<(Field, String)> for FormErrors {
    fn from_iter<I: IntoIterator<Item = (Field, String)>>(iter: I) -> Self {
        Self { by_field: iter.into_iter().collect() }
    }
}
