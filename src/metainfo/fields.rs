//! Typed access to decoded dictionaries.
//!
//! Every "look up a key, check its variant" step of extraction goes through
//! here, so the failure taxonomy lives in one place.

use std::collections::BTreeMap;

use bytes::Bytes;

use super::error::MetainfoError;
use crate::bencode::{Value, ValueKind};

fn mismatch(field: &'static str, expected: ValueKind, found: &Value) -> MetainfoError {
    MetainfoError::TypeMismatch {
        field,
        expected,
        found: found.kind(),
    }
}

pub(crate) fn expect_dict<'a>(
    value: &'a Value,
    field: &'static str,
) -> Result<&'a BTreeMap<Bytes, Value>, MetainfoError> {
    value
        .as_dict()
        .ok_or_else(|| mismatch(field, ValueKind::Dict, value))
}

pub(crate) fn expect_list<'a>(
    value: &'a Value,
    field: &'static str,
) -> Result<&'a [Value], MetainfoError> {
    value
        .as_list()
        .ok_or_else(|| mismatch(field, ValueKind::List, value))
}

pub(crate) fn expect_bytes<'a>(
    value: &'a Value,
    field: &'static str,
) -> Result<&'a Bytes, MetainfoError> {
    value
        .as_bytes()
        .ok_or_else(|| mismatch(field, ValueKind::Bytes, value))
}

pub(crate) fn expect_integer(value: &Value, field: &'static str) -> Result<i64, MetainfoError> {
    value
        .as_integer()
        .ok_or_else(|| mismatch(field, ValueKind::Integer, value))
}

pub(crate) fn expect_text(value: &Value, field: &'static str) -> Result<String, MetainfoError> {
    let bytes = expect_bytes(value, field)?;
    std::str::from_utf8(bytes)
        .map(String::from)
        .map_err(|_| MetainfoError::InvalidUtf8(field))
}

/// A dictionary being read field by field.
pub(crate) struct Fields<'a> {
    dict: &'a BTreeMap<Bytes, Value>,
}

impl<'a> Fields<'a> {
    /// Fails with a type mismatch unless `value` is a dictionary.
    pub(crate) fn of(value: &'a Value, field: &'static str) -> Result<Self, MetainfoError> {
        expect_dict(value, field).map(|dict| Self { dict })
    }

    pub(crate) fn get(&self, key: &'static str) -> Option<&'a Value> {
        self.dict.get(key.as_bytes())
    }

    pub(crate) fn require(&self, key: &'static str) -> Result<&'a Value, MetainfoError> {
        self.get(key).ok_or(MetainfoError::MissingField(key))
    }

    pub(crate) fn integer(&self, key: &'static str) -> Result<i64, MetainfoError> {
        expect_integer(self.require(key)?, key)
    }

    pub(crate) fn bytes(&self, key: &'static str) -> Result<&'a Bytes, MetainfoError> {
        expect_bytes(self.require(key)?, key)
    }

    pub(crate) fn text(&self, key: &'static str) -> Result<String, MetainfoError> {
        expect_text(self.require(key)?, key)
    }

    pub(crate) fn list(&self, key: &'static str) -> Result<&'a [Value], MetainfoError> {
        expect_list(self.require(key)?, key)
    }

    /// Reads an integer that must be at least `min`.
    pub(crate) fn integer_at_least(
        &self,
        key: &'static str,
        min: i64,
    ) -> Result<u64, MetainfoError> {
        let value = self.integer(key)?;
        if value < min {
            return Err(MetainfoError::OutOfRange { field: key, value });
        }
        u64::try_from(value).map_err(|_| MetainfoError::OutOfRange { field: key, value })
    }
}
