//! Text and JSON codecs for [`Duration`].

use std::fmt;

use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use tracing::trace;

use crate::duration::Duration;
use crate::error::{Codec, Error, JsonKind, ParseError, Result};

impl Duration {
    /// Encodes the rendered duration as UTF-8 text. Zero encodes as empty.
    pub fn to_text(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }

    /// Decodes a duration from UTF-8 text.
    pub fn from_text(text: &[u8]) -> Result<Self> {
        let s = std::str::from_utf8(text).map_err(|err| {
            trace!(codec = %Codec::Text, error = %err, "duration text is not utf-8");
            Error::from(err)
        })?;
        Self::parse(s).map_err(|source| decode_failed(Codec::Text, source))
    }

    /// Decodes text into `self`. On error `self` is left unchanged.
    pub fn unmarshal_text(&mut self, text: &[u8]) -> Result<()> {
        *self = Self::from_text(text)?;
        Ok(())
    }

    /// Encodes the rendered duration as a JSON string literal.
    pub fn to_json(&self) -> Vec<u8> {
        Value::String(self.to_string()).to_string().into_bytes()
    }

    /// Decodes a duration from a JSON string value.
    ///
    /// Non-string values, `null` included, are rejected with
    /// [`Error::JsonType`].
    pub fn from_json(data: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(data)?;
        let kind = match value {
            Value::String(text) => {
                return Self::parse(&text).map_err(|source| decode_failed(Codec::Json, source));
            }
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Bool,
            Value::Number(_) => JsonKind::Number,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        };
        trace!(codec = %Codec::Json, %kind, "duration json is not a string");
        Err(Error::JsonType(kind))
    }

    /// Decodes JSON into `self`. On error `self` is left unchanged.
    pub fn unmarshal_json(&mut self, data: &[u8]) -> Result<()> {
        *self = Self::from_json(data)?;
        Ok(())
    }
}

fn decode_failed(codec: Codec, source: ParseError) -> Error {
    trace!(%codec, input = source.input(), error = %source, "duration decode failed");
    Error::Parse { codec, source }
}

impl Serialize for Duration {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// Grammar failures surface as the format's custom error message; use
/// [`Duration::from_json`] to get a typed [`Error::Parse`] with its codec tag.
impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct DurationVisitor;

        impl<'de> Visitor<'de> for DurationVisitor {
            type Value = Duration;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a duration string (e.g., '1h30m')")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Self::Value, E> {
                Duration::parse(v).map_err(E::custom)
            }

            fn visit_bytes<E: de::Error>(self, v: &[u8]) -> std::result::Result<Self::Value, E> {
                let s = std::str::from_utf8(v)
                    .map_err(|_| E::invalid_value(Unexpected::Bytes(v), &self))?;
                self.visit_str(s)
            }
        }

        deserializer.deserialize_str(DurationVisitor)
    }
}
