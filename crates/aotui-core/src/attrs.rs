//! Insertion-ordered attribute maps and scalar attribute values.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Number;
use std::fmt;

/// A scalar that can be written into an attribute.
///
/// Markup attributes are string-valued; the `Display` impl is the single place
/// where scalars are coerced to text. Numbers keep their JSON form, so
/// `u64::MAX` and `1e300` are written back exactly as they were given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Bool(bool),
    Number(Number),
    Text(String),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Bool(b) => write!(f, "{}", b),
            AttrValue::Number(n) => write!(f, "{}", n),
            AttrValue::Text(s) => f.write_str(s),
        }
    }
}

macro_rules! from_integer {
    ($($ty:ty)*) => {
        $(
            impl From<$ty> for AttrValue {
                fn from(value: $ty) -> Self {
                    AttrValue::Number(Number::from(value))
                }
            }
        )*
    };
}

from_integer! {
    i8 i16 i32 i64 isize
    u8 u16 u32 u64 usize
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        match Number::from_f64(value) {
            Some(n) => AttrValue::Number(n),
            None if value.is_nan() => AttrValue::Text("NaN".to_string()),
            None if value > 0.0 => AttrValue::Text("Infinity".to_string()),
            None => AttrValue::Text("-Infinity".to_string()),
        }
    }
}

impl From<f32> for AttrValue {
    // Widening directly would print 0.1f32 as 0.10000000149011612.
    fn from(value: f32) -> Self {
        match value.to_string().parse::<f64>() {
            Ok(widened) => AttrValue::from(widened),
            Err(_) => AttrValue::from(f64::from(value)),
        }
    }
}

impl From<char> for AttrValue {
    fn from(value: char) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        AttrValue::Text(value.clone())
    }
}

/// Ordered `name -> value` attribute set.
///
/// Setting an existing name replaces its value in place, so the first
/// insertion decides the position and the last one decides the value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "IndexMap<String, AttrValue>")]
pub struct Attributes {
    entries: IndexMap<String, String>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, coercing the value to its text form.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.entries.insert(name.into(), value.into().to_string());
    }

    /// Chaining form of [`Attributes::set`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Apply every attribute of `other` in its order.
    pub fn extend(&mut self, other: Attributes) {
        self.entries.extend(other.entries);
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (k, v) in iter {
            attrs.set(k, v);
        }
        attrs
    }
}

impl From<IndexMap<String, AttrValue>> for Attributes {
    fn from(map: IndexMap<String, AttrValue>) -> Self {
        map.into_iter().collect()
    }
}

impl Serialize for Attributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}
