//! Canonical JSON text for item payloads.
//!
//! The payload is lowered into a [`serde_json::Value`] through a depth-tracking
//! serializer, then object keys are sorted at every level and the result is written
//! compactly by serde_json.
//! The output is byte-identical for equal payloads regardless of `HashMap`
//! iteration order or serde_json's `preserve_order` feature.
//!
//! Self-referential payloads (e.g. `Rc<RefCell<…>>` cycles with a hand-written
//! `Serialize`) never terminate on their own; the depth limit turns them into
//! [`SerializationError::DepthExceeded`] instead of a stack overflow.

use crate::error::SerializationError;
use serde::Serialize;
use serde::ser::{self, Impossible};
use serde_json::{Map, Number, Value};

/// Default payload nesting limit.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Serialize `value` to canonical JSON text with the default depth limit.
pub fn to_canonical_string<T: Serialize + ?Sized>(value: &T) -> Result<String, SerializationError> {
    to_canonical_string_with_depth(value, DEFAULT_MAX_DEPTH)
}

/// Serialize `value` to canonical JSON text, failing past `max_depth` nesting levels.
pub fn to_canonical_string_with_depth<T: Serialize + ?Sized>(
    value: &T,
    max_depth: usize,
) -> Result<String, SerializationError> {
    let mut lowered = value.serialize(ValueSerializer {
        depth: 0,
        max_depth,
    })?;
    lowered.sort_all_objects();
    serde_json::to_string(&lowered).map_err(|e| SerializationError::Unsupported(e.to_string()))
}

// ---------------------------------------------------------------------------
// Depth-tracking value serializer
// ---------------------------------------------------------------------------

#[derive(Clone, Copy)]
struct ValueSerializer {
    depth: usize,
    max_depth: usize,
}

impl ValueSerializer {
    /// Serializer for a value one level below this one.
    fn nested(self) -> Result<Self, SerializationError> {
        if self.depth >= self.max_depth {
            return Err(SerializationError::DepthExceeded {
                limit: self.max_depth,
            });
        }
        Ok(Self {
            depth: self.depth + 1,
            ..self
        })
    }
}

fn single_entry(key: &str, value: Value) -> Value {
    let mut map = Map::new();
    map.insert(key.to_owned(), value);
    Value::Object(map)
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = SerializationError;

    type SerializeSeq = SeqBuilder;
    type SerializeTuple = SeqBuilder;
    type SerializeTupleStruct = SeqBuilder;
    type SerializeTupleVariant = VariantSeqBuilder;
    type SerializeMap = MapBuilder;
    type SerializeStruct = MapBuilder;
    type SerializeStructVariant = VariantMapBuilder;

    fn serialize_bool(self, v: bool) -> Result<Value, SerializationError> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value, SerializationError> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Value, SerializationError> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Value, SerializationError> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Value, SerializationError> {
        Ok(Value::Number(v.into()))
    }

    fn serialize_i128(self, v: i128) -> Result<Value, SerializationError> {
        if let Ok(n) = i64::try_from(v) {
            return self.serialize_i64(n);
        }
        match u64::try_from(v) {
            Ok(n) => self.serialize_u64(n),
            Err(_) => Err(SerializationError::IntegerOutOfRange(v.to_string())),
        }
    }

    fn serialize_u8(self, v: u8) -> Result<Value, SerializationError> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Value, SerializationError> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Value, SerializationError> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Value, SerializationError> {
        Ok(Value::Number(v.into()))
    }

    fn serialize_u128(self, v: u128) -> Result<Value, SerializationError> {
        match u64::try_from(v) {
            Ok(n) => self.serialize_u64(n),
            Err(_) => Err(SerializationError::IntegerOutOfRange(v.to_string())),
        }
    }

    fn serialize_f32(self, v: f32) -> Result<Value, SerializationError> {
        self.serialize_f64(f64::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<Value, SerializationError> {
        Number::from_f64(v)
            .map(Value::Number)
            .ok_or(SerializationError::NonFiniteFloat)
    }

    fn serialize_char(self, v: char) -> Result<Value, SerializationError> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value, SerializationError> {
        Ok(Value::String(v.to_owned()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value, SerializationError> {
        Ok(Value::Array(v.iter().map(|b| Value::from(*b)).collect()))
    }

    fn serialize_none(self) -> Result<Value, SerializationError> {
        Ok(Value::Null)
    }

    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<Value, SerializationError> {
        value.serialize(self.nested()?)
    }

    fn serialize_unit(self) -> Result<Value, SerializationError> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value, SerializationError> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
    ) -> Result<Value, SerializationError> {
        Ok(Value::String(variant.to_owned()))
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Value, SerializationError> {
        value.serialize(self.nested()?)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value, SerializationError> {
        let inner = value.serialize(self.nested()?)?;
        Ok(single_entry(variant, inner))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SeqBuilder, SerializationError> {
        Ok(SeqBuilder {
            parent: self,
            items: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SeqBuilder, SerializationError> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<SeqBuilder, SerializationError> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<VariantSeqBuilder, SerializationError> {
        Ok(VariantSeqBuilder {
            variant,
            seq: self.serialize_seq(Some(len))?,
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<MapBuilder, SerializationError> {
        Ok(MapBuilder {
            parent: self,
            map: Map::new(),
            pending_key: None,
        })
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<MapBuilder, SerializationError> {
        self.serialize_map(Some(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<VariantMapBuilder, SerializationError> {
        Ok(VariantMapBuilder {
            variant,
            map: self.serialize_map(Some(len))?,
        })
    }
}

struct SeqBuilder {
    parent: ValueSerializer,
    items: Vec<Value>,
}

impl SeqBuilder {
    fn push<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), SerializationError> {
        self.items.push(value.serialize(self.parent.nested()?)?);
        Ok(())
    }
}

impl ser::SerializeSeq for SeqBuilder {
    type Ok = Value;
    type Error = SerializationError;

    fn serialize_element<T: ?Sized + Serialize>(
        &mut self,
        value: &T,
    ) -> Result<(), SerializationError> {
        self.push(value)
    }

    fn end(self) -> Result<Value, SerializationError> {
        Ok(Value::Array(self.items))
    }
}

impl ser::SerializeTuple for SeqBuilder {
    type Ok = Value;
    type Error = SerializationError;

    fn serialize_element<T: ?Sized + Serialize>(
        &mut self,
        value: &T,
    ) -> Result<(), SerializationError> {
        self.push(value)
    }

    fn end(self) -> Result<Value, SerializationError> {
        Ok(Value::Array(self.items))
    }
}

impl ser::SerializeTupleStruct for SeqBuilder {
    type Ok = Value;
    type Error = SerializationError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        value: &T,
    ) -> Result<(), SerializationError> {
        self.push(value)
    }

    fn end(self) -> Result<Value, SerializationError> {
        Ok(Value::Array(self.items))
    }
}

struct VariantSeqBuilder {
    variant: &'static str,
    seq: SeqBuilder,
}

impl ser::SerializeTupleVariant for VariantSeqBuilder {
    type Ok = Value;
    type Error = SerializationError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        value: &T,
    ) -> Result<(), SerializationError> {
        self.seq.push(value)
    }

    fn end(self) -> Result<Value, SerializationError> {
        Ok(single_entry(self.variant, Value::Array(self.seq.items)))
    }
}

struct MapBuilder {
    parent: ValueSerializer,
    map: Map<String, Value>,
    pending_key: Option<String>,
}

impl MapBuilder {
    fn insert<T: ?Sized + Serialize>(
        &mut self,
        key: String,
        value: &T,
    ) -> Result<(), SerializationError> {
        let value = value.serialize(self.parent.nested()?)?;
        self.map.insert(key, value);
        Ok(())
    }
}

impl ser::SerializeMap for MapBuilder {
    type Ok = Value;
    type Error = SerializationError;

    fn serialize_key<T: ?Sized + Serialize>(&mut self, key: &T) -> Result<(), SerializationError> {
        self.pending_key = Some(key.serialize(MapKeySerializer)?);
        Ok(())
    }

    fn serialize_value<T: ?Sized + Serialize>(
        &mut self,
        value: &T,
    ) -> Result<(), SerializationError> {
        let key = self.pending_key.take().ok_or_else(|| {
            SerializationError::Unsupported("map value serialized before its key".to_string())
        })?;
        self.insert(key, value)
    }

    fn end(self) -> Result<Value, SerializationError> {
        Ok(Value::Object(self.map))
    }
}

impl ser::SerializeStruct for MapBuilder {
    type Ok = Value;
    type Error = SerializationError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), SerializationError> {
        self.insert(key.to_owned(), value)
    }

    fn end(self) -> Result<Value, SerializationError> {
        Ok(Value::Object(self.map))
    }
}

struct VariantMapBuilder {
    variant: &'static str,
    map: MapBuilder,
}

impl ser::SerializeStructVariant for VariantMapBuilder {
    type Ok = Value;
    type Error = SerializationError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), SerializationError> {
        self.map.insert(key.to_owned(), value)
    }

    fn end(self) -> Result<Value, SerializationError> {
        Ok(single_entry(self.variant, Value::Object(self.map.map)))
    }
}

/// Map keys become JSON object keys: strings as-is, scalars stringified.
struct MapKeySerializer;

impl ser::Serializer for MapKeySerializer {
    type Ok = String;
    type Error = SerializationError;

    type SerializeSeq = Impossible<String, SerializationError>;
    type SerializeTuple = Impossible<String, SerializationError>;
    type SerializeTupleStruct = Impossible<String, SerializationError>;
    type SerializeTupleVariant = Impossible<String, SerializationError>;
    type SerializeMap = Impossible<String, SerializationError>;
    type SerializeStruct = Impossible<String, SerializationError>;
    type SerializeStructVariant = Impossible<String, SerializationError>;

    fn serialize_bool(self, v: bool) -> Result<String, SerializationError> {
        Ok(v.to_string())
    }

    fn serialize_i8(self, v: i8) -> Result<String, SerializationError> {
        Ok(v.to_string())
    }

    fn serialize_i16(self, v: i16) -> Result<String, SerializationError> {
        Ok(v.to_string())
    }

    fn serialize_i32(self, v: i32) -> Result<String, SerializationError> {
        Ok(v.to_string())
    }

    fn serialize_i64(self, v: i64) -> Result<String, SerializationError> {
        Ok(v.to_string())
    }

    fn serialize_i128(self, v: i128) -> Result<String, SerializationError> {
        Ok(v.to_string())
    }

    fn serialize_u8(self, v: u8) -> Result<String, SerializationError> {
        Ok(v.to_string())
    }

    fn serialize_u16(self, v: u16) -> Result<String, SerializationError> {
        Ok(v.to_string())
    }

    fn serialize_u32(self, v: u32) -> Result<String, SerializationError> {
        Ok(v.to_string())
    }

    fn serialize_u64(self, v: u64) -> Result<String, SerializationError> {
        Ok(v.to_string())
    }

    fn serialize_u128(self, v: u128) -> Result<String, SerializationError> {
        Ok(v.to_string())
    }

    fn serialize_f32(self, _v: f32) -> Result<String, SerializationError> {
        Err(SerializationError::KeyMustBeString)
    }

    fn serialize_f64(self, _v: f64) -> Result<String, SerializationError> {
        Err(SerializationError::KeyMustBeString)
    }

    fn serialize_char(self, v: char) -> Result<String, SerializationError> {
        Ok(v.to_string())
    }

    fn serialize_str(self, v: &str) -> Result<String, SerializationError> {
        Ok(v.to_owned())
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<String, SerializationError> {
        Err(SerializationError::KeyMustBeString)
    }

    fn serialize_none(self) -> Result<String, SerializationError> {
        Err(SerializationError::KeyMustBeString)
    }

    fn serialize_some<T: ?Sized + Serialize>(
        self,
        _value: &T,
    ) -> Result<String, SerializationError> {
        Err(SerializationError::KeyMustBeString)
    }

    fn serialize_unit(self) -> Result<String, SerializationError> {
        Err(SerializationError::KeyMustBeString)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<String, SerializationError> {
        Err(SerializationError::KeyMustBeString)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
    ) -> Result<String, SerializationError> {
        Ok(variant.to_owned())
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<String, SerializationError> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<String, SerializationError> {
        Err(SerializationError::KeyMustBeString)
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq, SerializationError> {
        Err(SerializationError::KeyMustBeString)
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple, SerializationError> {
        Err(SerializationError::KeyMustBeString)
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct, SerializationError> {
        Err(SerializationError::KeyMustBeString)
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, SerializationError> {
        Err(SerializationError::KeyMustBeString)
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap, SerializationError> {
        Err(SerializationError::KeyMustBeString)
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStruct, SerializationError> {
        Err(SerializationError::KeyMustBeString)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, SerializationError> {
        Err(SerializationError::KeyMustBeString)
    }
}
