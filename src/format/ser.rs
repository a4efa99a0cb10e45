//! Conversion from any `serde::Serialize` type into a [`Value`].
//!
//! Structs become records with fields in declaration order, integers that
//! fit `i64` become integers, strings and chars become text. Everything else
//! (floats, bools, sequences, maps, data-carrying enum variants) becomes
//! [`Value::Unsupported`] so the formatter can apply its unsupported policy.

use serde::Serialize;
use serde::ser;

use super::{Record, Value};
use crate::error::FormatError;

impl ser::Error for FormatError {
    fn custom<T: std::fmt::Display>(msg: T) -> Self {
        FormatError::Serialize(msg.to_string())
    }
}

/// Convert a serializable value into the formatter's value model.
///
/// ```
/// #[derive(serde::Serialize)]
/// struct Point { x: i32, label: &'static str }
///
/// let v = textio::to_value(&Point { x: 3, label: "p" }).unwrap();
/// assert_eq!(textio::format_to_vec(&[v]).unwrap(), b"{ 3, p }");
/// ```
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value, FormatError> {
    value.serialize(ValueSerializer)
}

/// Serializer whose output is a [`Value`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueSerializer;

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = FormatError;

    type SerializeSeq = Unsupported;
    type SerializeTuple = Unsupported;
    type SerializeTupleStruct = Unsupported;
    type SerializeTupleVariant = Unsupported;
    type SerializeMap = Unsupported;
    type SerializeStruct = RecordSerializer;
    type SerializeStructVariant = Unsupported;

    fn serialize_bool(self, _v: bool) -> Result<Value, FormatError> {
        Ok(Value::Unsupported("bool"))
    }

    fn serialize_i8(self, v: i8) -> Result<Value, FormatError> {
        Ok(Value::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Value, FormatError> {
        Ok(Value::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Value, FormatError> {
        Ok(Value::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Value, FormatError> {
        Ok(Value::Integer(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Value, FormatError> {
        Ok(Value::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Value, FormatError> {
        Ok(Value::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Value, FormatError> {
        Ok(Value::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Value, FormatError> {
        Ok(i64::try_from(v)
            .map(Value::Integer)
            .unwrap_or(Value::Unsupported("u64")))
    }

    fn serialize_f32(self, _v: f32) -> Result<Value, FormatError> {
        Ok(Value::Unsupported("f32"))
    }

    fn serialize_f64(self, _v: f64) -> Result<Value, FormatError> {
        Ok(Value::Unsupported("f64"))
    }

    fn serialize_char(self, v: char) -> Result<Value, FormatError> {
        Ok(Value::from(v))
    }

    fn serialize_str(self, v: &str) -> Result<Value, FormatError> {
        Ok(Value::from(v))
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<Value, FormatError> {
        Ok(Value::Unsupported("bytes"))
    }

    fn serialize_none(self) -> Result<Value, FormatError> {
        Ok(Value::Unsupported("none"))
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<Value, FormatError> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value, FormatError> {
        Ok(Value::Unsupported("unit"))
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<Value, FormatError> {
        Ok(Value::Record(Record::named(name)))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value, FormatError> {
        Ok(Value::from(variant))
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Value, FormatError> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Value, FormatError> {
        Ok(Value::Unsupported("enum"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Unsupported, FormatError> {
        Ok(Unsupported("sequence"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Unsupported, FormatError> {
        Ok(Unsupported("tuple"))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Unsupported, FormatError> {
        Ok(Unsupported("tuple struct"))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Unsupported, FormatError> {
        Ok(Unsupported("enum"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Unsupported, FormatError> {
        Ok(Unsupported("map"))
    }

    fn serialize_struct(
        self,
        name: &'static str,
        _len: usize,
    ) -> Result<RecordSerializer, FormatError> {
        Ok(RecordSerializer {
            record: Record::named(name),
        })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Unsupported, FormatError> {
        Ok(Unsupported("enum"))
    }
}

/// Collects struct fields into a [`Record`].
#[derive(Debug)]
pub struct RecordSerializer {
    record: Record,
}

impl ser::SerializeStruct for RecordSerializer {
    type Ok = Value;
    type Error = FormatError;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), FormatError> {
        self.record.push(key, to_value(value)?);
        Ok(())
    }

    fn skip_field(&mut self, _key: &'static str) -> Result<(), FormatError> {
        Ok(())
    }

    fn end(self) -> Result<Value, FormatError> {
        Ok(Value::Record(self.record))
    }
}

/// Swallows the elements of a compound with no format handler.
#[derive(Debug)]
pub struct Unsupported(&'static str);

impl ser::SerializeSeq for Unsupported {
    type Ok = Value;
    type Error = FormatError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, _value: &T) -> Result<(), FormatError> {
        Ok(())
    }

    fn end(self) -> Result<Value, FormatError> {
        Ok(Value::Unsupported(self.0))
    }
}

impl ser::SerializeTuple for Unsupported {
    type Ok = Value;
    type Error = FormatError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, _value: &T) -> Result<(), FormatError> {
        Ok(())
    }

    fn end(self) -> Result<Value, FormatError> {
        Ok(Value::Unsupported(self.0))
    }
}

impl ser::SerializeTupleStruct for Unsupported {
    type Ok = Value;
    type Error = FormatError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, _value: &T) -> Result<(), FormatError> {
        Ok(())
    }

    fn end(self) -> Result<Value, FormatError> {
        Ok(Value::Unsupported(self.0))
    }
}

impl ser::SerializeTupleVariant for Unsupported {
    type Ok = Value;
    type Error = FormatError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, _value: &T) -> Result<(), FormatError> {
        Ok(())
    }

    fn end(self) -> Result<Value, FormatError> {
        Ok(Value::Unsupported(self.0))
    }
}

impl ser::SerializeMap for Unsupported {
    type Ok = Value;
    type Error = FormatError;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, _key: &T) -> Result<(), FormatError> {
        Ok(())
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, _value: &T) -> Result<(), FormatError> {
        Ok(())
    }

    fn end(self) -> Result<Value, FormatError> {
        Ok(Value::Unsupported(self.0))
    }
}

impl ser::SerializeStructVariant for Unsupported {
    type Ok = Value;
    type Error = FormatError;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        _key: &'static str,
        _value: &T,
    ) -> Result<(), FormatError> {
        Ok(())
    }

    fn end(self) -> Result<Value, FormatError> {
        Ok(Value::Unsupported(self.0))
    }
}
