use std::collections::BTreeMap;

use serde::ser::{self, Error as _, Serialize};
use serde_json::Value;

use crate::error::CompareError;

/// A serialized value as seen by structural comparison.
///
/// Unlike a JSON tree this keeps unit, `None`, `Some(..)` and non-finite
/// floats apart, so values which differ never collapse into the same node.
#[derive(Debug, Clone)]
pub(crate) enum Node {
    Unit,
    None,
    Some(Box<Node>),
    Bool(bool),
    Int(i128),
    Float(f64),
    Str(String),
    Seq(Vec<Node>),
    Map(BTreeMap<String, Node>),
}

impl Node {
    /// Serialize a value into a node.
    pub(crate) fn from_value<T>(value: &T) -> Result<Self, CompareError>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(NodeSerializer)
    }

    pub(crate) fn as_f64(&self) -> Option<f64> {
        match *self {
            Node::Int(n) => Some(n as f64),
            Node::Float(n) => Some(n),
            _ => None,
        }
    }

    /// Test if the node is missing or an empty container.
    pub(crate) fn is_empty(&self) -> bool {
        match self {
            Node::Unit | Node::None => true,
            Node::Some(value) => value.is_empty(),
            Node::Seq(items) => items.is_empty(),
            Node::Map(map) => map.is_empty(),
            _ => false,
        }
    }

    /// Convert into JSON for display.
    ///
    /// This is lossy, distinct nodes may render the same.
    pub(crate) fn to_json(&self) -> Value {
        match self {
            Node::Unit | Node::None => Value::Null,
            Node::Some(value) => value.to_json(),
            Node::Bool(b) => Value::Bool(*b),
            Node::Int(n) => {
                if let Ok(n) = i64::try_from(*n) {
                    Value::from(n)
                } else if let Ok(n) = u64::try_from(*n) {
                    Value::from(n)
                } else {
                    Value::String(n.to_string())
                }
            }
            Node::Float(n) => serde_json::Number::from_f64(*n)
                .map_or_else(|| Value::String(n.to_string()), Value::Number),
            Node::Str(s) => Value::String(s.clone()),
            Node::Seq(items) => Value::Array(items.iter().map(Node::to_json).collect()),
            Node::Map(map) => Value::Object(
                map.iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
        }
    }
}

fn key_name(key: Node) -> Result<String, CompareError> {
    match key {
        Node::Str(s) => Ok(s),
        Node::Int(n) => Ok(n.to_string()),
        Node::Bool(b) => Ok(b.to_string()),
        _ => Err(CompareError::custom(
            "map keys must be strings, integers or booleans",
        )),
    }
}

fn variant(variant: &'static str, value: Node) -> Node {
    Node::Map(BTreeMap::from([(variant.to_owned(), value)]))
}

struct NodeSerializer;

impl ser::Serializer for NodeSerializer {
    type Ok = Node;
    type Error = CompareError;
    type SerializeSeq = SerializeSeq;
    type SerializeTuple = SerializeSeq;
    type SerializeTupleStruct = SerializeSeq;
    type SerializeTupleVariant = SerializeTupleVariant;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeStructVariant;

    #[inline]
    fn serialize_bool(self, v: bool) -> Result<Node, CompareError> {
        Ok(Node::Bool(v))
    }

    #[inline]
    fn serialize_i8(self, v: i8) -> Result<Node, CompareError> {
        Ok(Node::Int(v.into()))
    }

    #[inline]
    fn serialize_i16(self, v: i16) -> Result<Node, CompareError> {
        Ok(Node::Int(v.into()))
    }

    #[inline]
    fn serialize_i32(self, v: i32) -> Result<Node, CompareError> {
        Ok(Node::Int(v.into()))
    }

    #[inline]
    fn serialize_i64(self, v: i64) -> Result<Node, CompareError> {
        Ok(Node::Int(v.into()))
    }

    #[inline]
    fn serialize_i128(self, v: i128) -> Result<Node, CompareError> {
        Ok(Node::Int(v))
    }

    #[inline]
    fn serialize_u8(self, v: u8) -> Result<Node, CompareError> {
        Ok(Node::Int(v.into()))
    }

    #[inline]
    fn serialize_u16(self, v: u16) -> Result<Node, CompareError> {
        Ok(Node::Int(v.into()))
    }

    #[inline]
    fn serialize_u32(self, v: u32) -> Result<Node, CompareError> {
        Ok(Node::Int(v.into()))
    }

    #[inline]
    fn serialize_u64(self, v: u64) -> Result<Node, CompareError> {
        Ok(Node::Int(v.into()))
    }

    fn serialize_u128(self, v: u128) -> Result<Node, CompareError> {
        match i128::try_from(v) {
            Ok(v) => Ok(Node::Int(v)),
            Err(..) => Err(CompareError::custom(format_args!(
                "integer {v} is out of range"
            ))),
        }
    }

    #[inline]
    fn serialize_f32(self, v: f32) -> Result<Node, CompareError> {
        Ok(Node::Float(v.into()))
    }

    #[inline]
    fn serialize_f64(self, v: f64) -> Result<Node, CompareError> {
        Ok(Node::Float(v))
    }

    #[inline]
    fn serialize_char(self, v: char) -> Result<Node, CompareError> {
        Ok(Node::Str(v.to_string()))
    }

    #[inline]
    fn serialize_str(self, v: &str) -> Result<Node, CompareError> {
        Ok(Node::Str(v.to_owned()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Node, CompareError> {
        Ok(Node::Seq(v.iter().map(|b| Node::Int((*b).into())).collect()))
    }

    #[inline]
    fn serialize_none(self) -> Result<Node, CompareError> {
        Ok(Node::None)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Node, CompareError>
    where
        T: ?Sized + Serialize,
    {
        Ok(Node::Some(Box::new(value.serialize(self)?)))
    }

    #[inline]
    fn serialize_unit(self) -> Result<Node, CompareError> {
        Ok(Node::Unit)
    }

    #[inline]
    fn serialize_unit_struct(self, _: &'static str) -> Result<Node, CompareError> {
        Ok(Node::Unit)
    }

    #[inline]
    fn serialize_unit_variant(
        self,
        _: &'static str,
        _: u32,
        variant: &'static str,
    ) -> Result<Node, CompareError> {
        Ok(Node::Str(variant.to_owned()))
    }

    fn serialize_newtype_struct<T>(self, _: &'static str, value: &T) -> Result<Node, CompareError>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _: &'static str,
        _: u32,
        name: &'static str,
        value: &T,
    ) -> Result<Node, CompareError>
    where
        T: ?Sized + Serialize,
    {
        Ok(variant(name, value.serialize(self)?))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeSeq, CompareError> {
        Ok(SerializeSeq {
            items: Vec::with_capacity(len.unwrap_or_default()),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeSeq, CompareError> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _: &'static str,
        len: usize,
    ) -> Result<SerializeSeq, CompareError> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _: &'static str,
        _: u32,
        name: &'static str,
        len: usize,
    ) -> Result<SerializeTupleVariant, CompareError> {
        Ok(SerializeTupleVariant {
            name,
            items: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, _: Option<usize>) -> Result<SerializeMap, CompareError> {
        Ok(SerializeMap {
            map: BTreeMap::new(),
            key: None,
        })
    }

    fn serialize_struct(self, _: &'static str, _: usize) -> Result<SerializeMap, CompareError> {
        self.serialize_map(None)
    }

    fn serialize_struct_variant(
        self,
        _: &'static str,
        _: u32,
        name: &'static str,
        _: usize,
    ) -> Result<SerializeStructVariant, CompareError> {
        Ok(SerializeStructVariant {
            name,
            map: BTreeMap::new(),
        })
    }
}

struct SerializeSeq {
    items: Vec<Node>,
}

impl ser::SerializeSeq for SerializeSeq {
    type Ok = Node;
    type Error = CompareError;

    fn serialize_element<T>(&mut self, value: &T) -> Result<(), CompareError>
    where
        T: ?Sized + Serialize,
    {
        self.items.push(Node::from_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Node, CompareError> {
        Ok(Node::Seq(self.items))
    }
}

impl ser::SerializeTuple for SerializeSeq {
    type Ok = Node;
    type Error = CompareError;

    fn serialize_element<T>(&mut self, value: &T) -> Result<(), CompareError>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Node, CompareError> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SerializeSeq {
    type Ok = Node;
    type Error = CompareError;

    fn serialize_field<T>(&mut self, value: &T) -> Result<(), CompareError>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Node, CompareError> {
        ser::SerializeSeq::end(self)
    }
}

struct SerializeTupleVariant {
    name: &'static str,
    items: Vec<Node>,
}

impl ser::SerializeTupleVariant for SerializeTupleVariant {
    type Ok = Node;
    type Error = CompareError;

    fn serialize_field<T>(&mut self, value: &T) -> Result<(), CompareError>
    where
        T: ?Sized + Serialize,
    {
        self.items.push(Node::from_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Node, CompareError> {
        Ok(variant(self.name, Node::Seq(self.items)))
    }
}

struct SerializeMap {
    map: BTreeMap<String, Node>,
    key: Option<String>,
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Node;
    type Error = CompareError;

    fn serialize_key<T>(&mut self, key: &T) -> Result<(), CompareError>
    where
        T: ?Sized + Serialize,
    {
        self.key = Some(key_name(Node::from_value(key)?)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<(), CompareError>
    where
        T: ?Sized + Serialize,
    {
        let Some(key) = self.key.take() else {
            return Err(CompareError::custom("map value serialized without a key"));
        };

        self.map.insert(key, Node::from_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Node, CompareError> {
        Ok(Node::Map(self.map))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Node;
    type Error = CompareError;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<(), CompareError>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_owned(), Node::from_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Node, CompareError> {
        Ok(Node::Map(self.map))
    }
}

struct SerializeStructVariant {
    name: &'static str,
    map: BTreeMap<String, Node>,
}

impl ser::SerializeStructVariant for SerializeStructVariant {
    type Ok = Node;
    type Error = CompareError;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<(), CompareError>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_owned(), Node::from_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Node, CompareError> {
        Ok(variant(self.name, Node::Map(self.map)))
    }
}

#[cfg(test)]
mod tests {
    use super::Node;

    #[test]
    fn absent_values_stay_apart() {
        let none = Node::from_value(&None::<Option<u32>>).unwrap();
        let some_none = Node::from_value(&Some(None::<u32>)).unwrap();
        let unit = Node::from_value(&Some(())).unwrap();

        assert!(matches!(none, Node::None));
        assert!(matches!(some_none, Node::Some(inner) if matches!(*inner, Node::None)));
        assert!(matches!(unit, Node::Some(inner) if matches!(*inner, Node::Unit)));
    }

    #[test]
    fn non_finite_floats_render_as_strings() {
        let node = Node::from_value(&[f64::NAN, f64::INFINITY, 1.5]).unwrap();
        assert_eq!(node.to_json(), serde_json::json!(["NaN", "inf", 1.5]));
    }

    #[test]
    fn map_keys() {
        use std::collections::BTreeMap;

        let node = Node::from_value(&BTreeMap::from([(1u32, "a"), (2, "b")])).unwrap();
        assert_eq!(node.to_json(), serde_json::json!({ "1": "a", "2": "b" }));

        let error = Node::from_value(&BTreeMap::from([((1, 2), "a")])).unwrap_err();
        assert_eq!(
            error.to_string(),
            "map keys must be strings, integers or booleans"
        );
    }
}
