//! The closed set of formattable values.

/// A value the formatter knows how to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Decimal digits, with a leading `-` when negative
    Integer(i64),
    /// Raw bytes of the string
    Text(String),
    /// `{ field, field, ... }`
    Record(Record),
    /// A run-time value with no format handler, named by its type
    Unsupported(&'static str),
}

impl Value {
    /// The name used in errors for this value's type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Text(_) => "text",
            Value::Record(_) => "record",
            Value::Unsupported(name) => *name,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Value::Unsupported(_))
    }
}

/// Named fields in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    name: Option<String>,
    fields: Vec<(String, Value)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty record carrying a type name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            fields: Vec::new(),
        }
    }

    /// Append a field, builder style.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(name, value);
        self
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.push((name.into(), value.into()));
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn fields(&self) -> &[(String, Value)] {
        &self.fields
    }

    /// Look up a field value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

macro_rules! integer_values {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Integer(i64::from(v))
                }
            }
        )*
    };
}

integer_values!(i8, i16, i32, i64, u8, u16, u32);

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::Text(v.clone())
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<Record> for Value {
    fn from(v: Record) -> Self {
        Value::Record(v)
    }
}

/// Build a `[Value; N]` from anything convertible into [`Value`].
///
/// ```
/// let out = textio::format_to_vec(&textio::values![1, "two"]).unwrap();
/// assert_eq!(out, b"1 two");
/// ```
#[macro_export]
macro_rules! values {
    ($($v:expr),* $(,)?) => {
        [$($crate::Value::from($v)),*]
    };
}
