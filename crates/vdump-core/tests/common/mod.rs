//! In-memory host binding shared by the integration tests.
//!
//! `MockValue` is a tiny owned value tree standing in for the host's
//! value-accessor, and `CapturingSink` records every display callback so
//! tests can assert on the full transcript of a printer run.

// Shared between test binaries; each uses a subset of these helpers.
#![allow(dead_code)]

use vdump_core::error::{DumpError, DumpResult};
use vdump_core::fragment::float_fragment;
use vdump_core::host::{DisplaySink, Value, ValueKind};

/// Owned stand-in for a value in the inspected process.
#[derive(Debug, Clone)]
pub enum MockValue
{
    Integer(u64),
    Signed(i64),
    Float(f64),
    Text(&'static str),
    Struct(Vec<(&'static str, MockValue)>),
}

impl MockValue
{
    fn kind_mismatch(&self, expected: ValueKind) -> DumpError
    {
        let found = match self {
            MockValue::Integer(_) => ValueKind::Integer,
            MockValue::Signed(_) => ValueKind::SignedInteger,
            MockValue::Float(_) => ValueKind::Float,
            MockValue::Text(_) | MockValue::Struct(_) => ValueKind::Struct,
        };
        DumpError::KindMismatch { expected, found }
    }
}

impl Value for MockValue
{
    fn field(&self, name: &str) -> DumpResult<Box<dyn Value + '_>>
    {
        if let MockValue::Struct(fields) = self {
            for (field_name, child) in fields {
                if *field_name == name {
                    return Ok(Box::new(child));
                }
            }
        }
        Err(DumpError::MissingField {
            field: name.to_string(),
        })
    }

    fn integer(&self) -> DumpResult<u64>
    {
        match self {
            MockValue::Integer(value) => Ok(*value),
            other => Err(other.kind_mismatch(ValueKind::Integer)),
        }
    }

    fn signed_integer(&self) -> DumpResult<i64>
    {
        match self {
            MockValue::Signed(value) => Ok(*value),
            other => Err(other.kind_mismatch(ValueKind::SignedInteger)),
        }
    }

    fn floating_point(&self) -> DumpResult<f64>
    {
        match self {
            MockValue::Float(value) => Ok(*value),
            other => Err(other.kind_mismatch(ValueKind::Float)),
        }
    }
}

impl<'a> Value for &'a MockValue
{
    fn field(&self, name: &str) -> DumpResult<Box<dyn Value + '_>>
    {
        (**self).field(name)
    }

    fn integer(&self) -> DumpResult<u64>
    {
        (**self).integer()
    }

    fn signed_integer(&self) -> DumpResult<i64>
    {
        (**self).signed_integer()
    }

    fn floating_point(&self) -> DumpResult<f64>
    {
        (**self).floating_point()
    }
}

/// One recorded display callback.
#[derive(Debug, Clone, PartialEq)]
pub enum SinkEvent
{
    Value(String),
    Type(String),
    ChildCount(usize),
    Child
    {
        name: String,
        rendered: String,
    },
    Item,
}

/// Sink that records the transcript of a printer run.
pub struct CapturingSink
{
    expanded: bool,
    pub events: Vec<SinkEvent>,
}

impl CapturingSink
{
    /// A sink for a collapsed variable-view entry.
    pub fn new() -> Self
    {
        Self {
            expanded: false,
            events: Vec::new(),
        }
    }

    /// A sink for an entry the user has expanded.
    pub fn expanded() -> Self
    {
        Self {
            expanded: true,
            events: Vec::new(),
        }
    }

    /// The display string the printer set, if any.
    pub fn value_text(&self) -> Option<&str>
    {
        self.events.iter().find_map(|event| match event {
            SinkEvent::Value(text) => Some(text.as_str()),
            _ => None,
        })
    }

    /// Names of the children the printer emitted, in order.
    pub fn child_names(&self) -> Vec<&str>
    {
        self.events
            .iter()
            .filter_map(|event| match event {
                SinkEvent::Child { name, .. } => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    fn render_child(value: &dyn Value) -> String
    {
        if let Ok(float) = value.floating_point() {
            return float_fragment(float);
        }
        if let Ok(signed) = value.signed_integer() {
            return signed.to_string();
        }
        if let Ok(unsigned) = value.integer() {
            return unsigned.to_string();
        }
        "<struct>".to_string()
    }
}

impl DisplaySink for CapturingSink
{
    fn set_value(&mut self, text: &str)
    {
        self.events.push(SinkEvent::Value(text.to_string()));
    }

    fn set_type(&mut self, name: &str)
    {
        self.events.push(SinkEvent::Type(name.to_string()));
    }

    fn set_child_count(&mut self, count: usize)
    {
        self.events.push(SinkEvent::ChildCount(count));
    }

    fn is_expanded(&self) -> bool
    {
        self.expanded
    }

    fn put_child(&mut self, name: &str, value: &dyn Value) -> DumpResult<()>
    {
        self.events.push(SinkEvent::Child {
            name: name.to_string(),
            rendered: Self::render_child(value),
        });
        Ok(())
    }

    fn put_item(&mut self, _value: &dyn Value) -> DumpResult<()>
    {
        self.events.push(SinkEvent::Item);
        Ok(())
    }
}

/// Build a struct value whose fields are all floats.
pub fn float_struct(fields: &[(&'static str, f64)]) -> MockValue
{
    MockValue::Struct(
        fields
            .iter()
            .map(|(name, value)| (*name, MockValue::Float(*value)))
            .collect(),
    )
}

/// Build an asset-ID struct with the given byte length and raw ID.
pub fn asset_id_struct(length: u64, id: u64) -> MockValue
{
    MockValue::Struct(vec![
        ("mLength", MockValue::Integer(length)),
        ("mID", MockValue::Integer(id)),
    ])
}
