//! Symbolic element resolution for the component-factory layer.
//!
//! The factory that maps styled declarations onto renderable elements
//! resolves element names symbolically. An unrecognized name must fail
//! loudly and immediately — naming both the invalid input and the allowed
//! set — since silently rendering nothing would hide a caller mistake.

use std::fmt;
use std::str::FromStr;

/// The renderable primitives a styled declaration can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Text,
    View,
    Image,
}

/// The set of valid primitive names, in declaration order.
pub const PRIMITIVE_NAMES: [&str; 3] = ["Text", "View", "Image"];

/// Error for an element name outside the allowed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot style invalid primitive `{0}`; expected one of: Text, View, Image")]
pub struct UnknownPrimitive(pub String);

impl Primitive {
    /// The canonical name of this primitive.
    pub fn name(self) -> &'static str {
        match self {
            Primitive::Text => "Text",
            Primitive::View => "View",
            Primitive::Image => "Image",
        }
    }
}

impl FromStr for Primitive {
    type Err = UnknownPrimitive;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "Text" => Ok(Primitive::Text),
            "View" => Ok(Primitive::View),
            "Image" => Ok(Primitive::Image),
            other => Err(UnknownPrimitive(other.to_string())),
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
