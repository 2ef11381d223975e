//! Property element
//!
//!     A property is one `name: value` argument of a call expression. The value is kept as
//!     raw, trimmed text; it is never interpreted beyond the paren balance that decides
//!     where it ends.
//!
//!         padding: EdgeInsets.all(8)
//!         child: Text('hi'),

use serde::Serialize;
use std::fmt;

/// A named argument of a call expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Property {
    pub name: String,
    pub value: String,
}

impl Property {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name == name
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}
