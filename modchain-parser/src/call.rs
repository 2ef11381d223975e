//! Call expressions
//!
//!     A call expression is one widget invocation:
//!
//!         <name> "(" (<property> ",")* ")"
//!         <property> = <name> ":" <value>
//!
//!     Values are raw text. They may hold nested calls as long as their parentheses
//!     balance, which is what lets `child: Inner(x: 2)` carry a whole sub-expression.
//!
//! Reserved properties
//!
//!     Two property names are pulled out of the ordered property list:
//!
//!         child     the nested expression the chain continues into
//!         builder   kept on the record, never rendered
//!
//! Recovery
//!
//!     Parsing never fails. Text without a `(` becomes the name, a value that runs off
//!     the end of the input is dropped, and empty input yields an empty record. The last
//!     rule is what ends a chain: the innermost widget has no `child`, so the chain stops
//!     there.

mod balance;
mod property;
mod scanner;

pub use balance::bracket_balance;
pub use property::Property;

use scanner::Scanner;
use serde::Serialize;

/// Name of the property the chain continues into.
pub const CHILD: &str = "child";
/// Name of the builder property, parsed but never rendered.
pub const BUILDER: &str = "builder";

/// Separator appended to a captured `child` value so it reads as a terminated argument.
pub const CHILD_TERMINATOR: char = ',';

/// One parsed call expression.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedCall {
    pub name: String,
    /// Ordered as in the source, without `child` and `builder`.
    pub properties: Vec<Property>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<Property>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child: Option<Property>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub builder: Option<Property>,
}

impl ParsedCall {
    pub fn has_child(&self) -> bool {
        self.child.is_some()
    }

    /// Source text of the nested expression, including its trailing separator.
    pub fn child_source(&self) -> Option<&str> {
        self.child.as_ref().map(|child| child.value.as_str())
    }

    /// Look up a regular property by name.
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }
}

/// Parse one call expression.
pub fn parse(raw: &str) -> ParsedCall {
    let mut scanner = Scanner::new();
    for ch in raw.trim().chars() {
        scanner.feed(ch);
    }
    scanner.finish()
}
