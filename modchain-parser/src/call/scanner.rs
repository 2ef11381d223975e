//! Character scanner for a single call expression
//!
//!     The scanner is a three-phase state machine fed one character at a time:
//!
//!         Name            until the first `(`
//!         PropertyName    until a `:` that follows a non-empty name; stray `,` and `)` are skipped
//!         PropertyValue   until a `,` or `)` that leaves the value balanced
//!
//!     Newlines are dropped before they reach any phase.
//!
//! Terminators
//!
//!     In the value phase a `,` or `)` is only a candidate. The balance of the text
//!     collected so far (not counting the candidate) decides:
//!
//!         == 0    value complete, classify it
//!         <  0    the call closed under a pending property, discard it
//!         >  0    still inside a nested call, keep the character
//!
//!     A `)` is only ever appended while the balance is positive, so the collected text
//!     cannot reach a negative balance through `feed`. The branch is kept so the three
//!     outcomes stay explicit.

use super::balance::bracket_balance;
use super::property::Property;
use super::{ParsedCall, BUILDER, CHILD, CHILD_TERMINATOR};
use std::cmp::Ordering;
use std::mem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Phase {
    Name,
    PropertyName,
    PropertyValue,
}

#[derive(Debug)]
pub(super) struct Scanner {
    phase: Phase,
    /// Text collected in the current phase
    term: String,
    name: String,
    property_name: String,
    properties: Vec<Property>,
    child: Option<Property>,
    builder: Option<Property>,
}

impl Scanner {
    pub(super) fn new() -> Self {
        Self {
            phase: Phase::Name,
            term: String::new(),
            name: String::new(),
            property_name: String::new(),
            properties: Vec::new(),
            child: None,
            builder: None,
        }
    }

    #[cfg(test)]
    pub(super) fn phase(&self) -> Phase {
        self.phase
    }

    pub(super) fn feed(&mut self, ch: char) {
        if ch == '\n' {
            return;
        }
        self.phase = match self.phase {
            Phase::Name => self.scan_name(ch),
            Phase::PropertyName => self.scan_property_name(ch),
            Phase::PropertyValue => self.scan_property_value(ch),
        };
    }

    fn scan_name(&mut self, ch: char) -> Phase {
        if ch == '(' {
            self.name = mem::take(&mut self.term).trim().to_string();
            return Phase::PropertyName;
        }
        self.term.push(ch);
        Phase::Name
    }

    fn scan_property_name(&mut self, ch: char) -> Phase {
        match ch {
            ',' | ')' => {}
            ':' => {
                let name = mem::take(&mut self.term).trim().to_string();
                if name.is_empty() {
                    // No name yet, so the colon is discarded and the scan stays here
                    return Phase::PropertyName;
                }
                self.property_name = name;
                return Phase::PropertyValue;
            }
            _ => self.term.push(ch),
        }
        Phase::PropertyName
    }

    fn scan_property_value(&mut self, ch: char) -> Phase {
        if ch == ',' || ch == ')' {
            match bracket_balance(&self.term).cmp(&0) {
                Ordering::Equal => {
                    let value = mem::take(&mut self.term).trim().to_string();
                    let name = mem::take(&mut self.property_name);
                    self.classify(Property::new(name, value));
                    return Phase::PropertyName;
                }
                Ordering::Less => {
                    tracing::trace!(
                        property = %self.property_name,
                        "call closed under a pending property, dropping it"
                    );
                    self.term.clear();
                    self.property_name.clear();
                    return Phase::PropertyName;
                }
                Ordering::Greater => {}
            }
        }
        self.term.push(ch);
        Phase::PropertyValue
    }

    fn classify(&mut self, mut property: Property) {
        tracing::trace!(name = %property.name, value = %property.value, "property");
        if property.is_named(CHILD) {
            property.value.push(CHILD_TERMINATOR);
            self.child = Some(property);
        } else if property.is_named(BUILDER) {
            self.builder = Some(property);
        } else {
            self.properties.push(property);
        }
    }

    /// Close the scan. Text still pending in a property phase is dropped.
    pub(super) fn finish(self) -> ParsedCall {
        let name = match self.phase {
            Phase::Name => self.term.trim().to_string(),
            Phase::PropertyName | Phase::PropertyValue => {
                if !self.term.trim().is_empty() {
                    tracing::trace!(pending = %self.term.trim(), "dropping unterminated text");
                }
                self.name
            }
        };
        ParsedCall {
            name,
            properties: self.properties,
            key: None,
            child: self.child,
            builder: self.builder,
        }
    }
}
