//! Chain flattening
//!
//!     A chain is the run of calls linked through their `child` property:
//!
//!         A(p: 1, child: B(q: 2, child: C(r: 3)))   ->   [A, B]
//!
//!     Each step parses the previous call's child text. The first call without a child
//!     ends the loop and is not part of the chain; its source text survives as the last
//!     element's child, which is where the renderer picks it up.
//!
//!     Every child value is strictly shorter than the text it was cut from, so the loop
//!     ends on its own. [FlattenOptions::max_depth] bounds it regardless.

use crate::call::{self, ParsedCall, Property};
use serde::Serialize;

/// Default bound on chain length.
pub const DEFAULT_MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenOptions {
    /// Maximum number of calls collected before the loop stops.
    pub max_depth: usize,
}

impl Default for FlattenOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Calls linked through `child`, outermost first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Chain {
    pub calls: Vec<ParsedCall>,
    /// Set when the depth bound stopped the loop before a childless call was found.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub truncated: bool,
}

impl Chain {
    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParsedCall> {
        self.calls.iter()
    }

    /// The `child` of the last collected call.
    ///
    /// For a chain that ended normally this is the source text of the innermost,
    /// childless call.
    pub fn tail_child(&self) -> Option<&Property> {
        self.calls.last().and_then(|call| call.child.as_ref())
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a ParsedCall;
    type IntoIter = std::slice::Iter<'a, ParsedCall>;

    fn into_iter(self) -> Self::IntoIter {
        self.calls.iter()
    }
}

/// Flatten with the default depth bound.
pub fn flatten(raw: &str) -> Chain {
    flatten_with(raw, &FlattenOptions::default())
}

pub fn flatten_with(raw: &str, options: &FlattenOptions) -> Chain {
    let mut calls = Vec::new();
    let mut source = raw.to_string();

    loop {
        let call = call::parse(&source);
        let Some(next) = call.child_source().map(str::to_string) else {
            tracing::debug!(terminal = %call.name, "chain ends at childless call");
            break;
        };
        if calls.len() >= options.max_depth {
            tracing::warn!(
                max_depth = options.max_depth,
                "chain depth limit reached, stopping"
            );
            return Chain {
                calls,
                truncated: true,
            };
        }
        tracing::debug!(depth = calls.len(), name = %call.name, "chain step");
        calls.push(call);
        source = next;
    }

    Chain {
        calls,
        truncated: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(chain: &Chain) -> Vec<&str> {
        chain.iter().map(|call| call.name.as_str()).collect()
    }

    #[test]
    fn test_flatten_excludes_terminal_call() {
        let chain = flatten("A(p:1, child: B(q:2, child: C(r:3)))");
        assert_eq!(names(&chain), vec!["A", "B"]);
        assert!(!chain.truncated);
    }

    #[test]
    fn test_tail_child_is_innermost_source() {
        let chain = flatten("A(p:1, child: B(q:2, child: C(r:3)))");
        let tail = chain.tail_child().expect("chain to carry a tail child");
        assert_eq!(tail.value, "C(r:3),");
        assert_eq!(call::parse(&tail.value).name, "C");
    }

    #[test]
    fn test_every_element_has_child() {
        let chain = flatten("A(child: B(child: C(child: D(child: E()))))");
        assert_eq!(names(&chain), vec!["A", "B", "C", "D"]);
        assert!(chain.iter().all(|call| call.has_child()));
    }

    #[test]
    fn test_flatten_childless_input_is_empty() {
        assert!(flatten("Text('hi')").is_empty());
        assert!(flatten("").is_empty());
        assert!(flatten("not a call").is_empty());
    }

    #[test]
    fn test_flatten_stops_at_depth_limit() {
        let options = FlattenOptions { max_depth: 2 };
        let chain = flatten_with("A(child: B(child: C(child: D())))", &options);
        assert_eq!(names(&chain), vec!["A", "B"]);
        assert!(chain.truncated);
        assert_eq!(chain.tail_child().map(|c| c.value.as_str()), Some("C(child: D()),"));
    }

    #[test]
    fn test_flatten_limit_equal_to_chain_length_is_complete() {
        let options = FlattenOptions { max_depth: 2 };
        let chain = flatten_with("A(child: B(child: C()))", &options);
        assert_eq!(names(&chain), vec!["A", "B"]);
        assert!(!chain.truncated);
        assert_eq!(chain.tail_child().map(|c| c.value.as_str()), Some("C(),"));
    }

    #[test]
    fn test_flatten_zero_limit_on_childless_input() {
        let chain = flatten_with("Text('hi')", &FlattenOptions { max_depth: 0 });
        assert!(chain.is_empty());
        assert!(!chain.truncated);
    }

    #[test]
    fn test_flatten_deep_chain_within_default_limit() {
        let depth = 100;
        let mut source = "Leaf()".to_string();
        for i in 0..depth {
            source = format!("W{}(child: {})", i, source);
        }
        let chain = flatten(&source);
        assert_eq!(chain.len(), depth);
        assert!(!chain.truncated);
        assert_eq!(chain.tail_child().map(|c| c.value.as_str()), Some("Leaf(),"));
    }

    #[test]
    fn test_chain_serializes_without_empty_fields() {
        let chain = flatten("A(p: 1, child: B())");
        let json = serde_json::to_value(&chain).expect("chain to serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "calls": [{
                    "name": "A",
                    "properties": [{ "name": "p", "value": "1" }],
                    "child": { "name": "child", "value": "B()," }
                }]
            })
        );
    }
}
