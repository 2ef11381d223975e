//! Modifier rendering
//!
//!     Turns a [Chain] into the wrapper call. Each chain element becomes one modifier named
//!     after the element plus a suffix; the tail child, if any, is kept verbatim:
//!
//!         Modifier( modifiers: [AModifier( p: 1, ),BModifier( q: 2, )], child: C(r:3), )
//!
//!     Only properties are rendered. `builder` is never emitted.
//!
//! Layouts
//!
//!     compact   single line, the form above. Properties of one modifier are rendered as
//!               `name: value,` and joined with `,`.
//!     pretty    one line per modifier and per property, four-space indent.
//!
//!     Whitespace is cosmetic either way; a formatter is expected to run over the result.

use crate::call::ParsedCall;
use crate::chain::Chain;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_WRAPPER: &str = "Modifier";
pub const DEFAULT_MODIFIER_SUFFIX: &str = "Modifier";

const INDENT: &str = "    ";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    #[default]
    Compact,
    Pretty,
}

impl Layout {
    pub const ALL: [Layout; 2] = [Layout::Compact, Layout::Pretty];

    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Compact => "compact",
            Layout::Pretty => "pretty",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown layout '{0}' (expected 'compact' or 'pretty')")]
pub struct LayoutParseError(pub String);

impl FromStr for Layout {
    type Err = LayoutParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Layout::ALL
            .into_iter()
            .find(|layout| layout.as_str() == s)
            .ok_or_else(|| LayoutParseError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Name of the outer call.
    pub wrapper: String,
    /// Appended to every chain element's name.
    pub modifier_suffix: String,
    pub layout: Layout,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            wrapper: DEFAULT_WRAPPER.to_string(),
            modifier_suffix: DEFAULT_MODIFIER_SUFFIX.to_string(),
            layout: Layout::default(),
        }
    }
}

/// Render with the default wrapper, suffix and compact layout.
pub fn render(chain: &Chain) -> String {
    render_with(chain, &RenderOptions::default())
}

pub fn render_with(chain: &Chain, options: &RenderOptions) -> String {
    if chain.is_empty() {
        tracing::warn!("rendering an empty chain, input had no child to unwrap");
    } else {
        tracing::debug!(modifiers = chain.len(), layout = %options.layout, "rendering chain");
    }
    let tail_child = chain.tail_child().map(|child| child.value.as_str());

    match options.layout {
        Layout::Compact => render_compact(chain, tail_child, options),
        Layout::Pretty => render_pretty(chain, tail_child, options),
    }
}

fn render_compact(chain: &Chain, tail_child: Option<&str>, options: &RenderOptions) -> String {
    let modifiers = chain
        .iter()
        .map(|call| compact_modifier(call, &options.modifier_suffix))
        .collect::<Vec<_>>()
        .join(",");

    match tail_child {
        None => format!("{}( modifiers: [{}], )", options.wrapper, modifiers),
        Some(child) => format!(
            "{}( modifiers: [{}], child: {} )",
            options.wrapper, modifiers, child
        ),
    }
}

fn compact_modifier(call: &ParsedCall, suffix: &str) -> String {
    let pairs = call
        .properties
        .iter()
        .map(|prop| format!("{},", prop))
        .collect::<Vec<_>>()
        .join(",");
    format!("{}{}( {} )", call.name, suffix, pairs)
}

fn render_pretty(chain: &Chain, tail_child: Option<&str>, options: &RenderOptions) -> String {
    let mut out = format!("{}(\n", options.wrapper);

    if chain.is_empty() {
        out.push_str(&format!("{}modifiers: [],\n", INDENT));
    } else {
        out.push_str(&format!("{}modifiers: [\n", INDENT));
        for call in chain {
            pretty_modifier(&mut out, call, &options.modifier_suffix);
        }
        out.push_str(&format!("{}],\n", INDENT));
    }

    if let Some(child) = tail_child {
        out.push_str(&format!("{}child: {}\n", INDENT, child));
    }
    out.push(')');
    out
}

fn pretty_modifier(out: &mut String, call: &ParsedCall, suffix: &str) {
    let indent = INDENT.repeat(2);
    if call.properties.is_empty() {
        out.push_str(&format!("{}{}{}(),\n", indent, call.name, suffix));
        return;
    }
    out.push_str(&format!("{}{}{}(\n", indent, call.name, suffix));
    for prop in &call.properties {
        out.push_str(&format!("{}{}{},\n", indent, INDENT, prop));
    }
    out.push_str(&format!("{}),\n", indent));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::call::Property;
    use crate::chain::{flatten, flatten_with, FlattenOptions};

    const NESTED: &str = "A(p:1, child: B(q:2, child: C(r:3)))";

    fn pretty() -> RenderOptions {
        RenderOptions {
            layout: Layout::Pretty,
            ..RenderOptions::default()
        }
    }

    #[test]
    fn test_render_compact_with_tail_child() {
        assert_eq!(
            render(&flatten(NESTED)),
            "Modifier( modifiers: [AModifier( p: 1, ),BModifier( q: 2, )], child: C(r:3), )"
        );
    }

    #[test]
    fn test_render_joins_pairs_with_comma() {
        let output = render(&flatten("Box(w: 1, h: 2, child: Leaf())"));
        assert_eq!(
            output,
            "Modifier( modifiers: [BoxModifier( w: 1,,h: 2, )], child: Leaf(), )"
        );
    }

    #[test]
    fn test_render_omits_builder() {
        let output = render(&flatten("Wrap(builder: (c) => X(c), child: Leaf())"));
        assert_eq!(output, "Modifier( modifiers: [WrapModifier(  )], child: Leaf(), )");
    }

    #[test]
    fn test_render_empty_chain() {
        assert_eq!(render(&Chain::default()), "Modifier( modifiers: [], )");
    }

    #[test]
    fn test_render_without_tail_child() {
        // Built by hand: a flattened chain always ends in a call that has a child
        let chain = Chain {
            calls: vec![ParsedCall {
                name: "A".to_string(),
                properties: vec![Property::new("p", "1")],
                ..ParsedCall::default()
            }],
            truncated: false,
        };
        assert_eq!(render(&chain), "Modifier( modifiers: [AModifier( p: 1, )], )");
    }

    #[test]
    fn test_render_truncated_chain_uses_last_child() {
        let chain = flatten_with(NESTED, &FlattenOptions { max_depth: 1 });
        assert_eq!(
            render(&chain),
            "Modifier( modifiers: [AModifier( p: 1, )], child: B(q:2, child: C(r:3)), )"
        );
    }

    #[test]
    fn test_render_pretty_snapshot() {
        let output = render_with(&flatten(NESTED), &pretty());
        insta::assert_snapshot!(output, @r"
        Modifier(
            modifiers: [
                AModifier(
                    p: 1,
                ),
                BModifier(
                    q: 2,
                ),
            ],
            child: C(r:3),
        )
        ");
    }

    #[test]
    fn test_render_pretty_empty_properties_and_chain() {
        let output = render_with(&flatten("Center(child: Text('hi'))"), &pretty());
        insta::assert_snapshot!(output, @r"
        Modifier(
            modifiers: [
                CenterModifier(),
            ],
            child: Text('hi'),
        )
        ");

        let output = render_with(&Chain::default(), &pretty());
        insta::assert_snapshot!(output, @r"
        Modifier(
            modifiers: [],
        )
        ");
    }

    #[test]
    fn test_layout_from_str() {
        assert_eq!("compact".parse::<Layout>(), Ok(Layout::Compact));
        assert_eq!("pretty".parse::<Layout>(), Ok(Layout::Pretty));
        let err = "fancy".parse::<Layout>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown layout 'fancy' (expected 'compact' or 'pretty')"
        );
    }
}
