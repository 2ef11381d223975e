//! CLI output formats
//!
//! Each format is a view of the same flattened chain: the converted snippet itself, or
//! one of the inspection dumps (e.g., "chain-json", "chain-tree").

use crate::error::CliError;
use modchain_parser::chain::{flatten_with, Chain};
use modchain_parser::render::render_with;
use modchain_parser::ConvertOptions;
use std::fmt::Write;

/// All available CLI output formats
pub const AVAILABLE_FORMATS: &[(&str, &str)] = &[
    ("snippet", "The converted modifier chain (default)"),
    ("chain-json", "The flattened chain as JSON"),
    ("chain-tree", "One line per unwrapped call with its properties"),
];

pub const DEFAULT_FORMAT: &str = "snippet";

/// Run the conversion pipeline and present the result in the named format
pub fn execute_format(
    source: &str,
    format: &str,
    options: &ConvertOptions,
) -> Result<String, CliError> {
    if !AVAILABLE_FORMATS.iter().any(|(name, _)| *name == format) {
        return Err(CliError::UnknownFormat(format.to_string()));
    }

    let chain = flatten_with(source, &options.flatten);
    match format {
        "chain-json" => Ok(serde_json::to_string_pretty(&chain)?),
        "chain-tree" => Ok(chain_to_tree(&chain)),
        _ => Ok(render_with(&chain, &options.render)),
    }
}

/// Indented listing of the chain, for eyeballing what the parser picked up
fn chain_to_tree(chain: &Chain) -> String {
    let mut out = String::new();
    for (depth, call) in chain.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", depth, call.name);
        for prop in &call.properties {
            let _ = writeln!(out, "     {}", prop);
        }
        if let Some(builder) = &call.builder {
            let _ = writeln!(out, "     [builder] {}", builder.value);
        }
    }
    match chain.tail_child() {
        Some(child) => {
            let _ = writeln!(out, "child: {}", child.value);
        }
        None => out.push_str("(no child)\n"),
    }
    if chain.truncated {
        out.push_str("(truncated at max depth)\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_format() {
        let output = execute_format(
            "Center(child: Text('hi'))",
            "snippet",
            &ConvertOptions::default(),
        )
        .unwrap();
        assert_eq!(output, "Modifier( modifiers: [CenterModifier(  )], child: Text('hi'), )");
    }

    #[test]
    fn test_tree_format() {
        let output = execute_format(
            "Pad(all: 8, builder: (c) => X(c), child: Text('hi'))",
            "chain-tree",
            &ConvertOptions::default(),
        )
        .unwrap();
        assert_eq!(
            output,
            "0. Pad\n     all: 8\n     [builder] (c) => X(c)\nchild: Text('hi'),\n"
        );
    }

    #[test]
    fn test_json_format() {
        let output = execute_format(
            "Center(child: Text('hi'))",
            "chain-json",
            &ConvertOptions::default(),
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["calls"][0]["name"], "Center");
        assert_eq!(value["calls"][0]["child"]["value"], "Text('hi'),");
    }

    #[test]
    fn test_unknown_format() {
        let err = execute_format("A()", "xml", &ConvertOptions::default()).unwrap_err();
        assert!(matches!(err, CliError::UnknownFormat(ref f) if f == "xml"));
    }
}
