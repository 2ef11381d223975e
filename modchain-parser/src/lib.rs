//! # modchain
//!
//! Flattens a nested widget expression into a modifier chain.
//!
//!     Input is a tree of widget calls connected through their `child` argument:
//!
//!         Padding(padding: EdgeInsets.all(8), child: Center(child: Text('hi')))
//!
//!     Output is a single wrapper call listing one modifier per wrapping widget, with the
//!     innermost widget kept as the trailing child:
//!
//!         Modifier( modifiers: [PaddingModifier( padding: EdgeInsets.all(8), ),CenterModifier(  )], child: Text('hi'), )
//!
//! Layout
//!
//!     The work happens in three stages, each in its own module:
//!
//!         call     one call expression -> [ParsedCall](call::ParsedCall)
//!         chain    repeated parsing along `child` -> [Chain](chain::Chain)
//!         render   chain -> target text
//!
//!     [snippet] holds the placeholder escaping that editor integrations apply to the
//!     input before handing it over.
//!
//!     The pipeline is total: malformed input never errors, it produces a best-effort
//!     record instead. See [call::parse] for the exact recovery rules.

pub mod call;
pub mod chain;
pub mod render;
pub mod snippet;

pub use call::{parse, ParsedCall, Property};
pub use chain::{flatten, Chain, FlattenOptions};
pub use render::{render, Layout, RenderOptions};

/// Options for a full conversion run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    pub flatten: FlattenOptions,
    pub render: RenderOptions,
}

/// Convert a nested widget expression with the default options.
pub fn convert(raw: &str) -> String {
    convert_with(raw, &ConvertOptions::default())
}

/// Convert a nested widget expression: flatten, then render.
pub fn convert_with(raw: &str, options: &ConvertOptions) -> String {
    let chain = chain::flatten_with(raw, &options.flatten);
    render::render_with(&chain, &options.render)
}
