//! Example Catalog Module
//!
//! A fixed, read-only table of D2 code examples served by the `get_d2_examples` tool.
//! It is independent of the documentation index: lookups never touch the loaded manual.

pub mod snippets;


use serde::Serialize;
use snippets::{BASIC, EXAMPLES};

/// Answer to an example lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExampleLookup {
    /// The snippet for a known example name, serialized as a bare string.
    Snippet(&'static str),
    /// Returned for an empty or unknown name.
    Listing(ExampleListing),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExampleListing {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub available_examples: Vec<&'static str>,
    pub basic_example: &'static str,
}

/// Names of every available example, in catalog order.
pub fn example_names() -> Vec<&'static str> {
    EXAMPLES.iter().map(|(name, _)| *name).collect()
}

pub fn find_example(name: &str) -> Option<&'static str> {
    EXAMPLES
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, code)| *code)
}

/// Looks up an example by name, falling back to the list of known names.
pub fn get_examples(name: &str) -> ExampleLookup {
    match find_example(name) {
        Some(code) => ExampleLookup::Snippet(code),
        None => {
            if !name.is_empty() {
                tracing::debug!("Unknown example type {:?}, returning listing", name);
            }
            ExampleLookup::Listing(ExampleListing {
                kind: "example_list",
                available_examples: example_names(),
                basic_example: BASIC,
            })
        }
    }
}
