//! EOL report assembly and serialization.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use serde_json::{json, Value};

use crate::detection::Product;

use super::client::EolClient;

/// The report printed on stdout by an execute run.
///
/// `checked` lists every attempted product slug in ascending order;
/// `results` maps each slug to the raw API payload, or to
/// `{"error": <message>}` when the lookup failed.
#[derive(Debug, Serialize)]
pub struct EolReport {
    checked: Vec<String>,
    results: BTreeMap<String, Value>,
}

impl EolReport {
    /// Look up every product and assemble the report.
    ///
    /// Lookups run sequentially in slug order. A failure is recorded as an
    /// error entry for that product and does not stop the remaining
    /// lookups.
    pub fn collect(client: &EolClient, products: &BTreeSet<Product>) -> Self {
        let mut results = BTreeMap::new();

        for product in products {
            let slug = product.slug();
            tracing::info!("checking {}", slug);

            let entry = match client.fetch(slug) {
                Ok(payload) => payload,
                Err(err) => {
                    tracing::warn!("lookup failed for {}: {:#}", slug, err);
                    json!({ "error": format!("{:#}", err) })
                }
            };
            results.insert(slug.to_string(), entry);
        }

        Self {
            checked: products.iter().map(|p| p.slug().to_string()).collect(),
            results,
        }
    }

    /// Product slugs that were attempted, sorted ascending.
    pub fn checked(&self) -> &[String] {
        &self.checked
    }

    /// Per-product payloads or error entries.
    pub fn results(&self) -> &BTreeMap<String, Value> {
        &self.results
    }

    /// Render the report as pretty-printed JSON with 2-space indentation.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
