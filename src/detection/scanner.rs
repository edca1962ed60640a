//! Heuristic product detection over discovered manifests.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::error::{EolReportError, Result};

use super::manifest::find_manifests;
use super::product::Product;

/// Detects which products to check by scanning `package.json` files.
///
/// Detection is a raw substring test for each product's quoted dependency
/// token, not a structured parse of `dependencies`. A token appearing in a
/// comment, a string value, or an unrelated key still counts, and usage
/// spelled without the exact quoted token is missed.
pub struct ProductScanner;

impl ProductScanner {
    /// Scan `root` and return the set of products to check.
    ///
    /// Node.js is always included. A manifest that cannot be read aborts
    /// the whole scan with [`EolReportError::ManifestRead`].
    pub fn scan(root: &Path) -> Result<BTreeSet<Product>> {
        let mut products = BTreeSet::from([Product::Nodejs]);

        let manifests = find_manifests(root);
        tracing::debug!(
            "found {} manifest(s) under {}",
            manifests.len(),
            root.display()
        );

        for path in manifests {
            let text = fs::read_to_string(&path).map_err(|source| {
                EolReportError::ManifestRead {
                    path: path.clone(),
                    source,
                }
            })?;

            for product in Product::marked() {
                let Some(marker) = product.marker() else {
                    continue;
                };
                if text.contains(marker) && products.insert(*product) {
                    tracing::debug!("{} matched {}", path.display(), product);
                }
            }
        }

        Ok(products)
    }
}
