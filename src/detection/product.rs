//! Products tracked against the endoflife.date API.

use std::fmt;

/// A runtime or library whose support status the tool can report.
///
/// Variants are ordered by slug so that a `BTreeSet<Product>` iterates in
/// the same ascending order the serialized report uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Product {
    Mysql,
    Nodejs,
    React,
    Sqlite,
}

impl Product {
    /// The product key used in the endoflife.date API path and the report.
    pub fn slug(&self) -> &'static str {
        match self {
            Product::Mysql => "mysql",
            Product::Nodejs => "nodejs",
            Product::React => "react",
            Product::Sqlite => "sqlite",
        }
    }

    /// The quoted dependency token whose presence in a manifest selects
    /// this product, if detection is conditional.
    ///
    /// Node.js has no marker; every scan checks it.
    pub fn marker(&self) -> Option<&'static str> {
        match self {
            Product::Mysql => Some("\"mysql\""),
            Product::Nodejs => None,
            Product::React => Some("\"react\""),
            Product::Sqlite => Some("\"sqlite3\""),
        }
    }

    /// All products with a manifest marker.
    pub fn marked() -> &'static [Product] {
        &[Product::Mysql, Product::React, Product::Sqlite]
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
