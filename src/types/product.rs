//! Product sale types shared across the fetch/merge pipeline

use serde::{Deserialize, Serialize};

/// A single sale record as returned by a branch endpoint.
///
/// Multiple records may share the same name, both within one source and
/// across sources; merging happens downstream.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProductRecord {
    pub name: String,
    #[serde(rename = "unitPrice")]
    pub unit_price: f64,
    pub sold: f64,
}

impl ProductRecord {
    /// Revenue contribution of this record
    pub fn revenue(&self) -> f64 {
        self.unit_price * self.sold
    }
}

/// JSON envelope each branch endpoint returns: `{"products": [...]}`
#[derive(Debug, Deserialize)]
pub struct SourceDocument {
    pub products: Vec<ProductRecord>,
}

/// One row of the final table, uniquely keyed by exact product name.
///
/// Name matching is case-sensitive: "Apple" and "apple" are distinct rows.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AggregatedProduct {
    pub name: String,
    pub revenue: f64,
}
