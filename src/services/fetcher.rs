//! Branch sales fetcher
//!
//! Retrieves the three branch sales documents sequentially and concatenates
//! their product lists in source order. Any network or parse failure anywhere
//! in the sequence fails the whole fetch; partial results are never returned.

use crate::types::{ProductRecord, Result, RevtrackError, SourceDocument};

/// Branch sales endpoints, fetched in this order
const BRANCH_ENDPOINTS: [&str; 3] = [
    "https://api.npoint.io/ddc8e13407dee87b4fbf",
    "https://api.npoint.io/064f55a22086a7cdd848",
    "https://api.npoint.io/0b50cfe84b3833da8dc0",
];

/// HTTP request timeout in seconds
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Fetcher for the branch sales endpoints
pub struct FetchService {
    endpoints: Vec<String>,
}

impl FetchService {
    /// Create a fetcher for the fixed branch endpoints
    pub fn new() -> Self {
        Self {
            endpoints: BRANCH_ENDPOINTS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Create a fetcher with custom endpoints (for testing)
    pub fn with_endpoints(endpoints: Vec<String>) -> Self {
        Self { endpoints }
    }

    /// Number of configured source endpoints
    pub fn endpoint_count(&self) -> usize {
        self.endpoints.len()
    }

    /// Fetch every branch document sequentially, concatenating the product
    /// lists in source order.
    pub fn fetch_all(&self) -> Result<Vec<ProductRecord>> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| RevtrackError::Fetch(format!("HTTP client error: {}", e)))?;

        let mut records = Vec::new();
        for endpoint in &self.endpoints {
            let response = client
                .get(endpoint)
                .send()
                .map_err(|e| RevtrackError::Fetch(format!("HTTP request failed: {}", e)))?;

            let document: SourceDocument = response
                .json()
                .map_err(|e| RevtrackError::Fetch(format!("JSON parse error: {}", e)))?;

            records.extend(document.products);
        }

        Ok(records)
    }
}

impl Default for FetchService {
    fn default() -> Self {
        Self::new()
    }
}
