//! Services for fetching and aggregating sales data

pub mod aggregator;
pub mod fetcher;
pub mod format;

pub use aggregator::Aggregator;
pub use fetcher::FetchService;
pub use format::format_revenue;
