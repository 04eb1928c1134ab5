//! Search module.
//!
//! The catalog query engine: filter criteria, sort keys, the `query`
//! function, browse-state reducer, and result memoization.

mod cache;
mod filter;
mod query;
mod results;
mod state;

pub use cache::{CacheStats, QueryCache};
pub use filter::{FilterCriteria, PriceRange};
pub use query::{query, SortKey};
pub use results::{Pagination, QueryResults};
pub use state::{BrowseAction, BrowseState};
