//! Budget-constrained recommendation allocator
//!
//! Pure computation over (catalog snapshot, household profile): the
//! active catalog is partitioned into four category buckets and each
//! bucket is greedily filled toward a per-day budget target, taking the
//! best-advertised deals first.

mod bucket;
mod engine;

pub use bucket::Bucket;
pub use engine::{RecommendConfig, Recommendations, RecommendationEngine};
