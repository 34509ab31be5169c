//! Tier classification, connection scanning and vault aggregation.

pub mod aggregate;
pub mod insight;
pub mod scanner;
pub mod tier;

pub use aggregate::{aggregate, AggregateCounts};
pub use insight::{select_insight, Insight, InsightKind, InsightRule};
pub use scanner::{scan, ConnectionMap};
pub use tier::{sanitize_identifier, Tier};
