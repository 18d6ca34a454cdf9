//! Pull `ERROR:CODE` / `WARN:CODE` tokens out of log lines and rank the codes by how often they appear.

pub mod aggregate;
pub mod extract;
pub mod input;
pub mod rank;
pub mod report;

#[cfg(feature = "concurrent")]
pub use aggregate::aggregate_sharded;
pub use aggregate::{aggregate, CodeCounts};
pub use extract::{extract, LogEntry, Severity};
pub use input::InputError;
pub use rank::{rank, RankedEntry, Ranking};

/// Aggregate the lines and rank the result in one go.
pub fn analyze<I>(lines: I, top_k: i64) -> Ranking
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    rank(&aggregate(lines), top_k)
}
