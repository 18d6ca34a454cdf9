use crate::aggregate::CodeCounts;
use log::debug;
use std::cmp::Ordering;

/// One row of the report.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    pub code: String,
    pub count: u64,
    /// Share of all matched codes, in percent, rounded to 2 decimal places.
    pub percentage: f64,
}

/// Outcome of ranking a set of counts.
#[derive(Debug, Clone, PartialEq)]
pub enum Ranking {
    /// Nothing was matched, so there's nothing to rank.
    NoData,
    /// The top entries, highest count first. Empty if the requested size was not positive.
    Top(Vec<RankedEntry>),
}

impl Ranking {
    pub fn entries(&self) -> &[RankedEntry] {
        match self {
            Ranking::NoData => &[],
            Ranking::Top(entries) => entries,
        }
    }
}

/// Count descending, then code ascending.
fn by_rank(a: &(&String, u64), b: &(&String, u64)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0))
}

/// `count` as a percentage of `total`, rounded half away from zero to 2 decimal places.
/// The rounding is done on whole hundredths of a percent so exact halves are never lost to float error.
fn percentage(count: u64, total: u64) -> f64 {
    let (count, total) = (u128::from(count), u128::from(total));
    let hundredths = (20_000 * count + total) / (2 * total);
    hundredths as f64 / 100.0
}

/// Rank the codes and keep the first `top_k`. Percentages are taken against the total of all codes,
/// not just the retained ones.
pub fn rank(counts: &CodeCounts, top_k: i64) -> Ranking {
    if counts.is_empty() {
        return Ranking::NoData;
    }
    let total = counts.total();
    let keep = usize::try_from(top_k).unwrap_or(0).min(counts.len());
    let mut pairs: Vec<(&String, u64)> = counts.into_iter().map(|(code, count)| (code, *count)).collect();
    pairs.sort_unstable_by(by_rank);
    let entries: Vec<_> = pairs
        .into_iter()
        .take(keep)
        .map(|(code, count)| RankedEntry {
            code: code.clone(),
            count,
            percentage: percentage(count, total),
        })
        .collect();
    debug!("Ranked {} codes ({} total), keeping {}", counts.len(), total, entries.len());
    Ranking::Top(entries)
}
