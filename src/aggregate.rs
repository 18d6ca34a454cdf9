use crate::extract::extract;
use log::debug;
use std::collections::{hash_map, HashMap};

/// Occurrences of each upper-cased code. Every stored count is at least 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeCounts(HashMap<String, u64>);

impl CodeCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `code`.
    pub fn record(&mut self, code: impl Into<String>) {
        *self.0.entry(code.into()).or_default() += 1;
    }

    /// Fold another set of counts into this one by adding per code.
    pub fn merge(&mut self, other: CodeCounts) {
        for (code, count) in other.0 {
            *self.0.entry(code).or_default() += count;
        }
    }

    pub fn get(&self, code: &str) -> Option<u64> {
        self.0.get(code).copied()
    }

    /// Sum of all counts, i.e. the number of matched lines.
    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    /// Number of distinct codes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, u64> {
        self.0.iter()
    }
}

/// Zero counts are dropped so the map never holds a code that was not seen.
impl From<HashMap<String, u64>> for CodeCounts {
    fn from(mut map: HashMap<String, u64>) -> Self {
        map.retain(|_, count| *count > 0);
        Self(map)
    }
}

impl<'a> IntoIterator for &'a CodeCounts {
    type Item = (&'a String, &'a u64);
    type IntoIter = hash_map::Iter<'a, String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Run the extractor over every line, counting each matched code. Lines without a code are skipped.
pub fn aggregate<I>(lines: I) -> CodeCounts
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut counts = CodeCounts::new();
    let mut scanned = 0usize;
    for line in lines {
        scanned += 1;
        if let Some(entry) = extract(line.as_ref()) {
            counts.record(entry.code);
        }
    }
    debug!(
        "Scanned {} lines: {} codes matched, {} distinct",
        scanned,
        counts.total(),
        counts.len()
    );
    counts
}

/// Split the lines into `shards` contiguous chunks, aggregate each on its own thread, then merge.
/// Gives the same result as [`aggregate`] for any shard count.
#[cfg(feature = "concurrent")]
pub fn aggregate_sharded<S>(lines: &[S], shards: usize) -> CodeCounts
where
    S: AsRef<str> + Sync,
{
    let shards = shards.max(1);
    if lines.len() <= 1 || shards == 1 {
        return aggregate(lines);
    }
    let chunk_size = (lines.len() + shards - 1) / shards;
    std::thread::scope(|scope| {
        let handles: Vec<_> = lines
            .chunks(chunk_size)
            .map(|chunk| scope.spawn(move || aggregate(chunk)))
            .collect();
        let mut counts = CodeCounts::new();
        for handle in handles {
            match handle.join() {
                Ok(partial) => counts.merge(partial),
                // Aggregation doesn't panic on any input, so just hand the panic on
                Err(payload) => std::panic::resume_unwind(payload),
            }
        }
        counts
    })
}
