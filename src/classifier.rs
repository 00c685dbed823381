use crate::as_path::NormalizedPath;
use crate::operators::is_known_operator;

/// Bucket key used for paths that reach the destination directly.
pub const DIRECT_KEY: &str = "DIRECT";

/// Separator between hop names in TIER2/TIER3 bucket keys.
const KEY_SEPARATOR: &str = " -> ";

/// Occurrence tallies for one tier, kept in first-seen order.
///
/// Insertion order matters: the ranker's sort is stable, so keys tied on
/// percentage keep the order in which they first appeared.
#[derive(Debug, Clone, Default)]
pub struct Bucket {
    entries: Vec<(String, u32)>,
}

impl Bucket {
    pub fn new() -> Self {
        Bucket {
            entries: Vec::new(),
        }
    }

    pub fn increment(&mut self, key: &str) {
        for entry in self.entries.iter_mut() {
            if entry.0 == key {
                entry.1 += 1;
                return;
            }
        }
        self.entries.push((key.to_string(), 1));
    }

    pub fn entries(&self) -> &[(String, u32)] {
        &self.entries
    }

    pub fn get(&self, key: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, count)| *count)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Tallies for all four aggregate categories of one query.
#[derive(Debug, Clone, Default)]
pub struct TierTallies {
    pub direct: Bucket,
    pub tier1: Bucket,
    pub tier2: Bucket,
    pub tier3: Bucket,
}

impl TierTallies {
    pub fn new() -> Self {
        Default::default()
    }

    /// Apply the positional tier rules to one normalized path.
    ///
    /// A path can land in several buckets at once; each matching bucket's
    /// key is incremented by exactly one. Paths with no usable hops are
    /// skipped.
    pub fn classify(&mut self, path: &NormalizedPath) {
        let n = path.len();
        if n == 0 {
            return;
        }

        // Destination reached directly or via one non-tier-1 hop
        if n <= 2 && !is_known_operator(path.asns[0]) {
            self.direct.increment(DIRECT_KEY);
        }

        // Hop immediately before the terminus is a curated operator
        if n >= 2 && is_known_operator(path.asns[n - 2]) {
            let key = path.names[n - 2].clone();
            self.tier1.increment(&key);
        }

        // Last three and last four hop names, END marker included
        if n >= 3 {
            self.tier2.increment(&path.names[n - 3..].join(KEY_SEPARATOR));
        }
        if n >= 4 {
            self.tier3.increment(&path.names[n - 4..].join(KEY_SEPARATOR));
        }
    }
}
