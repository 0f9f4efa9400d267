//! Random relation sampling
//!
//! Draws a handful of source lemmas with their targets, e.g. to seed word
//! puzzles. A fixed seed makes the draw reproducible.

use crate::relations::RelationMap;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// One sampled source lemma and its targets
pub type SampledRelation = (String, Vec<String>);

/// Result of a sampling run
#[derive(Debug, Clone)]
pub struct SampleResult {
    pub entries: Vec<SampledRelation>,
    /// Number of sources that were eligible
    pub pool_size: usize,
    pub seed: Option<u64>,
}

/// Pick up to `count` distinct sources uniformly, sorted by source lemma
///
/// # Examples
/// ```
/// use wordnet_relations::commands::sample_relations;
/// use wordnet_relations::relations::{RelationMap, RelationPair};
///
/// let map = RelationMap::from_pairs([RelationPair {
///     source: "breathe".into(),
///     target: "breath".into(),
/// }]);
/// let sample = sample_relations(&map, 5, Some(7));
/// assert_eq!(sample.entries.len(), 1);
/// assert_eq!(sample.entries[0].0, "breathe");
/// ```
#[must_use]
pub fn sample_relations(map: &RelationMap, count: usize, seed: Option<u64>) -> SampleResult {
    let pool: Vec<(&str, &[String])> = map.iter().collect();
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    let mut entries: Vec<SampledRelation> = pool
        .choose_multiple(&mut rng, count)
        .map(|(source, targets)| ((*source).to_string(), targets.to_vec()))
        .collect();
    entries.sort();

    SampleResult {
        entries,
        pool_size: pool.len(),
        seed,
    }
}
