use itertools::Itertools;

use super::types::Bucket;

/// Split a word list into buckets of equal byte length, in ascending length order.
///
/// Friendliness needs equal lengths, so buckets can be counted independently. The
/// list is consumed; word order inside a bucket is not preserved.
pub fn group_by_length<W: AsRef<[u8]>>(mut words: Vec<W>) -> Vec<Bucket<W>> {
    words.sort_unstable_by_key(|w| w.as_ref().len());

    let mut buckets = Vec::new();
    for (len, run) in &words.into_iter().chunk_by(|w| w.as_ref().len()) {
        buckets.push(Bucket {
            len,
            words: run.collect(),
        });
    }
    buckets
}
