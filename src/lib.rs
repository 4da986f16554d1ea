//! Count the words of a list that have a "friend": another word of the same length
//! reachable through a one-to-one byte substitution (`GAGA` / `BOBO`).
//!
//! The list is split into length buckets and each bucket is counted on its own rayon
//! worker; see [`concurrent_friendly_count`]. [`friendly_count`] is the single-threaded
//! reference and always gives the same answer.
//!
//! Once a word has found a friend it is no longer searched from, but it stays a valid
//! match target for every other word.

pub mod matching;
pub mod runtime;

pub use matching::{
    Bucket, BucketResult, CountReport, Error, Word, concurrent_friendly_count, friendly_count,
    group_by_length, is_friendly, load_word_list, parse_word_list, run_all_buckets_parallel,
};
