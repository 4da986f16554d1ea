use super::friendly::is_friendly;

/// Number of words in `words` that have at least one friend elsewhere in the list.
///
/// Index-based scan with a `matched` marker per word. When word `i` finds its first
/// friend `j`, both are credited and `i` stops being a search source; `j` is not
/// searched from either, but both stay visible as targets for later words.
pub fn friendly_count<W: AsRef<[u8]>>(words: &[W]) -> usize {
    let n = words.len();
    let mut matched = vec![false; n];

    for i in 0..n {
        if matched[i] {
            continue;
        }
        let w = words[i].as_ref();
        if w.is_empty() {
            continue;
        }
        let hit = (0..n).find(|&j| j != i && is_friendly(w, words[j].as_ref()));
        if let Some(j) = hit {
            matched[i] = true;
            matched[j] = true;
        }
    }

    matched.iter().filter(|&&m| m).count()
}
