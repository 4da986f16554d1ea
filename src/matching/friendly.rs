// src/matching/friendly.rs

/// True iff `a` and `b` are related by a one-to-one, onto byte substitution.
///
///   "GAGA" / "BOBO" -> true   (G <-> B, A <-> O)
///   "AA"   / "KJ"   -> false  (A would need two images)
///
/// Words of different length, or an empty word on either side, are never friendly.
/// A single table holds both directions; pairs are always inserted together so it
/// stays an involution, which is what makes the relation symmetric.
pub fn is_friendly(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() || a.is_empty() {
        return false;
    }
    if a == b {
        return true;
    }

    let mut map: [Option<u8>; 256] = [None; 256];
    for (&x, &y) in a.iter().zip(b) {
        if let Some(img) = map[x as usize] {
            if img != y {
                return false;
            }
        } else if let Some(img) = map[y as usize] {
            if img != x {
                return false;
            }
        } else {
            map[x as usize] = Some(y);
            map[y as usize] = Some(x);
        }
    }
    true
}
