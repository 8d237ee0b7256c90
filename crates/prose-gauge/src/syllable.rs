//! Heuristic per-word syllable estimation.
//!
//! Approximate by design: a fixed substitution pass, a vowel-run count,
//! and a short list of suffix adjustments. The exact table order and
//! offsets are part of the contract, known misses included — callers
//! rely on the numbers being reproducible, not phonetically perfect.

/// Suffix/infix substitutions applied before counting, in table order.
/// Each pattern is replaced everywhere it occurs, non-overlapping.
const SUBSTITUTIONS: &[(&str, &str)] = &[
    ("ome", "um"),
    ("ime", "im"),
    ("imn", "imen"),
    ("ine", "in"),
    ("ely", "ly"),
    ("ure", "ur"),
    ("ery", "ry"),
];

/// Estimate the number of syllables in a single word. Always ≥ 1.
pub fn estimate_syllables(word: &str) -> usize {
    let transformed = apply_substitutions(word);
    let bytes = transformed.as_bytes();
    let len = bytes.len();

    let mut count: i64 = 0;
    let mut last_was_vowel = false;
    for &b in bytes {
        if is_vowel(b) {
            if !last_was_vowel {
                count += 1;
            }
            last_was_vowel = true;
        } else {
            last_was_vowel = false;
        }
    }

    // Suffix adjustments, evaluated in this order against the
    // transformed word.
    if (transformed.ends_with("ing") || transformed.ends_with("ings"))
        && len > 4
        && is_vowel(bytes[len - 4])
    {
        count += 1;
    }
    if transformed.ends_with('e') && !transformed.ends_with("le") {
        count -= 1;
    }
    if transformed.ends_with("es") && len > 4 && is_vowel(bytes[len - 4]) {
        count -= 1;
    }
    if transformed.ends_with("e's") && len > 5 && is_vowel(bytes[len - 5]) {
        count -= 1;
    }
    if transformed.ends_with("ed") && !transformed.ends_with("ted") && !transformed.ends_with("ded")
    {
        count -= 1;
    }

    count.max(1) as usize
}

fn apply_substitutions(word: &str) -> String {
    let mut transformed = word.to_lowercase();
    for (pattern, replacement) in SUBSTITUTIONS {
        transformed = transformed.replace(pattern, replacement);
    }
    transformed
}

const fn is_vowel(b: u8) -> bool {
    matches!(b, b'a' | b'e' | b'i' | b'o' | b'u' | b'y')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_syllable_words() {
        assert_eq!(estimate_syllables("text"), 1);
        assert_eq!(estimate_syllables("is"), 1);
        assert_eq!(estimate_syllables("sky"), 1);
    }

    #[test]
    fn silent_e_dropped() {
        // "the": one vowel group, trailing e subtracts, clamp brings it back.
        assert_eq!(estimate_syllables("the"), 1);
        assert_eq!(estimate_syllables("sentence"), 2);
    }

    #[test]
    fn le_ending_keeps_syllable() {
        assert_eq!(estimate_syllables("apple"), 2);
        assert_eq!(estimate_syllables("table"), 2);
    }

    #[test]
    fn substitution_table_applies() {
        // "home" → "hum": one vowel group, no trailing-e subtraction.
        assert_eq!(estimate_syllables("home"), 1);
        // "time" → "tim".
        assert_eq!(estimate_syllables("time"), 1);
        // "nature" → "natur": two vowel groups, no trailing e.
        assert_eq!(estimate_syllables("nature"), 2);
        // "lonely" → "lonly".
        assert_eq!(estimate_syllables("lonely"), 2);
    }

    #[test]
    fn ing_suffix_adjustment() {
        // "loading": vowel at 4th-from-last? 'd' — no bump, stays at 2.
        assert_eq!(estimate_syllables("loading"), 2);
        // "going": 'o' at 4th-from-last bumps the single "oi" run to 2.
        assert_eq!(estimate_syllables("going"), 2);
    }

    #[test]
    fn ed_suffix_adjustment() {
        // Plain -ed drops a syllable; -ted and -ded keep theirs.
        assert_eq!(estimate_syllables("played"), 1);
        assert_eq!(estimate_syllables("wanted"), 2);
        assert_eq!(estimate_syllables("loaded"), 2);
    }

    #[test]
    fn multisyllable_words() {
        assert_eq!(estimate_syllables("analyzer"), 4);
        assert_eq!(estimate_syllables("into"), 2);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(estimate_syllables("Loading"), estimate_syllables("loading"));
    }

    #[test]
    fn never_below_one() {
        for word in ["", "b", "tsk", "hmm", "xyz'd"] {
            assert!(estimate_syllables(word) >= 1, "failed for {word:?}");
        }
    }
}
