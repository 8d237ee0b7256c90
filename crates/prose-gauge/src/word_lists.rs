//! Built-in word lists backing the default [`crate::Lexicon`].
//!
//! Pure configuration data: high-frequency stop words plus the pronoun
//! sets that drive the orientation scale. All entries are lowercase.

use std::collections::HashSet;
use std::sync::LazyLock;

/// High-frequency function words excluded from content-frequency analysis.
pub static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "-", "--", "th", "pm", "i", "i've", "'", "a", "about", "above", "across", "after",
        "afterwards", "again", "against", "all", "almost", "alone", "along", "already", "also",
        "although", "always", "am", "among", "amongst", "amount", "an", "and", "another", "any",
        "anyhow", "anyone", "anything", "anyway", "anywhere", "are", "around", "as", "at", "back",
        "be", "because", "become", "becomes", "becoming", "been", "before", "beforehand", "behind",
        "being", "below", "beside", "besides", "between", "beyond", "both", "bottom", "but", "by",
        "can", "cannot", "can't", "co", "con", "could", "couldn't", "de", "do", "done", "down",
        "due", "during", "each", "eg", "eight", "either", "eleven", "else", "elsewhere", "empty",
        "enough", "etc", "even", "ever", "every", "everyone", "everything", "everywhere", "except",
        "few", "fifteen", "fifty", "fill", "find", "fire", "five", "for", "former", "formerly",
        "forty", "found", "four", "from", "front", "full", "further", "get", "give", "go", "had",
        "has", "hasn't", "have", "he", "hence", "her", "here", "hereafter", "hereby", "herein",
        "hereupon", "hers", "herself", "him", "himself", "his", "how", "however", "hundred", "ie",
        "if", "in", "inc", "indeed", "interest", "into", "is", "it", "its", "it's", "itself",
        "keep", "last", "latter", "latterly", "least", "less", "ltd", "made", "many", "may", "me",
        "meanwhile", "might", "mill", "mine", "more", "moreover", "most", "mostly", "much", "must",
        "my", "myself", "name", "namely", "neither", "never", "nevertheless", "next", "nine", "no",
        "nobody", "none", "nor", "not", "nothing", "now", "nowhere", "of", "off", "often", "on",
        "once", "one", "only", "onto", "or", "other", "others", "otherwise", "our", "ours",
        "ourselves", "out", "over", "own", "part", "per", "perhaps", "please", "put", "rather",
        "re", "same", "see", "seem", "seemed", "seeming", "seems", "several", "she", "should",
        "show", "side", "since", "six", "sixty", "so", "some", "somehow", "someone", "something",
        "sometime", "sometimes", "somewhere", "still", "such", "take", "ten", "than", "that",
        "the", "their", "them", "themselves", "then", "thence", "there", "thereafter", "thereby",
        "therefore", "therein", "thereupon", "these", "they", "this", "those", "though", "three",
        "through", "throughout", "thru", "thus", "to", "together", "too", "top", "toward",
        "towards", "twelve", "twenty", "two", "un", "under", "until", "up", "upon", "us", "very",
        "via", "was", "we", "well", "were", "what", "whatever", "when", "whence", "whenever",
        "where", "whereas", "whereby", "wherein", "whereupon", "wherever", "whether", "which",
        "while", "whither", "who", "whoever", "whole", "whom", "whose", "why", "will", "with",
        "within", "without", "would", "yet", "you", "your", "yours", "yourself", "yourselves",
    ]
    .into_iter()
    .collect()
});

/// All personal pronouns tracked by the orientation scale.
pub static PRONOUNS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "i", "me", "my", "mine", "we", "us", "our", "ours", "you", "your", "yours", "he", "him",
        "his", "she", "her", "hers", "it", "its", "they", "them", "theirs",
    ]
    .into_iter()
    .collect()
});

/// First-person pronouns (writer-directed).
pub static SELF_DIRECTED_PRONOUNS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    ["i", "me", "my", "mine", "we", "us", "our", "ours"]
        .into_iter()
        .collect()
});

/// Second/third-person pronouns: the pronoun set minus the
/// self-directed subset.
pub static OTHER_DIRECTED_PRONOUNS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    PRONOUNS
        .difference(&SELF_DIRECTED_PRONOUNS)
        .copied()
        .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_directed_is_subset_of_pronouns() {
        assert!(SELF_DIRECTED_PRONOUNS.is_subset(&PRONOUNS));
    }

    #[test]
    fn other_directed_is_the_complement() {
        assert!(OTHER_DIRECTED_PRONOUNS.is_disjoint(&SELF_DIRECTED_PRONOUNS));
        assert_eq!(
            OTHER_DIRECTED_PRONOUNS.len() + SELF_DIRECTED_PRONOUNS.len(),
            PRONOUNS.len()
        );
        assert!(OTHER_DIRECTED_PRONOUNS.contains("they"));
        assert!(!OTHER_DIRECTED_PRONOUNS.contains("we"));
    }

    #[test]
    fn stop_words_cover_reference_samples() {
        for word in ["the", "is", "into", "that", "am"] {
            assert!(STOP_WORDS.contains(word), "missing {word:?}");
        }
        assert!(!STOP_WORDS.contains("reality"));
    }
}
