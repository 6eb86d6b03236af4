//! Text analysis: tokenization, stop words and word n-grams.

use crate::traits::Analyzer;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Common English function words that carry no matching signal.
const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst", "an",
    "and", "another", "any", "anyhow", "anyone", "anything", "anyway", "anywhere", "are",
    "around", "as", "at", "back", "be", "became", "because", "become", "becomes", "becoming",
    "been", "before", "beforehand", "behind", "being", "below", "beside", "besides", "between",
    "beyond", "both", "but", "by", "can", "cannot", "could", "do", "done", "down", "due",
    "during", "each", "eg", "either", "else", "elsewhere", "enough", "etc", "even", "ever",
    "every", "everyone", "everything", "everywhere", "except", "few", "for", "former",
    "formerly", "from", "further", "had", "has", "have", "he", "hence", "her", "here",
    "hereafter", "hereby", "herein", "hereupon", "hers", "herself", "him", "himself", "his",
    "how", "however", "ie", "if", "in", "indeed", "into", "is", "it", "its", "itself", "just",
    "last", "latter", "latterly", "least", "less", "many", "may", "me", "meanwhile", "might",
    "mine", "more", "moreover", "most", "mostly", "much", "must", "my", "myself", "namely",
    "neither", "never", "nevertheless", "next", "no", "nobody", "none", "noone", "nor", "not",
    "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto",
    "or", "other", "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own",
    "per", "perhaps", "please", "rather", "re", "same", "seem", "seemed", "seeming", "seems",
    "several", "she", "should", "since", "so", "some", "somehow", "someone", "something",
    "sometime", "sometimes", "somewhere", "still", "such", "than", "that", "the", "their",
    "them", "themselves", "then", "thence", "there", "thereafter", "thereby", "therefore",
    "therein", "thereupon", "these", "they", "this", "those", "though", "through",
    "throughout", "thru", "thus", "to", "together", "too", "toward", "towards", "under",
    "until", "up", "upon", "us", "very", "via", "was", "we", "well", "were", "what",
    "whatever", "when", "whence", "whenever", "where", "whereafter", "whereas", "whereby",
    "wherein", "whereupon", "wherever", "whether", "which", "while", "whither", "who",
    "whoever", "whole", "whom", "whose", "why", "will", "with", "within", "without", "would",
    "yet", "you", "your", "yours", "yourself", "yourselves",
];

static STOP_WORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ENGLISH_STOP_WORDS.iter().copied().collect());

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Lowercase `text` and split it into word tokens.
///
/// A token is a maximal run of alphanumeric characters or `_` that is at
/// least two characters long.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| token.chars().count() >= 2)
        .map(str::to_string)
        .collect()
}

/// Word n-gram analyzer with English stop-word removal.
///
/// Stop words are dropped before n-grams are formed, so a bigram may join
/// two words that were separated by a stop word in the source text.
#[derive(Debug, Clone)]
pub struct WordNgramAnalyzer {
    min_n: usize,
    max_n: usize,
}

impl WordNgramAnalyzer {
    /// Create an analyzer emitting n-grams for every n in `min_n..=max_n`.
    pub fn new(min_n: usize, max_n: usize) -> Self {
        let min_n = min_n.max(1);
        Self {
            min_n,
            max_n: max_n.max(min_n),
        }
    }
}

impl Default for WordNgramAnalyzer {
    /// Unigrams and bigrams.
    fn default() -> Self {
        Self::new(1, 2)
    }
}

impl Analyzer for WordNgramAnalyzer {
    fn name(&self) -> &str {
        "WordNgramAnalyzer"
    }

    fn analyze(&self, text: &str) -> Vec<String> {
        let words: Vec<String> = tokenize(text)
            .into_iter()
            .filter(|w| !is_stop_word(w))
            .collect();

        let mut terms = Vec::new();
        for n in self.min_n..=self.max_n {
            if n > words.len() {
                break;
            }
            if n == 1 {
                terms.extend(words.iter().cloned());
            } else {
                terms.extend(words.windows(n).map(|window| window.join(" ")));
            }
        }
        terms
    }
}
