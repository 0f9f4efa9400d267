//! Representative lemma selection
//!
//! A synset often lists spelling variants of the same word. Presentation wants
//! one display form, so candidates are ranked by a composite key:
//!
//! 1. number of `_` word separators (single words first)
//! 2. British spelling flag (`isation` anywhere, or an `ise` ending) last
//! 3. American spelling flag (`ization` anywhere, or an `ize` ending) first
//! 4. character length (shorter first)
//! 5. lowercase form, then the raw form
//!
//! The spelling checks are plain substring tests and will misfire on words
//! like "otherwise"; they are kept as-is.

/// Word separator inside multi-word lemmas
pub const WORD_SEPARATOR: char = '_';

/// Sort key for one candidate lemma
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SelectionKey<'a> {
    separators: usize,
    british: bool,
    not_american: bool,
    length: usize,
    lowercase: String,
    raw: &'a str,
}

impl<'a> SelectionKey<'a> {
    #[must_use]
    pub fn new(lemma: &'a str) -> Self {
        Self {
            separators: lemma.matches(WORD_SEPARATOR).count(),
            british: is_british_spelling(lemma),
            not_american: !is_american_spelling(lemma),
            length: lemma.chars().count(),
            lowercase: lemma.to_lowercase(),
            raw: lemma,
        }
    }
}

/// `-isation` / `-ise` variant spelling
#[must_use]
pub fn is_british_spelling(lemma: &str) -> bool {
    lemma.contains("isation") || lemma.ends_with("ise")
}

/// `-ization` / `-ize` variant spelling
#[must_use]
pub fn is_american_spelling(lemma: &str) -> bool {
    lemma.contains("ization") || lemma.ends_with("ize")
}

/// Pick the representative lemma of a synset, or `None` for an empty list
///
/// The result does not depend on the order of `candidates`.
///
/// # Examples
/// ```
/// use wordnet_relations::relations::select_representative;
///
/// let lemmas = ["hybridisation", "hybridization"];
/// assert_eq!(select_representative(&lemmas), Some("hybridization"));
///
/// let lemmas = ["take_a_breath", "breathe"];
/// assert_eq!(select_representative(&lemmas), Some("breathe"));
/// ```
#[must_use]
pub fn select_representative<S: AsRef<str>>(candidates: &[S]) -> Option<&str> {
    candidates
        .iter()
        .map(AsRef::<str>::as_ref)
        .min_by_key(|lemma| SelectionKey::new(*lemma))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_selects_nothing() {
        let empty: [&str; 0] = [];
        assert_eq!(select_representative(&empty), None);
    }

    #[test]
    fn single_word_beats_multi_word() {
        let lemmas = ["run_away", "flee_the_scene", "zzzzzzzzzzzz"];
        assert_eq!(select_representative(&lemmas), Some("zzzzzzzzzzzz"));
    }

    #[test]
    fn american_spelling_wins() {
        assert_eq!(
            select_representative(&["hybridise", "hybridize"]),
            Some("hybridize")
        );
        assert_eq!(
            select_representative(&["organisation", "organization"]),
            Some("organization")
        );
    }

    #[test]
    fn american_flag_beats_shorter_neutral_word() {
        // Neither is British; the American flag outranks length
        assert_eq!(
            select_representative(&["cross", "hybridize"]),
            Some("hybridize")
        );
    }

    #[test]
    fn british_flag_misfires_on_ise_endings() {
        // "otherwise" trips the British check even though it is not a variant
        assert_eq!(
            select_representative(&["otherwise", "else"]),
            Some("else")
        );
    }

    #[test]
    fn shorter_then_alphabetical() {
        assert_eq!(select_representative(&["breathe", "puff"]), Some("puff"));
        assert_eq!(select_representative(&["gasp", "pant"]), Some("gasp"));
    }

    #[test]
    fn case_only_differences_are_still_total() {
        assert_eq!(select_representative(&["Bank", "bank"]), Some("Bank"));
        assert_eq!(select_representative(&["bank", "Bank"]), Some("Bank"));
    }

    #[test]
    fn selection_is_order_independent() {
        let mut lemmas = vec![
            "take_a_breath",
            "breathe",
            "respire",
            "suspire",
            "organise",
            "organize",
        ];
        let expected = select_representative(&lemmas).map(str::to_string);
        for _ in 0..lemmas.len() {
            lemmas.rotate_left(1);
            assert_eq!(select_representative(&lemmas).map(str::to_string), expected);
            lemmas.reverse();
            assert_eq!(select_representative(&lemmas).map(str::to_string), expected);
        }
        assert_eq!(expected.as_deref(), Some("organize"));
    }

    #[test]
    fn selection_key_orders_candidates() {
        assert!(SelectionKey::new("a_b") > SelectionKey::new("abc"));
        assert_eq!(SelectionKey::new("abc"), SelectionKey::new("abc"));
        assert!(SelectionKey::new("abc") < SelectionKey::new("abd"));
    }
}
