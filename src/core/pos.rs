//! Part-of-speech families
//!
//! WordNet splits its synsets across four data files, one per family. The
//! single-character tag inside each record distinguishes head adjectives (`a`)
//! from satellite adjectives (`s`); both normalize to [`PartOfSpeech::Adjective`].

use std::fmt;

/// One of the four WordNet part-of-speech families
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl PartOfSpeech {
    /// All families in data-file order
    pub const ALL: [Self; 4] = [Self::Noun, Self::Verb, Self::Adjective, Self::Adverb];

    /// Parse a record tag character
    ///
    /// # Examples
    /// ```
    /// use wordnet_relations::core::PartOfSpeech;
    ///
    /// assert_eq!(PartOfSpeech::from_tag('n'), Some(PartOfSpeech::Noun));
    /// assert_eq!(PartOfSpeech::from_tag('s'), Some(PartOfSpeech::Adjective));
    /// assert_eq!(PartOfSpeech::from_tag('x'), None);
    /// ```
    #[must_use]
    pub const fn from_tag(tag: char) -> Option<Self> {
        match tag {
            'n' => Some(Self::Noun),
            'v' => Some(Self::Verb),
            'a' | 's' => Some(Self::Adjective),
            'r' => Some(Self::Adverb),
            _ => None,
        }
    }

    /// Parse a tag token, which must be exactly one character
    #[must_use]
    pub fn from_tag_str(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(tag), None) => Self::from_tag(tag),
            _ => None,
        }
    }

    /// Canonical tag character (`a` for both adjective kinds)
    #[must_use]
    pub const fn tag(self) -> char {
        match self {
            Self::Noun => 'n',
            Self::Verb => 'v',
            Self::Adjective => 'a',
            Self::Adverb => 'r',
        }
    }

    /// Family name as used in the data file suffix (`data.noun`, `data.adj`, ...)
    #[must_use]
    pub const fn file_suffix(self) -> &'static str {
        match self {
            Self::Noun => "noun",
            Self::Verb => "verb",
            Self::Adjective => "adj",
            Self::Adverb => "adv",
        }
    }

    /// Data file name for this family
    #[must_use]
    pub fn data_file_name(self) -> String {
        format!("data.{}", self.file_suffix())
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Noun => "noun",
            Self::Verb => "verb",
            Self::Adjective => "adjective",
            Self::Adverb => "adverb",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip_through_canonical_form() {
        for pos in PartOfSpeech::ALL {
            assert_eq!(PartOfSpeech::from_tag(pos.tag()), Some(pos));
        }
    }

    #[test]
    fn satellite_adjective_normalizes() {
        assert_eq!(PartOfSpeech::from_tag('s'), Some(PartOfSpeech::Adjective));
        assert_eq!(PartOfSpeech::from_tag('a'), Some(PartOfSpeech::Adjective));
    }

    #[test]
    fn tag_token_must_be_single_char() {
        assert_eq!(PartOfSpeech::from_tag_str("v"), Some(PartOfSpeech::Verb));
        assert_eq!(PartOfSpeech::from_tag_str("vn"), None);
        assert_eq!(PartOfSpeech::from_tag_str(""), None);
        assert_eq!(PartOfSpeech::from_tag_str("q"), None);
    }

    #[test]
    fn data_file_names() {
        assert_eq!(PartOfSpeech::Noun.data_file_name(), "data.noun");
        assert_eq!(PartOfSpeech::Adjective.data_file_name(), "data.adj");
        assert_eq!(PartOfSpeech::Adverb.data_file_name(), "data.adv");
    }

    #[test]
    fn display_uses_full_name() {
        assert_eq!(PartOfSpeech::Adverb.to_string(), "adverb");
    }
}
