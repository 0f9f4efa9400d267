//! Record decoder
//!
//! Turns one line of a `data.<family>` file into a [`SynsetRecord`]. Layout of
//! the structural part (everything before the first `|`):
//!
//! ```text
//! offset lex_filenum ss_type w_cnt (word lex_id){w_cnt} p_cnt (ptr offset pos src_tgt){p_cnt} ...
//! ```
//!
//! `w_cnt` is hexadecimal, `p_cnt` is decimal. Verb frames and the gloss that
//! follow the pointer block are ignored. Decoding never fails past this
//! boundary: every line yields a [`DecodeOutcome`].

use crate::core::{MalformedReason, PartOfSpeech, PointerEdge, Radix, SynsetRecord, TokenCursor};

/// Minimum header fields before any variable-length block
const HEADER_FIELDS: usize = 4;

/// Result of decoding one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeOutcome {
    /// A complete record
    Record(SynsetRecord),
    /// Not a data line (license header, blank line, comment)
    NotData,
    /// A well-tagged line belonging to another family
    Foreign(PartOfSpeech),
    /// A data line whose structure could not be decoded
    Malformed(MalformedReason),
}

impl DecodeOutcome {
    /// The decoded record, if any
    #[must_use]
    pub fn into_record(self) -> Option<SynsetRecord> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }
}

/// Decode one data-file line for the `family` file being scanned
///
/// # Examples
/// ```
/// use wordnet_relations::core::PartOfSpeech;
/// use wordnet_relations::wordnet::{DecodeOutcome, decode_line};
///
/// let line = "00001740 41 v 02 hybridize 0 hybridise 0 001 + 00002000 n 0101 | cross";
/// let DecodeOutcome::Record(record) = decode_line(line, PartOfSpeech::Verb) else {
///     panic!("expected a record");
/// };
/// assert_eq!(record.offset, 1740);
/// assert_eq!(record.lemmas, ["hybridize", "hybridise"]);
/// assert_eq!(record.pointers.len(), 1);
/// ```
#[must_use]
pub fn decode_line(line: &str, family: PartOfSpeech) -> DecodeOutcome {
    if !line.starts_with(|c: char| c.is_ascii_digit()) {
        return DecodeOutcome::NotData;
    }

    // The gloss may contain anything, including digits and pipes
    let structural = line.split_once('|').map_or(line, |(head, _gloss)| head);

    match decode_structural(structural, family) {
        Ok(outcome) => outcome,
        Err(reason) => DecodeOutcome::Malformed(reason),
    }
}

fn decode_structural(text: &str, family: PartOfSpeech) -> Result<DecodeOutcome, MalformedReason> {
    let mut cursor = TokenCursor::new(text);
    if cursor.len() < HEADER_FIELDS {
        return Err(MalformedReason::TooFewFields {
            expected: HEADER_FIELDS,
            found: cursor.len(),
        });
    }

    let offset = cursor.decimal("synset_offset")?;
    cursor.skip(1, "lex_filenum")?;
    let tag = cursor.field("ss_type")?;
    let pos = PartOfSpeech::from_tag_str(tag)
        .ok_or_else(|| MalformedReason::InvalidPartOfSpeech(tag.to_string()))?;
    if pos != family {
        return Ok(DecodeOutcome::Foreign(pos));
    }

    let word_count = cursor.hex_count("w_cnt")?;
    if word_count == 0 {
        return Err(MalformedReason::EmptyLemmaBlock);
    }
    cursor.expect_groups(word_count, 2, "word")?;
    let mut lemmas: Vec<String> = Vec::with_capacity(word_count);
    for _ in 0..word_count {
        let [lemma, _lex_id] = cursor.group::<2>("word")?;
        if lemmas.iter().any(|existing| existing == lemma) {
            return Err(MalformedReason::DuplicateLemma(lemma.to_string()));
        }
        lemmas.push(lemma.to_string());
    }

    let pointer_count = cursor.decimal_count("p_cnt")?;
    cursor.expect_groups(pointer_count, 4, "pointer")?;
    let mut pointers = Vec::with_capacity(pointer_count);
    for _ in 0..pointer_count {
        let [symbol, target, target_tag, _source_target] = cursor.group::<4>("pointer")?;
        let target_offset = target.parse().map_err(|_| MalformedReason::InvalidNumber {
            field: "pointer_offset",
            value: target.to_string(),
            radix: Radix::Decimal,
        })?;
        let target_pos = PartOfSpeech::from_tag_str(target_tag)
            .ok_or_else(|| MalformedReason::InvalidPartOfSpeech(target_tag.to_string()))?;
        pointers.push(PointerEdge::new(symbol, target_offset, target_pos));
    }

    Ok(DecodeOutcome::Record(SynsetRecord {
        offset,
        pos,
        lemmas,
        pointers,
    }))
}
