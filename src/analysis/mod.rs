// Character analysis functions backing the MCP tools.
// Pure functions over &str; no state is shared between calls.


use std::cmp::Reverse;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by the analysis functions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("Character must be a single character")]
    NotSingleCharacter { received: String },
}

/// Result of a case-sensitive character count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterCount {
    pub text: String,
    pub character: String,
    pub count: usize,
    pub analysis: String,
}

/// Result of a case-insensitive character count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseInsensitiveCount {
    pub text: String,
    pub character: String,
    pub count: usize,
    pub case_sensitive: bool,
    pub analysis: String,
}

/// Occurrence count of a single character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterFrequency {
    pub character: String,
    pub count: usize,
}

/// Frequency statistics for every distinct character in a text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterStats {
    pub text: String,
    /// Number of Unicode scalar values, so `"🍓"` counts once rather than as
    /// two UTF-16 code units
    pub total_characters: usize,
    pub unique_characters: usize,
    /// Sorted by count descending, then by character ascending
    pub character_breakdown: Vec<CharacterFrequency>,
    pub most_frequent: Option<CharacterFrequency>,
    pub analysis: String,
}

/// Count exact occurrences of `character` in `text`.
///
/// `character` must hold exactly one `char`; comparison is ordinal.
#[inline]
pub fn count_characters(text: &str, character: &str) -> Result<CharacterCount, AnalysisError> {
    let needle = single_char(character)?;
    let count = text.chars().filter(|&c| c == needle).count();

    Ok(CharacterCount {
        text: text.to_owned(),
        character: character.to_owned(),
        count,
        analysis: format!(
            "Found {} occurrence(s) of '{}' in \"{}\"",
            count, character, text
        ),
    })
}

/// Count occurrences of `character` in `text`, ignoring letter case.
///
/// Both sides are folded with [`fold_case`] before comparing.
#[inline]
pub fn count_characters_ignore_case(
    text: &str,
    character: &str,
) -> Result<CaseInsensitiveCount, AnalysisError> {
    let needle = fold_case(single_char(character)?);
    let count = text.chars().filter(|&c| fold_case(c) == needle).count();

    Ok(CaseInsensitiveCount {
        text: text.to_owned(),
        character: character.to_owned(),
        count,
        case_sensitive: false,
        analysis: format!(
            "Found {} occurrence(s) of '{}' in \"{}\" (case-insensitive)",
            count, character, text
        ),
    })
}

/// Build the frequency breakdown of every distinct character in `text`
#[inline]
pub fn character_stats(text: &str) -> CharacterStats {
    let character_breakdown: Vec<CharacterFrequency> = text
        .chars()
        .counts()
        .into_iter()
        .sorted_by_key(|&(c, count)| (Reverse(count), c))
        .map(|(c, count)| CharacterFrequency {
            character: c.to_string(),
            count,
        })
        .collect();

    let total_characters = text.chars().count();
    let unique_characters = character_breakdown.len();

    CharacterStats {
        text: text.to_owned(),
        total_characters,
        unique_characters,
        most_frequent: character_breakdown.first().cloned(),
        character_breakdown,
        analysis: format!(
            "Text contains {} total characters with {} unique characters",
            total_characters, unique_characters
        ),
    }
}

/// Simple one-to-one lowercase mapping.
///
/// Characters whose lowercase form expands to several characters (such as
/// `'İ'`) are returned unchanged, so folding never alters text length.
#[inline]
pub fn fold_case(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => folded,
        _ => c,
    }
}

fn single_char(character: &str) -> Result<char, AnalysisError> {
    let mut chars = character.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(AnalysisError::NotSingleCharacter {
            received: character.to_owned(),
        }),
    }
}
