//! Static mood vocabulary, keyword lexicon, and book catalog.
//!
//! The lexicon and catalog are plain immutable values handed to the
//! services at construction time, so tests can substitute small fixtures
//! instead of the full built-in tables.

use crate::error::{ApiError, Result};
use crate::models::Book;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

mod data;

/// The classifier's mood vocabulary.
///
/// Declaration order is load-bearing: classification ties resolve to the
/// earliest variant, and an all-zero match returns the first one. Reordering
/// these variants changes observable results for ambiguous inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Mood {
    Happy,
    Sad,
    Anxious,
    Romantic,
    Adventurous,
    Mysterious,
    Thoughtful,
    Cozy,
    Energetic,
    Melancholic,
}

impl Mood {
    /// All moods, in tie-break order.
    pub const VOCABULARY: [Mood; 10] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Anxious,
        Mood::Romantic,
        Mood::Adventurous,
        Mood::Mysterious,
        Mood::Thoughtful,
        Mood::Cozy,
        Mood::Energetic,
        Mood::Melancholic,
    ];

    /// Fallback for empty lexicons and for catalog labels without a bucket.
    pub const DEFAULT: Mood = Mood::Happy;

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Anxious => "Anxious",
            Mood::Romantic => "Romantic",
            Mood::Adventurous => "Adventurous",
            Mood::Mysterious => "Mysterious",
            Mood::Thoughtful => "Thoughtful",
            Mood::Cozy => "Cozy",
            Mood::Energetic => "Energetic",
            Mood::Melancholic => "Melancholic",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered mapping from mood to its keyword triggers.
///
/// Entries are kept as an ordered list, not a map, because iteration order
/// is the classifier's tie-break order.
#[derive(Debug, Clone)]
pub struct MoodLexicon {
    entries: Vec<(Mood, Vec<&'static str>)>,
}

impl MoodLexicon {
    pub fn new(entries: Vec<(Mood, Vec<&'static str>)>) -> Self {
        Self { entries }
    }

    /// The full storefront lexicon.
    pub fn builtin() -> Self {
        data::builtin_lexicon()
    }

    pub fn entries(&self) -> &[(Mood, Vec<&'static str>)] {
        &self.entries
    }

    /// Vocabulary in declaration order.
    pub fn moods(&self) -> Vec<Mood> {
        self.entries.iter().map(|(mood, _)| *mood).collect()
    }
}

/// Fixed mood-to-books catalog with a default bucket for unknown labels.
#[derive(Debug, Clone)]
pub struct Catalog {
    buckets: Vec<(String, Vec<Book>)>,
    default_mood: String,
}

impl Catalog {
    /// Build a catalog from explicit buckets, validating that the default
    /// bucket exists and is non-empty so lookups can never come back empty.
    pub fn new(buckets: Vec<(String, Vec<Book>)>, default_mood: &str) -> Result<Self> {
        let default_ok = buckets
            .iter()
            .any(|(label, books)| label == default_mood && !books.is_empty());
        if !default_ok {
            return Err(ApiError::InvalidInput(format!(
                "catalog default bucket '{}' is missing or empty",
                default_mood
            )));
        }

        Ok(Self {
            buckets,
            default_mood: default_mood.to_string(),
        })
    }

    /// The full 32-book storefront catalog, default bucket "Happy".
    pub fn builtin() -> Self {
        data::builtin_catalog()
    }

    pub fn default_mood(&self) -> &str {
        &self.default_mood
    }

    /// Bucket for an exact (case-sensitive) label, if one exists.
    pub fn bucket(&self, label: &str) -> Option<&[Book]> {
        self.entry(label).map(|(_, books)| books)
    }

    /// Bucket and its stored label for an exact match, if one exists.
    pub fn entry(&self, label: &str) -> Option<(&str, &[Book])> {
        self.buckets
            .iter()
            .find(|(key, _)| key == label)
            .map(|(key, books)| (key.as_str(), books.as_slice()))
    }

    pub fn has_bucket(&self, label: &str) -> bool {
        self.bucket(label).is_some()
    }

    /// Find a book anywhere in the catalog by its id.
    pub fn find_book(&self, id: &str) -> Option<&Book> {
        self.buckets
            .iter()
            .flat_map(|(_, books)| books.iter())
            .find(|book| book.id == id)
    }

    pub fn bucket_labels(&self) -> Vec<&str> {
        self.buckets.iter().map(|(label, _)| label.as_str()).collect()
    }
}
