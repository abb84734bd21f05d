use crate::catalog::Catalog;
use crate::models::Book;
use std::sync::Arc;
use tracing::debug;

/// Result of a catalog lookup: the bucket that answered, whether the
/// default was substituted, and the books in catalog order.
#[derive(Debug)]
pub struct Recommendations<'a> {
    pub mood: &'a str,
    pub fallback: bool,
    pub books: &'a [Book],
}

/// Mood-to-books lookup over the static catalog.
///
/// A total function: labels are matched exactly (case-sensitive, no
/// normalization), and a label without a bucket silently resolves to the
/// default bucket rather than erroring, so the caller always gets a
/// non-empty list.
#[derive(Debug, Clone)]
pub struct RecommendationService {
    catalog: Arc<Catalog>,
}

impl RecommendationService {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Service over the full storefront catalog.
    pub fn builtin() -> Self {
        Self::new(Arc::new(Catalog::builtin()))
    }

    pub fn recommend(&self, label: &str) -> Recommendations<'_> {
        if let Some((mood, books)) = self.catalog.entry(label) {
            return Recommendations {
                mood,
                fallback: false,
                books,
            };
        }

        let default = self.catalog.default_mood();
        debug!("no bucket for '{}', falling back to '{}'", label, default);
        Recommendations {
            mood: default,
            fallback: true,
            // The constructor guarantees the default bucket exists.
            books: self.catalog.bucket(default).unwrap_or(&[]),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Mood;

    #[test]
    fn known_bucket_returns_its_books_in_order() {
        let service = RecommendationService::builtin();
        let result = service.recommend("Happy");

        assert_eq!(result.mood, "Happy");
        assert!(!result.fallback);
        assert_eq!(result.books.len(), 4);
        assert_eq!(result.books[0].title, "The House in the Cerulean Sea");
        assert!(result.books.iter().all(|b| b.mood == "Happy"));
    }

    #[test]
    fn unknown_label_falls_back_to_default_bucket() {
        let service = RecommendationService::builtin();
        let fallback = service.recommend("Klingon");
        let default = service.recommend("Happy");

        assert!(fallback.fallback);
        assert_eq!(fallback.mood, "Happy");
        assert_eq!(fallback.books, default.books);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let service = RecommendationService::builtin();
        let result = service.recommend("happy");
        // Lower-case label is not a bucket key; it lands on the default
        // bucket via the fallback path.
        assert!(result.fallback);
        assert_eq!(result.mood, "Happy");
    }

    #[test]
    fn classifier_moods_without_buckets_fall_back() {
        let service = RecommendationService::builtin();
        // Sad and Anxious are classifier vocabulary, but the catalog has no
        // bucket for them. They resolve to the default bucket.
        for mood in [Mood::Sad, Mood::Anxious] {
            let result = service.recommend(mood.as_str());
            assert!(result.fallback, "{} should have no bucket", mood);
            assert_eq!(result.mood, "Happy");
            assert!(!result.books.is_empty());
        }
    }

    #[test]
    fn every_bucket_is_non_empty_and_self_consistent() {
        let service = RecommendationService::builtin();
        for label in service.catalog().bucket_labels() {
            let result = service.recommend(label);
            assert!(!result.fallback);
            assert!(!result.books.is_empty());
            assert!(result.books.iter().all(|b| b.mood == label));
        }
    }

    #[test]
    fn empty_label_falls_back() {
        let service = RecommendationService::builtin();
        let result = service.recommend("");
        assert!(result.fallback);
        assert_eq!(result.mood, "Happy");
    }
}
