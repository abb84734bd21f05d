//! Built-in lexicon and catalog data for the storefront.

use super::{Catalog, Mood, MoodLexicon};
use crate::models::Book;
use once_cell::sync::Lazy;

const PLACEHOLDER_COVER: &str = "/placeholder.svg?height=300&width=200";

fn book(
    id: &str,
    title: &str,
    author: &str,
    genre: &str,
    mood: &str,
    rating: f32,
    price: f64,
) -> Book {
    Book {
        id: id.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        cover: PLACEHOLDER_COVER.to_string(),
        genre: genre.to_string(),
        mood: mood.to_string(),
        rating,
        price,
    }
}

static LEXICON: Lazy<MoodLexicon> = Lazy::new(|| {
    MoodLexicon::new(vec![
        (
            Mood::Happy,
            vec![
                "happy", "joy", "excited", "cheerful", "upbeat", "positive", "good", "great",
                "wonderful",
            ],
        ),
        (
            Mood::Sad,
            vec![
                "sad", "depressed", "down", "melancholy", "blue", "upset", "crying", "tears",
            ],
        ),
        (
            Mood::Anxious,
            vec!["anxious", "worried", "nervous", "stressed", "panic", "fear", "scared"],
        ),
        (
            Mood::Romantic,
            vec!["love", "romance", "romantic", "heart", "relationship", "dating", "crush"],
        ),
        (
            Mood::Adventurous,
            vec!["adventure", "travel", "explore", "journey", "quest", "exciting", "bold"],
        ),
        (
            Mood::Mysterious,
            vec!["mystery", "secret", "hidden", "unknown", "curious", "puzzle", "enigma"],
        ),
        (
            Mood::Thoughtful,
            vec!["think", "reflect", "contemplate", "philosophical", "deep", "meaning"],
        ),
        (
            Mood::Cozy,
            vec!["cozy", "comfort", "warm", "peaceful", "calm", "relaxed", "quiet"],
        ),
        (
            Mood::Energetic,
            vec!["energy", "active", "dynamic", "vibrant", "lively", "enthusiastic"],
        ),
        (
            Mood::Melancholic,
            vec!["melancholy", "nostalgic", "wistful", "bittersweet", "longing"],
        ),
    ])
});

static CATALOG: Lazy<Catalog> = Lazy::new(|| {
    let buckets = vec![
        (
            "Happy".to_string(),
            vec![
                book("1", "The House in the Cerulean Sea", "TJ Klune", "Fantasy", "Happy", 4.8, 14.99),
                book("2", "Beach Read", "Emily Henry", "Romance", "Happy", 4.6, 13.99),
                book("3", "The Midnight Library", "Matt Haig", "Fiction", "Happy", 4.7, 15.99),
                book("4", "Anxious People", "Fredrik Backman", "Fiction", "Happy", 4.5, 16.99),
            ],
        ),
        (
            "Adventurous".to_string(),
            vec![
                book("5", "The Name of the Wind", "Patrick Rothfuss", "Fantasy", "Adventurous", 4.9, 17.99),
                book("6", "Into the Wild", "Jon Krakauer", "Non-fiction", "Adventurous", 4.4, 14.99),
                book("7", "The Hobbit", "J.R.R. Tolkien", "Fantasy", "Adventurous", 4.8, 12.99),
                book("8", "Wild", "Cheryl Strayed", "Memoir", "Adventurous", 4.3, 15.99),
            ],
        ),
        (
            "Romantic".to_string(),
            vec![
                book("9", "It Ends with Us", "Colleen Hoover", "Romance", "Romantic", 4.7, 14.99),
                book("10", "The Seven Husbands of Evelyn Hugo", "Taylor Jenkins Reid", "Historical Fiction", "Romantic", 4.9, 15.99),
                book("11", "Pride and Prejudice", "Jane Austen", "Classic", "Romantic", 4.8, 11.99),
                book("12", "The Hating Game", "Sally Thorne", "Romance", "Romantic", 4.5, 13.99),
            ],
        ),
        (
            "Mysterious".to_string(),
            vec![
                book("13", "Gone Girl", "Gillian Flynn", "Thriller", "Mysterious", 4.6, 16.99),
                book("14", "The Girl with the Dragon Tattoo", "Stieg Larsson", "Mystery", "Mysterious", 4.5, 15.99),
                book("15", "Big Little Lies", "Liane Moriarty", "Mystery", "Mysterious", 4.4, 14.99),
                book("16", "The Silent Patient", "Alex Michaelides", "Thriller", "Mysterious", 4.3, 17.99),
            ],
        ),
        (
            "Thoughtful".to_string(),
            vec![
                book("17", "Sapiens", "Yuval Noah Harari", "Non-fiction", "Thoughtful", 4.6, 18.99),
                book("18", "The Alchemist", "Paulo Coelho", "Philosophy", "Thoughtful", 4.5, 13.99),
                book("19", "Man's Search for Meaning", "Viktor E. Frankl", "Psychology", "Thoughtful", 4.8, 14.99),
                book("20", "The Power of Now", "Eckhart Tolle", "Spirituality", "Thoughtful", 4.4, 16.99),
            ],
        ),
        (
            "Cozy".to_string(),
            vec![
                book("21", "The Thursday Murder Club", "Richard Osman", "Cozy Mystery", "Cozy", 4.5, 15.99),
                book("22", "A Man Called Ove", "Fredrik Backman", "Fiction", "Cozy", 4.7, 14.99),
                book("23", "The Guernsey Literary Society", "Mary Ann Shaffer", "Historical Fiction", "Cozy", 4.6, 13.99),
                book("24", "Eleanor Oliphant Is Completely Fine", "Gail Honeyman", "Fiction", "Cozy", 4.4, 15.99),
            ],
        ),
        (
            "Energetic".to_string(),
            vec![
                book("25", "Ready Player One", "Ernest Cline", "Science Fiction", "Energetic", 4.5, 16.99),
                book("26", "The Hunger Games", "Suzanne Collins", "Dystopian", "Energetic", 4.6, 14.99),
                book("27", "Six of Crows", "Leigh Bardugo", "Fantasy", "Energetic", 4.7, 17.99),
                book("28", "The Martian", "Andy Weir", "Science Fiction", "Energetic", 4.8, 15.99),
            ],
        ),
        (
            "Melancholic".to_string(),
            vec![
                book("29", "The Book Thief", "Markus Zusak", "Historical Fiction", "Melancholic", 4.7, 16.99),
                book("30", "Never Let Me Go", "Kazuo Ishiguro", "Literary Fiction", "Melancholic", 4.5, 15.99),
                book("31", "The Remains of the Day", "Kazuo Ishiguro", "Literary Fiction", "Melancholic", 4.6, 14.99),
                book("32", "A Little Life", "Hanya Yanagihara", "Literary Fiction", "Melancholic", 4.4, 18.99),
            ],
        ),
    ];

    Catalog {
        buckets,
        default_mood: Mood::DEFAULT.as_str().to_string(),
    }
});

pub(super) fn builtin_lexicon() -> MoodLexicon {
    LEXICON.clone()
}

pub(super) fn builtin_catalog() -> Catalog {
    CATALOG.clone()
}
