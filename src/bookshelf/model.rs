use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_CATEGORY: &str = "General";

/// Identifier of a book within a catalog session.
///
/// Rendered as `#3` for humans; parsing accepts both `3` and `#3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(pub u64);

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl FromStr for BookId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        digits
            .parse()
            .map(BookId)
            .map_err(|_| format!("Invalid book id: {}", s))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub pages: u32,
    pub price: f64,
    pub isbn: String,
    pub category: String,
}

impl Book {
    /// Price with two fraction digits, e.g. `$25.50`.
    pub fn price_label(&self) -> String {
        format!("${:.2}", self.price)
    }
}

/// The editable fields of a [`BookDraft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Title,
    Author,
    Pages,
    Price,
    Isbn,
    Category,
}

impl DraftField {
    /// Fields that must be present before a draft can become a book.
    pub const REQUIRED: [DraftField; 5] = [
        DraftField::Title,
        DraftField::Author,
        DraftField::Pages,
        DraftField::Price,
        DraftField::Isbn,
    ];

    pub fn all() -> &'static [DraftField] {
        &[
            DraftField::Title,
            DraftField::Author,
            DraftField::Pages,
            DraftField::Price,
            DraftField::Isbn,
            DraftField::Category,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            DraftField::Title => "title",
            DraftField::Author => "author",
            DraftField::Pages => "pages",
            DraftField::Price => "price",
            DraftField::Isbn => "isbn",
            DraftField::Category => "category",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DraftField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DraftField::all()
            .iter()
            .find(|field| field.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| format!("Unknown draft field: {}", s))
    }
}

/// Why a draft could not become a book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftRejection {
    Missing(DraftField),
    InvalidNumber { field: DraftField, value: String },
}

impl fmt::Display for DraftRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraftRejection::Missing(field) => write!(f, "missing {}", field),
            DraftRejection::InvalidNumber { field, value } => {
                write!(f, "invalid {}: {:?}", field, value)
            }
        }
    }
}

/// A pending record, held as the raw text the user typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub pages: String,
    pub price: String,
    pub isbn: String,
    pub category: String,
}

impl BookDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Author => &self.author,
            DraftField::Pages => &self.pages,
            DraftField::Price => &self.price,
            DraftField::Isbn => &self.isbn,
            DraftField::Category => &self.category,
        }
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Title => self.title = value,
            DraftField::Author => self.author = value,
            DraftField::Pages => self.pages = value,
            DraftField::Price => self.price = value,
            DraftField::Isbn => self.isbn = value,
            DraftField::Category => self.category = value,
        }
    }

    pub fn with(mut self, field: DraftField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Required fields that are still empty. Whitespace counts as present.
    pub fn missing_fields(&self) -> Vec<DraftField> {
        DraftField::REQUIRED
            .iter()
            .copied()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        DraftField::all()
            .iter()
            .all(|field| self.get(*field).is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Turns the draft into a book with the given id.
    ///
    /// Pages must parse to a positive integer and price to a finite,
    /// non-negative number. An empty category falls back to `default_category`.
    pub fn to_book(&self, id: BookId, default_category: &str) -> Result<Book, DraftRejection> {
        if let Some(field) = self.missing_fields().first() {
            return Err(DraftRejection::Missing(*field));
        }

        let pages = self
            .pages
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|p| *p > 0)
            .ok_or_else(|| DraftRejection::InvalidNumber {
                field: DraftField::Pages,
                value: self.pages.clone(),
            })?;

        let price = self
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p >= 0.0)
            .ok_or_else(|| DraftRejection::InvalidNumber {
                field: DraftField::Price,
                value: self.price.clone(),
            })?;
        // "-0" passes the check above but must not be stored as -0.0
        let price = if price == 0.0 { 0.0 } else { price };

        let category = if self.category.is_empty() {
            default_category.to_string()
        } else {
            self.category.clone()
        };

        Ok(Book {
            id,
            title: self.title.clone(),
            author: self.author.clone(),
            pages,
            price,
            isbn: self.isbn.clone(),
            category,
        })
    }
}

/// The four books every fresh catalog starts with.
pub fn seed_books() -> Vec<Book> {
    let seed = [
        (
            "The Lord of the Rings",
            "J.R.R. Tolkien",
            1178,
            25.50,
            "978-0618053267",
            "Fantasy",
        ),
        (
            "The Hobbit",
            "J.R.R. Tolkien",
            310,
            15.00,
            "978-0345339683",
            "Fantasy",
        ),
        (
            "Pride and Prejudice",
            "Jane Austen",
            279,
            12.75,
            "978-0141439518",
            "Romance",
        ),
        ("1984", "George Orwell", 328, 10.20, "978-0451524935", "Dystopian"),
    ];

    seed.into_iter()
        .enumerate()
        .map(|(i, (title, author, pages, price, isbn, category))| Book {
            id: BookId(i as u64 + 1),
            title: title.to_string(),
            author: author.to_string(),
            pages,
            price,
            isbn: isbn.to_string(),
            category: category.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> BookDraft {
        BookDraft::new()
            .with(DraftField::Title, "Dune")
            .with(DraftField::Author, "Frank Herbert")
            .with(DraftField::Pages, "412")
            .with(DraftField::Price, "9.99")
            .with(DraftField::Isbn, "978-0441013593")
    }

    #[test]
    fn test_book_id_parsing() {
        assert_eq!(BookId::from_str("3"), Ok(BookId(3)));
        assert_eq!(BookId::from_str("#12"), Ok(BookId(12)));
        assert!(BookId::from_str("").is_err());
        assert!(BookId::from_str("#").is_err());
        assert!(BookId::from_str("abc").is_err());
        assert!(BookId::from_str("-1").is_err());
        assert_eq!(BookId(7).to_string(), "#7");
    }

    #[test]
    fn test_draft_field_parsing() {
        assert_eq!(DraftField::from_str("title"), Ok(DraftField::Title));
        assert_eq!(DraftField::from_str("ISBN"), Ok(DraftField::Isbn));
        assert!(DraftField::from_str("publisher").is_err());
    }

    #[test]
    fn test_missing_fields_reports_required_only() {
        let draft = BookDraft::new().with(DraftField::Category, "Poetry");
        assert_eq!(draft.missing_fields(), DraftField::REQUIRED.to_vec());
        assert!(full_draft().missing_fields().is_empty());
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        let draft = full_draft().with(DraftField::Author, " ");
        assert!(draft.missing_fields().is_empty());
    }

    #[test]
    fn test_to_book_applies_default_category() {
        let book = full_draft().to_book(BookId(5), DEFAULT_CATEGORY).unwrap();
        assert_eq!(book.id, BookId(5));
        assert_eq!(book.pages, 412);
        assert_eq!(book.price, 9.99);
        assert_eq!(book.category, "General");
    }

    #[test]
    fn test_to_book_keeps_explicit_category() {
        let book = full_draft()
            .with(DraftField::Category, "Sci-Fi")
            .to_book(BookId(1), DEFAULT_CATEGORY)
            .unwrap();
        assert_eq!(book.category, "Sci-Fi");
    }

    #[test]
    fn test_to_book_rejects_missing_field() {
        let draft = full_draft().with(DraftField::Price, "");
        assert_eq!(
            draft.to_book(BookId(1), DEFAULT_CATEGORY),
            Err(DraftRejection::Missing(DraftField::Price))
        );
    }

    #[test]
    fn test_to_book_rejects_bad_numbers() {
        for pages in ["abc", "0", "-3", "1.5"] {
            let draft = full_draft().with(DraftField::Pages, pages);
            assert!(matches!(
                draft.to_book(BookId(1), DEFAULT_CATEGORY),
                Err(DraftRejection::InvalidNumber {
                    field: DraftField::Pages,
                    ..
                })
            ));
        }
        for price in ["free", "-1", "NaN", "inf"] {
            let draft = full_draft().with(DraftField::Price, price);
            assert!(matches!(
                draft.to_book(BookId(1), DEFAULT_CATEGORY),
                Err(DraftRejection::InvalidNumber {
                    field: DraftField::Price,
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_to_book_stores_negative_zero_price_as_zero() {
        for price in ["-0", "-0.00", "0"] {
            let book = full_draft()
                .with(DraftField::Price, price)
                .to_book(BookId(1), DEFAULT_CATEGORY)
                .unwrap();
            assert!(book.price.is_sign_positive(), "price {:?}", price);
            assert_eq!(book.price_label(), "$0.00");
        }
    }

    #[test]
    fn test_clear_empties_every_field() {
        let mut draft = full_draft().with(DraftField::Category, "Sci-Fi");
        draft.clear();
        assert!(draft.is_empty());
    }

    #[test]
    fn test_seed_books() {
        let books = seed_books();
        assert_eq!(books.len(), 4);
        assert_eq!(books[0].title, "The Lord of the Rings");
        assert_eq!(books[3].id, BookId(4));
        assert_eq!(books[3].price_label(), "$10.20");
    }
}
