use super::DataStore;
use crate::error::{BookshelfError, Result};
use crate::model::{seed_books, Book, BookId};

/// In-memory storage. Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    books: Vec<Book>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the seed dataset.
    pub fn seeded() -> Self {
        Self { books: seed_books() }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl DataStore for InMemoryStore {
    fn append_book(&mut self, book: &Book) -> Result<()> {
        self.books.push(book.clone());
        Ok(())
    }

    fn get_book(&self, id: BookId) -> Result<Book> {
        self.books
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or(BookshelfError::BookNotFound(id))
    }

    fn list_books(&self) -> Result<Vec<Book>> {
        Ok(self.books.clone())
    }

    fn delete_book(&mut self, id: BookId) -> Result<Book> {
        let pos = self
            .books
            .iter()
            .position(|b| b.id == id)
            .ok_or(BookshelfError::BookNotFound(id))?;
        Ok(self.books.remove(pos))
    }

    fn replace_all(&mut self, books: Vec<Book>) -> Result<()> {
        self.books = books;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        next_id: u64,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                next_id: 1,
            }
        }

        pub fn seeded() -> Self {
            Self {
                store: InMemoryStore::seeded(),
                next_id: 5,
            }
        }

        pub fn with_books(mut self, count: usize) -> Self {
            for i in 0..count {
                let title = format!("Test Book {}", i + 1);
                self = self.with_book(&title, "Test Author", "General");
            }
            self
        }

        pub fn with_book(mut self, title: &str, author: &str, category: &str) -> Self {
            let book = Book {
                id: BookId(self.next_id),
                title: title.to_string(),
                author: author.to_string(),
                pages: 100,
                price: 10.0,
                isbn: format!("000-{:010}", self.next_id),
                category: category.to_string(),
            };
            self.next_id += 1;
            self.store.append_book(&book).unwrap();
            self
        }

        pub fn with_raw_book(mut self, book: Book) -> Self {
            self.next_id = self.next_id.max(book.id.0 + 1);
            self.store.append_book(&book).unwrap();
            self
        }
    }
}
