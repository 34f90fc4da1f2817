//! Book identifier allocation.
//!
//! Identifiers are handed out by the catalog, not by the store. Two schemes are
//! supported (see [`IdStrategy`]):
//!
//! - `CollectionSize`: the next id is `len + 1`. This is simple but not unique:
//!   with books `#1..#4`, deleting `#2` and inserting gives the new book `#4`
//!   while the old `#4` is still present.
//! - `Monotonic`: the next id is one past the highest id this allocator has
//!   issued or seen in the collection, so ids are never reused in a session.

use crate::config::IdStrategy;
use crate::model::{Book, BookId};

#[derive(Debug, Clone)]
pub struct IdAllocator {
    strategy: IdStrategy,
    high_water: u64,
}

impl IdAllocator {
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            strategy,
            high_water: 0,
        }
    }

    /// An allocator that has already seen every id in `books`.
    pub fn for_books(strategy: IdStrategy, books: &[Book]) -> Self {
        let mut ids = Self::new(strategy);
        ids.observe(books);
        ids
    }

    fn observe(&mut self, books: &[Book]) {
        if let Some(max) = books.iter().map(|b| b.id.0).max() {
            self.high_water = self.high_water.max(max);
        }
    }

    /// Picks the id for a book about to be appended to `books`.
    pub fn next(&mut self, books: &[Book]) -> BookId {
        self.observe(books);
        match self.strategy {
            IdStrategy::CollectionSize => BookId(books.len() as u64 + 1),
            IdStrategy::Monotonic => {
                self.high_water += 1;
                BookId(self.high_water)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::seed_books;

    #[test]
    fn collection_size_reuses_ids_after_delete() {
        let mut books = seed_books();
        let mut ids = IdAllocator::for_books(IdStrategy::CollectionSize, &books);
        books.retain(|b| b.id != BookId(2));

        // #4 is still present, yet it is handed out again
        assert_eq!(ids.next(&books), BookId(4));
        assert!(books.iter().any(|b| b.id == BookId(4)));
    }

    #[test]
    fn monotonic_never_reuses_ids() {
        let mut books = seed_books();
        let mut ids = IdAllocator::for_books(IdStrategy::Monotonic, &books);
        books.retain(|b| b.id != BookId(4));

        assert_eq!(ids.next(&books), BookId(5));
        assert_eq!(ids.next(&books), BookId(6));
    }

    #[test]
    fn monotonic_starts_at_one_for_empty_collection() {
        let mut ids = IdAllocator::new(IdStrategy::Monotonic);
        assert_eq!(ids.next(&[]), BookId(1));
    }

    #[test]
    fn monotonic_skips_past_ids_it_has_not_issued() {
        let mut books = seed_books();
        books[0].id = BookId(40);
        let mut ids = IdAllocator::new(IdStrategy::Monotonic);
        assert_eq!(ids.next(&books), BookId(41));
    }
}
