//! Collection statistics.
//!
//! Everything here is derived from a snapshot of the collection on demand.
//! Counts and totals are always defined. `average_pages` is `0` for an empty
//! collection, while the extremes and `average_price` have no meaningful value
//! there and are `None`.

use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Book;
use crate::store::DataStore;
use serde::Serialize;

/// How many books share a category, and their share of the whole collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub name: String,
    pub count: usize,
    pub percentage: f64,
}

impl CategoryShare {
    /// Percentage with one fraction digit, e.g. `"25.0"`.
    pub fn percentage_label(&self) -> String {
        format!("{:.1}", self.percentage)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub total_count: usize,
    pub total_value: f64,
    /// Distinct categories in order of first appearance
    pub categories: Vec<CategoryShare>,
    pub average_pages: u64,
    pub most_expensive: Option<f64>,
    pub least_expensive: Option<f64>,
    pub longest: Option<u32>,
    pub shortest: Option<u32>,
    pub average_price: Option<f64>,
}

impl Statistics {
    pub fn compute(books: &[Book]) -> Self {
        let total_count = books.len();
        let total_value = books.iter().fold(0.0, |acc, b| acc + b.price);
        let total_pages: u64 = books.iter().map(|b| u64::from(b.pages)).sum();

        let mut categories: Vec<CategoryShare> = Vec::new();
        for book in books {
            match categories.iter_mut().find(|c| c.name == book.category) {
                Some(share) => share.count += 1,
                None => categories.push(CategoryShare {
                    name: book.category.clone(),
                    count: 1,
                    percentage: 0.0,
                }),
            }
        }
        for share in &mut categories {
            share.percentage = share.count as f64 / total_count as f64 * 100.0;
        }

        let average_pages = if total_count > 0 {
            (total_pages as f64 / total_count as f64).round() as u64
        } else {
            0
        };

        let prices = || books.iter().map(|b| b.price);
        Self {
            total_count,
            total_value,
            categories,
            average_pages,
            most_expensive: prices().reduce(f64::max),
            least_expensive: prices().reduce(f64::min),
            longest: books.iter().map(|b| b.pages).max(),
            shortest: books.iter().map(|b| b.pages).min(),
            average_price: (total_count > 0).then(|| total_value / total_count as f64),
        }
    }

    pub fn category(&self, name: &str) -> Option<&CategoryShare> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Number of books in `name`; zero for unknown categories.
    pub fn category_count(&self, name: &str) -> usize {
        self.category(name).map_or(0, |c| c.count)
    }
}

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let books = store.list_books()?;
    Ok(CmdResult::default().with_statistics(Statistics::compute(&books)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BookId;
    use crate::store::memory::InMemoryStore;

    fn seed_stats() -> Statistics {
        let store = InMemoryStore::seeded();
        run(&store).unwrap().statistics.unwrap()
    }

    #[test]
    fn totals_over_seed() {
        let stats = seed_stats();
        assert_eq!(stats.total_count, 4);
        assert!((stats.total_value - 63.45).abs() < 1e-9);
        assert_eq!(format!("{:.2}", stats.total_value), "63.45");
        assert_eq!(stats.average_pages, 524);
    }

    #[test]
    fn categories_in_first_appearance_order() {
        let stats = seed_stats();
        let names: Vec<_> = stats.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Fantasy", "Romance", "Dystopian"]);
    }

    #[test]
    fn category_breakdown() {
        let stats = seed_stats();
        assert_eq!(stats.category_count("Fantasy"), 2);
        assert_eq!(stats.category("Fantasy").unwrap().percentage_label(), "50.0");
        assert_eq!(stats.category_count("Romance"), 1);
        assert_eq!(stats.category("Romance").unwrap().percentage_label(), "25.0");
        assert_eq!(stats.category_count("Dystopian"), 1);
        assert_eq!(
            stats.category("Dystopian").unwrap().percentage_label(),
            "25.0"
        );
        assert_eq!(stats.category_count("Horror"), 0);
    }

    #[test]
    fn extremes_over_seed() {
        let stats = seed_stats();
        assert_eq!(stats.most_expensive, Some(25.50));
        assert_eq!(stats.least_expensive, Some(10.20));
        assert_eq!(stats.longest, Some(1178));
        assert_eq!(stats.shortest, Some(279));
        assert_eq!(
            stats.average_price.map(|p| format!("{:.2}", p)).as_deref(),
            Some("15.86")
        );
    }

    #[test]
    fn empty_collection_guards_only_average_pages() {
        let mut store = InMemoryStore::seeded();
        for id in 1..=4 {
            store.delete_book(BookId(id)).unwrap();
        }
        let stats = run(&store).unwrap().statistics.unwrap();

        assert_eq!(stats.total_count, 0);
        assert_eq!(stats.total_value, 0.0);
        assert!(stats.categories.is_empty());
        assert_eq!(stats.average_pages, 0);
        assert_eq!(stats.most_expensive, None);
        assert_eq!(stats.least_expensive, None);
        assert_eq!(stats.longest, None);
        assert_eq!(stats.shortest, None);
        assert_eq!(stats.average_price, None);
    }

    #[test]
    fn average_pages_rounds_half_up() {
        let mut books = crate::model::seed_books();
        books.truncate(2);
        books[0].pages = 1;
        books[1].pages = 2;
        assert_eq!(Statistics::compute(&books).average_pages, 2);
    }

    #[test]
    fn odd_shares_format_to_one_digit() {
        let mut books = crate::model::seed_books();
        books.truncate(3);
        let stats = Statistics::compute(&books);
        assert_eq!(stats.category("Fantasy").unwrap().percentage_label(), "66.7");
        assert_eq!(stats.category("Romance").unwrap().percentage_label(), "33.3");
    }
}
