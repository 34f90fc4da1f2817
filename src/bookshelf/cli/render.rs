//! # Rendering
//!
//! Turns command results into terminal text. Every function returns a
//! `String` so output can be tested without a terminal; `use_color` decides
//! whether ANSI styling is applied.
//!
//! Layout (width, truncation, padding) is computed on plain text first and
//! styled afterwards, because escape codes would throw the widths off.

use bookshelf::api::{CmdMessage, MessageLevel, Statistics};
use bookshelf::config::ShelfConfig;
use bookshelf::error::Result;
use bookshelf::model::{Book, BookDraft, DraftField};
use colored::{ColoredString, Colorize};
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ID_WIDTH: usize = 5;
const TITLE_WIDTH: usize = 30;
const AUTHOR_WIDTH: usize = 20;
const PAGES_WIDTH: usize = 5;
const PRICE_WIDTH: usize = 8;
const ISBN_WIDTH: usize = 15;
const LABEL_WIDTH: usize = 18;
const NOT_AVAILABLE: &str = "n/a";

pub const NO_BOOKS: &str = "No books found.";

fn paint(text: &str, use_color: bool, style: impl Fn(&str) -> ColoredString) -> String {
    if use_color {
        style(text).to_string()
    } else {
        text.to_string()
    }
}

/// One book per line: id, title, author, pages, price, ISBN, category.
pub fn render_book_list(books: &[Book], empty_message: &str, use_color: bool) -> String {
    if books.is_empty() {
        return format!("{}\n", empty_message);
    }

    let mut output = String::new();
    for book in books {
        let id = pad_to_width(&book.id.to_string(), ID_WIDTH);
        let title = pad_to_width(&truncate_to_width(&book.title, TITLE_WIDTH), TITLE_WIDTH);
        let author = pad_to_width(&truncate_to_width(&book.author, AUTHOR_WIDTH), AUTHOR_WIDTH);
        let pages = format!("{:>width$} pp", book.pages, width = PAGES_WIDTH);
        let price = format!("{:>width$}", book.price_label(), width = PRICE_WIDTH);
        let isbn = pad_to_width(&book.isbn, ISBN_WIDTH);

        output.push_str(&format!(
            "  {} {} {} {} {}  {} {}\n",
            paint(&id, use_color, |s| s.yellow()),
            paint(&title, use_color, |s| s.bold()),
            author,
            pages,
            paint(&price, use_color, |s| s.green()),
            isbn,
            paint(&book.category, use_color, |s| s.dimmed()),
        ));
    }
    output
}

pub fn render_statistics(stats: &Statistics, use_color: bool) -> String {
    let heading = |text: &str| paint(text, use_color, |s| s.bold().underline());
    let row = |label: &str, value: String| {
        format!("  {:<width$}{}\n", label, value, width = LABEL_WIDTH)
    };
    let money = |value: Option<f64>| {
        value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| format!("${:.2}", v))
    };
    let pages = |value: Option<u32>| {
        value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| format!("{} pages", v))
    };

    let mut output = String::new();
    output.push_str(&format!("{}\n", heading("Overview")));
    output.push_str(&row("Total books:", stats.total_count.to_string()));
    output.push_str(&row("Total value:", format!("${:.2}", stats.total_value)));
    output.push_str(&row("Categories:", stats.categories.len().to_string()));
    output.push_str(&row("Avg. pages:", stats.average_pages.to_string()));

    output.push('\n');
    output.push_str(&format!("{}\n", heading("Category distribution")));
    if stats.categories.is_empty() {
        output.push_str(&format!("  {}\n", NO_BOOKS));
    }
    for share in &stats.categories {
        let noun = if share.count == 1 { "book" } else { "books" };
        let label = format!("{} ({} {})", share.name, share.count, noun);
        output.push_str(&row(
            &truncate_to_width(&label, LABEL_WIDTH + 12),
            format!("{:>6}%", share.percentage_label()),
        ));
    }

    output.push('\n');
    output.push_str(&format!("{}\n", heading("Library statistics")));
    output.push_str(&row("Most expensive:", money(stats.most_expensive)));
    output.push_str(&row("Least expensive:", money(stats.least_expensive)));
    output.push_str(&row("Longest:", pages(stats.longest)));
    output.push_str(&row("Shortest:", pages(stats.shortest)));
    output.push_str(&row("Average price:", money(stats.average_price)));
    output
}

pub fn render_draft(draft: &BookDraft, use_color: bool) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", paint("Draft", use_color, |s| s.bold())));
    for field in DraftField::all() {
        let value = draft.get(*field);
        let shown = if value.is_empty() {
            paint("(empty)", use_color, |s| s.dimmed())
        } else {
            value.to_string()
        };
        output.push_str(&format!("  {:<10}{}\n", format!("{}:", field), shown));
    }

    let missing = draft.missing_fields();
    if missing.is_empty() {
        output.push_str("Ready to commit.\n");
    } else {
        let names: Vec<_> = missing.iter().map(|f| f.name()).collect();
        output.push_str(&paint(
            &format!("Missing: {}", names.join(", ")),
            use_color,
            |s| s.yellow(),
        ));
        output.push('\n');
    }
    output
}

pub fn render_config(config: &ShelfConfig) -> String {
    ShelfConfig::KEYS
        .iter()
        .filter_map(|key| config.get(key).map(|value| format!("{} = {}\n", key, value)))
        .collect()
}

pub fn render_messages(messages: &[CmdMessage], use_color: bool) -> String {
    messages
        .iter()
        .map(|message| {
            let text = message.content.as_str();
            let styled = match message.level {
                MessageLevel::Info => paint(text, use_color, |s| s.dimmed()),
                MessageLevel::Success => paint(text, use_color, |s| s.green()),
                MessageLevel::Warning => paint(text, use_color, |s| s.yellow()),
                MessageLevel::Error => paint(text, use_color, |s| s.red()),
            };
            format!("{}\n", styled)
        })
        .collect()
}

pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(format!("{}\n", serde_json::to_string_pretty(value)?))
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf::model::seed_books;

    #[test]
    fn test_render_empty_list() {
        assert_eq!(render_book_list(&[], NO_BOOKS, false), "No books found.\n");
    }

    #[test]
    fn test_render_list_columns() {
        let books = seed_books();
        let output = render_book_list(&books, NO_BOOKS, false);
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("  #1    The Lord of the Rings"));
        assert!(lines[0].contains("J.R.R. Tolkien"));
        assert!(lines[0].contains(" 1178 pp"));
        assert!(lines[0].contains("  $25.50"));
        assert!(lines[0].contains("978-0618053267"));
        assert!(lines[0].ends_with("Fantasy"));
        assert!(lines[3].contains("  $10.20"));
    }

    #[test]
    fn test_render_list_aligns_columns() {
        let output = render_book_list(&seed_books(), NO_BOOKS, false);
        let positions: Vec<_> = output.lines().map(|l| l.find('$').unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] <= w[1] + 2 && w[1] <= w[0] + 2));
        let isbn_cols: Vec<_> = output.lines().map(|l| l.find("978-").unwrap()).collect();
        assert!(isbn_cols.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_render_list_truncates_long_titles() {
        let mut books = seed_books();
        books.truncate(1);
        books[0].title = "A".repeat(50);
        let output = render_book_list(&books, NO_BOOKS, false);
        assert!(output.contains(&format!("{}…", "A".repeat(TITLE_WIDTH - 1))));
        assert!(!output.contains(&"A".repeat(TITLE_WIDTH)));
    }

    #[test]
    fn test_render_with_color_includes_ansi() {
        colored::control::set_override(true);
        let output = render_book_list(&seed_books(), NO_BOOKS, true);
        colored::control::unset_override();
        assert!(output.contains("\x1b["));
    }

    #[test]
    fn test_render_statistics_seed() {
        let stats = Statistics::compute(&seed_books());
        let output = render_statistics(&stats, false);

        assert!(output.contains("Total books:      4"));
        assert!(output.contains("Total value:      $63.45"));
        assert!(output.contains("Categories:       3"));
        assert!(output.contains("Avg. pages:       524"));
        assert!(output.contains("Fantasy (2 books)"));
        assert!(output.contains("50.0%"));
        assert!(output.contains("Romance (1 book)"));
        assert!(output.contains("25.0%"));
        assert!(output.contains("Most expensive:   $25.50"));
        assert!(output.contains("Least expensive:  $10.20"));
        assert!(output.contains("Longest:          1178 pages"));
        assert!(output.contains("Shortest:         279 pages"));
        assert!(output.contains("Average price:    $15.86"));
    }

    #[test]
    fn test_render_statistics_empty() {
        let stats = Statistics::compute(&[]);
        let output = render_statistics(&stats, false);

        assert!(output.contains("Total value:      $0.00"));
        assert!(output.contains("Avg. pages:       0"));
        assert!(output.contains("Most expensive:   n/a"));
        assert!(output.contains("Average price:    n/a"));
    }

    #[test]
    fn test_render_draft_lists_missing() {
        let draft = BookDraft::new().with(DraftField::Title, "Dune");
        let output = render_draft(&draft, false);
        assert!(output.contains("title:    Dune"));
        assert!(output.contains("author:   (empty)"));
        assert!(output.contains("Missing: author, pages, price, isbn"));
    }

    #[test]
    fn test_render_draft_ready() {
        let draft = BookDraft::new()
            .with(DraftField::Title, "Dune")
            .with(DraftField::Author, "Frank Herbert")
            .with(DraftField::Pages, "412")
            .with(DraftField::Price, "9.99")
            .with(DraftField::Isbn, "978-0441013593");
        assert!(render_draft(&draft, false).contains("Ready to commit."));
    }

    #[test]
    fn test_render_config() {
        let output = render_config(&ShelfConfig::default());
        assert_eq!(
            output,
            "default-category = General\nid-strategy = monotonic\nseed = true\nunique-isbn = false\n"
        );
    }

    #[test]
    fn test_render_messages() {
        let messages = vec![
            CmdMessage::success("Book added (#5): Dune"),
            CmdMessage::warning("No book with id #9"),
        ];
        assert_eq!(
            render_messages(&messages, false),
            "Book added (#5): Dune\nNo book with id #9\n"
        );
        assert_eq!(render_messages(&[], false), "");
    }

    #[test]
    fn test_render_json_books() {
        let output = render_json(&seed_books()[..1]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["id"], 1);
        assert_eq!(parsed[0]["title"], "The Lord of the Rings");
        assert_eq!(parsed[0]["price"], 25.5);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("exactly10!", 10), "exactly10!");
        assert_eq!(truncate_to_width("this is too long", 8), "this is…");
    }
}
