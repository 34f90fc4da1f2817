use bookshelf::commands::sort::SortKey;
use bookshelf::model::{BookId, DraftField};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bookshelf", bin_name = "bookshelf", version)]
#[command(about = "A small in-memory book catalog for the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding config.json
    #[arg(
        long,
        global = true,
        env = "BOOKSHELF_HOME",
        value_name = "DIR",
        help_heading = "Options"
    )]
    pub config_dir: Option<PathBuf>,

    /// Start without the seed books
    #[arg(long, global = true, help_heading = "Options")]
    pub empty: bool,

    /// Print JSON instead of formatted text
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count, help_heading = "Options")]
    pub verbose: u8,
}

/// One line typed into the interactive shell.
#[derive(Parser, Debug)]
#[command(
    name = "bookshelf",
    no_binary_name = true,
    disable_version_flag = true,
    after_help = "Type `quit` or `exit` to leave the shell."
)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Add a book (nothing happens unless title, author, pages, price and isbn are all given)
    #[command(alias = "a", display_order = 1)]
    Add(AddArgs),

    /// List books, optionally filtered by title, author or ISBN
    #[command(alias = "ls", display_order = 2)]
    List {
        /// Search words (joined with spaces); omit to list everything
        #[arg(num_args = 0..)]
        query: Vec<String>,
    },

    /// List books whose author matches
    #[command(display_order = 3)]
    Author {
        /// Author name or part of it
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Find a book by its exact title
    #[command(display_order = 4)]
    Find {
        /// Title words (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// Delete books by id
    #[command(alias = "rm", display_order = 5)]
    Delete {
        /// Book ids (e.g. 3 #4)
        #[arg(required = true, num_args = 1.., value_parser = parse_book_id)]
        ids: Vec<BookId>,
    },

    /// Delete the book with the given ISBN
    #[command(display_order = 6)]
    DeleteIsbn { isbn: String },

    /// Reorder the catalog and list it
    #[command(display_order = 7)]
    Sort {
        #[arg(value_enum)]
        key: SortArg,
    },

    /// Show collection statistics
    #[command(alias = "st", display_order = 8)]
    Stats,

    /// Print the number of books
    #[command(display_order = 9)]
    Count,

    /// Set one field of the pending draft
    #[command(display_order = 10)]
    Set {
        /// title, author, pages, price, isbn or category
        #[arg(value_parser = parse_draft_field)]
        field: DraftField,

        /// New value (words joined with spaces; omit to clear the field)
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },

    /// Show the pending draft
    #[command(display_order = 11)]
    Draft,

    /// Add the pending draft to the catalog
    #[command(display_order = 12)]
    Commit,

    /// Clear the pending draft
    #[command(display_order = 13)]
    Discard,

    /// Get or set configuration
    #[command(display_order = 20)]
    Config {
        /// Configuration key (default-category, id-strategy, seed, unique-isbn)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Start an interactive session (the default)
    #[command(display_order = 21)]
    Shell,
}

#[derive(Args, Debug, Clone, Default)]
pub struct AddArgs {
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub author: Option<String>,

    /// Page count
    #[arg(long)]
    pub pages: Option<String>,

    /// Price, e.g. 12.50
    #[arg(long, allow_hyphen_values = true)]
    pub price: Option<String>,

    #[arg(long)]
    pub isbn: Option<String>,

    /// Defaults to the configured default category
    #[arg(long)]
    pub category: Option<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Title,
    Author,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Title => SortKey::Title,
            SortArg::Author => SortKey::Author,
        }
    }
}

fn parse_book_id(s: &str) -> Result<BookId, String> {
    s.parse()
}

fn parse_draft_field(s: &str) -> Result<DraftField, String> {
    s.parse()
}
