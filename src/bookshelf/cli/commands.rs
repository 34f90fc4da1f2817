//! # CLI Layer
//!
//! This module is **one possible UI client** for bookshelf. The catalog itself
//! lives in the library; everything here is about the terminal.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Flow
//!
//! 1. `run()` parses arguments and sets up logging
//! 2. `init_context()` loads the config and builds the `CatalogStore`
//! 3. With no subcommand (or `shell`) the interactive shell takes over;
//!    otherwise `dispatch()` runs the single command against a fresh catalog
//! 4. `handle_*()` call the API and hand the `CmdResult` to the renderers
//!
//! In `--json` mode results are printed as JSON on stdout and messages go to
//! stderr, so stdout stays parseable.

use super::logging::init_logging;
use super::render::{
    render_book_list, render_config, render_draft, render_json, render_messages,
    render_statistics, NO_BOOKS,
};
use super::setup::{AddArgs, Cli, Commands};
use super::shell;
use bookshelf::api::{CatalogStore, CmdMessage, CmdResult, ConfigAction, SortKey};
use bookshelf::config::ShelfConfig;
use bookshelf::error::{BookshelfError, Result};
use bookshelf::model::{Book, BookDraft, BookId, DraftField};
use clap::Parser;
use directories::ProjectDirs;
use std::io::IsTerminal;
use std::path::PathBuf;

pub struct AppContext {
    pub catalog: CatalogStore,
    pub config_dir: PathBuf,
    pub json: bool,
    pub use_color: bool,
}

impl AppContext {
    pub fn new(catalog: CatalogStore, config_dir: PathBuf, json: bool, use_color: bool) -> Self {
        Self {
            catalog,
            config_dir,
            json,
            use_color,
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        None | Some(Commands::Shell) => shell::run(&mut ctx),
        Some(command) => dispatch(&mut ctx, command),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = match &cli.config_dir {
        Some(dir) => dir.clone(),
        None => ProjectDirs::from("com", "bookshelf", "bookshelf")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| BookshelfError::Config("Could not determine config dir".into()))?,
    };

    let mut config = ShelfConfig::load(&config_dir)?;
    if cli.empty {
        config.seed = false;
    }
    tracing::debug!(
        config_dir = %config_dir.display(),
        seed = config.seed,
        id_strategy = %config.id_strategy,
        "initialising catalog"
    );

    let catalog = CatalogStore::from_config(&config);
    let use_color = !cli.json && std::io::stdout().is_terminal();
    Ok(AppContext::new(catalog, config_dir, cli.json, use_color))
}

/// Runs one parsed command against the context's catalog.
pub fn dispatch(ctx: &mut AppContext, command: Commands) -> Result<()> {
    tracing::trace!(?command, "dispatch");
    match command {
        Commands::Add(args) => handle_add(ctx, args),
        Commands::List { query } => handle_list(ctx, query.join(" ")),
        Commands::Author { name } => handle_author(ctx, name.join(" ")),
        Commands::Find { title } => handle_find(ctx, title.join(" ")),
        Commands::Delete { ids } => handle_delete(ctx, &ids),
        Commands::DeleteIsbn { isbn } => handle_delete_isbn(ctx, &isbn),
        Commands::Sort { key } => handle_sort(ctx, key.into()),
        Commands::Stats => handle_stats(ctx),
        Commands::Count => handle_count(ctx),
        Commands::Set { field, value } => handle_set(ctx, field, value.join(" ")),
        Commands::Draft => handle_draft(ctx),
        Commands::Commit => handle_commit(ctx),
        Commands::Discard => handle_discard(ctx),
        Commands::Config { key, value } => handle_config(ctx, key, value),
        Commands::Shell => {
            print_messages(ctx, &[CmdMessage::info("Already in the shell.")]);
            Ok(())
        }
    }
}

fn draft_from_args(args: AddArgs) -> BookDraft {
    let fields = [
        (DraftField::Title, args.title),
        (DraftField::Author, args.author),
        (DraftField::Pages, args.pages),
        (DraftField::Price, args.price),
        (DraftField::Isbn, args.isbn),
        (DraftField::Category, args.category),
    ];

    let mut draft = BookDraft::new();
    for (field, value) in fields {
        if let Some(value) = value {
            draft.set(field, value);
        }
    }
    draft
}

fn handle_add(ctx: &mut AppContext, args: AddArgs) -> Result<()> {
    let mut draft = draft_from_args(args);
    let result = ctx.catalog.insert(&mut draft)?;
    print_affected(ctx, &result)
}

fn handle_list(ctx: &mut AppContext, query: String) -> Result<()> {
    ctx.catalog.set_text_query(query);
    let result = ctx.catalog.browse()?;
    print_listed(ctx, &result)
}

fn handle_author(ctx: &mut AppContext, name: String) -> Result<()> {
    ctx.catalog.set_author_query(name);
    match ctx.catalog.author_view()? {
        Some(result) => print_listed(ctx, &result),
        None => {
            if ctx.json {
                print!("{}", render_json::<[Book]>(&[])?);
            } else {
                print_messages(ctx, &[CmdMessage::info("Type an author name to search.")]);
            }
            Ok(())
        }
    }
}

fn handle_find(ctx: &mut AppContext, title: String) -> Result<()> {
    let result = ctx.catalog.find_by_title(&title)?;
    if ctx.json {
        print!("{}", render_json(&result.listed_books)?);
    } else if !result.listed_books.is_empty() {
        print!(
            "{}",
            render_book_list(&result.listed_books, NO_BOOKS, ctx.use_color)
        );
    }
    print_messages(ctx, &result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, ids: &[BookId]) -> Result<()> {
    let result = ctx.catalog.delete_by_ids(ids)?;
    print_affected(ctx, &result)
}

fn handle_delete_isbn(ctx: &mut AppContext, isbn: &str) -> Result<()> {
    let result = ctx.catalog.delete_by_isbn(isbn)?;
    print_affected(ctx, &result)
}

fn handle_sort(ctx: &mut AppContext, key: SortKey) -> Result<()> {
    let result = ctx.catalog.sort_by(key)?;
    print_listed(ctx, &result)
}

fn handle_stats(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.catalog.aggregate()?;
    if let Some(stats) = &result.statistics {
        if ctx.json {
            print!("{}", render_json(stats)?);
        } else {
            print!("{}", render_statistics(stats, ctx.use_color));
        }
    }
    print_messages(ctx, &result.messages);
    Ok(())
}

fn handle_count(ctx: &mut AppContext) -> Result<()> {
    let count = ctx.catalog.count()?;
    if ctx.json {
        print!("{}", render_json(&serde_json::json!({ "count": count }))?);
    } else {
        println!("{}", count);
    }
    Ok(())
}

fn handle_set(ctx: &mut AppContext, field: DraftField, value: String) -> Result<()> {
    ctx.catalog.set_draft_field(field, value);
    handle_draft(ctx)
}

fn handle_draft(ctx: &mut AppContext) -> Result<()> {
    if ctx.json {
        print!("{}", render_json(ctx.catalog.draft())?);
    } else {
        print!("{}", render_draft(ctx.catalog.draft(), ctx.use_color));
    }
    Ok(())
}

fn handle_commit(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.catalog.commit_draft()?;
    print_affected(ctx, &result)
}

fn handle_discard(ctx: &mut AppContext) -> Result<()> {
    ctx.catalog.discard_draft();
    print_messages(ctx, &[CmdMessage::info("Draft discarded.")]);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let is_show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.catalog.config(&ctx.config_dir, action)?;
    if is_show_all {
        if let Some(config) = &result.config {
            if ctx.json {
                print!("{}", render_json(config)?);
            } else {
                print!("{}", render_config(config));
            }
        }
    }
    print_messages(ctx, &result.messages);
    Ok(())
}

fn print_listed(ctx: &AppContext, result: &CmdResult) -> Result<()> {
    if ctx.json {
        print!("{}", render_json(&result.listed_books)?);
    } else {
        print!(
            "{}",
            render_book_list(&result.listed_books, NO_BOOKS, ctx.use_color)
        );
    }
    print_messages(ctx, &result.messages);
    Ok(())
}

/// Mutating commands report through messages; JSON mode prints the books
/// they touched instead.
fn print_affected(ctx: &AppContext, result: &CmdResult) -> Result<()> {
    if ctx.json {
        print!("{}", render_json(&result.affected_books)?);
    }
    print_messages(ctx, &result.messages);
    Ok(())
}

fn print_messages(ctx: &AppContext, messages: &[CmdMessage]) {
    let text = render_messages(messages, ctx.use_color);
    if text.is_empty() {
        return;
    }
    if ctx.json {
        eprint!("{}", text);
    } else {
        print!("{}", text);
    }
}
