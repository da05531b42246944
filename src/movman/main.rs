use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use movman::api::{CatalogApi, CmdMessage, CmdResult, MessageLevel, MovieDraft, MovieUpdate};
use movman::config::CatalogConfig;
use movman::error::Result;
use movman::store::fs::FileStore;
use std::path::PathBuf;

mod args;
use args::{Cli, Commands, SortKey};

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: CatalogApi<FileStore>,
    data_dir: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            name,
            genre,
            year,
            age_rating,
            duration,
            watched,
            rating,
            kind,
            available_at,
        }) => handle_add(
            &mut ctx,
            MovieDraft {
                name,
                genre,
                year,
                age_rating,
                duration,
                watched,
                rating,
                kind,
                available_at,
            },
        ),
        Some(Commands::Remove { id }) => handle_remove(&mut ctx, id),
        Some(Commands::Update {
            id,
            name,
            genre,
            year,
            age_rating,
            duration,
            watched,
            rating,
            kind,
            available_at,
        }) => handle_update(
            &mut ctx,
            id,
            MovieUpdate {
                name,
                genre,
                year,
                age_rating,
                duration,
                watched,
                rating,
                kind,
                available_at,
            },
        ),
        Some(Commands::List {
            watched,
            unwatched,
            min_rating,
            search,
        }) => handle_list(&ctx, watched, unwatched, min_rating, search),
        Some(Commands::Sort { by }) => handle_sort(&ctx, by),
        Some(Commands::Search { term }) => handle_search(&ctx, term),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, false, false, None, None),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let proj_dirs =
        ProjectDirs::from("com", "movman", "movman").expect("Could not determine config dir");
    let data_dir = proj_dirs.data_dir().to_path_buf();

    let catalog_path = match &cli.file {
        Some(path) => path.clone(),
        None => {
            let config = CatalogConfig::load(&data_dir).unwrap_or_default();
            data_dir.join(config.get_data_file())
        }
    };

    let store = FileStore::new(catalog_path);
    let api = CatalogApi::new(store);

    Ok(AppContext { api, data_dir })
}

fn handle_add(ctx: &mut AppContext, draft: MovieDraft) -> Result<()> {
    let result = ctx.api.add_movie(draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, id: u64) -> Result<()> {
    let result = ctx.api.remove_movie(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(ctx: &mut AppContext, id: u64, update: MovieUpdate) -> Result<()> {
    let result = ctx.api.update_movie(id, &update)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(
    ctx: &AppContext,
    watched: bool,
    unwatched: bool,
    min_rating: Option<f64>,
    search: Option<String>,
) -> Result<()> {
    let result = if let Some(term) = search {
        ctx.api.search_movies(&term)?
    } else if let Some(threshold) = min_rating {
        ctx.api.movies_rated_at_least(threshold)?
    } else if watched || unwatched {
        ctx.api.watched_movies(watched)?
    } else {
        ctx.api.list_movies()?
    };
    print_listing(&result);
    Ok(())
}

fn handle_sort(ctx: &AppContext, by: SortKey) -> Result<()> {
    let result = match by {
        SortKey::Name => ctx.api.movies_by_name()?,
        SortKey::Year => ctx.api.movies_by_year()?,
    };
    print_listing(&result);
    Ok(())
}

fn handle_search(ctx: &AppContext, term: String) -> Result<()> {
    let result = ctx.api.search_movies(&term)?;
    print_listing(&result);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key.as_deref(), value) {
        (None, _) | (Some("data-file"), None) => {
            let config = CatalogConfig::load(&ctx.data_dir).unwrap_or_default();
            println!("data-file = {}", config.get_data_file());
        }
        (Some("data-file"), Some(v)) => {
            let mut config = CatalogConfig::load(&ctx.data_dir).unwrap_or_default();
            config.set_data_file(&v);
            config.save(&ctx.data_dir)?;
            println!("data-file = {}", config.get_data_file());
        }
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
        }
    }
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const SEPARATOR_WIDTH: usize = 50;

fn print_listing(result: &CmdResult) {
    print_messages(&result.messages);

    if result.listed_movies.is_empty() {
        // Commands with their own empty-result message already covered it
        if result.messages.is_empty() {
            println!("No movies found.");
        }
        return;
    }

    for movie in &result.listed_movies {
        println!("{}", movie.summary());
        println!("{}", "-".repeat(SEPARATOR_WIDTH).dimmed());
    }
}
