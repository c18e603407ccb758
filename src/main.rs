// src/main.rs
//
// dish-catalog command line front end
//
// Usage:
//   dish-catalog list
//   dish-catalog search <pattern>
//   dish-catalog find <text>
//   dish-catalog import <file>
//   dish-catalog export <file>
//   dish-catalog add-user <username> <password>
//   dish-catalog login <username> <password>
//   dish-catalog stats
//
// Store location: DISH_CATALOG_DB (path or ":memory:")
// Log level:      DISH_CATALOG_LOG (error, warn, info, debug, trace)

use std::path::Path;

use anyhow::{anyhow, bail, Context};
use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TerminalMode, TermLogger};

use dish_catalog::application::commands::*;
use dish_catalog::application::dto::DishDto;
use dish_catalog::application::{AppState, DishView};
use dish_catalog::db::{get_database_stats, verify_database_integrity, StoreConfig};

const LOG_LEVEL_ENV: &str = "DISH_CATALOG_LOG";

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some((command, rest)) = args.split_first() else {
        bail!("missing command; expected one of: list, search, find, import, export, add-user, login, stats");
    };

    let config = StoreConfig::from_env().context("reading store configuration")?;
    let state = AppState::initialize(config);

    let result = run(&state, command, rest);
    state.shutdown();
    result
}

fn run(state: &AppState, command: &str, args: &[String]) -> anyhow::Result<()> {
    match (command, args) {
        ("list", []) => {
            print_dishes(&list_dishes(state).map_err(|e| anyhow!(e))?);
        }
        ("search", [pattern]) => {
            let mut view = load_dish_view(state).map_err(|e| anyhow!(e))?;
            let visible = filter_dishes(&mut view, pattern).map_err(|e| anyhow!(e))?;
            print_matches(&view, &visible);
        }
        ("find", [text]) => {
            let mut view = load_dish_view(state).map_err(|e| anyhow!(e))?;
            let visible = find_dishes(&mut view, text).map_err(|e| anyhow!(e))?;
            print_matches(&view, &visible);
        }
        ("import", [file]) => {
            let result = import_dishes_from_file(state, Path::new(file)).map_err(|e| anyhow!(e))?;
            println!("Import complete.");
            println!("Successfully imported: {} dishes.", result.imported);
            println!("Failed lines: {}", result.failed);
        }
        ("export", [file]) => {
            let result = export_dishes_to_file(state, Path::new(file)).map_err(|e| anyhow!(e))?;
            match result.destination {
                Some(destination) => {
                    println!("Exported {} dishes to {}", result.exported, destination)
                }
                None => println!("No dishes to export."),
            }
        }
        ("add-user", [username, password]) => {
            let id = register_user(state, username, password).map_err(|e| anyhow!(e))?;
            println!("Created user '{}' with id {}", username, id);
        }
        ("login", [username, password]) => {
            if !check_credentials(state, username, password) {
                bail!("invalid username or password");
            }
            println!("Welcome, {}!", username);
        }
        ("stats", []) => {
            let conn = state.connections.acquire()?;
            verify_database_integrity(&conn)?;
            let stats = get_database_stats(&conn)?;
            println!("Dishes: {}", stats.dish_count);
            println!("Users:  {}", stats.user_count);
            println!("Size:   {} bytes", stats.size_bytes);
        }
        (other, _) => bail!("unknown command or wrong arguments: {}", other),
    }
    Ok(())
}

fn print_dishes(dishes: &[DishDto]) {
    for dish in dishes {
        println!(
            "{:>4}  {:<28} {:<14} {:>8.2}",
            dish.id, dish.name, dish.dish_type, dish.price
        );
    }
}

fn print_matches(view: &DishView, visible: &[DishDto]) {
    print_dishes(visible);
    if view.is_filtered() {
        println!("{} of {} dishes match '{}'", visible.len(), view.all().len(), view.query());
    }
}

fn init_logging() -> anyhow::Result<()> {
    let level = match std::env::var(LOG_LEVEL_ENV) {
        Ok(raw) => raw
            .parse::<LevelFilter>()
            .with_context(|| format!("invalid {} '{}'", LOG_LEVEL_ENV, raw))?,
        Err(_) => LevelFilter::Info,
    };

    let config = ConfigBuilder::new().set_target_level(LevelFilter::Off).build();
    TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto)
        .context("installing logger")?;
    Ok(())
}
