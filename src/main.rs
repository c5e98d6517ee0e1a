mod cli;
mod db;
mod error;
mod filter;
mod fmt;
mod models;
mod parser;
mod settings;
mod stats;
mod store;

use clap::Parser;

use cli::{CategoriesCommands, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { data_dir } => cli::init::run(data_dir),
        Commands::Add {
            amount,
            description,
            category,
            transaction_type,
            method,
            date,
            time,
        } => cli::add::run(
            amount,
            &description,
            &category,
            &transaction_type,
            &method,
            date.as_deref(),
            time.as_deref(),
        ),
        Commands::Parse {
            text,
            save,
            category,
            amount,
            description,
            transaction_type,
            method,
            date,
        } => cli::parse::run(
            &text,
            save,
            category.as_deref(),
            amount,
            description.as_deref(),
            &transaction_type,
            &method,
            date.as_deref(),
        ),
        Commands::List {
            search,
            category,
            from_date,
            to_date,
        } => cli::list::run(
            search.as_deref(),
            category.as_deref(),
            from_date.as_deref(),
            to_date.as_deref(),
        ),
        Commands::Stats {
            search,
            category,
            from_date,
            to_date,
        } => cli::stats::run(
            search.as_deref(),
            category.as_deref(),
            from_date.as_deref(),
            to_date.as_deref(),
        ),
        Commands::Edit {
            id,
            amount,
            description,
            category,
            transaction_type,
            method,
            date,
            time,
        } => cli::edit::run(
            id,
            amount,
            description.as_deref(),
            category.as_deref(),
            transaction_type.as_deref(),
            method.as_deref(),
            date.as_deref(),
            time.as_deref(),
        ),
        Commands::Delete { id } => cli::delete::run(id),
        Commands::Categories { command } => match command {
            CategoriesCommands::Add { name, icon } => cli::categories::add(&name, &icon),
            CategoriesCommands::List => cli::categories::list(),
            CategoriesCommands::Delete { id } => cli::categories::delete(id),
        },
        Commands::Currency { code } => cli::currency::run(code.as_deref()),
        Commands::Demo => cli::demo::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
