//! shaker — cocktail recipe browser
//!
//! Resolves a path the way the web front end would, fetches the recipes
//! for it and prints them.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use shaker::client::CocktailDbClient;
use shaker::config::Config;
use shaker::{CocktailApp, CocktailCode, CocktailStore, Recipe, Route};

/// Shaker CLI
#[derive(Parser)]
#[command(name = "shaker")]
#[command(version = shaker::PKG_VERSION)]
#[command(about = "Browse TheCocktailDB recipes by code")]
struct Args {
    /// Path to configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// API base URL (overrides the config file)
    #[arg(long, env = "SHAKER_BASE_URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Navigate to a path (e.g. "/mojito") and print its recipes
    Visit {
        /// Route path
        #[arg(default_value = "/")]
        path: String,
    },

    /// List known cocktail codes
    Codes,

    /// Fetch every code and print how many recipes each returned
    All,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let mut config = Config::load(args.config.as_deref())?;
    if let Some(base_url) = args.base_url {
        config.api.base_url = base_url;
    }

    // Default filter comes from config; RUST_LOG overrides it.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log.filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Codes => {
            for code in CocktailCode::ALL {
                println!("{code}");
            }
        }
        Command::Visit { path } => {
            let app = CocktailApp::new(build_store(&config)?);
            let view = app.visit(&path).await;
            match view.route {
                Route::NotFound => {
                    eprintln!("Not found: {path}");
                    std::process::exit(1);
                }
                Route::Cocktail(code) => {
                    if let Some(error) = view.error {
                        eprintln!("{error}");
                        std::process::exit(1);
                    }
                    if view.recipes.is_empty() {
                        println!("No cocktails found for {code}.");
                    }
                    for recipe in view.recipes.iter() {
                        print_recipe(recipe);
                    }
                }
            }
        }
        Command::All => {
            let store = build_store(&config)?;
            store.prefetch_all().await;
            for code in CocktailCode::ALL {
                let count = store.get_cocktails(code).len();
                let marker = if store.cached_codes().contains(&code) {
                    ""
                } else {
                    " (failed)"
                };
                println!("{:<10} {count:>3}{marker}", code.as_str());
            }
        }
    }

    Ok(())
}

fn build_store(config: &Config) -> shaker::Result<Arc<CocktailStore>> {
    let client = CocktailDbClient::from_config(&config.api.client_config())?;
    Ok(Arc::new(CocktailStore::with_client(client)))
}

fn print_recipe(recipe: &Recipe) {
    println!("{} [{}]", recipe.name, recipe.id);
    println!("  {} | {} | {}", recipe.category, recipe.alcoholic, recipe.glass);
    let tags = recipe.tag_list();
    if !tags.is_empty() {
        println!("  tags: {}", tags.join(", "));
    }
    for (_, slot) in recipe.populated_ingredients() {
        let ingredient = slot.ingredient.as_deref().unwrap_or_default();
        match slot.measure.as_deref() {
            Some(measure) => println!("  - {} {}", measure.trim(), ingredient),
            None => println!("  - {ingredient}"),
        }
    }
    println!("  {}", recipe.instructions);
    println!();
}
