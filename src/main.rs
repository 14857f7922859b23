use clap::{Parser, Subcommand};
use pokezone::interface::*;
use pokezone::translations::t;
use pokezone::{
    AppConfig, Debouncer, FavoriteEntry, FavoritesStore, FileStorage, Formatter, Language,
    PokeApiClient, Preferences, SearchOutcome, Theme, Tournament, TournamentSize,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use tokio::io::AsyncBufReadExt;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Pokemon reference toolkit over PokeAPI", long_about = None)]
struct Cli {
    /// Override the API base URL from the config file.
    #[arg(long)]
    base_url: Option<String>,
    /// Directory for favorites and preferences.
    #[arg(long)]
    data_dir: Option<PathBuf>,
    /// Display language for this run (en, ko, ja). Defaults to the saved one.
    #[arg(long)]
    lang: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the detail card of a Pokemon by name or dex number.
    Show { pokemon: String },
    /// Show the evolution chain of a Pokemon.
    Evolution { pokemon: String },
    /// Show the moves a Pokemon can learn.
    Moves { pokemon: String },
    /// Compare two Pokemon side by side.
    Compare { first: String, second: String },
    /// List the catalog, optionally restricted to a generation (1-9).
    List {
        #[arg(long, default_value_t = 0)]
        generation: u8,
        #[arg(long, default_value_t = 20)]
        limit: u32,
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },
    /// Look up each line typed on stdin; only the last pending query is answered.
    Search,
    /// Manage favorites.
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
    /// Show or change saved settings.
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
    /// Play an interactive world cup bracket of the given size.
    Tournament {
        #[arg(default_value_t = 16)]
        size: u32,
    },
}

#[derive(Subcommand, Debug)]
enum FavoritesAction {
    List,
    Add { pokemon: String },
    Remove { id: u32 },
    Clear,
}

#[derive(Subcommand, Debug)]
enum SettingsAction {
    Show,
    Language { code: String },
    Theme { theme: Option<String> },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load().with_overrides(cli.base_url, cli.data_dir);
    info!(base_url = %config.base_url, "starting");

    let data_dir = config.data_dir();
    let mut preferences = Preferences::load(FileStorage::new(&data_dir));
    let language = match cli.lang.as_deref() {
        Some(code) => Language::from_str(code).unwrap_or(preferences.language()),
        None => preferences.language(),
    };

    let client = Arc::new(PokeApiClient::http(&config.base_url, &config.user_agent));
    let formatter = Formatter::new(Arc::clone(&client));

    match cli.command {
        Command::Show { pokemon } => {
            println!(
                "{}",
                handle_lookup_pokemon_command(&formatter, &pokemon, language).await
            );
        }
        Command::Evolution { pokemon } => {
            println!("{}", handle_evolution_command(&formatter, &pokemon, language).await);
        }
        Command::Moves { pokemon } => {
            println!("{}", handle_moves_command(&formatter, &pokemon, language).await);
        }
        Command::Compare { first, second } => {
            println!(
                "{}",
                handle_compare_command(&formatter, &first, &second, language).await
            );
        }
        Command::List {
            generation,
            limit,
            offset,
        } => {
            println!(
                "{}",
                handle_list_command(&formatter, generation, limit, offset, language).await
            );
        }
        Command::Search => run_search(Arc::clone(&client), &config, language).await?,
        Command::Favorites { action } => {
            let mut favorites = FavoritesStore::load(FileStorage::new(&data_dir));
            match action {
                FavoritesAction::List => {
                    print!("{}", display_favorites(&favorites.list(), language))
                }
                FavoritesAction::Add { pokemon } => match client.get_pokemon(&pokemon).await {
                    Ok(found) => {
                        if favorites.add(FavoriteEntry::from_pokemon(&found))? {
                            println!("Added {} to favorites.", found.name);
                        } else {
                            println!("{} is already a favorite.", found.name);
                        }
                    }
                    Err(e) => println!("{}", e),
                },
                FavoritesAction::Remove { id } => {
                    if favorites.remove(id)? {
                        println!("Removed #{} from favorites.", id);
                    } else {
                        println!("#{} is not a favorite.", id);
                    }
                }
                FavoritesAction::Clear => {
                    favorites.clear()?;
                    println!("Favorites cleared.");
                }
            }
        }
        Command::Settings { action } => match action {
            SettingsAction::Show => {
                println!("language: {}", preferences.language());
                println!("theme: {}", preferences.theme());
            }
            SettingsAction::Language { code } => match Language::from_str(&code) {
                Ok(new_language) => {
                    preferences.set_language(new_language)?;
                    println!("language: {}", new_language);
                }
                Err(_) => println!("Unknown language '{}'. Use en, ko or ja.", code),
            },
            SettingsAction::Theme { theme } => {
                let theme = match theme.as_deref().map(Theme::from_str) {
                    Some(Ok(theme)) => {
                        preferences.set_theme(theme)?;
                        theme
                    }
                    Some(Err(_)) => {
                        println!("Unknown theme. Use light or dark.");
                        return Ok(());
                    }
                    None => preferences.toggle_theme()?,
                };
                println!("theme: {}", theme);
            }
        },
        Command::Tournament { size } => run_tournament(&formatter, size, language).await?,
    }

    Ok(())
}

/// Reads queries line by line; each line supersedes any still-pending one.
async fn run_search(
    client: Arc<PokeApiClient>,
    config: &AppConfig,
    language: Language,
) -> io::Result<()> {
    let debouncer = Arc::new(Debouncer::new(config.search_debounce()));
    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let debouncer = Arc::clone(&debouncer);
        let client = Arc::clone(&client);
        tokio::spawn(async move {
            match debouncer.search(client.as_ref(), &line).await {
                SearchOutcome::Found(pokemon) => {
                    println!(
                        "#{:03} {} [{}]",
                        pokemon.id,
                        pokemon.name,
                        pokemon.type_names().join(", ")
                    );
                }
                SearchOutcome::NotFound => {
                    println!("{} '{}'.", t("no_pokemon_found", language), line.trim());
                }
                SearchOutcome::Superseded => {}
            }
        });
    }
    // Let the last query finish.
    tokio::time::sleep(debouncer.delay() * 2).await;
    Ok(())
}

async fn run_tournament(
    formatter: &Formatter,
    size: u32,
    language: Language,
) -> Result<(), Box<dyn std::error::Error>> {
    let size = TournamentSize::try_from(size)?;
    println!("Loading {} entrants...", size.participants());

    let mut tournament = Tournament::new();
    tournament.initialize(size, formatter.client()).await?;
    println!("{}", display_tournament_status(&tournament, language));

    let stdin = io::stdin();
    let mut input = String::new();
    while tournament.champion().is_none() {
        print!("Pick 1 or 2 (q to quit) > ");
        io::stdout().flush()?;

        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }
        match input.trim() {
            "q" | "quit" => break,
            choice => match choice.parse::<usize>() {
                Ok(side) => match execute_pick_side(&mut tournament, side, language) {
                    Ok(text) => println!("{}", text),
                    Err(e) => println!("{}", e),
                },
                Err(_) => println!("Please enter 1 or 2."),
            },
        }
    }
    Ok(())
}
