mod app;
mod config;
mod favorites;
mod input;
mod lyrics;
mod models;
mod storage;
mod tui;

use anyhow::Context;
use app::session::{FavoriteLoad, Session};
use clap::{Parser, Subcommand};
use storage::Storage;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "verso", version, about = "Song lyrics lookup with local favorites")]
struct Cli {
    /// Override config file path.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the interactive TUI (default).
    Tui,
    /// Look up lyrics and print them to stdout (headless).
    Search {
        artist: String,
        title: String,
        /// Also save the song to favorites.
        #[arg(long)]
        save: bool,
    },
    /// Print the title spellings a search would try.
    Variations { title: String },
    /// Manage saved songs.
    Favorites {
        #[command(subcommand)]
        cmd: FavoritesCommand,
    },
    /// Show or change settings.
    Config {
        #[command(subcommand)]
        cmd: ConfigCommand,
    },
}

#[derive(Debug, Subcommand)]
enum ConfigCommand {
    /// Print the config file location and current values.
    Show,
    /// Set the lyrics API base URL.
    SetApi { url: String },
    /// Set the per-request timeout in seconds.
    SetTimeout { secs: u64 },
}

#[derive(Debug, Subcommand)]
enum FavoritesCommand {
    /// List saved songs.
    List,
    /// Print a saved song's lyrics (fetched again if none were saved).
    Show { number: usize },
    /// Remove a saved song.
    Remove { number: usize },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref()).context("load config")?;
    let command = cli.command.unwrap_or(Command::Tui);

    init_tracing(&cfg, matches!(command, Command::Tui))?;

    match command {
        Command::Tui => {
            let mut app = app::App::new(cfg.clone())?;
            let mut terminal = tui::TerminalGuard::enter(cfg.input.mouse).context("init terminal")?;
            app.run(terminal.terminal_mut()).await?;
        }
        Command::Search { artist, title, save } => {
            let mut session = app::open_session(&cfg)?;
            let hit = session.submit(&artist, &title).await?;
            if hit.matched_title != hit.song.title {
                tracing::info!("matched as {:?} after {} attempts", hit.matched_title, hit.attempts);
            }
            print_song(&hit.song);
            if save && session.save_current_favorite() {
                println!("\nSaved to favorites.");
            }
        }
        Command::Variations { title } => {
            for (i, v) in lyrics::variations::title_variations(&title).iter().enumerate() {
                println!("{}. {}", i + 1, v);
            }
        }
        Command::Favorites { cmd } => {
            let mut session = app::open_session(&cfg)?;
            match cmd {
                FavoritesCommand::List => print_favorites(&session),
                FavoritesCommand::Show { number } => {
                    let index = favorite_index(&session, number)?;
                    match session.load_favorite(index)? {
                        FavoriteLoad::Cached(song) => print_song(&song),
                        FavoriteLoad::Search(request) => {
                            let hit = session.run_search(&request).await?;
                            print_song(&hit.song);
                        }
                        FavoriteLoad::Missing => anyhow::bail!("no favorite #{number}"),
                    }
                }
                FavoritesCommand::Remove { number } => {
                    let index = favorite_index(&session, number)?;
                    if let Some(song) = session.remove_favorite(index) {
                        println!("Removed {}", song.heading());
                    }
                }
            }
        }
        Command::Config { cmd } => {
            let mut cfg = cfg;
            match cmd {
                ConfigCommand::Show => {
                    let path = match cli.config.clone() {
                        Some(p) => p,
                        None => config::default_config_path().context("default config path")?,
                    };
                    println!("# {}", path.display());
                    print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
                }
                ConfigCommand::SetApi { url } => {
                    cfg.api.base_url = url;
                    config::save(&cfg, cli.config.as_deref()).context("save config")?;
                    println!("Updated lyrics API in config.");
                }
                ConfigCommand::SetTimeout { secs } => {
                    cfg.api.timeout_secs = secs;
                    config::save(&cfg, cli.config.as_deref()).context("save config")?;
                    println!("Updated request timeout in config.");
                }
            }
        }
    }

    Ok(())
}

/// Logs go to stderr, except in the TUI where they would corrupt the screen.
fn init_tracing(cfg: &config::Config, to_file: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if to_file {
        let path = cfg.paths.log_file();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create dir {}", parent.display()))?;
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("open {}", path.display()))?;
        builder
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(file))
            .init();
    } else {
        builder.with_writer(std::io::stderr).init();
    }
    Ok(())
}

/// 1-based list number to index, with a readable error.
fn favorite_index(session: &Session<Storage>, number: usize) -> anyhow::Result<usize> {
    let len = session.favorites().len();
    if number == 0 || number > len {
        anyhow::bail!("no favorite #{number} (have {len})");
    }
    Ok(number - 1)
}

fn print_song(song: &models::Song) {
    println!("{}", song.heading());
    println!();
    println!("{}", song.lyrics.as_deref().unwrap_or_default());
}

fn print_favorites(session: &Session<Storage>) {
    if session.favorites().is_empty() {
        println!("No favorites saved.");
        return;
    }
    for (i, song) in session.favorites().iter().enumerate() {
        println!("{:02}. {} - {}", i + 1, song.title, song.artist);
    }
}
