//! Arogya client binary - composition root.
//!
//! Ties the client crates together into a single executable:
//! 1. Load configuration from TOML
//! 2. Initialize tracing
//! 3. Build the API client (cookie-based session)
//! 4. Dispatch the subcommand: auth, chat REPL, map view, or the operator
//!    broadcast console

mod cli;
mod map_view;

use std::io::Write as _;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use arogya_broadcast::BroadcastConsole;
use arogya_chat::{ChatOrchestrator, ConversationSession, FileStore, TurnOutcome};
use arogya_client::ApiClient;
use arogya_core::config::{ArogyaConfig, LocationConfig};
use arogya_core::types::{Coordinate, HistoryEntry, Message, Specialty};
use arogya_directory::FacilityDirectory;
use arogya_geo::{FixedPosition, Locator, NoPosition, PositionSource};

use cli::{CliArgs, Command};

/// Expand ~ to home directory in a path string.
fn expand_home(path: &str) -> PathBuf {
    if path.starts_with("~/") || path.starts_with("~\\") {
        #[cfg(target_os = "windows")]
        let home = std::env::var("USERPROFILE").unwrap_or_else(|_| ".".to_string());
        #[cfg(not(target_os = "windows"))]
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(&path[2..])
    } else {
        PathBuf::from(path)
    }
}

/// The position capability for this run: the operator-pinned coordinate
/// when configured, otherwise the absent capability (silent fallback).
fn position_source(location: &LocationConfig) -> Box<dyn PositionSource> {
    match (location.fixed_lat, location.fixed_lon) {
        (Some(lat), Some(lon)) => Box::new(FixedPosition(Coordinate::new(lat, lon))),
        _ => Box::new(NoPosition),
    }
}

/// Prompt on stdout, read one line from stdin. `None` on EOF.
fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    let _ = std::io::stdout().flush();
    let mut buf = String::new();
    match std::io::stdin().read_line(&mut buf) {
        Ok(0) => None,
        Ok(_) => Some(buf.trim_end().to_string()),
        Err(_) => None,
    }
}

fn print_message(message: &Message) {
    if message.is_user {
        println!("you>    {}", message.text);
    } else {
        println!("arogya> {}", message.text);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    let config_path = args.resolve_config_path();
    let config = ArogyaConfig::load_or_default(&config_path);

    let log_level = args
        .resolve_log_level()
        .unwrap_or_else(|| config.general.log_level.clone());
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    tracing::info!("Starting Arogya v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(path = %config_path.display(), "Configuration resolved");

    match args.command {
        Command::Login { email } => {
            let client = ApiClient::new(&config.general.api_base_url)?;
            let Some(password) = read_line("password> ") else {
                return Ok(());
            };
            match client.login(&email, &password).await {
                Ok(()) => println!("Logged in."),
                Err(e) => println!("Login failed: {}", e),
            }
        }
        Command::Register { email } => {
            let client = ApiClient::new(&config.general.api_base_url)?;
            let Some(password) = read_line("password> ") else {
                return Ok(());
            };
            match client.register(&email, &password).await {
                Ok(()) => println!("Registered successfully! Please login."),
                Err(e) => println!("Registration failed: {}", e),
            }
        }
        Command::Logout => {
            let client = ApiClient::new(&config.general.api_base_url)?;
            match client.logout().await {
                Ok(()) => println!("Logged out."),
                Err(e) => println!("Logout failed: {}", e),
            }
        }
        Command::Chat => run_chat(&config).await?,
        Command::Map { specialty } => {
            let tag = match specialty.as_deref() {
                Some(s) => s.parse::<Specialty>().unwrap_or_else(|e| {
                    tracing::warn!(error = %e, "Unknown specialty tag; showing all");
                    Specialty::All
                }),
                None => Specialty::All,
            };
            run_map(&config, tag).await?;
        }
        Command::Admin => run_admin(&config).await?,
    }

    Ok(())
}

/// The chat REPL: each line is one turn; slash commands manage the session.
async fn run_chat(config: &ArogyaConfig) -> Result<(), Box<dyn std::error::Error>> {
    let client = ApiClient::new(&config.general.api_base_url)?;
    let history_client = client.clone();

    let session_dir = expand_home(&config.general.session_dir);
    let session = ConversationSession::new(
        Box::new(FileStore::new(&session_dir)),
        &config.chat.welcome_message,
    );
    let locator = Locator::new(
        position_source(&config.location),
        Duration::from_secs(config.location.timeout_secs),
        Coordinate::new(config.location.default_lat, config.location.default_lon),
    );
    let mut orchestrator = ChatOrchestrator::new(
        session,
        locator,
        Box::new(client),
        Duration::from_millis(config.chat.redirect_delay_ms),
    );

    for message in orchestrator.messages() {
        print_message(message);
    }
    println!("(commands: /history, /recall <n>, /clear, /quit)");

    let mut history_cache: Vec<HistoryEntry> = Vec::new();

    loop {
        let Some(line) = read_line("you> ") else { break };
        let line = line.trim().to_string();
        if line.is_empty() {
            continue;
        }

        match line.as_str() {
            "/quit" | "/exit" => break,
            "/clear" => {
                orchestrator.clear();
                for message in orchestrator.messages() {
                    print_message(message);
                }
            }
            "/history" => match history_client.history().await {
                Ok(entries) => {
                    if entries.is_empty() {
                        println!("No history yet");
                    }
                    for (i, entry) in entries.iter().enumerate() {
                        println!("{:>2}. [{}] {}", i + 1, entry.timestamp, entry.message);
                    }
                    history_cache = entries;
                }
                Err(e) => println!("History unavailable: {}", e),
            },
            _ if line.starts_with("/recall ") => {
                let picked = line["/recall ".len()..]
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .and_then(|i| i.checked_sub(1))
                    .and_then(|i| history_cache.get(i))
                    .cloned();
                match picked {
                    Some(entry) => {
                        let before = orchestrator.messages().len();
                        orchestrator.import_history(&entry);
                        for message in &orchestrator.messages()[before..] {
                            print_message(message);
                        }
                    }
                    None => println!("No such history entry (run /history first)."),
                }
            }
            _ => {
                let before = orchestrator.messages().len();
                match orchestrator.submit(&line).await {
                    Ok(TurnOutcome::Redirect { route, specialty, delay }) => {
                        for message in &orchestrator.messages()[before + 1..] {
                            print_message(message);
                        }
                        tracing::debug!(route = %route, "Navigating to map");
                        tokio::time::sleep(delay).await;
                        run_map(config, specialty).await?;
                    }
                    Ok(TurnOutcome::Answered) => {
                        for message in &orchestrator.messages()[before + 1..] {
                            print_message(message);
                        }
                    }
                    Err(e) => println!("{}", e),
                }
            }
        }
    }

    Ok(())
}

/// The map view: refresh the directory around the user position, list the
/// filtered facilities, and annotate selections with distance/ETA.
async fn run_map(
    config: &ArogyaConfig,
    specialty: Specialty,
) -> Result<(), Box<dyn std::error::Error>> {
    let locator = Locator::new(
        position_source(&config.location),
        Duration::from_secs(config.location.timeout_secs),
        Coordinate::new(
            config.directory.map_fallback_lat,
            config.directory.map_fallback_lon,
        ),
    );
    let position = locator.current().await;

    println!("Fetching medical resources near {} ...", position);
    let mut directory =
        FacilityDirectory::new(&config.directory.amenity_url, config.directory.radius_m)?;
    directory.refresh(position).await;

    let facilities = directory.filter(specialty);
    println!("Medical resources (filter: {})", specialty);
    if facilities.is_empty() {
        println!("No facilities match this filter.");
        return Ok(());
    }
    println!("{}", map_view::render_list(&facilities, position));

    loop {
        let Some(line) = read_line("select # (enter to leave)> ") else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        let selected = line
            .parse::<usize>()
            .ok()
            .and_then(|i| map_view::select(&facilities, i, position));
        match selected {
            Some(selection) => println!("{}", map_view::render_selection(&selection)),
            None => println!("No such entry."),
        }
    }

    Ok(())
}

/// The operator broadcast console.
async fn run_admin(config: &ArogyaConfig) -> Result<(), Box<dyn std::error::Error>> {
    let client = ApiClient::new(&config.general.api_base_url)?;
    let mut console = BroadcastConsole::with_seeded_inbox();
    let sources = &config.broadcast.sources;

    println!("Broadcast console. Commands: /send, /log, /inbox, /refresh, /quit");

    loop {
        let Some(line) = read_line("admin> ") else { break };
        match line.trim() {
            "/quit" | "/exit" => break,
            "/log" => {
                if console.sent_log().is_empty() {
                    println!("No active alerts");
                }
                for record in console.sent_log() {
                    println!(
                        "[{} {}] \"{}\" — Source: {}",
                        record.date, record.timestamp, record.message, record.source
                    );
                }
            }
            "/inbox" => {
                for message in console.inbox() {
                    let tag = if message.is_broadcast { " [ALERT]" } else { "" };
                    println!(
                        "[{}] {}{}: {}",
                        message.timestamp, message.sender, tag, message.message
                    );
                }
            }
            "/refresh" => match client.whatsapp_messages().await {
                Ok(messages) => {
                    console.refresh_from(messages);
                    println!("Inbox refreshed.");
                }
                Err(e) => println!("Inbox unavailable: {}", e),
            },
            "/send" => {
                for (i, source) in sources.iter().enumerate() {
                    println!("{}. {}", i + 1, source);
                }
                let Some(choice) = read_line("source #> ") else { break };
                let source = choice
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .and_then(|i| i.checked_sub(1))
                    .and_then(|i| sources.get(i))
                    .cloned()
                    .unwrap_or_else(|| "Arogya Safety Team".to_string());
                let Some(message) = read_line("message> ") else { break };
                match console.send(&message, &source) {
                    Some(record) => {
                        println!("Broadcast Sent Successfully! ({} at {})", record.source, record.timestamp)
                    }
                    None => println!("Message is empty; nothing sent."),
                }
            }
            _ => println!("Unknown command."),
        }
    }

    Ok(())
}
