use league_roster::api::commands::{self, Command};
use league_roster::api::handlers::leagues::{self, CreateLeagueRequest};
use league_roster::config::AppConfig;
use league_roster::infrastructure::repositories::InMemoryLeagueRepository;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = AppConfig::from_env();

    // Session store replaces any global league
    let repo = InMemoryLeagueRepository::new();
    let league = leagues::create_league(
        &repo,
        CreateLeagueRequest {
            name: config.league_name.clone(),
            country: Some(config.league_country.clone()),
        },
    )
    .await
    .expect("Failed to create startup league");

    tracing::info!(league_id = %league.id, name = %league.name, "Session ready, reading commands from stdin");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await.expect("Failed to read stdin") {
        if line.trim().is_empty() {
            continue;
        }

        let view = match Command::parse(&line) {
            Ok(command) => commands::dispatch(&repo, league.id, command).await,
            Err(e) => Err(e),
        };
        let body = view.unwrap_or_else(|e| e.to_json());

        stdout
            .write_all(format!("{}\n", body).as_bytes())
            .await
            .expect("Failed to write stdout");
        stdout.flush().await.expect("Failed to flush stdout");
    }

    tracing::info!("Input closed, shutting down");
}
