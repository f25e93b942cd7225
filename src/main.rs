use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;
use tracing::{Level, error, info};

use trendview::config::{self, AppConfig, fetch_config};
use trendview::credentials::{self, CredentialKey, Credentials};
use trendview::market_data::BarsSource;
use trendview::market_data::alpaca::AlpacaClient;
use trendview::tui::{self, Action, App, Message};
use trendview::view::{ViewQuery, load_view};
use trendview::{Result, TrendviewError};

fn main() -> Result<()> {
    // Logging first so `.env` and keychain problems are recorded.
    init_tracing(config::log_file().as_deref())?;
    // Environment must be settled before any runtime thread exists.
    credentials::populate_env();
    let app_config = fetch_config()?;

    if std::env::args().nth(1).as_deref() == Some("store-credentials") {
        return store_credentials(&app_config.market_data.credentials);
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| TrendviewError::Io(format!("failed to start runtime: {e}")))?;
    runtime.block_on(run(app_config))
}

/// Sends logs to `log_file` when set, otherwise discards them so they never
/// land on the alternate screen.
fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| TrendviewError::Io(format!("failed to open {}: {e}", path.display())))?;
            tracing_subscriber::fmt()
                .with_max_level(Level::DEBUG)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => tracing_subscriber::fmt().with_writer(std::io::sink).init(),
    }
    Ok(())
}

/// Copies the credentials currently in the environment into the keychain.
fn store_credentials(creds: &Credentials) -> Result<()> {
    let missing = creds.missing();
    if !missing.is_empty() {
        let names: Vec<&str> = missing.iter().map(|key| key.env_var()).collect();
        return Err(TrendviewError::Config(format!(
            "set {} before storing credentials",
            names.join(", ")
        )));
    }
    credentials::save(CredentialKey::ApiKey, creds.api_key())?;
    credentials::save(CredentialKey::ApiSecret, creds.api_secret())?;
    println!("Stored API Key and API Secret in the system keychain.");
    Ok(())
}

async fn run(app_config: AppConfig) -> Result<()> {
    let market_data = app_config.market_data;
    let source: Arc<dyn BarsSource> = Arc::new(AlpacaClient::new(&market_data)?);

    let mut app = App::new(market_data.credentials.missing());
    info!(
        base_url = %market_data.base_url,
        credentials_complete = market_data.credentials.is_complete(),
        "starting viewer"
    );

    let mut terminal = tui::setup_terminal()?;

    let (tx, mut rx) = mpsc::unbounded_channel();
    tui::spawn_event_reader(tx.clone());
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = tx.send(Message::Quit);
        }
    });

    let result = event_loop(
        &mut terminal,
        &mut app,
        source.as_ref(),
        market_data.send_end,
        &mut rx,
    )
    .await;

    tui::restore_terminal(&mut terminal)?;
    if let Err(e) = &result {
        error!(error = %e, "viewer stopped");
    }
    result
}

async fn event_loop(
    terminal: &mut tui::Tui,
    app: &mut App,
    source: &dyn BarsSource,
    send_end: bool,
    rx: &mut mpsc::UnboundedReceiver<Message>,
) -> Result<()> {
    let mut pending = Some(Action::Load(ViewQuery::default()));

    loop {
        if let Some(Action::Load(query)) = pending.take() {
            app.begin_loading(&query);
            tui::draw(terminal, app)?;
            let outcome = load_view(source, &query, chrono::Local::now(), send_end).await;
            app.finish_loading(outcome);
        }

        tui::draw(terminal, app)?;

        if app.should_quit {
            return Ok(());
        }

        let Some(message) = rx.recv().await else {
            return Ok(());
        };
        pending = tui::update(app, message);
    }
}
