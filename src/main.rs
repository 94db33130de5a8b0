//! Composition root: wires config, the API client, the router and the
//! terminal UI together. Everything is constructed here and passed in
//! explicitly; no module owns a global instance.

use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing_subscriber::EnvFilter;

use roster::api::EmployeeApi;
use roster::config::{Config, ConfigStore};
use roster::router::Router;
use roster::ui::app::App;
use roster::ui::events::{spawn_input_thread, AppEvent, ScreenRequest};
use roster::ui::{render, TerminalGuard};

#[derive(Debug, Parser)]
#[command(
    name = "roster",
    version,
    about = "Terminal client for a remote employee-records API"
)]
struct Args {
    /// Override the API base URL from the config file.
    #[arg(long)]
    base_url: Option<String>,

    /// Override the customer identifier.
    #[arg(long)]
    customer_id: Option<String>,

    /// Override the API key.
    #[arg(long)]
    api_key: Option<String>,

    /// Log filter directive (e.g. "info" or "roster=debug").
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let Args {
        base_url,
        customer_id,
        api_key,
        log_level,
    } = Args::parse();

    init_tracing(&log_level)?;

    let config = Config::load().context("loading configuration")?;
    let store = ConfigStore::new(config, Config::config_path());
    store.update(|c| {
        if let Some(url) = base_url {
            c.api.base_url = url;
        }
        if let Some(customer) = customer_id {
            c.api.customer_id = customer;
        }
        if let Some(key) = api_key {
            c.api.api_key = key;
        }
    });
    ensure_api_key(&store)?;

    let api = Arc::new(EmployeeApi::new(store.get().api.clone()));

    let (tx, rx) = mpsc::unbounded_channel();
    let mut router = Router::new();
    {
        let tx = tx.clone();
        router.on("/", move |_| {
            let _ = tx.send(AppEvent::Activate(ScreenRequest::List));
        });
    }
    {
        let tx = tx.clone();
        router.on("/add", move |_| {
            let _ = tx.send(AppEvent::Activate(ScreenRequest::Add));
        });
    }
    {
        let tx = tx.clone();
        router.on("/edit/:id", move |params| {
            if let Some(id) = params.get("id") {
                let _ = tx.send(AppEvent::Activate(ScreenRequest::Edit {
                    id: id.to_string(),
                }));
            }
        });
    }
    let router = Arc::new(router);

    let mut app = App::new(api, Arc::clone(&router), tx.clone());
    spawn_input_thread(tx);

    let mut guard = TerminalGuard::enter();
    router.navigate("/");
    run(guard.terminal_mut(), &mut app, rx).await
}

async fn run(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    mut rx: UnboundedReceiver<AppEvent>,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|frame| render::draw(frame, app))?;
        let Some(event) = rx.recv().await else {
            break;
        };
        app.handle_event(event);
        // Coalesce whatever else queued up into this same redraw turn.
        while let Ok(event) = rx.try_recv() {
            app.handle_event(event);
        }
        if app.should_quit() {
            break;
        }
    }
    Ok(())
}

/// Prompt for the API key when neither the config file nor the flags
/// provided one, and persist the answer for the next run.
fn ensure_api_key(store: &ConfigStore) -> anyhow::Result<()> {
    if store.get().api.has_api_key() {
        return Ok(());
    }
    if !std::io::stdin().is_terminal() {
        anyhow::bail!(
            "no API key configured; set api.api_key in {} or pass --api-key",
            store.path().display()
        );
    }

    eprint!("API key for {}: ", store.get().api.base_url);
    std::io::stderr().flush().ok();
    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .context("reading API key")?;
    let key = line.trim().to_string();
    if key.is_empty() {
        anyhow::bail!("an API key is required");
    }

    store.update(|c| c.api.api_key = key);
    if let Err(err) = store.save() {
        tracing::warn!(error = %err, "could not persist API key");
    }
    Ok(())
}

/// Log to a file; the terminal itself belongs to the UI.
fn init_tracing(filter: &str) -> anyhow::Result<()> {
    let dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("roster");
    std::fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("roster.log"))
        .context("opening log file")?;

    let env_filter = EnvFilter::try_new(filter).context("parsing --log-level")?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
