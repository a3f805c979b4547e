use std::env;
use std::fs;
use std::path::Path;
use std::sync::mpsc::{Receiver, Sender};
use std::thread;
use std::time::Duration;

use once_cell::sync::OnceCell;
use reqwest::blocking::Client;

use crate::state::{Delta, ProviderCommand};
use crate::store::{LoadError, RowStore};

const REQUEST_TIMEOUT_SECS: u64 = 10;
const DEFAULT_BASE_URL: &str = "http://localhost:8000/data";

static CLIENT: OnceCell<Client> = OnceCell::new();

fn http_client() -> Result<&'static Client, LoadError> {
    CLIENT.get_or_try_init(|| {
        Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|err| LoadError::Transport(err.to_string()))
    })
}

/// Run the provider loop on its own thread. Every load fans out onto a
/// fresh worker so concurrent requests (weekly plus career files on a
/// drill-down) stay outstanding together and settle independently; the UI
/// thread decides what is stale, not this one.
pub fn spawn_provider(tx: Sender<Delta>, cmd_rx: Receiver<ProviderCommand>) {
    thread::spawn(move || {
        for command in cmd_rx.iter() {
            match command {
                ProviderCommand::Load { slot, resource } => {
                    let tx = tx.clone();
                    let _ = tx.send(Delta::Log(format!("[INFO] Loading {}", resource.path())));
                    thread::spawn(move || {
                        let path = resource.path();
                        let delta = match load_store(&path) {
                            Ok(store) => Delta::Loaded {
                                slot,
                                resource: path,
                                store,
                            },
                            Err(err) => Delta::LoadFailed {
                                slot,
                                resource: path,
                                error: err.to_string(),
                            },
                        };
                        let _ = tx.send(delta);
                    });
                }
            }
        }
    });
}

/// Fetch and parse one resource. No retries; a failure is reported once and
/// scoped to this load.
pub fn load_store(path: &str) -> Result<RowStore, LoadError> {
    let text = fetch_text(path)?;
    RowStore::from_csv(&text, true)
}

/// `STATS_DIR` serves resources from a local directory; otherwise the path
/// is resolved against `STATS_BASE_URL`.
fn fetch_text(path: &str) -> Result<String, LoadError> {
    if let Ok(dir) = env::var("STATS_DIR") {
        return fs::read_to_string(Path::new(&dir).join(path))
            .map_err(|err| LoadError::Transport(err.to_string()));
    }

    let base = env::var("STATS_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let url = format!("{}/{}", base.trim_end_matches('/'), path);
    let response = http_client()?
        .get(&url)
        .send()
        .map_err(|err| LoadError::Transport(err.to_string()))?;
    if !response.status().is_success() {
        return Err(LoadError::Http(response.status().as_u16()));
    }
    response
        .text()
        .map_err(|err| LoadError::Transport(err.to_string()))
}
