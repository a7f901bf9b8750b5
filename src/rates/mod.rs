//! Effect runner for the converter's `LoadData` command.
//!
//! Fetches run on the tokio runtime; completions are marshaled back to the
//! main loop through the app event channel, so the reducer is only ever
//! touched from one thread.

use std::sync::mpsc::Sender;

use reqwest::Client;
use tokio::runtime::Handle;

use crate::converter::Command;
use crate::ui::events::AppEvent;

pub struct RateLoader {
    client: Client,
    runtime: Handle,
    events: Sender<AppEvent>,
}

impl RateLoader {
    /// The client is deliberately built without a request timeout: a fetch
    /// that never completes simply never delivers, and the UI keeps the
    /// last-known rate.
    pub fn new(runtime: Handle, events: Sender<AppEvent>) -> Self {
        Self {
            client: Client::new(),
            runtime,
            events,
        }
    }

    /// Execute a command from the reducer.
    ///
    /// The channel sender is a non-owning handle on the main loop: if the
    /// loop has already shut down, the send fails and the completion is
    /// dropped.
    pub fn execute(&self, command: Command) {
        match command {
            Command::LoadData { url, on_complete } => {
                let client = self.client.clone();
                let events = self.events.clone();
                tracing::debug!(url = %url, "starting rates fetch");
                self.runtime.spawn(async move {
                    let body = fetch_bytes(&client, &url).await;
                    match &body {
                        Some(bytes) => {
                            tracing::debug!(url = %url, len = bytes.len(), "rates fetch completed")
                        }
                        None => tracing::warn!(url = %url, "rates fetch failed"),
                    }
                    let _ = events.send(AppEvent::Rates(on_complete(body)));
                });
            }
        }
    }
}

/// GET the URL and return the raw body, or `None` on any transport error.
///
/// Status codes are not inspected: an error page still yields bytes, which
/// then simply fail the JSON probe in the reducer.
async fn fetch_bytes(client: &Client, url: &str) -> Option<Vec<u8>> {
    let response = client.get(url).send().await.ok()?;
    response.bytes().await.ok().map(|b| b.to_vec())
}
