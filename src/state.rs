//! Observable fetch state and the loader that drives it.
//!
//! The loader is the only writer; whoever holds the receiver from
//! [`ItemsLoader::subscribe`] is the reader. A `watch` channel keeps the
//! latest value, so a slow reader sees the final state even if it skipped
//! `Loading`.

use crate::fetch::{Decoder, FetchClient, Transport, error_chain};
use crate::item::{Record, Records};
use crate::model::{GroupedResult, process};
use tokio::sync::watch;
use tracing::{error, info};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Success(GroupedResult),
    Failure(String),
}

pub struct ItemsLoader<T, D> {
    client: FetchClient<T, D>,
    url: String,
    state: watch::Sender<FetchState>,
}

impl<T: Transport, D: Decoder> ItemsLoader<T, D> {
    pub fn new(client: FetchClient<T, D>, url: impl Into<String>) -> Self {
        let (state, _) = watch::channel(FetchState::Idle);
        Self {
            client,
            url: url.into(),
            state,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<FetchState> {
        self.state.subscribe()
    }

    pub fn current(&self) -> FetchState {
        self.state.borrow().clone()
    }

    /// Fetch once, publish the outcome, and return it.
    pub async fn load(&self) -> FetchState {
        self.state.send_replace(FetchState::Loading);

        match self.client.fetch::<Records>(&self.url).await {
            Ok(records) => {
                info!(url = %self.url, records = records.len(), "fetched items");
                self.apply(records)
            }
            Err(err) => {
                let summary = error_chain(&err);
                error!(url = %self.url, error = %summary, detail = ?err, "fetch failed");
                self.publish(FetchState::Failure(format!("Error fetching data: {summary}")))
            }
        }
    }

    /// Run the pipeline on `records` and publish the result.
    pub fn apply(&self, records: Vec<Record>) -> FetchState {
        let grouped = process(records);
        info!(
            groups = grouped.len(),
            items = grouped.values().map(Vec::len).sum::<usize>(),
            "grouped items"
        );
        self.publish(FetchState::Success(grouped))
    }

    fn publish(&self, next: FetchState) -> FetchState {
        self.state.send_replace(next.clone());
        next
    }
}
