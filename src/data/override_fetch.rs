use {
    crate::{
        config::LABS_STORE,
        data::{DocumentKey, DocumentStore, StoreError},
    },
    futures::future::{AbortHandle, Abortable},
    std::{
        sync::{
            Arc,
            mpsc::{self, Receiver, RecvTimeoutError, TryRecvError},
        },
        thread,
        time::Duration,
    },
    tokio::runtime::Runtime,
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Terminal result of the override read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchOutcome {
    pub value: Option<f64>,
    /// Diagnostic only. Never reaches the ranking.
    pub error: Option<StoreError>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    Loading,
    Ready(FetchOutcome),
}

impl FetchState {
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Loading => None,
            Self::Ready(outcome) => outcome.value,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&StoreError> {
        match self {
            Self::Loading => None,
            Self::Ready(outcome) => outcome.error.as_ref(),
        }
    }
}

/// Single read of the override field. All failures fold into "no override".
/// `None` store means unconfigured: no value, no error.
pub async fn fetch_override(
    store: Option<&dyn DocumentStore>,
    key: &DocumentKey,
    field: &str,
) -> FetchOutcome {
    let Some(store) = store else {
        return FetchOutcome::default();
    };

    let read = match LABS_STORE.timeout_ms {
        Some(ms) => tokio::time::timeout(Duration::from_millis(ms), store.read_number(key, field))
            .await
            .unwrap_or(Err(StoreError::Timeout(ms))),
        None => store.read_number(key, field).await,
    };

    match read {
        Ok(read) => {
            #[cfg(debug_assertions)]
            if DF.log_store_fetch {
                log::info!("STORE: {} .{} -> {:?}", key, field, read);
            }
            FetchOutcome {
                value: read.value(),
                error: None,
            }
        }
        Err(e) => {
            log::warn!("STORE: override read of {} failed: {}", key, e);
            FetchOutcome {
                value: None,
                error: Some(e),
            }
        }
    }
}

/// Owns the background read of the override and its abort handle.
/// Dropping it (or calling `cancel`) aborts the read; a late result is never
/// written.
pub struct OverrideFetch {
    state: FetchState,
    rx: Option<Receiver<FetchOutcome>>,
    abort: Option<AbortHandle>,
    cancelled: bool,
}

impl OverrideFetch {
    /// Fetch the fixed labs document.
    pub fn spawn(store: Option<Arc<dyn DocumentStore>>) -> Self {
        Self::spawn_for(store, DocumentKey::labs(), LABS_STORE.field)
    }

    pub fn spawn_for(
        store: Option<Arc<dyn DocumentStore>>,
        key: DocumentKey,
        field: &str,
    ) -> Self {
        let Some(store) = store else {
            #[cfg(debug_assertions)]
            if DF.log_store_fetch {
                log::info!("STORE: not configured, using static scores");
            }
            return Self::ready(FetchOutcome::default());
        };

        let (tx, rx) = mpsc::channel();
        let (abort, registration) = AbortHandle::new_pair();
        let field = field.to_string();

        thread::spawn(move || {
            let rt = match Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    let _ = tx.send(FetchOutcome {
                        value: None,
                        error: Some(StoreError::Runtime(e.to_string())),
                    });
                    return;
                }
            };

            let read = Abortable::new(
                async move { fetch_override(Some(store.as_ref()), &key, &field).await },
                registration,
            );
            match rt.block_on(read) {
                Ok(outcome) => {
                    // Receiver is gone if the owner was dropped meanwhile.
                    let _ = tx.send(outcome);
                }
                Err(_aborted) => {
                    #[cfg(debug_assertions)]
                    if DF.log_store_fetch {
                        log::info!("STORE: override read aborted");
                    }
                }
            }
        });

        Self {
            state: FetchState::Loading,
            rx: Some(rx),
            abort: Some(abort),
            cancelled: false,
        }
    }

    /// Already-settled fetch.
    pub fn ready(outcome: FetchOutcome) -> Self {
        Self {
            state: FetchState::Ready(outcome),
            rx: None,
            abort: None,
            cancelled: false,
        }
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Non-blocking: pick up the result if it has arrived.
    pub fn poll(&mut self) -> &FetchState {
        if let Some(rx) = &self.rx {
            match rx.try_recv() {
                Ok(outcome) => self.settle(outcome),
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => self.settle_worker_lost(),
            }
        }
        &self.state
    }

    /// Blocking variant of `poll`, bounded by `timeout`.
    pub fn wait(&mut self, timeout: Duration) -> &FetchState {
        if let Some(rx) = &self.rx {
            match rx.recv_timeout(timeout) {
                Ok(outcome) => self.settle(outcome),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => self.settle_worker_lost(),
            }
        }
        &self.state
    }

    /// Abort the in-flight read. The board falls back to static scores.
    pub fn cancel(&mut self) {
        if let Some(abort) = self.abort.take() {
            abort.abort();
            self.cancelled = true;
        }
        if self.rx.take().is_some() {
            self.state = FetchState::Ready(FetchOutcome::default());
        }
    }

    fn settle(&mut self, outcome: FetchOutcome) {
        self.state = FetchState::Ready(outcome);
        self.rx = None;
        self.abort = None;
    }

    fn settle_worker_lost(&mut self) {
        self.settle(FetchOutcome {
            value: None,
            error: Some(StoreError::Runtime("fetch worker exited".to_string())),
        });
    }
}

impl Drop for OverrideFetch {
    fn drop(&mut self) {
        if let Some(abort) = self.abort.take() {
            abort.abort();
        }
    }
}
