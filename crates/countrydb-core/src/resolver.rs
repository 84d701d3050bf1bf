// crates/countrydb-core/src/resolver.rs

//! # Border Resolver
//!
//! Turns a record's border codes into display names. Codes are looked up
//! strictly one at a time, in input order; each name is published as soon as
//! its response arrives. A failed lookup is logged and skipped, never
//! retried, and never stops the rest of the run.
//!
//! [`resolve_borders`] is the bare loop. [`BorderResolver`] runs that loop
//! as a background task and exposes the accumulated list through a
//! `tokio::sync::watch` channel, tagging every run with a [`RunId`] so
//! results from a superseded run are dropped instead of appended.

use crate::client::CountryApi;
use std::ops::ControlFlow;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Identifies one resolver run. Later runs compare greater.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RunId(u64);

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// State of the current run as seen by observers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BorderSnapshot {
    pub run: RunId,
    /// Resolved names, in input order, failures omitted.
    pub names: Vec<String>,
    /// Lookups whose outcome has been incorporated, successful or not.
    pub attempted: usize,
    /// Number of codes in this run.
    pub total: usize,
    pub complete: bool,
    /// The run stopped before every code was attempted: cancelled, or its
    /// task panicked.
    pub cancelled: bool,
}

impl BorderSnapshot {
    fn start(run: RunId, total: usize) -> Self {
        Self {
            run,
            names: Vec::new(),
            attempted: 0,
            total,
            complete: total == 0,
            cancelled: false,
        }
    }

    /// No further updates will arrive for this run.
    pub fn is_finished(&self) -> bool {
        self.complete || self.cancelled
    }

    /// Lookups that produced no name.
    pub fn failed(&self) -> usize {
        self.attempted - self.names.len()
    }
}

/// Resolve `codes` sequentially, calling `on_name` for each name as it
/// arrives, and return all resolved names.
///
/// Never fails: lookup errors are logged at `warn` and skipped. An empty
/// `codes` issues no request.
pub async fn resolve_borders<A, S, F>(api: &A, codes: &[S], mut on_name: F) -> Vec<String>
where
    A: CountryApi,
    S: AsRef<str>,
    F: FnMut(&str),
{
    let mut names = Vec::with_capacity(codes.len());
    run_sequence(api, codes, |outcome| {
        if let Some(name) = outcome {
            on_name(&name);
            names.push(name);
        }
        ControlFlow::Continue(())
    })
    .await;
    names
}

/// The lookup loop shared by [`resolve_borders`] and [`BorderResolver`].
/// `step` sees each outcome before the next request is issued and may stop
/// the run.
async fn run_sequence<A, S, F>(api: &A, codes: &[S], mut step: F)
where
    A: CountryApi,
    S: AsRef<str>,
    F: FnMut(Option<String>) -> ControlFlow<()>,
{
    for code in codes {
        let code = code.as_ref();
        let outcome = match api.fetch_name_by_code(code).await {
            Ok(name) => {
                tracing::debug!(code, name = %name, "resolved border country");
                Some(name)
            }
            Err(e) => {
                tracing::warn!(code, error = %e, "failed to fetch border country");
                None
            }
        };
        if step(outcome).is_break() {
            return;
        }
    }
}

/// Observable border-name list with one writer: the active run.
///
/// ```no_run
/// use countrydb_core::prelude::*;
///
/// # async fn run() -> countrydb_core::Result<()> {
/// let mut resolver = BorderResolver::new(RestCountriesClient::new(ClientConfig::default())?);
/// let mut updates = resolver.subscribe();
/// resolver.resolve(["DEU", "CHE"]);
///
/// while updates.changed().await.is_ok() {
///     let snapshot = updates.borrow_and_update().clone();
///     println!("{:?}", snapshot.names);
///     if snapshot.is_finished() {
///         break;
///     }
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct BorderResolver<A> {
    api: Arc<A>,
    state: Arc<watch::Sender<BorderSnapshot>>,
    last_run: RunId,
    task: Option<JoinHandle<()>>,
}

impl<A: CountryApi + 'static> BorderResolver<A> {
    pub fn new(api: A) -> Self {
        Self::from_arc(Arc::new(api))
    }

    pub fn from_arc(api: Arc<A>) -> Self {
        let (state, _) = watch::channel(BorderSnapshot {
            complete: true,
            ..Default::default()
        });
        Self {
            api,
            state: Arc::new(state),
            last_run: RunId::default(),
            task: None,
        }
    }

    /// Start a new run over `codes`, superseding any run in flight.
    ///
    /// The list is cleared before this returns; names from the previous run
    /// that arrive later are discarded. With no codes the run is complete
    /// immediately and no request is made.
    ///
    /// # Panics
    ///
    /// Must be called from within a tokio runtime.
    pub fn resolve<I, S>(&mut self, codes: I) -> RunId
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let codes: Vec<String> = codes.into_iter().map(|c| c.as_ref().to_string()).collect();
        let run = RunId(self.last_run.0 + 1);
        self.last_run = run;

        if let Some(previous) = self.task.take() {
            previous.abort();
        }
        self.state.send_replace(BorderSnapshot::start(run, codes.len()));

        if codes.is_empty() {
            tracing::debug!(%run, "no border codes");
            return run;
        }

        tracing::info!(%run, total = codes.len(), "resolving border countries");
        let api = Arc::clone(&self.api);
        let state = Arc::clone(&self.state);
        self.task = Some(tokio::spawn(async move {
            let _guard = RunGuard {
                state: Arc::clone(&state),
                run,
            };
            run_sequence(api.as_ref(), &codes, |outcome| {
                let mut current = false;
                // Tag check and append happen under the channel's write lock,
                // the same lock `send_replace` takes when a new run starts.
                state.send_if_modified(|snapshot| {
                    if snapshot.run != run || snapshot.cancelled {
                        return false;
                    }
                    current = true;
                    snapshot.attempted += 1;
                    if let Some(name) = outcome {
                        snapshot.names.push(name);
                    }
                    snapshot.complete = snapshot.attempted == snapshot.total;
                    true
                });
                if current {
                    ControlFlow::Continue(())
                } else {
                    tracing::debug!(%run, "dropping result from stopped run");
                    ControlFlow::Break(())
                }
            })
            .await;
            tracing::debug!(%run, "border run finished");
        }));
        run
    }

    /// Stop the current run. Names resolved so far stay visible and the
    /// snapshot is marked `cancelled` unless the run already completed.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            if mark_cancelled(&self.state, self.last_run) {
                tracing::debug!(run = %self.last_run, "border run cancelled");
            }
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<BorderSnapshot> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> BorderSnapshot {
        self.state.borrow().clone()
    }

    pub fn names(&self) -> Vec<String> {
        self.state.borrow().names.clone()
    }

    pub fn current_run(&self) -> RunId {
        self.last_run
    }

    /// Wait until the current run has finished: every code attempted, or
    /// the run cancelled.
    ///
    /// Returns immediately if the run already finished.
    pub async fn wait_until_complete(&self) -> BorderSnapshot {
        let run = self.last_run;
        let mut rx = self.subscribe();
        let finished = match rx.wait_for(|s| s.run != run || s.is_finished()).await {
            Ok(snapshot) => snapshot.clone(),
            Err(_) => self.snapshot(),
        };
        finished
    }
}

/// Set `cancelled` on `run` if it is still the current, unfinished run.
fn mark_cancelled(state: &watch::Sender<BorderSnapshot>, run: RunId) -> bool {
    state.send_if_modified(|snapshot| {
        if snapshot.run != run || snapshot.is_finished() {
            return false;
        }
        snapshot.cancelled = true;
        true
    })
}

/// Dropped with the run's future, whether it returned, was aborted or
/// panicked; an unfinished run is then marked cancelled.
struct RunGuard {
    state: Arc<watch::Sender<BorderSnapshot>>,
    run: RunId,
}

impl Drop for RunGuard {
    fn drop(&mut self) {
        if mark_cancelled(&self.state, self.run) {
            tracing::debug!(run = %self.run, "border run stopped early");
        }
    }
}

impl<A> Drop for BorderResolver<A> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
