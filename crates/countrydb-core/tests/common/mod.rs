// crates/countrydb-core/tests/common/mod.rs
#![allow(dead_code)]

use countrydb_core::model::{CountryRecord, CountrySummary};
use countrydb_core::{CountryApi, CountryError, Result};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Started(String),
    Finished(String),
}

/// Border-name API answering from a table. Codes missing from the table
/// fail; held codes block until released.
#[derive(Default)]
pub struct ScriptedApi {
    names: HashMap<String, String>,
    gates: Mutex<HashMap<String, Arc<Notify>>>,
    events: Mutex<Vec<Event>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl ScriptedApi {
    pub fn new(entries: &[(&str, &str)]) -> Self {
        Self {
            names: entries
                .iter()
                .map(|(code, name)| (code.to_string(), name.to_string()))
                .collect(),
            ..Default::default()
        }
    }

    /// Block lookups of `code` until [`Self::release`] is called.
    pub fn hold(self, code: &str) -> Self {
        self.gates
            .lock()
            .unwrap()
            .insert(code.to_string(), Arc::new(Notify::new()));
        self
    }

    pub fn release(&self, code: &str) {
        if let Some(gate) = self.gates.lock().unwrap().get(code) {
            gate.notify_one();
        }
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn requested(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Started(code) => Some(code),
                Event::Finished(_) => None,
            })
            .collect()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    /// Yields until `code` has been requested.
    pub async fn wait_for_request(&self, code: &str) {
        while !self.requested().iter().any(|c| c == code) {
            tokio::task::yield_now().await;
        }
    }
}

impl CountryApi for ScriptedApi {
    async fn list_countries(&self) -> Result<Vec<CountrySummary>> {
        Ok(Vec::new())
    }

    async fn fetch_by_name(&self, name: &str) -> Result<Vec<CountryRecord>> {
        Err(CountryError::NotFound(name.to_string()))
    }

    async fn fetch_name_by_code(&self, code: &str) -> Result<String> {
        self.events
            .lock()
            .unwrap()
            .push(Event::Started(code.to_string()));
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        let gate = self.gates.lock().unwrap().get(code).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        tokio::task::yield_now().await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.events
            .lock()
            .unwrap()
            .push(Event::Finished(code.to_string()));
        self.names
            .get(code)
            .cloned()
            .ok_or_else(|| CountryError::InvalidData(format!("malformed response for {code}")))
    }
}
