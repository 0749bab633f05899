//! The rider's station selection and its persistence.
//!
//! The selection is the only mutable state in the tracker. It is written
//! through to a [`PreferenceStore`] on every change and read back once at
//! startup. Store failures never reach the caller: a failed read behaves like
//! a cold start and a failed write still updates the in-memory value.

use crate::store::PreferenceStore;

/// Key under which the selected station name is persisted.
pub const SELECTED_STATION_KEY: &str = "selectedStation";

type Observer = Box<dyn FnMut(Option<&str>)>;

pub struct Selector<S> {
    store: S,
    current: Option<String>,
    observers: Vec<Observer>,
}

impl<S: PreferenceStore> Selector<S> {
    /// A selector with nothing selected. Call [`restore`](Self::restore) to
    /// pick up a previously persisted station.
    pub fn new(store: S) -> Self {
        Self {
            store,
            current: None,
            observers: Vec::new(),
        }
    }

    /// Load the persisted selection, replacing the in-memory one.
    ///
    /// Returns `None` when nothing usable is stored, including when the store
    /// cannot be read.
    pub fn restore(&mut self) -> Option<String> {
        let restored = match self.store.get(SELECTED_STATION_KEY) {
            Ok(Some(value)) if !value.is_empty() => Some(value),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!("Failed to read saved station, starting with none: {}", e);
                None
            }
        };

        tracing::debug!(station = ?restored, "Restored selection");
        self.current = restored.clone();
        self.notify();
        restored
    }

    /// Select `station`, persist it, and notify observers.
    ///
    /// The name is not checked against any catalog; an unknown station simply
    /// matches no buses.
    pub fn select(&mut self, station: &str) {
        self.current = Some(station.to_string());

        if let Err(e) = self.store.set(SELECTED_STATION_KEY, station) {
            tracing::warn!(
                "Failed to save station {:?}, keeping it for this session only: {}",
                station,
                e
            );
        }

        tracing::info!("Selected station {:?}", station);
        self.notify();
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Register a callback run with the committed selection after every
    /// `select` and `restore`.
    pub fn subscribe(&mut self, observer: impl FnMut(Option<&str>) + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn notify(&mut self) {
        let current = self.current.as_deref();
        for observer in &mut self.observers {
            observer(current);
        }
    }
}
