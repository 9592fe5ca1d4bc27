//! Change notification for repository mutations.
//!
//! Backends that mutate persisted state notify registered observers
//! synchronously, in registration order, after the successful write. The
//! event payload carries the action tag and the relevant data; observers
//! are expected to handle it and return promptly. Observer panics are not
//! contained here.

use std::sync::Arc;

use crate::core::traits::repository::SortField;
use crate::modules::customers::models::Customer;

/// A mutation event emitted by a repository backend.
#[derive(Debug, Clone, PartialEq)]
pub enum ChangeEvent {
    Added { id: i64, customer: Customer },
    Replaced { id: i64, customer: Customer },
    Deleted { id: i64 },
    Sorted { field: SortField, reverse: bool },
}

impl ChangeEvent {
    /// Action tag, stable across event shapes.
    pub fn action(&self) -> &'static str {
        match self {
            ChangeEvent::Added { .. } => "add",
            ChangeEvent::Replaced { .. } => "replace",
            ChangeEvent::Deleted { .. } => "delete",
            ChangeEvent::Sorted { .. } => "sort",
        }
    }
}

/// Receiver of repository change events, e.g. a view layer.
pub trait RepositoryObserver: Send + Sync {
    fn update(&self, event: &ChangeEvent);
}

/// Ordered list of observer handles embedded by mutating backends.
///
/// Identity is pointer identity of the `Arc` handle, so registration and
/// removal are idempotent.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: Vec<Arc<dyn RepositoryObserver>>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, observer: Arc<dyn RepositoryObserver>) {
        if !self.observers.iter().any(|o| Arc::ptr_eq(o, &observer)) {
            self.observers.push(observer);
        }
    }

    pub fn remove(&mut self, observer: &Arc<dyn RepositoryObserver>) {
        self.observers.retain(|o| !Arc::ptr_eq(o, observer));
    }

    /// Deliver `event` to every registered observer, in registration order.
    pub fn notify(&self, event: &ChangeEvent) {
        for observer in &self.observers {
            observer.update(event);
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}
