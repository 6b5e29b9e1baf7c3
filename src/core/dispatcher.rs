use std::fmt;
use tracing::trace;

use crate::models::{Collector, ObserveError, Visit};

type Observer<'a> = Box<dyn FnMut(&Visit<'_>) -> Result<(), ObserveError> + 'a>;

/// Fans every visit of a walk out to the registered observers.
///
/// Observers run in registration order. Their results are dropped here: a
/// collector that rejects a visit never keeps the next one from seeing it,
/// and never stops the walk.
#[derive(Default)]
pub struct Dispatcher<'a> {
    observers: Vec<Observer<'a>>,
}

impl<'a> Dispatcher<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, observer: F) -> &mut Self
    where
        F: FnMut(&Visit<'_>) -> Result<(), ObserveError> + 'a,
    {
        self.observers.push(Box::new(observer));
        self
    }

    /// Registers `collector`, borrowing it until the dispatcher is dropped.
    pub fn register_collector<C: Collector>(&mut self, collector: &'a mut C) -> &mut Self {
        self.register(move |visit| collector.observe(visit))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn dispatch(&mut self, visit: &Visit<'_>) {
        for observer in &mut self.observers {
            if let Err(e) = observer(visit) {
                trace!("Dispatcher: observer declined {}: {}", visit.path.display(), e);
            }
        }
    }
}

impl fmt::Debug for Dispatcher<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("observers", &self.observers.len())
            .finish()
    }
}
