//! Instance registry
//!
//! Widget state lives in an explicit registry owned by the widget
//! management layer, keyed by a construction-time instance id, instead
//! of being stashed on the visual tree.

use crate::navigation::CarouselEngine;
use ahash::AHashMap;
use parking_lot::RwLock;
use std::sync::Arc;
use uuid::Uuid;

pub type CarouselId = Uuid;

/// Registry mapping instance ids to live engines
#[derive(Default)]
pub struct CarouselRegistry {
    engines: RwLock<AHashMap<CarouselId, Arc<CarouselEngine>>>,
}

impl CarouselRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an engine under its own id
    pub fn insert(&self, engine: Arc<CarouselEngine>) -> CarouselId {
        let id = engine.id();
        self.engines.write().insert(id, engine);
        id
    }

    pub fn get(&self, id: &CarouselId) -> Option<Arc<CarouselEngine>> {
        self.engines.read().get(id).cloned()
    }

    /// Tear down and deregister an instance
    pub fn remove(&self, id: &CarouselId) -> bool {
        match self.engines.write().remove(id) {
            Some(engine) => {
                engine.destroy();
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.engines.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.engines.read().is_empty()
    }
}
