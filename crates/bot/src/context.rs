//! Application context shared by every handler

use chrono::NaiveDate;
use std::sync::Arc;
use tvguide_core::{Catalog, Clock};

use crate::db::GuideDb;

/// Built once at startup and injected into the dispatcher
#[derive(Clone)]
pub struct GuideContext {
    pub db: GuideDb,
    pub catalog: Arc<Catalog>,
    clock: Arc<dyn Clock>,
}

impl GuideContext {
    pub fn new(db: GuideDb, catalog: Catalog, clock: impl Clock + 'static) -> Self {
        Self {
            db,
            catalog: Arc::new(catalog),
            clock: Arc::new(clock),
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }
}
