//! Moon engine adapters.
//!
//! - `SimplifiedMoonEngine` - mean longitudes, one correction term
//! - `EphemerisMoonEngine` - truncated analytical lunar theory

mod ephemeris;
mod simplified;

pub use ephemeris::EphemerisMoonEngine;
pub use simplified::SimplifiedMoonEngine;

use std::sync::Arc;

use crate::config::MoonEngineKind;
use crate::ports::MoonEngine;

/// Builds the engine selected in configuration.
pub fn moon_engine_for(kind: MoonEngineKind) -> Arc<dyn MoonEngine> {
    let engine: Arc<dyn MoonEngine> = match kind {
        MoonEngineKind::Simplified => Arc::new(SimplifiedMoonEngine::new()),
        MoonEngineKind::Ephemeris => Arc::new(EphemerisMoonEngine::new()),
    };
    tracing::debug!(engine = engine.name(), "moon engine selected");
    engine
}
