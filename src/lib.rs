//! Marine-cybernetics capability calculations live here.
//!
//! The workspace keeps the thruster power-to-force relationships, shared
//! unit helpers, and catalog loaders in focused member crates; this facade
//! re-exports them so front-ends (CLI, capability plots) can depend on a
//! single crate.

pub use marcyb_config as config;
pub use marcyb_thrust as thrust;
pub use marcyb_units as units;

/// Returns the version of the library for smoke tests while scaffolding.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
