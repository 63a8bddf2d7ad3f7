// Gateway module - controls public API for handlers
// Modules are private, only exported symbols are public

mod metrics;
mod root;

pub use metrics::metrics_handler;
pub use root::root_handler;
