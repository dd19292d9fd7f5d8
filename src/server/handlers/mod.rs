//! Web server HTTP handlers.

mod index;
mod predict;

pub use index::index_handler;
pub use predict::predict_handler;
