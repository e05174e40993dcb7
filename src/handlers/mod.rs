pub mod bucket;
pub mod plot;

// Re-exports for convenience
pub use bucket::{export_table, reveal_first_key};
pub use plot::{ChartRenderer, Renderer, RocFigure, render_roc_curve};
