pub mod diagram;
pub mod rendering;

// Re-export key types for easier usage
pub use diagram::{DiagramKind, extract, extract_diagrams};
pub use rendering::{RenderOptions, render, render_with};
