pub mod io;
pub mod render;

// Re-export key types for easier usage
pub use render::{TrustedMarkup, render};
