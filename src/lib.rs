//! # ascii-canvas-core
//!
//! Helpers for sizing and signing browser ASCII art animations.
//!
//! This crate provides platform-agnostic logic for:
//! - Measuring a representative glyph, with fallbacks when layout is unavailable
//! - Calculating how many character columns and rows fit a container
//! - Stamping a signature onto the last row of a finished frame
//!
//! Layout geometry is read through the [`LayoutSource`] trait, so everything
//! except the browser adapter runs (and tests) natively.
//!
//! ## Features
//!
//! - `serde` - Enable serialization/deserialization for data structures
//! - `toml` - Load [`CanvasConfig`] from TOML
//! - `web` - Browser DOM adapter and wasm-bindgen exports
//!
//! ## Example
//!
//! ```rust,ignore
//! use ascii_canvas_core::{add_signature_to_output, recalculate_dimensions};
//! use ascii_canvas_core::metrics::web::DomLayout;
//!
//! // Size the grid from the container and a hidden measurement glyph
//! let grid = recalculate_dimensions(&DomLayout, &container, &glyph);
//!
//! // ... run the animation to produce `rows` ...
//!
//! let rows = add_signature_to_output(&rows, "Pollock");
//! ```

mod config;
mod grid;
pub mod metrics;
mod signature;

#[cfg(feature = "web")]
pub mod web;

pub use config::{CanvasConfig, ConfigError};
pub use grid::{recalculate_dimensions, GridDimensions, GridSizer};
pub use metrics::{get_char_dimensions, Bounds, CharFootprint, CharMetrics, LayoutSource};
pub use signature::{add_signature_to_output, stamp_row, stamp_text};
