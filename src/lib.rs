//! Syllable-level text emphasis with a deterministic shape and stochastic
//! content.
//!
//! Given a passage, the library adjusts its sentences toward a target
//! reading-ease band, splits the result into syllable-sized tokens without
//! losing a single byte of layout, picks a noise-driven but structured
//! subset of syllables to emphasize, and renders the outcome as markdown
//! markup, HTML or Unicode mathematical-bold text.

pub mod blocks;
pub mod config;
pub mod emphasis;
pub mod noise;
pub mod pipeline;
pub mod readability;
pub mod render;
pub mod syllable;
pub mod tokenizer;
pub mod ui;

pub use config::StylerConfig;
pub use pipeline::{process_text, StylerPipeline};
