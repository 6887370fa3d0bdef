//! Terminal and NDJSON presentation for the `shapesync` binary.

pub mod blocks;
pub mod ci;
pub mod components;
pub mod context;
pub mod error;
pub mod json;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
