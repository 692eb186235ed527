//! asesmen-cli library root.
//!
//! The terminal presentation layer over `asesmen-core`: the screen flow
//! view-model, config file handling, flow events, and text rendering.
//! Exposed as a library so integration tests can drive the flow without
//! a real terminal.

pub mod config;
pub mod events;
pub mod flow;
pub mod render;
pub mod terminal;
