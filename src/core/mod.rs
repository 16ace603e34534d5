//! Core business logic layer
//!
//! Data structures, persistence, the prompt repository and the editor
//! model. Nothing in here prints or reads from the terminal.

pub mod data;
pub mod editor;
pub mod id;
pub mod repository;
pub mod store;
pub mod traits;
