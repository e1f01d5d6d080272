//! Site shell and page server for the Mechanic documentation.
pub mod assets;
pub mod config;
pub mod content;
pub mod nav;
pub mod pages;
pub mod server;
pub mod shell;
pub mod templates;
pub mod types;
