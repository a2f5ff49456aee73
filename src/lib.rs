pub mod api;
pub mod config;
pub mod error;
pub mod gemini;
pub mod models;
pub mod prompts;
pub mod services;
pub mod state;
pub mod upload;
