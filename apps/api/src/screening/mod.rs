pub mod analyzer;
pub mod handlers;
pub mod models;
pub mod orchestrator;
pub mod prompts;
