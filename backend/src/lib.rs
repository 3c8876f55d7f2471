pub mod config;
pub mod gemini;
pub mod handlers;
pub mod middleware;
pub mod provider;
pub mod server;

pub use config::Config;
pub use provider::TextGenerator;
