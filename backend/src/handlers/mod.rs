pub mod chatbot;

pub use chatbot::*;
