//! Use cases for the application layer

pub mod chat_loop;
pub mod run_chat_turn;
