// src/lib.rs

pub mod agents;
pub mod api;
pub mod auth;
pub mod config;
pub mod llm;
pub mod state;
