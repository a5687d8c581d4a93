//! evolve - short-form video strategy generator
//!
//! Serves an intake form and a `/generate` endpoint that turns a content
//! brief into a TikTok strategy. Strategies come from an LLM provider
//! (OpenAI, OpenAI-compatible, Anthropic) when a key is configured, and from
//! a local template synthesizer otherwise or whenever the provider fails.

pub mod cli;
pub mod config;
pub mod llm;
pub mod service;
pub mod strategy;
pub mod util;
pub mod web;
