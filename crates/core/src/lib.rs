//! # Guidepost Core
//!
//! Domain types, traits, and error definitions for the Guidepost chat
//! service. This crate has **zero framework dependencies** — it defines the
//! domain model that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! The upstream LLM backend is defined as a trait here; implementations
//! live in their own crate. This enables:
//! - Swapping backends via configuration
//! - Easy testing with mock/stub providers
//! - Clean dependency graph (all crates depend inward on core)

pub mod error;
pub mod history;
pub mod provider;
pub mod turn;

// Re-export key types at crate root for ergonomics
pub use error::ProviderError;
pub use history::adapt_history;
pub use provider::{GenerationParams, GenerationRequest, GenerationResult, Provider};
pub use turn::{ModelTurn, Role, WireTurn};
