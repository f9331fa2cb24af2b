//! # Guidepost Policy
//!
//! The category-scoped conversation policy engine: a static registry of
//! guidance types and categories, and a deterministic resolver from
//! `(type, category)` to a strict behavioral contract — a system
//! instruction plus a mandatory verbatim refusal string.
//!
//! The registry is process-wide and immutable; policies are derived fresh
//! per request, so editing a category's rules never requires invalidation
//! logic.

pub mod catalog;
pub mod registry;
pub mod resolver;

pub use catalog::CategoryPolicy;
pub use registry::{GuidanceType, categories_for, is_valid};
pub use resolver::{Policy, refusal_message, resolve};
