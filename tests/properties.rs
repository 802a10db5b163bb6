//! Property tests for Splashpack.
//!
//! Randomized inputs guard the bundler's invariants: references resolve by
//! basename, script order survives inlining, and the overlay is always
//! injected exactly once.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/resolver.rs"]
mod resolver;

#[path = "properties/bundler.rs"]
mod bundler;

#[path = "properties/context.rs"]
mod context;
