// src/generators/mod.rs
pub mod passphrase;
pub mod strength;

pub use passphrase::generate_passphrase;
pub use strength::rate_strength;
