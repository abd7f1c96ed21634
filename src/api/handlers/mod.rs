// src/api/handlers/mod.rs
pub mod generator;
pub mod pages;
