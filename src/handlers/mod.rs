// src/handlers/mod.rs

pub mod questions;
pub mod quiz;
