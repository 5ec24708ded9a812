// src/terrain/mod.rs

pub mod config;
pub mod generator;
pub mod grid;
pub mod noise;
