// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod bbcode;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod file;
pub mod gui;
pub mod model;
pub mod progress;
pub mod runner;
pub mod specs;
