#![allow(unused_assignments)] // thiserror/miette proc macros trigger false positives

pub mod cli;
pub mod commands;
pub mod config;
pub mod disk;
pub mod error;
pub mod logging;
pub mod paths;
pub mod process;
pub mod qemu;
pub mod settings;
pub mod store;
