#![doc = include_str!("../README.md")]

pub mod cli;
mod client;
pub mod compute;
pub mod logging;
pub mod models;
pub mod nova;

#[cfg(test)]
mod test_utils;

pub use client::*;
