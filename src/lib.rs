#![forbid(unsafe_code)]
#![cfg_attr(not(debug_assertions), deny(warnings))] // Forbid warnings in release builds
#![warn(clippy::all, rust_2018_idioms)]

pub mod coords;
pub mod error;
pub mod layout;
pub mod near;
pub mod storage;

pub use coords::Size;
pub use near::NEAR_DELTA;
