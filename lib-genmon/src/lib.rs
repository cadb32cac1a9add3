#![cfg_attr(not(test), no_std)]

// must stay first, the logging macros are textually scoped
#[macro_use]
pub(crate) mod fmt;

pub mod acquisition;
pub mod analysis;
pub mod config;
pub mod drivers;
pub mod monitor;
pub mod power;
pub mod report;
pub mod time;
