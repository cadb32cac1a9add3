#![no_std]

pub mod drivers;
pub mod pins;
pub mod time;
