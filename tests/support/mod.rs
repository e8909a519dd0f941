#![allow(dead_code)]

pub mod architecture;
pub mod descriptor;
pub mod marathon;
