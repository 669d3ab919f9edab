//! Internal helpers shared across modules

pub mod string;
