//! Core services implementing chain access, normalization, fee handling
//! and wallet operations.

pub mod blockchain;
pub mod fee;
pub mod normalization;
pub mod wallet;
