//! Shared data types: the action vocabulary, engine settings, and the
//! profile icon lookup.

pub mod action;
pub mod config;
pub mod profile;
