//! Listshop - Monthly shopping list backend
//!
//! This crate implements the server side of a shopping-list application:
//! session resolution, route guarding for the password-recovery flow, and
//! link-based list sharing with an optional password gate.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
