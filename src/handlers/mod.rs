//! HTTP handlers.
//!
//! `solve` carries the whole dispatch table; `health` is a liveness probe.

pub mod health;
pub mod solve;
