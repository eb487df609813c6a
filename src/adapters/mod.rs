//! Adapters Layer - Rendering surfaces
//!
//! Everything that talks to the outside world. The core (domain + content)
//! never depends on anything here.

pub mod cli;
