//! Rule-based emotional calculus.
//!
//! Pure transfer functions map a normalized [`types::state::BioState`] to
//! bounded construct scores, [`band::band`] discretizes them, and
//! [`router::classify`] picks a construct from free text by keyword.

pub mod band;
pub mod config;
pub mod diagnostics;
pub mod engine;
pub mod equations;
pub mod error;
pub mod math;
pub mod report;
pub mod router;
pub mod scenario;
pub mod types;
