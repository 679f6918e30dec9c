//! Synthetic commercial-property portfolio generator.
//!
//! Accounts are drawn from industry archetypes, each with a spatial layout
//! of insured locations carrying construction, exposure, peril, claims and
//! data-quality attributes. A run is a pure function of its seed, config
//! and as-of date.

pub mod account;
pub mod clock;
pub mod config;
pub mod construction;
pub mod engine;
pub mod error;
pub mod export;
pub mod geography;
pub mod location;
pub mod location_synthesizer;
pub mod name_generator;
pub mod peril;
pub mod placement;
pub mod reference_data;
pub mod rng;
pub mod summary;
pub mod templates;
pub mod types;
