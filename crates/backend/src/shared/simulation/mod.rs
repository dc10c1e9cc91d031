//! Scenario simulation engine: parameter resolution, the financial
//! calculator and the derived projections. Everything in this module is
//! pure and synchronous; persistence and HTTP stay out.

pub mod calculator;
pub mod params;
pub mod projection;
