//! # SKYWAY
//!
//! The main crate, re-exporting the vehicle definition units.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                        SKYWAY VEHICLES                           │
//! ├──────────────────────────────────────────────────────────────────┤
//! │                                                                  │
//! │  definition.xml ──> sprite sets (x5) ──> definition builder      │
//! │                                              │        │          │
//! │                                              │        └──> fallback
//! │                                              v             volume cache
//! │                                          registry ──> create() ──> Vehicle
//! │                                                                  │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `report`: Text summaries of a load pass for tooling

pub mod report;

// Re-export the units
pub use skyway_shared as shared;
pub use skyway_vehicles as vehicles;

// Re-export commonly used types
pub use skyway_vehicles::{
    BankingState, CompassDirection, LoaderConfig, Organisation, Vehicle, VehicleDefinition,
    VehicleError, VehicleRegistry,
};
