//! # Vehicle Error Types
//!
//! Errors that abort a definition or a registry operation. Everything that
//! only degrades a definition is reported through [`crate::diagnostics`]
//! instead.

use thiserror::Error;

/// Errors that can occur while loading definitions or creating vehicles.
#[derive(Error, Debug)]
pub enum VehicleError {
    /// The `type` attribute is neither `flying` nor `ground`.
    #[error("unknown vehicle type \"{found}\" for vehicle \"{definition}\"")]
    UnknownVehicleType {
        /// Identity of the rejected definition.
        definition: String,
        /// The attribute value that was found (empty when missing).
        found: String,
    },

    /// A required attribute is absent from a definition element.
    #[error("missing attribute \"{attribute}\" on <{element}>")]
    MissingAttribute {
        /// Tag name of the element.
        element: String,
        /// Name of the missing attribute.
        attribute: &'static str,
    },

    /// No definition is registered under the requested name.
    #[error("vehicle definition not found: {0}")]
    DefinitionNotFound(String),

    /// The definition document is not well-formed XML.
    #[error("malformed definition document: {0}")]
    Markup(#[from] roxmltree::Error),

    /// Reading a definition or config file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid loader configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for vehicle operations.
pub type VehicleResult<T> = Result<T, VehicleError>;
