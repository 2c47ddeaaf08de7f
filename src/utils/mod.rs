//! Utility functions and helpers.
//!
//! - [`hash`]: Identity hashing (xxHash3)
//! - [`paths`]: Install-location resolution
//! - [`time`]: Timestamp conversion

/// Identity hashing
pub mod hash;
/// Path resolution relative to the install location
pub mod paths;
/// Timestamp utilities
pub mod time;
