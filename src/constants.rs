//! # Constants and type definitions for the periodic orbits client
//!
//! This module centralizes the **service endpoint**, the **column schema** of the
//! periodic orbits table and the **unit type aliases** used throughout the crate.
//!
//! ## Overview
//!
//! - Fixed endpoint of the JPL SSD periodic orbits API
//! - Default HTTP timeout
//! - Documented column order of one orbit initial condition
//! - Type aliases for nondimensional and physical quantities

use std::time::Duration;

// -------------------------------------------------------------------------------------------------
// Service
// -------------------------------------------------------------------------------------------------

/// Endpoint of the JPL Solar System Dynamics periodic orbits API
pub const PERIODIC_ORBITS_API_URL: &str = "https://ssd-api.jpl.nasa.gov/periodic_orbits.api";

/// Global timeout applied to one request (connection + body)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Column names of one row of the `data` table, in the documented order
pub const ORBIT_IC_FIELDS: [&str; 9] = [
    "x",
    "y",
    "z",
    "vx",
    "vy",
    "vz",
    "jacobi",
    "period",
    "stability",
];

/// Largest stability index magnitude for which an orbit is linearly stable
pub const STABILITY_THRESHOLD: f64 = 2.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Quantity scaled by the characteristic length or time of the system
pub type Nondimensional = f64;
/// Distance in kilometers
pub type Kilometer = f64;
/// Duration in seconds
pub type Second = f64;
/// Libration point index (1 to 5)
pub type LibrationPoint = u8;
