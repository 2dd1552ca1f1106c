//! Requests to the JPL Solar System Dynamics web APIs and parsing of their answers.
//!
//! * [`periodic_orbits`] – the three-body periodic orbits API.

pub(crate) mod periodic_orbits;
