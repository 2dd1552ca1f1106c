//! Record types of the circular restricted three-body problem returned by the periodic orbits API.
//!
//! * [`system::System`] – constants of the queried primary/secondary system.
//! * [`orbit_ic::OrbitIC`] – one periodic orbit initial condition.

pub mod orbit_ic;
pub mod system;
