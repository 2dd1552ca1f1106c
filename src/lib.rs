pub mod constants;
pub mod env_state;
mod jpl_request;
pub mod orbit_family;
pub mod orbits_errors;
pub mod periodic_orbits;
pub mod query;
pub mod three_body;

pub use orbit_family::PeriodicOrbitFamily;
pub use orbits_errors::PeriodicOrbitError;
pub use periodic_orbits::{get_orbits, PeriodicOrbits};
pub use query::{OrbitQuery, PeriodUnit};
pub use three_body::{orbit_ic::OrbitIC, system::System};

#[cfg(feature = "async")]
pub use periodic_orbits::get_orbits_async;
