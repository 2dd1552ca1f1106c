//! # PeriodicOrbits: entry point of the client
//!
//! This module defines the [`PeriodicOrbits`](crate::periodic_orbits::PeriodicOrbits) struct, the
//! façade that wires together:
//!
//! 1. **Transport** ([`OrbitsEnv`](crate::env_state::OrbitsEnv) or any
//!    [`HttpTransport`](crate::env_state::HttpTransport)) and the endpoint to call.
//! 2. **Query** ([`OrbitQuery`](crate::query::OrbitQuery)) serialization into a query string.
//! 3. **Parsing** of the JSON answer into a [`PeriodicOrbitFamily`](crate::orbit_family::PeriodicOrbitFamily).
//!
//! Each call performs exactly one GET. Nothing is cached between calls and a failed call returns
//! no partial result.
//!
//! ## Typical usage
//!
//! ```rust, no_run
//! use periodic_orbits::periodic_orbits::PeriodicOrbits;
//! use periodic_orbits::env_state::ClientConfig;
//! use periodic_orbits::query::OrbitQuery;
//!
//! let client = PeriodicOrbits::new(ClientConfig::default());
//!
//! let query = OrbitQuery::new("earth-moon", "halo")
//!     .with_libr(2)
//!     .with_branch("N")
//!     .with_jacobi_range(3.1, 3.14);
//!
//! let halo = client.get_orbits(&query).unwrap();
//! for ic in &halo {
//!     println!("{ic}");
//! }
//! ```
//!
//! ## Errors
//!
//! - [`PeriodicOrbitError::Http`] for a non-2xx status, with the status and body.
//! - [`PeriodicOrbitError::Decode`] for a body that is not JSON or misses a top-level key.
//! - [`PeriodicOrbitError::Schema`] for records of the wrong shape.
//! - [`PeriodicOrbitError::Transport`] when the service cannot be reached.

use crate::{
    env_state::{ClientConfig, HttpTransport, OrbitsEnv},
    jpl_request::periodic_orbits::{deserialize_orbits, request_orbits},
    orbit_family::PeriodicOrbitFamily,
    orbits_errors::PeriodicOrbitError,
    query::OrbitQuery,
};

#[derive(Debug, Clone)]
pub struct PeriodicOrbits<T: HttpTransport = OrbitsEnv> {
    transport: T,
    endpoint: String,
}

impl Default for PeriodicOrbits<OrbitsEnv> {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl PeriodicOrbits<OrbitsEnv> {
    /// Construct a client sending its requests over the network.
    ///
    /// Arguments
    /// -----------------
    /// * `config`: endpoint and timeout of the requests.
    ///
    /// Return
    /// ----------
    /// * A new [`PeriodicOrbits`] backed by an [`OrbitsEnv`].
    pub fn new(config: ClientConfig) -> Self {
        let endpoint = config.endpoint.clone();
        PeriodicOrbits {
            transport: OrbitsEnv::new(config),
            endpoint,
        }
    }
}

impl<T: HttpTransport> PeriodicOrbits<T> {
    /// Construct a client on top of a custom transport.
    ///
    /// Arguments
    /// -----------------
    /// * `transport`: anything implementing [`HttpTransport`].
    /// * `endpoint`: the URL handed to the transport.
    pub fn with_transport(transport: T, endpoint: impl Into<String>) -> Self {
        PeriodicOrbits {
            transport,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Retrieve the periodic orbits matching a query.
    ///
    /// Arguments
    /// -----------------
    /// * `query`: system, family and optional filters.
    ///
    /// Return
    /// ----------
    /// * The parsed [`PeriodicOrbitFamily`] or the first error met.
    ///
    /// See also
    /// ------------
    /// * [`OrbitQuery::to_params`] – What is sent in the query string.
    pub fn get_orbits(
        &self,
        query: &OrbitQuery,
    ) -> Result<PeriodicOrbitFamily, PeriodicOrbitError> {
        let body = request_orbits(query, &self.transport, &self.endpoint)?;
        deserialize_orbits(&body)
    }
}

/// Retrieve the periodic orbits matching a query with the default configuration.
///
/// Same as `PeriodicOrbits::default().get_orbits(query)`.
pub fn get_orbits(query: &OrbitQuery) -> Result<PeriodicOrbitFamily, PeriodicOrbitError> {
    PeriodicOrbits::<OrbitsEnv>::default().get_orbits(query)
}

/// Retrieve the periodic orbits matching a query without blocking the calling task.
///
/// Arguments
/// -----------------
/// * `query`: system, family and optional filters.
/// * `config`: endpoint and timeout of the request.
#[cfg(feature = "async")]
pub async fn get_orbits_async(
    query: &OrbitQuery,
    config: &ClientConfig,
) -> Result<PeriodicOrbitFamily, PeriodicOrbitError> {
    use crate::jpl_request::periodic_orbits::request_orbits_async;

    let client = reqwest::Client::builder().timeout(config.timeout).build()?;
    let body = request_orbits_async(query, &client, &config.endpoint).await?;
    deserialize_orbits(&body)
}
