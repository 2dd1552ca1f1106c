//! # Periodic orbits environment state
//!
//! This module defines [`crate::env_state::OrbitsEnv`], the **HTTP environment** used to reach the
//! periodic orbits API, and the [`crate::env_state::HttpTransport`] trait through which requests are
//! sent.
//!
//! ## Overview
//!
//! The main responsibilities of `OrbitsEnv` are:
//!
//! 1. Hold a [`ureq::Agent`] HTTP client configured from a [`crate::env_state::ClientConfig`]
//!    (endpoint and global timeout).
//! 2. Perform one blocking GET with a query string and hand back the status code and the body,
//!    whatever the status is. Turning a non-success status into an error is the caller's job.
//!
//! ## Structure
//!
//! ```text
//! OrbitsEnv
//! ├── http_client (ureq::Agent)
//! └── config      (ClientConfig: endpoint, timeout)
//! ```
//!
//! ## Notes
//!
//! - Proxy settings are taken from the host environment by the agent itself
//!   (`HTTP_PROXY`, `HTTPS_PROXY`, `ALL_PROXY`).
//! - No retry is attempted. A transport failure (DNS, connection, timeout) is returned as
//!   [`PeriodicOrbitError::Transport`](crate::orbits_errors::PeriodicOrbitError::Transport).
use std::time::Duration;

use tracing::debug;
use ureq::Agent;

use crate::{
    constants::{DEFAULT_TIMEOUT, PERIODIC_ORBITS_API_URL},
    orbits_errors::PeriodicOrbitError,
};

/// Connection settings of the periodic orbits client.
///
/// # Fields
///
/// * `endpoint` - URL of the periodic orbits API
/// * `timeout` - global timeout of one request, connection and body included
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            endpoint: PERIODIC_ORBITS_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

/// Status code and body of one HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Anything able to perform a GET with a query string.
///
/// [`OrbitsEnv`] is the network implementation; tests provide canned responses through it.
pub trait HttpTransport {
    /// Send one GET request.
    ///
    /// Arguments
    /// ---------
    /// * `url`: the endpoint, without query string
    /// * `params`: the query string pairs, already stripped of unset values
    ///
    /// Return
    /// ------
    /// * The status code and body for any status, or a transport error
    fn get(&self, url: &str, params: &[(&'static str, String)])
        -> Result<HttpResponse, PeriodicOrbitError>;
}

/// HTTP environment passed to the request functions of the crate
///
/// # Fields
///
/// * `http_client` - An ureq agent used to make HTTP requests
/// * `config` - The settings the agent was built from
#[derive(Debug, Clone)]
pub struct OrbitsEnv {
    pub http_client: Agent,
    pub config: ClientConfig,
}

impl Default for OrbitsEnv {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl OrbitsEnv {
    /// Create a new environment
    ///
    /// Arguments
    /// ---------
    /// * `config`: endpoint and timeout to use
    ///
    /// Return
    /// ------
    /// * A new environment whose agent does not turn 4xx/5xx statuses into errors,
    ///   so the body of a failed request stays available
    pub fn new(config: ClientConfig) -> Self {
        let agent_config = Agent::config_builder()
            .timeout_global(Some(config.timeout))
            .http_status_as_error(false)
            .build();
        let agent: Agent = agent_config.into();

        OrbitsEnv {
            http_client: agent,
            config,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

impl HttpTransport for OrbitsEnv {
    fn get(
        &self,
        url: &str,
        params: &[(&'static str, String)],
    ) -> Result<HttpResponse, PeriodicOrbitError> {
        let request = params
            .iter()
            .fold(self.http_client.get(url), |req, (key, value)| {
                req.query(key, value)
            });

        let mut response = request.call()?;
        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string()?;
        debug!(status, bytes = body.len(), "periodic orbits response received");

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod env_state_test {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint, "https://ssd-api.jpl.nasa.gov/periodic_orbits.api");
        assert_eq!(config.timeout, Duration::from_secs(10));

        let config = config
            .with_timeout(Duration::from_millis(500))
            .with_endpoint("http://localhost:8080/periodic_orbits.api");
        assert_eq!(config.timeout, Duration::from_millis(500));
        assert_eq!(config.endpoint, "http://localhost:8080/periodic_orbits.api");
    }

    #[test]
    fn test_env_keeps_config() {
        let env = OrbitsEnv::new(ClientConfig::default().with_endpoint("http://127.0.0.1:1/api"));
        assert_eq!(env.endpoint(), "http://127.0.0.1:1/api");
    }

    #[test]
    fn test_unreachable_host_is_transport_error() {
        // nothing listens on port 1
        let env = OrbitsEnv::new(
            ClientConfig::default()
                .with_endpoint("http://127.0.0.1:1/periodic_orbits.api")
                .with_timeout(Duration::from_secs(2)),
        );
        let result = env.get(env.endpoint(), &[("sys", "earth-moon".to_string())]);
        assert!(matches!(result, Err(PeriodicOrbitError::Transport(_))));
    }

    #[test]
    fn test_success_range() {
        let ok = HttpResponse {
            status: 200,
            body: String::new(),
        };
        let not_found = HttpResponse {
            status: 404,
            body: String::new(),
        };
        assert!(ok.is_success());
        assert!(!not_found.is_success());
    }
}
