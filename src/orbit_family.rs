//! # Periodic orbit family
//!
//! [`PeriodicOrbitFamily`](crate::orbit_family::PeriodicOrbitFamily) is the result of one query:
//! the [`System`](crate::three_body::system::System) descriptor, the family and branch names, the
//! range of each invariant over the whole family, the filter echoed by the service and the list
//! of [`OrbitIC`](crate::three_body::orbit_ic::OrbitIC) matching the query.
//!
//! A family is only built from a complete, valid response. It owns every record it holds.

use std::fmt;

use itertools::Itertools;

use crate::three_body::{orbit_ic::OrbitIC, system::System};

/// Range `[min, max]` of each invariant over the whole family, before filtering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitLimits {
    pub jacobi: [f64; 2],
    pub period: [f64; 2],
    pub stability: [f64; 2],
}

/// Source and version of the API that produced a response.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct ApiSignature {
    pub source: String,
    pub version: String,
}

/// Parsed answer of the periodic orbits API.
///
/// Invariant: `orbit_ics.len() == count`.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodicOrbitFamily {
    pub system: System,
    pub family: String,
    pub branch: Option<String>,
    pub limits: OrbitLimits,
    /// Filter applied by the service, as echoed in the response
    pub filter: Option<serde_json::Value>,
    pub count: usize,
    /// Column order of the raw `data` table
    pub fields: Vec<String>,
    pub orbit_ics: Vec<OrbitIC>,
    pub signature: Option<ApiSignature>,
}

impl PeriodicOrbitFamily {
    pub fn len(&self) -> usize {
        self.orbit_ics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orbit_ics.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OrbitIC> {
        self.orbit_ics.iter()
    }

    /// Orbit with the smallest stability index magnitude, `None` for an empty result.
    pub fn most_stable(&self) -> Option<&OrbitIC> {
        self.orbit_ics
            .iter()
            .min_by(|a, b| a.stability().abs().total_cmp(&b.stability().abs()))
    }

    /// Orbits whose stability index satisfies `|stability| <= 2`.
    pub fn linearly_stable(&self) -> impl Iterator<Item = &OrbitIC> {
        self.orbit_ics.iter().filter(|ic| ic.is_linearly_stable())
    }
}

impl<'a> IntoIterator for &'a PeriodicOrbitFamily {
    type Item = &'a OrbitIC;
    type IntoIter = std::slice::Iter<'a, OrbitIC>;

    fn into_iter(self) -> Self::IntoIter {
        self.orbit_ics.iter()
    }
}

impl fmt::Display for PeriodicOrbitFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} family of {} (branch: {}), {} orbits",
            self.family,
            self.system.name,
            self.branch.as_deref().unwrap_or("-"),
            self.count
        )?;
        writeln!(f, "fields: {}", self.fields.iter().join(", "))?;
        writeln!(
            f,
            "jacobi in [{}, {}], period in [{}, {}], stability in [{}, {}]",
            self.limits.jacobi[0],
            self.limits.jacobi[1],
            self.limits.period[0],
            self.limits.period[1],
            self.limits.stability[0],
            self.limits.stability[1]
        )?;
        for ic in &self.orbit_ics {
            writeln!(f, "  {ic}")?;
        }
        Ok(())
    }
}
