//! # Periodic orbits query
//!
//! This module defines [`OrbitQuery`](crate::query::OrbitQuery), the set of arguments sent to the
//! periodic orbits API, and [`PeriodUnit`](crate::query::PeriodUnit), the unit of the period filters.
//!
//! Only the populated filters are forwarded to the service: an unset filter is omitted from the
//! query string instead of being sent empty.
//!
//! ## Arguments
//!
//! | key           | meaning                                                                   |
//! |---------------|---------------------------------------------------------------------------|
//! | `sys`         | three-body system as `primary-secondary` in lower case (`earth-moon`)      |
//! | `family`      | halo, vertical, axial, lyapunov, longp, short, butterfly, dragonfly, resonant, dro, dpo, lpo |
//! | `libr`        | libration point, required for lyapunov/halo (1,2,3), longp/short (4,5), axial/vertical (1 to 5) |
//! | `branch`      | N/S for halo, dragonfly, butterfly; E/W for lpo; `pq` for resonant (`12` for 1:2) |
//! | `periodmin`   | minimum period (inclusive), in `periodunits`                               |
//! | `periodmax`   | maximum period (inclusive), in `periodunits`                               |
//! | `periodunits` | `s`, `h`, `d` or `TU` (nondimensional)                                     |
//! | `jacobimin`   | minimum Jacobi constant (inclusive)                                        |
//! | `jacobimax`   | maximum Jacobi constant (inclusive)                                        |
//! | `stabmin`     | minimum stability index (inclusive)                                        |
//! | `stabmax`     | maximum stability index (inclusive)                                        |
//!
//! The requirements on `libr` and `branch` are not checked here, the service reports them.
//!
//! ## Example
//!
//! ```rust
//! use periodic_orbits::query::OrbitQuery;
//!
//! let query = OrbitQuery::new("earth-moon", "halo")
//!     .with_libr(2)
//!     .with_branch("N")
//!     .with_jacobi_range(3.1, 3.14);
//!
//! assert_eq!(query.to_params().len(), 6);
//! ```

use std::{fmt, str::FromStr};

use crate::{constants::LibrationPoint, orbits_errors::PeriodicOrbitError};

/// Unit of the `periodmin` / `periodmax` filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodUnit {
    Seconds,
    Hours,
    Days,
    /// Nondimensional time unit of the system
    Nondimensional,
}

impl PeriodUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodUnit::Seconds => "s",
            PeriodUnit::Hours => "h",
            PeriodUnit::Days => "d",
            PeriodUnit::Nondimensional => "TU",
        }
    }
}

impl fmt::Display for PeriodUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PeriodUnit {
    type Err = PeriodicOrbitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "s" => Ok(PeriodUnit::Seconds),
            "h" => Ok(PeriodUnit::Hours),
            "d" => Ok(PeriodUnit::Days),
            "TU" => Ok(PeriodUnit::Nondimensional),
            _ => Err(PeriodicOrbitError::InvalidPeriodUnit(s.to_string())),
        }
    }
}

/// Arguments of one periodic orbits request.
///
/// `sys` and `family` are always sent, every other field only when it is `Some`.
///
/// See also
/// --------
/// * [`OrbitQuery::to_params`] – Query string pairs sent to the service.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrbitQuery {
    pub sys: String,
    pub family: String,
    pub libr: Option<LibrationPoint>,
    pub branch: Option<String>,
    pub periodmin: Option<f64>,
    pub periodmax: Option<f64>,
    pub periodunits: Option<PeriodUnit>,
    pub jacobimin: Option<f64>,
    pub jacobimax: Option<f64>,
    pub stabmin: Option<f64>,
    pub stabmax: Option<f64>,
}

impl OrbitQuery {
    /// Create a query with only the required arguments.
    ///
    /// Arguments
    /// ---------
    /// * `sys`: the three-body system, e.g. `earth-moon`, `mars-phobos`, `sun-earth`
    /// * `family`: the orbit family name, e.g. `halo`
    pub fn new(sys: impl Into<String>, family: impl Into<String>) -> Self {
        OrbitQuery {
            sys: sys.into(),
            family: family.into(),
            ..Default::default()
        }
    }

    /// Build a query from the full positional argument list, unset filters given as `None`.
    #[allow(clippy::too_many_arguments)]
    pub fn from_args(
        sys: impl Into<String>,
        family: impl Into<String>,
        libr: Option<LibrationPoint>,
        branch: Option<String>,
        periodmin: Option<f64>,
        periodmax: Option<f64>,
        periodunits: Option<PeriodUnit>,
        jacobimin: Option<f64>,
        jacobimax: Option<f64>,
        stabmin: Option<f64>,
        stabmax: Option<f64>,
    ) -> Self {
        OrbitQuery {
            sys: sys.into(),
            family: family.into(),
            libr,
            branch,
            periodmin,
            periodmax,
            periodunits,
            jacobimin,
            jacobimax,
            stabmin,
            stabmax,
        }
    }

    pub fn with_libr(mut self, libr: LibrationPoint) -> Self {
        self.libr = Some(libr);
        self
    }

    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    pub fn with_period_min(mut self, periodmin: f64) -> Self {
        self.periodmin = Some(periodmin);
        self
    }

    pub fn with_period_max(mut self, periodmax: f64) -> Self {
        self.periodmax = Some(periodmax);
        self
    }

    /// Set both period bounds and their unit.
    pub fn with_period_range(mut self, min: f64, max: f64, unit: PeriodUnit) -> Self {
        self.periodmin = Some(min);
        self.periodmax = Some(max);
        self.periodunits = Some(unit);
        self
    }

    pub fn with_period_units(mut self, unit: PeriodUnit) -> Self {
        self.periodunits = Some(unit);
        self
    }

    pub fn with_jacobi_min(mut self, jacobimin: f64) -> Self {
        self.jacobimin = Some(jacobimin);
        self
    }

    pub fn with_jacobi_max(mut self, jacobimax: f64) -> Self {
        self.jacobimax = Some(jacobimax);
        self
    }

    pub fn with_jacobi_range(self, min: f64, max: f64) -> Self {
        self.with_jacobi_min(min).with_jacobi_max(max)
    }

    pub fn with_stab_min(mut self, stabmin: f64) -> Self {
        self.stabmin = Some(stabmin);
        self
    }

    pub fn with_stab_max(mut self, stabmax: f64) -> Self {
        self.stabmax = Some(stabmax);
        self
    }

    pub fn with_stab_range(self, min: f64, max: f64) -> Self {
        self.with_stab_min(min).with_stab_max(max)
    }

    /// Query string pairs for this request.
    ///
    /// Return
    /// ------
    /// * `sys` and `family` followed by every populated filter, in declaration order.
    ///   Unset filters produce no pair at all.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let optional = [
            ("libr", self.libr.map(|v| v.to_string())),
            ("branch", self.branch.clone()),
            ("periodmin", self.periodmin.map(|v| v.to_string())),
            ("periodmax", self.periodmax.map(|v| v.to_string())),
            ("periodunits", self.periodunits.map(|v| v.to_string())),
            ("jacobimin", self.jacobimin.map(|v| v.to_string())),
            ("jacobimax", self.jacobimax.map(|v| v.to_string())),
            ("stabmin", self.stabmin.map(|v| v.to_string())),
            ("stabmax", self.stabmax.map(|v| v.to_string())),
        ];

        [("sys", self.sys.clone()), ("family", self.family.clone())]
            .into_iter()
            .chain(
                optional
                    .into_iter()
                    .filter_map(|(key, value)| value.map(|v| (key, v))),
            )
            .collect()
    }
}
