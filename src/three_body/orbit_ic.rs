//! # Periodic orbit initial condition
//!
//! [`OrbitIC`](crate::three_body::orbit_ic::OrbitIC) holds one row of the periodic orbits table:
//! the rotating-frame state `(x, y, z, vx, vy, vz)` at the start of the orbit and the invariants
//! reported with it (Jacobi constant, period, stability index).
//!
//! The derived vectors `pos`, `vel` and `state` are built once in
//! [`OrbitIC::new`](crate::three_body::orbit_ic::OrbitIC::new) and only exposed by reference, so
//! `state` is always `pos` followed by `vel`.

use std::fmt;

use nalgebra::{Vector3, Vector6};

use crate::constants::{Nondimensional, STABILITY_THRESHOLD};

/// Initial condition of one periodic orbit.
///
/// Units
/// -----
/// * position and velocity: nondimensional rotating frame.
/// * `jacobi`: nondimensional.
/// * `period`: units reported by the query (nondimensional unless `periodunits` says otherwise).
/// * `stability`: unitless.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitIC {
    jacobi: Nondimensional,
    period: f64,
    stability: f64,
    pos: Vector3<f64>,
    vel: Vector3<f64>,
    state: Vector6<f64>,
}

impl OrbitIC {
    /// Build an initial condition from the nine values of one table row.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        x: f64,
        y: f64,
        z: f64,
        vx: f64,
        vy: f64,
        vz: f64,
        jacobi: f64,
        period: f64,
        stability: f64,
    ) -> Self {
        OrbitIC {
            jacobi,
            period,
            stability,
            pos: Vector3::new(x, y, z),
            vel: Vector3::new(vx, vy, vz),
            state: Vector6::new(x, y, z, vx, vy, vz),
        }
    }

    pub fn x(&self) -> f64 {
        self.pos.x
    }

    pub fn y(&self) -> f64 {
        self.pos.y
    }

    pub fn z(&self) -> f64 {
        self.pos.z
    }

    pub fn vx(&self) -> f64 {
        self.vel.x
    }

    pub fn vy(&self) -> f64 {
        self.vel.y
    }

    pub fn vz(&self) -> f64 {
        self.vel.z
    }

    pub fn jacobi(&self) -> Nondimensional {
        self.jacobi
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    pub fn stability(&self) -> f64 {
        self.stability
    }

    /// Rotating-frame position `(x, y, z)`
    pub fn pos(&self) -> &Vector3<f64> {
        &self.pos
    }

    /// Rotating-frame velocity `(vx, vy, vz)`
    pub fn vel(&self) -> &Vector3<f64> {
        &self.vel
    }

    /// Full state `(x, y, z, vx, vy, vz)`
    pub fn state(&self) -> &Vector6<f64> {
        &self.state
    }

    /// Whether the stability index satisfies `|stability| <= 2`.
    ///
    /// This is the usual convention for linear stability, the service does not enforce it.
    pub fn is_linearly_stable(&self) -> bool {
        self.stability.abs() <= STABILITY_THRESHOLD
    }
}

impl fmt::Display for OrbitIC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Orbit IC: [{:.3} {:.3} {:.3} {:.3} {:.3} {:.3}]",
            self.state[0], self.state[1], self.state[2], self.state[3], self.state[4], self.state[5]
        )
    }
}
