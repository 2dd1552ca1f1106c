//! # Three-body system descriptor
//!
//! [`System`](crate::three_body::system::System) gathers the physical and dynamical constants of the
//! circular restricted three-body problem returned with every periodic orbits query: the mass
//! ratio, the radius of the secondary, the five libration points and the characteristic units.
//!
//! ## Units
//!
//! - Positions (libration points, radius): **nondimensional**, rotating frame
//! - `lunit`: **kilometers** per nondimensional length unit
//! - `tunit`: **seconds** per nondimensional time unit
//!
//! The units are chosen so that the distance between the two primaries and their mutual
//! orbital period over 2π are both 1.

use std::fmt;

use nalgebra::Vector3;

use crate::constants::{Kilometer, Nondimensional, Second};

/// Constants of a circular restricted three-body system.
///
/// Units
/// -----
/// * `mass_ratio`: unitless, `m2 / (m1 + m2)`.
/// * `radius_secondary`: nondimensional.
/// * `l1` .. `l5`: nondimensional rotating-frame coordinates.
/// * `lunit`: km.
/// * `tunit`: s.
#[derive(Debug, Clone, PartialEq)]
pub struct System {
    pub name: String,
    pub mass_ratio: Nondimensional,
    pub radius_secondary: Nondimensional,
    pub l1: Vector3<f64>,
    pub l2: Vector3<f64>,
    pub l3: Vector3<f64>,
    pub l4: Vector3<f64>,
    pub l5: Vector3<f64>,
    pub lunit: Kilometer,
    pub tunit: Second,
}

impl System {
    /// Position of a libration point.
    ///
    /// Arguments
    /// ---------
    /// * `point`: the libration point index, 1 to 5
    ///
    /// Return
    /// ------
    /// * The rotating-frame position, or `None` if `point` is not in 1..=5
    pub fn libration_point(&self, point: u8) -> Option<&Vector3<f64>> {
        match point {
            1 => Some(&self.l1),
            2 => Some(&self.l2),
            3 => Some(&self.l3),
            4 => Some(&self.l4),
            5 => Some(&self.l5),
            _ => None,
        }
    }

    /// Nondimensional mass of the primary, `1 - μ`.
    pub fn primary_mass_ratio(&self) -> Nondimensional {
        1.0 - self.mass_ratio
    }

    /// Convert a nondimensional rotating-frame position into kilometers.
    pub fn to_dimensional_position(&self, position: &Vector3<f64>) -> Vector3<f64> {
        position * self.lunit
    }

    /// Convert a nondimensional velocity into km/s.
    pub fn to_dimensional_velocity(&self, velocity: &Vector3<f64>) -> Vector3<f64> {
        velocity * (self.lunit / self.tunit)
    }

    /// Convert a nondimensional duration into seconds.
    pub fn to_dimensional_time(&self, time: Nondimensional) -> Second {
        time * self.tunit
    }
}

impl fmt::Display for System {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Three-body system: {}", self.name)?;
        writeln!(f, "-------------------------------------------")?;
        writeln!(f, "  mu    (mass ratio)          = {:.10e}", self.mass_ratio)?;
        writeln!(f, "  R2    (secondary radius)    = {:.6e}", self.radius_secondary)?;
        for (i, point) in [&self.l1, &self.l2, &self.l3, &self.l4, &self.l5]
            .iter()
            .enumerate()
        {
            writeln!(
                f,
                "  L{}                          = [{:.6}, {:.6}, {:.6}]",
                i + 1,
                point.x,
                point.y,
                point.z
            )?;
        }
        writeln!(f, "  lunit (length unit)         = {:.3} km", self.lunit)?;
        write!(f, "  tunit (time unit)           = {:.3} s", self.tunit)
    }
}
