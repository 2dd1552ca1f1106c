#![allow(dead_code)]
use std::cell::RefCell;

use approx::assert_relative_eq;
use periodic_orbits::{
    env_state::{HttpResponse, HttpTransport},
    OrbitIC, PeriodicOrbitError,
};

/// Transport serving one canned response and recording every query string it receives.
pub struct FixtureTransport {
    pub status: u16,
    pub body: String,
    pub calls: RefCell<Vec<Vec<(&'static str, String)>>>,
}

impl FixtureTransport {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        FixtureTransport {
            status,
            body: body.into(),
            calls: RefCell::new(vec![]),
        }
    }

    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }
}

impl HttpTransport for FixtureTransport {
    fn get(
        &self,
        _url: &str,
        params: &[(&'static str, String)],
    ) -> Result<HttpResponse, PeriodicOrbitError> {
        self.calls.borrow_mut().push(params.to_vec());
        Ok(HttpResponse {
            status: self.status,
            body: self.body.clone(),
        })
    }
}

pub fn read_fixture(name: &str) -> String {
    let path = format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("cannot read {path}: {e}"))
}

/// Replace the `data` table and `count` of a fixture with the given rows.
pub fn with_rows(fixture: &str, rows: &[Vec<f64>]) -> String {
    let mut json: serde_json::Value = serde_json::from_str(fixture).unwrap();
    json["count"] = serde_json::json!(rows.len());
    json["data"] = serde_json::json!(rows);
    json.to_string()
}

pub fn assert_row_matches(ic: &OrbitIC, row: &[f64], epsilon: f64) {
    for (actual, expected) in ic.state().iter().zip(&row[..6]) {
        assert_relative_eq!(*actual, *expected, epsilon = epsilon);
    }
    assert_relative_eq!(ic.jacobi(), row[6], epsilon = epsilon);
    assert_relative_eq!(ic.period(), row[7], epsilon = epsilon);
    assert_relative_eq!(ic.stability(), row[8], epsilon = epsilon);
}
