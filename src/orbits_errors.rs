use thiserror::Error;

#[derive(Error, Debug)]
pub enum PeriodicOrbitError {
    #[error("HTTP error {status} from the periodic orbits API: {body}")]
    Http { status: u16, body: String },

    #[error("Unable to decode the periodic orbits response: {0}")]
    Decode(String),

    #[error("Periodic orbits response does not match the expected schema: {0}")]
    Schema(String),

    #[error("HTTP ureq error: {0}")]
    Transport(#[from] ureq::Error),

    #[cfg(feature = "async")]
    #[error("HTTP reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Invalid period unit: {0} (expected one of s, h, d, TU)")]
    InvalidPeriodUnit(String),
}

impl From<serde_json::Error> for PeriodicOrbitError {
    fn from(err: serde_json::Error) -> Self {
        PeriodicOrbitError::Decode(err.to_string())
    }
}

impl PartialEq for PeriodicOrbitError {
    fn eq(&self, other: &Self) -> bool {
        use PeriodicOrbitError::*;
        match (self, other) {
            (
                Http {
                    status: s1,
                    body: b1,
                },
                Http {
                    status: s2,
                    body: b2,
                },
            ) => s1 == s2 && b1 == b2,
            (Decode(a), Decode(b)) => a == b,
            (Schema(a), Schema(b)) => a == b,
            (InvalidPeriodUnit(a), InvalidPeriodUnit(b)) => a == b,

            // transport errors carry no comparable payload
            (Transport(_), Transport(_)) => true,
            #[cfg(feature = "async")]
            (Reqwest(_), Reqwest(_)) => true,

            _ => false,
        }
    }
}
