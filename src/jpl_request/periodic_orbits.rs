use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use nalgebra::Vector3;

use crate::{
    constants::ORBIT_IC_FIELDS,
    env_state::{HttpResponse, HttpTransport},
    orbit_family::{ApiSignature, OrbitLimits, PeriodicOrbitFamily},
    orbits_errors::PeriodicOrbitError,
    query::OrbitQuery,
    three_body::{orbit_ic::OrbitIC, system::System},
};

/// Top-level object returned by the periodic orbits API.
///
/// Every key except `filter` and `signature` is required, `branch` may be `null`.
/// The nested objects are kept as raw JSON and checked field by field afterwards.
#[derive(Debug, Deserialize)]
struct RawOrbitResponse {
    system: Map<String, Value>,
    family: String,
    #[serde(deserialize_with = "required_nullable")]
    branch: Option<String>,
    limits: Map<String, Value>,
    #[serde(default)]
    filter: Option<Value>,
    count: Value,
    fields: Vec<String>,
    data: Vec<Value>,
    #[serde(default)]
    signature: Option<ApiSignature>,
}

/// Accept `null` but still fail when the key is absent.
fn required_nullable<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)
}

/// Request the periodic orbits API for one query.
///
/// Argument
/// --------
/// * query: the query whose populated arguments form the query string
/// * transport: the HTTP transport, usually an [`crate::env_state::OrbitsEnv`]
/// * url: the endpoint of the service
///
/// Return
/// ------
/// * The raw JSON body of a successful response, or
///   [`PeriodicOrbitError::Http`] carrying the status and body of a failed one
pub(crate) fn request_orbits<T>(
    query: &OrbitQuery,
    transport: &T,
    url: &str,
) -> Result<String, PeriodicOrbitError>
where
    T: HttpTransport + ?Sized,
{
    let params = query.to_params();
    debug!(url, ?params, "requesting periodic orbits");
    check_status(transport.get(url, &params)?)
}

/// Async counterpart of [`request_orbits`] built on a [`reqwest::Client`].
#[cfg(feature = "async")]
pub(crate) async fn request_orbits_async(
    query: &OrbitQuery,
    client: &reqwest::Client,
    url: &str,
) -> Result<String, PeriodicOrbitError> {
    let params = query.to_params();
    debug!(url, ?params, "requesting periodic orbits");
    let response = client.get(url).query(&params).send().await?;
    let status = response.status().as_u16();
    let body = response.text().await?;
    check_status(HttpResponse { status, body })
}

/// Keep the body of a 2xx response, turn anything else into [`PeriodicOrbitError::Http`].
pub(crate) fn check_status(response: HttpResponse) -> Result<String, PeriodicOrbitError> {
    if response.is_success() {
        Ok(response.body)
    } else {
        warn!(status = response.status, "periodic orbits API returned an error status");
        Err(PeriodicOrbitError::Http {
            status: response.status,
            body: response.body,
        })
    }
}

/// Parse the JSON body of the periodic orbits API.
///
/// Argument
/// --------
/// * jpl_response: the raw body of a successful response
///
/// Return
/// ------
/// * The complete [`PeriodicOrbitFamily`], or
///     - [`PeriodicOrbitError::Decode`] if the body is not JSON or misses a top-level key
///     - [`PeriodicOrbitError::Schema`] if a record does not have the expected shape
pub(crate) fn deserialize_orbits(
    jpl_response: &str,
) -> Result<PeriodicOrbitFamily, PeriodicOrbitError> {
    let raw: RawOrbitResponse = serde_json::from_str(jpl_response)?;

    let system = parse_system(&raw.system)?;
    let limits = parse_limits(&raw.limits)?;
    let count = parse_count(&raw.count)?;
    let columns = column_indices(&raw.fields)?;

    let orbit_ics = raw
        .data
        .iter()
        .enumerate()
        .map(|(i, row)| parse_row(i, row, &columns))
        .collect::<Result<Vec<OrbitIC>, PeriodicOrbitError>>()?;

    if orbit_ics.len() != count {
        return Err(PeriodicOrbitError::Schema(format!(
            "count is {count} but data holds {} rows",
            orbit_ics.len()
        )));
    }
    debug!(family = %raw.family, system = %system.name, count, "periodic orbits parsed");

    Ok(PeriodicOrbitFamily {
        system,
        family: raw.family,
        branch: raw.branch,
        limits,
        filter: raw.filter,
        count,
        fields: raw.fields,
        orbit_ics,
        signature: raw.signature,
    })
}

/// Read a float given either as a JSON number or as a numeric string.
///
/// The service sends most of its numbers as strings, e.g. `"1.215058560962404E-2"`.
fn parse_number(value: &Value, name: &str) -> Result<f64, PeriodicOrbitError> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .ok_or_else(|| PeriodicOrbitError::Schema(format!("{name} is not a number: {value}")))
}

fn parse_array<const N: usize>(
    value: &Value,
    name: &str,
) -> Result<[f64; N], PeriodicOrbitError> {
    let items = value
        .as_array()
        .ok_or_else(|| PeriodicOrbitError::Schema(format!("{name} is not an array: {value}")))?;
    if items.len() != N {
        return Err(PeriodicOrbitError::Schema(format!(
            "{name} has {} components, expected {N}",
            items.len()
        )));
    }

    let mut out = [0.0; N];
    for (slot, item) in out.iter_mut().zip(items) {
        *slot = parse_number(item, name)?;
    }
    Ok(out)
}

fn field<'a>(
    object: &'a Map<String, Value>,
    parent: &str,
    key: &str,
) -> Result<&'a Value, PeriodicOrbitError> {
    object
        .get(key)
        .ok_or_else(|| PeriodicOrbitError::Schema(format!("{parent}.{key} is missing")))
}

fn libration_point(
    system: &Map<String, Value>,
    key: &str,
) -> Result<Vector3<f64>, PeriodicOrbitError> {
    let name = format!("system.{key}");
    let [x, y, z] = parse_array::<3>(field(system, "system", key)?, &name)?;
    Ok(Vector3::new(x, y, z))
}

fn parse_system(system: &Map<String, Value>) -> Result<System, PeriodicOrbitError> {
    let number =
        |key: &str| parse_number(field(system, "system", key)?, &format!("system.{key}"));

    let name = field(system, "system", "name")?
        .as_str()
        .ok_or_else(|| PeriodicOrbitError::Schema("system.name is not a string".into()))?
        .to_string();

    Ok(System {
        name,
        mass_ratio: number("mass_ratio")?,
        radius_secondary: number("radius_secondary")?,
        l1: libration_point(system, "L1")?,
        l2: libration_point(system, "L2")?,
        l3: libration_point(system, "L3")?,
        l4: libration_point(system, "L4")?,
        l5: libration_point(system, "L5")?,
        lunit: number("lunit")?,
        tunit: number("tunit")?,
    })
}

fn parse_limits(limits: &Map<String, Value>) -> Result<OrbitLimits, PeriodicOrbitError> {
    let range =
        |key: &str| parse_array::<2>(field(limits, "limits", key)?, &format!("limits.{key}"));

    Ok(OrbitLimits {
        jacobi: range("jacobi")?,
        period: range("period")?,
        stability: range("stability")?,
    })
}

fn parse_count(count: &Value) -> Result<usize, PeriodicOrbitError> {
    let parsed = match count {
        Value::Number(n) => n.as_u64().and_then(|c| usize::try_from(c).ok()),
        Value::String(s) => s.trim().parse::<usize>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| PeriodicOrbitError::Schema(format!("count is not an integer: {count}")))
}

/// Position of each name of [`ORBIT_IC_FIELDS`] in the `fields` list of the response.
///
/// The list must hold exactly those nine names, in any order.
fn column_indices(fields: &[String]) -> Result<[usize; 9], PeriodicOrbitError> {
    if fields.len() != ORBIT_IC_FIELDS.len() {
        return Err(PeriodicOrbitError::Schema(format!(
            "fields has {} entries, expected {:?}",
            fields.len(),
            ORBIT_IC_FIELDS
        )));
    }

    let mut columns = [0; 9];
    for (slot, expected) in columns.iter_mut().zip(ORBIT_IC_FIELDS) {
        *slot = fields.iter().position(|f| f == expected).ok_or_else(|| {
            PeriodicOrbitError::Schema(format!("fields does not contain {expected}"))
        })?;
    }
    Ok(columns)
}

fn parse_row(
    index: usize,
    row: &Value,
    columns: &[usize; 9],
) -> Result<OrbitIC, PeriodicOrbitError> {
    let values = parse_array::<9>(row, &format!("data[{index}]"))?;
    let col = |i: usize| values[columns[i]];

    Ok(OrbitIC::new(
        col(0),
        col(1),
        col(2),
        col(3),
        col(4),
        col(5),
        col(6),
        col(7),
        col(8),
    ))
}
