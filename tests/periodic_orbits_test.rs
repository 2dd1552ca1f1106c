mod common;

use common::{assert_row_matches, read_fixture, with_rows, FixtureTransport};
use nalgebra::Vector3;
use periodic_orbits::{OrbitQuery, PeriodicOrbitError, PeriodicOrbits};

const HALO: &str = "earth_moon_halo_l2_n.json";

fn halo_query() -> OrbitQuery {
    OrbitQuery::new("earth-moon", "halo")
        .with_libr(2)
        .with_branch("N")
        .with_jacobi_range(3.1, 3.14)
}

#[test]
fn test_halo_fixture() {
    let transport = FixtureTransport::ok(read_fixture(HALO));
    let client = PeriodicOrbits::with_transport(
        transport,
        "https://ssd-api.jpl.nasa.gov/periodic_orbits.api",
    );

    let halo = client.get_orbits(&halo_query()).unwrap();

    assert_eq!(halo.family, "halo");
    assert_eq!(halo.branch.as_deref(), Some("N"));
    assert_eq!(halo.count, 4);
    assert_eq!(halo.orbit_ics.len(), halo.count);
    assert_eq!(
        halo.fields,
        vec!["x", "y", "z", "vx", "vy", "vz", "jacobi", "period", "stability"]
    );
    assert_eq!(halo.limits.jacobi, [3.005756134788957, 3.152365445806924]);
    assert_eq!(halo.limits.stability[1], 1058.801161785344);
    assert_eq!(halo.filter.as_ref().unwrap()["jacobimax"], "3.14");
    assert_eq!(
        halo.signature.as_ref().unwrap().source,
        "NASA/JPL Three-Body Periodic Orbit API"
    );

    let system = &halo.system;
    assert_eq!(system.name, "earth-moon");
    assert_eq!(system.mass_ratio, 1.215058560962404e-2);
    assert_eq!(system.l2, Vector3::new(1.155682165444884, 0.0, 0.0));
    assert_eq!(system.l5.y, -0.8660254037844386);
    assert_eq!(system.lunit, 384400.0);

    for ic in &halo {
        assert!(ic.jacobi() >= 3.1 && ic.jacobi() <= 3.14);
        assert!(ic.is_linearly_stable());
        assert_eq!(ic.state().fixed_rows::<3>(0), *ic.pos());
        assert_eq!(ic.state().fixed_rows::<3>(3), *ic.vel());
    }
    assert_eq!(halo.most_stable().unwrap().stability(), 1.016321189302267);
}

#[test]
fn test_only_set_filters_are_sent() {
    let transport = FixtureTransport::ok(read_fixture(HALO));
    let client = PeriodicOrbits::with_transport(transport, "http://localhost/api");
    client.get_orbits(&halo_query()).unwrap();

    let calls = client.transport().calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0],
        vec![
            ("sys", "earth-moon".to_string()),
            ("family", "halo".to_string()),
            ("libr", "2".to_string()),
            ("branch", "N".to_string()),
            ("jacobimin", "3.1".to_string()),
            ("jacobimax", "3.14".to_string()),
        ]
    );
}

#[test]
fn test_rows_map_onto_states_in_order() {
    let fixture = read_fixture(HALO);
    for n in [0usize, 1, 7, 25] {
        let rows: Vec<Vec<f64>> = (0..n)
            .map(|i| {
                let k = i as f64;
                vec![
                    1.0 + k * 1e-3,
                    -k * 1e-4,
                    0.05 - k * 1e-3,
                    k * 2e-4,
                    -0.17 + k * 1e-3,
                    -k * 3e-4,
                    3.15 - k * 1e-3,
                    3.4 - k * 1e-2,
                    1.0 + k,
                ]
            })
            .collect();

        let client = PeriodicOrbits::with_transport(
            FixtureTransport::ok(with_rows(&fixture, &rows)),
            "http://localhost/api",
        );
        let fam = client.get_orbits(&halo_query()).unwrap();

        assert_eq!(fam.count, n);
        assert_eq!(fam.orbit_ics.len(), n);
        for (ic, row) in fam.orbit_ics.iter().zip(&rows) {
            assert_row_matches(ic, row, 1e-12);
        }
    }
}

#[test]
fn test_http_errors() {
    for status in [404, 500] {
        let body = read_fixture("http_400_body.json");
        let client = PeriodicOrbits::with_transport(
            FixtureTransport::new(status, body.clone()),
            "http://localhost/api",
        );
        assert_eq!(
            client.get_orbits(&halo_query()),
            Err(PeriodicOrbitError::Http { status, body })
        );
    }
}

#[test]
fn test_missing_data_is_decode_error() {
    let mut json: serde_json::Value = serde_json::from_str(&read_fixture(HALO)).unwrap();
    json.as_object_mut().unwrap().remove("data");

    let client = PeriodicOrbits::with_transport(
        FixtureTransport::ok(json.to_string()),
        "http://localhost/api",
    );
    let err = client.get_orbits(&halo_query()).unwrap_err();
    assert!(matches!(err, PeriodicOrbitError::Decode(ref msg) if msg.contains("data")));
}

#[test]
fn test_wrong_arity_is_schema_error() {
    let fixture = read_fixture(HALO);
    for len in [8, 10] {
        let rows = vec![vec![1.0; len]];
        let client = PeriodicOrbits::with_transport(
            FixtureTransport::ok(with_rows(&fixture, &rows)),
            "http://localhost/api",
        );
        assert_eq!(
            client.get_orbits(&halo_query()),
            Err(PeriodicOrbitError::Schema(format!(
                "data[0] has {len} components, expected 9"
            )))
        );
    }
}

#[test]
#[ignore]
fn test_live_halo_request() {
    let halo = periodic_orbits::get_orbits(&halo_query()).unwrap();
    assert_eq!(halo.family, "halo");
    assert_eq!(halo.system.name, "earth-moon");
    assert_eq!(halo.orbit_ics.len(), halo.count);
    assert!(halo
        .iter()
        .all(|ic| ic.jacobi() >= 3.1 && ic.jacobi() <= 3.14));
}

#[cfg(feature = "async")]
#[tokio::test]
#[ignore]
async fn test_live_halo_request_async() {
    use periodic_orbits::env_state::ClientConfig;

    let halo = periodic_orbits::get_orbits_async(&halo_query(), &ClientConfig::default())
        .await
        .unwrap();
    assert_eq!(halo.orbit_ics.len(), halo.count);
}
