use periodic_orbits::{get_orbits, OrbitQuery, PeriodicOrbitError};
use tracing_subscriber::EnvFilter;

/// Northern halo orbits around the Earth-Moon L2 point with a Jacobi constant in [3.1, 3.14].
fn main() -> Result<(), PeriodicOrbitError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let query = OrbitQuery::new("earth-moon", "halo")
        .with_libr(2)
        .with_branch("N")
        .with_jacobi_range(3.1, 3.14);

    let halo = get_orbits(&query)?;

    println!("{}", halo.system);
    println!();
    print!("{halo}");

    if let Some(best) = halo.most_stable() {
        let pos_km = halo.system.to_dimensional_position(best.pos());
        let period_days = halo.system.to_dimensional_time(best.period()) / 86_400.0;
        println!();
        println!(
            "most stable orbit: stability {:.4}, period {:.2} d, x0 = {:.0} km, z0 = {:.0} km",
            best.stability(),
            period_days,
            pos_km.x,
            pos_km.z
        );
    }
    Ok(())
}
