//! End-to-end drive of the scripting boundary: spawn a guard, steer it
//! through the façades, stamp out a copy, clean up.
//!
//! Run with `RUST_LOG=ember_host=debug` to see the host-side call log.

use std::f32::consts::FRAC_PI_2;
use std::sync::Arc;

use anyhow::Result;
use ember_host::SceneHost;
use ember_math::{Transform3D, Vec3};
use ember_script::EntityHandle;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("ember_host=debug".parse()?))
        .init();

    let host = Arc::new(SceneHost::new());
    host.spawn("guard", Transform3D::IDENTITY);

    // Script side: resolve the guard by name and move it around.
    let guard = EntityHandle::find_by_name(host.clone(), "guard")
        .ok_or_else(|| anyhow::anyhow!("guard not found"))?;
    let transform = guard.transform();

    transform.set_translation(Vec3::new(0.0, 0.0, -10.0))?;
    transform.set_euler_angles(Vec3::new(0.0, FRAC_PI_2, 0.0))?;
    info!(
        position = ?transform.translation()?,
        facing = ?transform.forward()?,
        "guard posted"
    );

    // Stamp out a second guard a few metres to the side.
    let backup = guard
        .instantiate(Vec3::new(4.0, 0.0, -10.0))
        .ok_or_else(|| anyhow::anyhow!("instantiate failed"))?;
    info!(id = %backup.id(), position = ?backup.transform().translation()?, "backup spawned");

    // Relieve the original guard; the handle's clones go stale with it.
    let stale = guard.clone();
    guard.destroy();
    if let Err(err) = stale.transform().translation() {
        info!(%err, "original guard is gone, as expected");
    }

    Ok(())
}
