#![allow(dead_code)]

pub mod trace_capture;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rigidmath::{PI, Quaternion, RotationMatrix, Vector3f};
use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Routes `log` records into `tracing` and prints everything allowed by `RUST_LOG`.
pub fn init_logging() {
    INIT.call_once(|| {
        tracing_log::LogTracer::init().ok();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    });
}

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(0x5EED_1234)
}

pub fn random_unit_vector(rng: &mut StdRng) -> Vector3f {
    loop {
        let v = Vector3f::new(
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
        );
        let len = v.length();
        if len > 0.1 && len <= 1.0 {
            return v.normalized();
        }
    }
}

pub fn random_quaternion(rng: &mut StdRng) -> Quaternion {
    let axis = random_unit_vector(rng);
    Quaternion::from_axis_angle(axis, rng.random_range(-PI..PI))
}

pub fn random_rotation(rng: &mut StdRng) -> RotationMatrix {
    RotationMatrix::from_euler(
        rng.random_range(-PI..PI),
        rng.random_range(-PI..PI),
        rng.random_range(-PI..PI),
    )
}

pub fn random_point(rng: &mut StdRng) -> Vector3f {
    Vector3f::new(
        rng.random_range(-100.0..100.0),
        rng.random_range(-100.0..100.0),
        rng.random_range(-100.0..100.0),
    )
}
