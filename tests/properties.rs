mod common;

use common::trace_capture::TraceCaptureLayer;
use common::{
    init_logging, random_point, random_quaternion, random_rotation, random_unit_vector, seeded_rng,
};
use pretty_assertions::assert_eq;
use rand::Rng;
use rand::rngs::StdRng;
use rigidmath::{
    HALF_PI, MathError, Matrix4x3, Matrix4x4, PI, Quaternion, RotationAxis, RotationMatrix,
    TWO_PI, Vector3f, Vector4f, slerp,
};
use testresult::TestResult;
use tracing_subscriber::layer::SubscriberExt;

const ROUNDS: usize = 200;

const PROBES: [Vector3f; 3] = [
    Vector3f::UNIT_X,
    Vector3f::UNIT_Y,
    Vector3f::new(0.3, -0.5, 0.8),
];

fn same_action(a: &RotationMatrix, b: &RotationMatrix) -> bool {
    PROBES.iter().all(|&p| (p * *a).approx_eq(&(p * *b)))
}

#[test]
fn rotation_matrix_quaternion_round_trip() {
    init_logging();
    let mut rng = seeded_rng();
    for _ in 0..ROUNDS {
        let r = random_rotation(&mut rng);
        let q = Quaternion::from(r);
        let back = RotationMatrix::from(q);
        assert!(same_action(&r, &back), "{r:?} -> {q:?} -> {back:?}");
    }
}

#[test]
fn negated_quaternion_is_the_same_rotation() {
    let mut rng = seeded_rng();
    for _ in 0..ROUNDS {
        let axis = random_unit_vector(&mut rng);
        let angle = rng_angle(&mut rng);
        let q = Quaternion::from_axis_angle(axis, angle);
        // a full extra turn flips the sign of every component
        let negated = Quaternion::from_axis_angle(axis, angle + TWO_PI);
        assert!(rigidmath::are_equal(q.dot(&negated), -1.0, 0.001));
        assert!(same_action(
            &RotationMatrix::from(q),
            &RotationMatrix::from(negated)
        ));
        let p = random_point(&mut rng);
        assert!((p * q).approx_eq_within(&(p * negated), 0.001));
    }
}

#[test]
fn quaternion_product_matches_matrix_product() {
    let mut rng = seeded_rng();
    for _ in 0..ROUNDS {
        let qa = random_quaternion(&mut rng);
        let qb = random_quaternion(&mut rng);
        let combined = RotationMatrix::from(qa * qb);
        let separate = RotationMatrix::from(qb) * RotationMatrix::from(qa);
        assert!(same_action(&combined, &separate));
    }
}

#[test]
fn quaternion_rotation_agrees_with_inverse_matrix() {
    let mut rng = seeded_rng();
    for _ in 0..ROUNDS {
        let q = random_quaternion(&mut rng);
        let v = random_point(&mut rng);
        let by_quaternion = v * q;
        let by_matrix = v * RotationMatrix::from(q).inverse();
        assert!(
            by_quaternion.approx_eq_within(&by_matrix, 0.001),
            "{by_quaternion} != {by_matrix}"
        );
        assert!(rigidmath::are_equal(by_quaternion.length(), v.length(), 0.001));
    }
}

#[test]
fn composed_rotations_stay_orthonormal() {
    let mut rng = seeded_rng();
    let mut r = RotationMatrix::IDENTITY;
    for _ in 0..50 {
        r *= random_rotation(&mut rng);
        assert!(r.measure_creep().abs() < 0.001, "{}", r.measure_creep());
    }
    assert!(rigidmath::are_equal(r.determinant(), 1.0, 0.001));
}

#[test]
fn orthogonalize_reduces_known_drift() {
    let mut rng = seeded_rng();
    for _ in 0..20 {
        let r = random_rotation(&mut rng);
        let drifted_y = r.y_axis() + 0.02 * r.x_axis();
        let mut drifted = RotationMatrix::from_rows(r.x_axis(), drifted_y, r.z_axis());
        let before = drifted.measure_creep();
        drifted.orthogonalize();
        let after = drifted.measure_creep();
        assert!(after.abs() < before.abs(), "{before} -> {after}");
    }
}

#[test]
fn orthogonalize_reports_creep_as_trace_event() {
    let capture = TraceCaptureLayer::default();
    let subscriber = tracing_subscriber::registry().with(capture.clone());
    tracing::subscriber::with_default(subscriber, || {
        let mut r = RotationMatrix::from_euler(0.1, 0.2, 0.3);
        r.orthogonalize();
    });

    let events = capture.events();
    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.message, "orthogonalized rotation matrix");
    assert!(event.values.contains_key("creep_before"));
    assert!(event.values.contains_key("creep_after"));
}

#[test]
fn matrix_inverse_identities() {
    init_logging();
    let mut rng = seeded_rng();
    for _ in 0..ROUNDS {
        let r = random_rotation(&mut rng);
        assert!((r * r.inverse()).approx_eq(&RotationMatrix::IDENTITY));

        let scale = Vector3f::new(
            rng_scale(&mut rng),
            rng_scale(&mut rng),
            rng_scale(&mut rng),
        );
        let m3 = Matrix4x3::from_rotation_scaled(&r, scale, random_point(&mut rng));
        assert!(
            (m3 * m3.inverse()).approx_eq_within(&Matrix4x3::IDENTITY, 0.001),
            "{m3:?}"
        );
        assert!((m3.inverse() * m3).approx_eq_within(&Matrix4x3::IDENTITY, 0.001));

        let m4 = Matrix4x4::from(m3);
        assert!((m4 * m4.inverse()).approx_eq_within(&Matrix4x4::IDENTITY, 0.001));
    }
}

fn rng_scale(rng: &mut StdRng) -> f32 {
    rng.random_range(0.5..2.0)
}

fn rng_angle(rng: &mut StdRng) -> f32 {
    rng.random_range(-PI..PI)
}

#[test]
fn try_inverse_of_regular_matrix() -> TestResult {
    let r = RotationMatrix::from_principal_axis(RotationAxis::X, 0.7);
    let m = Matrix4x3::from_rotation_scaled(&r, Vector3f::new(2.0, 3.0, 4.0), Vector3f::UNIT_Z);
    let inv = m.try_inverse()?;
    let p = Vector3f::new(1.0, -2.0, 5.0);
    assert!((p * m * inv).approx_eq(&p));

    let inv4 = Matrix4x4::from(m).try_inverse()?;
    assert_eq!(Matrix4x3::from(inv4), inv);
    Ok(())
}

#[test]
fn try_inverse_of_singular_matrix() {
    let squashed = Matrix4x3::from_rotation_scaled(
        &RotationMatrix::IDENTITY,
        Vector3f::new(1.0, 0.0, 1.0),
        Vector3f::ZERO,
    );
    assert_eq!(
        squashed.try_inverse(),
        Err(MathError::SingularMatrix { determinant: 0.0 })
    );
}

#[test]
fn normalize_is_idempotent() {
    let mut rng = seeded_rng();
    for _ in 0..ROUNDS {
        let v = random_unit_vector(&mut rng);
        assert!(v.normalized().approx_eq(&v));

        let q = random_quaternion(&mut rng);
        assert!(q.normalized().approx_eq(&q));
        assert!(q.normalized().normalized().approx_eq(&q.normalized()));

        let h = Vector4f::direction(v);
        assert!(h.normalized().approx_eq(&h));
    }
}

#[test]
fn slerp_boundaries() {
    let mut rng = seeded_rng();
    for _ in 0..ROUNDS {
        let a = random_quaternion(&mut rng);
        let b = random_quaternion(&mut rng);
        assert!(slerp(&a, &b, 0.0).approx_eq(&a));

        assert_eq!(slerp(&a, &b, 1.0), b);
        assert_eq!(slerp(&a, &b, 1.5), b);
        assert_eq!(slerp(&a, &b, -0.5), a);

        assert!(slerp(&a, &a, 0.37).approx_eq(&a));
        assert!(a.slerp(&a, 0.9).approx_eq(&a));
    }
}

#[test]
fn slerp_halfway_about_fixed_axis() {
    let a = Quaternion::IDENTITY;
    let b = Quaternion::from_axis_angle(Vector3f::UNIT_Y, HALF_PI);
    let mid = slerp(&a, &b, 0.5);
    assert!(mid.approx_eq(&Quaternion::from_axis_angle(Vector3f::UNIT_Y, HALF_PI / 2.0)));
    assert!(rigidmath::are_equal(mid.rotation_angle(), HALF_PI / 2.0, 0.0001));
}

#[test]
fn cross_product_scenario() {
    assert_eq!(
        Vector3f::new(1.0, 2.0, 3.0).cross(&Vector3f::new(0.0, 0.0, 1.0)),
        Vector3f::new(2.0, -1.0, 0.0)
    );
}

#[test]
fn half_turn_about_y_scenario() {
    let q = Quaternion::from_axis_angle(Vector3f::new(0.0, 1.0, 0.0), PI);
    let rotated = Vector3f::new(1.0, 0.0, 0.0) * q;
    assert!(rotated.approx_eq(&Vector3f::new(-1.0, 0.0, 0.0)), "{rotated}");
}

#[test]
fn identity_scenario() {
    assert_eq!(RotationMatrix::IDENTITY.determinant(), 1.0);
    assert_eq!(Matrix4x3::IDENTITY.inverse(), Matrix4x3::IDENTITY);
    assert_eq!(Matrix4x4::IDENTITY.inverse(), Matrix4x4::IDENTITY);
}

#[test]
fn point_and_direction_through_matrix4x4() {
    let mut rng = seeded_rng();
    for _ in 0..ROUNDS {
        let m = Matrix4x4::from_rotation_scaled(
            &random_rotation(&mut rng),
            Vector3f::new(1.0, 2.0, 3.0),
            random_point(&mut rng),
        );
        let p = random_point(&mut rng);
        let as_point = Vector4f::point(p) * m;
        let as_direction = Vector4f::direction(p) * m;
        assert_eq!(as_point.w, 1.0);
        assert_eq!(as_direction.w, 0.0);
        assert!(as_point.truncate().approx_eq_within(&(p * m), 0.001));
        assert!(
            as_direction
                .truncate()
                .approx_eq_within(&m.transform_vector(p), 0.001)
        );
    }
}
