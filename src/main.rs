// main.rs
//
// Minimal example of each entry point of decomposed.

use decomposed::float_types::{FRAC_PI_4, Real};
use decomposed::interpolate::lerp;
use decomposed::{Interpolate, Skew, Transform3D, TransformError, TransformOps, decompose, recompose, try_decompose};
use nalgebra::{Matrix4, Vector3, Vector4};

fn main() -> Result<(), TransformError> {
    // 1) Build a transform by composing elementary transforms
    let m = Matrix4::<Real>::identity()
        .translated_by(2.0, 4.0, 6.0)
        .scaled_by(1.0, 2.0, 3.0)
        .rotated_by_angle_axis(FRAC_PI_4, Vector3::x())?;
    println!("composed matrix:{m}");

    // 2) decompose()
    let d = decompose(&m);
    println!("translation  = {:?}", d.translation.as_slice());
    println!("scale        = {:?}", d.scale.as_slice());
    println!("rotation     = {:?}", d.rotation.coords.as_slice());
    println!("euler angles = {:?}", d.euler_angles().as_slice());
    println!("skew         = {:?}", d.skew);
    println!("perspective  = {:?}", d.perspective.as_slice());

    // 3) recompose()
    let back = recompose(&d);
    println!("recompose error = {:e}", (back - m).norm());

    // 4) lerp() between the identity and the composed transform
    let start = decompose(&Matrix4::identity());
    for step in 0..=4 {
        let t = step as Real / 4.0;
        let frame = lerp(&start, &d, t);
        println!(
            "t = {t:.2}: translation {:?}, angle {:.4}",
            frame.translation.as_slice(),
            frame.rotation.angle()
        );
    }

    // 5) Replace single components
    let moved = m.with_translation(Vector3::new(-1.0, 0.0, 0.0));
    let sheared = moved.skewed(Skew::new(0.25, 0.0, 0.0));
    let projected = sheared.applying_perspective(Vector4::new(0.0, 0.0, -1.0 / 500.0, 1.0));
    println!("perspective of projected = {:?}", projected.perspective().as_slice());

    // 6) Degenerate input
    match try_decompose(&Matrix4::zeros()) {
        Ok(d) => println!("unexpected decomposition: {d:?}"),
        Err(e) => println!("zero matrix: {e}"),
    }

    // 7) Platform-style adapter
    let a = Transform3D::make_rotation(FRAC_PI_4, 0.0, 0.0, 1.0);
    let b = Transform3D::make_translation(10.0, 0.0, 0.0);
    let ab = Transform3D::concat(&a, &b);
    println!("concat = {:?}", ab.to_array());
    println!("halfway = {:?}", Transform3D::identity().interpolate(&ab, 0.5).to_f32_array());

    Ok(())
}
