//! Pick and drag example
//!
//! Simulates a mouse press on the x arrow of a translate gizmo, followed by a
//! few frames of dragging, without any window or renderer.
//!
//! Run with `cargo run --example pick_and_drag --features tracing` to see the
//! library's log output.

use gizmo_kit::*;
use std::f32::consts::FRAC_PI_2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Handle {
    TranslateX,
    TranslateY,
    TranslateZ,
}

fn main() -> GizmoResult<()> {
    logging::init_tracing();
    println!("gizmo-kit pick and drag example");

    let viewport = Vec2::new(1280.0, 720.0);
    let view = Mat4::look_at_rh(Vec3::new(4.0, 3.0, 8.0), Vec3::ZERO, Vec3::Y);
    let projection = Mat4::perspective_rh_gl(50f32.to_radians(), viewport.x / viewport.y, 0.1, 100.0);
    let view_projection = projection * view;
    let (inv_view, inv_projection) = (view.inverse(), projection.inverse());

    let mut position = Vec3::ZERO;
    let arrow = Arrow3d::default();
    let handles = [
        (Handle::TranslateX, Mat4::from_rotation_y(-FRAC_PI_2), Vec3::X),
        (Handle::TranslateY, Mat4::from_rotation_x(FRAC_PI_2), Vec3::Y),
        (Handle::TranslateZ, Mat4::from_rotation_y(std::f32::consts::PI), Vec3::Z),
    ];

    // Geometry is generated once and reused every frame
    let vertices = generate_arrow_3d_geometry(&arrow, 16)?;
    println!("arrow mesh: {} vertices", vertices.len());

    // Press on the x shaft, 40% of the way along it
    let gizmo_world = Mat4::from_translation(position);
    let scale = compute_scale(gizmo_world, arrow.size, view_projection, viewport);
    let target = position + Vec3::X * arrow.shaft_length * scale * 0.4;
    let press_pixel = to_pixel(view_projection, viewport, target);
    let press_ray = screen_to_ray(inv_view, inv_projection, viewport, press_pixel)?;

    let picked = pick_closest(handles.map(|(handle, orientation, _)| {
        let world = gizmo_world * orientation;
        (handle, intersect_arrow_3d(press_ray, &arrow, world, view_projection, viewport))
    }));
    let Some((handle, distance)) = picked else {
        println!("nothing under the cursor");
        return Ok(());
    };
    println!("picked {handle:?} at distance {distance:.3}");

    let Some(&(_, _, axis)) = handles.iter().find(|(h, _, _)| *h == handle) else {
        return Ok(());
    };

    // Drag the mouse to the right over a few frames, snapping to 0.25 units
    let config = ManipulationConfig::default().with_snap(0.25);
    let initial_position = position;
    for frame in 1..=5 {
        let pixel = press_pixel + Vec2::new(25.0 * frame as f32, 0.0);
        let current_ray = screen_to_ray(inv_view, inv_projection, viewport, pixel)?;
        position = translate_along_line(axis, initial_position, press_ray, current_ray, initial_position, &config);
        println!("frame {frame}: position {position}");
    }

    Ok(())
}

fn to_pixel(view_projection: Mat4, viewport: Vec2, point: Vec3) -> Vec2 {
    let ndc = view_projection.project_point3(point);
    (Vec2::new(ndc.x, ndc.y) + Vec2::ONE) * 0.5 * viewport
}
