//! Basic usage example for the vector primitives.
//!
//! Walks through construction, in-place arithmetic, normalization and
//! the rotation-in-basis operation across the three component kinds.

use cardo::{IntVector3, Vector2, Vector3, Vector3D};

fn main() {
    println!("Cardo Vector3 Example");
    println!("=====================");

    // Construction across the three component kinds.
    let mut position = Vector3::new(3.0_f32, 4.0_f32, 0.0_f32);
    let cell = IntVector3::new(1, 2, 3);
    let precise = Vector3D::new(0.1, 0.2, 0.3);
    println!("position: {:?}", position);
    println!("cell:     {:?}", cell);
    println!("precise:  {:?}", precise);

    // Length and normalization.
    println!("\n|position| = {}", position.length());
    let prior = position.norm();
    println!("normalized to {:?} (was length {})", position, prior);

    // In-place arithmetic: accumulate a scaled impulse.
    let mut velocity = Vector3::new(1.0_f32, 0.0_f32, 0.0_f32);
    velocity.add_scaled(&Vector3::new(0.0, 1.0, 0.0), 2.0);
    println!("\nvelocity after impulse: {:?}", velocity);

    // Cross product of the unit axes.
    let mut up = Vector3::new(1.0_f32, 0.0_f32, 0.0_f32);
    up.cross(&Vector3::new(0.0, 1.0, 0.0));
    println!("x cross y = {:?}", up);

    // Rotate within the xy-plane; z is preserved.
    let x_axis = Vector3::new(1.0_f32, 0.0_f32, 0.0_f32);
    let y_axis = Vector3::new(0.0, 1.0, 0.0);
    let mut spinner = Vector3::new(1.0_f32, 0.0_f32, 7.0_f32);
    spinner.rotate_in_basis(&x_axis, &y_axis, core::f32::consts::FRAC_PI_2);
    println!("\nquarter turn: {:?}", spinner);

    // Promote a planar point and snap it to a grid.
    let picked = Vector2::new(10.4_f32, 7.9_f32);
    let mut world = Vector3::<f32>::from_vec2(&picked);
    world.quantize(3.0);
    println!("picked {:?} lands on grid at {:?}", picked, world);

    // Per-frame damping toward rest.
    let mut drift = Vector3::new(2.0_f32, -1.5_f32, 0.25_f32);
    let step = Vector3::new(0.5, 0.5, 0.5);
    for frame in 1..=5 {
        drift.dampen(&step);
        println!("frame {}: drift = {:?}", frame, drift);
    }
}
