//! Scripted construction session: drags out a circle and a segment, then
//! prints the overlay text a host would display.
//!
//! Run with `cargo run --example construct`.

use sketch2d::construction::intersection_summary;
use sketch2d::math::Point2;
use sketch2d::GeometryEngine;

fn main() {
    let mut engine = GeometryEngine::new();

    // Circle: press at the center, drag outward, release at the rim.
    engine.on_pointer_down(Point2::new(0.0, 0.0));
    engine.on_pointer_move(Point2::new(0.3, 0.0));
    engine.on_pointer_up(Point2::new(0.5, 0.0));
    if let Some(circle) = engine.circle() {
        println!("{circle}");
    }

    // Segment: a horizontal chord through the circle.
    engine.on_pointer_down(Point2::new(-0.9, 0.2));
    engine.on_pointer_move(Point2::new(0.0, 0.2));
    engine.on_pointer_up(Point2::new(0.9, 0.2));
    if let Some(segment) = engine.segment() {
        println!("{segment}");
    }

    if let Some(points) = engine.intersections() {
        println!("{}", intersection_summary(points));
    }
}
