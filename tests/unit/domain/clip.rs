use super::*;

use crate::{domain::grid::Resolution, layout::mapper::CellMapper};

fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<Point> {
    vec![
        Point::new(x0, y0),
        Point::new(x1, y0),
        Point::new(x1, y1),
        Point::new(x0, y1),
    ]
}

fn mapper(resolution: Resolution) -> CellMapper {
    CellMapper::new(resolution, 0.1, 100.0, 100.0).unwrap()
}

#[test]
fn polygon_containment_is_even_odd_and_boundary_inclusive() {
    let poly = square(0.0, 0.0, 10.0, 10.0);
    assert!(polygon_contains(&poly, Point::new(5.0, 5.0)));
    assert!(!polygon_contains(&poly, Point::new(15.0, 5.0)));
    assert!(!polygon_contains(&poly, Point::new(-0.1, 5.0)));
    // Edge and vertex count as inside.
    assert!(polygon_contains(&poly, Point::new(0.0, 5.0)));
    assert!(polygon_contains(&poly, Point::new(10.0, 10.0)));
}

#[test]
fn clip_needs_three_points() {
    let resolution = Resolution::new(4, 4).unwrap();
    let domain = Domain::new(resolution, false);
    let result = domain.clip_with_world_coords(
        &[Point::new(0.0, 0.0), Point::new(1.0, 1.0)],
        &mapper(resolution),
    );
    assert!(result.is_err());
}

#[test]
fn clip_rejects_mismatched_mapper() {
    let domain = Domain::new(Resolution::new(4, 4).unwrap(), false);
    let other = mapper(Resolution::new(5, 5).unwrap());
    assert!(
        domain
            .clip_with_world_coords(&square(0.0, 0.0, 100.0, 100.0), &other)
            .is_err()
    );
}

#[test]
fn polygon_outside_canvas_excludes_every_cell() {
    let resolution = Resolution::new(6, 6).unwrap();
    let domain = Domain::new(resolution, false);
    let clipped = domain
        .clip_with_world_coords(&square(500.0, 500.0, 600.0, 600.0), &mapper(resolution))
        .unwrap();
    assert_eq!(clipped.open_cell_count(), 0);
    assert!(clipped.open_cells().is_empty());
}

#[test]
fn covering_polygon_keeps_every_cell() {
    let resolution = Resolution::new(6, 6).unwrap();
    let domain = Domain::new(resolution, false);
    let clipped = domain
        .clip_with_world_coords(&square(-1.0, -1.0, 101.0, 101.0), &mapper(resolution))
        .unwrap();
    assert_eq!(clipped.open_cell_count(), 36);
}

#[test]
fn half_plane_polygon_excludes_half_the_grid() {
    let resolution = Resolution::new(4, 4).unwrap();
    let m = mapper(resolution);
    let domain = Domain::new(resolution, false);
    // Covers the left half of the canvas only, between the two middle
    // columns (columns land at x = 10, 36.66.., 63.33.., 90).
    let clipped = domain
        .clip_with_world_coords(&square(0.0, 0.0, 50.0, 100.0), &m)
        .unwrap();
    assert_eq!(clipped.open_cell_count(), 8);
    for cell in clipped.open_cells() {
        assert!(m.map(cell).x <= 50.0);
    }
}

#[test]
fn original_domain_is_untouched_by_clipping() {
    let resolution = Resolution::new(3, 3).unwrap();
    let domain = Domain::new(resolution, false);
    let _clipped = domain
        .clip_with_world_coords(&square(500.0, 500.0, 600.0, 600.0), &mapper(resolution))
        .unwrap();
    assert_eq!(domain.open_cell_count(), 9);
}
