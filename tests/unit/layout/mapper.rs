use super::*;

const EPS: f64 = 1e-9;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPS
}

#[test]
fn rejects_bad_inputs() {
    let r = Resolution::new(4, 4).unwrap();
    assert!(CellMapper::new(r, 0.1, 0.0, 100.0).is_err());
    assert!(CellMapper::new(r, 0.1, 100.0, f64::NAN).is_err());
    assert!(CellMapper::new(r, 0.5, 100.0, 100.0).is_err());
    assert!(CellMapper::new(r, -0.01, 100.0, 100.0).is_err());
    assert!(CellMapper::new(r, 0.0, 100.0, 100.0).is_ok());
}

#[test]
fn mapping_is_pure() {
    let m = CellMapper::new(Resolution::new(7, 5).unwrap(), 0.05, 320.0, 240.0).unwrap();
    let cell = CellCoord::new(3, 2);
    assert_eq!(m.map(cell), m.map(cell));
}

#[test]
fn corners_respect_the_padding_fraction() {
    let m = CellMapper::new(Resolution::new(8, 6).unwrap(), 0.125, 400.0, 200.0).unwrap();
    // Padding is a fraction of the smaller dimension: 0.125 * 200 = 25 px.
    let first = m.map(CellCoord::new(0, 0));
    let last = m.map(CellCoord::new(7, 5));
    assert!(close(first.x, 25.0));
    assert!(close(first.y, 25.0));
    assert!(close(last.x, 375.0));
    assert!(close(last.y, 175.0));
    assert!(close(m.padding_px(), 25.0));
}

#[test]
fn interior_cells_are_evenly_spaced() {
    let m = CellMapper::new(Resolution::new(5, 5).unwrap(), 0.1, 100.0, 100.0).unwrap();
    let step = m.map(CellCoord::new(1, 0)).x - m.map(CellCoord::new(0, 0)).x;
    for col in 1..5 {
        let a = m.map(CellCoord::new(col - 1, 0)).x;
        let b = m.map(CellCoord::new(col, 0)).x;
        assert!(close(b - a, step));
    }
    assert!(close(step, 20.0));
}

#[test]
fn single_column_maps_to_center() {
    let m = CellMapper::new(Resolution::new(1, 4).unwrap(), 0.1, 200.0, 100.0).unwrap();
    assert!(close(m.map(CellCoord::new(0, 0)).x, 100.0));
    assert!(close(m.map(CellCoord::new(0, 3)).y, 90.0));
}

#[test]
fn cell_extent_tracks_the_tighter_axis() {
    let m = CellMapper::new(Resolution::new(10, 2).unwrap(), 0.0, 100.0, 100.0).unwrap();
    assert!(close(m.cell_extent(), 10.0));
}
