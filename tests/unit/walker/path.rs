use super::*;

fn path_from(cells: Vec<CellCoord>) -> CarvedPath {
    let points = cells
        .iter()
        .map(|c| Point::new(f64::from(c.col) * 10.0, f64::from(c.row) * 10.0))
        .collect();
    CarvedPath::new(
        cells,
        points,
        "#abcdef".to_owned(),
        PathStyle::Solid,
        4.0,
        Termination::Blocked,
    )
}

#[test]
fn accessors_expose_finalized_state() {
    let p = path_from(vec![CellCoord::new(0, 0), CellCoord::new(1, 0)]);
    assert_eq!(p.len(), 2);
    assert!(!p.is_empty());
    assert_eq!(p.color(), "#abcdef");
    assert_eq!(p.style(), PathStyle::Solid);
    assert_eq!(p.stroke_width(), 4.0);
    assert_eq!(p.termination(), Termination::Blocked);
    assert_eq!(p.points().len(), p.cells().len());
}

#[test]
fn contiguous_path_is_one_run() {
    let p = path_from(vec![
        CellCoord::new(0, 0),
        CellCoord::new(1, 0),
        CellCoord::new(1, 1),
    ]);
    let runs = p.runs();
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].len(), 3);
}

#[test]
fn wrap_seam_splits_runs() {
    // A toroidal walk stepping from the last column back to column zero.
    let p = path_from(vec![
        CellCoord::new(8, 2),
        CellCoord::new(9, 2),
        CellCoord::new(0, 2),
        CellCoord::new(1, 2),
    ]);
    let runs = p.runs();
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0].len(), 2);
    assert_eq!(runs[1].len(), 2);
    assert_eq!(runs[0][1].x, 90.0);
    assert_eq!(runs[1][0].x, 0.0);
}

#[test]
fn single_cell_path_is_one_short_run() {
    let p = path_from(vec![CellCoord::new(3, 3)]);
    let runs = p.runs();
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].len(), 1);
}
