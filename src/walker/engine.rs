use kurbo::Point;

use crate::{
    domain::grid::{CellCoord, Direction, Domain},
    foundation::error::{SketchError, SketchResult},
    layout::mapper::CellMapper,
    sketch::context::SimContext,
    sketch::palette::Palette,
    walker::config::WalkerConfig,
    walker::path::{CarvedPath, Termination},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum WalkerState {
    Spawned,
    Walking,
    Blocked,
    BudgetExhausted,
    Finalized,
}

struct Walker {
    cell: CellCoord,
    heading: Direction,
    cells: Vec<CellCoord>,
    points: Vec<Point>,
    state: WalkerState,
}

/// The path-carving engine.
///
/// Stateless; all mutable state lives in the domain and the walkers it
/// creates and consumes within a single [`carve`](WalkerEngine::carve) call.
pub struct WalkerEngine;

impl WalkerEngine {
    /// Run the one-shot carve phase: spawn `walker_count` walkers and walk
    /// each to termination, claiming cells and recording world points.
    ///
    /// A walker prefers its current heading with probability `heading_bias`
    /// and otherwise steps to a uniformly chosen open neighbor. Neighbors are
    /// always enumerated in the fixed clockwise order of
    /// [`Direction::CLOCKWISE`] (cardinal subset when `flat`), so a given
    /// seed reproduces the same paths. When no open spawn cell remains the
    /// spawn is skipped; a fully excluded or occupied domain yields an empty
    /// result rather than an error.
    #[tracing::instrument(skip(domain, config, mapper, palette, ctx), fields(walkers = config.walker_count))]
    pub fn carve(
        domain: &mut Domain,
        config: &WalkerConfig,
        mapper: &CellMapper,
        palette: &Palette,
        ctx: &mut SimContext,
    ) -> SketchResult<Vec<CarvedPath>> {
        config.validate()?;
        if mapper.resolution() != domain.resolution() {
            return Err(SketchError::domain(
                "mapper resolution does not match domain resolution",
            ));
        }

        let directions: &[Direction] = if config.flat {
            &Direction::CARDINAL
        } else {
            &Direction::CLOCKWISE
        };
        let stroke_width = config.size * mapper.cell_extent();

        let mut paths = Vec::with_capacity(config.walker_count as usize);
        for index in 0..config.walker_count {
            let Some(mut walker) = spawn(domain, mapper, directions, ctx) else {
                tracing::debug!(walker = index, "no open cell left; skipping spawn");
                continue;
            };
            let termination = walk(&mut walker, domain, config, mapper, directions, ctx);
            debug_assert_eq!(walker.state, WalkerState::Finalized);
            paths.push(CarvedPath::new(
                walker.cells,
                walker.points,
                palette.color_for(paths.len()).to_owned(),
                config.path_style,
                stroke_width,
                termination,
            ));
        }
        Ok(paths)
    }
}

/// Claim a uniformly chosen open cell, or `None` when the domain has none.
fn spawn(
    domain: &mut Domain,
    mapper: &CellMapper,
    directions: &[Direction],
    ctx: &mut SimContext,
) -> Option<Walker> {
    let open = domain.open_cells();
    if open.is_empty() {
        return None;
    }
    let cell = open[ctx.rng().next_index(open.len())];
    let heading = directions[ctx.rng().next_index(directions.len())];
    domain.claim(cell);
    Some(Walker {
        cell,
        heading,
        cells: vec![cell],
        points: vec![mapper.map(cell)],
        state: WalkerState::Spawned,
    })
}

fn walk(
    walker: &mut Walker,
    domain: &mut Domain,
    config: &WalkerConfig,
    mapper: &CellMapper,
    directions: &[Direction],
    ctx: &mut SimContext,
) -> Termination {
    walker.state = WalkerState::Walking;
    let budget = config.step_size as usize;

    let termination = loop {
        if walker.cells.len() >= budget {
            walker.state = WalkerState::BudgetExhausted;
            break Termination::BudgetExhausted;
        }

        let mut candidates: Vec<(Direction, CellCoord)> = Vec::with_capacity(directions.len());
        for &dir in directions {
            let Some(next) = domain.neighbor(walker.cell, dir) else {
                continue;
            };
            if !domain.is_open(next) {
                continue;
            }
            if config.self_avoiding && rejoins_own_path(domain, walker, next) {
                continue;
            }
            candidates.push((dir, next));
        }

        if candidates.is_empty() {
            walker.state = WalkerState::Blocked;
            break Termination::Blocked;
        }

        let (dir, next) = if ctx.rng().next_f64_01() < config.heading_bias {
            let ahead = candidates.iter().find(|(d, _)| *d == walker.heading);
            match ahead {
                Some(&hit) => hit,
                None => candidates[ctx.rng().next_index(candidates.len())],
            }
        } else {
            candidates[ctx.rng().next_index(candidates.len())]
        };

        domain.claim(next);
        walker.heading = dir;
        walker.cell = next;
        walker.cells.push(next);
        walker.points.push(mapper.map(next));
    };

    walker.state = WalkerState::Finalized;
    termination
}

/// Whether `next` touches any cell of the walker's own path other than its
/// current head. Adjacency is domain-aware, so it respects toroidal wrap.
fn rejoins_own_path(domain: &Domain, walker: &Walker, next: CellCoord) -> bool {
    for &dir in &Direction::CLOCKWISE {
        let Some(adj) = domain.neighbor(next, dir) else {
            continue;
        };
        if adj != walker.cell && walker.cells.contains(&adj) {
            return true;
        }
    }
    false
}

#[cfg(test)]
#[path = "../../tests/unit/walker/engine.rs"]
mod tests;
