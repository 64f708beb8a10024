use std::collections::HashSet;

use log::trace;
use ndarray::Array2;
use petgraph::Incoming;

use crate::board::WatchGraph;
use crate::cell::Cell;
use crate::location::Location;

/// Push the color at `source` through every cell transitively watching it.
///
/// The walk is a level-synchronous breadth-first cascade over the watcher
/// relation. Every cell in the current frontier takes the source color; its
/// own watchers join the next frontier only while their color still differs
/// from the source color. The watcher graph may contain cycles (two cells can
/// watch each other), and that color check is what stops a cycle from being
/// walked twice: a member recolored in one round no longer qualifies when the
/// cycle comes back around. Each cell is therefore recolored at most once and
/// the cascade runs in time linear in the board area.
///
/// A cell whose color already matches is still assigned when it sits in the
/// frontier; only expansion beyond it is skipped.
pub(crate) fn run(cells: &mut Array2<Cell>, watch: &WatchGraph, source: Location) {
    let source_color = cells[source.as_index()].color;

    let mut frontier: HashSet<Location> = watch.neighbors_directed(source, Incoming).collect();
    let mut rounds = 0usize;
    let mut recolored = 0usize;

    while !frontier.is_empty() {
        rounds += 1;
        let mut next = HashSet::new();

        for watcher in frontier {
            cells[watcher.as_index()].color = source_color;
            recolored += 1;

            for upstream in watch.neighbors_directed(watcher, Incoming) {
                if cells[upstream.as_index()].color != source_color {
                    next.insert(upstream);
                }
            }
        }

        frontier = next;
    }

    if recolored > 0 {
        trace!("cascade from {:?} recolored {} cells over {} rounds", source, recolored, rounds);
    }
}
