//! Shortest-ladder search over a built word graph

mod pathfinder;

pub use pathfinder::{PathFinder, find_ladder};
