//! Grid substrate for tile-based pathfinding
//!
//! Provides the node lattice, world-to-grid mapping, neighbour queries, and
//! walkability editing. No search algorithm lives here: the cost fields are
//! the substrate a search (A*, Dijkstra) layers on top of.

mod events;
mod lattice;
mod node;
mod picking;

pub use events::{GridEvent, GridEvents, TileVisual};
pub use lattice::{Grid, GridConfig, Neighbours};
pub use node::{Node, NodeIndex};
pub use picking::{RayPicker, toggle_picked};
