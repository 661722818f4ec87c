//! The node lattice and its queries

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::grid::events::{GridEvent, GridEvents, TileVisual};
use crate::grid::node::{Node, NodeIndex};

/// Grid dimensions and scale, loadable from config.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GridConfig {
    /// Width in cells
    pub width: u32,
    /// Height in cells
    pub height: u32,
    /// Cell size in world units
    pub cell_size: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            cell_size: 1.0,
        }
    }
}

/// A rectangular, fully populated lattice of [`Node`]s.
///
/// Every node's `(x, y)` matches its position in the backing array. World
/// coordinates map to the grid on the XZ plane: cell `(x, y)` sits at
/// `(x * cell_size, 0, y * cell_size)`.
///
/// Walkability edits go through [`Grid::set_walkable`], which also notifies
/// the rendering collaborator via the grid's event queue.
#[derive(Debug)]
pub struct Grid {
    width: i32,
    height: i32,
    cell_size: f32,
    /// Row-major: index of (x, y) is `y * width + x`
    nodes: Vec<Node>,
    /// Visual-state notifications for the renderer
    events: GridEvents,
}

impl Grid {
    /// Create a grid with every cell walkable and cost fields unvisited.
    ///
    /// Allocation is eager: all `width * height` nodes exist up front.
    #[must_use]
    pub fn new(width: u32, height: u32, cell_size: f32) -> Self {
        let (width, height) = (width as i32, height as i32);
        let mut nodes = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                nodes.push(Node::new(x, y));
            }
        }

        log::debug!("Generated {}x{} grid (cell size {})", width, height, cell_size);

        Self {
            width,
            height,
            cell_size,
            nodes,
            events: GridEvents::new(),
        }
    }

    /// Create a grid from a [`GridConfig`].
    #[must_use]
    pub fn from_config(config: &GridConfig) -> Self {
        Self::new(config.width, config.height, config.cell_size)
    }

    /// Width in cells.
    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in cells.
    #[must_use]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Cell size in world units.
    #[must_use]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Bounds-checked node lookup.
    ///
    /// Returns `None` outside `[0, width) x [0, height)` rather than failing.
    #[must_use]
    pub fn node(&self, x: i32, y: i32) -> Option<&Node> {
        self.index_of(x, y).map(|idx| &self.nodes[idx.0])
    }

    /// Bounds-checked mutable node lookup.
    #[must_use]
    pub fn node_mut(&mut self, x: i32, y: i32) -> Option<&mut Node> {
        self.index_of(x, y).map(|idx| &mut self.nodes[idx.0])
    }

    /// Arena index of the node at `(x, y)`, if in bounds.
    #[must_use]
    pub fn index_of(&self, x: i32, y: i32) -> Option<NodeIndex> {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return None;
        }
        Some(NodeIndex((y * self.width + x) as usize))
    }

    /// Node at a previously obtained arena index.
    #[must_use]
    pub fn node_at(&self, index: NodeIndex) -> &Node {
        &self.nodes[index.0]
    }

    /// Resolve a world position to the node whose cell it falls in.
    ///
    /// Divides `world.x` and `world.z` by the cell size and rounds to the
    /// nearest integer; ties at `.5` round away from zero (`f32::round`).
    /// Returns `None` off the grid.
    #[must_use]
    pub fn node_at_world(&self, world: Vec3) -> Option<&Node> {
        let x = (world.x / self.cell_size).round() as i32;
        let y = (world.z / self.cell_size).round() as i32;
        self.node(x, y)
    }

    /// World position of cell `(x, y)` on the XZ plane.
    #[must_use]
    pub fn world_position(&self, x: i32, y: i32) -> Vec3 {
        Vec3::new(x as f32 * self.cell_size, 0.0, y as f32 * self.cell_size)
    }

    /// Lazily iterate the neighbours of cell `(x, y)`.
    ///
    /// Orthogonal neighbours come first, in the order right, left, up, down,
    /// with out-of-bounds entries skipped; those items are always `Some`.
    /// With `allow_diagonals`, the four diagonal slots follow *unfiltered*:
    /// at the grid edge they are yielded as `None` and consumers must skip
    /// them. The asymmetry is long-standing behavior that downstream search
    /// code tolerates; it is kept rather than normalized.
    #[must_use]
    pub fn neighbours(&self, x: i32, y: i32, allow_diagonals: bool) -> Neighbours<'_> {
        Neighbours {
            grid: self,
            x,
            y,
            allow_diagonals,
            step: 0,
        }
    }

    /// Set a cell's walkability and notify the renderer.
    ///
    /// Pushes a [`GridEvent::TileVisual`] for the rendering collaborator to
    /// swap the tile's appearance. Out-of-bounds coordinates are a no-op.
    pub fn set_walkable(&mut self, x: i32, y: i32, walkable: bool) {
        let Some(node) = self.index_of(x, y).map(|idx| &mut self.nodes[idx.0]) else {
            return;
        };
        node.walkable = walkable;

        let visual = if walkable {
            TileVisual::Walkable
        } else {
            TileVisual::Blocked
        };
        self.events.push(GridEvent::TileVisual { x, y, visual });
    }

    /// Flip a cell's walkability. Out-of-bounds coordinates are a no-op.
    pub fn toggle_walkable(&mut self, x: i32, y: i32) {
        if let Some(walkable) = self.node(x, y).map(|n| n.walkable) {
            self.set_walkable(x, y, !walkable);
        }
    }

    /// Reset every node's cost fields before a new search.
    pub fn reset_costs(&mut self) {
        for node in &mut self.nodes {
            node.reset_costs();
        }
    }

    /// Iterate all nodes in row-major order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Visual-state notifications for the rendering collaborator.
    #[must_use]
    pub fn events(&self) -> &GridEvents {
        &self.events
    }

    /// Mutable access to the event queue (for the frame-boundary swap).
    #[must_use]
    pub fn events_mut(&mut self) -> &mut GridEvents {
        &mut self.events
    }
}

/// Lazy neighbour iterator returned by [`Grid::neighbours`].
///
/// Items are `Option<&Node>`; see [`Grid::neighbours`] for why diagonal
/// slots can be `None`.
#[derive(Debug)]
pub struct Neighbours<'a> {
    grid: &'a Grid,
    x: i32,
    y: i32,
    allow_diagonals: bool,
    step: usize,
}

/// Orthogonal offsets: right, left, up, down.
const ORTHOGONAL: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
/// Diagonal offsets, yielded without bounds filtering.
const DIAGONAL: [(i32, i32); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

impl<'a> Iterator for Neighbours<'a> {
    type Item = Option<&'a Node>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let step = self.step;
            self.step += 1;

            if step < ORTHOGONAL.len() {
                let (dx, dy) = ORTHOGONAL[step];
                match self.grid.node(self.x + dx, self.y + dy) {
                    // Out-of-bounds orthogonal neighbours are skipped entirely
                    None => continue,
                    some => return Some(some),
                }
            }

            if self.allow_diagonals && step < ORTHOGONAL.len() + DIAGONAL.len() {
                let (dx, dy) = DIAGONAL[step - ORTHOGONAL.len()];
                return Some(self.grid.node(self.x + dx, self.y + dy));
            }

            return None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_lookup_in_bounds() {
        let grid = Grid::new(10, 10, 1.0);

        for (x, y) in [(0, 0), (9, 9), (3, 7)] {
            let node = grid.node(x, y).unwrap();
            assert_eq!(node.x, x);
            assert_eq!(node.y, y);
            assert!(node.walkable);
        }
    }

    #[test]
    fn test_node_lookup_out_of_bounds() {
        let grid = Grid::new(10, 10, 1.0);

        for (x, y) in [(-1, 0), (0, -1), (10, 0), (0, 10), (-5, 20)] {
            assert!(grid.node(x, y).is_none(), "({x}, {y}) should be None");
        }
    }

    #[test]
    fn test_coordinates_match_array_position() {
        let grid = Grid::new(4, 3, 2.0);

        for y in 0..3 {
            for x in 0..4 {
                let idx = grid.index_of(x, y).unwrap();
                let node = grid.node_at(idx);
                assert_eq!((node.x, node.y), (x, y));
            }
        }
    }

    #[test]
    fn test_world_to_node_round_to_nearest() {
        let grid = Grid::new(10, 10, 1.0);

        let node = grid.node_at_world(Vec3::new(3.0, 0.0, 4.0)).unwrap();
        assert_eq!((node.x, node.y), (3, 4));

        let node = grid.node_at_world(Vec3::new(2.49, 0.0, 2.51)).unwrap();
        assert_eq!((node.x, node.y), (2, 3));
    }

    #[test]
    fn test_world_to_node_ties_round_away_from_zero() {
        let grid = Grid::new(10, 10, 1.0);

        let node = grid.node_at_world(Vec3::new(2.5, 0.0, 3.5)).unwrap();
        assert_eq!((node.x, node.y), (3, 4));

        // -0.5 rounds to -1, which is off the grid
        assert!(grid.node_at_world(Vec3::new(-0.5, 0.0, 0.0)).is_none());
    }

    #[test]
    fn test_world_to_node_respects_cell_size() {
        let grid = Grid::new(10, 10, 2.0);

        let node = grid.node_at_world(Vec3::new(6.1, 0.0, 3.9)).unwrap();
        assert_eq!((node.x, node.y), (3, 2));
    }

    #[test]
    fn test_world_position_mapping() {
        let grid = Grid::new(10, 10, 1.5);
        assert_eq!(grid.world_position(2, 4), Vec3::new(3.0, 0.0, 6.0));
    }

    #[test]
    fn test_interior_node_has_four_orthogonal_neighbours() {
        let grid = Grid::new(10, 10, 1.0);

        let neighbours: Vec<_> = grid.neighbours(5, 5, false).collect();
        assert_eq!(neighbours.len(), 4);
        assert!(neighbours.iter().all(Option::is_some));
    }

    #[test]
    fn test_corner_node_has_two_orthogonal_neighbours() {
        let grid = Grid::new(10, 10, 1.0);

        let neighbours: Vec<_> = grid.neighbours(0, 0, false).collect();
        assert_eq!(neighbours.len(), 2);
        assert!(neighbours.iter().all(Option::is_some));
    }

    #[test]
    fn test_corner_diagonals_include_none_entries() {
        let grid = Grid::new(10, 10, 1.0);

        let neighbours: Vec<_> = grid.neighbours(0, 0, true).collect();
        // 2 orthogonal (filtered) + 4 diagonal slots (unfiltered)
        assert_eq!(neighbours.len(), 6);

        let some = neighbours.iter().filter(|n| n.is_some()).count();
        let none = neighbours.iter().filter(|n| n.is_none()).count();
        // Only (1, 1) exists diagonally from the corner
        assert_eq!(some, 3);
        assert_eq!(none, 3);
    }

    #[test]
    fn test_interior_diagonals_all_present() {
        let grid = Grid::new(10, 10, 1.0);

        let neighbours: Vec<_> = grid.neighbours(5, 5, true).collect();
        assert_eq!(neighbours.len(), 8);
        assert!(neighbours.iter().all(Option::is_some));
    }

    #[test]
    fn test_neighbour_order_is_right_left_up_down() {
        let grid = Grid::new(10, 10, 1.0);

        let coords: Vec<_> = grid
            .neighbours(5, 5, false)
            .map(|n| n.map(|n| (n.x, n.y)).unwrap())
            .collect();
        assert_eq!(coords, vec![(6, 5), (4, 5), (5, 6), (5, 4)]);
    }

    #[test]
    fn test_toggle_twice_restores_and_notifies_twice() {
        let mut grid = Grid::new(10, 10, 1.0);

        grid.toggle_walkable(2, 3);
        assert!(!grid.node(2, 3).unwrap().walkable);

        grid.toggle_walkable(2, 3);
        assert!(grid.node(2, 3).unwrap().walkable);

        assert_eq!(grid.events().pending_count(), 2);

        grid.events_mut().swap();
        let events: Vec<_> = grid.events().iter().collect();
        assert!(matches!(
            events[0],
            GridEvent::TileVisual {
                x: 2,
                y: 3,
                visual: TileVisual::Blocked
            }
        ));
        assert!(matches!(
            events[1],
            GridEvent::TileVisual {
                x: 2,
                y: 3,
                visual: TileVisual::Walkable
            }
        ));
    }

    #[test]
    fn test_set_walkable_out_of_bounds_is_noop() {
        let mut grid = Grid::new(5, 5, 1.0);

        grid.set_walkable(-1, 2, false);
        grid.set_walkable(5, 5, false);

        assert_eq!(grid.events().pending_count(), 0);
    }

    #[test]
    fn test_reset_costs_across_grid() {
        let mut grid = Grid::new(5, 5, 1.0);

        let parent = grid.index_of(0, 0).unwrap();
        let node = grid.node_mut(3, 3).unwrap();
        node.g_cost = 7.0;
        node.h_cost = 2.0;
        node.parent = Some(parent);

        grid.reset_costs();

        let node = grid.node(3, 3).unwrap();
        assert!(node.g_cost.is_infinite());
        assert_eq!(node.h_cost, 0.0);
        assert!(node.parent.is_none());
    }
}
