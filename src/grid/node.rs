//! Grid cells and their pathfinding cost fields

/// Index of a node in the grid's backing array.
///
/// Search algorithms store parent back-pointers as arena indices instead of
/// node references, so path reconstruction never borrows the whole grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeIndex(pub usize);

/// One cell of the grid lattice.
///
/// Carries walkability plus the cost fields a search fills in: `g_cost`
/// (cost from start), `h_cost` (heuristic estimate), and the derived
/// `f_cost`. Nodes are created once at grid generation and live as long as
/// the grid; only `walkable` and the cost fields mutate.
#[derive(Debug, Clone)]
pub struct Node {
    /// Grid x coordinate
    pub x: i32,
    /// Grid y coordinate
    pub y: i32,
    /// Whether agents may traverse this cell
    pub walkable: bool,
    /// Path cost from the search start (infinity until visited)
    pub g_cost: f32,
    /// Heuristic estimate to the search goal
    pub h_cost: f32,
    /// Back-pointer for path reconstruction, owned by the search that set it
    pub parent: Option<NodeIndex>,
}

impl Node {
    /// Create a walkable node with unvisited cost fields.
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            walkable: true,
            g_cost: f32::INFINITY,
            h_cost: 0.0,
            parent: None,
        }
    }

    /// Total estimated cost through this node.
    #[must_use]
    pub fn f_cost(&self) -> f32 {
        self.g_cost + self.h_cost
    }

    /// Reset cost fields and the parent back-pointer before a new search.
    pub fn reset_costs(&mut self) {
        self.g_cost = f32::INFINITY;
        self.h_cost = 0.0;
        self.parent = None;
    }
}
