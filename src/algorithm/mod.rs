/// Spanning-tree carving and loop injection
pub mod carving;
/// Node and corridor extraction
pub mod corridors;
/// Directional echo probes
pub mod echo;
/// Start and exit selection
pub mod endpoints;
/// Maze generation pipeline and the resulting maze
pub mod generator;
/// Hazard placement
pub mod hazards;
/// Ice assignment and slide precomputation
pub mod ice;
/// Breadth-first shortest paths and reachability
pub mod pathfinding;
/// Blind edge-marking solver
pub mod solver;
