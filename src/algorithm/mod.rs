/// Neighbour discovery between tiles sharing a border
pub mod adjacency;
/// Placement of tiles into a square grid
pub mod assembly;
/// Unique assignment by elimination of forced choices
pub mod elimination;
