use stepstar_core::{Coord, Error, Grid, NodeId, Result, UNREACHABLE};

/// Walk parent links from `end` back to the parentless start node and
/// return the cells in start-to-end order.
///
/// Fails with [`Error::NoPathState`] if `end` has never been reached.
/// Does not mutate the grid.
pub fn reconstruct(grid: &Grid, end: NodeId) -> Result<Vec<Coord>> {
    if grid.node(end).g() == UNREACHABLE {
        return Err(Error::NoPathState);
    }
    let mut path = Vec::new();
    let mut cur = Some(end);
    while let Some(id) = cur {
        // Parent links form a tree rooted at the start; a longer walk
        // means the links were tampered with.
        if path.len() >= grid.len() {
            return Err(Error::NoPathState);
        }
        path.push(grid.coord(id));
        cur = grid.node(id).parent();
    }
    path.reverse();
    Ok(path)
}
