use gridstar_core::{Cell, Grid};

use crate::error::{Endpoint, SearchError};

/// Reject endpoints that would make a search pointless.
///
/// Checks run start before goal: out of bounds, then blocked, then (when
/// `reject_surrounded` is set and the endpoints differ) surrounded by
/// blocked or out-of-bounds cells.
pub fn check_endpoints(
    grid: &Grid,
    start: Cell,
    goal: Cell,
    reject_surrounded: bool,
) -> Result<(), SearchError> {
    let endpoints = [(Endpoint::Start, start), (Endpoint::Goal, goal)];
    let (rows, cols) = grid.dimensions();

    for (endpoint, cell) in endpoints {
        if !grid.contains(cell) {
            return Err(SearchError::OutOfBounds {
                endpoint,
                cell,
                rows,
                cols,
            });
        }
    }
    for (endpoint, cell) in endpoints {
        if !grid.is_traversable(cell) {
            return Err(SearchError::BlockedEndpoint { endpoint, cell });
        }
    }
    if reject_surrounded && start != goal {
        for (endpoint, cell) in endpoints {
            if grid.is_surrounded(cell) {
                return Err(SearchError::SurroundedEndpoint { endpoint, cell });
            }
        }
    }
    Ok(())
}
