//! Synthetic neighbourhood used by the demo.
//!
//! A rectangular street grid with a few blocks merged (missing streets) and a
//! two-node cul-de-sac that is not connected to anything else.  Draws that
//! pick the cul-de-sac cannot be routed and exercise the batch resampler.

use anyhow::{Context, Result};

use rdv_core::{NodeId, PlanarPoint};
use rdv_spatial::{StreetNetwork, StreetNetworkBuilder};

/// Every `MERGED_BLOCK_STRIDE`-th horizontal street is left out.
const MERGED_BLOCK_STRIDE: u32 = 7;

/// Build a `cols × rows` grid with `block_m` metre blocks, origin at (0, 0).
///
/// Node `row * cols + col` sits at `(col * block_m, row * block_m)`; the two
/// detached nodes come last, well beyond the grid's far corner.  Fails if the
/// node ids would not fit in a `NodeId`.
pub fn build_grid(cols: u32, rows: u32, block_m: f64) -> Result<StreetNetwork> {
    let grid_nodes = cols
        .checked_mul(rows)
        .and_then(|n| n.checked_add(2))
        .with_context(|| format!("grid {cols} × {rows} has too many nodes"))?;
    let streets = (grid_nodes as usize).saturating_mul(2);

    let mut b = StreetNetworkBuilder::with_capacity(grid_nodes as usize, streets);

    for row in 0..rows {
        for col in 0..cols {
            b.add_node(PlanarPoint::new(col as f64 * block_m, row as f64 * block_m));
        }
    }

    // Cannot overflow: `row * cols + col < cols * rows`, checked above.
    let id = |row: u32, col: u32| NodeId(row * cols + col);
    for row in 0..rows {
        for col in 0..cols {
            let here = id(row, col);
            if col + 1 < cols && (here.0 + 1) % MERGED_BLOCK_STRIDE != 0 {
                b.add_straight_street(here, id(row, col + 1))?;
            }
            if row + 1 < rows {
                b.add_straight_street(here, id(row + 1, col))?;
            }
        }
    }

    let far = (cols.max(rows) as f64 + 5.0) * block_m;
    let p = b.add_node(PlanarPoint::new(far, far));
    let q = b.add_node(PlanarPoint::new(far + block_m, far));
    b.add_straight_street(p, q)?;

    Ok(b.build())
}

#[cfg(test)]
mod tests {
    use super::build_grid;

    #[test]
    fn small_grid_has_cul_de_sac() {
        let net = build_grid(3, 2, 50.0).unwrap();
        assert_eq!(net.node_count(), 3 * 2 + 2);
        assert_eq!(net.degree(rdv_core::NodeId(7)), 1);
    }

    #[test]
    fn oversized_grid_is_an_error() {
        assert!(build_grid(u32::MAX, 2, 50.0).is_err());
        assert!(build_grid(65_536, 65_536, 50.0).is_err());
    }
}
