use gridstar_core::Cell;

/// Diagonal coefficient of the standard octile metric, `√2 − 1`.
pub const STANDARD_OCTILE_COEFFICIENT: f64 = std::f64::consts::SQRT_2 - 1.0;

/// Simplified diagonal coefficient: a diagonal move costs 1.5.
pub const SIMPLIFIED_OCTILE_COEFFICIENT: f64 = 0.5;

/// Octile distance with diagonal coefficient `k`:
/// `max(dr, dc) + k · min(dr, dc)`.
#[inline]
pub fn octile(a: Cell, b: Cell, k: f64) -> f64 {
    let (dr, dc) = a.deltas(b);
    f64::from(dr.max(dc)) + k * f64::from(dr.min(dc))
}

/// Euclidean (L2) distance between two cells.
#[inline]
pub fn euclidean(a: Cell, b: Cell) -> f64 {
    let (dr, dc) = a.deltas(b);
    f64::from(dr).hypot(f64::from(dc))
}

/// Cost of moving between two adjacent cells: 1 orthogonally, `1 + k`
/// diagonally.
#[inline]
pub fn step_cost(from: Cell, to: Cell, k: f64) -> f64 {
    if from.is_diagonal_to(to) { 1.0 + k } else { 1.0 }
}

/// Sum of [`step_cost`] along consecutive cells.
pub fn path_cost(cells: &[Cell], k: f64) -> f64 {
    cells.windows(2).map(|w| step_cost(w[0], w[1], k)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn octile_standard_matches_diagonal_steps() {
        let d = octile(Cell::new(0, 0), Cell::new(3, 5), STANDARD_OCTILE_COEFFICIENT);
        assert!((d - (2.0 + 3.0 * std::f64::consts::SQRT_2)).abs() < EPS);
    }

    #[test]
    fn octile_simplified_coefficient() {
        let d = octile(Cell::new(0, 0), Cell::new(3, 5), SIMPLIFIED_OCTILE_COEFFICIENT);
        assert!((d - 6.5).abs() < EPS);
    }

    #[test]
    fn octile_is_symmetric() {
        let a = Cell::new(2, 7);
        let b = Cell::new(9, 1);
        let k = STANDARD_OCTILE_COEFFICIENT;
        assert_eq!(octile(a, b, k), octile(b, a, k));
    }

    #[test]
    fn euclidean_known_values() {
        assert!((euclidean(Cell::new(0, 0), Cell::new(3, 4)) - 5.0).abs() < EPS);
        assert_eq!(euclidean(Cell::new(1, 1), Cell::new(1, 1)), 0.0);
    }

    #[test]
    fn euclidean_never_exceeds_standard_octile() {
        let k = STANDARD_OCTILE_COEFFICIENT;
        for r in 0..10 {
            for c in 0..10 {
                let (a, b) = (Cell::new(0, 0), Cell::new(r, c));
                assert!(euclidean(a, b) <= octile(a, b, k) + EPS);
            }
        }
    }

    #[test]
    fn step_costs() {
        let k = STANDARD_OCTILE_COEFFICIENT;
        assert_eq!(step_cost(Cell::new(0, 0), Cell::new(0, 1), k), 1.0);
        assert!((step_cost(Cell::new(0, 0), Cell::new(1, 1), k) - std::f64::consts::SQRT_2).abs() < EPS);
        assert_eq!(step_cost(Cell::new(0, 0), Cell::new(1, 1), 0.5), 1.5);
    }

    #[test]
    fn path_cost_sums_steps() {
        let cells = [Cell::new(0, 0), Cell::new(1, 1), Cell::new(1, 2)];
        assert_eq!(path_cost(&cells, 0.5), 2.5);
        assert_eq!(path_cost(&cells[..1], 0.5), 0.0);
    }
}
