//! The single stencil pass and the double-buffered multi-pass driver.

use smallvec::SmallVec;
use swelter_core::Grid;

use crate::config::RunConfig;
use crate::kernel::Kernel;

/// Gather the 3x3 neighborhood of `(r, c)` from the flat previous-pass
/// buffer, substituting `padding` for out-of-bounds cells. Values are
/// returned in `(dr, dc)` row-major order, matching kernel indexing.
fn neighborhood(
    prev: &[f32],
    r: i32,
    c: i32,
    rows: i32,
    cols: i32,
    padding: f32,
) -> SmallVec<[f32; 9]> {
    let mut vals = SmallVec::new();
    for dr in -1..=1 {
        for dc in -1..=1 {
            let nr = r + dr;
            let nc = c + dc;
            let v = if nr >= 0 && nr < rows && nc >= 0 && nc < cols {
                prev[nr as usize * cols as usize + nc as usize]
            } else {
                padding
            };
            vals.push(v);
        }
    }
    vals
}

/// Apply one stencil pass, reading `prev` and writing `next`.
///
/// Every output cell is computed from `prev` only, so the pass has
/// Jacobi read isolation: no cell reads a value written during the same
/// pass. The accumulation is a single `f32` sum over the nine taps in
/// `(dr, dc)` row-major order, matching the external reference's loop
/// order so results stay bit-comparable.
///
/// # Panics
///
/// Panics if `prev` and `next` have different shapes.
pub fn apply_pass(prev: &Grid, next: &mut Grid, kernel: &Kernel, padding: f32) {
    assert_eq!(
        prev.shape(),
        next.shape(),
        "pass buffers must have identical shapes"
    );
    let rows = prev.rows() as i32;
    let cols = prev.cols() as i32;
    let src = prev.as_slice();
    let dst = next.as_mut_slice();

    for r in 0..rows {
        for c in 0..cols {
            let taps = neighborhood(src, r, c, rows, cols, padding);
            let mut sum = 0.0f32;
            let mut i = 0;
            for dr in -1..=1 {
                for dc in -1..=1 {
                    sum += kernel.weight(dr, dc) * taps[i];
                    i += 1;
                }
            }
            dst[(r * cols + c) as usize] = sum;
        }
    }
}

/// Run the configured number of passes over `grid` and return the result.
///
/// Double-buffers: each pass reads the previous pass's grid and writes a
/// scratch buffer, then the two are swapped, like the reference C
/// program's pointer swap. Zero iterations returns the input unchanged.
pub fn run(grid: Grid, config: &RunConfig) -> Grid {
    let mut current = grid;
    let mut scratch = current.clone();
    for _ in 0..config.iterations() {
        apply_pass(&current, &mut scratch, &config.kernel(), config.padding());
        std::mem::swap(&mut current, &mut scratch);
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_pass(grid: Grid, padding: f32) -> Grid {
        let config = RunConfig::builder()
            .padding(padding)
            .iterations(1)
            .build()
            .unwrap();
        run(grid, &config)
    }

    #[test]
    fn zero_iterations_is_identity() {
        let grid = Grid::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let config = RunConfig::builder().iterations(0).build().unwrap();
        let out = run(grid.clone(), &config);
        assert_eq!(out, grid);
    }

    #[test]
    fn single_cell_matches_hand_computation() {
        // 1x1 grid [[5.0]], padding 30: eight padding taps contribute
        // 30 * (4*0.05 + 4*0.1) = 18, the center 0.4 * 5 = 2.
        let grid = Grid::from_rows(vec![vec![5.0]]).unwrap();
        let out = one_pass(grid, 30.0);
        assert!(
            (out.get(0, 0) - 20.0).abs() < 1e-5,
            "expected 20.0, got {}",
            out.get(0, 0)
        );
    }

    #[test]
    fn uniform_padding_grid_is_fixed_point() {
        // Kernel sums to 1, so a grid uniformly equal to the padding
        // value sees the same value on all nine taps everywhere.
        let grid = Grid::filled(4, 5, 30.0).unwrap();
        let out = one_pass(grid.clone(), 30.0);
        for (i, (&a, &b)) in grid.as_slice().iter().zip(out.as_slice()).enumerate() {
            assert!(
                (a - b).abs() < 1e-5,
                "cell {i} moved from {a} to {b}"
            );
        }
    }

    #[test]
    fn interior_cell_weighted_average() {
        // Center of a 3x3 all-10 grid with a 100 in the middle: no
        // padding reaches the center cell.
        let mut grid = Grid::filled(3, 3, 10.0).unwrap();
        grid.set(1, 1, 100.0);
        let out = one_pass(grid, 0.0);
        // 100*0.4 + 10*(4*0.1 + 4*0.05) = 40 + 6 = 46
        assert!(
            (out.get(1, 1) - 46.0).abs() < 1e-4,
            "center should be 46, got {}",
            out.get(1, 1)
        );
    }

    #[test]
    fn pass_reads_only_previous_buffer() {
        // A row grid where naive in-place updating would contaminate the
        // right neighbor's read. With read isolation, symmetric inputs
        // give symmetric outputs.
        let grid = Grid::from_rows(vec![vec![1.0, 7.0, 1.0]]).unwrap();
        let out = one_pass(grid, 0.0);
        assert!(
            (out.get(0, 0) - out.get(0, 2)).abs() < 1e-6,
            "symmetric input must give symmetric output: {} vs {}",
            out.get(0, 0),
            out.get(0, 2)
        );
    }

    #[test]
    fn corner_uses_five_padding_taps() {
        // 2x2 zero grid, padding 10. Corner (0,0) has five out-of-bounds
        // taps: (-1,-1),(-1,0),(-1,1),(0,-1),(1,-1) with weights
        // 0.05+0.1+0.05+0.1+0.05 = 0.35, so the output is 10*0.35 = 3.5.
        let grid = Grid::filled(2, 2, 0.0).unwrap();
        let out = one_pass(grid, 10.0);
        assert!(
            (out.get(0, 0) - 3.5).abs() < 1e-5,
            "corner should be 3.5, got {}",
            out.get(0, 0)
        );
    }

    #[test]
    fn edge_uses_three_padding_taps() {
        // 3x3 zero grid, padding 10. Edge cell (0,1) has three
        // out-of-bounds taps: (-1,-1),(-1,0),(-1,1) with weights
        // 0.05+0.1+0.05 = 0.2, so the output is 10*0.2 = 2.
        let grid = Grid::filled(3, 3, 0.0).unwrap();
        let out = one_pass(grid, 10.0);
        assert!(
            (out.get(0, 1) - 2.0).abs() < 1e-5,
            "edge should be 2, got {}",
            out.get(0, 1)
        );
    }

    #[test]
    fn neighborhood_pads_out_of_bounds() {
        let src = [1.0, 2.0, 3.0, 4.0];
        let taps = neighborhood(&src, 0, 0, 2, 2, 30.0);
        assert_eq!(taps.len(), 9);
        // (dr,dc) row-major: first five in-bounds taps are
        // (0,0)=1, (0,1)=2, (1,0)=3, (1,1)=4 at positions 4,5,7,8.
        assert_eq!(taps[4], 1.0);
        assert_eq!(taps[5], 2.0);
        assert_eq!(taps[7], 3.0);
        assert_eq!(taps[8], 4.0);
        for i in [0, 1, 2, 3, 6] {
            assert_eq!(taps[i], 30.0, "tap {i} should be padding");
        }
    }
}
