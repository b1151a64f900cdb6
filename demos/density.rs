//! Cost density surface with the warping path superimposed.

use dtw_plot::{AlignmentPlotter, DensityConfig, DtwAlignment, PlotResult};
use ndarray::Array2;

fn main() -> PlotResult<()> {
    let n = 80;
    let m = 60;

    // A synthetic cumulative cost bowl around the diagonal; a real matrix
    // comes from the DTW engine that produced the alignment.
    let cost = Array2::from_shape_fn((n, m), |(i, j)| {
        let d = i as f64 / (n - 1) as f64 - j as f64 / (m - 1) as f64;
        (i + j) as f64 * 0.05 + d * d * 40.0
    });

    let index1: Vec<usize> = (0..n).collect();
    let index2: Vec<usize> = (0..n).map(|i| i * (m - 1) / (n - 1)).collect();

    let alignment = DtwAlignment::new(index1, index2)?.with_cost_matrix(cost)?;

    let figure = AlignmentPlotter::new(&alignment).density(&DensityConfig::default())?;

    let out = std::env::temp_dir().join("dtw_density.html");
    figure.write_html(&out)?;
    println!("wrote {}", out.display());
    Ok(())
}
