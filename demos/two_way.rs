//! Two-way comparison of a sine query against a warped reference.
//!
//! The alignment here is handcrafted; in real use it comes from a DTW
//! engine such as the `dtw` or `narcissus-dtw` crates.

use dtw_plot::{AlignmentPlotter, DtwAlignment, MatchGuideSpec, PlotResult, TwoWayConfig};

fn main() -> PlotResult<()> {
    let query: Vec<f64> = (0..120)
        .map(|i| (i as f64 / 120.0 * std::f64::consts::TAU).sin())
        .collect();
    let reference: Vec<f64> = (0..90)
        .map(|i| (i as f64 / 90.0 * std::f64::consts::TAU + 0.4).sin())
        .collect();

    // A plausible monotone warping path over the two lengths.
    let index1: Vec<usize> = (0..120).collect();
    let index2: Vec<usize> = (0..120).map(|i| i * 89 / 119).collect();

    let alignment = DtwAlignment::new(index1, index2)?.with_series(query, reference)?;

    let config = TwoWayConfig {
        offset: 2.5,
        match_indices: Some(MatchGuideSpec::Count(20)),
        ..Default::default()
    };
    let figure = AlignmentPlotter::new(&alignment).two_way(None, None, &config)?;

    let out = std::env::temp_dir().join("dtw_two_way.html");
    figure.write_html(&out)?;
    println!("wrote {}", out.display());
    Ok(())
}
