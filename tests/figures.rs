//! Figure-level tests: what the renderers actually hand to plotly.

use dtw_plot::{
    AlignmentPlotter, DtwAlignment, MatchGuideSpec, PathPlotConfig, PlotError, PlotFigure,
    PlotMode, PlotOptions, TwoWayConfig,
};
use ndarray::Array2;
use serde_json::Value;

fn alignment() -> DtwAlignment {
    DtwAlignment::new(vec![0, 1, 2, 2, 3], vec![0, 0, 1, 2, 3])
        .unwrap()
        .with_series(vec![0.0, 1.0, 0.5, -0.5], vec![0.1, 0.9, -0.4, -0.9])
        .unwrap()
}

fn to_json(figure: &PlotFigure) -> Value {
    let plot = figure.composer().to_plot().unwrap();
    serde_json::to_value(&plot).unwrap()
}

#[test]
fn path_figure_emits_one_trace_of_zipped_indices() {
    let d = alignment();
    let figure = AlignmentPlotter::new(&d)
        .plot(PlotMode::Alignment, &PlotOptions::default())
        .unwrap();
    let json = to_json(&figure);

    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["x"], serde_json::json!([0.0, 1.0, 2.0, 2.0, 3.0]));
    assert_eq!(data[0]["y"], serde_json::json!([0.0, 0.0, 1.0, 2.0, 3.0]));

    assert_eq!(json["layout"]["xaxis"]["title"]["text"], "Query index");
    assert_eq!(json["layout"]["yaxis"]["title"]["text"], "Reference index");
}

#[test]
fn path_figure_honors_custom_labels() {
    let d = alignment();
    let config = PathPlotConfig {
        x_label: "q".to_string(),
        y_label: "r".to_string(),
        ..Default::default()
    };
    let figure = AlignmentPlotter::new(&d).alignment_path(&config);
    let plot = figure.composer().to_plot().unwrap();
    let json = serde_json::to_value(&plot).unwrap();

    assert_eq!(json["layout"]["xaxis"]["title"]["text"], "q");
    assert_eq!(json["layout"]["yaxis"]["title"]["text"], "r");
}

#[test]
fn two_way_offset_splits_scales_and_shifts_windows() {
    let d = alignment();
    let config = TwoWayConfig {
        offset: 2.0,
        match_indices: Some(MatchGuideSpec::Count(3)),
        ..Default::default()
    };
    let figure = AlignmentPlotter::new(&d).two_way(None, None, &config).unwrap();
    let plot = figure.composer().to_plot().unwrap();
    let json = serde_json::to_value(&plot).unwrap();

    // Query, reference, and three guide segments.
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 5);

    // The reference curve moves to the overlaying right-hand scale.
    assert_eq!(data[1]["yaxis"], "y2");
    assert_eq!(json["layout"]["yaxis2"]["overlaying"], "y");
    assert_eq!(json["layout"]["yaxis2"]["side"], "right");

    // Query limits (-0.5, 1.0): bottom drops by the offset, top stays.
    assert_eq!(
        json["layout"]["yaxis"]["range"],
        serde_json::json!([-2.5, 1.0])
    );
    // Reference limits (-0.9, 0.9): bottom stays, top rises by the offset.
    assert_eq!(
        json["layout"]["yaxis2"]["range"],
        serde_json::json!([-0.9, 2.9])
    );
}

#[test]
fn two_way_zero_offset_keeps_everything_on_one_scale() {
    let d = alignment();
    let config = TwoWayConfig {
        match_indices: Some(MatchGuideSpec::Indices(vec![1, 3])),
        ..Default::default()
    };
    let figure = AlignmentPlotter::new(&d).two_way(None, None, &config).unwrap();
    let plot = figure.composer().to_plot().unwrap();
    let json = serde_json::to_value(&plot).unwrap();

    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 4);
    // No trace was reassigned to a secondary axis and none was configured.
    for trace in data {
        assert_ne!(trace["yaxis"], "y2");
    }
    assert!(json["layout"]["yaxis2"].is_null());
}

#[test]
fn guide_segments_connect_aligned_samples() {
    let d = alignment();
    let config = TwoWayConfig {
        offset: 1.0,
        match_indices: Some(MatchGuideSpec::Indices(vec![2])),
        ..Default::default()
    };
    let figure = AlignmentPlotter::new(&d).two_way(None, None, &config).unwrap();
    let json = to_json(&PlotFigure::TwoWay(figure));

    // Path position 2 pairs query index 2 with reference index 1; the guide
    // lands in the offset-adjusted frame of the primary axis.
    let guide = &json["data"].as_array().unwrap()[2];
    assert_eq!(guide["x"], serde_json::json!([2.0, 1.0]));
    assert_eq!(guide["y"], serde_json::json!([0.5, 0.9 - 1.0]));
}

#[test]
fn three_way_renders_two_panels() {
    let d = alignment();
    let figure = AlignmentPlotter::new(&d)
        .plot(PlotMode::ThreeWay, &PlotOptions::default())
        .unwrap();
    let json = to_json(&figure);

    // Bottom panel traces are reassigned to the second axis pair.
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.last().unwrap()["yaxis"], "y2");
    assert!(json["layout"]["yaxis2"].is_object());
}

#[test]
fn density_layers_the_path_over_the_heatmap() {
    let d = alignment()
        .with_cost_matrix(Array2::from_shape_fn((4, 4), |(i, j)| (i + j) as f64))
        .unwrap();
    let figure = AlignmentPlotter::new(&d)
        .plot(PlotMode::Density, &PlotOptions::default())
        .unwrap();
    let json = to_json(&figure);

    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["type"], "heatmap");
    assert_eq!(data[1]["type"], "scatter");
    // One heatmap row per reference index.
    assert_eq!(data[0]["z"].as_array().unwrap().len(), 4);
}

#[test]
fn dispatcher_rejects_unknown_mode_strings() {
    let err = "warp".parse::<PlotMode>();
    assert!(matches!(err, Err(PlotError::UnknownMode(_))));
}

#[test]
fn two_way_without_any_series_produces_no_figure() {
    let d = DtwAlignment::new(vec![0, 1], vec![0, 1]).unwrap();
    let result = AlignmentPlotter::new(&d).plot(PlotMode::TwoWay, &PlotOptions::default());
    assert!(matches!(result, Err(PlotError::MissingSeries)));
}

#[test]
fn figures_write_html_files() {
    let d = alignment();
    let figure = AlignmentPlotter::new(&d).alignment_path(&PathPlotConfig::default());

    let path = std::env::temp_dir().join("dtw_plot_test_figure.html");
    figure.write_html(&path).unwrap();
    assert!(path.exists());
    std::fs::remove_file(&path).unwrap();
}
