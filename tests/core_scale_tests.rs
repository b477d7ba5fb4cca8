use approx::assert_relative_eq;
use gantt_rs::GanttError;
use gantt_rs::core::{BandScale, GanttEvent, TimeScale};

#[test]
fn time_scale_maps_domain_linearly() {
    let scale = TimeScale::new(0.0, 100.0).expect("valid scale");
    assert_relative_eq!(scale.time_to_pixel(0.0, 500.0), 0.0);
    assert_relative_eq!(scale.time_to_pixel(50.0, 500.0), 250.0);
    assert_relative_eq!(scale.time_to_pixel(100.0, 500.0), 500.0);
}

#[test]
fn time_scale_clamps_out_of_range_inputs() {
    let scale = TimeScale::new(100.0, 200.0).expect("valid scale");
    assert_eq!(scale.time_to_pixel(-50.0, 400.0), 0.0);
    assert_eq!(scale.time_to_pixel(99.9, 400.0), 0.0);
    assert_eq!(scale.time_to_pixel(200.1, 400.0), 400.0);
    assert_eq!(scale.time_to_pixel(1.0e9, 400.0), 400.0);
}

#[test]
fn degenerate_domain_maps_everything_to_zero() {
    let scale = TimeScale::new(42.0, 42.0).expect("valid scale");
    for time in [-1.0e6, 0.0, 42.0, 1.0e6] {
        assert_eq!(scale.time_to_pixel(time, 300.0), 0.0);
    }
}

#[test]
fn reversed_domain_is_rejected() {
    assert!(matches!(
        TimeScale::new(10.0, 0.0),
        Err(GanttError::InvalidData(_))
    ));
    assert!(TimeScale::new(f64::NAN, 1.0).is_err());
}

#[test]
fn domain_inference_ignores_input_order() {
    let forward = vec![
        GanttEvent::new("a", "one", 10.0, 30.0),
        GanttEvent::new("a", "two", 5.0, 20.0),
        GanttEvent::new("a", "three", 15.0, 45.0),
    ];
    let mut reversed = forward.clone();
    reversed.reverse();

    let inferred = TimeScale::infer_domain(&forward).expect("infer");
    assert_eq!(inferred, Some((5.0, 45.0)));
    assert_eq!(TimeScale::infer_domain(&reversed).expect("infer"), inferred);
}

#[test]
fn domain_inference_of_empty_data_is_none() {
    assert_eq!(TimeScale::infer_domain(&[]).expect("infer"), None);
    assert!(TimeScale::from_events(&[]).expect("from events").is_none());
}

#[test]
fn bands_cover_the_height_without_gaps_or_overlaps() {
    let scale = BandScale::new(["a", "b", "c", "d"], 200.0).expect("valid scale");

    assert_eq!(scale.band_height(), 50.0);
    let bands: Vec<_> = scale.bands().collect();
    assert_eq!(bands.len(), 4);

    let mut cursor = 0.0;
    for (_, band) in &bands {
        assert_relative_eq!(band.top, cursor);
        cursor += band.height;
    }
    assert_relative_eq!(cursor, 200.0);
}

#[test]
fn bands_follow_insertion_order() {
    let scale = BandScale::new(["z", "a", "m"], 90.0).expect("valid scale");
    let names: Vec<_> = scale.bands().map(|(name, _)| name.to_owned()).collect();
    assert_eq!(names, vec!["z", "a", "m"]);
    assert_eq!(scale.band("m").expect("band").top, 60.0);
}

#[test]
fn unknown_row_name_is_rejected_not_defaulted() {
    let scale = BandScale::new(["a", "b"], 100.0).expect("valid scale");
    match scale.band("ghost") {
        Err(GanttError::UnknownActivity(name)) => assert_eq!(name, "ghost"),
        other => panic!("expected UnknownActivity, got {other:?}"),
    }
}

#[test]
fn empty_band_scale_is_valid_and_degenerate() {
    let scale = BandScale::new(Vec::<String>::new(), 100.0).expect("valid scale");
    assert!(scale.is_empty());
    assert_eq!(scale.band_height(), 0.0);
    assert_eq!(scale.bands().count(), 0);
}

#[test]
fn duplicate_row_names_are_rejected() {
    assert!(matches!(
        BandScale::new(["a", "a"], 100.0),
        Err(GanttError::InvalidConfig(_))
    ));
}
