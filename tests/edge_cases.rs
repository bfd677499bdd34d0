use strikeview::{
    Config, Dataset, Event, FilterError, TickOutcome, TimeFilter, TimeRange, compute_time_range,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Large dataset: range scan and filtering over 100K events
#[test]
fn test_large_dataset() {
    let events: Vec<Event> = (0..100_000)
        .map(|i| {
            let t = ((i * 7919) % 100_000) as f64;
            Event::new(t, 20.0 + (i % 100) as f64 * 0.01, 60.0, 10.0)
        })
        .collect();
    let mut filter = TimeFilter::new();
    filter.load_dataset(Dataset::new(events)).expect("load failed");

    assert_eq!(filter.bounds().unwrap(), TimeRange::new(0.0, 99_999.0));

    filter
        .set_active_range(Some(TimeRange::new(0.0, 9_999.0)))
        .unwrap();
    assert_eq!(filter.layer().unwrap().count_visible(filter.dataset().unwrap()), 10_000);
}

/// Single event: full range has zero width
#[test]
fn test_single_event_dataset() {
    let mut filter = TimeFilter::new();
    filter
        .load_dataset(Dataset::new(vec![Event::new(42.0, 0.0, 0.0, 1.0)]))
        .unwrap();

    assert_eq!(filter.bounds().unwrap(), TimeRange::instant(42.0));
    let spec = filter.filter_spec().unwrap();
    assert_eq!(spec.soft_range, TimeRange::instant(42.0));
    assert_eq!(filter.visible_events().unwrap().len(), 1);

    // Nothing to animate
    let handle = filter.start_animation().unwrap();
    assert!(matches!(filter.tick(handle).unwrap(), TickOutcome::Finished(_)));
}

/// Zero-width window advances by the fallback width
#[test]
fn test_zero_width_window_makes_progress() {
    let mut filter = TimeFilter::new();
    filter
        .load_dataset(Dataset::new(vec![
            Event::new(0.0, 0.0, 0.0, 1.0),
            Event::new(1000.0, 0.0, 0.0, 1.0),
        ]))
        .unwrap();
    filter
        .set_active_range(Some(TimeRange::instant(100.0)))
        .unwrap();

    let handle = filter.start_animation().unwrap();
    let window = filter.tick(handle).unwrap().window().unwrap();
    assert!((window.start - 100.5).abs() < 1e-9);
    assert!((window.end - 100.5).abs() < 1e-9);
}

/// Window selected past the dataset end finishes without moving backwards
#[test]
fn test_window_beyond_bounds() {
    init_logging();
    let mut filter = TimeFilter::new();
    filter
        .load_dataset(Dataset::new(vec![
            Event::new(0.0, 0.0, 0.0, 1.0),
            Event::new(10.0, 0.0, 0.0, 1.0),
        ]))
        .unwrap();
    filter
        .set_active_range(Some(TimeRange::new(5.0, 50.0)))
        .unwrap();

    let handle = filter.start_animation().unwrap();
    assert_eq!(
        filter.tick(handle).unwrap(),
        TickOutcome::Finished(TimeRange::new(5.0, 50.0))
    );
    assert_eq!(filter.active_range(), Some(TimeRange::new(5.0, 50.0)));
}

/// Reversed slider bounds are normalised
#[test]
fn test_reversed_window() {
    let mut filter = TimeFilter::new();
    filter
        .set_active_range(Some(TimeRange::new(50.0, 20.0)))
        .unwrap();
    assert_eq!(filter.active_range(), Some(TimeRange::new(20.0, 50.0)));
}

/// Non-finite numbers never reach the state
#[test]
fn test_non_finite_inputs() {
    init_logging();
    let mut filter = TimeFilter::new();
    assert!(filter.set_radius_scale(f64::NAN).is_err());
    assert!(filter.set_radius_scale(f64::INFINITY).is_err());
    assert!(filter.set_animation_speed_ms(f64::NEG_INFINITY).is_err());
    assert!(
        filter
            .set_active_range(Some(TimeRange::new(0.0, f64::INFINITY)))
            .is_err()
    );

    assert_eq!(filter.radius_scale(), 20.0);
    assert_eq!(filter.animation_speed_ms(), 1000.0);
    assert_eq!(filter.active_range(), None);
}

/// Explicit window without any dataset still yields a spec, but no slider
#[test]
fn test_window_without_dataset() {
    let mut filter = TimeFilter::new();
    filter
        .set_active_range(Some(TimeRange::new(1.0, 2.0)))
        .unwrap();

    assert!(filter.filter_spec().is_ok());
    assert!(filter.slider().is_none());
    assert!(filter.info_panel().is_some());
    assert_eq!(filter.visible_events().unwrap_err(), FilterError::AbsentData);
    assert_eq!(filter.start_animation().unwrap_err(), FilterError::AbsentData);
}

/// Events with bad coordinates load; bad times do not
#[test]
fn test_dataset_validation() {
    init_logging();
    let mut filter = TimeFilter::new();
    filter
        .load_dataset(Dataset::new(vec![Event::new(0.0, 500.0, 0.0, 1.0)]))
        .expect("out-of-range coordinates are only logged");

    let err = filter
        .load_dataset(Dataset::new(vec![Event::new(f64::NEG_INFINITY, 0.0, 0.0, 1.0)]))
        .unwrap_err();
    assert!(matches!(err, FilterError::InvalidInput(_)));
    assert_eq!(filter.dataset().unwrap().len(), 1);
}

/// Range computation is memoized on dataset identity
#[test]
fn test_range_recomputed_only_on_identity_change() {
    let mut filter = TimeFilter::new();
    let data = Dataset::new(vec![Event::new(1.0, 0.0, 0.0, 1.0)]);

    filter.load_dataset(data.clone()).unwrap();
    filter.load_dataset(data.clone()).unwrap();
    for _ in 0..10 {
        let _ = filter.filter_spec();
    }
    assert_eq!(filter.range_computations(), 1);

    filter
        .load_dataset(Dataset::new(data.events().to_vec()))
        .unwrap();
    assert_eq!(filter.range_computations(), 2);
}

/// Negative and epoch-scale times
#[test]
fn test_time_scales() {
    let epoch = Dataset::new(vec![
        Event::new(1_700_000_000_000.0, 0.0, 0.0, 1.0),
        Event::new(1_700_000_060_000.0, 0.0, 0.0, 1.0),
    ]);
    assert_eq!(
        compute_time_range(Some(&epoch)),
        Some(TimeRange::new(1_700_000_000_000.0, 1_700_000_060_000.0))
    );

    let negative = Dataset::new(vec![
        Event::new(-5.0, 0.0, 0.0, 1.0),
        Event::new(-50.0, 0.0, 0.0, 1.0),
    ]);
    assert_eq!(
        compute_time_range(Some(&negative)),
        Some(TimeRange::new(-50.0, -5.0))
    );
}

/// Custom step policy from configuration
#[test]
fn test_custom_step_fraction() {
    let config = Config::default().with_step_fraction(0.5);
    let mut filter = TimeFilter::with_config(config).unwrap();
    filter
        .load_dataset(Dataset::new(vec![
            Event::new(0.0, 0.0, 0.0, 1.0),
            Event::new(100.0, 0.0, 0.0, 1.0),
        ]))
        .unwrap();
    filter
        .set_active_range(Some(TimeRange::new(0.0, 10.0)))
        .unwrap();

    let handle = filter.start_animation().unwrap();
    assert_eq!(
        filter.tick(handle).unwrap(),
        TickOutcome::Advanced(TimeRange::new(5.0, 15.0))
    );
}
