use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use strikeview::{Dataset, Event, SyncTimeFilter, TickOutcome, TimeRange};

fn loaded_filter() -> SyncTimeFilter {
    let filter = SyncTimeFilter::new();
    filter
        .load_dataset(Dataset::new(vec![
            Event::new(0.0, 20.0, 60.0, 1.0),
            Event::new(1000.0, 20.0, 60.0, 1.0),
        ]))
        .unwrap();
    filter
        .set_active_range(Some(TimeRange::new(0.0, 10.0)))
        .unwrap();
    filter
}

#[test]
fn test_clones_share_state() {
    let filter = loaded_filter();
    let other = filter.clone();
    other.set_radius_scale(3.0).unwrap();
    assert_eq!(filter.radius_scale(), 3.0);
}

#[test]
fn test_concurrent_ticks_and_edits() {
    let filter = loaded_filter();
    let handle = filter.start_animation().unwrap();

    let ticker = {
        let filter = filter.clone();
        thread::spawn(move || {
            let mut last_end = 0.0;
            for _ in 0..200 {
                match filter.tick(handle).unwrap() {
                    TickOutcome::Advanced(window) => {
                        assert!(window.end >= last_end);
                        last_end = window.end;
                    }
                    _ => break,
                }
            }
        })
    };

    let editor = {
        let filter = filter.clone();
        thread::spawn(move || {
            for i in 1..=200 {
                filter.set_radius_scale(i as f64).unwrap();
                filter.set_animation_speed_ms(i as f64 * 10.0).unwrap();
            }
        })
    };

    ticker.join().unwrap();
    editor.join().unwrap();

    assert_eq!(filter.radius_scale(), 200.0);
    assert_eq!(filter.animation_speed_ms(), 2000.0);
    assert!(filter.effective_range().unwrap().end <= 1000.0);
}

#[test]
fn test_stop_from_another_thread_cancels_ticks() {
    let filter = loaded_filter();
    let handle = filter.start_animation().unwrap();
    let stopped = Arc::new(AtomicBool::new(false));

    {
        let filter = filter.clone();
        let stopped = stopped.clone();
        thread::spawn(move || {
            filter.stop_animation();
            stopped.store(true, Ordering::SeqCst);
        })
        .join()
        .unwrap();
    }

    assert!(stopped.load(Ordering::SeqCst));
    let before = filter.active_range();
    assert_eq!(filter.tick(handle).unwrap(), TickOutcome::Cancelled);
    assert_eq!(filter.active_range(), before);
}

#[test]
fn test_write_closure_is_atomic() {
    let filter = loaded_filter();
    let (spec, radius) = filter.write(|inner| {
        inner.set_radius_scale(9.0).unwrap();
        (inner.filter_spec().unwrap(), inner.radius_scale())
    });
    assert_eq!(spec.hard_range, TimeRange::new(0.0, 10.0));
    assert_eq!(radius, 9.0);
    assert_eq!(filter.read(|inner| inner.radius_scale()), 9.0);
}
