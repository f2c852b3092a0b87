use snake_game::recorder::*;

#[test]
fn record_appends_in_order() {
    let mut rec = InputRecorder::new();
    rec.record('w', 0.5);
    rec.record('d', 1.2);
    rec.record(FOOD_KEY, 1.3);
    assert_eq!(rec.len(), 3);
    assert_eq!(rec.records()[0], InputRecord { key: 'w', timestamp: 0.5 });
    assert_eq!(rec.records()[2], InputRecord { key: 'F', timestamp: 1.3 });
}

#[test]
fn new_recorder_is_empty() {
    let rec = InputRecorder::new();
    assert!(rec.is_empty());
    assert_eq!(rec.len(), 0);
}

#[test]
fn saturation_drops_silently_at_capacity() {
    let mut rec = InputRecorder::new();
    for i in 0..CAPACITY {
        rec.record('w', i as f64);
    }
    assert_eq!(rec.len(), CAPACITY);

    // The 10,001st attempt neither grows the log nor errors
    rec.record('x', 99_999.0);
    assert_eq!(rec.len(), CAPACITY);
    let last = rec.records()[CAPACITY - 1];
    assert_eq!(last.key, 'w');
    assert_eq!(last.timestamp, (CAPACITY - 1) as f64);
}

#[test]
fn log_text_header_and_rows() {
    let mut rec = InputRecorder::new();
    rec.record('w', 0.0);
    rec.record('d', 1.5);
    rec.record('F', 3.14); // timestamps print to one decimal place
    assert_eq!(
        rec.to_log_text(),
        "Snake Game Input Record\nTime(s)\tKey\n0.0\tw\n1.5\td\n3.1\tF\n"
    );
}

#[test]
fn log_text_empty_log_is_header_only() {
    let rec = InputRecorder::new();
    assert_eq!(rec.to_log_text(), "Snake Game Input Record\nTime(s)\tKey\n");
}
