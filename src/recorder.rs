/// Append-only input log with a hard capacity.
///
/// Every key the player presses is recorded with its elapsed time in
/// seconds; food-eaten events add a synthetic `'F'` row on the same
/// clock.  Once `CAPACITY` entries exist further records are dropped
/// silently — saturation is a soft limit, never an error.

/// Maximum number of records kept; later events are dropped.
pub const CAPACITY: usize = 10_000;

/// Synthetic key appended when the snake eats food.
pub const FOOD_KEY: char = 'F';

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputRecord {
    pub key: char,
    /// Seconds since the recorder was created.
    pub timestamp: f64,
}

#[derive(Clone, Debug)]
pub struct InputRecorder {
    records: Vec<InputRecord>,
}

impl InputRecorder {
    pub fn new() -> Self {
        InputRecorder { records: Vec::new() }
    }

    /// Append one record, or do nothing once `CAPACITY` is reached.
    pub fn record(&mut self, key: char, timestamp: f64) {
        if self.records.len() < CAPACITY {
            self.records.push(InputRecord { key, timestamp });
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[InputRecord] {
        &self.records
    }

    /// Serialize the log as the two-column tab-separated table that gets
    /// written to `input_record.txt`.
    pub fn to_log_text(&self) -> String {
        let mut out = String::from("Snake Game Input Record\nTime(s)\tKey\n");
        for rec in &self.records {
            out.push_str(&format!("{:.1}\t{}\n", rec.timestamp, rec.key));
        }
        out
    }
}

impl Default for InputRecorder {
    fn default() -> Self {
        Self::new()
    }
}
