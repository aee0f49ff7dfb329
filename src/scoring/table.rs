/// A step function over `f64` described by ordered, exclusive upper bounds.
///
/// `bands` must be sorted by bound ascending. `lookup(x)` returns the value of
/// the first band whose bound is strictly greater than `x`, or `above` when
/// `x` is at or past the last bound.
#[derive(Debug, Clone, Copy)]
pub struct StepTable<T: 'static> {
    pub bands: &'static [(f64, T)],
    pub above: T,
}

impl<T: Copy> StepTable<T> {
    pub const fn new(bands: &'static [(f64, T)], above: T) -> Self {
        Self { bands, above }
    }

    pub fn lookup(&self, x: f64) -> T {
        let idx = self.bands.partition_point(|(bound, _)| x >= *bound);
        match self.bands.get(idx) {
            Some((_, value)) => *value,
            None => self.above,
        }
    }
}

/// Mean defender base rating -> base defense modifier.
pub const DEFENSE_TABLE: StepTable<i32> = StepTable::new(
    &[
        (5.00, 4),
        (5.25, 3),
        (5.50, 2),
        (5.75, 1),
        (6.00, 0),
        (6.25, -1),
        (6.50, -2),
        (6.75, -3),
        (7.00, -4),
    ],
    -5,
);

/// Absolute midfield sum difference -> modifier magnitude.
pub const MIDFIELD_TABLE: StepTable<f64> = StepTable::new(
    &[
        (1.0, 0.0),
        (2.0, 0.5),
        (3.0, 1.0),
        (4.0, 1.5),
        (5.0, 2.0),
        (6.0, 2.5),
        (7.0, 3.0),
        (8.0, 3.5),
    ],
    4.0,
);

/// Final score -> goals, up to the open-ended band starting at `GOALS_OPEN_FROM`.
pub const GOALS_TABLE: StepTable<u32> =
    StepTable::new(&[(66.0, 0), (72.0, 1), (77.0, 2), (81.0, 3), (85.0, 4)], 4);

/// Start of the open band where every further `GOALS_STEP` points adds a goal.
pub const GOALS_OPEN_FROM: f64 = 85.0;
pub const GOALS_STEP: f64 = 4.0;
