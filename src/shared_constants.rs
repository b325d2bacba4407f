use embassy_time::Duration;

/// Number of digit positions on the display (HH MM SS).
pub const CELL_COUNT: usize = 6;
/// Number of binary-coded value lines shared by all positions.
pub const BIT_COUNT: usize = 4;

/// How often the multiplexer advances to the next digit position.
/// By experimentation, a 1000 Hz rate works well with little flicker.
pub const MULTIPLEX_PERIOD: Duration = Duration::from_millis(1);

/// Pulses narrower than this are mechanical bounce that survived
/// debouncing; they cancel the in-progress rotation.
pub const MIN_PULSE_WIDTH: Duration = Duration::from_millis(30);

/// Quiet time after the last rising edge that marks the end of a
/// rotation. Longer than the natural inter-pulse gap of a hand-released
/// dial, short enough that digit recognition feels immediate.
pub const ROTATION_DWELL: Duration = Duration::from_millis(125);

/// Settle interval for the dial's debounced input.
pub const DIAL_DEBOUNCE: Duration = Duration::from_millis(20);

/// The dial must be polled at least this often (pulses can be ~100 ms).
pub const DIAL_POLL_HZ: u64 = 100;

pub const ONE_SECOND: Duration = Duration::from_secs(1);
pub const ONE_MINUTE: Duration = Duration::from_secs(60);
pub const ONE_HOUR: Duration = Duration::from_secs(60 * 60);

/// Seconds in a 24-hour day, for wraparound time arithmetic.
pub const SECONDS_PER_DAY: i32 = 24 * 60 * 60;
