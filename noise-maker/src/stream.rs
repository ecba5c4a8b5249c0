use std::io::{self, Write};

use chrono::{DateTime, FixedOffset, TimeDelta};
use rand::Rng;

use crate::generator::generate_apache_log;

/// Longest gap between two consecutive requests.
const MAX_STEP_SECONDS: i64 = 90;

/// Writes `lines` log lines in chronological order, starting at `start`.
pub fn write_log_stream<W: Write, R: Rng + ?Sized>(
    out: &mut W,
    rng: &mut R,
    lines: usize,
    start: DateTime<FixedOffset>,
    spider_rate: f64,
) -> io::Result<()> {
    let mut clock = start;
    for _ in 0..lines {
        let log_line = generate_apache_log(rng, clock, spider_rate);
        writeln!(out, "{log_line}")?;
        clock += TimeDelta::seconds(rng.random_range(0..=MAX_STEP_SECONDS));
    }
    out.flush()
}
