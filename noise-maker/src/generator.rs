use chrono::{DateTime, FixedOffset};
use rand::{Rng, seq::IndexedRandom};

const METHODS: [(&str, u8); 4] = [("GET", 6), ("POST", 2), ("PUT", 1), ("DELETE", 1)];
const PATHS: [(&str, u8); 9] = [
    ("/", 10),
    ("/login", 10),
    ("/api", 50),
    ("/admin", 5),
    ("/splash", 20),
    ("/gallery", 10),
    ("/img/logo.png", 15),
    ("/static/app.js", 10),
    ("/static/site.css", 10),
];
const STATUS: [(u16, u8); 6] = [
    (200, 50),
    (201, 10),
    (400, 10),
    (401, 20),
    (404, 50),
    (500, 5),
];
const PROTOCOLS: [(&str, u8); 3] = [("HTTP/1.0", 1), ("HTTP/1.1", 10), ("HTTP/2.0", 4)];
const SPIDER_PATH: &str = "/robots.txt";

fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, table: &'a [(T, u8)]) -> &'a T {
    &table
        .choose_weighted(rng, |(_, w)| *w)
        .expect("weight tables are non-empty with positive weights")
        .0
}

/// One common log format line stamped with `timestamp`. `spider_rate` must be
/// within `0.0..=1.0`.
pub fn generate_apache_log<R: Rng + ?Sized>(
    rng: &mut R,
    timestamp: DateTime<FixedOffset>,
    spider_rate: f64,
) -> String {
    let ip = format!(
        "192.168.{}.{}",
        rng.random_range(0..256),
        rng.random_range(0..256)
    );
    let timestamp = timestamp.format("%d/%b/%Y:%H:%M:%S %z");
    let (method, path) = if rng.random_bool(spider_rate) {
        ("GET", SPIDER_PATH)
    } else {
        (*pick(rng, &METHODS), *pick(rng, &PATHS))
    };
    let protocol = pick(rng, &PROTOCOLS);
    let status = pick(rng, &STATUS);
    let size = rng.random_range(100..2000);

    format!("{ip} - - [{timestamp}] \"{method} {path} {protocol}\" {status} {size}")
}
