//! Profile Benchmarking Tool
//!
//! Measures how fast the engine turns a list of people into full numerology
//! profiles.
//!
//! ## Input
//!
//! One person per line, `;`-separated:
//!
//! ```text
//! Nguyễn Văn A;29;11;1990
//! Maria Lopez;13;5;1993
//! ```
//!
//! Blank lines and lines starting with `#` are ignored. Malformed lines are
//! skipped with a warning.
//!
//! ## Usage
//!
//! ```bash
//! # Timing only
//! ./target/release/profile_bench /path/to/people.txt
//!
//! # Timing, then every profile as one JSON object per line
//! ./target/release/profile_bench /path/to/people.txt json
//! ```
//!
//! ## Modes
//!
//! 1. **Normalize**: name normalization alone
//! 2. **Profile**: engine construction plus every metric

use std::env;
use std::fs;
use std::io;
use std::time::{Duration, Instant};

use numerology_core::analyzer::NameNormalizer;
use numerology_core::{BirthDate, Numerology, NumerologyConfig};
use tracing::{info, warn};

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;

struct Person<'a> {
    name: &'a str,
    birth: BirthDate,
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: profile_bench <path> [json]");
        std::process::exit(1);
    }

    let path = &args[1];
    let emit_json = args.get(2).map(String::as_str) == Some("json");

    println!("Loading file...");
    let bytes = fs::read(path)?;
    let input =
        String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    let people = parse_people(&input);
    info!(people = people.len(), "parsed input");

    println!("File size: {}", fmt_bytes(input.len() as u64));
    println!("People:    {}\n", fmt_count(people.len() as u64));

    if people.is_empty() {
        return Ok(());
    }

    // Pin "today" so every run computes identical personal cycles.
    let config = NumerologyConfig::fixed(chrono::Local::now().date_naive());

    bench_normalize(&people);
    bench_profile(&people, config);

    if emit_json {
        print_json(&people, config)?;
    }

    Ok(())
}

fn parse_people(input: &str) -> Vec<Person<'_>> {
    let mut people = Vec::new();

    for (line_no, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match parse_line(line) {
            Some(person) => people.push(person),
            None => warn!(line = line_no + 1, "skipping malformed line"),
        }
    }

    people
}

fn parse_line(line: &str) -> Option<Person<'_>> {
    let mut fields = line.split(';');
    let name = fields.next()?;
    let day = fields.next()?.trim().parse().ok()?;
    let month = fields.next()?.trim().parse().ok()?;
    let year = fields.next()?.trim().parse().ok()?;

    if fields.next().is_some() {
        return None;
    }

    Some(Person {
        name,
        birth: BirthDate::new(day, month, year),
    })
}

fn bench_normalize(people: &[Person<'_>]) {
    let normalizer = NameNormalizer::default();
    let mut out = String::with_capacity(64);

    println!("=== Normalize ===");

    let elapsed = measure(|| {
        for p in people {
            normalizer.normalize_into(p.name, &mut out);
        }
        std::hint::black_box(&out);
    });

    let bytes: usize = people.iter().map(|p| p.name.len()).sum();
    print_perf("Normalize", bytes, elapsed, people.len() as u64);
}

fn bench_profile(people: &[Person<'_>], config: NumerologyConfig) {
    println!("=== Profile ===");

    let run = || {
        let mut failed = 0u64;
        for p in people {
            let engine = Numerology::with_config(p.name, p.birth, config);
            match engine.profile() {
                Ok(profile) => {
                    std::hint::black_box(profile);
                }
                Err(_) => failed += 1,
            }
        }
        failed
    };

    let mut failed = 0u64;
    let elapsed = measure(|| {
        failed = run();
    });

    if failed > 0 {
        warn!(failed, "profiles failed");
    }

    let bytes: usize = people.iter().map(|p| p.name.len()).sum();
    print_perf("Profile", bytes, elapsed, people.len() as u64);
}

fn print_json(people: &[Person<'_>], config: NumerologyConfig) -> io::Result<()> {
    for p in people {
        let engine = Numerology::with_config(p.name, p.birth, config);
        match engine.profile() {
            Ok(profile) => println!("{}", serde_json::to_string(&profile)?),
            Err(err) => warn!(name = p.name, %err, "profile failed"),
        }
    }
    Ok(())
}

/// Runs `f` untimed `WARMUP_RUNS` times, then returns the mean of
/// `MEASURE_RUNS` timed runs.
fn measure<F: FnMut()>(mut f: F) -> Duration {
    (0..WARMUP_RUNS).for_each(|_| f());

    let start = Instant::now();
    (0..MEASURE_RUNS).for_each(|_| f());
    start.elapsed() / MEASURE_RUNS as u32
}

fn print_perf(label: &str, name_bytes: usize, elapsed: Duration, people: u64) {
    let secs = elapsed.as_secs_f64();

    println!("--------------------------------");
    println!("Mode        : {label}");
    println!("Elapsed     : {secs:.6} s");
    println!("Names       : {}/s", fmt_bytes((name_bytes as f64 / secs) as u64));
    println!("People      : {}", fmt_count(people));
    println!("People/sec  : {}", fmt_count((people as f64 / secs) as u64));
    println!("--------------------------------\n");
}

/// Names files are small, so KiB is the largest unit.
fn fmt_bytes(b: u64) -> String {
    if b < 1024 {
        format!("{b} B")
    } else {
        format!("{:.2} KiB", b as f64 / 1024.0)
    }
}

fn fmt_count(n: u64) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);

    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }

    out.chars().rev().collect()
}
