//! Writes the eight pre-aggregated sample CSVs the dashboard loads at
//! startup. Deterministic, so regenerating produces identical files.

use std::path::Path;

const MONTHS: [&str; 7] = [
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
    "January",
];

const CENTERS: [&str; 5] = [
    "Baltimore",
    "Frederick",
    "Hagerstown",
    "Salisbury",
    "Rockville",
];

const RANGES: [&str; 4] = ["2-3 calls", "4-5 calls", "6-9 calls", "10+ calls"];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform integer in `[lo, hi)`.
    fn in_range(&mut self, lo: u64, hi: u64) -> u64 {
        lo + self.next_u64() % (hi - lo)
    }
}

/// Channel scale: Press 1 sees roughly triple the I&R traffic.
fn channel_factor(press1: bool) -> u64 {
    if press1 {
        3
    } else {
        1
    }
}

fn write_hourly(path: &Path, rng: &mut SimpleRng, press1: bool) -> anyhow::Result<()> {
    let mut w = csv::Writer::from_path(path)?;
    w.write_record(["Month", "hour_of_day", "Outbound"])?;
    for month in MONTHS {
        for hour in 8..20u32 {
            // Volume peaks around midday.
            let peak = 12 - (hour as i64 - 13).unsigned_abs().min(12);
            let base = 20 + peak * 15;
            let outbound = channel_factor(press1) * rng.in_range(base, base + 40);
            let hour = hour.to_string();
            let outbound = outbound.to_string();
            w.write_record([month, hour.as_str(), outbound.as_str()])?;
        }
    }
    w.flush()?;
    Ok(())
}

fn write_centers(path: &Path, rng: &mut SimpleRng, press1: bool) -> anyhow::Result<()> {
    let mut w = csv::Writer::from_path(path)?;
    w.write_record(["Month", "Center", "Outbound"])?;
    for month in MONTHS {
        for center in CENTERS {
            let outbound = (channel_factor(press1) * rng.in_range(150, 700)).to_string();
            w.write_record([month, center, outbound.as_str()])?;
        }
    }
    w.flush()?;
    Ok(())
}

fn write_splits(path: &Path, rng: &mut SimpleRng, press1: bool) -> anyhow::Result<()> {
    let mut w = csv::Writer::from_path(path)?;
    w.write_record(["Month", "Call Frequency", "# of Calls"])?;
    for month in MONTHS {
        let one_time = (channel_factor(press1) * rng.in_range(800, 2000)).to_string();
        let repeat = (channel_factor(press1) * rng.in_range(200, 700)).to_string();
        w.write_record([month, "One Time Callers", one_time.as_str()])?;
        w.write_record([month, "Repeat Callers", repeat.as_str()])?;
    }
    w.flush()?;
    Ok(())
}

fn write_ranges(path: &Path, rng: &mut SimpleRng, press1: bool) -> anyhow::Result<()> {
    let mut w = csv::Writer::from_path(path)?;
    w.write_record(["Month", "Call Count Range", "# of Calls"])?;
    for month in MONTHS {
        let mut ceiling = 500u64;
        for range in RANGES {
            // Each wider bucket holds fewer callers.
            let calls = (channel_factor(press1) * rng.in_range(ceiling / 4, ceiling)).to_string();
            w.write_record([month, range, calls.as_str()])?;
            ceiling = (ceiling / 2).max(8);
        }
    }
    w.flush()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let mut rng = SimpleRng::new(42);
    let dir = Path::new("data");
    std::fs::create_dir_all(dir)?;

    for (suffix, press1) in [("press1", true), ("IR", false)] {
        write_hourly(
            &dir.join(format!("calls_by_hour_{suffix}.csv")),
            &mut rng,
            press1,
        )?;
        write_centers(
            &dir.join(format!("calls_by_center_{suffix}.csv")),
            &mut rng,
            press1,
        )?;
        write_splits(
            &dir.join(format!("repeat_calls_count_{suffix}.csv")),
            &mut rng,
            press1,
        )?;
        write_ranges(
            &dir.join(format!("repeat_calls_range_count_{suffix}.csv")),
            &mut rng,
            press1,
        )?;
    }

    println!("Wrote 8 sample datasets to {}", dir.display());
    Ok(())
}
