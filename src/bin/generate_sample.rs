//! Writes a deterministic 200-row `Advertising.csv` so the dashboard can be
//! exercised without shipping data: `cargo run --bin generate_sample`.

use anyhow::{Context, Result};

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

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let mut writer = csv::Writer::from_path("Advertising.csv")
        .context("creating Advertising.csv")?;
    writer.write_record(["", "TV", "Radio", "Newspaper", "Sales"])?;

    // TV drives sales hardest, radio moderately, newspaper not at all.
    for row in 1..=200u32 {
        let tv = round1(rng.next_f64() * 296.0);
        let radio = round1(rng.next_f64() * 49.6);
        let newspaper = round1(rng.next_f64() * 114.0);
        let sales = round1((4.6 + 0.047 * tv + 0.18 * radio + rng.gauss(0.0, 1.6)).max(1.0));

        writer.write_record([
            row.to_string(),
            format!("{tv:.1}"),
            format!("{radio:.1}"),
            format!("{newspaper:.1}"),
            format!("{sales:.1}"),
        ])?;
    }

    writer.flush().context("writing Advertising.csv")?;
    println!("Wrote Advertising.csv (200 observations)");
    Ok(())
}
