//! Writes a small deterministic launch-records CSV for trying the dashboard
//! without the real export: `cargo run --bin generate_sample`.

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
}

fn main() {
    let mut rng = SimpleRng::new(42);

    // (site, payload range kg, success probability) per pad.
    let sites: [(&str, (f64, f64), f64); 4] = [
        ("CCAFS LC-40", (300.0, 7000.0), 0.73),
        ("CCAFS SLC-40", (1800.0, 9600.0), 0.86),
        ("KSC LC-39A", (2200.0, 9600.0), 0.92),
        ("VAFB SLC-4E", (500.0, 9600.0), 0.80),
    ];
    let launches_per_site = 14;

    let output_path = "spacex_launch_dash.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record(["Flight Number", "Launch Site", "Payload Mass (kg)", "class"])
        .expect("Failed to write header");

    let mut flight_no = 1;
    for (site, (lo, hi), p_success) in sites {
        for _ in 0..launches_per_site {
            // Payload on a 100-kg grid, heavier launches slightly riskier.
            let payload = lo + (hi - lo) * rng.next_f64();
            let payload = (payload / 100.0).round() * 100.0;
            let risk_penalty = 0.1 * (payload - lo) / (hi - lo);
            let class = i32::from(rng.next_f64() < p_success - risk_penalty);

            writer
                .write_record([
                    flight_no.to_string(),
                    site.to_string(),
                    format!("{payload}"),
                    class.to_string(),
                ])
                .expect("Failed to write record");
            flight_no += 1;
        }
    }
    writer.flush().expect("Failed to flush output");

    println!("Wrote {} launch records to {output_path}", flight_no - 1);
}
