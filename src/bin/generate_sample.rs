use std::path::PathBuf;

use anyhow::{Context, Result};
use csv::{QuoteStyle, WriterBuilder};

const FIRST_NAMES: [&str; 16] = [
    "Angelina", "Cedric", "Dean", "Ernie", "Hannah", "Justin", "Katie", "Lavender",
    "Marcus", "Michael", "Padma", "Parvati", "Pansy", "Seamus", "Susan", "Terry",
];

const LAST_NAMES: [&str; 12] = [
    "Abbott", "Bell", "Boot", "Bones", "Corner", "Creevey", "Finnigan", "Flint",
    "Johnson", "Patil", "Parkinson", "Weasley",
];

const HOUSES: [(&str, &str); 5] = [
    ("Dumbledore's Army", "Dumbledore"),
    ("Gryffindor", "McGonagall"),
    ("Hufflepuff", "Sprout"),
    ("Ravenclaw", "Flitwick"),
    ("Slytherin", "Snape"),
];

const COHORTS: [&str; 4] = ["Fall 2015", "Winter 2016", "Spring 2016", "Summer 2016"];

const INSTRUCTORS: [(&str, &str); 4] = [
    ("Minerva", "McGonagall"),
    ("Pomona", "Sprout"),
    ("Filius", "Flitwick"),
    ("Severus", "Snape"),
];

const GHOSTS: [(&str, &str, &str); 3] = [
    ("Nearly", "Headless Nick", "Gryffindor"),
    ("Fat", "Friar", "Hufflepuff"),
    ("Moaning", "Myrtle", ""),
];

/// Number of students written before the staff rows.
const STUDENT_COUNT: usize = 60;

/// Minimal deterministic PRNG (SplitMix64)
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        SimpleRng { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform pick from a non-empty slice.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let output_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("sample_roster.txt"));

    let mut rng = SimpleRng::new(42);
    let mut writer = WriterBuilder::new()
        .delimiter(b'|')
        .quote_style(QuoteStyle::Never)
        .from_path(&output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;

    for _ in 0..STUDENT_COUNT {
        let first = rng.pick(&FIRST_NAMES);
        let last = rng.pick(&LAST_NAMES);
        let cohort = rng.pick(&COHORTS);
        // One in eight students is unaffiliated.
        let (house, advisor) = if rng.next_u64() % 8 == 0 {
            ("", "Dumbledore")
        } else {
            *rng.pick(&HOUSES)
        };
        writer.write_record([*first, *last, house, advisor, *cohort])?;
    }

    for (i, (first, last)) in INSTRUCTORS.iter().enumerate() {
        let house = HOUSES[i + 1].0;
        writer.write_record([*first, *last, house, "", "I"])?;
    }
    for (first, last, house) in &GHOSTS {
        writer.write_record([*first, *last, *house, "", "G"])?;
    }

    writer.flush().context("flushing roster")?;
    log::info!("wrote sample roster to {}", output_path.display());

    println!(
        "Wrote {} rows to {}",
        STUDENT_COUNT + INSTRUCTORS.len() + GHOSTS.len(),
        output_path.display()
    );
    Ok(())
}
