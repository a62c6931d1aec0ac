pub mod config;
pub mod grid;
pub mod logging;
pub mod prime;
pub mod render;
pub mod spiral;

use std::time::Instant;

use tracing::info;

use config::Params;
use grid::Grid;

pub struct Tablecloth {
    pub size: usize,
    pub numbers: Grid<u64>,
    pub primes: Grid<bool>,
    pub rows: Vec<String>,
}

pub struct Timing {
    pub name: &'static str,
    pub ms: f64,
}

pub fn generate(size: usize, params: &Params) -> (Tablecloth, Vec<Timing>) {
    let mut timings = Vec::new();
    let total_start = Instant::now();

    // 1. Zeroed grid + walk state at the center
    let t = Instant::now();
    let (mut numbers, walk) = spiral::init(size);
    timings.push(Timing {
        name: "init",
        ms: t.elapsed().as_secs_f64() * 1000.0,
    });

    // 2. Spiral fill 1..=size²
    let t = Instant::now();
    spiral::fill(&mut numbers, walk);
    timings.push(Timing {
        name: "fill",
        ms: t.elapsed().as_secs_f64() * 1000.0,
    });

    // 3. Primality mask + glyph rows
    let t = Instant::now();
    let primes = render::classify(&numbers);
    let rows = render::render_rows(&primes, params);
    timings.push(Timing {
        name: "render",
        ms: t.elapsed().as_secs_f64() * 1000.0,
    });

    timings.push(Timing {
        name: "TOTAL",
        ms: total_start.elapsed().as_secs_f64() * 1000.0,
    });
    for t in &timings {
        info!(stage = t.name, ms = t.ms, "timing");
    }

    let cloth = Tablecloth {
        size,
        numbers,
        primes,
        rows,
    };

    (cloth, timings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_runs_all_stages() {
        let (cloth, timings) = generate(3, &Params::default());
        assert_eq!(cloth.size, 3);
        assert_eq!(cloth.numbers.get(1, 1), 1);
        assert_eq!(cloth.rows, vec!["■□■", "□□■", "■□□"]);
        let names: Vec<&str> = timings.iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["init", "fill", "render", "TOTAL"]);
    }

    #[test]
    fn generate_empty() {
        let (cloth, _) = generate(0, &Params::default());
        assert!(cloth.rows.is_empty());
        assert!(cloth.numbers.data.is_empty());
    }
}
