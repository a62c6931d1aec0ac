use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tablecloth::config::{self, Params};
use tablecloth::render;

fn main() -> Result<()> {
    tablecloth::logging::init();

    // Optional PNG copy of the pattern; stdout is unaffected.
    let png_path: Option<PathBuf> = std::env::args().nth(1).map(PathBuf::from);

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read tablecloth size from stdin")?;
    let size = config::parse_size(&line)?;

    let params = Params::default();
    tracing::debug!(size, "generating tablecloth");
    let (cloth, _timings) = tablecloth::generate(size, &params);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    out.write_all(render::render_text(&cloth.primes, &params).as_bytes())?;
    out.flush()?;

    if let Some(path) = png_path {
        if size == 0 {
            tracing::warn!(path = %path.display(), "empty tablecloth, no image written");
            return Ok(());
        }
        let (rgba, w, h) = render::render_png(&cloth.primes, &params);
        image::save_buffer(&path, &rgba, w as u32, h as u32, image::ColorType::Rgba8)
            .with_context(|| format!("failed to save image {}", path.display()))?;
        tracing::info!(path = %path.display(), "saved image");
    }

    Ok(())
}
