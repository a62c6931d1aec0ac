use rayon::prelude::*;

use crate::config::Params;
use crate::grid::Grid;
use crate::prime::is_prime;

/// Primality mask of the numbered grid, computed row by row in parallel.
pub fn classify(numbers: &Grid<u64>) -> Grid<bool> {
    let mut mask = Grid::new(numbers.w, numbers.h);
    if mask.data.is_empty() {
        return mask;
    }
    let w = numbers.w;
    mask.data
        .par_chunks_mut(w)
        .zip(numbers.data.par_chunks(w))
        .for_each(|(out, row)| {
            for (m, &v) in out.iter_mut().zip(row) {
                *m = is_prime(v);
            }
        });
    mask
}

/// One string per row: filled glyph for primes, hollow otherwise.
pub fn render_rows(mask: &Grid<bool>, params: &Params) -> Vec<String> {
    mask.rows()
        .map(|row| {
            row.iter()
                .map(|&p| if p { params.filled_glyph } else { params.hollow_glyph })
                .collect()
        })
        .collect()
}

/// Rows joined with a trailing newline each; empty for a zero-size grid.
pub fn render_text(mask: &Grid<bool>, params: &Params) -> String {
    let mut out = String::new();
    for row in render_rows(mask, params) {
        out.push_str(&row);
        out.push('\n');
    }
    out
}

/// RGBA image, each cell a `cell_px` square block.
pub fn render_png(mask: &Grid<bool>, params: &Params) -> (Vec<u8>, usize, usize) {
    let px = params.cell_px.max(1);
    let w = mask.w * px;
    let h = mask.h * px;
    let mut rgba = vec![0u8; w * h * 4];
    if rgba.is_empty() {
        return (rgba, w, h);
    }

    rgba.par_chunks_mut(w * 4).enumerate().for_each(|(y, row)| {
        let cy = y / px;
        for x in 0..w {
            let color = if mask.get(x / px, cy) {
                params.prime_color
            } else {
                params.composite_color
            };
            row[x * 4..x * 4 + 4].copy_from_slice(&color);
        }
    });

    (rgba, w, h)
}
