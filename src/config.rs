use anyhow::{Context, Result, bail};

/// Rendering parameters. The CLI always uses the defaults.
#[derive(Clone, Debug)]
pub struct Params {
    // Text
    pub filled_glyph: char,
    pub hollow_glyph: char,

    // Image
    pub cell_px: usize,
    pub prime_color: [u8; 4],
    pub composite_color: [u8; 4],
}

impl Default for Params {
    fn default() -> Self {
        Self {
            filled_glyph: '\u{25a0}',
            hollow_glyph: '\u{25a1}',
            cell_px: 8,
            prime_color: [20, 20, 20, 255],
            composite_color: [235, 235, 230, 255],
        }
    }
}

/// Parse one line of input as the tablecloth size. Negative sizes are
/// taken by absolute value.
pub fn parse_size(line: &str) -> Result<usize> {
    let raw: i64 = line
        .trim()
        .parse()
        .with_context(|| format!("invalid tablecloth size {:?}", line.trim()))?;
    let size = usize::try_from(raw.unsigned_abs())
        .with_context(|| format!("tablecloth size {raw} does not fit in memory"))?;
    let fits = size
        .checked_mul(size)
        .and_then(|cells| cells.checked_mul(std::mem::size_of::<u64>()))
        .is_some_and(|bytes| bytes <= isize::MAX as usize);
    if !fits {
        bail!("tablecloth size {size} does not fit in memory");
    }
    Ok(size)
}
