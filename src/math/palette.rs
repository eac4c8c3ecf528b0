use crate::error::{ColorError, Result};

/// Pick `palette[index mod len]`. Negative indices wrap from the end.
pub fn get_color<T>(palette: &[T], index: i64) -> Result<&T> {
    if palette.is_empty() {
        return Err(ColorError::invalid_argument("palette", "must not be empty"));
    }
    let len = palette.len() as i64;
    Ok(&palette[index.rem_euclid(len) as usize])
}

/// `count` consecutive cyclic picks starting at `start`.
pub fn palette_slice<T: Clone>(palette: &[T], start: i64, count: u32) -> Result<Vec<T>> {
    (0..count as i64)
        .map(|offset| get_color(palette, start.wrapping_add(offset)).cloned())
        .collect()
}
