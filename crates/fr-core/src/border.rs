/// How out-of-range neighbor indices are resolved by filters and samplers.
///
/// `Clamp` replicates the edge sample, `Constant` substitutes a fixed value,
/// and `Reflect101` mirrors around the edge sample without repeating it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BorderMode {
    #[default]
    Clamp,
    Constant(f32),
    Reflect101,
}

/// Maps a possibly out-of-range index into `[0, len)`.
///
/// Returns `None` for `BorderMode::Constant` when `i` falls outside the
/// range, and for every mode when `len == 0`.
pub fn map_index(i: isize, len: usize, mode: BorderMode) -> Option<usize> {
    let n = isize::try_from(len).ok().filter(|&n| n > 0)?;
    if (0..n).contains(&i) {
        return Some(i as usize);
    }

    let mapped = match mode {
        BorderMode::Constant(_) => return None,
        BorderMode::Clamp => i.clamp(0, n - 1),
        BorderMode::Reflect101 if n == 1 => 0,
        BorderMode::Reflect101 => {
            // Fold onto one period `0, 1, .., n-1, n-2, .., 1`.
            let period = 2 * (n - 1);
            let r = i.rem_euclid(period);
            r.min(period - r)
        }
    };
    Some(mapped as usize)
}
