use crate::entropy::EntropySource;
use crate::errors::EntropyError;

/// Fisher-Yates shuffle driven by an unbiased bounded draw.
///
/// Walks from the last index down to 1, swapping each element with a
/// uniformly chosen element at or before it. Every permutation is equally
/// likely when the source is uniform.
pub fn shuffle<T, S>(items: &mut [T], source: &mut S) -> Result<(), EntropyError>
where
    S: EntropySource + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = source.draw_bounded_index(i + 1)?;
        items.swap(i, j);
    }
    Ok(())
}
