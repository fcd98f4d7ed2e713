use crate::error::{CustomError, Result};

/// Returns the sample columns to keep, along with their positions among all sample columns.
pub fn select_samples(
    samples: &[String],
    prefix: Option<&str>,
) -> Result<(Vec<String>, Vec<usize>)> {
    let (kept, indices): (Vec<String>, Vec<usize>) = samples
        .iter()
        .enumerate()
        .filter(|(_, id)| prefix.is_none_or(|p| id.starts_with(p)))
        .map(|(idx, id)| (id.clone(), idx))
        .unzip();

    if kept.is_empty() {
        return Err(CustomError::NoSamples);
    }
    Ok((kept, indices))
}
