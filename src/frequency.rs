use crate::error::{CustomError, Result};
use crate::model::{HaplotypeCounts, HaplotypeLabel, LocusFrequencies};

/// Count each defined haplotype; unresolved labels are dropped.
pub fn tally_haplotypes(labels: &[HaplotypeLabel]) -> HaplotypeCounts {
    let mut counts = HaplotypeCounts::default();
    for label in labels {
        match label {
            HaplotypeLabel::H00 => counts.n00 += 1,
            HaplotypeLabel::H01 => counts.n01 += 1,
            HaplotypeLabel::H10 => counts.n10 += 1,
            HaplotypeLabel::H11 => counts.n11 += 1,
            HaplotypeLabel::Unresolved => {}
        }
    }
    counts
}

/// Allele and haplotype frequencies over `total_allele_copies` chromosome copies.
///
/// The denominator is the population's copy count rather than the tally sum, so
/// unresolved calls do not shrink it.
pub fn estimate_frequencies(
    counts: &HaplotypeCounts,
    total_allele_copies: u64,
) -> Result<LocusFrequencies> {
    if total_allele_copies == 0 {
        return Err(CustomError::invalid_configuration(
            "total allele copy count must be positive",
        ));
    }
    let total = total_allele_copies as f64;
    Ok(LocusFrequencies {
        pa: (counts.n00 + counts.n01) as f64 / total,
        pb: (counts.n00 + counts.n10) as f64 / total,
        pab: counts.n00 as f64 / total,
    })
}
