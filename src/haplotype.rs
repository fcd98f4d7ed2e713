use crate::model::{Allele, HaplotypeLabel};

/// Split a phased genotype ("0|1") into its two chromosome copies.
/// Anything that is not exactly two `|`-separated alleles resolves to `Other` on both copies.
fn phased_alleles(genotype: &str) -> (Allele, Allele) {
    let mut parts = genotype.split('|');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(first), Some(second), None) => (Allele::parse(first), Allele::parse(second)),
        _ => (Allele::Other, Allele::Other),
    }
}

/// Classify the two-locus haplotype carried by each chromosome copy.
///
/// For individual `i`, copy 1 of the first variant is paired with copy 1 of the
/// second variant, then copy 2 with copy 2, so the output holds `2 * n` labels.
/// Both slices must list individuals in the same order.
pub fn classify_haplotypes(genotypes_1: &[String], genotypes_2: &[String]) -> Vec<HaplotypeLabel> {
    debug_assert_eq!(genotypes_1.len(), genotypes_2.len());
    let mut labels = Vec::with_capacity(2 * genotypes_1.len());
    for (g1, g2) in genotypes_1.iter().zip(genotypes_2) {
        let (a1, a2) = phased_alleles(g1);
        let (b1, b2) = phased_alleles(g2);
        labels.push(HaplotypeLabel::from_alleles(a1, b1));
        labels.push(HaplotypeLabel::from_alleles(a2, b2));
    }
    labels
}
