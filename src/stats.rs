use crate::model::LocusFrequencies;

pub fn compute_d(freqs: &LocusFrequencies) -> f64 {
    freqs.pab - freqs.pa * freqs.pb
}

/// Squared allelic correlation. A fixed allele at either locus gives 0.
pub fn compute_r_squared(d: f64, freqs: &LocusFrequencies) -> f64 {
    let LocusFrequencies { pa, pb, .. } = *freqs;
    let denominator = pa * (1.0 - pa) * pb * (1.0 - pb);
    if denominator == 0.0 {
        return 0.0;
    }
    d * d / denominator
}

/// D normalised by its largest attainable magnitude given the allele frequencies.
pub fn compute_d_prime(d: f64, freqs: &LocusFrequencies) -> f64 {
    let LocusFrequencies { pa, pb, .. } = *freqs;
    let d_max = if d > 0.0 {
        (pa * (1.0 - pb)).min((1.0 - pa) * pb)
    } else {
        (-pa * pb).max(-(1.0 - pa) * (1.0 - pb))
    };
    if d_max == 0.0 {
        return 0.0;
    }
    d / d_max
}
