use crate::error::{CustomError, Result};
use crate::frequency::{estimate_frequencies, tally_haplotypes};
use crate::haplotype::classify_haplotypes;
use crate::model::{GenotypeTable, LdResult};
use crate::stats::{compute_d, compute_d_prime, compute_r_squared};
use indicatif::{ProgressBar, ProgressStyle};
use itertools::Itertools;
use rayon::prelude::*;

pub struct PairwiseEngine<'a> {
    table: &'a GenotypeTable,
    total_allele_copies: u64,
}

// A requested variant resolved against the table
struct Resolved<'a> {
    id: &'a str,
    genotypes: &'a [String],
}

impl<'a> PairwiseEngine<'a> {
    pub fn new(table: &'a GenotypeTable, total_allele_copies: u64) -> Result<Self> {
        if total_allele_copies == 0 {
            return Err(CustomError::invalid_configuration(
                "total allele copy count must be positive",
            ));
        }
        Ok(Self {
            table,
            total_allele_copies,
        })
    }

    pub fn total_allele_copies(&self) -> u64 {
        self.total_allele_copies
    }

    fn lookup<'r>(&'r self, id: &'r str) -> Result<Resolved<'r>> {
        let genotypes = self
            .table
            .get(id)
            .ok_or_else(|| CustomError::VariantNotFound { id: id.to_string() })?;
        Ok(Resolved { id, genotypes })
    }

    // Every ID is looked up before any pair is evaluated so a missing one aborts the whole run
    fn resolve_all<'r>(&'r self, ids: &'r [String]) -> Result<Vec<Resolved<'r>>> {
        ids.iter().map(|id| self.lookup(id)).collect()
    }

    fn evaluate(&self, v1: &Resolved<'_>, v2: &Resolved<'_>) -> Result<LdResult> {
        if v1.genotypes.len() != v2.genotypes.len() {
            return Err(CustomError::GenotypeCountMismatch {
                id_1: v1.id.to_string(),
                id_2: v2.id.to_string(),
                n_1: v1.genotypes.len(),
                n_2: v2.genotypes.len(),
            });
        }
        let labels = classify_haplotypes(v1.genotypes, v2.genotypes);
        let haplotypes = tally_haplotypes(&labels);
        debug_assert!(haplotypes.total() <= labels.len() as u64);
        let freqs = estimate_frequencies(&haplotypes, self.total_allele_copies)?;
        let d = compute_d(&freqs);
        Ok(LdResult {
            rsid_1: v1.id.to_string(),
            rsid_2: v2.id.to_string(),
            haplotypes,
            pa: freqs.pa,
            pb: freqs.pb,
            pab: freqs.pab,
            d,
            r2: compute_r_squared(d, &freqs),
            d_prime: compute_d_prime(d, &freqs),
        })
    }

    /// LD statistics for a single pair of variants.
    #[cfg(test)]
    pub fn compute_pair(&self, id_1: &str, id_2: &str) -> Result<LdResult> {
        let v1 = self.lookup(id_1)?;
        let v2 = self.lookup(id_2)?;
        self.evaluate(&v1, &v2)
    }

    /// LD statistics for every unordered pair of `ids`, in (i, j), i < j order.
    pub fn compute_all(&self, ids: &[String]) -> Result<Vec<LdResult>> {
        let variants = self.resolve_all(ids)?;
        let pairs = index_pairs(variants.len());
        let pb = progress_bar(pairs.len());

        let mut results = Vec::with_capacity(pairs.len());
        for (i, j) in pairs {
            results.push(self.evaluate(&variants[i], &variants[j])?);
            pb.inc(1);
        }
        pb.abandon();
        Ok(results)
    }

    /// Same output as [`compute_all`](Self::compute_all), with pairs evaluated on the current rayon pool.
    pub fn compute_all_parallel(&self, ids: &[String]) -> Result<Vec<LdResult>> {
        let variants = self.resolve_all(ids)?;
        let pairs = index_pairs(variants.len());
        let pb = progress_bar(pairs.len());

        // Indexed collect keeps enumeration order regardless of completion order
        let results = pairs
            .par_iter()
            .map(|&(i, j)| {
                let result = self.evaluate(&variants[i], &variants[j]);
                pb.inc(1);
                result
            })
            .collect::<Result<Vec<_>>>()?;

        pb.abandon();
        println!();
        Ok(results)
    }
}

pub fn index_pairs(n: usize) -> Vec<(usize, usize)> {
    (0..n).tuple_combinations().collect()
}

fn progress_bar(n_pairs: usize) -> ProgressBar {
    let pb = ProgressBar::new(n_pairs as u64);
    pb.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] {bar:30} {pos}/{len} pairs")
            .expect("progress template is valid"),
    );
    pb
}
