use crate::engine::index_pairs;
use crate::error::{CustomError, Result};
use crate::model::LdResult;
use ndarray::{Array2, Array3};
use ndarray_npy::NpzWriter;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

pub const TSV_HEADER: [&str; 12] = [
    "rsID_1", "rsID_2", "n_00", "n_01", "n_10", "n_11", "pA", "pB", "pAB", "D", "r2", "Dprime",
];

pub fn write_ld_results(results: &[LdResult], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_path(path)?;
    wtr.write_record(TSV_HEADER)?;

    for result in results {
        let [n00, n01, n10, n11] = result.haplotypes.as_array();
        wtr.serialize((
            result.rsid_1.as_str(),
            result.rsid_2.as_str(),
            n00,
            n01,
            n10,
            n11,
            result.pa,
            result.pb,
            result.pab,
            result.d,
            result.r2,
            result.d_prime,
        ))?;
    }
    wtr.flush().map_err(|e| CustomError::Write {
        source: e,
        path: path.into(),
    })?;
    Ok(())
}

/// Symmetric n x n matrices indexed by position in `ids`; the diagonal is not computed.
struct LdMatrices {
    d: Array2<f64>,
    r2: Array2<f64>,
    d_prime: Array2<f64>,
    haplotype_counts: Array3<u64>,
}

impl LdMatrices {
    fn from_results(n: usize, results: &[LdResult]) -> Self {
        let mut m = Self {
            d: Array2::from_elem((n, n), f64::NAN),
            r2: Array2::from_elem((n, n), f64::NAN),
            d_prime: Array2::from_elem((n, n), f64::NAN),
            haplotype_counts: Array3::zeros((n, n, 4)),
        };
        // Results are in index_pairs order
        for ((i, j), result) in index_pairs(n).into_iter().zip(results) {
            for (a, b) in [(i, j), (j, i)] {
                m.d[[a, b]] = result.d;
                m.r2[[a, b]] = result.r2;
                m.d_prime[[a, b]] = result.d_prime;
                for (k, count) in result.haplotypes.as_array().into_iter().enumerate() {
                    m.haplotype_counts[[a, b, k]] = count;
                }
            }
        }
        m
    }
}

pub fn write_ld_npz(ids: &[String], results: &[LdResult], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let matrices = LdMatrices::from_results(ids.len(), results);

    // Read access is needed to append variants.json after the arrays
    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| CustomError::Write {
            source: e,
            path: path.into(),
        })?;

    let mut npz = NpzWriter::new(file);
    npz.add_array("d", &matrices.d)?;
    npz.add_array("r2", &matrices.r2)?;
    npz.add_array("dprime", &matrices.d_prime)?;
    npz.add_array("haplotype_counts", &matrices.haplotype_counts)?;
    let file = npz.finish()?;

    let json = serde_json::to_string(ids)?;
    let mut archive = ZipWriter::new_append(file)?;
    archive.start_file("variants.json", SimpleFileOptions::default())?;
    archive
        .write_all(json.as_bytes())
        .map_err(|e| CustomError::Write {
            source: e,
            path: path.into(),
        })?;
    archive.finish()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HaplotypeCounts;

    fn result(id_1: &str, id_2: &str, d: f64) -> LdResult {
        LdResult {
            rsid_1: id_1.to_string(),
            rsid_2: id_2.to_string(),
            haplotypes: HaplotypeCounts {
                n00: 1,
                n01: 2,
                n10: 3,
                n11: 4,
            },
            pa: 0.3,
            pb: 0.4,
            pab: 0.1,
            d,
            r2: d * 2.0,
            d_prime: d * 3.0,
        }
    }

    #[test]
    fn matrices_are_symmetric_with_empty_diagonal() {
        let results = vec![
            result("X", "Y", 0.01),
            result("X", "Z", 0.02),
            result("Y", "Z", 0.03),
        ];
        let m = LdMatrices::from_results(3, &results);
        assert_eq!(m.d[[0, 1]], 0.01);
        assert_eq!(m.d[[1, 0]], 0.01);
        assert_eq!(m.d[[0, 2]], 0.02);
        assert_eq!(m.r2[[2, 1]], 0.06);
        assert!((m.d_prime[[1, 2]] - 0.09).abs() < 1e-12);
        assert_eq!(m.haplotype_counts[[2, 0, 3]], 4);
        for i in 0..3 {
            assert!(m.d[[i, i]].is_nan());
            assert_eq!(m.haplotype_counts[[i, i, 0]], 0);
        }
    }
}
