use std::io::BufRead;
use std::path::Path;

use crate::error::{CustomError, Result};
use crate::model::GenotypeTable;
use crate::reader::open_text_or_gzip;
use crate::reader::samples::select_samples;

// CHROM POS ID REF ALT QUAL FILTER INFO FORMAT
const FIXED_FIELDS: usize = 9;
const ID_COLUMN: usize = 2;
const FORMAT_COLUMN: usize = 8;

/// Load the GT call of every (kept) sample for every variant with an ID.
pub fn read_vcf(path: &impl AsRef<Path>, sample_prefix: Option<&str>) -> Result<GenotypeTable> {
    let reader = open_text_or_gzip(path)?;
    parse_vcf(reader, path.as_ref(), sample_prefix)
}

pub(crate) fn parse_vcf(
    reader: impl BufRead,
    path: &Path,
    sample_prefix: Option<&str>,
) -> Result<GenotypeTable> {
    let mut header: Option<(usize, Vec<usize>)> = None;
    let mut table: Option<GenotypeTable> = None;

    for (line_idx, line) in reader.lines().enumerate() {
        let line_num = line_idx + 1;
        let line = line.map_err(|e| CustomError::ReadWithPath {
            source: e,
            path: path.to_path_buf(),
        })?;
        let line = line.trim_end_matches(['\r', '\n']);
        if line.is_empty() || line.starts_with("##") {
            continue;
        }

        if let Some(columns) = line.strip_prefix('#') {
            if header.is_some() {
                return Err(CustomError::VcfHeaderRepeated { line_num });
            }
            let columns: Vec<&str> = columns.split('\t').collect();
            if columns.len() <= FIXED_FIELDS {
                return Err(CustomError::NoSamples);
            }
            let all_samples: Vec<String> = columns[FIXED_FIELDS..]
                .iter()
                .map(|s| s.to_string())
                .collect();
            let (samples, indices) = select_samples(&all_samples, sample_prefix)?;
            header = Some((columns.len(), indices));
            table = Some(GenotypeTable::new(samples));
            continue;
        }

        let (Some((n_columns, sample_indices)), Some(table)) = (&header, table.as_mut()) else {
            return Err(CustomError::VcfHeaderMissing);
        };

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != *n_columns {
            return Err(CustomError::VcfFields {
                line_num,
                n_fields: fields.len(),
                expected: *n_columns,
            });
        }

        let id = fields[ID_COLUMN];
        if id == "." {
            continue;
        }
        let gt_idx = fields[FORMAT_COLUMN]
            .split(':')
            .position(|key| key == "GT")
            .ok_or(CustomError::VcfMissingGt { line_num })?;

        let genotypes: Vec<String> = sample_indices
            .iter()
            .map(|&idx| {
                fields[FIXED_FIELDS + idx]
                    .split(':')
                    .nth(gt_idx)
                    .unwrap_or(".")
                    .to_string()
            })
            .collect();

        if !table.insert(id.to_string(), genotypes) {
            eprintln!(
                "Warning: duplicate variant ID {id} on line {line_num}; keeping the first record"
            );
        }
    }

    table.ok_or(CustomError::VcfHeaderMissing)
}
