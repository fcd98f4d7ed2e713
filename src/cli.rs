use crate::Args;
use crate::engine::PairwiseEngine;
use crate::error::{CustomError, Result};
use crate::output::{write_ld_npz, write_ld_results};
use crate::reader::vcf::read_vcf;
use rayon::ThreadPoolBuilder;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub enum InputSpec {
    Vcf {
        vcf: PathBuf,
        output_dir: PathBuf,
        npz: bool,
        sample_prefix: Option<String>,
        // None means every variant in file order
        variant_ids: Option<Vec<String>>,
        population_size: Option<u64>,
        threads: Option<usize>,
    },
}

impl InputSpec {
    pub fn print_paths(&self) {
        match self {
            InputSpec::Vcf { vcf, .. } => {
                println!("VCF : {}", vcf.display());
                println!();
            }
        }
    }

    pub fn vcf(&self) -> &Path {
        match self {
            InputSpec::Vcf { vcf, .. } => vcf.as_path(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        match self {
            InputSpec::Vcf { output_dir, .. } => output_dir.as_path(),
        }
    }

    pub fn npz(&self) -> bool {
        match self {
            InputSpec::Vcf { npz, .. } => *npz,
        }
    }

    pub fn sample_prefix(&self) -> Option<&str> {
        match self {
            InputSpec::Vcf { sample_prefix, .. } => sample_prefix.as_deref(),
        }
    }

    pub fn variant_ids(&self) -> Option<&[String]> {
        match self {
            InputSpec::Vcf { variant_ids, .. } => variant_ids.as_deref(),
        }
    }

    pub fn population_size(&self) -> Option<u64> {
        match self {
            InputSpec::Vcf {
                population_size, ..
            } => *population_size,
        }
    }

    pub fn threads(&self) -> Option<usize> {
        match self {
            InputSpec::Vcf { threads, .. } => *threads,
        }
    }
}

pub fn parse_variant_ids(spec: &str) -> Vec<String> {
    spec.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

fn load_variant_ids_file(path: &str) -> Result<Vec<String>> {
    let ids_path = PathBuf::from(path);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(&ids_path)
        .map_err(|source| CustomError::CsvRead {
            source,
            path: ids_path.clone(),
        })?;

    let mut ids = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|source| CustomError::CsvRead {
            source,
            path: ids_path.clone(),
        })?;
        if let Some(id) = record.get(0).map(str::trim)
            && !id.is_empty()
        {
            ids.push(id.to_string());
        }
    }

    if ids.is_empty() {
        return Err(CustomError::invalid_configuration(format!(
            "no variant IDs in {}",
            ids_path.display()
        )));
    }
    Ok(ids)
}

pub fn build_input_spec(args: &Args) -> Result<InputSpec> {
    let variant_ids = match (&args.variants, &args.variants_file) {
        (Some(spec), _) => Some(parse_variant_ids(spec)),
        (None, Some(path)) => Some(load_variant_ids_file(path)?),
        (None, None) => None,
    };
    if args.threads == Some(0) {
        return Err(CustomError::invalid_configuration(
            "thread count must be at least 1",
        ));
    }
    Ok(InputSpec::Vcf {
        vcf: PathBuf::from(&args.vcf),
        output_dir: PathBuf::from(&args.output_directory),
        npz: args.npz,
        sample_prefix: args.sample_prefix.clone(),
        variant_ids,
        population_size: args.population_size,
        threads: args.threads,
    })
}

/// Chromosome copies in the population: twice the number of individuals.
///
/// An explicit population size may exceed the loaded sample count but never fall below it,
/// otherwise frequencies could exceed 1.
pub fn total_allele_copies(population_size: Option<u64>, n_samples: usize) -> Result<u64> {
    let n_samples = n_samples as u64;
    let individuals = population_size.unwrap_or(n_samples);
    if individuals == 0 {
        return Err(CustomError::invalid_configuration(
            "population size must be positive",
        ));
    }
    if individuals < n_samples {
        return Err(CustomError::invalid_configuration(format!(
            "population size {individuals} is smaller than the {n_samples} samples in the input"
        )));
    }
    Ok(2 * individuals)
}

pub fn run(spec: &InputSpec) -> Result<()> {
    const PARALLEL_THRESHOLD: usize = 10_000;

    let table = read_vcf(&spec.vcf(), spec.sample_prefix())?;
    println!(
        "Loaded {} variants across {} samples",
        table.variant_ids().len(),
        table.samples().len()
    );

    let ids: Vec<String> = match spec.variant_ids() {
        Some(ids) => ids.to_vec(),
        None => table.variant_ids().to_vec(),
    };
    if ids.len() < 2 {
        return Err(CustomError::invalid_configuration(format!(
            "need at least 2 variant IDs (got {})",
            ids.len()
        )));
    }

    let total = total_allele_copies(spec.population_size(), table.samples().len())?;
    let engine = PairwiseEngine::new(&table, total)?;
    let n_pairs = ids.len() * (ids.len() - 1) / 2;
    println!(
        "Computing LD for {} pairs over {} allele copies...",
        n_pairs,
        engine.total_allele_copies()
    );

    let threads = spec.threads();
    let results = if (threads.is_none() && n_pairs < PARALLEL_THRESHOLD) || threads == Some(1) {
        engine.compute_all(&ids)?
    } else if let Some(n) = threads {
        let pool = ThreadPoolBuilder::new().num_threads(n).build()?;
        pool.install(|| engine.compute_all_parallel(&ids))?
    } else {
        engine.compute_all_parallel(&ids)?
    };

    if spec.npz() {
        let npz_path = spec.output_dir().join("ld_matrices.npz");
        println!("Writing pairwise LD matrices to {}...", npz_path.display());
        write_ld_npz(&ids, &results, &npz_path)?;
    } else {
        let tsv_path = spec.output_dir().join("ld_results.tsv");
        println!("Writing pairwise LD results to {}...", tsv_path.display());
        write_ld_results(&results, &tsv_path)?;
    }
    Ok(())
}
