#![allow(dead_code)]

use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const HG_SAMPLES: [&str; 4] = ["HG001", "HG002", "HG003", "HG004"];
const OTHER_SAMPLE: &str = "NA005";
pub const VARIANT_IDS: [&str; 4] = ["rsA", "rsB", "rsC", "rsD"];

// Genotypes per variant, HG samples first, then the NA sample
const RECORDS: [(&str, [&str; 5]); 5] = [
    ("rsA", ["0|0", "1|1", "0|1", "1|0", "1|1"]),
    ("rsB", ["0|0", "0|1", "0|1", "1|0", "1|1"]),
    (".", ["0|1", "0|1", "0|1", "0|1", "0|1"]),
    ("rsC", ["1|1", "1|1", "1|1", "1|1", "1|1"]),
    ("rsD", ["0|0", ".|.", "1|1", "0|1", "1|1"]),
];

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

pub struct Dataset {
    pub vcf: PathBuf,
    pub output_dir: PathBuf,
    pub base_dir: PathBuf,
}

pub fn create_dataset(label: &str) -> io::Result<Dataset> {
    let base_dir = fresh_base_dir(label)?;
    let vcf = base_dir.join("dataset.vcf");
    write_vcf(File::create(&vcf)?)?;
    Ok(Dataset {
        vcf,
        output_dir: base_dir.join("output"),
        base_dir,
    })
}

/// Same records as `create_dataset`, written to `dataset.vcf.gz`.
pub fn create_gzip_dataset(label: &str) -> io::Result<Dataset> {
    let base_dir = fresh_base_dir(label)?;
    let vcf = base_dir.join("dataset.vcf.gz");
    let mut encoder = GzEncoder::new(File::create(&vcf)?, Compression::default());
    write_vcf(&mut encoder)?;
    encoder.finish()?;
    Ok(Dataset {
        vcf,
        output_dir: base_dir.join("output"),
        base_dir,
    })
}

fn fresh_base_dir(label: &str) -> io::Result<PathBuf> {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    let base_dir = std::env::temp_dir().join("fastld-tests").join(format!(
        "{}-{}-{}",
        std::process::id(),
        id,
        label
    ));
    if base_dir.exists() {
        fs::remove_dir_all(&base_dir)?;
    }
    fs::create_dir_all(&base_dir)?;
    Ok(base_dir)
}

fn write_vcf(mut file: impl Write) -> io::Result<()> {
    writeln!(file, "##fileformat=VCFv4.2")?;
    writeln!(file, "##contig=<ID=22>")?;
    writeln!(
        file,
        "##FORMAT=<ID=GT,Number=1,Type=String,Description=\"Genotype\">"
    )?;
    let mut header = "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT".to_string();
    for sample in HG_SAMPLES.iter().chain(std::iter::once(&OTHER_SAMPLE)) {
        header.push('\t');
        header.push_str(sample);
    }
    writeln!(file, "{header}")?;

    for (idx, (id, genotypes)) in RECORDS.iter().enumerate() {
        writeln!(
            file,
            "22\t{}\t{}\tA\tG\t100\tPASS\t.\tGT\t{}",
            (idx + 1) * 1000,
            id,
            genotypes.join("\t")
        )?;
    }
    Ok(())
}

#[derive(Clone, Debug)]
pub struct PairStats {
    pub id1: &'static str,
    pub id2: &'static str,
    pub counts: [u64; 4],
    pub pa: f64,
    pub pb: f64,
    pub pab: f64,
    pub d: f64,
    pub r2: f64,
    pub dprime: f64,
}

/// Expected results over the four HG samples (8 allele copies), in pair enumeration order.
pub fn expected_pair_stats_hg() -> Vec<PairStats> {
    vec![
        PairStats {
            id1: "rsA",
            id2: "rsB",
            counts: [4, 0, 1, 3],
            pa: 0.5,
            pb: 0.625,
            pab: 0.5,
            d: 0.1875,
            r2: 0.6,
            dprime: 1.0,
        },
        PairStats {
            id1: "rsA",
            id2: "rsC",
            counts: [0, 4, 0, 4],
            pa: 0.5,
            pb: 0.0,
            pab: 0.0,
            d: 0.0,
            r2: 0.0,
            dprime: 0.0,
        },
        PairStats {
            id1: "rsA",
            id2: "rsD",
            counts: [2, 2, 1, 1],
            pa: 0.5,
            pb: 0.375,
            pab: 0.25,
            d: 0.0625,
            r2: 0.0625 * 0.0625 / (0.25 * 0.375 * 0.625),
            dprime: 1.0 / 3.0,
        },
        PairStats {
            id1: "rsB",
            id2: "rsC",
            counts: [0, 5, 0, 3],
            pa: 0.625,
            pb: 0.0,
            pab: 0.0,
            d: 0.0,
            r2: 0.0,
            dprime: 0.0,
        },
        PairStats {
            id1: "rsB",
            id2: "rsD",
            counts: [2, 2, 1, 1],
            pa: 0.5,
            pb: 0.375,
            pab: 0.25,
            d: 0.0625,
            r2: 0.0625 * 0.0625 / (0.25 * 0.375 * 0.625),
            dprime: 1.0 / 3.0,
        },
        PairStats {
            id1: "rsC",
            id2: "rsD",
            counts: [0, 0, 3, 3],
            pa: 0.0,
            pb: 0.375,
            pab: 0.0,
            d: 0.0,
            r2: 0.0,
            dprime: 0.0,
        },
    ]
}
