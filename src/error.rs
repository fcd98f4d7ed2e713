use thiserror::Error;

#[derive(Debug, Error)]
pub enum CustomError {
    #[error("could not read {path}")]
    ReadWithPath {
        #[source]
        source: std::io::Error,
        path: std::path::PathBuf,
    },

    #[error("could not write to {path}")]
    Write {
        #[source]
        source: std::io::Error,
        path: std::path::PathBuf,
    },

    #[error("could not create output directory")]
    OutputDir {
        #[source]
        source: std::io::Error,
    },

    #[error("could not read CSV file {path}")]
    CsvRead {
        #[source]
        source: csv::Error,
        path: std::path::PathBuf,
    },

    #[error("could not write to CSV")]
    CsvWrite(#[from] csv::Error),

    #[error("could not write npz archive")]
    NpzWrite(#[from] ndarray_npy::WriteNpzError),

    #[error("could not append to npz archive")]
    Zip(#[from] zip::result::ZipError),

    #[error("could not encode variant IDs as JSON")]
    Json(#[from] serde_json::Error),

    #[error("could not build thread pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("no #CHROM header line found before the first record")]
    VcfHeaderMissing,

    #[error("expected {expected} fields (got {n_fields}) in line {line_num} of VCF")]
    VcfFields {
        line_num: usize,
        n_fields: usize,
        expected: usize,
    },

    #[error("unexpected header line {line_num} after the #CHROM header")]
    VcfHeaderRepeated { line_num: usize },

    #[error("no GT key in FORMAT field on line {line_num} of VCF")]
    VcfMissingGt { line_num: usize },

    #[error("no sample columns left to analyze")]
    NoSamples,

    #[error("variant {id} not found in genotype table")]
    VariantNotFound { id: String },

    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error(
        "variants {id_1} and {id_2} have different individual counts ({n_1} vs {n_2})"
    )]
    GenotypeCountMismatch {
        id_1: String,
        id_2: String,
        n_1: usize,
        n_2: usize,
    },
}

impl CustomError {
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CustomError>;
