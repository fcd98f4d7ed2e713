use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Allele {
    Ref,
    Alt,
    // Missing calls, multi-allelic indices and anything non-numeric
    Other,
}

impl Allele {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "0" => Allele::Ref,
            "1" => Allele::Alt,
            _ => Allele::Other,
        }
    }
}

/// Two-locus haplotype carried by one chromosome copy.
/// The first digit is the allele at the first variant, the second digit the allele at the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HaplotypeLabel {
    H00,
    H01,
    H10,
    H11,
    Unresolved,
}

impl HaplotypeLabel {
    pub const DEFINED: [HaplotypeLabel; 4] = [
        HaplotypeLabel::H00,
        HaplotypeLabel::H01,
        HaplotypeLabel::H10,
        HaplotypeLabel::H11,
    ];

    pub fn from_alleles(x: Allele, y: Allele) -> Self {
        match (x, y) {
            (Allele::Ref, Allele::Ref) => HaplotypeLabel::H00,
            (Allele::Ref, Allele::Alt) => HaplotypeLabel::H01,
            (Allele::Alt, Allele::Ref) => HaplotypeLabel::H10,
            (Allele::Alt, Allele::Alt) => HaplotypeLabel::H11,
            _ => HaplotypeLabel::Unresolved,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HaplotypeLabel::H00 => "00",
            HaplotypeLabel::H01 => "01",
            HaplotypeLabel::H10 => "10",
            HaplotypeLabel::H11 => "11",
            HaplotypeLabel::Unresolved => "N/A",
        }
    }
}

impl fmt::Display for HaplotypeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HaplotypeCounts {
    pub n00: u64,
    pub n01: u64,
    pub n10: u64,
    pub n11: u64,
}

impl HaplotypeCounts {
    pub fn get(&self, label: HaplotypeLabel) -> u64 {
        match label {
            HaplotypeLabel::H00 => self.n00,
            HaplotypeLabel::H01 => self.n01,
            HaplotypeLabel::H10 => self.n10,
            HaplotypeLabel::H11 => self.n11,
            HaplotypeLabel::Unresolved => 0,
        }
    }

    pub fn total(&self) -> u64 {
        self.n00 + self.n01 + self.n10 + self.n11
    }

    /// Counts in `00, 01, 10, 11` order.
    pub fn as_array(&self) -> [u64; 4] {
        HaplotypeLabel::DEFINED.map(|label| self.get(label))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocusFrequencies {
    pub pa: f64,
    pub pb: f64,
    pub pab: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LdResult {
    pub rsid_1: String,
    pub rsid_2: String,
    pub haplotypes: HaplotypeCounts,
    pub pa: f64,
    pub pb: f64,
    pub pab: f64,
    pub d: f64,
    pub r2: f64,
    pub d_prime: f64,
}

/// Phased genotype strings per variant, one per individual, in sample order.
pub struct GenotypeTable {
    samples: Vec<String>,
    variant_ids: Vec<String>,
    genotypes: HashMap<String, Vec<String>>,
}

impl GenotypeTable {
    pub fn new(samples: Vec<String>) -> Self {
        Self {
            samples,
            variant_ids: Vec::new(),
            genotypes: HashMap::new(),
        }
    }

    /// Returns false (and keeps the existing row) when `id` is already present.
    pub fn insert(&mut self, id: String, genotypes: Vec<String>) -> bool {
        if self.genotypes.contains_key(&id) {
            return false;
        }
        self.variant_ids.push(id.clone());
        self.genotypes.insert(id, genotypes);
        true
    }

    pub fn get(&self, id: &str) -> Option<&[String]> {
        self.genotypes.get(id).map(Vec::as_slice)
    }

    pub fn samples(&self) -> &[String] {
        &self.samples
    }

    pub fn variant_ids(&self) -> &[String] {
        &self.variant_ids
    }
}
