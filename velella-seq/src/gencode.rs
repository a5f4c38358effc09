//! NCBI genetic-code tables and codon membership sets.
//!
//! The ORF finder only needs to know which codons start and which codons
//! stop translation under a given NCBI table. [`GeneticCodeProvider`] is the
//! seam for that lookup; [`NcbiGeneticCodes`] is the built-in provider for
//! the commonly used tables. [`CodonSet`] turns a codon list into a
//! membership set closed under T→U substitution, so DNA and RNA inputs test
//! alike.

use velella_core::{Result, VelellaError};

/// A nucleotide triplet.
pub type Codon = [u8; 3];

/// Start and stop codons of one NCBI translation table, in the DNA alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneticCode {
    /// NCBI translation table number.
    pub id: u32,
    /// Codons that can initiate translation.
    pub start_codons: Vec<Codon>,
    /// Codons that terminate translation.
    pub stop_codons: Vec<Codon>,
}

/// Source of genetic-code tables.
///
/// Given a numeric NCBI table identifier, a provider yields the table's
/// start and stop codon lists. The ORF finder makes no other assumption
/// about where the table comes from.
pub trait GeneticCodeProvider {
    /// Look up the table with the given NCBI identifier.
    fn genetic_code(&self, id: u32) -> Result<GeneticCode>;
}

/// Built-in provider for the NCBI translation tables this crate ships.
///
/// Covers table 1 (standard), 2 (vertebrate mitochondrial), 4
/// (mold/protozoan/coelenterate mitochondrial) and 11 (bacterial, archaeal
/// and plant plastid). Other identifiers are rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct NcbiGeneticCodes;

impl GeneticCodeProvider for NcbiGeneticCodes {
    fn genetic_code(&self, id: u32) -> Result<GeneticCode> {
        let (start_codons, stop_codons): (&[Codon], &[Codon]) = match id {
            1 => (
                &[*b"TTG", *b"CTG", *b"ATG"],
                &[*b"TAA", *b"TAG", *b"TGA"],
            ),
            2 => (
                &[*b"ATT", *b"ATC", *b"ATA", *b"ATG", *b"GTG"],
                &[*b"TAA", *b"TAG", *b"AGA", *b"AGG"],
            ),
            4 => (
                &[
                    *b"TTA", *b"TTG", *b"CTG", *b"ATT", *b"ATC", *b"ATA", *b"ATG", *b"GTG",
                ],
                &[*b"TAA", *b"TAG"],
            ),
            11 => (
                &[
                    *b"TTG", *b"CTG", *b"ATT", *b"ATC", *b"ATA", *b"ATG", *b"GTG",
                ],
                &[*b"TAA", *b"TAG", *b"TGA"],
            ),
            other => {
                return Err(VelellaError::InvalidInput(format!(
                    "unsupported genetic code table {}",
                    other
                )))
            }
        };
        Ok(GeneticCode {
            id,
            start_codons: start_codons.to_vec(),
            stop_codons: stop_codons.to_vec(),
        })
    }
}

/// A read-only membership set of codons, closed under T→U substitution.
///
/// Every codon containing `T` is stored alongside its RNA spelling, so
/// `contains` succeeds for inputs using either alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodonSet {
    codons: Vec<Codon>,
}

impl CodonSet {
    /// Build a set from DNA-alphabet codons, adding the U-spelling of each
    /// T-containing codon.
    pub fn new(codons: &[Codon]) -> Self {
        let mut expanded = codons.to_vec();
        for codon in codons {
            let rna = codon.map(|b| if b == b'T' { b'U' } else { b });
            if rna != *codon {
                expanded.push(rna);
            }
        }
        Self { codons: expanded }
    }

    /// Whether the 3-byte slice matches any codon in the set.
    pub fn contains(&self, codon: &[u8]) -> bool {
        codon.len() == 3 && self.codons.iter().any(|c| c == codon)
    }

    /// Number of codons held, RNA spellings included.
    pub fn len(&self) -> usize {
        self.codons.len()
    }

    /// True when the set holds no codons.
    pub fn is_empty(&self) -> bool {
        self.codons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table() {
        let code = NcbiGeneticCodes.genetic_code(1).unwrap();
        assert_eq!(code.stop_codons, vec![*b"TAA", *b"TAG", *b"TGA"]);
        assert!(code.start_codons.contains(b"ATG"));
        assert!(code.start_codons.contains(b"TTG"));
    }

    #[test]
    fn vertebrate_mitochondrial_stops() {
        // Table 2 reassigns TGA to Trp and stops at AGA/AGG instead.
        let code = NcbiGeneticCodes.genetic_code(2).unwrap();
        assert!(!code.stop_codons.contains(b"TGA"));
        assert!(code.stop_codons.contains(b"AGA"));
        assert!(code.stop_codons.contains(b"AGG"));
    }

    #[test]
    fn unknown_table_rejected() {
        assert!(NcbiGeneticCodes.genetic_code(99).is_err());
        assert!(NcbiGeneticCodes.genetic_code(0).is_err());
    }

    #[test]
    fn codon_set_accepts_dna_and_rna() {
        let stops = CodonSet::new(&[*b"TAA", *b"TAG", *b"TGA"]);
        assert!(stops.contains(b"TAA"));
        assert!(stops.contains(b"UAA"));
        assert!(stops.contains(b"UGA"));
        assert!(!stops.contains(b"AAA"));
    }

    #[test]
    fn codon_set_without_t_is_not_expanded() {
        let set = CodonSet::new(&[*b"AGA", *b"AGG"]);
        assert_eq!(set.len(), 2);
        assert!(set.contains(b"AGA"));
    }

    #[test]
    fn codon_set_rejects_wrong_length() {
        let set = CodonSet::new(&[*b"ATG"]);
        assert!(!set.contains(b"AT"));
        assert!(!set.contains(b"ATGA"));
        assert!(!set.contains(b""));
    }

    #[test]
    fn codon_set_mixed_alphabet_member() {
        // The expansion replaces every T, so a half-substituted spelling is
        // not a member.
        let set = CodonSet::new(&[*b"TTG"]);
        assert!(set.contains(b"TTG"));
        assert!(set.contains(b"UUG"));
        assert!(!set.contains(b"TUG"));
    }
}
