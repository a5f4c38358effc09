//! IUPAC nucleotide alphabet support for the ORF scanner.
//!
//! The complement table accepts both DNA and RNA spellings on input but
//! complements into DNA: `T → A` and `U → A` both hold, so a
//! reverse-complemented buffer is always T-based. Degenerate IUPAC codes map
//! to their standard complements; any other byte has no complement and marks
//! the base as invalid.

/// Complement of an uppercase IUPAC nucleotide, or `None` if the byte is not
/// part of the alphabet.
pub fn complement(b: u8) -> Option<u8> {
    match b {
        b'A' => Some(b'T'),
        b'T' => Some(b'A'),
        b'U' => Some(b'A'),
        b'C' => Some(b'G'),
        b'G' => Some(b'C'),
        b'R' => Some(b'Y'), // A|G → T|C
        b'Y' => Some(b'R'),
        b'S' => Some(b'S'), // G|C → C|G
        b'W' => Some(b'W'), // A|T → T|A
        b'K' => Some(b'M'), // G|T → C|A
        b'M' => Some(b'K'),
        b'B' => Some(b'V'), // C|G|T → G|C|A
        b'V' => Some(b'B'),
        b'D' => Some(b'H'), // A|G|T → T|C|A
        b'H' => Some(b'D'),
        b'N' => Some(b'N'),
        _ => None,
    }
}

/// True when any byte of the codon is `N` or falls outside the IUPAC
/// alphabet. Such codons count toward the scanner's gap budget.
pub fn is_gap_or_n(codon: &[u8]) -> bool {
    codon
        .iter()
        .any(|&b| b == b'N' || complement(b).is_none())
}
