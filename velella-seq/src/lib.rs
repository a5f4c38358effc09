//! Open reading frame discovery for the velella bioinformatics crates.
//!
//! Scans nucleotide sequences for ORFs across any subset of the six reading
//! frames (three per strand), under configurable start/stop codon policies
//! and length/gap constraints:
//!
//! - **Alphabet** — IUPAC complement table via [`alphabet::complement`]
//! - **Genetic codes** — [`NcbiGeneticCodes`] provider behind the
//!   [`GeneticCodeProvider`] seam, [`CodonSet`] membership tests
//! - **ORF search** — [`OrfFinder`] with [`OrfSearchParams`] and
//!   [`StartMode`], emitting [`OrfLocation`]s
//! - **Persisted descriptors** — [`parse_orf_header`]
//!
//! # Example
//!
//! ```
//! use velella_seq::{NcbiGeneticCodes, OrfFinder, OrfSearchParams, StartMode, FRAME_1};
//!
//! let mut finder = OrfFinder::new(&NcbiGeneticCodes, 1, false).unwrap();
//! finder.set_sequence(b"TAAATGAAATAGCCC").unwrap();
//!
//! let params = OrfSearchParams {
//!     forward_frames: FRAME_1,
//!     reverse_frames: 0,
//!     start_mode: StartMode::StartToStop,
//!     ..OrfSearchParams::default()
//! };
//! let orfs = finder.find_all(&params);
//! assert_eq!(orfs.len(), 1);
//! assert_eq!((orfs[0].from, orfs[0].to), (3, 9));
//! assert_eq!(finder.view(&orfs[0]).unwrap(), b"ATGAAA");
//! ```

pub mod alphabet;
pub mod gencode;
pub mod orf;

// Re-export the genetic-code surface
pub use gencode::{Codon, CodonSet, GeneticCode, GeneticCodeProvider, NcbiGeneticCodes};

// Re-export the ORF search surface
pub use orf::{
    parse_orf_header, OrfFinder, OrfLocation, OrfSearchParams, StartMode, Strand, ALL_FRAMES,
    FRAME_1, FRAME_2, FRAME_3,
};
