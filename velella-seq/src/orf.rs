//! Open reading frame (ORF) discovery.
//!
//! [`OrfFinder`] owns an uppercased forward buffer and its reverse
//! complement, and enumerates ORFs over any subset of the six reading frames
//! in a single pass per strand. Three per-phase state machines walk the
//! buffer together, so each byte is examined once and the gap/length filters
//! are computed incrementally.
//!
//! Start handling is configurable via [`StartMode`], and the scanner starts
//! out *inside* an ORF in every frame: a stop codon seen before any start
//! still terminates an ORF, which is then flagged with
//! `has_incomplete_start`. Coordinates always index the scanned strand's own
//! buffer; for [`Strand::Minus`] that is the reverse complement, counted
//! from its 5′ end.

use velella_core::{Result, VelellaError};

use crate::alphabet::{complement, is_gap_or_n};
use crate::gencode::{CodonSet, GeneticCodeProvider};

/// Scan phase offset 0.
pub const FRAME_1: u32 = 0b001;
/// Scan phase offset 1.
pub const FRAME_2: u32 = 0b010;
/// Scan phase offset 2.
pub const FRAME_3: u32 = 0b100;
/// All three phases of a strand.
pub const ALL_FRAMES: u32 = FRAME_1 | FRAME_2 | FRAME_3;

/// Strand a location refers to.
///
/// The discriminants are the integer codes used by the persisted ORF
/// descriptor format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i32)]
pub enum Strand {
    /// The input sequence as given.
    Plus = 1,
    /// The reverse complement of the input.
    Minus = -1,
}

impl TryFrom<i32> for Strand {
    type Error = VelellaError;

    fn try_from(code: i32) -> Result<Self> {
        match code {
            1 => Ok(Strand::Plus),
            -1 => Ok(Strand::Minus),
            other => Err(VelellaError::Parse(format!(
                "unknown strand code {}",
                other
            ))),
        }
    }
}

/// What counts as the beginning of an ORF.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartMode {
    /// Longest fragment whose first codon is a start codon.
    StartToStop,
    /// Longest fragment; any codon may begin an ORF.
    AnyToStop,
    /// Fragment from the last encountered start codon to the stop; a start
    /// codon seen mid-ORF re-anchors the ORF there.
    LastStartToStop,
}

/// Location of one ORF on a strand buffer.
///
/// `to > from` always holds; `to - from` is the ORF length in bases,
/// including the terminating stop codon when the ORF ends at the final codon
/// of the buffer, and including a trailing incomplete codon when the
/// sequence ends mid-codon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrfLocation {
    /// Caller-assigned identifier, carried by the descriptor format.
    pub id: Option<u32>,
    /// Start offset into the strand's buffer.
    pub from: usize,
    /// End offset (exclusive) into the strand's buffer.
    pub to: usize,
    /// No start codon was observed for this ORF.
    pub has_incomplete_start: bool,
    /// The ORF ran into the end of the buffer instead of a stop codon.
    pub has_incomplete_end: bool,
    /// Buffer the coordinates refer to.
    pub strand: Strand,
}

/// Search constraints for [`OrfFinder::find_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrfSearchParams {
    /// ORFs of `min_length` codons or fewer are discarded (strict minimum).
    pub min_length: usize,
    /// ORFs longer than `max_length` codons are discarded.
    pub max_length: usize,
    /// ORFs containing more than `max_gaps` gap-or-N codons are discarded.
    pub max_gaps: usize,
    /// Frame mask for the forward strand; `0` skips the strand entirely.
    pub forward_frames: u32,
    /// Frame mask for the reverse-complement strand.
    pub reverse_frames: u32,
    /// Start-codon policy.
    pub start_mode: StartMode,
}

impl Default for OrfSearchParams {
    fn default() -> Self {
        Self {
            min_length: 0,
            max_length: usize::MAX,
            max_gaps: usize::MAX,
            forward_frames: ALL_FRAMES,
            reverse_frames: ALL_FRAMES,
            start_mode: StartMode::AnyToStop,
        }
    }
}

/// Six-frame ORF finder over one nucleotide sequence at a time.
#[derive(Debug, Clone)]
pub struct OrfFinder {
    start_codons: CodonSet,
    stop_codons: CodonSet,
    sequence: Vec<u8>,
    reverse_complement: Vec<u8>,
}

impl OrfFinder {
    /// Create a finder for the given NCBI translation table.
    ///
    /// The stop set always comes from the provider. With
    /// `use_all_table_starts` the provider's start codons are used;
    /// otherwise only `ATG` starts an ORF. Both sets accept DNA and RNA
    /// spellings.
    pub fn new(
        provider: &dyn GeneticCodeProvider,
        gen_code: u32,
        use_all_table_starts: bool,
    ) -> Result<Self> {
        let code = provider.genetic_code(gen_code)?;
        let start_codons = if use_all_table_starts {
            CodonSet::new(&code.start_codons)
        } else {
            CodonSet::new(&[*b"ATG"])
        };
        Ok(Self {
            start_codons,
            stop_codons: CodonSet::new(&code.stop_codons),
            sequence: Vec::new(),
            reverse_complement: Vec::new(),
        })
    }

    /// Install a new sequence, replacing any previous one.
    ///
    /// The input is uppercased into the forward buffer and reverse
    /// complemented into the minus-strand buffer. Fails on sequences shorter
    /// than 3 bases and on any byte without an IUPAC complement; on failure
    /// no buffers are retained.
    pub fn set_sequence(&mut self, seq: &[u8]) -> Result<()> {
        self.sequence.clear();
        self.reverse_complement.clear();

        if seq.len() < 3 {
            return Err(VelellaError::InvalidInput(format!(
                "sequence of {} bases is too short for a codon",
                seq.len()
            )));
        }

        self.sequence = seq.to_ascii_uppercase();
        self.reverse_complement.reserve(seq.len());
        for i in (0..self.sequence.len()).rev() {
            match complement(self.sequence[i]) {
                Some(c) => self.reverse_complement.push(c),
                None => {
                    let bad = self.sequence[i];
                    self.sequence.clear();
                    self.reverse_complement.clear();
                    return Err(VelellaError::InvalidInput(format!(
                        "base '{}' (0x{:02X}) at position {} has no complement",
                        bad as char, bad, i
                    )));
                }
            }
        }
        Ok(())
    }

    /// The uppercased forward buffer, if a sequence is set.
    pub fn sequence(&self) -> Option<&[u8]> {
        if self.sequence.is_empty() {
            None
        } else {
            Some(&self.sequence)
        }
    }

    /// The reverse-complement buffer, if a sequence is set.
    pub fn reverse_complement(&self) -> Option<&[u8]> {
        if self.reverse_complement.is_empty() {
            None
        } else {
            Some(&self.reverse_complement)
        }
    }

    /// Slice of the strand buffer covered by `location`.
    pub fn view(&self, location: &OrfLocation) -> Result<&[u8]> {
        let buffer = match location.strand {
            Strand::Plus => &self.sequence,
            Strand::Minus => &self.reverse_complement,
        };
        if buffer.is_empty() {
            return Err(VelellaError::InvalidInput(
                "no sequence is set".to_string(),
            ));
        }
        if location.to <= location.from || location.to > buffer.len() {
            return Err(VelellaError::InvalidInput(format!(
                "location {}..{} is not within a {}-base sequence",
                location.from,
                location.to,
                buffer.len()
            )));
        }
        Ok(&buffer[location.from..location.to])
    }

    /// Enumerate ORFs on both strands under the given constraints.
    ///
    /// Emission order is unspecified; callers needing an order should sort.
    /// Returns nothing when no sequence is set.
    pub fn find_all(&self, params: &OrfSearchParams) -> Vec<OrfLocation> {
        let mut result = Vec::new();
        if params.forward_frames != 0 {
            self.scan_strand(&self.sequence, params, params.forward_frames, Strand::Plus, &mut result);
        }
        if params.reverse_frames != 0 {
            self.scan_strand(
                &self.reverse_complement,
                params,
                params.reverse_frames,
                Strand::Minus,
                &mut result,
            );
        }
        result
    }

    /// Single-pass scan of one strand buffer.
    ///
    /// Three interleaved state machines, one per phase, share the walk. Each
    /// starts inside an ORF anchored at its phase offset, so a sequence that
    /// begins mid-ORF still yields the fragment up to the first stop.
    fn scan_strand(
        &self,
        buffer: &[u8],
        params: &OrfSearchParams,
        frames: u32,
        strand: Strand,
        result: &mut Vec<OrfLocation>,
    ) {
        let len = buffer.len();
        if len < 3 {
            return;
        }

        const FRAME_BITS: [u32; 3] = [FRAME_1, FRAME_2, FRAME_3];

        let mut inside_orf = [true; 3];
        let mut has_start_codon = [false; 3];
        let mut count_gaps = [0usize; 3];
        let mut count_length = [0usize; 3];
        let mut from: [usize; 3] = [0, 1, 2];

        for pos in 0..=(len - 3) {
            let frame = pos % 3;
            if frames & FRAME_BITS[frame] == 0 {
                continue;
            }

            let codon = &buffer[pos..pos + 3];
            // no complete codon follows in this phase
            let is_last = pos + 6 > len;

            let should_start = match params.start_mode {
                StartMode::StartToStop => {
                    !inside_orf[frame] && self.start_codons.contains(codon)
                }
                StartMode::AnyToStop => !inside_orf[frame],
                StartMode::LastStartToStop => self.start_codons.contains(codon),
            };

            // never open an ORF on the last codon
            if should_start && !is_last {
                inside_orf[frame] = true;
                has_start_codon[frame] = true;
                from[frame] = pos;
                count_gaps[frame] = 0;
                count_length[frame] = 0;
            }

            if inside_orf[frame] {
                count_length[frame] += 1;
                if is_gap_or_n(codon) {
                    count_gaps[frame] += 1;
                }
            }

            let stop = self.stop_codons.contains(codon);
            if inside_orf[frame] && (stop || is_last) {
                inside_orf[frame] = false;

                // the last (possibly stop) codon belongs to the ORF when the
                // buffer ends here; an interior stop codon is excluded
                let to = pos + if is_last { 3 } else { 0 };

                // first codon of the walk was a stop
                if to == from[frame] {
                    continue;
                }

                if count_gaps[frame] > params.max_gaps
                    || count_length[frame] > params.max_length
                    || count_length[frame] <= params.min_length
                {
                    continue;
                }

                result.push(OrfLocation {
                    id: None,
                    from: from[frame],
                    to,
                    has_incomplete_start: !has_start_codon[frame],
                    has_incomplete_end: !stop,
                    strand,
                });
            }
        }
    }
}

/// Decode a persisted ORF descriptor from a header line.
///
/// Recognizes the whitespace-delimited token
/// `[Orf: id, from, to, strand, hasIncompleteStart, hasIncompleteEnd]`.
/// The final flag may be absent, defaulting to `false`; fewer than five
/// decoded fields is an error.
pub fn parse_orf_header(header: &str) -> Result<OrfLocation> {
    let start = header
        .match_indices("[Orf:")
        .find(|(i, _)| *i == 0 || header.as_bytes()[i - 1].is_ascii_whitespace())
        .map(|(i, _)| i)
        .ok_or_else(|| {
            VelellaError::Parse(format!("no ORF descriptor in header '{}'", header))
        })?;

    let body = &header[start + "[Orf:".len()..];
    let body = match body.find(']') {
        Some(end) => &body[..end],
        None => body,
    };

    let mut fields = body.split(',').map(str::trim);
    let mut next_int = || -> Option<i64> { fields.next()?.parse().ok() };

    let parsed: Vec<i64> = std::iter::from_fn(&mut next_int).take(6).collect();
    if parsed.len() < 5 {
        return Err(VelellaError::Parse(format!(
            "could not parse ORF descriptor in header '{}'",
            header
        )));
    }

    let as_usize = |v: i64| -> Result<usize> {
        usize::try_from(v)
            .map_err(|_| VelellaError::Parse(format!("negative coordinate {} in ORF descriptor", v)))
    };

    Ok(OrfLocation {
        id: Some(u32::try_from(parsed[0]).map_err(|_| {
            VelellaError::Parse(format!("invalid ORF id {} in descriptor", parsed[0]))
        })?),
        from: as_usize(parsed[1])?,
        to: as_usize(parsed[2])?,
        strand: Strand::try_from(parsed[3] as i32)?,
        has_incomplete_start: parsed[4] != 0,
        has_incomplete_end: parsed.get(5).copied().unwrap_or(0) != 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gencode::NcbiGeneticCodes;
    use std::collections::HashSet;

    fn finder() -> OrfFinder {
        OrfFinder::new(&NcbiGeneticCodes, 1, false).unwrap()
    }

    fn forward_frame1(start_mode: StartMode) -> OrfSearchParams {
        OrfSearchParams {
            forward_frames: FRAME_1,
            reverse_frames: 0,
            start_mode,
            ..OrfSearchParams::default()
        }
    }

    fn locs(finder: &OrfFinder, params: &OrfSearchParams) -> Vec<(usize, usize, bool, bool, Strand)> {
        finder
            .find_all(params)
            .into_iter()
            .map(|o| (o.from, o.to, o.has_incomplete_start, o.has_incomplete_end, o.strand))
            .collect()
    }

    // --- scanner ---

    #[test]
    fn stop_on_final_codon_is_included() {
        // The initial inside-ORF state swallows the leading ATG as a start
        // transition, and the terminating TAA is also the buffer's last
        // codon, so the span runs to the end.
        let mut f = finder();
        f.set_sequence(b"ATGAAATAA").unwrap();
        let got = locs(&f, &forward_frame1(StartMode::StartToStop));
        assert_eq!(got, vec![(0, 9, true, false, Strand::Plus)]);
    }

    #[test]
    fn interior_stop_is_excluded() {
        // TAA closes the initial ORF as degenerate, ATG then opens a real
        // one, and the interior TAG stays outside the span.
        let mut f = finder();
        f.set_sequence(b"TAAATGAAATAGCCC").unwrap();
        let got = locs(&f, &forward_frame1(StartMode::StartToStop));
        assert_eq!(got, vec![(3, 9, false, false, Strand::Plus)]);
    }

    #[test]
    fn no_stop_reports_incomplete_end() {
        let mut f = finder();
        f.set_sequence(b"ATGAAAAAA").unwrap();
        let got = locs(&f, &forward_frame1(StartMode::StartToStop));
        assert_eq!(got, vec![(0, 9, true, true, Strand::Plus)]);
    }

    #[test]
    fn leading_stop_is_discarded() {
        // The initial state is inside an ORF, so a stop at position 0 would
        // produce a zero-length span; the scanner drops it and restarts.
        let mut f = finder();
        f.set_sequence(b"TAAATGTAA").unwrap();
        let got = locs(&f, &forward_frame1(StartMode::AnyToStop));
        assert_eq!(got, vec![(3, 9, false, false, Strand::Plus)]);
    }

    #[test]
    fn min_length_is_strict() {
        // The emitted ORF counts 3 codons (ATG, AAA and the stop position).
        let mut f = finder();
        f.set_sequence(b"TAAATGAAATAGCCC").unwrap();

        let mut params = forward_frame1(StartMode::StartToStop);
        params.min_length = 3;
        assert!(f.find_all(&params).is_empty());

        params.min_length = 2;
        assert_eq!(f.find_all(&params).len(), 1);
    }

    #[test]
    fn max_length_filter() {
        let mut f = finder();
        f.set_sequence(b"TAAATGAAATAGCCC").unwrap();

        let mut params = forward_frame1(StartMode::StartToStop);
        params.max_length = 2;
        assert!(f.find_all(&params).is_empty());

        params.max_length = 3;
        assert_eq!(f.find_all(&params).len(), 1);
    }

    #[test]
    fn gap_codons_respect_budget() {
        let mut f = finder();
        f.set_sequence(b"ATGNNNTAGCCC").unwrap();

        let mut params = forward_frame1(StartMode::AnyToStop);
        params.max_gaps = 0;
        assert!(f.find_all(&params).is_empty());

        params.max_gaps = 1;
        let got = locs(&f, &params);
        assert_eq!(got, vec![(0, 6, true, false, Strand::Plus)]);
    }

    #[test]
    fn last_start_to_stop_reanchors_on_new_start() {
        let mut f = finder();
        f.set_sequence(b"ATGAAAATGAAATAGCCC").unwrap();
        let got = locs(&f, &forward_frame1(StartMode::LastStartToStop));
        assert_eq!(got, vec![(6, 12, false, false, Strand::Plus)]);
    }

    #[test]
    fn start_to_stop_keeps_first_anchor() {
        // Same input as above: the initial inside-ORF state holds from
        // position 0 and the mid-sequence ATG does not re-anchor.
        let mut f = finder();
        f.set_sequence(b"ATGAAAATGAAATAGCCC").unwrap();
        let got = locs(&f, &forward_frame1(StartMode::StartToStop));
        assert_eq!(got, vec![(0, 12, true, false, Strand::Plus)]);
    }

    #[test]
    fn frame_mask_selects_phase() {
        let mut f = finder();
        f.set_sequence(b"AATGAAATAACC").unwrap();

        let mut params = forward_frame1(StartMode::StartToStop);
        params.forward_frames = FRAME_2;
        assert_eq!(locs(&f, &params), vec![(1, 10, true, false, Strand::Plus)]);

        params.forward_frames = FRAME_1;
        assert_eq!(locs(&f, &params), vec![(0, 12, true, true, Strand::Plus)]);

        params.forward_frames = FRAME_1 | FRAME_2;
        let got: HashSet<_> = locs(&f, &params).into_iter().collect();
        let want: HashSet<_> = [
            (0, 12, true, true, Strand::Plus),
            (1, 10, true, false, Strand::Plus),
        ]
        .into_iter()
        .collect();
        assert_eq!(got, want);
    }

    #[test]
    fn minus_strand_scans_reverse_complement() {
        // Reverse complement of TTAGGGCAT is ATGCCCTAA; coordinates refer to
        // that buffer.
        let mut f = finder();
        f.set_sequence(b"TTAGGGCAT").unwrap();
        let params = OrfSearchParams {
            forward_frames: 0,
            reverse_frames: FRAME_1,
            start_mode: StartMode::StartToStop,
            ..OrfSearchParams::default()
        };
        let got = locs(&f, &params);
        assert_eq!(got, vec![(0, 9, true, false, Strand::Minus)]);
        assert_eq!(f.view(&f.find_all(&params)[0]).unwrap(), b"ATGCCCTAA");
    }

    #[test]
    fn palindrome_is_strand_symmetric() {
        let mut f = finder();
        f.set_sequence(b"ATGCAT").unwrap();
        assert_eq!(f.reverse_complement().unwrap(), b"ATGCAT");

        let params = OrfSearchParams {
            forward_frames: FRAME_1,
            reverse_frames: FRAME_1,
            ..OrfSearchParams::default()
        };
        let got: HashSet<_> = locs(&f, &params).into_iter().collect();
        let want: HashSet<_> = [
            (0, 6, true, true, Strand::Plus),
            (0, 6, true, true, Strand::Minus),
        ]
        .into_iter()
        .collect();
        assert_eq!(got, want);
    }

    #[test]
    fn scan_is_idempotent() {
        let mut f = finder();
        f.set_sequence(b"TAAATGAAATAGCCCATGAAATAA").unwrap();
        let params = OrfSearchParams::default();
        assert_eq!(f.find_all(&params), f.find_all(&params));
    }

    #[test]
    fn emitted_spans_are_codon_aligned() {
        let mut f = finder();
        f.set_sequence(b"ATGAAATAGATGAAATAAATGAAATGA").unwrap();
        for orf in f.find_all(&OrfSearchParams::default()) {
            assert!(orf.to > orf.from);
            let span = orf.to - orf.from;
            assert!(span % 3 == 0, "span {} not codon-aligned", span);
        }
    }

    #[test]
    fn rna_input_is_scanned_like_dna() {
        let mut f = finder();
        f.set_sequence(b"UAAAUGAAAUAGCCC").unwrap();
        let got = locs(&f, &forward_frame1(StartMode::StartToStop));
        assert_eq!(got, vec![(3, 9, false, false, Strand::Plus)]);
    }

    #[test]
    fn all_table_starts_widens_the_start_set() {
        let seq = b"TAATTGAAATAGCCC";

        let mut atg_only = finder();
        atg_only.set_sequence(seq).unwrap();
        assert!(atg_only
            .find_all(&forward_frame1(StartMode::StartToStop))
            .is_empty());

        let mut all_starts = OrfFinder::new(&NcbiGeneticCodes, 1, true).unwrap();
        all_starts.set_sequence(seq).unwrap();
        let got = locs(&all_starts, &forward_frame1(StartMode::StartToStop));
        assert_eq!(got, vec![(3, 9, false, false, Strand::Plus)]);
    }

    #[test]
    fn stop_set_follows_the_table() {
        let seq = b"TAAATGAAAAGACCC";

        // AGA stops translation under the vertebrate mitochondrial code.
        let mut mito = OrfFinder::new(&NcbiGeneticCodes, 2, false).unwrap();
        mito.set_sequence(seq).unwrap();
        let got = locs(&mito, &forward_frame1(StartMode::StartToStop));
        assert_eq!(got, vec![(3, 9, false, false, Strand::Plus)]);

        // Under the standard code it does not, so the ORF runs to the end.
        let mut standard = finder();
        standard.set_sequence(seq).unwrap();
        let got = locs(&standard, &forward_frame1(StartMode::StartToStop));
        assert_eq!(got, vec![(3, 15, false, true, Strand::Plus)]);
    }

    // --- sequence buffer ---

    #[test]
    fn set_sequence_uppercases_and_complements() {
        let mut f = finder();
        f.set_sequence(b"aacgtu").unwrap();
        assert_eq!(f.sequence().unwrap(), b"AACGTU");
        assert_eq!(f.reverse_complement().unwrap(), b"AACGTT");
    }

    #[test]
    fn set_sequence_rejects_short_input() {
        let mut f = finder();
        assert!(f.set_sequence(b"AT").is_err());
        assert!(f.sequence().is_none());
    }

    #[test]
    fn set_sequence_rejects_unknown_bases() {
        let mut f = finder();
        f.set_sequence(b"ATGAAATAA").unwrap();
        assert!(f.set_sequence(b"ATGXAA").is_err());
        // failure releases both buffers, including the previous sequence
        assert!(f.sequence().is_none());
        assert!(f.reverse_complement().is_none());
        assert!(f.find_all(&OrfSearchParams::default()).is_empty());
    }

    #[test]
    fn view_checks_bounds() {
        let mut f = finder();
        f.set_sequence(b"ATGAAATAA").unwrap();

        let loc = OrfLocation {
            id: None,
            from: 0,
            to: 6,
            has_incomplete_start: false,
            has_incomplete_end: false,
            strand: Strand::Plus,
        };
        assert_eq!(f.view(&loc).unwrap(), b"ATGAAA");

        let past_end = OrfLocation { to: 12, ..loc };
        assert!(f.view(&past_end).is_err());

        let empty = OrfLocation { to: 0, ..loc };
        assert!(f.view(&empty).is_err());

        let unset = finder();
        assert!(unset.view(&loc).is_err());
    }

    // --- header descriptor ---

    #[test]
    fn parse_descriptor_round_trip() {
        let loc = parse_orf_header(">seq12 some annotation [Orf: 7, 12, 96, 1, 0, 1]").unwrap();
        assert_eq!(loc.id, Some(7));
        assert_eq!((loc.from, loc.to), (12, 96));
        assert_eq!(loc.strand, Strand::Plus);
        assert!(!loc.has_incomplete_start);
        assert!(loc.has_incomplete_end);
    }

    #[test]
    fn parse_descriptor_minus_strand() {
        let loc = parse_orf_header("[Orf: 3, 0, 42, -1, 1, 0]").unwrap();
        assert_eq!(loc.strand, Strand::Minus);
        assert!(loc.has_incomplete_start);
        assert!(!loc.has_incomplete_end);
    }

    #[test]
    fn parse_descriptor_five_fields() {
        // The trailing incomplete-end flag may be missing.
        let loc = parse_orf_header("[Orf: 1, 2, 8, 1, 1]").unwrap();
        assert!(loc.has_incomplete_start);
        assert!(!loc.has_incomplete_end);
    }

    #[test]
    fn parse_descriptor_failures() {
        assert!(parse_orf_header(">seq with no descriptor").is_err());
        assert!(parse_orf_header("[Orf: 1, 2, 8, 1]").is_err());
        assert!(parse_orf_header("[Orf: 1, 2, 8, 5, 0, 0]").is_err()); // bad strand
        assert!(parse_orf_header("x[Orf: 1, 2, 8, 1, 0, 0]").is_err()); // mid-word
    }
}
