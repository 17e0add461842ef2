//! Star multiple sequence alignment with block refinement.
//!
//! The pipeline picks a center sequence from all-pairs global alignment
//! scores, merges every other sequence into the center's coordinates, and then
//! re-aligns poorly conserved column blocks until no block improves the
//! sum-of-pairs score.

pub mod aligned;
pub mod center;
pub mod error;
pub mod pairwise;
pub mod refine;
pub mod score;
pub mod scoring;
pub mod star;

pub use aligned::AlignedSet;
pub use center::{select_center, Center, ScoreTable};
pub use error::{MsaError, Result};
pub use pairwise::{global_align, PairwiseAlignment};
pub use refine::{find_blocks, refine, refine_pass, Block, RefineOptions, RefineReport};
pub use score::{column_score, sum_of_pairs};
pub use scoring::{ungap, ScoringParams, GAP};
pub use star::star_align;

/// Outcome of the whole pipeline.
#[derive(Debug, Clone)]
pub struct MsaReport {
    /// Input index of the center sequence.
    pub center: usize,
    /// Star alignment before refinement.
    pub initial: AlignedSet,
    pub initial_score: i32,
    /// Present unless refinement was skipped.
    pub refined: Option<RefineReport>,
}

impl MsaReport {
    /// The refined alignment if there is one, the star alignment otherwise.
    pub fn alignment(&self) -> &AlignedSet {
        self.refined
            .as_ref()
            .map_or(&self.initial, |report| &report.alignment)
    }

    pub fn score(&self) -> i32 {
        self.refined
            .as_ref()
            .map_or(self.initial_score, |report| report.score())
    }
}

/// Rejects an empty set and sequences carrying the gap symbol.
pub fn validate(seqs: &[Vec<u8>]) -> Result<()> {
    if seqs.is_empty() {
        return Err(MsaError::Empty);
    }
    if let Some(index) = seqs.iter().position(|seq| seq.contains(&GAP)) {
        return Err(MsaError::GapInSequence { index });
    }
    Ok(())
}

/// Center selection followed by star alignment.
pub fn star_msa(seqs: &[Vec<u8>], params: &ScoringParams) -> Result<(usize, AlignedSet)> {
    validate(seqs)?;
    let center = select_center(seqs, params).ok_or(MsaError::Empty)?;
    let aligned = star_align(seqs, &center, params)?;
    Ok((center.index, aligned))
}

/// Runs the full pipeline. Refinement is skipped when `options` is `None`.
///
/// ```
/// use smsa::libs::msa::{align, RefineOptions, ScoringParams};
/// let seqs = vec![b"ACGT".to_vec(), b"ACGT".to_vec(), b"ACGT".to_vec()];
/// let report = align(&seqs, &ScoringParams::default(), Some(&RefineOptions::default())).unwrap();
/// assert_eq!(report.initial_score, 36);
/// assert_eq!(report.score(), 36);
/// assert_eq!(report.alignment().num_gaps(), 0);
/// ```
pub fn align(
    seqs: &[Vec<u8>],
    params: &ScoringParams,
    options: Option<&RefineOptions>,
) -> Result<MsaReport> {
    let (center, initial) = star_msa(seqs, params)?;
    let initial_score = sum_of_pairs(&initial, params);
    log::info!(
        "star alignment of {} sequences: width {}, score {}",
        initial.num_rows(),
        initial.width(),
        initial_score
    );

    let refined = match options {
        Some(options) => {
            let report = refine(initial.clone(), params, options)?;
            log::info!(
                "refinement: {} passes, {} blocks accepted, score {}",
                report.iterations,
                report.accepted_blocks,
                report.score()
            );
            Some(report)
        }
        None => None,
    };

    Ok(MsaReport {
        center,
        initial,
        initial_score,
        refined,
    })
}
