use super::aligned::AlignedSet;
use super::center::select_center;
use super::error::{MsaError, Result};
use super::score::sum_of_pairs;
use super::scoring::ScoringParams;
use super::star::star_align;

/// Runs of non-conserved columns shorter than this are left alone.
pub const MIN_BLOCK_WIDTH: usize = 3;

/// Half-open column range `[lo, hi)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub lo: usize,
    pub hi: usize,
}

impl Block {
    pub fn width(&self) -> usize {
        self.hi - self.lo
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefineOptions {
    /// Upper bound on refinement passes.
    pub max_iterations: usize,
}

impl Default for RefineOptions {
    fn default() -> Self {
        Self {
            max_iterations: 100,
        }
    }
}

/// Result of one sweep over all blocks.
#[derive(Debug, Clone)]
pub struct PassOutcome {
    pub alignment: AlignedSet,
    pub blocks: Vec<Block>,
    pub accepted: usize,
}

impl PassOutcome {
    pub fn improved(&self) -> bool {
        self.accepted > 0
    }
}

#[derive(Debug, Clone)]
pub struct RefineReport {
    pub alignment: AlignedSet,
    /// Passes run, including the final one that accepted nothing.
    pub iterations: usize,
    pub accepted_blocks: usize,
    /// Score before refinement, then after each pass.
    pub scores: Vec<i32>,
    pub converged: bool,
}

impl RefineReport {
    pub fn score(&self) -> i32 {
        self.scores.last().copied().unwrap_or_default()
    }
}

/// Maximal runs of non-conserved columns wider than two columns, bounded by
/// conserved columns or by an end of the alignment. An alignment without any
/// conserved column yields no block.
pub fn find_blocks(set: &AlignedSet) -> Vec<Block> {
    let width = set.width();
    let anchors: Vec<usize> = (0..width).filter(|&idx| set.is_conserved(idx)).collect();
    if anchors.is_empty() {
        return Vec::new();
    }

    let mut blocks = Vec::new();
    let mut lo = 0;
    for hi in anchors.into_iter().chain(std::iter::once(width)) {
        if hi - lo >= MIN_BLOCK_WIDTH {
            blocks.push(Block { lo, hi });
        }
        lo = hi + 1;
    }

    blocks
}

/// Fresh star alignment of the gap-stripped rows of `block`.
pub fn realign_block(set: &AlignedSet, block: Block, params: &ScoringParams) -> Result<AlignedSet> {
    let seqs = set.slice(block.lo, block.hi).ungapped();
    let center = select_center(&seqs, params).ok_or(MsaError::Empty)?;
    star_align(&seqs, &center, params)
}

/// One refinement sweep. Blocks are taken from `set` and re-aligned
/// independently; improvements are spliced left to right into a working copy,
/// shifting later blocks by the accumulated width change.
pub fn refine_pass(set: &AlignedSet, params: &ScoringParams) -> Result<PassOutcome> {
    let blocks = find_blocks(set);

    let mut working = set.clone();
    let mut offset: isize = 0;
    let mut accepted = 0;

    for block in &blocks {
        let old_score = sum_of_pairs(&set.slice(block.lo, block.hi), params);
        let realigned = realign_block(set, *block, params)?;
        let new_score = sum_of_pairs(&realigned, params);

        if new_score > old_score {
            let lo = shift(block.lo, offset)?;
            let hi = shift(block.hi, offset)?;
            working = working.splice(lo, hi, &realigned)?;
            offset += realigned.width() as isize - block.width() as isize;
            accepted += 1;
            log::debug!(
                "block [{}, {}) accepted: {} -> {}",
                block.lo,
                block.hi,
                old_score,
                new_score
            );
        } else {
            log::trace!(
                "block [{}, {}) rejected: {} -> {}",
                block.lo,
                block.hi,
                old_score,
                new_score
            );
        }
    }

    Ok(PassOutcome {
        alignment: working,
        blocks,
        accepted,
    })
}

fn shift(column: usize, offset: isize) -> Result<usize> {
    column.checked_add_signed(offset).ok_or_else(|| {
        MsaError::Invariant(format!("block column {} shifted by {}", column, offset))
    })
}

/// Repeats [`refine_pass`] until a pass accepts no block.
///
/// Reaching `max_iterations` first is not an error: a warning is logged and
/// the best alignment so far is returned with `converged` unset. A limit of
/// zero passes skips refinement.
pub fn refine(
    set: AlignedSet,
    params: &ScoringParams,
    options: &RefineOptions,
) -> Result<RefineReport> {
    let mut alignment = set;
    let mut scores = vec![sum_of_pairs(&alignment, params)];
    let mut accepted_blocks = 0;
    let mut iterations = 0;
    let mut converged = false;

    if options.max_iterations == 0 {
        log::info!("block refinement skipped");
        return Ok(RefineReport {
            alignment,
            iterations,
            accepted_blocks,
            scores,
            converged,
        });
    }

    while iterations < options.max_iterations {
        iterations += 1;
        let outcome = refine_pass(&alignment, params)?;
        log::debug!(
            "pass {}: {} of {} blocks accepted",
            iterations,
            outcome.accepted,
            outcome.blocks.len()
        );

        let improved = outcome.improved();
        accepted_blocks += outcome.accepted;
        alignment = outcome.alignment;
        scores.push(sum_of_pairs(&alignment, params));

        if !improved {
            converged = true;
            break;
        }
    }

    if !converged {
        log::warn!(
            "block refinement did not converge within {} passes, keeping the best alignment found",
            options.max_iterations
        );
    }

    Ok(RefineReport {
        alignment,
        iterations,
        accepted_blocks,
        scores,
        converged,
    })
}
