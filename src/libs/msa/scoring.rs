/// The reserved gap symbol.
pub const GAP: u8 = b'-';

/// Linear scoring scheme shared by the pairwise aligner and the
/// sum-of-pairs evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringParams {
    pub match_score: i32,
    pub mismatch_score: i32,
    pub gap_score: i32,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            match_score: 3,
            mismatch_score: -1,
            gap_score: -2,
        }
    }
}

impl ScoringParams {
    pub fn new(match_score: i32, mismatch_score: i32, gap_score: i32) -> Self {
        Self {
            match_score,
            mismatch_score,
            gap_score,
        }
    }

    /// Cost of putting `a` and `b` on the same DP diagonal step.
    /// Any pairing that involves a gap is charged the gap cost, including
    /// gap against gap.
    pub fn pairing(&self, a: u8, b: u8) -> i32 {
        if a == GAP || b == GAP {
            self.gap_score
        } else if a == b {
            self.match_score
        } else {
            self.mismatch_score
        }
    }

    /// Score of one row pair inside an alignment column. Two gaps cost nothing.
    pub fn column_pair(&self, a: u8, b: u8) -> i32 {
        match (a == GAP, b == GAP) {
            (true, true) => 0,
            (true, false) | (false, true) => self.gap_score,
            (false, false) if a == b => self.match_score,
            (false, false) => self.mismatch_score,
        }
    }
}

/// Removes every gap symbol.
pub fn ungap(seq: &[u8]) -> Vec<u8> {
    seq.iter().copied().filter(|&b| b != GAP).collect()
}
