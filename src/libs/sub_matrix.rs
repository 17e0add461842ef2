use anyhow::{anyhow, bail, Result};
use std::io::BufRead;

/// A residue substitution matrix.
///
/// Scores are stored for all pairs of bytes (256x256); lookups are case
/// insensitive for the residues the matrix defines.
pub struct SubMatrix {
    matrix: Vec<i32>,
    alphabet: Vec<u8>,
}

const PAM250_RESIDUES: &[u8; 20] = b"ARNDCQEGHILKMFPSTWYV";

#[rustfmt::skip]
const PAM250_SCORES: [[i32; 20]; 20] = [
    [  2,  -2,   0,   0,  -2,   0,   0,   1,  -1,  -1,  -2,  -1,  -1,  -3,   1,   1,   1,  -6,  -3,   0], // A
    [ -2,   6,   0,  -1,  -4,   1,  -1,  -3,   2,  -2,  -3,   3,   0,  -4,   0,   0,  -1,   2,  -4,  -2], // R
    [  0,   0,   2,   2,  -4,   1,   1,   0,   2,  -2,  -3,   1,  -2,  -3,   0,   1,   0,  -4,  -2,  -2], // N
    [  0,  -1,   2,   4,  -5,   2,   3,   1,   1,  -2,  -4,   0,  -3,  -6,  -1,   0,   0,  -7,  -4,  -2], // D
    [ -2,  -4,  -4,  -5,  12,  -5,  -5,  -3,  -3,  -2,  -6,  -5,  -5,  -4,  -3,   0,  -2,  -8,   0,  -2], // C
    [  0,   1,   1,   2,  -5,   4,   2,  -1,   3,  -2,  -2,   1,  -1,  -5,   0,  -1,  -1,  -5,  -4,  -2], // Q
    [  0,  -1,   1,   3,  -5,   2,   4,   0,   1,  -2,  -3,   0,  -2,  -5,  -1,   0,   0,  -7,  -4,  -2], // E
    [  1,  -3,   0,   1,  -3,  -1,   0,   5,  -2,  -3,  -4,  -2,  -3,  -5,   0,   1,   0,  -7,  -5,  -1], // G
    [ -1,   2,   2,   1,  -3,   3,   1,  -2,   6,  -2,  -2,   0,  -2,  -2,   0,  -1,  -1,  -3,   0,  -2], // H
    [ -1,  -2,  -2,  -2,  -2,  -2,  -2,  -3,  -2,   5,   2,  -2,   2,   1,  -2,  -1,   0,  -5,  -1,   4], // I
    [ -2,  -3,  -3,  -4,  -6,  -2,  -3,  -4,  -2,   2,   6,  -3,   4,   2,  -3,  -3,  -2,  -2,  -1,   2], // L
    [ -1,   3,   1,   0,  -5,   1,   0,  -2,   0,  -2,  -3,   5,   0,  -5,  -1,   0,   0,  -3,  -4,  -2], // K
    [ -1,   0,  -2,  -3,  -5,  -1,  -2,  -3,  -2,   2,   4,   0,   6,   0,  -2,  -2,  -1,  -4,  -2,   2], // M
    [ -3,  -4,  -3,  -6,  -4,  -5,  -5,  -5,  -2,   1,   2,  -5,   0,   9,  -5,  -3,  -3,   0,   7,  -1], // F
    [  1,   0,   0,  -1,  -3,   0,  -1,   0,   0,  -2,  -3,  -1,  -2,  -5,   6,   1,   0,  -6,  -5,  -1], // P
    [  1,   0,   1,   0,   0,  -1,   0,   1,  -1,  -1,  -3,   0,  -2,  -3,   1,   2,   1,  -2,  -3,  -1], // S
    [  1,  -1,   0,   0,  -2,  -1,   0,   0,  -1,   0,  -2,   0,  -1,  -3,   0,   1,   3,  -5,  -3,   0], // T
    [ -6,   2,  -4,  -7,  -8,  -5,  -7,  -7,  -3,  -5,  -2,  -3,  -4,   0,  -6,  -2,  -5,  17,   0,  -6], // W
    [ -3,  -4,  -2,  -4,   0,  -4,  -4,  -5,   0,  -1,  -1,  -4,  -2,   7,  -5,  -3,  -3,   0,  10,  -2], // Y
    [  0,  -2,  -2,  -2,  -2,  -2,  -2,  -1,  -2,   4,   2,  -2,   2,  -1,  -1,  -1,   0,  -6,  -2,   4], // V
];

impl SubMatrix {
    fn empty() -> Self {
        SubMatrix {
            matrix: vec![0; 256 * 256],
            alphabet: Vec::new(),
        }
    }

    /// Sets the score of `r` against `c` for every case combination.
    fn set(&mut self, r: u8, c: u8, score: i32) {
        for row in [r.to_ascii_uppercase(), r.to_ascii_lowercase()] {
            for col in [c.to_ascii_uppercase(), c.to_ascii_lowercase()] {
                self.matrix[(row as usize) * 256 + (col as usize)] = score;
            }
        }
        for b in [r, c] {
            let b = b.to_ascii_uppercase();
            if !self.alphabet.contains(&b) {
                self.alphabet.push(b);
            }
        }
    }

    /// PAM250, the Dayhoff amino acid matrix.
    pub fn pam250() -> Self {
        let mut m = Self::empty();
        for (i, &r) in PAM250_RESIDUES.iter().enumerate() {
            for (j, &c) in PAM250_RESIDUES.iter().enumerate() {
                m.set(r, c, PAM250_SCORES[i][j]);
            }
        }
        m
    }

    /// Load from name (preset) or file.
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "pam250" => Ok(Self::pam250()),
            _ => Self::from_file(name),
        }
    }

    /// Load a matrix in BLAST format: a header line of residues followed by
    /// one row per residue, optionally prefixed with the residue itself.
    /// Lines starting with '#' are comments.
    pub fn from_file(path: &str) -> Result<Self> {
        Self::from_reader(crate::reader(path)?)
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut m = Self::empty();
        let mut header: Option<Vec<u8>> = None;
        let mut rows_read = 0;

        for line in reader.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let parts: Vec<&str> = line.split_whitespace().collect();

            let chars = match &header {
                None => {
                    if !parts.iter().all(|p| p.len() == 1) {
                        bail!("matrix header expected, found '{}'", line);
                    }
                    header = Some(parts.iter().map(|p| p.as_bytes()[0]).collect());
                    continue;
                }
                Some(chars) => chars,
            };

            if rows_read >= chars.len() {
                bail!("matrix has more rows than header residues");
            }
            let row_char = chars[rows_read];
            let values = if parts.len() == chars.len() + 1 {
                if parts[0].as_bytes() != [row_char] {
                    bail!("matrix row '{}' out of header order", parts[0]);
                }
                &parts[1..]
            } else {
                &parts[..]
            };
            if values.len() != chars.len() {
                bail!("matrix row {} has {} scores", row_char as char, values.len());
            }

            for (&col_char, value) in chars.iter().zip(values) {
                let score = value
                    .parse::<i32>()
                    .map_err(|e| anyhow!("bad score '{}': {}", value, e))?;
                m.set(row_char, col_char, score);
            }
            rows_read += 1;
        }

        match header {
            Some(chars) if rows_read == chars.len() => Ok(m),
            _ => bail!("incomplete substitution matrix"),
        }
    }

    /// Get the substitution score for two residues.
    pub fn get_score(&self, r: u8, c: u8) -> i32 {
        self.matrix[(r as usize) * 256 + (c as usize)]
    }

    /// Whether the matrix defines scores for `residue`.
    pub fn contains(&self, residue: u8) -> bool {
        self.alphabet.contains(&residue.to_ascii_uppercase())
    }
}
