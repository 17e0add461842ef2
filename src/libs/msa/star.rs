use super::aligned::AlignedSet;
use super::center::Center;
use super::error::{MsaError, Result};
use super::pairwise::global_align;
use super::scoring::{ungap, ScoringParams, GAP};
use std::cmp::Reverse;

/// Order in which non-center sequences are merged: best score against the
/// center first, input order on ties.
pub fn merge_order(center: &Center) -> Vec<usize> {
    let mut order: Vec<usize> = (0..center.table.size())
        .filter(|&i| i != center.index)
        .collect();
    // stable, so equal scores keep input order
    order.sort_by_key(|&i| Reverse(center.table.get(center.index, i).unwrap_or(i32::MIN)));
    order
}

/// Marks which columns of `new` were inserted into `old`.
///
/// `new` must be `old` with extra gap symbols only. Both are walked in
/// parallel; equal symbols advance both cursors, a gap only in `new` is an
/// inserted column, and a surplus at the end of `new` is trailing insertion.
pub fn inserted_columns(old: &[u8], new: &[u8]) -> Result<Vec<bool>> {
    let mut inserted = Vec::with_capacity(new.len());
    let mut i = 0;
    let mut j = 0;

    while i < old.len() && j < new.len() {
        if old[i] == new[j] {
            inserted.push(false);
            i += 1;
            j += 1;
        } else if new[j] == GAP {
            inserted.push(true);
            j += 1;
        } else {
            return Err(MsaError::Invariant(format!(
                "center symbol {} at old column {} does not match new column {}",
                old[i] as char, i, j
            )));
        }
    }

    if i < old.len() {
        return Err(MsaError::Invariant(format!(
            "new center ended with {} old columns unmatched",
            old.len() - i
        )));
    }
    for &b in &new[j..] {
        if b != GAP {
            return Err(MsaError::Invariant(format!(
                "trailing center extension holds the non-gap symbol {}",
                b as char
            )));
        }
        inserted.push(true);
    }

    Ok(inserted)
}

/// Inserts a gap into `row` wherever `inserted` is set.
fn expand_row(row: &[u8], inserted: &[bool]) -> Vec<u8> {
    let mut symbols = row.iter();
    inserted
        .iter()
        .map(|&ins| {
            if ins {
                GAP
            } else {
                *symbols.next().unwrap_or(&GAP)
            }
        })
        .collect()
}

/// Star alignment around `center`.
///
/// Every other sequence is aligned against the current, possibly gapped,
/// center. Columns the merge adds to the center are propagated into all rows
/// merged before it. Rows come back in input order.
pub fn star_align(seqs: &[Vec<u8>], center: &Center, params: &ScoringParams) -> Result<AlignedSet> {
    if seqs.is_empty() {
        return Err(MsaError::Empty);
    }
    if center.index >= seqs.len() || center.table.size() != seqs.len() {
        return Err(MsaError::Invariant(format!(
            "center {} does not belong to a set of {} sequences",
            center.index,
            seqs.len()
        )));
    }

    let mut current = seqs[center.index].clone();
    // (input index, aligned row)
    let mut merged: Vec<(usize, Vec<u8>)> = Vec::with_capacity(seqs.len());

    for idx in merge_order(center) {
        let aln = global_align(&seqs[idx], &current, params);

        if aln.y.len() != current.len() {
            let inserted = inserted_columns(&current, &aln.y)?;
            for (_, row) in merged.iter_mut() {
                if row.len() != current.len() {
                    return Err(MsaError::Invariant(format!(
                        "merged row of width {} against a center of width {}",
                        row.len(),
                        current.len()
                    )));
                }
                *row = expand_row(row, &inserted);
            }
            log::debug!(
                "sequence {} added {} columns to the center",
                idx,
                aln.y.len() - current.len()
            );
        }

        merged.push((idx, aln.x));
        current = aln.y;
    }
    merged.push((center.index, current));

    merged.sort_by_key(|(idx, _)| *idx);
    for (idx, row) in &merged {
        if ungap(row) != seqs[*idx] {
            return Err(MsaError::Invariant(format!(
                "aligned row {} does not reproduce its sequence",
                idx
            )));
        }
    }

    AlignedSet::new(merged.into_iter().map(|(_, row)| row).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::msa::center::select_center;

    fn seqs(list: &[&str]) -> Vec<Vec<u8>> {
        list.iter().map(|s| s.as_bytes().to_vec()).collect()
    }

    fn star(list: &[&str]) -> Vec<String> {
        let params = ScoringParams::default();
        let seqs = seqs(list);
        let center = select_center(&seqs, &params).unwrap();
        star_align(&seqs, &center, &params).unwrap().to_strings()
    }

    #[test]
    fn test_inserted_columns() {
        assert_eq!(
            inserted_columns(b"ACT", b"AC-T").unwrap(),
            vec![false, false, true, false]
        );
        assert_eq!(
            inserted_columns(b"A-C", b"A--C--").unwrap(),
            vec![false, false, true, false, true, true]
        );
        assert_eq!(inserted_columns(b"ACT", b"ACT").unwrap(), vec![false; 3]);
        assert!(matches!(
            inserted_columns(b"ACT", b"AGT"),
            Err(MsaError::Invariant(_))
        ));
        assert!(matches!(
            inserted_columns(b"ACT", b"AC"),
            Err(MsaError::Invariant(_))
        ));
    }

    #[test]
    fn test_expand_row() {
        let inserted = [false, true, false, true];
        assert_eq!(expand_row(b"AC", &inserted), b"A-C-");
    }

    #[test]
    fn test_identical() {
        assert_eq!(star(&["ACGT", "ACGT", "ACGT"]), vec!["ACGT", "ACGT", "ACGT"]);
    }

    #[test]
    fn test_merge_order() {
        let params = ScoringParams::default();
        let seqs = seqs(&["ACGTT", "ACGT", "TTTT", "ACGA"]);
        let center = select_center(&seqs, &params).unwrap();
        // ACGTT and ACGT both total 18
        assert_eq!(center.index, 0);
        // ACGT scores 10, ACGA 6, TTTT 2 against ACGTT
        assert_eq!(merge_order(&center), vec![1, 3, 2]);
    }

    #[test]
    fn test_gap_propagation() {
        let rows = star(&["ACGT", "ACT", "AGT"]);
        assert_eq!(rows, vec!["ACGT", "AC-T", "A-GT"]);

        // the insertion in the last merged sequence reaches every earlier row
        let rows = star(&["ACGT", "ACGT", "ACGGT"]);
        assert_eq!(rows, vec!["AC-GT", "AC-GT", "ACGGT"]);

        let rows = star(&["ACGT", "ACT", "ACGGT"]);
        assert_eq!(rows, vec!["AC-GT", "AC--T", "ACGGT"]);
    }

    #[test]
    fn test_substring_embedded_at_flanks() {
        let rows = star(&["GGACGTACC", "GGACGTACC", "ACGTA"]);
        assert_eq!(rows[2].trim_matches('-'), "ACGTA");
        assert_eq!(rows[2].len(), 9);
        assert_eq!(rows[0], "GGACGTACC");
    }

    #[test]
    fn test_round_trip_and_width() {
        let list = ["GATTACA", "GCATGCU", "GATTTACA", "CATACA", "GAT"];
        let rows = star(&list);
        let width = rows[0].len();
        for (row, seq) in rows.iter().zip(list) {
            assert_eq!(row.len(), width);
            assert_eq!(row.replace('-', ""), seq);
        }
    }

    #[test]
    fn test_single() {
        assert_eq!(star(&["ACGT"]), vec!["ACGT"]);
    }
}
