use crate::libs::msa::{MsaError, GAP};
use std::io::Write;

/// One input sequence. Plain count-prefixed lists carry no names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqRecord {
    pub name: Option<String>,
    pub seq: Vec<u8>,
}

/// Parses a sequence list.
///
/// Two layouts are accepted:
/// * FASTA, detected by a leading `>`
/// * a line holding the number of sequences, followed by one sequence per line
///
/// Blank lines are ignored. Unless `allow_gaps` is set, a sequence holding
/// the gap symbol is rejected.
///
/// ```
/// use smsa::libs::fmt::parse_seq_list;
/// let records = parse_seq_list("2\nACGT\nAGT\n", false).unwrap();
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[1].seq, b"AGT");
/// assert!(records[1].name.is_none());
/// ```
pub fn parse_seq_list(text: &str, allow_gaps: bool) -> anyhow::Result<Vec<SeqRecord>> {
    let records = if text.trim_start().starts_with('>') {
        parse_fasta(text)?
    } else {
        parse_counted(text, 0)?
    };

    if records.is_empty() {
        return Err(MsaError::Empty.into());
    }
    if !allow_gaps {
        if let Some(index) = records.iter().position(|r| r.seq.contains(&GAP)) {
            return Err(MsaError::GapInSequence { index }.into());
        }
    }

    Ok(records)
}

/// Parses a set of rows followed by one query sequence.
///
/// In the counted layout the query is the line after the declared rows; in
/// FASTA it is the last record. Rows may hold gaps, the query may not.
///
/// ```
/// use smsa::libs::fmt::parse_with_query;
/// let (rows, query) = parse_with_query("2\nAC-T\nACGT\nTTACGT\n").unwrap();
/// assert_eq!(rows.len(), 2);
/// assert_eq!(query.seq, b"TTACGT");
/// ```
pub fn parse_with_query(text: &str) -> anyhow::Result<(Vec<SeqRecord>, SeqRecord)> {
    let mut records = if text.trim_start().starts_with('>') {
        parse_fasta(text)?
    } else {
        parse_counted(text, 1)?
    };

    let query = match records.pop() {
        Some(query) if !records.is_empty() => query,
        _ => return Err(MsaError::Empty.into()),
    };
    if query.seq.contains(&GAP) {
        return Err(MsaError::GapInSequence {
            index: records.len(),
        }
        .into());
    }

    Ok((records, query))
}

/// `trailing` lines are expected after the declared sequences.
fn parse_counted(text: &str, trailing: usize) -> anyhow::Result<Vec<SeqRecord>> {
    let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());

    let declared = match lines.next() {
        Some(line) => line
            .parse::<usize>()
            .map_err(|_| MsaError::InvalidCount(line.to_string()))?,
        None => return Ok(Vec::new()),
    };

    let records: Vec<SeqRecord> = lines
        .map(|line| SeqRecord {
            name: None,
            seq: line.as_bytes().to_vec(),
        })
        .collect();

    if records.len() != declared + trailing {
        return Err(MsaError::CountMismatch {
            declared,
            found: records.len().saturating_sub(trailing),
        }
        .into());
    }

    Ok(records)
}

fn parse_fasta(text: &str) -> anyhow::Result<Vec<SeqRecord>> {
    let mut fa_in = noodles_fasta::io::Reader::new(text.as_bytes());

    let mut records = Vec::new();
    for result in fa_in.records() {
        let record = result?;
        let name = String::from_utf8(record.name().into())?;
        records.push(SeqRecord {
            name: Some(name),
            seq: record.sequence().as_ref().to_vec(),
        });
    }

    Ok(records)
}

/// Writes aligned rows, each preceded by `>name` when the record had a name.
pub fn write_rows<W: Write + ?Sized>(
    writer: &mut W,
    records: &[SeqRecord],
    rows: &[Vec<u8>],
) -> std::io::Result<()> {
    for (record, row) in records.iter().zip(rows) {
        if let Some(name) = &record.name {
            writer.write_fmt(format_args!(">{}\n", name))?;
        }
        writer.write_all(row)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msa_error(err: anyhow::Error) -> MsaError {
        err.downcast::<MsaError>().unwrap()
    }

    #[test]
    fn test_counted() {
        let records = parse_seq_list("3\nACGT\r\n\nACGT\nAGT\n\n", false).unwrap();
        let seqs: Vec<&[u8]> = records.iter().map(|r| r.seq.as_slice()).collect();
        assert_eq!(seqs, vec![&b"ACGT"[..], b"ACGT", b"AGT"]);
    }

    #[test]
    fn test_count_mismatch() {
        let err = parse_seq_list("3\nACGT\nAGT\n", false).unwrap_err();
        assert_eq!(
            msa_error(err),
            MsaError::CountMismatch {
                declared: 3,
                found: 2
            }
        );
    }

    #[test]
    fn test_invalid_count() {
        let err = parse_seq_list("ACGT\nAGT\n", false).unwrap_err();
        assert_eq!(msa_error(err), MsaError::InvalidCount("ACGT".to_string()));
    }

    #[test]
    fn test_empty() {
        assert_eq!(msa_error(parse_seq_list("", false).unwrap_err()), MsaError::Empty);
        assert_eq!(msa_error(parse_seq_list("0\n", false).unwrap_err()), MsaError::Empty);
    }

    #[test]
    fn test_gaps() {
        let err = parse_seq_list("2\nACGT\nA-GT\n", false).unwrap_err();
        assert_eq!(msa_error(err), MsaError::GapInSequence { index: 1 });
        assert!(parse_seq_list("2\nACGT\nA-GT\n", true).is_ok());
    }

    #[test]
    fn test_fasta() {
        let records = parse_seq_list(">s1 desc\nACG\nT\n>s2\nAGT\n", false).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name.as_deref(), Some("s1"));
        assert_eq!(records[0].seq, b"ACGT");
        assert_eq!(records[1].seq, b"AGT");
    }

    #[test]
    fn test_with_query() {
        let (rows, query) = parse_with_query("2\nAC-T\nACGT\nTTACGT\n").unwrap();
        assert_eq!(rows[0].seq, b"AC-T");
        assert_eq!(query.seq, b"TTACGT");

        let (rows, query) = parse_with_query(">r1\nACGT\n>r2\nAGGT\n>q\nCACGTT\n").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(query.name.as_deref(), Some("q"));

        let err = parse_with_query("2\nACGT\nACGT\n").unwrap_err();
        assert_eq!(
            msa_error(err),
            MsaError::CountMismatch {
                declared: 2,
                found: 1
            }
        );

        let err = parse_with_query("1\nACGT\nAC-T\n").unwrap_err();
        assert_eq!(msa_error(err), MsaError::GapInSequence { index: 1 });

        let err = parse_with_query("0\nACGT\n").unwrap_err();
        assert_eq!(msa_error(err), MsaError::Empty);
    }

    #[test]
    fn test_write_rows() {
        let records = vec![
            SeqRecord {
                name: Some("s1".to_string()),
                seq: b"ACGT".to_vec(),
            },
            SeqRecord {
                name: Some("s2".to_string()),
                seq: b"AGT".to_vec(),
            },
        ];
        let rows = vec![b"ACGT".to_vec(), b"A-GT".to_vec()];
        let mut out = Vec::new();
        write_rows(&mut out, &records, &rows).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), ">s1\nACGT\n>s2\nA-GT\n");
    }
}
