use anyhow::Context;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};

/// Opens `input` for buffered reading. `stdin` reads standard input and a
/// `.gz` extension is decompressed on the fly.
///
/// ```
/// use std::io::BufRead;
/// let reader = smsa::reader("tests/seqs/identical.txt").unwrap();
/// assert_eq!(reader.lines().count(), 4);
/// ```
pub fn reader(input: &str) -> anyhow::Result<Box<dyn BufRead>> {
    let reader: Box<dyn BufRead> = if input == "stdin" {
        Box::new(BufReader::new(std::io::stdin()))
    } else {
        let path = std::path::Path::new(input);
        let file = std::fs::File::open(path)
            .with_context(|| format!("could not open {}", path.display()))?;

        if path.extension() == Some(std::ffi::OsStr::new("gz")) {
            Box::new(BufReader::new(flate2::read::MultiGzDecoder::new(file)))
        } else {
            Box::new(BufReader::new(file))
        }
    };

    Ok(reader)
}

pub fn writer(output: &str) -> anyhow::Result<Box<dyn Write>> {
    let writer: Box<dyn Write> = if output == "stdout" {
        Box::new(BufWriter::new(std::io::stdout()))
    } else {
        let file = std::fs::File::create(output)
            .with_context(|| format!("could not create {}", output))?;
        Box::new(BufWriter::new(file))
    };

    Ok(writer)
}

/// Reads the whole input into a string.
pub fn read_to_string(input: &str) -> anyhow::Result<String> {
    let mut text = String::new();
    reader(input)?
        .read_to_string(&mut text)
        .with_context(|| format!("could not read {}", input))?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_read_plain_and_gz() {
        let dir = tempdir().unwrap();

        let plain = dir.path().join("seqs.txt");
        std::fs::write(&plain, "2\nACGT\nAGT\n").unwrap();
        let text = read_to_string(plain.to_str().unwrap()).unwrap();
        assert_eq!(text, "2\nACGT\nAGT\n");

        let gz = dir.path().join("seqs.txt.gz");
        {
            let file = std::fs::File::create(&gz).unwrap();
            let mut encoder = GzEncoder::new(file, flate2::Compression::default());
            write!(encoder, "2\nACGT\nAGT\n").unwrap();
            encoder.finish().unwrap();
        }
        let text = read_to_string(gz.to_str().unwrap()).unwrap();
        assert_eq!(text, "2\nACGT\nAGT\n");
    }

    #[test]
    fn test_missing_file() {
        let err = read_to_string("tests/seqs/no_such_file.txt").unwrap_err();
        assert!(err.to_string().contains("could not open"));
    }
}
