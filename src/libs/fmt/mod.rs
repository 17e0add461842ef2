pub mod seq_list;

pub use seq_list::{parse_seq_list, parse_with_query, write_rows, SeqRecord};
