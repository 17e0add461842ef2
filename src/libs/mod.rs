pub mod fmt;
pub mod io;
pub mod msa;
pub mod profile;
pub mod semi;
pub mod sub_matrix;
