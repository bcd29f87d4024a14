pub mod fasta;
pub mod output;
