//! Input and output
mod ron;
