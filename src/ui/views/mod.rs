pub mod check;
pub mod optional;
pub mod parse;
