pub mod common;
pub mod dot;
pub mod info;
pub mod matrix;
pub mod path;
pub mod topsort;
pub mod traverse;
