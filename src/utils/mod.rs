mod dot;

pub use dot::escape_dot;
