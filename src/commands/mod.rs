pub mod branches;

pub use branches::*;
