// Utils compartidos

pub mod dates;

pub use dates::*;
