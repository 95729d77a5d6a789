pub mod cipher;
mod envelope;

pub use envelope::*;
