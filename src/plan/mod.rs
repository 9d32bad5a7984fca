pub mod approval;
pub mod transcript;

pub use approval::*;
pub use transcript::*;
