pub mod conversion;
pub mod descriptor;
pub mod field;
pub mod value;

pub use conversion::*;
pub use descriptor::*;
pub use field::*;
pub use value::*;
