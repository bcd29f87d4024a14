pub mod hash;
pub mod reference;

pub use hash::{PowerTable, PrefixHash};
pub use reference::{Orientation, Origin, ReferenceIndex};
