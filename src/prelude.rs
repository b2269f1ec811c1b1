pub use {
    crate::array::ArraySeq,
    crate::linked::LinkedSeq,
    crate::traits::{Sequence, Sorting},
};
