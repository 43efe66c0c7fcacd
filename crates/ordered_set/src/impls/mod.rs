mod rb;
mod std_btree;

pub use rb::{NodeRef, RbTreeSet};
pub use std_btree::StdBTreeSet;
