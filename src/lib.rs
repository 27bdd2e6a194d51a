//! モノイドを引数に取るセグメント木.
//!
//! 固定長の列に対して, 任意の連続区間の畳み込みと一点更新をそれぞれ O(log N) で行う.
//! 畳み込みの演算は [`Monoid`] で差し替えられ, 木の記憶領域は [`Storage`] から確保する.
//!
//! ```
//! use monoid_seg_tree::{MinSegTree, SegTree};
//!
//! let mut sum = SegTree::<i64>::new(vec![1, 2, 3, 4, 5]).unwrap();
//! assert_eq!(sum.search(1, 5).unwrap(), 14);
//! sum.update(0, 0).unwrap();
//! assert_eq!(sum.query(..).unwrap(), 14);
//!
//! let min = MinSegTree::<i32>::new(vec![5, 3, 8, 1, 9]).unwrap();
//! assert_eq!(min.query(0..3).unwrap(), 3);
//! ```

mod error;
pub mod monoid;
pub mod power_of_two;
mod seg_tree;
pub mod storage;

pub use crate::{
    error::{Error, Result},
    monoid::{Extremum, FnMonoid, Max, Min, Monoid, Sum},
    seg_tree::{MaxSegTree, MinSegTree, SegTree},
    storage::{BufferResource, Global, Storage},
};
