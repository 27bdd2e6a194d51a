use std::collections::TryReserveError;

use thiserror::Error;

/// `Error` はセグメント木の構築と操作で起こりうる失敗を表す.
#[derive(Debug, Error)]
pub enum Error {
    /// `search` の区間 `[first, last)` が空または逆転している, あるいは `last` が要素数を超えている.
    #[error("invalid range [{first}, {last}) for {size} elements")]
    InvalidRange {
        first: usize,
        last: usize,
        size: usize,
    },
    /// `update` の添字が要素数以上.
    #[error("invalid index {index} for {size} elements")]
    InvalidIndex { index: usize, size: usize },
    /// `ExactSizeIterator::len` が実際に取り出せた要素数と一致しない.
    #[error("input iterator reported {reported} elements but yielded a different number")]
    InputLength { reported: usize },
    #[error("failed to allocate tree storage")]
    Alloc(#[from] TryReserveError),
    #[error("storage exhausted: requested {requested} slots, {available} available")]
    StorageExhausted { requested: usize, available: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
