//! セグメント木の記憶領域を確保する方針.
//!
//! 木は構築時に一度だけ `2 * round_up_to_power_of_two(N)` 個分の連続した領域を要求し, あとはその中に書き込むだけである.

use crate::error::{Error, Result};

#[cfg(test)]
mod tests;

/// `Storage` は要求された個数の連続した領域を確保し, 全て `init` で埋めて返す.
pub trait Storage<T: Clone> {
    type Buffer: AsRef<[T]> + AsMut<[T]>;

    fn allocate(&mut self, len: usize, init: T) -> Result<Self::Buffer>;
}

/// 標準のヒープ. 確保に失敗した場合は abort せず `Error::Alloc` を返す.
#[derive(Debug, Clone, Copy, Default)]
pub struct Global;

impl<T: Clone> Storage<T> for Global {
    type Buffer = Vec<T>;

    fn allocate(&mut self, len: usize, init: T) -> Result<Vec<T>> {
        let mut buffer = Vec::new();
        buffer.try_reserve_exact(len)?;
        buffer.resize(len, init);
        Ok(buffer)
    }
}

/// `BufferResource` は呼び出し側が持つスライスの先頭から順に領域を切り出す.
///
/// 切り出した領域は返却されない. 残りが足りなければ `Error::StorageExhausted` を返し, 他の領域にはフォールバックしない.
#[derive(Debug)]
pub struct BufferResource<'a, T> {
    remaining: &'a mut [T],
}

impl<'a, T> BufferResource<'a, T> {
    pub fn new(buffer: &'a mut [T]) -> Self {
        Self { remaining: buffer }
    }

    /// まだ切り出されていない要素数.
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }
}

impl<'a, T: Clone> Storage<T> for BufferResource<'a, T> {
    type Buffer = &'a mut [T];

    fn allocate(&mut self, len: usize, init: T) -> Result<&'a mut [T]> {
        let available = self.remaining.len();
        if available < len {
            return Err(Error::StorageExhausted {
                requested: len,
                available,
            });
        }

        let (head, tail) = std::mem::take(&mut self.remaining).split_at_mut(len);
        self.remaining = tail;
        head.fill(init);
        Ok(head)
    }
}
