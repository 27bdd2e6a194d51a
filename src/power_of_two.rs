//! 2 のべき乗に関する補助関数. セグメント木の記憶領域の大きさを決めるのに使う.

use std::ops::{Add, BitAnd, BitOr, Shr};

#[cfg(test)]
mod tests;

/// `Unsigned` は符号なし整数のプリミティブ型を表す.
pub trait Unsigned:
    Copy
    + Eq
    + Add<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Shr<u32, Output = Self>
{
    const ZERO: Self;
    const ONE: Self;
    /// 型のビット幅.
    const BITS: u32;

    fn wrapping_sub(self, rhs: Self) -> Self;
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {
        $(
            impl Unsigned for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const BITS: u32 = <$t>::BITS;

                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$t>::wrapping_sub(self, rhs)
                }
            }
        )*
    };
}

impl_unsigned!(u8, u16, u32, u64, u128, usize);

/// `value` のビットがちょうど 1 つだけ立っていれば `true` を返す.
///
/// `value & (value - 1) == 0` で判定するため `0` に対しても `true` を返す. `0` を有効な大きさとして扱ってはならない.
pub fn is_power_of_two<I: Unsigned>(value: I) -> bool {
    value & value.wrapping_sub(I::ONE) == I::ZERO
}

/// `value` 以上で最小の 2 のべき乗を返す.
///
/// `value` が既に 2 のべき乗ならそのまま返す. それ以外は最上位ビットより下を全て 1 で埋めてから 1 を足す.
/// 結果が型の最大値を超える場合の動作は未定義 (デバッグビルドではオーバーフローで panic する).
pub fn round_up_to_power_of_two<I: Unsigned>(mut value: I) -> I {
    if is_power_of_two(value) {
        return value;
    }

    let mut shift = 1;
    while shift < I::BITS {
        value = value | value >> shift;
        shift += shift;
    }

    value + I::ONE
}
