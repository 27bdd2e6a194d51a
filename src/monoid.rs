//! セグメント木に載せる演算.

use std::{fmt, marker::PhantomData, ops::Add};

#[cfg(test)]
mod tests;

/// Monoid は以下を満たさなければならない.
/// ```ignore
/// fn test<M: Monoid>(m: &M, a: &M::Value, b: &M::Value, c: &M::Value) {
///     m.combine(&m.neutral_element(), a) == *a;
///     m.combine(a, &m.neutral_element()) == *a;
///     m.combine(a, &m.combine(b, c)) == m.combine(&m.combine(a, b), c);
/// }
/// ```
/// 可換である必要はない. また `combine` は副作用を持たず, 等しい入力に対して等しい値を返す.
/// これらの法則は呼び出し側の責任で, セグメント木は検査しない.
pub trait Monoid {
    type Value;

    /// 単位元.
    fn neutral_element(&self) -> Self::Value;
    /// 結合的な二項演算. `a` が左, `b` が右.
    fn combine(&self, a: &Self::Value, b: &Self::Value) -> Self::Value;
}

/// `Extremum` は値の型がとりうる上限と下限を表す. `Min` と `Max` の単位元になる.
///
/// 浮動小数点数では無限大, 整数では `MAX` と `MIN`.
pub trait Extremum {
    fn upper_bound() -> Self;
    fn lower_bound() -> Self;
}

macro_rules! impl_extremum_int {
    ($($t:ty),*) => {
        $(
            impl Extremum for $t {
                fn upper_bound() -> Self {
                    <$t>::MAX
                }

                fn lower_bound() -> Self {
                    <$t>::MIN
                }
            }
        )*
    };
}

macro_rules! impl_extremum_float {
    ($($t:ty),*) => {
        $(
            impl Extremum for $t {
                fn upper_bound() -> Self {
                    <$t>::INFINITY
                }

                fn lower_bound() -> Self {
                    <$t>::NEG_INFINITY
                }
            }
        )*
    };
}

impl_extremum_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_extremum_float!(f32, f64);

// 型引数 `T` に余計な境界を付けないよう derive せずに実装する.
macro_rules! marker_monoid {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        pub struct $name<T>(PhantomData<fn() -> T>);

        impl<T> $name<T> {
            pub fn new() -> Self {
                Self(PhantomData)
            }
        }

        impl<T> Default for $name<T> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T> Clone for $name<T> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T> Copy for $name<T> {}

        impl<T> fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(stringify!($name))
            }
        }
    };
}

marker_monoid! {
    /// 和. 単位元は `T::default()`.
    Sum
}

marker_monoid! {
    /// 最小値. 単位元は `T::upper_bound()`.
    Min
}

marker_monoid! {
    /// 最大値. 単位元は `T::lower_bound()`.
    Max
}

impl<T> Monoid for Sum<T>
where
    T: Default + Clone + Add<Output = T>,
{
    type Value = T;

    fn neutral_element(&self) -> T {
        T::default()
    }

    fn combine(&self, a: &T, b: &T) -> T {
        a.clone() + b.clone()
    }
}

impl<T> Monoid for Min<T>
where
    T: Extremum + PartialOrd + Clone,
{
    type Value = T;

    fn neutral_element(&self) -> T {
        T::upper_bound()
    }

    fn combine(&self, a: &T, b: &T) -> T {
        if b < a {
            b.clone()
        } else {
            a.clone()
        }
    }
}

impl<T> Monoid for Max<T>
where
    T: Extremum + PartialOrd + Clone,
{
    type Value = T;

    fn neutral_element(&self) -> T {
        T::lower_bound()
    }

    fn combine(&self, a: &T, b: &T) -> T {
        if a < b {
            b.clone()
        } else {
            a.clone()
        }
    }
}

/// `FnMonoid` は単位元を作る関数 `identity` と二項演算 `op` の組を `Monoid` として扱う.
///
/// ```
/// use monoid_seg_tree::{FnMonoid, Monoid};
///
/// let product = FnMonoid::new(|| 1u64, |a: &u64, b: &u64| a * b);
/// assert_eq!(product.combine(&3, &product.neutral_element()), 3);
/// ```
#[derive(Clone, Copy)]
pub struct FnMonoid<I, F> {
    identity: I,
    op: F,
}

impl<I, F> FnMonoid<I, F> {
    pub fn new(identity: I, op: F) -> Self {
        Self { identity, op }
    }
}

impl<T, I, F> Monoid for FnMonoid<I, F>
where
    I: Fn() -> T,
    F: Fn(&T, &T) -> T,
{
    type Value = T;

    fn neutral_element(&self) -> T {
        (self.identity)()
    }

    fn combine(&self, a: &T, b: &T) -> T {
        (self.op)(a, b)
    }
}

impl<I, F> fmt::Debug for FnMonoid<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnMonoid").finish_non_exhaustive()
    }
}
