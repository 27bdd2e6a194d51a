use std::{
    marker::PhantomData,
    ops::{Bound, RangeBounds},
};

use log::{debug, trace};

use crate::{
    error::{Error, Result},
    monoid::{Max, Min, Monoid, Sum},
    power_of_two::round_up_to_power_of_two,
    storage::{Global, Storage},
};


/// セグメント木, N 個の値に対して一点更新と区間の畳み込みを以下の計算量で行う.
/// 更新: O(log N), クエリ: O(log N)
///
/// 木はポインタを持たず長さ `2 * round_up_to_power_of_two(N)` の配列に置かれる.
/// 添字 `i` の節点の子は `2i + 1` と `2i + 2` で, 根 `0` は `[0, N)` を受け持つ.
/// 各節点は受け持つ区間 `[left, right)` を `left + (right - left) / 2` で二分し, 左の子が前半を受け持つ.
/// 使われない葉は単位元のまま.
///
/// 要素数と木の形は構築後に変わらない.
#[derive(Debug, Clone)]
pub struct SegTree<T, M = Sum<T>, B = Vec<T>> {
    tree: Option<B>,
    size: usize,
    monoid: M,
    _value: PhantomData<T>,
}

/// 最小値のセグメント木.
pub type MinSegTree<T, B = Vec<T>> = SegTree<T, Min<T>, B>;

/// 最大値のセグメント木.
pub type MaxSegTree<T, B = Vec<T>> = SegTree<T, Max<T>, B>;

impl<T, M> SegTree<T, M>
where
    T: Clone,
    M: Monoid<Value = T>,
{
    /// `M::default()` を演算として, 標準のヒープ上に木を構築する.
    pub fn new<I>(elements: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
        M: Default,
    {
        Self::with_monoid(elements, M::default())
    }

    pub fn with_monoid<I>(elements: I, monoid: M) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        Self::with_storage(elements, monoid, &mut Global)
    }
}

impl<T, M, B> SegTree<T, M, B>
where
    T: Clone,
    M: Monoid<Value = T>,
    B: AsRef<[T]> + AsMut<[T]>,
{
    /// `storage` から記憶領域を確保して `elements` の木を構築する.
    ///
    /// 要素数は `ExactSizeIterator::len` から求め, 入力を他の領域に写さず直接葉に書き込む.
    /// 要素が無ければ領域を確保せず, `search` と `update` は常に失敗する.
    pub fn with_storage<I, S>(elements: I, monoid: M, storage: &mut S) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
        S: Storage<T, Buffer = B> + ?Sized,
    {
        let mut elements = elements.into_iter();
        let size = elements.len();

        if size == 0 {
            debug!("built empty segment tree");
            return Ok(Self {
                tree: None,
                size,
                monoid,
                _value: PhantomData,
            });
        }

        let len = round_up_to_power_of_two(size) * 2;
        let mut tree = storage.allocate(len, monoid.neutral_element())?;
        let available = tree.as_ref().len();
        if available < len {
            return Err(Error::StorageExhausted {
                requested: len,
                available,
            });
        }

        build_tree(&monoid, tree.as_mut(), 0, size, &mut elements)
            .filter(|_| elements.next().is_none())
            .ok_or(Error::InputLength { reported: size })?;
        debug!("built segment tree over {} elements ({} nodes)", size, len);

        Ok(Self {
            tree: Some(tree),
            size,
            monoid,
            _value: PhantomData,
        })
    }

    /// 要素数.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn monoid(&self) -> &M {
        &self.monoid
    }

    /// 木を置いている配列全体. 空の木では空スライス.
    pub fn nodes(&self) -> &[T] {
        match &self.tree {
            Some(tree) => tree.as_ref(),
            None => &[],
        }
    }

    /// 区間 `[first, last)` の要素を左から順に畳み込んだ値を返す.
    ///
    /// `first >= last` または `last > size()` なら `Error::InvalidRange`.
    pub fn search(&self, first: usize, last: usize) -> Result<T> {
        match &self.tree {
            Some(tree) if first < last && last <= self.size => Ok(search_tree(
                &self.monoid,
                tree.as_ref(),
                0,
                0..self.size,
                first,
                last,
            )),
            _ => Err(Error::InvalidRange {
                first,
                last,
                size: self.size,
            }),
        }
    }

    /// `search` を範囲の構文で呼ぶ. `tree.query(2..4)` は `tree.search(2, 4)` と同じ.
    pub fn query(&self, range: impl RangeBounds<usize>) -> Result<T> {
        let first = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let last = match range.end_bound() {
            Bound::Included(&end) => end.saturating_add(1),
            Bound::Excluded(&end) => end,
            Bound::Unbounded => self.size,
        };
        self.search(first, last)
    }

    /// `index` 番目の要素の現在の値.
    pub fn get(&self, index: usize) -> Result<T> {
        if index >= self.size {
            return Err(Error::InvalidIndex {
                index,
                size: self.size,
            });
        }
        self.search(index, index + 1)
    }

    /// `index` 番目の要素を `value` に書き換え, 根までの節点を計算し直す.
    ///
    /// `index >= size()` なら何も変更せず `Error::InvalidIndex`.
    pub fn update(&mut self, index: usize, value: T) -> Result<()> {
        let size = self.size;
        match &mut self.tree {
            Some(tree) if index < size => {
                trace!("update index {} of {}", index, size);
                update_tree(&self.monoid, tree.as_mut(), 0, 0..size, index, value);
                Ok(())
            }
            _ => Err(Error::InvalidIndex { index, size }),
        }
    }
}

/// `elements` から `size` 個を取り出して `pos` を根とする部分木を埋める. 左の子が `size / 2` 個を受け持つ.
///
/// 途中で `elements` が尽きたら `None`.
fn build_tree<M, I>(
    monoid: &M,
    tree: &mut [M::Value],
    pos: usize,
    size: usize,
    elements: &mut I,
) -> Option<()>
where
    M: Monoid,
    I: Iterator<Item = M::Value>,
{
    if size == 1 {
        tree[pos] = elements.next()?;
    } else {
        let half = size / 2;
        build_tree(monoid, tree, 2 * pos + 1, half, elements)?;
        build_tree(monoid, tree, 2 * pos + 2, size - half, elements)?;
        tree[pos] = monoid.combine(&tree[2 * pos + 1], &tree[2 * pos + 2]);
    }
    Some(())
}

/// `looking` は `pos` が受け持つ区間, `[first, last)` はその中で求める区間.
fn search_tree<M>(
    monoid: &M,
    tree: &[M::Value],
    pos: usize,
    looking: std::ops::Range<usize>,
    first: usize,
    last: usize,
) -> M::Value
where
    M: Monoid,
    M::Value: Clone,
{
    if first >= last {
        return monoid.neutral_element();
    }

    if looking.start == first && looking.end == last {
        // 受け持つ区間がちょうど一致すれば子に降りない
        return tree[pos].clone();
    }

    let mid = looking.start + (looking.end - looking.start) / 2;
    monoid.combine(
        &search_tree(monoid, tree, 2 * pos + 1, looking.start..mid, first, last.min(mid)),
        &search_tree(monoid, tree, 2 * pos + 2, mid..looking.end, first.max(mid), last),
    )
}

fn update_tree<M>(
    monoid: &M,
    tree: &mut [M::Value],
    pos: usize,
    looking: std::ops::Range<usize>,
    index: usize,
    value: M::Value,
) where
    M: Monoid,
{
    if looking.end - looking.start == 1 {
        tree[pos] = value;
        return;
    }

    let mid = looking.start + (looking.end - looking.start) / 2;
    if index < mid {
        update_tree(monoid, tree, 2 * pos + 1, looking.start..mid, index, value);
    } else {
        update_tree(monoid, tree, 2 * pos + 2, mid..looking.end, index, value);
    }
    tree[pos] = monoid.combine(&tree[2 * pos + 1], &tree[2 * pos + 2]);
}
