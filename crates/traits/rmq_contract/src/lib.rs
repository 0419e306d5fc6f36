//! range minimum query に関するトレイトです。

/// 区間最小値の位置を求める。
///
/// `query` と `query_offset` はどちらも半開区間 `[u, v)` に対する
/// argmin を返す。同値があるときは最も左の位置を返す。
///
/// # Examples
/// ```
/// use rmq_contract::RangeMinQuery;
///
/// struct Dummy<'a>(&'a [i32]);
/// impl<'a> RangeMinQuery<i32> for Dummy<'a> {
///     fn query(&self, u: usize, v: usize) -> usize {
///         assert!(u < v && v <= self.0.len());
///         (u..v).min_by_key(|&i| (self.0[i], i)).unwrap()
///     }
/// }
///
/// let a = [3, 1, 4, 1, 5];
/// assert_eq!(Dummy(&a).query(0, 4), 1);
/// assert_eq!(Dummy(&a).query_offset(0, 4), 1);
/// ```
pub trait RangeMinQuery<V> {
    /// `[u, v)` の argmin を返す。`u < v <= n` を仮定する。
    fn query(&self, u: usize, v: usize) -> usize;

    /// `query` の別名。呼び出し側がオフセット計算を書かずに済むように
    /// 用意されているだけで、意味は常に `query` と同じ。
    fn query_offset(&self, u: usize, v: usize) -> usize { self.query(u, v) }
}
