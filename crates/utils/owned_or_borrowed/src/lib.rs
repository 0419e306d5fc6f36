//! 借用した配列と所有する配列のどちらも扱えるようにするラッパー。
//!
//! RMQ エンジンは、呼び出し側の配列をそのまま借用して構築されることもあれば
//! （利用者が渡した `A` の上に直接構築する場合）、前処理の過程で自分自身が
//! 作った配列（ブロック最小値の列や Euler tour の深さの列など）の上に構築
//! されることもある。後者は構造体自身がデータを所有しているので、同じ構造体
//! に自己参照を持たせずに済むように、どちらの場合も同じ型で扱えるようにする。

use std::ops::Deref;

/// 借用 (`Borrowed`) または所有 (`Owned`) のどちらかを保持する列。
///
/// `Owned` を使うときは、ライフタイム引数は何も借用していないので
/// 任意に選べる（典型的には `'static`）。
pub enum Seq<'a, V> {
    Borrowed(&'a [V]),
    Owned(Vec<V>),
}

impl<'a, V> Deref for Seq<'a, V> {
    type Target = [V];
    fn deref(&self) -> &[V] {
        match self {
            Seq::Borrowed(s) => s,
            Seq::Owned(v) => v,
        }
    }
}

impl<'a, V> From<&'a [V]> for Seq<'a, V> {
    fn from(s: &'a [V]) -> Self { Seq::Borrowed(s) }
}

impl<V> From<Vec<V>> for Seq<'static, V> {
    fn from(v: Vec<V>) -> Self { Seq::Owned(v) }
}

#[test]
fn test() {
    let base = vec![1, 2, 3];
    let borrowed: Seq<i32> = (&base[..]).into();
    assert_eq!(&*borrowed, &[1, 2, 3]);

    let owned: Seq<'static, i32> = vec![4, 5].into();
    assert_eq!(&*owned, &[4, 5]);
}
