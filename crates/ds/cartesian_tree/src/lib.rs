//! デカルト木。
//!
//! # Idea
//! 添字が中順序、値が最小ヒープ順になるような二分木。`i < j` かつ
//! `a[i..=j]` の最小値が一意なノード `k` がその区間の根になる。
//! 同じ値が複数あるときは左側を上位（祖先）に残すように構築する
//! ([`CartesianTree::build`] 参照）。これにより区間の argmin は
//! 「その区間に対応する部分木の根」として一意に取り出せる。
//!
//! 自己参照構造を避けるため、ノードは `Vec` に平らに並べ、子は添字
//! （アリーナのインデックス）で指す。添字 `i` のノードは常に入力の
//! 位置 `i` に対応する。
//!
//! # Complexity
//! 構築は各要素を高々 1 回ずつスタックに出し入れするので $O(n)$。
use std::ops::Index;

#[derive(Debug, Clone)]
pub struct CNode<V> {
    value: V,
    pos: usize,
    left: Option<usize>,
    right: Option<usize>,
}

impl<V> CNode<V> {
    pub fn value(&self) -> &V { &self.value }
    pub fn pos(&self) -> usize { self.pos }
    pub fn left(&self) -> Option<usize> { self.left }
    pub fn right(&self) -> Option<usize> { self.right }
}

pub struct CartesianTree<V> {
    arena: Vec<CNode<V>>,
    root: usize,
}

impl<V: Ord + Copy> CartesianTree<V> {
    /// `a` からデカルト木を構築する。`a` は空であってはならない。
    /// ノード `i` は常に `a[i]` に対応する（アリーナ添字 == 入力位置）。
    ///
    /// 同値はより左側のノードを祖先側に残す形で解消される。この結果、
    /// 部分木の根は対応区間の最も左にある最小値の位置と一致する。
    pub fn build(a: &[V]) -> Self {
        let n = a.len();
        assert!(n > 0, "cartesian_tree: input must be non-empty");

        let mut arena: Vec<CNode<V>> =
            a.iter().enumerate().map(|(pos, &value)| CNode { value, pos, left: None, right: None }).collect();

        let mut stack: Vec<usize> = Vec::with_capacity(n);
        for i in 0..n {
            let mut last_popped = None;
            while let Some(&top) = stack.last() {
                if arena[top].value > arena[i].value {
                    last_popped = Some(stack.pop().unwrap());
                } else {
                    break;
                }
            }
            if let Some(lp) = last_popped {
                arena[i].left = Some(lp);
            }
            if let Some(&top) = stack.last() {
                arena[top].right = Some(i);
            }
            stack.push(i);
        }

        let root = stack[0];
        Self { arena, root }
    }

    pub fn root(&self) -> usize { self.root }
    pub fn len(&self) -> usize { self.arena.len() }
    pub fn node(&self, i: usize) -> &CNode<V> { &self.arena[i] }
}

impl<V> Index<usize> for CartesianTree<V> {
    type Output = CNode<V>;
    fn index(&self, i: usize) -> &CNode<V> { &self.arena[i] }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_global_min() {
        let a = [3, 1, 4, 1, 5, 9, 2, 6];
        let t = CartesianTree::build(&a);
        assert_eq!(t[t.root()].pos(), 1);
    }

    #[test]
    fn ties_keep_leftmost_as_ancestor() {
        let a = [2, 1, 1, 2];
        let t = CartesianTree::build(&a);
        assert_eq!(t[t.root()].pos(), 1);
        // 右側の同値は祖先の右部分木に現れる
        let r = t[t.root()].right().unwrap();
        assert_eq!(t[r].pos(), 2);
    }

    #[test]
    fn inorder_matches_positions() {
        let a = [5, 3, 6, 2, 8, 1, 9];
        let t = CartesianTree::build(&a);

        fn inorder<V>(t: &CartesianTree<V>, i: usize, out: &mut Vec<usize>) {
            if let Some(l) = t[i].left() {
                inorder(t, l, out);
            }
            out.push(t[i].pos());
            if let Some(r) = t[i].right() {
                inorder(t, r, out);
            }
        }

        let mut order = Vec::new();
        inorder(&t, t.root(), &mut order);
        assert_eq!(order, (0..a.len()).collect::<Vec<_>>());
    }

    #[test]
    fn single_element() {
        let a = [42];
        let t = CartesianTree::build(&a);
        assert_eq!(t.root(), 0);
        assert!(t[0].left().is_none());
        assert!(t[0].right().is_none());
    }
}
