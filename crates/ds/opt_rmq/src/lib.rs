//! 制約のない列に対する $\\langle O(n), O(1)\\rangle$ RMQ。
//!
//! # Idea
//! 入力列からデカルト木（[`cartesian_tree`]）を作ると、区間 `[u, v)` の
//! argmin はデカルト木上のノード `u`, `v` の最小共通祖先の位置に一致する
//! （Cartesian 木・LCA・RMQ の間の古典的な同値性）。木の深さはオイラー
//! ツアー上で隣接差が常に $\\pm 1$ になるので、そのオイラーツアーに
//! [`pm_rmq`] を適用すれば木上の LCA が $O(1)$ で求まる。
//!
//! デカルト木のアリーナ添字は構築時に入力の位置と一致するので、代表元の
//! 対応表はハッシュ表ではなく平らな `Vec` で持てる。
//!
//! # Examples
//! ```
//! use opt_rmq::opt_rmq;
//! use rmq_contract::RangeMinQuery;
//!
//! let a = [5, 3, 6, 2, 8, 1, 9];
//! let rmq = opt_rmq(&a);
//! assert_eq!(rmq.query(0, 3), 1);
//! assert_eq!(rmq.query(0, 7), 5);
//! ```

use cartesian_tree::CartesianTree;
use owned_or_borrowed::Seq;
use pm_rmq::PmRmq;
use rmq_contract::RangeMinQuery;

pub struct OptRmq<'a, V> {
    base: Seq<'a, V>,
    repr: Vec<usize>,
    euler: Vec<usize>,
    depth: PmRmq<'static, i64>,
}

/// デカルト木上で根から反復 DFS を行い、Euler tour とその深さの列、
/// および入力位置からオイラーツアー上の代表位置への対応表を作る。
///
/// 明示的なスタックによる反復 DFS。(ノード添字, 次に訪れる子の添字)
fn euler_tour<V: Ord + Copy>(tree: &CartesianTree<V>) -> (Vec<usize>, Vec<usize>, Vec<i64>) {
    let n = tree.len();

    let children_of = |node: usize| -> Vec<usize> {
        let mut v = Vec::with_capacity(2);
        if let Some(l) = tree.node(node).left() {
            v.push(l);
        }
        if let Some(r) = tree.node(node).right() {
            v.push(r);
        }
        v
    };

    let mut repr = vec![usize::MAX; n];
    let mut euler = Vec::with_capacity(2 * n - 1);
    let mut depth_seq = Vec::with_capacity(2 * n - 1);

    let root = tree.root();
    let mut stack: Vec<(usize, usize)> = vec![(root, 0)];
    repr[tree.node(root).pos()] = euler.len();
    euler.push(root);
    depth_seq.push(0_i64);

    while let Some(&mut (node, ref mut next_child)) = stack.last_mut() {
        let children = children_of(node);
        if *next_child < children.len() {
            let child = children[*next_child];
            *next_child += 1;

            repr[tree.node(child).pos()] = euler.len();
            euler.push(child);
            depth_seq.push(*depth_seq.last().unwrap() + 1);

            stack.push((child, 0));
        } else {
            stack.pop();
            if let Some(&(parent, _)) = stack.last() {
                euler.push(parent);
                depth_seq.push(*depth_seq.last().unwrap() - 1);
            }
        }
    }

    (repr, euler, depth_seq)
}

impl<'a, V: Ord + Copy> OptRmq<'a, V> {
    pub fn build(a: &'a [V]) -> Self { Self::from_seq(a.into()) }
}

impl<V: Ord + Copy> OptRmq<'static, V> {
    pub fn build_owned(a: Vec<V>) -> Self { Self::from_seq(a.into()) }
}

impl<'a, V: Ord + Copy> OptRmq<'a, V> {
    fn from_seq(base: Seq<'a, V>) -> Self {
        let n = base.len();
        assert!(n > 0, "opt_rmq: input must be non-empty");

        let tree = CartesianTree::build(&base);
        let (repr, euler, depth_seq) = euler_tour(&tree);
        let depth = PmRmq::build_owned(depth_seq);
        Self { base, repr, euler, depth }
    }
}

impl<'a, V: Ord + Copy> RangeMinQuery<V> for OptRmq<'a, V> {
    fn query(&self, u: usize, v: usize) -> usize {
        let n = self.base.len();
        assert!(u < v && v <= n, "opt_rmq: invalid range [{u}, {v}) for length {n}");

        let pu = self.repr[u];
        let pv = self.repr[v - 1];
        let (lo, hi) = if pu <= pv { (pu, pv) } else { (pv, pu) };
        let k = self.depth.query(lo, hi + 1);
        self.euler[k]
    }
}

/// [`OptRmq::build`] の自由関数版。
pub fn opt_rmq<V: Ord + Copy>(a: &[V]) -> OptRmq<'_, V> { OptRmq::build(a) }
