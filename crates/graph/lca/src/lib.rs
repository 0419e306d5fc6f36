//! オイラーツアー + $\\pm 1$ RMQ による最小共通祖先。
//!
//! # Idea
//! 根から深さ優先探索を行い、ノードに入るたび・子から戻るたびに
//! ノードを記録した列（オイラーツアー）と、そのときの深さの列を作る。
//! `u`, `v` のオイラーツアー上の最初の出現位置の区間での深さの argmin が
//! `u`, `v` の最小共通祖先である。深さの列は隣接差が常に $\\pm 1$ なので
//! [`pm_rmq`] がそのまま使える。
//!
//! # Examples
//! ```
//! use lca::Lca;
//! use tree::Tree;
//!
//! let b = Tree::new('b', vec![Tree::leaf('d'), Tree::leaf('e')]);
//! let c = Tree::leaf('c');
//! let root = Tree::new('a', vec![b, c]);
//!
//! let lca = Lca::build(&root);
//! let d = &root.children()[0].children()[0];
//! let e = &root.children()[0].children()[1];
//! assert_eq!(*lca.query(d, e).id(), 'b');
//!
//! let c_node = &root.children()[1];
//! assert_eq!(*lca.query(d, c_node).id(), 'a');
//! ```

use std::collections::HashMap;

use pm_rmq::PmRmq;
use rmq_contract::RangeMinQuery;
use tree::Tree;

pub struct Lca<'a, Id> {
    repr: HashMap<*const Tree<Id>, usize>,
    euler: Vec<*const Tree<Id>>,
    depth: PmRmq<'static, i64>,
    _root: &'a Tree<Id>,
}

/// 根から反復 DFS で Euler tour とその深さの列を作る。
///
/// 明示的なスタックによる反復 DFS。(node, 子のうち次に訪れる添字)
fn euler_tour<'a, Id>(
    root: &'a Tree<Id>,
) -> (HashMap<*const Tree<Id>, usize>, Vec<*const Tree<Id>>, Vec<i64>) {
    let mut repr = HashMap::new();
    let mut euler = Vec::new();
    let mut depth_seq = Vec::new();

    let mut stack: Vec<(&'a Tree<Id>, usize)> = vec![(root, 0)];
    let ptr = root as *const Tree<Id>;
    repr.entry(ptr).or_insert(euler.len());
    euler.push(ptr);
    depth_seq.push(0_i64);

    while let Some(&mut (node, ref mut next_child)) = stack.last_mut() {
        if *next_child < node.children().len() {
            let child = &node.children()[*next_child];
            *next_child += 1;

            let cptr = child as *const Tree<Id>;
            repr.entry(cptr).or_insert(euler.len());
            euler.push(cptr);
            depth_seq.push(*depth_seq.last().unwrap() + 1);

            stack.push((child, 0));
        } else {
            stack.pop();
            if let Some(&(parent, _)) = stack.last() {
                euler.push(parent as *const Tree<Id>);
                depth_seq.push(*depth_seq.last().unwrap() - 1);
            }
        }
    }

    (repr, euler, depth_seq)
}

impl<'a, Id> Lca<'a, Id> {
    /// 根を借用して構築する。木は借用されている間、構築に使った
    /// ノードの配置から動かしてはならない。
    pub fn build(root: &'a Tree<Id>) -> Self {
        let (repr, euler, depth_seq) = euler_tour(root);
        let depth = PmRmq::build_owned(depth_seq);
        Self { repr, euler, depth, _root: root }
    }

    /// `u`, `v` の最小共通祖先を返す。どちらもこの構造体の構築に
    /// 使った木に属していなければならない。
    pub fn query(&self, u: &'a Tree<Id>, v: &'a Tree<Id>) -> &'a Tree<Id> {
        let pu = *self.repr.get(&(u as *const Tree<Id>)).expect("lca: node not in tree");
        let pv = *self.repr.get(&(v as *const Tree<Id>)).expect("lca: node not in tree");
        let (lo, hi) = if pu <= pv { (pu, pv) } else { (pv, pu) };
        let k = self.depth.query(lo, hi + 1);
        // `euler[k]` は `build` が受け取った `&'a Tree<Id>` から取った
        // ポインタで、その借用が生きている間しか `self` は存在しない。
        unsafe { &*self.euler[k] }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tree<&'static str> {
        // a(b(d, e), c(f))
        let b = Tree::new("b", vec![Tree::leaf("d"), Tree::leaf("e")]);
        let c = Tree::new("c", vec![Tree::leaf("f")]);
        Tree::new("a", vec![b, c])
    }

    #[test]
    fn siblings_share_parent() {
        let root = sample();
        let lca = Lca::build(&root);
        let d = &root.children()[0].children()[0];
        let e = &root.children()[0].children()[1];
        assert_eq!(*lca.query(d, e).id(), "b");
    }

    #[test]
    fn cross_branch() {
        let root = sample();
        let lca = Lca::build(&root);
        let d = &root.children()[0].children()[0];
        let f = &root.children()[1].children()[0];
        assert_eq!(*lca.query(d, f).id(), "a");
    }

    #[test]
    fn query_with_root() {
        let root = sample();
        let lca = Lca::build(&root);
        let e = &root.children()[0].children()[1];
        assert_eq!(*lca.query(&root, e).id(), "a");
    }

    #[test]
    fn node_is_its_own_lca() {
        let root = sample();
        let lca = Lca::build(&root);
        let b = &root.children()[0];
        assert_eq!(*lca.query(b, b).id(), "b");
    }

    #[test]
    fn level_array_satisfies_pm1_property() {
        let root = sample();
        let n = root.len();

        let (_, euler, depth_seq) = euler_tour(&root);
        assert_eq!(euler.len(), 2 * n - 1);
        assert_eq!(depth_seq.len(), 2 * n - 1);
        for w in depth_seq.windows(2) {
            assert_eq!((w[1] - w[0]).abs(), 1);
        }
    }

    #[test]
    fn deep_chain_is_iterative() {
        let mut node = Tree::leaf(0_usize);
        for id in 1..5000 {
            node = Tree::new(id, vec![node]);
        }
        let root = node;
        let lca = Lca::build(&root);

        let mut leaf = &root;
        while !leaf.children().is_empty() {
            leaf = &leaf.children()[0];
        }
        assert_eq!(*lca.query(&root, leaf).id(), *root.id());
    }
}
