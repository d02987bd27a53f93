use naive_bst::tree::BinarySearchTree;
use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// the two hold the same values and answer lookups the same way.
fn do_ops<T>(ops: &[Op<T>], bst: &mut BinarySearchTree<T>, set: &mut BTreeSet<T>) -> bool
where
    T: Ord + Clone,
{
    ops.iter().all(|op| match op {
        Op::Insert(x) => {
            bst.insert(x.clone());
            set.insert(x.clone());
            true
        }
        Op::Contains(x) => bst.contains(x) == set.contains(x),
        Op::Iter => bst.iter().eq(set.iter()),
    })
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = BinarySearchTree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set)
        && tree.iter().eq(set.iter())
        && tree.size() == set.len()
        && tree.find_max() == set.iter().next_back()
}

#[quickcheck]
fn in_order_is_strictly_ascending(xs: Vec<i32>) -> bool {
    let tree: BinarySearchTree<_> = xs.into_iter().collect();

    let mut out = Vec::new();
    tree.in_order_traversal(&mut out);
    out.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn empty_iff_height_is_negative(xs: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.into_iter().collect();

    (tree.size() == 0) == (tree.height() == -1)
}

#[quickcheck]
fn height_is_bounded_by_size(xs: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.into_iter().collect();
    let size = tree.size();
    // A full tree is as short as it gets.
    let min_height = (usize::BITS - size.leading_zeros()) as isize - 1;

    min_height <= tree.height() && tree.height() < size.max(1) as isize
}

#[quickcheck]
fn duplicate_insert_changes_nothing(xs: Vec<i8>, pick: usize) -> bool {
    if xs.is_empty() {
        return true;
    }
    let mut tree: BinarySearchTree<_> = xs.iter().copied().collect();
    let size = tree.size();
    let shape: Vec<i8> = tree.pre_order().into_iter().copied().collect();

    tree.insert(xs[pick % xs.len()]);

    tree.size() == size && tree.pre_order().into_iter().copied().eq(shape)
}

#[quickcheck]
fn contains_after_insert(xs: Vec<i8>, later: Vec<i8>) -> bool {
    let mut tree = BinarySearchTree::new();
    for x in &xs {
        tree.insert(*x);
        if !tree.contains(x) {
            return false;
        }
    }
    tree.extend(later.iter().copied());

    xs.iter().chain(&later).all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn max_is_last_in_order(xs: Vec<i16>) -> bool {
    let tree: BinarySearchTree<_> = xs.into_iter().collect();

    let mut out = Vec::new();
    tree.in_order_traversal(&mut out);
    tree.find_max() == out.last() && tree.find_min() == out.first()
}

#[quickcheck]
fn pre_order_rebuilds_same_shape(xs: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.into_iter().collect();
    let rebuilt: BinarySearchTree<_> = tree.pre_order().into_iter().copied().collect();

    rebuilt.pre_order() == tree.pre_order() && rebuilt.post_order() == tree.post_order()
}
