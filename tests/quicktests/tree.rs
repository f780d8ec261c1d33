use plain_bst::Tree;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same keys in both.
fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, set: &mut BTreeSet<K>)
where
    K: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                bst.insert(k.clone());
                set.insert(k.clone());
            }
            Op::Delete(k) => {
                bst.delete(k);
                set.remove(k);
            }
        }
    }
}

fn sorted(xs: &[i8]) -> Vec<i8> {
    xs.iter()
        .copied()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.inorder().eq(set.iter()) && tree.count_nodes() == set.len()
}

#[quickcheck]
fn inorder_is_strictly_increasing(ops: Vec<Op<i16>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    let keys: Vec<_> = tree.inorder().collect();
    keys.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.search(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.search(x))
}

#[quickcheck]
fn insert_twice_is_insert_once(xs: Vec<i8>) -> bool {
    let once: Tree<_> = xs.iter().copied().collect();
    let twice: Tree<_> = xs.iter().chain(&xs).copied().collect();

    once.preorder().eq(twice.preorder()) && once.count_nodes() == twice.count_nodes()
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.search(x)) && still_present.iter().all(|x| tree.search(x))
}

#[quickcheck]
fn delete_removes_exactly_one(xs: Vec<i8>, key: i8) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let before = tree.count_nodes();
    let was_present = tree.search(&key);

    let deleted = tree.delete(&key);

    let mut expected = sorted(&xs);
    expected.retain(|x| *x != key);

    deleted.is_some() == was_present
        && tree.count_nodes() == before - usize::from(was_present)
        && !tree.search(&key)
        && tree.inorder().eq(expected.iter())
}

#[quickcheck]
fn traversals_are_permutations(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let expected = sorted(&xs);
    let as_sorted = |keys: Vec<&i8>| {
        let mut keys: Vec<i8> = keys.into_iter().copied().collect();
        keys.sort_unstable();
        keys
    };

    tree.inorder().eq(expected.iter())
        && as_sorted(tree.preorder().collect()) == expected
        && as_sorted(tree.postorder().collect()) == expected
        && as_sorted(tree.level_order().collect()) == expected
        && tree.count_nodes() == expected.len()
}

#[quickcheck]
fn height_bounds(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let count = tree.count_nodes();
    let height = tree.height();

    (height == 0) == (count == 0) && height <= count && tree.levels().len() == height
}

#[quickcheck]
fn preorder_rebuilds_shape(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let rebuilt: Tree<_> = tree.preorder().copied().collect();

    tree.preorder().eq(rebuilt.preorder()) && tree.levels() == rebuilt.levels()
}

#[test]
fn reference_scenario() {
    let mut tree: Tree<_> = [50, 30, 70, 20, 40, 60, 80, 10, 25, 35, 45]
        .into_iter()
        .collect();

    assert!(tree
        .inorder()
        .eq(&[10, 20, 25, 30, 35, 40, 45, 50, 60, 70, 80]));
    assert_eq!(tree.height(), 4);
    assert_eq!(tree.count_nodes(), 11);
    assert!(tree.search(&40));
    assert!(!tree.search(&99));

    tree.delete(&30);
    assert!(tree.inorder().eq(&[10, 20, 25, 35, 40, 45, 50, 60, 70, 80]));
    tree.delete(&20);
    tree.delete(&10);

    assert!(tree.inorder().eq(&[25, 35, 40, 45, 50, 60, 70, 80]));
    assert_eq!(tree.count_nodes(), 8);
}
