use classic_ds::tree::{Order, Tree};

use std::collections::BTreeSet;

use quickcheck::quickcheck;

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same keys in both.
fn do_ops(ops: &[Op], mut bst: Tree, set: &mut BTreeSet<i32>) -> Tree {
    for op in ops {
        match *op {
            Op::Insert(k) => {
                bst = bst.insert(i32::from(k));
                set.insert(i32::from(k));
            }
            Op::Remove(k) => {
                bst = bst.delete(i32::from(k));
                set.remove(&i32::from(k));
            }
        }
    }

    bst
}

#[test]
fn scenario() {
    let mut root = Tree::new();
    for key in [50, 30, 70, 20, 40, 60, 80] {
        root = root.insert(key);
    }

    assert_eq!(root.iter().collect::<Vec<_>>(), [20, 30, 40, 50, 60, 70, 80]);
    assert_eq!(
        root.traverse(Order::PreOrder).collect::<Vec<_>>(),
        [50, 30, 20, 40, 70, 60, 80]
    );
    assert_eq!(
        root.traverse(Order::PostOrder).collect::<Vec<_>>(),
        [20, 40, 30, 60, 80, 70, 50]
    );
    assert_eq!(root.search(40).map(|n| n.key()), Some(40));

    root = root.delete(30);
    assert_eq!(root.iter().collect::<Vec<_>>(), [20, 40, 50, 60, 70, 80]);
    assert_eq!(root.height(), 3);
}

#[test]
fn empty_and_chain_heights() {
    assert_eq!(Tree::new().height(), 0);

    let chain: Tree = (1..=32).collect();
    assert_eq!(chain.height(), 32);
}

quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op>) -> bool {
        let mut set = BTreeSet::new();

        let tree = do_ops(&ops, Tree::new(), &mut set);
        tree.iter().eq(set.iter().copied())
    }
}

quickcheck! {
    fn contains(xs: Vec<i32>) -> bool {
        let tree: Tree = xs.iter().copied().collect();

        xs.iter().all(|x| tree.contains(*x))
    }
}

quickcheck! {
    fn contains_not(xs: Vec<i32>, nots: Vec<i32>) -> bool {
        let tree: Tree = xs.iter().copied().collect();
        let added: BTreeSet<_> = xs.into_iter().collect();
        let nots: BTreeSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.search(*x).is_none())
    }
}

quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: Tree = xs.iter().map(|x| i32::from(*x)).collect();
        for delete in &deletes {
            tree = tree.delete(i32::from(*delete));
        }

        let mut still_present = xs;
        for delete in &deletes {
            // We may have inserted the same key multiple times - delete each one.
            still_present.retain(|x| x != delete);
        }

        deletes.iter().all(|x| !tree.contains(i32::from(*x)))
            && still_present.iter().all(|x| tree.contains(i32::from(*x)))
    }
}

quickcheck! {
    fn strictly_increasing_keys_form_a_chain(n: u8) -> bool {
        let tree: Tree = (0..i32::from(n)).collect();
        tree.height() == usize::from(n) && tree.len() == usize::from(n)
    }
}
