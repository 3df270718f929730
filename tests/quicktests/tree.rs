use std::collections::{BTreeSet, HashSet};

use plain_bst::Tree;

use crate::Op;

/// Applies a set of operations to a tree and to an oracle set. Both report
/// whether each operation changed anything, so any disagreement panics right
/// at the offending operation.
fn do_ops(ops: &[Op<i8>], tree: &mut Tree, oracle: &mut BTreeSet<i64>) {
    for op in ops {
        match *op {
            Op::Insert(key) => {
                assert_eq!(tree.insert(key as i64), oracle.insert(key as i64));
            }
            Op::Remove(key) => {
                assert_eq!(tree.remove(key as i64), oracle.remove(&(key as i64)));
            }
        }
    }
}

quickcheck::quickcheck! {
    fn fuzz_matches_btreeset(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut oracle = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut oracle);

        tree.len() == oracle.len()
            && tree.iter_inorder().eq(oracle.iter().copied())
            && oracle.iter().all(|&key| tree.contains(key))
    }
}

quickcheck::quickcheck! {
    fn inorder_is_strictly_ascending(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut oracle = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut oracle);

        let keys: Vec<i64> = tree.iter_inorder().collect();
        keys.windows(2).all(|pair| pair[0] < pair[1])
    }
}

quickcheck::quickcheck! {
    fn contains_inserted(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x as i64);
        }

        xs.iter().all(|x| tree.contains(*x as i64))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x as i64);
        }
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.contains(*x as i64))
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x as i64);
        }
        for delete in &deletes {
            tree.remove(*delete as i64);
        }

        let deleted: HashSet<_> = deletes.iter().copied().collect();
        let still_present = xs.iter().filter(|x| !deleted.contains(*x));

        deletes.iter().all(|x| !tree.contains(*x as i64))
            && still_present.into_iter().all(|x| tree.contains(*x as i64))
    }
}

quickcheck::quickcheck! {
    fn height_stays_within_bounds(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x as i64);
        }

        let n = tree.len();
        if n == 0 {
            tree.height() == 0
        } else {
            (1..=n).contains(&tree.height())
        }
    }
}

quickcheck::quickcheck! {
    fn double_insert_is_idempotent(xs: Vec<i8>) -> bool {
        let mut once = Tree::new();
        let mut twice = Tree::new();
        for x in &xs {
            once.insert(*x as i64);
            twice.insert(*x as i64);
            twice.insert(*x as i64);
        }

        once == twice
    }
}

quickcheck::quickcheck! {
    fn clear_empties_the_tree(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut oracle = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut oracle);
        tree.clear();

        tree.is_empty() && tree.height() == 0 && tree.iter_inorder().next().is_none()
    }
}
