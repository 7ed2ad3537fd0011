use threaded_bst::{Error, Tree};

use std::collections::BTreeSet;

/// Builds an unthreaded tree from `xs`, skipping duplicates.
fn build(xs: &[i8]) -> (Tree<i8>, BTreeSet<i8>) {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();
    for x in xs {
        let inserted = tree.insert(*x);
        if set.insert(*x) {
            assert_eq!(inserted, Ok(()));
        } else {
            assert_eq!(inserted, Err(Error::DuplicateValue));
        }
    }

    (tree, set)
}

/// Every thread must point at the next larger value that's still around.
fn threads_are_successors(tree: &Tree<i8>, set: &BTreeSet<i8>) -> bool {
    let sorted: Vec<_> = set.iter().copied().collect();
    tree.threads().unwrap().into_iter().all(|(value, successor)| {
        sorted
            .windows(2)
            .any(|pair| pair[0] == *value && pair[1] == *successor)
    })
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i8>) -> bool {
    let (tree, set) = build(&xs);

    tree.in_order().unwrap() == set.into_iter().collect::<Vec<_>>()
}

#[quickcheck]
fn traversals_visit_every_value_once(xs: Vec<i8>) -> bool {
    let (tree, set) = build(&xs);

    [tree.pre_order(), tree.post_order()]
        .into_iter()
        .map(Result::unwrap)
        .all(|values| {
            values.len() == set.len() && values.into_iter().collect::<BTreeSet<_>>() == set
        })
}

#[quickcheck]
fn threads_follow_in_order(xs: Vec<i8>) -> bool {
    let (mut tree, set) = build(&xs);
    tree.make_right_threaded().unwrap();

    threads_are_successors(&tree, &set)
        && tree.iter().unwrap().copied().eq(set.iter().copied())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let (mut tree, mut set) = build(&xs);
    tree.make_right_threaded().unwrap();

    for delete in &deletes {
        let result = tree.delete(delete);
        if !set.contains(delete) {
            assert_eq!(result, Err(Error::NotFound));
        } else if set.len() == 1 {
            assert_eq!(result, Err(Error::InvalidOperation));
        } else {
            assert_eq!(result, Ok(()));
            set.remove(delete);
        }

        if !threads_are_successors(&tree, &set) {
            return false;
        }
    }

    tree.len() == set.len()
        && tree.iter().unwrap().copied().eq(set.iter().copied())
        && set.iter().all(|x| tree.contains(x))
        && deletes.iter().all(|x| set.contains(x) || !tree.contains(x))
}
