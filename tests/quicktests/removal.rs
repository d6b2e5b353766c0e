use std::collections::HashSet;

use linked_bst::{Error, Tree};

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x, *x);
        }
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.find(x) == Err(Error::KeyNotFound))
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x, *x);
        }
        for delete in &deletes {
            // We may have inserted the same key multiple times - remove each one.
            while tree.remove(delete).is_ok() {}
        }

        let mut still_present = xs;
        still_present.retain(|x| !deletes.contains(x));

        tree.len() == still_present.len()
            && deletes.iter().all(|x| tree.find(x) == Err(Error::KeyNotFound))
            && still_present.iter().all(|x| tree.find(x) == Ok(x))
    }
}

quickcheck::quickcheck! {
    fn remove_then_find_fails(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        let unique: HashSet<_> = xs.iter().copied().collect();
        for x in &unique {
            tree.insert(*x, *x);
        }

        unique.iter().all(|x| {
            let mut tree = tree.clone();
            tree.remove(x) == Ok(*x) && tree.find(x) == Err(Error::KeyNotFound)
        })
    }
}

quickcheck::quickcheck! {
    fn removing_everything_empties_the_tree(xs: Vec<(i8, u8)>) -> bool {
        let mut tree = Tree::new();
        for (k, v) in &xs {
            tree.insert(*k, *v);
        }
        for (k, _) in &xs {
            if tree.remove(k).is_err() {
                return false;
            }
        }

        tree.is_empty()
            && tree.iter().next().is_none()
            && xs.iter().all(|(k, _)| tree.find(k) == Err(Error::KeyNotFound))
    }
}

quickcheck::quickcheck! {
    fn duplicates_are_found_first_in_first_out(key: i8, values: Vec<u8>, others: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for (other, value) in others.iter().zip(&values) {
            if *other != key {
                tree.insert(*other, *value);
            }
        }
        for value in &values {
            tree.insert(key, *value);
        }

        values.iter().all(|value| tree.find(&key) == Ok(value) && tree.remove(&key) == Ok(*value))
            && tree.find(&key) == Err(Error::KeyNotFound)
    }
}
