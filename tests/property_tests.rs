use std::sync::Once;

use proptest::prelude::*;

use persist::list::PersistentList;
use persist::vtree::VersionTree;

static INIT: Once = Once::new();

/// Initialize tracing (once) so `RUST_LOG` can surface the crate's
/// `trace`/`debug` events while these properties run.
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

#[derive(Debug, Clone)]
enum ListOp {
    PushFront(i32),
    PushBack(i32),
    PopFront,
    PopBack,
}

fn arb_list_op() -> impl Strategy<Value = ListOp> {
    prop_oneof![
        any::<i32>().prop_map(ListOp::PushFront),
        any::<i32>().prop_map(ListOp::PushBack),
        Just(ListOp::PopFront),
        Just(ListOp::PopBack),
    ]
}

proptest! {
    /// Every prior version's contents stay exactly as they were, no matter
    /// what mutations run afterward: the defining property of persistence.
    #[test]
    fn prop_old_versions_are_never_disturbed(ops in prop::collection::vec(arb_list_op(), 0..200)) {
        init_tracing();
        let mut list = PersistentList::new();
        let mut snapshots: Vec<(u64, Vec<i32>)> = vec![(0, Vec::new())];

        for op in ops {
            let (base, _) = snapshots.last().unwrap().clone();
            let new_version = match op {
                ListOp::PushFront(x) => list.push_front(base, x),
                ListOp::PushBack(x) => list.push_back(base, x),
                ListOp::PopFront => list.pop_front(base),
                ListOp::PopBack => list.pop_back(base),
            };
            if let Ok(v) = new_version {
                let contents: Vec<i32> = list.begin(v).unwrap().collect();
                snapshots.push((v, contents));
            }
        }

        for (v, expected) in &snapshots {
            let actual: Vec<i32> = list.begin(*v).unwrap().collect();
            prop_assert_eq!(&actual, expected);
        }
    }

    /// `size(v)` always equals the number of elements a full traversal of
    /// version `v` yields.
    #[test]
    fn prop_size_matches_traversal_length(ops in prop::collection::vec(arb_list_op(), 0..100)) {
        init_tracing();
        let mut list = PersistentList::new();
        let mut current = 0u64;

        for op in ops {
            let new_version = match op {
                ListOp::PushFront(x) => list.push_front(current, x),
                ListOp::PushBack(x) => list.push_back(current, x),
                ListOp::PopFront => list.pop_front(current),
                ListOp::PopBack => list.pop_back(current),
            };
            if let Ok(v) = new_version {
                current = v;
            }
            let len = list.begin(current).unwrap().count();
            prop_assert_eq!(len, list.size(current).unwrap());
        }
    }

    /// Ancestry is transitive: if `a` is an ancestor of `b` and `b` is an
    /// ancestor of `c`, `a` is an ancestor of `c`.
    #[test]
    fn prop_ancestry_is_transitive(parents in prop::collection::vec(0usize..20, 1..300)) {
        init_tracing();
        let mut tree = VersionTree::new();
        let mut registered = vec![0i64];

        for (i, p) in parents.into_iter().enumerate() {
            let v = (i + 1) as i64;
            let parent = registered[p % registered.len()];
            if tree.insert(v, parent).is_ok() {
                registered.push(v);
            }
        }

        for &a in &registered {
            for &b in &registered {
                for &c in &registered {
                    if tree.before(a, b).unwrap() && tree.before(b, c).unwrap() {
                        prop_assert!(tree.before(a, c).unwrap());
                    }
                }
            }
        }
    }

    /// Ancestry is asymmetric for distinct versions: `a` before `b` rules out
    /// `b` before `a`, as long as `a != b`. (`before` is reflexive, so the
    /// property does not hold when `a == b` — see `prop_before_is_reflexive`.)
    #[test]
    fn prop_ancestry_is_asymmetric(parents in prop::collection::vec(0usize..20, 1..300)) {
        init_tracing();
        let mut tree = VersionTree::new();
        let mut registered = vec![0i64];

        for (i, p) in parents.into_iter().enumerate() {
            let v = (i + 1) as i64;
            let parent = registered[p % registered.len()];
            if tree.insert(v, parent).is_ok() {
                registered.push(v);
            }
        }

        for &a in &registered {
            for &b in &registered {
                if a != b && tree.before(a, b).unwrap() {
                    prop_assert!(!tree.before(b, a).unwrap());
                }
            }
        }
    }

    /// Every registered version is its own ancestor under `before`: the
    /// comparator is defined non-strictly (`L_aₒ ≤ L_bₒ ∧ L_bᶜ ≤ L_aᶜ`), so
    /// `before(v, v)` must always hold.
    #[test]
    fn prop_before_is_reflexive(parents in prop::collection::vec(0usize..20, 1..300)) {
        init_tracing();
        let mut tree = VersionTree::new();
        let mut registered = vec![0i64];

        for (i, p) in parents.into_iter().enumerate() {
            let v = (i + 1) as i64;
            let parent = registered[p % registered.len()];
            if tree.insert(v, parent).is_ok() {
                registered.push(v);
            }
        }

        for &v in &registered {
            prop_assert!(tree.before(v, v).unwrap());
        }
    }
}
