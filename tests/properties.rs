//! Properties of tree induction and leave-one-out
//! over random binary datasets.

use approx::assert_abs_diff_eq;
use proptest::prelude::*;

use minitree::prelude::*;


/// Random stores with 1..=5 attributes, 1..=4 classes
/// and up to 24 records.
fn arb_store() -> impl Strategy<Value = RecordStore> {
    (1_usize..=5, 1_usize..=4).prop_flat_map(|(n_attributes, n_classes)| {
        let record = (
            prop::collection::vec(0_u8..=1, n_attributes),
            1..=n_classes,
        );
        prop::collection::vec(record, 0..24).prop_map(move |rows| {
            let records = rows.into_iter()
                .map(|(x, y)| Record::new(x, y));
            RecordStore::from_records(records, n_attributes, n_classes)
                .unwrap()
        })
    })
}


fn arb_impurity() -> impl Strategy<Value = Impurity> {
    prop_oneof![
        Just(Impurity::Gini),
        Just(Impurity::ClassificationError),
        Just(Impurity::Entropy),
    ]
}


/// Checks that no attribute is tested twice on a root-to-leaf path,
/// i.e. every internal node has exactly one attribute fewer
/// available than its parent.
fn assert_attributes_shrink(node: &Node, used: &mut Vec<usize>) {
    if let Node::Internal(node) = node {
        let attribute = node.condition_attribute();
        assert!(!used.contains(&attribute), "{attribute} reused on {used:?}");

        used.push(attribute);
        assert_attributes_shrink(node.left(), used);
        assert_attributes_shrink(node.right(), used);
        used.pop();
    }
}


proptest! {
    #[test]
    fn induction_is_deterministic(store in arb_store(), impurity in arb_impurity()) {
        let learner = DecisionTreeBuilder::new().impurity(impurity).build();
        prop_assert_eq!(learner.produce(&store), learner.produce(&store));
    }


    #[test]
    fn leaves_partition_the_records(store in arb_store(), impurity in arb_impurity()) {
        prop_assume!(!store.is_empty());

        let f = DecisionTreeBuilder::new()
            .impurity(impurity)
            .build()
            .produce(&store);
        let lower = 1.0 / store.n_classes() as f64;

        let leaves = f.leaves();
        for leaf in leaves.iter() {
            prop_assert!(leaf.coverage() > 0.0 && leaf.coverage() <= 1.0);
            prop_assert!(leaf.accuracy() >= lower && leaf.accuracy() <= 1.0);
        }
        let coverage = leaves.iter().map(|leaf| leaf.coverage()).sum::<f64>();
        assert_abs_diff_eq!(coverage, 1.0, epsilon = 1e-9);
    }


    #[test]
    fn attributes_shrink_along_every_path(store in arb_store()) {
        let f = DecisionTreeBuilder::new().build().produce(&store);

        prop_assert!(f.depth() <= store.n_attributes());
        assert_attributes_shrink(f.root(), &mut Vec::new());
    }


    #[test]
    fn pure_leaves_are_exact(store in arb_store()) {
        let f = DecisionTreeBuilder::new().build().produce(&store);

        for record in store.records() {
            let leaf = f.classify(record.attributes());
            let reaching = store.records()
                .iter()
                .filter(|r| std::ptr::eq(f.classify(r.attributes()), leaf))
                .collect::<Vec<_>>();
            let pure = reaching.iter().all(|r| r.class() == reaching[0].class());
            prop_assert_eq!(leaf.accuracy() == 1.0, pure);
        }
    }


    #[test]
    fn classification_is_idempotent(store in arb_store()) {
        let f = DecisionTreeBuilder::new().build().produce(&store);

        for record in store.records() {
            let first = f.classify(record.attributes());
            let second = f.classify(record.attributes());
            prop_assert!(std::ptr::eq(first, second));
        }
    }


    #[test]
    fn leave_one_out_restores_state(store in arb_store()) {
        let learner = DecisionTreeBuilder::new().build();
        let session = Session::new(LabelCodec::default(), learner, store.clone());

        let report = session.leave_one_out();

        prop_assert_eq!(report.n_records(), store.n_records());
        prop_assert!(report.n_errors() <= store.n_records());
        prop_assert_eq!(session.store(), &store);
        prop_assert_eq!(session.tree(), &learner.produce(&store));
    }
}
