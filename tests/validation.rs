use approx::assert_abs_diff_eq;
use minitree::prelude::*;
use minitree::holdout_error;


const TRAIN: &str = "tests/dataset/risk_train.txt";
const TEST: &str = "tests/dataset/risk_test.txt";
const VALIDATE: &str = "tests/dataset/risk_validate.txt";


fn risk_session() -> Session<LabelCodec> {
    let learner = DecisionTreeBuilder::new().build();
    Session::load(LabelCodec::default(), learner, TRAIN).unwrap()
}


#[test]
fn training_error_of_the_risk_tree() {
    let session = risk_session();
    assert_eq!(session.n_records(), 12);

    let report = session.training_error();
    assert_eq!(report.n_errors(), 0);
    assert_eq!(report.n_records(), 12);
}


#[test]
fn leave_one_out_of_the_risk_tree() {
    let session = risk_session();
    let report = session.leave_one_out();

    assert_eq!(report.n_errors(), 7);
    assert_eq!(report.n_records(), 12);
    assert_abs_diff_eq!(report.rate(), 7.0 / 12.0);
}


#[test]
fn leave_one_out_leaves_the_session_untouched() {
    let session = risk_session();
    let store = session.store().clone();
    let tree = session.tree().clone();

    let _ = session.leave_one_out();

    assert_eq!(session.store(), &store);
    assert_eq!(session.tree(), &tree);
    assert_eq!(session.tree(), &session.learner().produce(&store));
}


#[test]
fn leave_one_out_matches_remove_and_reinsert() {
    let codec = LabelCodec::default();
    let original = RecordReader::new(&codec).read_training(TRAIN).unwrap();
    let learner = DecisionTreeBuilder::new().build();

    let mut store = original.clone();
    let mut n_errors = 0;
    for i in 0..store.n_records() {
        let held_out = store.remove(i);
        let f = learner.produce(&store);
        assert_eq!(f, learner.produce_on(&original, original.positions_without(i)));

        if f.predict(held_out.attributes()) != held_out.class() {
            n_errors += 1;
        }
        store.insert(i, held_out).unwrap();
    }

    assert_eq!(store, original);
    assert_eq!(LeaveOneOut::new(&original).run(&learner).n_errors(), n_errors);
}


#[test]
fn leave_one_out_folds() {
    let codec = LabelCodec::default();
    let store = RecordReader::new(&codec).read_training(TRAIN).unwrap();

    let folds = LeaveOneOut::new(&store).collect::<Vec<_>>();
    assert_eq!(folds.len(), 12);
    for (i, (held_out, positions)) in folds.into_iter().enumerate() {
        assert_eq!(held_out, i);
        assert_eq!(positions.len(), 11);
        assert!(!positions.contains(&i));
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}


#[test]
fn leave_one_out_of_a_single_record() {
    let store = RecordStore::from_records(
        [Record::new(vec![1, 0], 2)], 2, 2
    ).unwrap();
    let learner = DecisionTreeBuilder::new().build();

    // The only fold trains on nothing and predicts class 1.
    let report = LeaveOneOut::new(&store).run(&learner);
    assert_eq!(report.n_errors(), 1);
}


#[test]
fn holdout_validation() {
    let session = risk_session();
    let report = session.validate(VALIDATE).unwrap();

    assert_eq!(report.n_errors(), 1);
    assert_eq!(report.n_records(), 4);
    assert_eq!(report.to_string(), "25.00 percent error");
}


#[test]
fn holdout_error_on_records() {
    let session = risk_session();
    let records = session.store().records();

    let report = holdout_error(session.tree(), records);
    assert_eq!(report, session.training_error());
}


#[test]
fn empty_report() {
    let report = ErrorReport::default();
    assert_abs_diff_eq!(report.rate(), 0.0);
    assert_eq!(report.to_string(), "0.00 percent error");
}


#[test]
fn classification_output() {
    let session = risk_session();
    let output = std::env::temp_dir().join("minitree_classification_output.txt");

    let n = session.classify_data(TEST, &output).unwrap();
    assert_eq!(n, 4);

    let written = std::fs::read_to_string(&output).unwrap();
    let expected = "\
        highrisk\t0.250\t1.000\n\
        lowrisk\t0.250\t1.000\n\
        mediumrisk\t0.083\t1.000\n\
        highrisk\t0.083\t1.000\n\
    ";
    assert_eq!(written, expected);
}


#[test]
fn pushing_a_record_rebuilds_the_tree() {
    let mut session = risk_session();
    let before = session.tree().clone();

    // Contradicts the pure `nonsmoker, female` leaf.
    let record = Record::new(vec![0, 1, 1, 1, 0], 1);
    session.push(record.clone()).unwrap();
    assert_eq!(session.n_records(), 13);
    assert_ne!(session.tree(), &before);
    assert_eq!(session.tree(), &session.learner().produce(session.store()));

    let removed = session.remove(12);
    assert_eq!(removed, record);
    assert_eq!(session.tree(), &before);
}
