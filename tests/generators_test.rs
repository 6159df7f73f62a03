// Integration tests for the algorithm generators

use algotty::algorithms::Algorithm;
use algotty::operation::{Operation, OperationKind};

fn run(algorithm: Algorithm, base: &[u32], target: i64) -> Vec<Operation> {
    algorithm.generator(base, target).collect()
}

#[test]
fn test_bubble_sort_sequence() {
    let ops = run(Algorithm::Bubble, &[5, 3, 1], 0);
    assert_eq!(
        ops,
        vec![
            Operation::Compare(0, 1),
            Operation::Swap {
                indices: (0, 1),
                array: vec![3, 5, 1],
            },
            Operation::Compare(1, 2),
            Operation::Swap {
                indices: (1, 2),
                array: vec![3, 1, 5],
            },
            Operation::Compare(0, 1),
            Operation::Swap {
                indices: (0, 1),
                array: vec![1, 3, 5],
            },
            Operation::Done(Some(vec![1, 3, 5])),
        ]
    );
}

#[test]
fn test_bubble_fifth_operation() {
    let ops = run(Algorithm::Bubble, &[3, 1, 2], 0);
    assert_eq!(ops[4], Operation::Compare(0, 1));
}

#[test]
fn test_insertion_sort_sequence() {
    let ops = run(Algorithm::Insertion, &[3, 1, 2], 0);
    assert_eq!(
        ops,
        vec![
            Operation::Highlight(vec![1]),
            Operation::Compare(0, 1),
            Operation::Shift {
                indices: (0, 1),
                array: vec![3, 3, 2],
            },
            Operation::Insert {
                index: 0,
                array: vec![1, 3, 2],
            },
            Operation::Highlight(vec![2]),
            Operation::Compare(1, 2),
            Operation::Shift {
                indices: (1, 2),
                array: vec![1, 3, 3],
            },
            Operation::Insert {
                index: 1,
                array: vec![1, 2, 3],
            },
            Operation::Done(Some(vec![1, 2, 3])),
        ]
    );
}

#[test]
fn test_subset_sum_sequence() {
    let ops = run(Algorithm::SubsetSum, &[2, 3], 5);
    let decide = |index, include, chosen: [bool; 2], sum| Operation::Decide {
        index,
        include,
        chosen: chosen.to_vec(),
        sum,
    };
    let check = |chosen: [bool; 2], sum| Operation::Check {
        chosen: chosen.to_vec(),
        sum,
    };

    assert_eq!(
        ops,
        vec![
            decide(0, false, [false, false], 0),
            decide(1, false, [false, false], 0),
            check([false, false], 0),
            decide(1, true, [false, true], 3),
            check([false, true], 3),
            decide(0, true, [true, false], 2),
            decide(1, false, [true, false], 2),
            check([true, false], 2),
            decide(1, true, [true, true], 5),
            Operation::Solution {
                chosen: vec![true, true],
                sum: 5,
            },
            Operation::Done(None),
        ]
    );
}

#[test]
fn test_subset_sum_event_counts() {
    for n in 0..=6 {
        let base: Vec<u32> = (1..=n as u32).collect();
        let ops = run(Algorithm::SubsetSum, &base, 3);

        let leaves = ops
            .iter()
            .filter(|op| matches!(op.kind(), OperationKind::Check | OperationKind::Solution))
            .count();
        let decides = ops
            .iter()
            .filter(|op| op.kind() == OperationKind::Decide)
            .count();

        assert_eq!(leaves, 1 << n, "leaves for n = {}", n);
        assert_eq!(decides, (1 << (n + 1)) - 2, "decisions for n = {}", n);
        assert_eq!(ops.last(), Some(&Operation::Done(None)));
    }
}

#[test]
fn test_subset_sum_without_solution() {
    let ops = run(Algorithm::SubsetSum, &[4, 6], 1);
    assert!(ops.iter().all(|op| op.kind() != OperationKind::Solution));
    assert_eq!(ops.last(), Some(&Operation::Done(None)));
}

#[test]
fn test_every_sort_finishes_sorted() {
    let base = [9, 4, 7, 1, 8, 2, 2, 5];
    let mut expected = base.to_vec();
    expected.sort_unstable();

    for algorithm in Algorithm::ALL.into_iter().filter(|a| a.is_sorting()) {
        let ops = run(algorithm, &base, 0);
        assert_eq!(
            ops.last(),
            Some(&Operation::Done(Some(expected.clone()))),
            "{} did not finish sorted",
            algorithm
        );
        let done_count = ops.iter().filter(|op| op.is_terminal()).count();
        assert_eq!(done_count, 1, "{} emitted extra terminal events", algorithm);
    }
}

#[test]
fn test_generators_are_deterministic() {
    let base = [12, 3, 40, 3, 7, 25];
    for algorithm in Algorithm::ALL {
        assert_eq!(
            run(algorithm, &base, 10),
            run(algorithm, &base, 10),
            "{} is not deterministic",
            algorithm
        );
    }
}

#[test]
fn test_generators_leave_input_untouched() {
    let base = vec![6, 5, 4, 3, 2, 1];
    for algorithm in Algorithm::ALL {
        let _ = run(algorithm, &base, 7);
        assert_eq!(base, vec![6, 5, 4, 3, 2, 1]);
    }
}

#[test]
fn test_generators_are_fused() {
    for algorithm in Algorithm::ALL {
        let mut generator = algorithm.generator(&[2, 1], 3);
        for _ in generator.by_ref() {}
        assert_eq!(generator.next(), None);
        assert_eq!(generator.next(), None);
    }
}

#[test]
fn test_empty_and_single_inputs() {
    for algorithm in Algorithm::ALL.into_iter().filter(|a| a.is_sorting()) {
        assert_eq!(run(algorithm, &[], 0), vec![Operation::Done(Some(vec![]))]);
        assert_eq!(
            run(algorithm, &[42], 0).last(),
            Some(&Operation::Done(Some(vec![42])))
        );
    }
}
