//! Property-based tests for pipes and validation pipes

use pipe_fns::testing::Spy;
use pipe_fns::{check, compose, pipe, void_pipe, Pipeline, Stage, ValidationPipe};
use proptest::prelude::*;

fn add(k: i64) -> impl Fn(i64) -> i64 {
    move |n| n.wrapping_add(k)
}

fn mul(k: i64) -> impl Fn(i64) -> i64 {
    move |n| n.wrapping_mul(k)
}

proptest! {
    #[test]
    fn prop_pipe_equals_nested_application(n in any::<i64>(), a in any::<i64>(), b in any::<i64>()) {
        let f = add(a);
        let g = mul(b);
        let expected = g(f(n));

        let h = pipe!(add(a), mul(b));
        prop_assert_eq!(h(n), expected);
    }

    #[test]
    fn prop_each_stage_sees_previous_output(n in any::<i64>(), a in any::<i64>()) {
        let first = Spy::new();
        let second = Spy::new();

        let h = pipe!(first.wrap(add(a)), second.wrap(mul(3)));
        let result = h(n);

        prop_assert_eq!(first.calls(), vec![n]);
        prop_assert_eq!(second.calls(), vec![n.wrapping_add(a)]);
        prop_assert_eq!(result, n.wrapping_add(a).wrapping_mul(3));
    }

    #[test]
    fn prop_composition_is_associative(n in any::<i64>(), a in any::<i64>(), b in any::<i64>(), c in any::<i64>()) {
        let left = compose(compose(add(a), mul(b)), add(c));
        let right = compose(add(a), compose(mul(b), add(c)));
        prop_assert_eq!(left(n), right(n));
    }

    #[test]
    fn prop_pipeline_matches_fold(n in any::<i64>(), ks in prop::collection::vec(any::<i64>(), 0..20)) {
        let pipeline: Pipeline<i64> = ks
            .iter()
            .map(|&k| Box::new(add(k)) as Stage<i64>)
            .collect();

        let expected = ks.iter().fold(n, |acc, &k| acc.wrapping_add(k));
        prop_assert_eq!(pipeline.call(n), expected);
        prop_assert_eq!(pipeline.len(), ks.len());
    }

    #[test]
    fn prop_void_pipe_agrees_with_both_checks(n in any::<i32>()) {
        let validate = void_pipe!(
            check(|n: &i32| n % 2 != 0, "number is not odd"),
            check(|n: &i32| *n > 10, "not greater than 10"),
        );

        let expected = if n % 2 == 0 {
            Err("number is not odd")
        } else if n <= 10 {
            Err("not greater than 10")
        } else {
            Ok(())
        };

        prop_assert_eq!(validate(&n), expected);
        prop_assert_eq!(validate(&n), expected);
    }

    #[test]
    fn prop_validation_pipe_stops_at_first_failure(
        n in any::<u8>(),
        thresholds in prop::collection::vec(any::<u8>(), 1..10)
    ) {
        let seen = Spy::new();
        let mut pipe = ValidationPipe::new();
        for (index, &threshold) in thresholds.iter().enumerate() {
            let step = seen.wrap_ref(move |value: &u8| {
                if *value >= threshold { Ok(()) } else { Err(index) }
            });
            pipe = pipe.then(step);
        }

        let first_failure = thresholds.iter().position(|&t| n < t);
        match first_failure {
            Some(index) => {
                prop_assert_eq!(pipe.run(&n), Err(index));
                prop_assert_eq!(seen.call_count(), index + 1);
            }
            None => {
                prop_assert_eq!(pipe.run(&n), Ok(()));
                prop_assert_eq!(seen.call_count(), thresholds.len());
            }
        }
    }
}
