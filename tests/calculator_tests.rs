use string_calculator::calculator::{add, CalculatorError};
use string_calculator::state::{calculate_all, AppState, Outcome};

#[test]
fn test_complete_feature_set() {
    let cases = [
        ("", 0),
        ("42", 42),
        ("1,2,3", 6),
        ("1\n2,3", 6),
        ("//;\n1;2;3", 6),
        ("2,1001", 2),
        ("//[***]\n1***2***3", 6),
    ];

    let inputs: Vec<&str> = cases.iter().map(|(input, _)| *input).collect();
    let expected: Vec<i64> = cases.iter().map(|(_, sum)| *sum).collect();

    let sums = calculate_all(&inputs).expect("all feature cases should evaluate");
    assert_eq!(sums, expected);

    assert!(add("1,-2").is_err());
}

#[test]
fn test_comma_lists_sum_arithmetically() {
    for n in [1usize, 2, 10, 100] {
        let values: Vec<i64> = (0..n as i64).map(|i| (i * 37) % 1001).collect();
        let input = values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(",");
        assert_eq!(add(&input), Ok(values.iter().sum::<i64>()), "input {input}");
    }
}

#[test]
fn test_single_literal_returns_itself() {
    for n in [0i64, 1, 7, 999, 1000] {
        assert_eq!(add(&n.to_string()), Ok(n));
    }
}

#[test]
fn test_reversed_tokens_give_same_sum() {
    let forward = "4,8,15,16,23,42";
    let reversed = "42,23,16,15,8,4";
    assert_eq!(add(forward), add(reversed));
}

#[test]
fn test_reordering_changes_negative_message_order() {
    assert_eq!(
        add("-1,-2"),
        Err(CalculatorError::NegativeNumbers(vec![-1, -2]))
    );
    assert_eq!(
        add("-2,-1"),
        Err(CalculatorError::NegativeNumbers(vec![-2, -1]))
    );
}

#[test]
fn test_form_round_trip_matches_displayed_text() {
    let mut state = AppState::default();

    state.input = "//[sep]\n1sep2sep3".to_string();
    state.calculate();
    assert_eq!(state.outcome, Some(Outcome::Sum(6)));
    assert_eq!(
        state.outcome.as_ref().map(ToString::to_string).as_deref(),
        Some("Result: 6")
    );

    state.input = "1,-2".to_string();
    state.calculate();
    assert_eq!(
        state.outcome.as_ref().map(ToString::to_string).as_deref(),
        Some("Error: negative numbers not allowed: -2")
    );
}

#[test]
fn test_calculate_all_stops_at_first_failure() {
    let err = calculate_all(&["1,2", "-5", "abc"]).unwrap_err();
    let root = err
        .downcast_ref::<CalculatorError>()
        .expect("root cause is a calculator error");
    assert_eq!(root, &CalculatorError::NegativeNumbers(vec![-5]));
}
