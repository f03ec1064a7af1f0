use std::fs;

use pcalc::{EvalError, Evaluator, evaluate_once};
use walkdir::WalkDir;

/// Relative tolerance for comparing results with the case files.
const REL_TOLERANCE: f64 = 1e-12;

#[test]
fn case_files_pass() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (line_no, (source, expected)) in extract_cases(&content) {
            count += 1;
            let result = evaluate_once(source);
            if let Err(msg) = check_case(&result, expected) {
                panic!("{path:?}:{line_no}: {source:?} {msg}");
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

/// Splits a case file into `(line number, expression, expected)` entries,
/// skipping blank lines and `#` comments.
fn extract_cases(content: &str) -> Vec<(usize, (&str, &str))> {
    content.lines()
           .enumerate()
           .filter(|(_, line)| {
               let trimmed = line.trim_start();
               !trimmed.is_empty() && !trimmed.starts_with('#')
           })
           .map(|(i, line)| {
               let (source, expected) = line.rsplit_once("=>")
                                            .unwrap_or_else(|| panic!("line {} has no '=>'", i + 1));
               (i + 1, (source.trim(), expected.trim()))
           })
           .collect()
}

fn check_case(result: &Result<f64, EvalError>, expected: &str) -> Result<(), String> {
    if let Some(kind) = expected.strip_prefix("error ") {
        return match result {
            Err(e) if e.kind() == kind => Ok(()),
            other => Err(format!("expected error {kind}, got {other:?}")),
        };
    }

    let want: f64 = expected.parse()
                            .unwrap_or_else(|e| panic!("bad expected value {expected:?}: {e}"));
    let got = match result {
        Ok(v) => *v,
        Err(e) => return Err(format!("expected {want}, got error {e}")),
    };

    let matches = if want.is_nan() {
        got.is_nan()
    } else if want.is_infinite() || want == 0.0 {
        got == want
    } else {
        ((got - want) / want).abs() <= REL_TOLERANCE
    };

    if matches { Ok(()) } else { Err(format!("expected {want}, got {got}")) }
}

fn assert_value(src: &str, expected: f64) {
    match evaluate_once(src) {
        Ok(v) => assert_eq!(v, expected, "{src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if let Ok(v) = evaluate_once(src) {
        panic!("Expression {src:?} evaluated to {v} but was expected to fail")
    }
}

#[test]
fn precedence_matches_arithmetic() {
    assert_value("2+3*4", 14.0);
    assert_value("(2+3)*4", 20.0);
    assert_value("2*3+4*5-6/2", 23.0);
}

#[test]
fn power_chains_from_the_right() {
    assert_value("2^3^2", 512.0);
    assert_value("-2^2", -4.0);
}

#[test]
fn last_survives_failed_evaluations() {
    let mut evaluator = Evaluator::new();
    assert_eq!(evaluator.evaluate("3+4"), Ok(7.0));
    assert_eq!(evaluator.evaluate("last"), Ok(7.0));
    assert!(evaluator.evaluate("3 +").is_err());
    assert!(evaluator.evaluate("").is_err());
    assert_eq!(evaluator.evaluate("last"), Ok(7.0));
}

#[test]
fn empty_and_blank_input() {
    assert_eq!(evaluate_once(""), Err(EvalError::EmptyExpression));
    assert_eq!(evaluate_once(" \t "), Err(EvalError::EmptyExpression));
}

#[test]
fn undefined_identifier_carries_its_name() {
    assert_eq!(evaluate_once("foo(1)"),
               Err(EvalError::UndefinedIdentifier { name: "foo".to_string() }));
}

#[test]
fn domain_errors_are_results() {
    assert!(evaluate_once("sqrt(-1)").is_ok_and(f64::is_nan));
    assert_eq!(evaluate_once("log(0)"), Ok(f64::NEG_INFINITY));
}

#[test]
fn atan2_uses_y_x_order() {
    assert_value("atan2(1,1)", 1.0_f64.atan2(1.0));
    assert_value("atan2(1,2)", 1.0_f64.atan2(2.0));
}

#[test]
fn random_is_in_unit_interval() {
    let mut evaluator = Evaluator::new();
    for _ in 0..200 {
        let r = evaluator.evaluate("random()").expect("random() failed");
        assert!((0.0..1.0).contains(&r), "{r} out of range");
    }
}

#[test]
fn same_expression_gives_same_result() {
    let mut evaluator = Evaluator::new();
    for src in ["1/3 + sin(2) * 7", "sqrt(2) ^ cbrt(5)", "round(pi * 100) / 100"] {
        let first = evaluator.evaluate(src).expect("first evaluation failed");
        let second = evaluator.evaluate(src).expect("second evaluation failed");
        assert_eq!(first.to_bits(), second.to_bits(), "{src:?}");
    }
}

#[test]
fn stray_operators_fail() {
    assert_failure("*");
    assert_failure("2 +* 3");
    assert_failure("(,)");
    assert_failure("atan2(1,,2)");
}
