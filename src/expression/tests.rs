use std::f64::consts::E;

use crate::expression::ast::Expression;
use crate::expression::build::{add, div, ln, log, mul, pow, sub};
use crate::expression::errors::ExpressionError;
use crate::expression::eval::Bindings;

fn x() -> Expression {
    Expression::variable("x")
}

fn bind(name: &str, val: f64) -> Bindings {
    let mut bindings = Bindings::new();
    bindings.insert(name.to_string(), val);
    bindings
}

#[test]
fn test_constant_diff_is_zero() {
    let c = Expression::Constant(5.0);
    let result = c.diff("x");
    assert!(result.is_ok());
    if let Ok(d) = result {
        assert!(d.equals_scalar(0.0));
    }
}

#[test]
fn test_variable_diff_self() {
    let result = x().diff("x");
    assert!(result.is_ok());
    if let Ok(d) = result {
        assert!(d.equals_scalar(1.0));
    }
}

#[test]
fn test_variable_diff_other() {
    let result = x().diff("y");
    assert!(result.is_ok());
    if let Ok(d) = result {
        assert!(d.equals_scalar(0.0));
    }
}

#[test]
fn test_variable_eval_bound() {
    let result = x().eval(&bind("x", 8.0));
    assert_eq!(result, Ok(Expression::Constant(8.0)));
}

#[test]
fn test_variable_eval_unbound_stays_symbolic() {
    let result = x().eval(&Bindings::new());
    assert_eq!(result, Ok(x()));
}

#[test]
fn test_sum_zero_identity() {
    let expr = add(x(), 0.0);
    let result = expr.eval(&bind("x", 5.0));
    assert_eq!(result, Ok(Expression::Constant(5.0)));
}

#[test]
fn test_sum_partial_eval_stays_symbolic() {
    let expr = add(x(), Expression::variable("y"));
    let result = expr.eval(&bind("x", 2.0));
    assert_eq!(
        result,
        Ok(add(Expression::Constant(2.0), Expression::variable("y")))
    );
}

#[test]
fn test_difference_of_numbers() {
    let expr = sub(1.0, 2.0);
    let result = expr.eval(&Bindings::new());
    assert_eq!(result, Ok(Expression::Constant(-1.0)));
}

#[test]
fn test_difference_zero_left_negates_number() {
    let expr = sub(0.0, 5.0);
    let result = expr.eval(&Bindings::new());
    assert_eq!(result, Ok(Expression::Constant(-5.0)));
}

#[test]
fn test_difference_zero_left_negates_symbolic() {
    let expr = sub(0.0, x());
    let result = expr.eval(&Bindings::new());
    assert_eq!(result, Ok(mul(-1.0, x())));
}

#[test]
fn test_product_zero_shortcut_skips_symbolic_side() {
    let expr = mul(0.0, x());
    let result = expr.eval(&Bindings::new());
    assert_eq!(result, Ok(Expression::Constant(0.0)));
}

#[test]
fn test_product_one_identity() {
    let expr = mul(x(), 1.0);
    let result = expr.eval(&Bindings::new());
    assert_eq!(result, Ok(x()));
}

#[test]
fn test_division_by_zero() {
    let expr = div(1.0, 0.0);
    let result = expr.eval(&Bindings::new());
    assert_eq!(result, Err(ExpressionError::DivisionByZero));
}

#[test]
fn test_division_zero_numerator_wins_over_zero_denominator() {
    let expr = div(0.0, 0.0);
    let result = expr.eval(&Bindings::new());
    assert_eq!(result, Ok(Expression::Constant(0.0)));
}

#[test]
fn test_division_by_one_identity() {
    let expr = div(x(), 1.0);
    let result = expr.eval(&Bindings::new());
    assert_eq!(result, Ok(x()));
}

#[test]
fn test_power_exponent_shortcuts() {
    assert_eq!(
        pow(x(), 0.0).eval(&Bindings::new()),
        Ok(Expression::Constant(1.0))
    );
    assert_eq!(pow(x(), 1.0).eval(&Bindings::new()), Ok(x()));
}

#[test]
fn test_power_base_shortcuts() {
    assert_eq!(
        pow(0.0, x()).eval(&Bindings::new()),
        Ok(Expression::Constant(0.0))
    );
    assert_eq!(
        pow(1.0, x()).eval(&Bindings::new()),
        Ok(Expression::Constant(1.0))
    );
}

#[test]
fn test_power_numeric() {
    let result = pow(2.0, 10.0).eval(&Bindings::new());
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert_eq!(value.as_number(), Some(1024.0));
    }
}

#[test]
fn test_logarithm_of_one() {
    let result = ln(1.0).eval(&Bindings::new());
    assert_eq!(result, Ok(Expression::Constant(0.0)));
}

#[test]
fn test_logarithm_of_base() {
    let result = log(10.0, 10.0).eval(&Bindings::new());
    assert_eq!(result, Ok(Expression::Constant(1.0)));
}

#[test]
fn test_logarithm_numeric() {
    let result = log(2.0, 8.0).eval(&Bindings::new());
    assert!(result.is_ok());
    if let Ok(value) = result {
        let n = value.as_number().unwrap_or(f64::NAN);
        assert!((n - 3.0).abs() < 1e-9);
    }
}

#[test]
fn test_logarithm_symbolic_antilog_stays_symbolic() {
    let result = ln(mul(x(), 1.0)).eval(&Bindings::new());
    assert_eq!(result, Ok(ln(x())));

    let result = log(2.0, x()).eval(&Bindings::new());
    assert_eq!(result, Ok(log(2.0, x())));
}

#[test]
fn test_logarithm_symbolic_base_fails() {
    let result = log(x(), 8.0).eval(&Bindings::new());
    assert!(matches!(
        result,
        Err(ExpressionError::UnsupportedOperation(_))
    ));
}

#[test]
fn test_sum_diff_linearity() {
    let expr = add(x(), x());
    let result = expr.diff("x");
    assert!(result.is_ok());
    if let Ok(d) = result {
        assert!(d.equals_scalar(2.0));
    }
}

#[test]
fn test_product_diff_constant_factor() {
    // d/dx (2 * x) folds all the way down to 2
    let expr = mul(2.0, x());
    let result = expr.diff("x");
    assert!(result.is_ok());
    if let Ok(d) = result {
        assert!(d.equals_scalar(2.0));
    }
}

#[test]
fn test_product_rule_at_point() {
    // d/dx (x * ln(x)) = ln(x) + 1, which is 2 at x = e
    let expr = mul(x(), ln(x()));
    let derivative = expr.diff("x");
    assert!(derivative.is_ok());
    if let Ok(d) = derivative {
        let result = d.eval(&bind("x", E));
        assert!(result.is_ok());
        if let Ok(value) = result {
            let n = value.as_number().unwrap_or(f64::NAN);
            assert!((n - 2.0).abs() < 1e-9);
        }
    }
}

#[test]
fn test_quotient_rule_at_point() {
    // d/dx (x / (x + 1)) = 1 / (x + 1)^2, which is 0.25 at x = 1
    let expr = div(x(), add(x(), 1.0));
    let derivative = expr.diff("x");
    assert!(derivative.is_ok());
    if let Ok(d) = derivative {
        let result = d.eval(&bind("x", 1.0));
        assert!(result.is_ok());
        if let Ok(value) = result {
            let n = value.as_number().unwrap_or(f64::NAN);
            assert!((n - 0.25).abs() < 1e-9);
        }
    }
}

#[test]
fn test_power_diff_constant_exponent_at_point() {
    // d/dx x^2 evaluated at x = 3 is 6
    let expr = pow(x(), 2.0);
    let derivative = expr.diff("x");
    assert!(derivative.is_ok());
    if let Ok(d) = derivative {
        let result = d.eval(&bind("x", 3.0));
        assert!(result.is_ok());
        if let Ok(value) = result {
            let n = value.as_number().unwrap_or(f64::NAN);
            assert!((n - 6.0).abs() < 1e-9);
        }
    }
}

#[test]
fn test_power_diff_variable_exponent_at_point() {
    // d/dx x^x = x^x * (ln(x) + 1), which is 1 at x = 1
    let expr = pow(x(), x());
    let derivative = expr.diff("x");
    assert!(derivative.is_ok());
    if let Ok(d) = derivative {
        let result = d.eval(&bind("x", 1.0));
        assert!(result.is_ok());
        if let Ok(value) = result {
            let n = value.as_number().unwrap_or(f64::NAN);
            assert!((n - 1.0).abs() < 1e-9);
        }
    }
}

#[test]
fn test_logarithm_diff_at_point() {
    // d/dx ln(x) = 1/x, which is 0.2 at x = 5
    let expr = log(E, x());
    let derivative = expr.diff("x");
    assert!(derivative.is_ok());
    if let Ok(d) = derivative {
        let result = d.eval(&bind("x", 5.0));
        assert!(result.is_ok());
        if let Ok(value) = result {
            let n = value.as_number().unwrap_or(f64::NAN);
            assert!((n - 0.2).abs() < 1e-9);
        }
    }
}

#[test]
fn test_logarithm_diff_symbolic_base_fails() {
    let expr = log(x(), x());
    let result = expr.diff("x");
    assert!(matches!(
        result,
        Err(ExpressionError::UnsupportedOperation(_))
    ));
}

#[test]
fn test_simplify_collapses_derivative_noise() {
    // 1*dx + 0*dy shaped tree collapses to 1
    let expr = add(mul(1.0, 1.0), mul(0.0, x()));
    let result = expr.simplify();
    assert_eq!(result, Ok(Expression::Constant(1.0)));
}

#[test]
fn test_simplify_is_idempotent() {
    let expr = add(add(mul(x(), 1.0), 0.0), mul(2.0, 3.0));
    let once = expr.simplify();
    assert!(once.is_ok());
    if let Ok(simplified) = once {
        assert_eq!(simplified.simplify(), Ok(simplified.clone()));
    }
}

#[test]
fn test_display_left_associative_difference() {
    let expr = sub(sub(1.0, 2.0), 3.0);
    assert_eq!(expr.to_string(), "1 - 2 - 3");
}

#[test]
fn test_display_right_difference_parenthesized() {
    let expr = sub(1.0, sub(2.0, 3.0));
    assert_eq!(expr.to_string(), "1 - (2 - 3)");
}

#[test]
fn test_display_right_division_parenthesized() {
    let expr = div(x(), div(1.0, x()));
    assert_eq!(expr.to_string(), "x / (1 / x)");
}

#[test]
fn test_display_lower_precedence_child_parenthesized() {
    let expr = mul(add(x(), 1.0), 2.0);
    assert_eq!(expr.to_string(), "(x + 1) * 2");
}

#[test]
fn test_display_higher_precedence_child_bare() {
    let expr = add(mul(x(), 2.0), 1.0);
    assert_eq!(expr.to_string(), "x * 2 + 1");
}

#[test]
fn test_display_power_spaceless() {
    let expr = pow(x(), 2.0);
    assert_eq!(expr.to_string(), "x^2");
}

#[test]
fn test_display_power_parenthesizes_compound_base() {
    let expr = pow(add(x(), 1.0), 2.0);
    assert_eq!(expr.to_string(), "(x + 1)^2");
}

#[test]
fn test_display_logarithm_forms() {
    assert_eq!(ln(x()).to_string(), "ln(x)");
    assert_eq!(log(2.0, x()).to_string(), "log(2, x)");
}

#[test]
fn test_operator_sugar_builds_nodes() {
    let sum = 2.0 + x();
    assert_eq!(sum, add(2.0, x()));

    let quotient = x() / 2.0;
    assert_eq!(quotient, div(x(), 2.0));

    let power = x().pow(2);
    assert_eq!(power, pow(x(), 2.0));
}

#[test]
fn test_equals_scalar_only_matches_constants() {
    assert!(Expression::Constant(0.0).equals_scalar(0.0));
    assert!(!Expression::Constant(1.0).equals_scalar(0.0));
    assert!(!x().equals_scalar(0.0));
    assert!(!add(0.0, 0.0).equals_scalar(0.0));
}

#[test]
fn test_value_equality() {
    assert_eq!(Expression::Constant(2.0), Expression::Constant(2.0));
    assert_ne!(x(), Expression::variable("y"));
    assert_eq!(add(x(), 1.0), add(x(), 1.0));
    assert_ne!(add(x(), 1.0), sub(x(), 1.0));
}

#[test]
fn test_eval_error_propagates_from_subtree() {
    let expr = add(x(), div(1.0, 0.0));
    let result = expr.eval(&bind("x", 1.0));
    assert_eq!(result, Err(ExpressionError::DivisionByZero));
}
