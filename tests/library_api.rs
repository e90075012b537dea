use std::io::Cursor;

use desktop_calculator::services::StdinLineSource;
use desktop_calculator::{Calculator, EvalError, ReplSession, SessionSummary, evaluate};

#[test]
fn evaluate_handles_precedence_and_unary_operators() {
    assert_eq!(evaluate("-2 ** 2").unwrap(), Some(4));
    assert_eq!(evaluate("2 ** 3 ** 2").unwrap(), Some(512));
    assert_eq!(evaluate("7 / 2 + 7 % 2").unwrap(), Some(4));
    assert_eq!(evaluate("").unwrap(), None);
}

#[test]
fn calculator_reports_typed_errors() {
    let mut calc = Calculator::new();
    assert_eq!(calc.execute("(1 + 2"), Err(EvalError::UnbalancedParenthesis { position: 0 }));
    assert_eq!(calc.execute("q"), Err(EvalError::UndefinedSymbol("q".into())));
}

#[test]
fn session_over_buffered_reader() {
    let input = Cursor::new("n = 10\nn % 3\nm\n");
    let mut calc = Calculator::new();
    let mut session = ReplSession::new(StdinLineSource::new(input), Vec::new(), Vec::new());

    let summary = session.run(&mut calc).unwrap();
    let (_, out, err) = session.into_parts();

    assert_eq!(summary, SessionSummary { evaluated: 2, failed: 1 });
    assert_eq!(String::from_utf8(out).unwrap(), "10\n1\n");
    assert_eq!(String::from_utf8(err).unwrap(), "Error: m is not defined\n");
    assert_eq!(calc.symbols().collect::<Vec<_>>(), vec![("n", 10)]);
}
