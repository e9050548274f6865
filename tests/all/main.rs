#[cfg(feature = "macros")]
mod attribute;

use shortcircuit::{Error, pass_to};

/// The error every helper below fails with.
#[derive(Debug, thiserror::Error)]
#[error("failed")]
pub(crate) struct TestError;

pub(crate) fn init() {
    let _ = env_logger::try_init();
}

pub(crate) fn fail_unless(ok: bool) -> Option<TestError> {
    if ok { None } else { Some(TestError) }
}

pub(crate) fn values1(ok: bool) -> (i32, Option<TestError>) {
    if ok { (1, None) } else { (0, fail_unless(false)) }
}

pub(crate) fn values2(ok: bool) -> (i32, i32, Option<TestError>) {
    if ok { (1, 1, None) } else { (0, 0, fail_unless(false)) }
}

pub(crate) fn values3(ok: bool) -> (i32, i32, i32, Option<TestError>) {
    if ok { (1, 1, 1, None) } else { (0, 0, 0, fail_unless(false)) }
}

pub(crate) fn values4(ok: bool) -> (i32, i32, i32, i32, Option<TestError>) {
    if ok {
        (1, 1, 1, 1, None)
    } else {
        (0, 0, 0, 0, fail_unless(false))
    }
}

pub(crate) fn values5(ok: bool) -> Result<(i32, i32, i32, i32, i32), TestError> {
    if ok { Ok((1, 1, 1, 1, 1)) } else { Err(TestError) }
}

/// Runs `f` through a slot-style boundary for both the passing and the
/// failing input and checks the outputs the way a caller would see them.
///
/// On success every output must be `1` and no error may be reported. On
/// failure every output must be zeroed and the error must read `expected`
/// while still being a `TestError` somewhere in its chain.
#[track_caller]
pub(crate) fn assert_outcome(expected: &str, f: impl Fn(bool) -> Vec<i32>) {
    init();

    let mut err: Option<Error> = None;
    let values = pass_to(&mut err, || f(true));
    assert!(!values.is_empty());
    assert!(values.iter().all(|v| *v == 1), "{values:?}");
    assert!(err.is_none(), "{err:?}");

    let values = pass_to(&mut err, || f(false));
    assert!(values.iter().all(|v| *v == 0), "{values:?}");
    let err = err.expect("failing input must report an error");
    assert!(
        err.chain().any(|e| e.is::<TestError>()),
        "expected a TestError in the chain: {err:?}"
    );
    assert_eq!(err.to_string(), expected);
}
