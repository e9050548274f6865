//! Boundaries: the catch side of a short-circuit.
//!
//! A boundary runs a closure under [`std::panic::catch_unwind`] and inspects
//! whatever unwinds out of it. Only a `ShortCircuit` payload is consumed;
//! every other payload is resumed exactly as it was caught, so a boundary is
//! invisible to panics it does not own.

use crate::Error;
use std::any::Any;
use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};

/// The unwind payload carried from a raise primitive to the nearest boundary.
///
/// The type is private to this crate, which makes a successful downcast of a
/// payload to `ShortCircuit` proof that the payload was produced by
/// [`crate::raise`].
pub(crate) struct ShortCircuit(Error);

impl ShortCircuit {
    pub(crate) fn new(error: Error) -> ShortCircuit {
        ShortCircuit(error)
    }

    fn into_error(self) -> Error {
        self.0
    }
}

std::thread_local! {
    // Number of boundaries currently on this thread's stack.
    static DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Marks this thread as being inside a boundary for as long as it lives.
///
/// The count is decremented in `Drop`, which also runs while an unrelated
/// panic unwinds through the boundary.
struct Enter;

impl Enter {
    fn new() -> Enter {
        DEPTH.with(|depth| depth.set(depth.get() + 1));
        Enter
    }
}

impl Drop for Enter {
    fn drop(&mut self) {
        DEPTH.with(|depth| {
            debug_assert!(depth.get() > 0);
            depth.set(depth.get() - 1)
        });
    }
}

/// Returns whether the current thread is executing inside at least one
/// boundary.
///
/// Raise primitives that fire while this is `false` panic with a regular,
/// descriptive panic instead of unwinding with a payload nobody will catch.
pub fn in_boundary() -> bool {
    DEPTH.with(|depth| depth.get() > 0)
}

/// Runs `f` inside a boundary.
///
/// If `f` returns, its result is returned as-is. If a raise primitive fires
/// anywhere below `f` on this thread (and no nearer boundary intercepts it),
/// the carried error is converted with `E::from` and returned as `Err`.
///
/// Any other unwind out of `f` is resumed unchanged with
/// [`std::panic::resume_unwind`].
///
/// State that `f` mutated through captured references before the
/// short-circuit stays mutated; nothing is rolled back.
///
/// # Example
///
/// ```
/// use shortcircuit::{Result, catch, must};
///
/// fn double(input: &str) -> Result<i64> {
///     catch(|| Ok(must(input.parse::<i64>()) * 2))
/// }
///
/// assert_eq!(double("21").unwrap(), 42);
/// assert_eq!(
///     double("x").unwrap_err().to_string(),
///     "invalid digit found in string",
/// );
/// ```
pub fn catch<T, E>(f: impl FnOnce() -> Result<T, E>) -> Result<T, E>
where
    E: From<Error>,
{
    let result = {
        let _enter = Enter::new();
        panic::catch_unwind(AssertUnwindSafe(f))
    };
    match result {
        Ok(result) => result,
        Err(payload) => Err(E::from(take_signal(payload))),
    }
}

/// Runs `f` inside a boundary that reports failure through `slot`.
///
/// This is the output-slot flavor of [`catch`] for code whose outputs have a
/// natural zero value. On a short-circuit the carried error is written to
/// `slot` and `T::default()` is returned. When `f` returns normally, `slot` is
/// left exactly as it was.
///
/// ```
/// use shortcircuit::{Error, check, pass_to};
///
/// let mut err: Option<Error> = None;
/// let (a, b): (u32, String) = pass_to(&mut err, || {
///     check(Some(std::fmt::Error));
///     (1, "unreachable".to_string())
/// });
/// assert_eq!((a, b.as_str()), (0, ""));
/// assert_eq!(err.unwrap().to_string(), std::fmt::Error.to_string());
/// ```
pub fn pass_to<T>(slot: &mut Option<Error>, f: impl FnOnce() -> T) -> T
where
    T: Default,
{
    match catch(|| Ok::<T, Error>(f())) {
        Ok(value) => value,
        Err(error) => {
            *slot = Some(error);
            T::default()
        }
    }
}

/// Extracts the error from a caught payload, resuming any payload that is not
/// a short-circuit.
fn take_signal(payload: Box<dyn Any + Send>) -> Error {
    match payload.downcast::<ShortCircuit>() {
        Ok(signal) => {
            let error = signal.into_error();
            log::trace!("boundary caught short-circuit: {error}");
            error
        }
        Err(payload) => {
            log::trace!("unrelated unwind passing through boundary");
            panic::resume_unwind(payload)
        }
    }
}
