//! Raise primitives: the throw side of a short-circuit.
//!
//! Everything that can fail funnels into [`raise`], and every annotated
//! failure goes through [`annotate`], so there is exactly one place where an
//! error is decided to be a failure and one place where its message is
//! wrapped.

use crate::boundary::{self, ShortCircuit};
use crate::{Error, Fallible};
use std::fmt;
use std::panic;

/// Transfers control to the nearest boundary, which returns `error` from its
/// function.
///
/// # Panics
///
/// Panics with a message naming `error` if the current thread is not inside
/// a boundary. That is a bug in the caller: there would be nothing to hand
/// the error to.
#[cold]
#[track_caller]
pub fn raise(error: impl Into<Error>) -> ! {
    let error = error.into();
    if !boundary::in_boundary() {
        panic!("short-circuit raised outside of any boundary: {error:?}");
    }
    log::trace!("short-circuiting: {error}");
    panic::resume_unwind(Box::new(ShortCircuit::new(error)))
}

/// Short-circuits if `fallible` holds an error.
///
/// The error reaches the boundary with its message and type untouched. Use
/// [`check_with`] or the [`check!`](crate::check!) macro to prefix it with
/// context.
///
/// ```
/// use shortcircuit::{Result, catch, check};
/// use std::fmt::Write;
///
/// fn render(items: &[u32]) -> Result<String> {
///     catch(|| {
///         let mut out = String::new();
///         for item in items {
///             check(write!(out, "{item},"));
///         }
///         Ok(out)
///     })
/// }
///
/// assert_eq!(render(&[1, 2]).unwrap(), "1,2,");
/// ```
#[inline]
#[track_caller]
pub fn check<F>(fallible: F)
where
    F: Fallible<Output = ()>,
{
    if let Err(error) = fallible.into_result() {
        raise(error)
    }
}

/// Short-circuits if `fallible` holds an error, prefixing its message with
/// `annotations`.
///
/// The annotations are joined with single spaces. If the joined string is
/// non-empty, the raised error reads `"<joined>: <original>"` and keeps the
/// original as its cause, so it can still be downcast to the original type.
/// Otherwise the original error is raised unchanged.
///
/// The annotations are only looked at on failure.
#[inline]
#[track_caller]
pub fn check_with<F, I>(fallible: F, annotations: I)
where
    F: Fallible<Output = ()>,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    if let Err(error) = fallible.into_result() {
        raise(annotate(error, annotations))
    }
}

/// Short-circuits with `message` as the error if `condition` is false.
///
/// The raised error's message is exactly `message`.
#[inline]
#[track_caller]
pub fn ensure<M>(condition: bool, message: M)
where
    M: fmt::Display + fmt::Debug + Send + Sync + 'static,
{
    if !condition {
        raise(Error::msg(message))
    }
}

/// Wraps `error` in the space-joined `annotations`, if there are any.
pub(crate) fn annotate<I>(error: Error, annotations: I) -> Error
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut prefix = String::new();
    for (i, annotation) in annotations.into_iter().enumerate() {
        if i > 0 {
            prefix.push(' ');
        }
        prefix.push_str(annotation.as_ref());
    }
    if prefix.is_empty() {
        return error;
    }
    let message = format!("{prefix}: {error}");
    error.context(message)
}
