//! Value-passthrough wrappers.

use crate::raise::{annotate, raise};
use crate::{Error, Fallible};

/// Returns the success value(s) of `fallible`, short-circuiting with its error
/// unchanged otherwise.
///
/// Multiple values come back as a tuple in their original order, so the call
/// site can destructure them directly:
///
/// ```
/// use shortcircuit::{Result, catch, must};
///
/// fn parse_pair(s: &str) -> Result<(i32, i32)> {
///     catch(|| {
///         let (a, b) = must(s.split_once(',').ok_or(std::fmt::Error));
///         Ok((must(a.parse::<i32>()), must(b.parse::<i32>())))
///     })
/// }
///
/// assert_eq!(parse_pair("3,4").unwrap(), (3, 4));
/// assert!(parse_pair("3").is_err());
/// ```
#[inline]
#[track_caller]
pub fn must<F>(fallible: F) -> F::Output
where
    F: Fallible,
{
    match fallible.into_result() {
        Ok(output) => output,
        Err(error) => raise(error),
    }
}

/// Defers the decision on `fallible` until a failure message is supplied with
/// [`Attempt::or`].
///
/// This reads naturally when the message belongs after the call:
///
/// ```
/// use shortcircuit::{Result, attempt, catch};
/// use std::path::Path;
///
/// fn load(path: &Path) -> Result<String> {
///     catch(|| Ok(attempt(std::fs::read_to_string(path)).or("reading input")))
/// }
///
/// let err = load(Path::new("/definitely/not/here")).unwrap_err();
/// assert!(err.to_string().starts_with("reading input: "));
/// assert!(err.downcast_ref::<std::io::Error>().is_some());
/// ```
#[inline]
pub fn attempt<F>(fallible: F) -> Attempt<F::Output>
where
    F: Fallible,
{
    Attempt {
        result: Some(fallible.into_result()),
    }
}

/// The pending outcome of a fallible call, created by [`attempt`].
///
/// An `Attempt` is meant to be resolved in the same expression that created
/// it. Resolving consumes it, so it can only happen once.
#[must_use = "an `Attempt` does nothing until resolved with `or` or `or_else`"]
pub struct Attempt<T> {
    // `None` only once resolved.
    result: Option<Result<T, Error>>,
}

impl<T> Attempt<T> {
    /// Returns the success value(s), or short-circuits with the stored error
    /// annotated as `"<message>: <error>"`.
    ///
    /// An empty `message` leaves the error unchanged.
    #[track_caller]
    pub fn or(self, message: &str) -> T {
        self.resolve(|| message)
    }

    /// Like [`Attempt::or`], but only builds the message on failure.
    #[track_caller]
    pub fn or_else<M>(self, message: impl FnOnce() -> M) -> T
    where
        M: AsRef<str>,
    {
        self.resolve(message)
    }

    #[track_caller]
    fn resolve<M>(mut self, message: impl FnOnce() -> M) -> T
    where
        M: AsRef<str>,
    {
        let Some(result) = self.result.take() else {
            raise(Error::msg("attempt already resolved"))
        };
        match result {
            Ok(output) => output,
            Err(error) => raise(annotate(error, [message()])),
        }
    }
}

impl<T> Drop for Attempt<T> {
    fn drop(&mut self) {
        if let Some(Err(error)) = self.result.take() {
            log::warn!("discarding error from an unresolved attempt: {error}");
        }
    }
}
