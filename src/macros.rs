//! Macro definitions and the private runtime functions used in their generated
//! code.

// Items used by macro-generated code.
pub use anyhow::anyhow;
pub use core::result::Result::Err;
pub use std::string::ToString;

use crate::raise::{annotate, raise};
use crate::{Error, Fallible};

/// Short-circuits if the given value holds an error, optionally prefixing the
/// error with annotations.
///
/// `check!(x)` is [`check(x)`](crate::check). With annotations, each one may
/// be any [`Display`](core::fmt::Display) value; they are formatted and joined
/// with spaces only if `x` holds an error, exactly as
/// [`check_with`](crate::check_with) does.
///
/// ```
/// use shortcircuit::{Result, catch, check};
///
/// fn write_all(path: &std::path::Path, attempt: u32) -> Result<()> {
///     catch(|| {
///         check!(std::fs::write(path, b"data"), "write", path.display(), "attempt", attempt);
///         Ok(())
///     })
/// }
///
/// let err = write_all("/no/such/dir/file".as_ref(), 2).unwrap_err();
/// assert!(err.to_string().starts_with("write /no/such/dir/file attempt 2: "));
/// ```
#[macro_export]
macro_rules! check {
    ( $fallible:expr $(,)? ) => {
        $crate::check($fallible)
    };

    ( $fallible:expr , $( $annotation:expr ),+ $(,)? ) => {
        if let $crate::macros::Err(error) = $crate::macros::into_unit_result($fallible) {
            $crate::macros::raise_annotated(
                error,
                &[ $( $crate::macros::ToString::to_string(&$annotation) ),+ ],
            )
        }
    };
}

/// Short-circuits if a condition is false.
///
/// Like `anyhow::ensure!`, but raises to the nearest boundary instead of
/// returning. The message accepts format arguments and is only built on
/// failure. Without a message, the error reads
/// ``condition failed: `<condition>` ``.
///
/// ```
/// use shortcircuit::{Result, catch, ensure};
///
/// fn checked_div(a: u32, b: u32) -> Result<u32> {
///     catch(|| {
///         ensure!(b != 0, "cannot divide {a} by zero");
///         Ok(a / b)
///     })
/// }
///
/// assert_eq!(checked_div(6, 3).unwrap(), 2);
/// assert_eq!(checked_div(6, 0).unwrap_err().to_string(), "cannot divide 6 by zero");
/// ```
#[macro_export]
macro_rules! ensure {
    ( $cond:expr $(,)? ) => {
        if !$cond {
            $crate::raise($crate::macros::anyhow!(concat!(
                "condition failed: `",
                stringify!($cond),
                "`"
            )))
        }
    };

    ( $cond:expr , $( $args:tt )+ ) => {
        if !$cond {
            $crate::raise($crate::macros::anyhow!($( $args )+))
        }
    };
}

#[doc(hidden)]
#[inline]
pub fn into_unit_result<F>(fallible: F) -> Result<(), Error>
where
    F: Fallible<Output = ()>,
{
    fallible.into_result()
}

#[doc(hidden)]
#[cold]
#[track_caller]
pub fn raise_annotated(error: Error, annotations: &[String]) -> ! {
    raise(annotate(error, annotations))
}
