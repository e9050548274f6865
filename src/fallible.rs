use crate::Error;

/// A value that is either a set of success values or an error.
///
/// This is what the raise primitives accept. It is implemented for:
///
/// * `Result<T, E>`, producing `T` (which may itself be a tuple),
/// * `Option<E>`, a bare error slot producing `()`,
/// * `(A1, Option<E>)`, producing `A1`,
/// * `(A1, ..., An, Option<E>)` for `n` up to 8, producing `(A1, ..., An)`.
///
/// The tuple forms match APIs that hand back all of their outputs together
/// with an optional error. In every case `E` must convert into [`Error`].
pub trait Fallible {
    /// The success value(s).
    type Output;

    /// Splits `self` into its success value(s) or its error.
    fn into_result(self) -> Result<Self::Output, Error>;
}

impl<T, E> Fallible for Result<T, E>
where
    E: Into<Error>,
{
    type Output = T;

    #[inline]
    fn into_result(self) -> Result<T, Error> {
        self.map_err(Into::into)
    }
}

impl<E> Fallible for Option<E>
where
    E: Into<Error>,
{
    type Output = ();

    #[inline]
    fn into_result(self) -> Result<(), Error> {
        match self {
            Some(error) => Err(error.into()),
            None => Ok(()),
        }
    }
}

impl<A1, E> Fallible for (A1, Option<E>)
where
    E: Into<Error>,
{
    type Output = A1;

    #[inline]
    fn into_result(self) -> Result<A1, Error> {
        match self {
            (_, Some(error)) => Err(error.into()),
            (a1, None) => Ok(a1),
        }
    }
}

macro_rules! for_each_tuple_arity {
    ($mac:ident) => {
        $mac!(A1 A2);
        $mac!(A1 A2 A3);
        $mac!(A1 A2 A3 A4);
        $mac!(A1 A2 A3 A4 A5);
        $mac!(A1 A2 A3 A4 A5 A6);
        $mac!(A1 A2 A3 A4 A5 A6 A7);
        $mac!(A1 A2 A3 A4 A5 A6 A7 A8);
    };
}

macro_rules! impl_fallible_tuple {
    ($($t:ident)*) => {
        impl<$($t,)* E> Fallible for ($($t,)* Option<E>)
        where
            E: Into<Error>,
        {
            type Output = ($($t,)*);

            #[inline]
            #[allow(non_snake_case, reason = "macro-generated bindings reuse the type names")]
            fn into_result(self) -> Result<Self::Output, Error> {
                let ($($t,)* error) = self;
                match error {
                    Some(error) => Err(error.into()),
                    None => Ok(($($t,)*)),
                }
            }
        }
    };
}

for_each_tuple_arity!(impl_fallible_tuple);
