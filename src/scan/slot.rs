//! Typed scan destinations.

use std::any::{Any, type_name};

use crate::error::ScanError;

/// Integer types a digit token can be stored into.
pub trait ScanInteger {
    /// Parse `digits` and store the result.
    fn assign_digits(&mut self, digits: &str) -> Result<(), ScanError>;
}

/// A writable destination for one token.
///
/// Build slots with `From` (`Slot::from(&mut n)`), the [`slots!`] macro, or
/// [`Slot::dynamic`] when the type is only known at run time.
///
/// [`slots!`]: crate::slots
pub enum Slot<'a> {
    /// Receives the next digit token
    Integer {
        type_name: &'static str,
        target: &'a mut dyn ScanInteger,
    },
    /// Receives the next alphanumeric token
    Text(&'a mut String),
    /// Resolved against the supported types when scanned
    Dynamic {
        type_name: &'static str,
        target: &'a mut dyn Any,
    },
    /// A declared destination with no writable location behind it
    Unbound { type_name: &'static str },
}

impl<'a> Slot<'a> {
    /// Wrap any value; unsupported types fail with
    /// [`ScanError::UnsupportedType`] when scanned.
    pub fn dynamic<T: Any>(target: &'a mut T) -> Self {
        Slot::Dynamic {
            type_name: type_name::<T>(),
            target,
        }
    }

    /// A destination of type `T` that cannot be written through.
    /// Scanning it fails with [`ScanError::InvalidDestination`].
    pub fn unbound<T: ?Sized>() -> Self {
        Slot::Unbound {
            type_name: type_name::<T>(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Slot::Integer { type_name, .. }
            | Slot::Dynamic { type_name, .. }
            | Slot::Unbound { type_name } => *type_name,
            Slot::Text(_) => "String",
        }
    }
}

impl std::fmt::Debug for Slot<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Slot").field(&self.type_name()).finish()
    }
}

impl<'a> From<&'a mut String> for Slot<'a> {
    fn from(target: &'a mut String) -> Self {
        Slot::Text(target)
    }
}

macro_rules! scan_integers {
    ($($t:ty),* $(,)?) => {
        $(
            impl ScanInteger for $t {
                fn assign_digits(&mut self, digits: &str) -> Result<(), ScanError> {
                    *self = digits.parse().map_err(|_| ScanError::MalformedInteger {
                        token: digits.to_string(),
                    })?;
                    Ok(())
                }
            }

            impl<'a> From<&'a mut $t> for Slot<'a> {
                fn from(target: &'a mut $t) -> Self {
                    Slot::Integer {
                        type_name: stringify!($t),
                        target,
                    }
                }
            }
        )*

        /// Resolve a run-time typed destination to an integer target.
        pub(crate) fn dynamic_integer(target: &mut dyn Any) -> Option<&mut dyn ScanInteger> {
            $(
                if target.is::<$t>() {
                    return target
                        .downcast_mut::<$t>()
                        .map(|v| v as &mut dyn ScanInteger);
                }
            )*
            None
        }
    };
}

scan_integers!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Build a `[Slot; N]` from mutable references.
///
/// ```
/// let mut n = 0i64;
/// let mut word = String::new();
/// let mut src = textio::PushbackReader::new(&b"7 up"[..]);
/// textio::scan(&mut src, &mut textio::slots![&mut n, &mut word]).unwrap();
/// assert_eq!((n, word.as_str()), (7, "up"));
/// ```
#[macro_export]
macro_rules! slots {
    ($($dest:expr),* $(,)?) => {
        [$($crate::Slot::from($dest)),*]
    };
}
