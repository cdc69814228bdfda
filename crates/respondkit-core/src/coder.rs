//! Resolving error values to service codes
//!
//! The responder never inspects errors itself. It asks a [`CoderLookup`] for
//! the code and description to report, and a lookup must answer for every
//! error it is given, falling back to [`Coder::unknown`] when nothing better
//! is known.

use std::borrow::Cow;
use std::marker::PhantomData;

/// Code reported for errors no registry entry matches
pub const UNKNOWN_CODE: u32 = 1;

/// Description reported for errors no registry entry matches
pub const UNKNOWN_DESCRIPTION: &str = "An internal server error occurred";

/// Structured code for an error: service code plus optional description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coder {
    code: u32,
    description: Cow<'static, str>,
}

impl Coder {
    /// Create a coder; an empty description means "use the error's own text"
    pub fn new(code: u32, description: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code,
            description: description.into(),
        }
    }

    /// Coder without a description
    pub const fn bare(code: u32) -> Self {
        Self {
            code,
            description: Cow::Borrowed(""),
        }
    }

    /// Fallback for unrecognized errors
    pub const fn unknown() -> Self {
        Self {
            code: UNKNOWN_CODE,
            description: Cow::Borrowed(UNKNOWN_DESCRIPTION),
        }
    }

    pub fn code(&self) -> u32 {
        self.code
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Message for the envelope: the description, or `fallback` when empty
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.description.is_empty() {
            fallback
        } else {
            &self.description
        }
    }
}

impl Default for Coder {
    fn default() -> Self {
        Self::unknown()
    }
}

/// Error types that know their own [`Coder`]
pub trait Coded {
    fn coder(&self) -> Coder;
}

/// Capability mapping an error value to a [`Coder`]
///
/// Implementations must not fail: unrecognized errors resolve to some
/// default coder.
pub trait CoderLookup<E: ?Sized>: Send + Sync {
    fn lookup(&self, err: &E) -> Coder;
}

impl<E, F> CoderLookup<E> for F
where
    E: ?Sized,
    F: Fn(&E) -> Coder + Send + Sync,
{
    fn lookup(&self, err: &E) -> Coder {
        self(err)
    }
}

/// Lookup that asks the error for its own coder via [`Coded`]
pub struct CodedLookup<E: ?Sized> {
    _marker: PhantomData<fn(&E)>,
}

impl<E: ?Sized> CodedLookup<E> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<E: ?Sized> Default for CodedLookup<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ?Sized> Clone for CodedLookup<E> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<E: ?Sized> std::fmt::Debug for CodedLookup<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodedLookup").finish()
    }
}

impl<E: Coded + ?Sized> CoderLookup<E> for CodedLookup<E> {
    fn lookup(&self, err: &E) -> Coder {
        err.coder()
    }
}
