//! Run-scoped shared context for passing values between pipeline steps.
//!
//! A run executes steps in sequence; a later step often needs a value an
//! earlier step produced (e.g. the URL of a created pull request) without the
//! two being directly coupled. [`RunContext`] is a typed key-value store that
//! lives for exactly one run: created before the first step, dropped after
//! the last.
//!
//! Keys are [`ContextKey`]s, which carry the value type statically so reads
//! and writes cannot disagree on type. Each key is written at most once per
//! run.

use std::any::Any;
use std::collections::HashMap;
use std::marker::PhantomData;

/// A typed key into a [`RunContext`].
///
/// Declare keys as constants so every step refers to the same well-known name:
///
/// ```
/// use openpr::context::ContextKey;
///
/// pub const PULL_REQUEST_HTML_URL: ContextKey<String> =
///     ContextKey::new("pull_request_html_url");
/// ```
pub struct ContextKey<T> {
    name: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> ContextKey<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    /// The key's well-known name
    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// The URL of the pull request created during this run.
pub const PULL_REQUEST_HTML_URL: ContextKey<String> =
    ContextKey::new("pull_request_html_url");

/// Key-value store scoped to a single run.
#[derive(Default)]
pub struct RunContext {
    values: HashMap<&'static str, Box<dyn Any + Send>>,
}

impl RunContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value under `key`.
    ///
    /// Each key has a single writer and is written at most once per run; a
    /// repeat insert indicates a wiring bug in the pipeline.
    pub fn insert<T: Send + 'static>(&mut self, key: &ContextKey<T>, value: T) {
        let previous = self.values.insert(key.name, Box::new(value));
        debug_assert!(
            previous.is_none(),
            "context key '{}' written twice in one run",
            key.name
        );
    }

    /// Read the value stored under `key`, if any step has written it.
    pub fn get<T: 'static>(&self, key: &ContextKey<T>) -> Option<&T> {
        self.values
            .get(key.name)
            .and_then(|boxed| boxed.downcast_ref::<T>())
    }

    /// Whether any step has written a value under `key`.
    pub fn contains<T>(&self, key: &ContextKey<T>) -> bool {
        self.values.contains_key(key.name)
    }
}
