//! Cache Key Module
//!
//! Builds deterministic, human-readable cache keys from a method name and
//! its logical call arguments: `Service.method(arg1, kw1=v1, kw2=v2)`.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

// == Key Argument ==
/// One rendered call argument.
///
/// Strings are double-quoted; everything else uses its natural textual form.
/// Construction never fails: values without a JSON representation fall back
/// to an opaque placeholder, so key building cannot raise.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyArg {
    /// A string argument, rendered quoted
    Str(String),
    /// Any other argument, rendered verbatim
    Raw(String),
}

impl KeyArg {
    /// Renders any serializable value as a key argument.
    ///
    /// JSON strings are quoted, scalars rendered naturally, and composite
    /// values (lists, objects) rendered as compact JSON.
    pub fn json<T: Serialize>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(Value::String(s)) => KeyArg::Str(s),
            Ok(v) => KeyArg::Raw(v.to_string()),
            Err(_) => KeyArg::Raw("<opaque>".to_string()),
        }
    }
}

impl fmt::Display for KeyArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyArg::Str(s) => write!(f, "\"{}\"", s),
            KeyArg::Raw(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for KeyArg {
    fn from(v: &str) -> Self {
        KeyArg::Str(v.to_string())
    }
}

impl From<String> for KeyArg {
    fn from(v: String) -> Self {
        KeyArg::Str(v)
    }
}

impl From<bool> for KeyArg {
    fn from(v: bool) -> Self {
        KeyArg::Raw(v.to_string())
    }
}

macro_rules! keyarg_from_numeric {
    ($($ty:ty),*) => {
        $(impl From<$ty> for KeyArg {
            fn from(v: $ty) -> Self {
                KeyArg::Raw(v.to_string())
            }
        })*
    };
}

keyarg_from_numeric!(i32, i64, u32, u64, usize, f64);

// == Cache Key Builder ==
/// Builder for a cache key.
///
/// Positional arguments keep call order (order-significant); keyword
/// arguments are sorted by name at build time (order-insignificant). The
/// method receiver and the `force_refresh` flag are never part of a key:
/// call sites only ever pass logical arguments.
#[derive(Debug, Clone)]
pub struct CacheKey {
    method: String,
    args: Vec<KeyArg>,
    kwargs: Vec<(String, KeyArg)>,
}

impl CacheKey {
    /// Starts a key for the given method.
    ///
    /// The name is shortened to its last two dot-separated segments, so
    /// `ohdsi_webapi.services.vocabulary.VocabularyService.get_concept`
    /// becomes `VocabularyService.get_concept`. Rust `::` paths are
    /// normalized to dots first.
    pub fn for_method(method: impl Into<String>) -> Self {
        Self {
            method: shorten_method_name(&method.into()),
            args: Vec::new(),
            kwargs: Vec::new(),
        }
    }

    /// Appends a positional argument.
    pub fn arg(mut self, value: impl Into<KeyArg>) -> Self {
        self.args.push(value.into());
        self
    }

    /// Appends a keyword argument.
    pub fn kwarg(mut self, name: &str, value: impl Into<KeyArg>) -> Self {
        self.kwargs.push((name.to_string(), value.into()));
        self
    }

    /// Appends a keyword argument only when a value is present.
    pub fn kwarg_opt(self, name: &str, value: Option<impl Into<KeyArg>>) -> Self {
        match value {
            Some(v) => self.kwarg(name, v),
            None => self,
        }
    }

    /// Renders the final key string.
    pub fn build(mut self) -> String {
        self.kwargs.sort_by(|(a, _), (b, _)| a.cmp(b));

        let mut parts: Vec<String> = self.args.iter().map(|a| a.to_string()).collect();
        parts.extend(
            self.kwargs
                .iter()
                .map(|(name, value)| format!("{}={}", name, value)),
        );

        format!("{}({})", self.method, parts.join(", "))
    }
}

// == Free Function ==
/// Builds a cache key from pre-rendered arguments.
///
/// Exposed standalone for diagnostics and tests; service methods normally go
/// through the [`CacheKey`] builder.
pub fn get_cache_key(method_name: &str, args: &[KeyArg], kwargs: &[(&str, KeyArg)]) -> String {
    let mut key = CacheKey::for_method(method_name);
    for arg in args {
        key = key.arg(arg.clone());
    }
    for (name, value) in kwargs {
        key = key.kwarg(name, value.clone());
    }
    key.build()
}

/// Keeps only the last two dot-separated path segments of a method name.
fn shorten_method_name(name: &str) -> String {
    let normalized = name.replace("::", ".");
    let segments: Vec<&str> = normalized.split('.').collect();
    if segments.len() <= 2 {
        normalized
    } else {
        segments[segments.len() - 2..].join(".")
    }
}
