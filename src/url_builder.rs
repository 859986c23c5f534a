//! Fluent construction of URLs out of a base url, path segments and query parameters.
//!
//! The builder takes care of slashes between segments and of url encoding, so
//! callers never have to glue raw strings together:
//!
//! ```
//! use url_builder::url_builder::url;
//!
//! let built = url("https://api.example.com/v1")
//!     .append(["users", "jane doe"])
//!     .query_param("limit", 50)
//!     .build();
//!
//! assert_eq!(built, "https://api.example.com/v1/users/jane+doe?limit=50");
//! ```

use crate::error::{Result, UrlBuilderError};

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};
use url::form_urlencoded;

/// Creates a builder that starts from `base`, taken verbatim.
#[must_use]
pub fn url(base: &str) -> UrlBuilder {
    UrlBuilder::new(base)
}

/// Creates a builder for `http://[host]:[port]`.
#[must_use]
pub fn url_host_port(host: &str, port: u16) -> UrlBuilder {
    UrlBuilder::from_host_port(host, port)
}

/// A single `name=value` query parameter.
///
/// Once added to a builder a parameter cannot change: the value is stored in its
/// final (possibly encoded) form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParam {
    name: String,
    value: String,
}

impl QueryParam {
    fn new(name: &str, value: String) -> Self {
        QueryParam {
            name: name.to_string(),
            value,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn into_pair(self) -> (String, String) {
        (self.name, self.value)
    }

    /// Parameters are immutable once stored.
    ///
    /// # Errors
    /// Always returns `UrlBuilderError::UnsupportedOperation`.
    pub fn set_value(&mut self, _value: &str) -> Result<String> {
        Err(UrlBuilderError::UnsupportedOperation(
            "entry is immutable".to_string(),
        ))
    }
}

/// Something that can be appended as a path segment. `None` is treated like a
/// blank segment and skipped.
pub trait Segment {
    fn as_segment(&self) -> Option<&str>;
}

impl Segment for str {
    fn as_segment(&self) -> Option<&str> {
        Some(self)
    }
}

impl Segment for String {
    fn as_segment(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: Segment + ?Sized> Segment for &T {
    fn as_segment(&self) -> Option<&str> {
        T::as_segment(self)
    }
}

impl<T: Segment> Segment for Option<T> {
    fn as_segment(&self) -> Option<&str> {
        self.as_ref().and_then(Segment::as_segment)
    }
}

/// A value accepted by [`UrlBuilder::query_param`].
///
/// Strings are taken as is, booleans and numbers are stringified. `None` and
/// empty strings produce no parameter at all.
pub trait QueryValue {
    fn into_query_value(self) -> Option<String>;
}

impl QueryValue for &str {
    fn into_query_value(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl QueryValue for String {
    fn into_query_value(self) -> Option<String> {
        Some(self)
    }
}

impl QueryValue for &String {
    fn into_query_value(self) -> Option<String> {
        Some(self.clone())
    }
}

impl<T: QueryValue> QueryValue for Option<T> {
    fn into_query_value(self) -> Option<String> {
        self.and_then(QueryValue::into_query_value)
    }
}

macro_rules! display_query_value {
    ($($ty:ty),*) => {
        $(
            impl QueryValue for $ty {
                fn into_query_value(self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

display_query_value!(bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// Floats use Rust `Display`: `1.0` renders as `1`, `1e20` without an exponent.
display_query_value!(f32, f64);

/// A segment is blank when every char is whitespace. No-break spaces and NEL
/// count as content, the information separators U+001C..U+001F as whitespace.
fn is_blank(segment: &str) -> bool {
    segment.chars().all(|c| match c {
        '\u{001C}'..='\u{001F}' => true,
        '\u{0085}' | '\u{00A0}' | '\u{2007}' | '\u{202F}' => false,
        _ => c.is_whitespace(),
    })
}

/// Url encodes a single component, `application/x-www-form-urlencoded` style.
fn encode(component: &str) -> String {
    form_urlencoded::byte_serialize(component.as_bytes()).collect()
}

#[derive(Debug, Clone)]
pub struct UrlBuilder {
    base: String,
    // insertion order is kept, duplicate names are allowed
    query_params: Vec<QueryParam>,
}

impl UrlBuilder {
    pub fn new(base: &str) -> Self {
        UrlBuilder {
            base: base.to_string(),
            query_params: Vec::new(),
        }
    }

    pub fn from_host_port(host: &str, port: u16) -> Self {
        UrlBuilder::new(&format!("http://{host}:{port}"))
    }

    /// The base url with every segment appended so far.
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn query_params(&self) -> &[QueryParam] {
        &self.query_params
    }

    /// Appends one or more url encoded segments, separated by slashes.
    ///
    /// Segments are encoded individually, so don't include the slashes yourself.
    #[must_use]
    pub fn append<I>(self, segments: I) -> Self
    where
        I: IntoIterator,
        I::Item: Segment,
    {
        self.append_with(true, segments)
    }

    /// Appends one or more segments, separated by slashes.
    ///
    /// # Arguments
    /// * `encode_segments` - If true, each segment is url encoded.
    /// * `segments` - The segments. Blank ones are skipped.
    #[must_use]
    pub fn append_with<I>(mut self, encode_segments: bool, segments: I) -> Self
    where
        I: IntoIterator,
        I::Item: Segment,
    {
        for segment in segments {
            let Some(part) = segment.as_segment().filter(|s| !is_blank(s)) else {
                trace!(base = %self.base, "skipping blank segment");
                continue;
            };

            if !self.base.ends_with('/') && !part.starts_with('/') {
                self.base.push('/');
            }

            if encode_segments {
                self.base.push_str(&encode(part));
            } else {
                self.base.push_str(part);
            }
        }
        self
    }

    /// Adds a url encoded query parameter.
    #[must_use]
    pub fn query_param(self, name: &str, value: impl QueryValue) -> Self {
        self.query_param_with(name, value, true)
    }

    /// Adds a query parameter. The name is never encoded.
    ///
    /// # Arguments
    /// * `name` - Parameter name.
    /// * `value` - Parameter value. `None` or an empty string leaves the builder untouched.
    /// * `encode_value` - If true, the value is url encoded.
    #[must_use]
    pub fn query_param_with(
        mut self,
        name: &str,
        value: impl QueryValue,
        encode_value: bool,
    ) -> Self {
        match value.into_query_value() {
            Some(value) if !value.is_empty() => {
                let value = if encode_value { encode(&value) } else { value };
                self.query_params.push(QueryParam::new(name, value));
            }
            _ => trace!(name, "skipping query parameter without a value"),
        }
        self
    }

    /// Adds several url encoded query parameters, in iteration order.
    #[must_use]
    pub fn add_args<I, K, V>(self, args: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: QueryValue,
    {
        args.into_iter()
            .fold(self, |builder, (name, value)| builder.query_param(name.as_ref(), value))
    }

    /// Returns the url as a String. `to_string` gives the same result.
    pub fn build(&self) -> String {
        if self.query_params.is_empty() {
            return self.base.clone();
        }

        let query_string: Vec<String> = self
            .query_params
            .iter()
            .map(|p| format!("{}={}", p.name, p.value))
            .collect();

        format!("{}?{}", self.base, query_string.join("&"))
    }

    /// Builds and parses the url.
    ///
    /// # Errors
    /// Returns `UrlBuilderError::InvalidArgument` wrapping the parse error if the
    /// result is not a valid URL.
    pub fn build_url(&self) -> Result<url::Url> {
        let built = self.build();
        url::Url::parse(&built).map_err(|e| {
            debug!(url = %built, error = %e, "built url does not parse");
            UrlBuilderError::InvalidArgument(e)
        })
    }
}

impl fmt::Display for UrlBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}
