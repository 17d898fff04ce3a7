use std::collections::HashSet;
use std::fmt::Display;
use std::sync::LazyLock;

use indexmap::IndexMap;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::Regex;
use tracing::warn;

use crate::client::ApiClientError;

/// Regular expression for matching path parameters in the format `{param_name}`.
static RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(?<name>\w+)}").expect("a valid regex"));

/// Characters escaped in a path segment: everything but RFC 3986 unreserved characters.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

fn replace_path_param(path: &str, param_name: &str, value: &str) -> String {
    let pattern = ["{", param_name, "}"].concat();
    path.replace(&pattern, value)
}

fn encode_path_param_value(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

/// A parameterized HTTP path.
///
/// `CallPath` holds a path template with `{name}` placeholders and the values to substitute.
/// Values are percent-encoded as a single path segment, so an identifier containing `/`
/// can never escape its segment.
///
/// # Examples
///
/// ```rust
/// use ocirest_core::CallPath;
///
/// let path = CallPath::from("/20160918/users/{userId}/apiKeys/{fingerprint}")
///     .add_param("userId", "ocid1.user.oc1..aaaa")
///     .add_param("fingerprint", "d4:1d:8c:d9");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, derive_more::Display)]
#[display("{path}")]
pub struct CallPath {
    /// The path template with parameter placeholders
    pub(in crate::client) path: String,
    /// Parameter values indexed by parameter name, in declaration order
    args: IndexMap<String, String>,
}

impl CallPath {
    /// Adds a path parameter with the given name and value.
    pub fn add_param(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.args.insert(name.into(), value.to_string());
        self
    }

    /// Returns the path template.
    pub fn template(&self) -> &str {
        &self.path
    }
}

impl From<&str> for CallPath {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<String> for CallPath {
    fn from(value: String) -> Self {
        Self {
            path: value,
            args: IndexMap::default(),
        }
    }
}

#[derive(Debug)]
pub(in crate::client) struct PathResolved {
    pub(in crate::client) path: String,
}

impl TryFrom<CallPath> for PathResolved {
    type Error = ApiClientError;

    fn try_from(value: CallPath) -> Result<Self, Self::Error> {
        let CallPath { mut path, args } = value;

        let mut names: HashSet<String> = RE
            .captures_iter(&path)
            .filter_map(|caps| caps.name("name"))
            .map(|found| found.as_str().to_string())
            .collect();

        for (name, value) in args {
            if !names.remove(&name) {
                warn!(?name, "argument name not found");
                continue;
            }
            let encoded_value = encode_path_param_value(&value);
            path = replace_path_param(&path, &name, &encoded_value);
        }

        if names.is_empty() {
            return Ok(Self { path });
        }

        let mut missings = names.into_iter().collect::<Vec<_>>();
        missings.sort();
        Err(ApiClientError::PathUnresolved { path, missings })
    }
}
