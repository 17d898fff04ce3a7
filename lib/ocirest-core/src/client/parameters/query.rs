use std::fmt::Display;

use indexmap::IndexMap;

use crate::client::ApiClientError;

/// Query string parameters of an API call.
///
/// Parameters keep their insertion order. Optional parameters that are `None` are not
/// rendered at all, so an absent `page` is never sent as `page=`.
///
/// # Examples
///
/// ```rust
/// use ocirest_core::CallQuery;
///
/// let query = CallQuery::new()
///     .add_param("compartmentId", "ocid1.compartment.oc1..aaaa")
///     .add_optional_param("limit", Some(10))
///     .add_optional_param("page", None::<String>);
///
/// assert_eq!(query.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallQuery {
    params: IndexMap<String, String>,
}

impl CallQuery {
    /// Creates an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a query parameter, replacing a previous value with the same name.
    pub fn add_param(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.params.insert(name.into(), value.to_string());
        self
    }

    /// Adds a query parameter only when the value is present.
    pub fn add_optional_param<T: Display>(self, name: impl Into<String>, value: Option<T>) -> Self {
        match value {
            Some(value) => self.add_param(name, value),
            None => self,
        }
    }

    /// Merges another query into this one, the other values take precedence.
    pub fn merge(mut self, other: Self) -> Self {
        self.params.extend(other.params);
        self
    }

    /// Checks if the query is empty.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns the number of query parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns the value of a query parameter.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub(in crate::client) fn to_query_string(&self) -> Result<String, ApiClientError> {
        let pairs = self
            .params
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect::<Vec<_>>();
        let result = serde_urlencoded::to_string(pairs)?;
        Ok(result)
    }
}
