use reqwest::Method;
use serde::Serialize;
use url::Url;

use crate::client::ApiError;
use crate::format::ContentType;

/// One pending call: target, verb, headers, query and optional body.
///
/// Built once per call and consumed by [`HttpClient`](crate::HttpClient).
/// When `host` is empty, `path` must itself be an absolute URI.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    path: String,
    host: String,
    method: Method,
    content_type: ContentType,
    headers: Vec<(String, String)>,
    query: Vec<(String, String)>,
    body: Option<String>,
    operation: Option<&'static str>,
}

impl ApiRequest {
    pub fn new(
        path: impl Into<String>,
        host: impl Into<String>,
        method: Method,
        content_type: ContentType,
    ) -> Self {
        Self {
            path: path.into(),
            host: host.into(),
            method,
            content_type,
            headers: Vec::new(),
            query: Vec::new(),
            body: None,
            operation: None,
        }
    }

    /// Shorthand for a JSON request.
    pub fn json(path: impl Into<String>, host: impl Into<String>, method: Method) -> Self {
        Self::new(path, host, method, ContentType::Json)
    }

    /// Tag the request with the endpoint name it was built from.
    pub fn with_operation(mut self, name: &'static str) -> Self {
        self.operation = Some(name);
        self
    }

    /// Set a header, replacing any earlier value for the same name.
    ///
    /// Names compare case-insensitively, as HTTP header names do.
    pub fn add_header(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self
            .headers
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(&key))
        {
            Some(entry) => entry.1 = value,
            None => self.headers.push((key, value)),
        }
    }

    /// Append a query pair. Repeated keys are kept in insertion order.
    pub fn add_query_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.query.push((key.into(), value.into()));
    }

    /// Encode `value` with this request's content type and attach it as the body.
    pub fn add_body<T: Serialize>(&mut self, value: &T) -> Result<(), ApiError> {
        self.body = Some(self.content_type.serialize(value)?);
        Ok(())
    }

    /// Resolve the absolute URI this request will be sent to.
    pub fn full_uri(&self) -> Result<Url, ApiError> {
        let target = if self.host.is_empty() {
            self.path.clone()
        } else if self.path.is_empty() {
            self.host.clone()
        } else {
            format!(
                "{}/{}",
                self.host.trim_end_matches('/'),
                self.path.trim_start_matches('/')
            )
        };

        let mut url = Url::parse(&target)?;
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }
        Ok(url)
    }

    pub fn operation(&self) -> Option<&'static str> {
        self.operation
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Look up a header value by name (case-insensitive).
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map(|(_, value)| value.as_str())
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub(crate) fn into_body(self) -> Option<String> {
        self.body
    }
}
