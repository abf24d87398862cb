use crate::core::errors::{raise_for_status, ApiError};
use crate::core::kernel::transport::TransportConfig;
use crate::core::types::{Payload, Query, Verb};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{instrument, trace};

/// A value that can be bound into a URL template placeholder.
///
/// Either a plain string identifier, or a typed record whose `id` field is
/// used. A record without an `id` value is a malformed call and resolves to
/// an [`ApiError::UrlBind`] error.
pub trait PathSegment {
    fn as_segment(&self) -> Result<&str, ApiError>;
}

impl PathSegment for str {
    fn as_segment(&self) -> Result<&str, ApiError> {
        Ok(self)
    }
}

impl PathSegment for String {
    fn as_segment(&self) -> Result<&str, ApiError> {
        Ok(self)
    }
}

impl<T: PathSegment + ?Sized> PathSegment for &T {
    fn as_segment(&self) -> Result<&str, ApiError> {
        (**self).as_segment()
    }
}

/// Request parameters produced by a manager method body.
///
/// Everything here is passed through verbatim to request construction; `url`
/// overrides template resolution entirely.
#[derive(Debug, Default)]
pub struct RequestParts {
    pub url: Option<String>,
    pub params: Option<Query>,
    pub json: Option<Value>,
}

impl RequestParts {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_params(mut self, params: Option<Query>) -> Self {
        self.params = params;
        self
    }

    #[must_use]
    pub fn with_json(mut self, json: Value) -> Self {
        self.json = Some(json);
        self
    }
}

/// One (HTTP verb, URL template) pair bound to a manager operation.
///
/// Constructed once as an associated const on the manager, immutable
/// thereafter, and consulted on every invocation. Templates use named
/// placeholders (`/projects/{project}`) or a single bare `{}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub verb: Verb,
    pub template: &'static str,
}

impl Route {
    pub const fn get(template: &'static str) -> Self {
        Self {
            verb: Verb::Get,
            template,
        }
    }

    pub const fn post(template: &'static str) -> Self {
        Self {
            verb: Verb::Post,
            template,
        }
    }

    pub const fn put(template: &'static str) -> Self {
        Self {
            verb: Verb::Put,
            template,
        }
    }

    pub const fn delete(template: &'static str) -> Self {
        Self {
            verb: Verb::Delete,
            template,
        }
    }

    /// Substitute every placeholder in the template from the (name, value)
    /// pairs the manager method built from its own arguments.
    pub fn resolve(&self, args: &[(&str, &dyn PathSegment)]) -> Result<String, ApiError> {
        let mut out = String::with_capacity(self.template.len() + 16);
        let mut rest = self.template;
        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let close = after.find('}').ok_or_else(|| {
                ApiError::UrlBind(format!("Unclosed placeholder in template '{}'", self.template))
            })?;
            let name = &after[..close];
            let value = if name.is_empty() {
                // bare `{}` binds the single positional path argument
                args.first().map(|(_, value)| value)
            } else {
                args.iter()
                    .find(|(arg, _)| *arg == name)
                    .map(|(_, value)| value)
            };
            let value = value.ok_or_else(|| {
                ApiError::UrlBind(format!(
                    "No argument named '{}' for template '{}'",
                    name, self.template
                ))
            })?;
            out.push_str(value.as_segment()?);
            rest = &after[close + 1..];
        }
        out.push_str(rest);
        Ok(out)
    }

    /// Execute the full request cycle and coerce the body into the declared
    /// return shape, falling back to raw JSON on structural mismatch.
    pub fn send<T: DeserializeOwned>(
        &self,
        transport: &TransportConfig,
        path: &[(&str, &dyn PathSegment)],
        parts: RequestParts,
    ) -> Result<Payload<T>, ApiError> {
        let exchange = self.dispatch(transport, path, parts)?;
        match exchange.status {
            200 | 201 => Ok(match serde_json::from_value::<T>(exchange.body.clone()) {
                Ok(value) => Payload::Typed(value),
                Err(_) => Payload::Raw(exchange.body),
            }),
            _ => Ok(Payload::Empty),
        }
    }

    /// Execute the full request cycle for operations whose success carries no
    /// body (deletes). Returns `true` on 204 or any other success.
    pub fn send_ack(
        &self,
        transport: &TransportConfig,
        path: &[(&str, &dyn PathSegment)],
        parts: RequestParts,
    ) -> Result<bool, ApiError> {
        self.dispatch(transport, path, parts)?;
        Ok(true)
    }

    #[instrument(skip_all, fields(verb = %self.verb, template = self.template))]
    fn dispatch(
        &self,
        transport: &TransportConfig,
        path: &[(&str, &dyn PathSegment)],
        parts: RequestParts,
    ) -> Result<RawExchange, ApiError> {
        let path = match parts.url {
            Some(url) => url,
            None => self.resolve(path)?,
        };
        let url = transport.endpoint(&path);

        // Fresh client per request; dropped (connection released) on every
        // exit path when this scope unwinds.
        let client = transport.spawn()?;
        let mut request = client.request(self.verb.as_method(), &url);
        if let Some(query) = parts.params {
            request = request.query(query.pairs());
        }
        if let Some(body) = parts.json {
            request = request.json(&body);
        }

        let response = request
            .send()
            .map_err(|e| ApiError::Network(format!("Request failed: {}", e)))?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .map_err(|e| ApiError::Network(format!("Failed to read response body: {}", e)))?;
        drop(client);

        trace!(status, body = %text, "received response");
        raise_for_status(self.verb, &url, status, &text)?;

        let body = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text)
                .map_err(|e| ApiError::Decode(format!("Failed to parse JSON response: {}", e)))?
        };
        Ok(RawExchange { status, body })
    }
}

struct RawExchange {
    status: u16,
    body: Value,
}
