//! Request input model
//!
//! An owned description of an outbound HTTP request: method, URL, headers,
//! and an optional single-use body. This is the input side of the
//! request-to-curl conversion; nothing here performs network I/O.

use std::io::Read;

use bytes::Bytes;
use indexmap::IndexMap;
use url::Url;

use crate::errors::{CurlifyError, Result};

/// A request body that can be drained exactly once
///
/// Wraps either an owned buffer or a boxed reader. Draining consumes the
/// value, so a second read is impossible by construction rather than by a
/// runtime "already consumed" flag.
pub struct Body(BodySource);

enum BodySource {
    Buffered(Bytes),
    Stream(Box<dyn Read>),
}

impl Body {
    /// Wrap an owned byte buffer
    pub fn bytes(bytes: impl Into<Bytes>) -> Self {
        Body(BodySource::Buffered(bytes.into()))
    }

    /// Wrap a reader; it will be read to EOF when the command is built
    pub fn reader(reader: impl Read + 'static) -> Self {
        Body(BodySource::Stream(Box::new(reader)))
    }

    /// Read the body to EOF, consuming it
    pub(crate) fn drain(self) -> std::io::Result<Bytes> {
        match self.0 {
            BodySource::Buffered(bytes) => Ok(bytes),
            BodySource::Stream(mut reader) => {
                let mut buf = Vec::new();
                reader.read_to_end(&mut buf)?;
                Ok(buf.into())
            }
        }
    }
}

impl std::fmt::Debug for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            BodySource::Buffered(bytes) => f.debug_tuple("Body").field(&bytes.len()).finish(),
            BodySource::Stream(_) => f.debug_tuple("Body").field(&"<stream>").finish(),
        }
    }
}

impl From<&str> for Body {
    fn from(s: &str) -> Self {
        Body::bytes(s.to_owned().into_bytes())
    }
}

impl From<String> for Body {
    fn from(s: String) -> Self {
        Body::bytes(s.into_bytes())
    }
}

impl From<Vec<u8>> for Body {
    fn from(v: Vec<u8>) -> Self {
        Body::bytes(v)
    }
}

impl From<Bytes> for Body {
    fn from(b: Bytes) -> Self {
        Body(BodySource::Buffered(b))
    }
}

/// An outbound HTTP request to be rendered as a curl command
///
/// Headers keep their insertion order and literal key casing; whatever casing
/// the map holds is what the generated command shows. Multiple values under
/// one key are kept as an ordered list.
#[derive(Debug)]
pub struct Request {
    method: String,
    url: Url,
    headers: IndexMap<String, Vec<String>>,
    body: Option<Body>,
}

impl Request {
    /// Create a request from a method and an absolute URL string
    pub fn new(method: impl Into<String>, url: &str) -> Result<Self> {
        Ok(Self::from_url(method, Url::parse(url)?))
    }

    /// Create a request from a method and an already parsed URL
    pub fn from_url(method: impl Into<String>, url: Url) -> Self {
        Request {
            method: method.into(),
            url,
            headers: IndexMap::new(),
            body: None,
        }
    }

    /// Append a header value, keeping earlier values for the same key
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .entry(name.into())
            .or_default()
            .push(value.into());
        self
    }

    /// Attach a body
    pub fn body(mut self, body: impl Into<Body>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn headers(&self) -> &IndexMap<String, Vec<String>> {
        &self.headers
    }

    pub(crate) fn into_parts(self) -> (String, Url, IndexMap<String, Vec<String>>, Option<Body>) {
        (self.method, self.url, self.headers, self.body)
    }
}

/// Build a [`Request`] from an [`http`] crate request with a buffered body
///
/// The URI must be absolute. Header names arrive lowercased by
/// [`http::HeaderMap`] and are emitted that way; non-UTF-8 header values are
/// converted lossily. An empty body buffer is treated as "no body".
impl TryFrom<http::Request<Vec<u8>>> for Request {
    type Error = CurlifyError;

    fn try_from(req: http::Request<Vec<u8>>) -> Result<Self> {
        let (parts, body) = req.into_parts();
        let url = Url::parse(&parts.uri.to_string())?;

        let mut request = Request::from_url(parts.method.as_str(), url);
        for (name, value) in &parts.headers {
            request = request.header(
                name.as_str(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            );
        }
        if !body.is_empty() {
            request = request.body(body);
        }
        Ok(request)
    }
}
