//! Signing context extracted from an HTTP request.

use std::borrow::Cow;
use std::mem;
use std::str::FromStr;

use http::header::HeaderName;
use http::header::AUTHORIZATION;
use http::uri::Authority;
use http::uri::PathAndQuery;
use http::uri::Scheme;
use http::HeaderMap;
use http::HeaderValue;
use http::Method;
use http::Uri;
use percent_encoding::utf8_percent_encode;

use crate::constants::AWS_QUERY_ENCODE_SET;
use crate::error::Error;
use crate::error::Result;

/// The parts of a request that signing reads and rewrites.
///
/// Built by taking the uri and headers out of [`http::request::Parts`]
/// and returned via [`SigningRequest::apply`] once the signature has
/// been attached.
#[derive(Debug)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// HTTP scheme.
    pub scheme: Scheme,
    /// HTTP authority, filled from the region endpoint when the
    /// request carries a relative uri.
    pub authority: Option<Authority>,
    /// HTTP path, percent encoded as received.
    pub path: String,
    /// HTTP query parameters, percent decoded.
    pub query: Vec<(String, String)>,
    /// HTTP headers.
    pub headers: HeaderMap,
}

impl SigningRequest {
    /// Build a signing context from http::request::Parts.
    pub fn build(parts: &mut http::request::Parts) -> Result<Self> {
        let uri = mem::take(&mut parts.uri).into_parts();
        let paq = uri
            .path_and_query
            .unwrap_or_else(|| PathAndQuery::from_static("/"));

        Ok(SigningRequest {
            method: parts.method.clone(),
            scheme: uri.scheme.unwrap_or(Scheme::HTTPS),
            authority: uri.authority,
            path: paq.path().to_string(),
            query: paq
                .query()
                .map(|v| {
                    form_urlencoded::parse(v.as_bytes())
                        .map(|(k, v)| (k.into_owned(), v.into_owned()))
                        .collect()
                })
                .unwrap_or_default(),

            // Take the headers out of the request to avoid copy.
            // They are returned when the context is applied back.
            headers: mem::take(&mut parts.headers),
        })
    }

    /// Apply the signing context back to http::request::Parts.
    pub fn apply(mut self, parts: &mut http::request::Parts) -> Result<()> {
        let query_size = self.query_size();
        let authority = self
            .authority
            .take()
            .ok_or_else(|| Error::malformed_url("request without authority can't be signed"))?;

        // Return headers back.
        mem::swap(&mut parts.headers, &mut self.headers);
        parts.method = self.method;
        parts.uri = {
            let mut uri_parts = mem::take(&mut parts.uri).into_parts();
            uri_parts.scheme = Some(self.scheme);
            uri_parts.authority = Some(authority);
            // Rebuild path and query. Pairs are held percent decoded,
            // so they have to be encoded again on the way out.
            uri_parts.path_and_query = {
                let paq = if query_size == 0 {
                    self.path
                } else {
                    let mut s = self.path;
                    s.reserve(query_size + 1);

                    s.push('?');
                    for (i, (k, v)) in self.query.iter().enumerate() {
                        if i > 0 {
                            s.push('&');
                        }

                        s.push_str(&utf8_percent_encode(k, &AWS_QUERY_ENCODE_SET).to_string());
                        if !v.is_empty() {
                            s.push('=');
                            s.push_str(&utf8_percent_encode(v, &AWS_QUERY_ENCODE_SET).to_string());
                        }
                    }

                    s
                };

                Some(PathAndQuery::from_str(&paq)?)
            };
            Uri::from_parts(uri_parts)?
        };

        Ok(())
    }

    /// Get the path percent decoded, as raw bytes.
    ///
    /// Escapes that do not form valid UTF-8 still have to round-trip
    /// through re-encoding unchanged, so this never goes through a
    /// lossy string conversion.
    pub fn path_percent_decoded(&self) -> Cow<[u8]> {
        percent_encoding::percent_decode_str(&self.path).into()
    }

    /// Get query size.
    #[inline]
    pub fn query_size(&self) -> usize {
        self.query
            .iter()
            .map(|(k, v)| k.len() + v.len())
            .sum::<usize>()
    }

    /// Push a new query pair into the query list.
    #[inline]
    pub fn query_push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.query.push((key.into(), value.into()));
    }

    /// Get query pairs matching the filter.
    pub fn query_to_vec_with_filter(&self, filter: impl Fn(&str) -> bool) -> Vec<(String, String)> {
        self.query
            .iter()
            .filter(|(k, _)| filter(k))
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    /// Convert sorted query pairs to a string.
    ///
    /// ```shell
    /// [(a, b), (c, d)] => "a:b\nc:d"
    /// ```
    pub fn query_to_string(mut query: Vec<(String, String)>, sep: &str, join: &str) -> String {
        let mut s = String::with_capacity(16);

        query.sort();

        for (idx, (k, v)) in query.into_iter().enumerate() {
            if idx != 0 {
                s.push_str(join);
            }

            s.push_str(&k);
            if !v.is_empty() {
                s.push_str(sep);
                s.push_str(&v);
            }
        }

        s
    }

    /// Get header value by name.
    ///
    /// Returns empty string if header not found.
    #[inline]
    pub fn header_get_or_default(&self, key: &HeaderName) -> Result<&str> {
        match self.headers.get(key) {
            Some(v) => Ok(v.to_str()?),
            None => Ok(""),
        }
    }

    /// Normalize a header value by trimming leading and trailing spaces.
    pub fn header_value_normalize(v: &mut HeaderValue) {
        let bs = v.as_bytes();

        let starting_index = bs.iter().position(|b| *b != b' ').unwrap_or(0);
        let ending_offset = bs.iter().rev().position(|b| *b != b' ').unwrap_or(0);
        let ending_index = bs.len() - ending_offset;

        // This can't fail because we started with a valid HeaderValue and then only trimmed spaces
        *v = HeaderValue::from_bytes(&bs[starting_index..ending_index])
            .expect("invalid header value")
    }

    /// Header names in signing order, lowercase and sorted, with the
    /// authorization header left out.
    pub fn header_name_to_vec_sorted(&self) -> Vec<&str> {
        let mut h = self
            .headers
            .keys()
            .filter(|k| **k != AUTHORIZATION)
            .map(|k| k.as_str())
            .collect::<Vec<&str>>();
        h.sort_unstable();

        h
    }

    /// Get headers whose name starts with the given prefix, with
    /// duplicate names merged into one comma joined value.
    pub fn header_to_vec_with_prefix(&self, prefix: &str) -> Result<Vec<(String, String)>> {
        self.headers
            .keys()
            .filter(|k| k.as_str().starts_with(prefix))
            .map(|k| {
                let values = self
                    .headers
                    .get_all(k)
                    .iter()
                    .map(|v| Ok(v.to_str()?.trim().to_string()))
                    .collect::<Result<Vec<_>>>()?;

                Ok((k.as_str().to_lowercase(), values.join(",")))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts_of(req: http::Request<()>) -> http::request::Parts {
        req.into_parts().0
    }

    #[test]
    fn test_build_splits_query() {
        let mut parts = parts_of(
            http::Request::get("https://s3.amazonaws.com/examplebucket?prefix=J&max-keys=2")
                .body(())
                .expect("request must be valid"),
        );
        let ctx = SigningRequest::build(&mut parts).expect("build must succeed");

        assert_eq!(ctx.path, "/examplebucket");
        assert_eq!(
            ctx.query,
            vec![
                ("prefix".to_string(), "J".to_string()),
                ("max-keys".to_string(), "2".to_string())
            ]
        );
    }

    #[test]
    fn test_apply_keeps_valueless_query() {
        let mut parts = parts_of(
            http::Request::get("https://s3.amazonaws.com/examplebucket?acl")
                .body(())
                .expect("request must be valid"),
        );
        let ctx = SigningRequest::build(&mut parts).expect("build must succeed");
        ctx.apply(&mut parts).expect("apply must succeed");

        assert_eq!(
            parts.uri.to_string(),
            "https://s3.amazonaws.com/examplebucket?acl"
        );
    }

    #[test]
    fn test_apply_reencodes_query() {
        let mut parts = parts_of(
            http::Request::get("https://s3.amazonaws.com/examplebucket?prefix=a%26b&name=a%20b")
                .body(())
                .expect("request must be valid"),
        );
        let ctx = SigningRequest::build(&mut parts).expect("build must succeed");
        assert_eq!(
            ctx.query,
            vec![
                ("prefix".to_string(), "a&b".to_string()),
                ("name".to_string(), "a b".to_string())
            ]
        );

        ctx.apply(&mut parts).expect("apply must succeed");
        assert_eq!(parts.uri.query(), Some("prefix=a%26b&name=a%20b"));
    }

    #[test]
    fn test_apply_without_authority_is_rejected() {
        let mut parts = parts_of(
            http::Request::get("/examplebucket")
                .body(())
                .expect("request must be valid"),
        );
        let ctx = SigningRequest::build(&mut parts).expect("build must succeed");
        let err = ctx.apply(&mut parts).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::MalformedUrl);
    }

    #[test]
    fn test_header_value_normalize() {
        let mut v = HeaderValue::from_static("  value  ");
        SigningRequest::header_value_normalize(&mut v);
        assert_eq!(v, HeaderValue::from_static("value"));
    }
}
