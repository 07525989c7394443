//! Path rewrites applied before routing.
//!
//! A rule's source is a path pattern with `:name` (one segment) and `:name*`
//! (the rest of the path, possibly empty) captures. A rule may also require a
//! method or the presence of a query parameter. Rules are tried in order and
//! the first match wins; the query string is kept.

use crate::config::RewriteRuleConfig;
use crate::error::ConfigError;
use axum::extract::Query;
use axum::http::{uri::PathAndQuery, Method, Request, Uri};
use regex::Regex;
use std::collections::HashMap;
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::{Layer, Service};

#[derive(Clone, Debug)]
enum Segment {
    Literal(String),
    Param(String),
    Rest(String),
}

fn parse_segments(pattern: &str) -> Result<Vec<Segment>, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidRewrite {
        pattern: pattern.to_string(),
        reason: reason.to_string(),
    };
    if !pattern.starts_with('/') {
        return Err(invalid("must start with '/'"));
    }
    let mut out = Vec::new();
    let parts: Vec<&str> = pattern.split('/').skip(1).filter(|s| !s.is_empty()).collect();
    for (i, part) in parts.iter().enumerate() {
        let segment = match part.strip_prefix(':') {
            Some(name) => {
                let (name, rest) = match name.strip_suffix('*') {
                    Some(n) => (n, true),
                    None => (name, false),
                };
                if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                    return Err(invalid("capture names must be alphanumeric"));
                }
                if rest && i + 1 != parts.len() {
                    return Err(invalid("a ':name*' capture must be last"));
                }
                if rest {
                    Segment::Rest(name.to_string())
                } else {
                    Segment::Param(name.to_string())
                }
            }
            None => Segment::Literal(part.to_string()),
        };
        out.push(segment);
    }
    Ok(out)
}

fn capture_names(segments: &[Segment]) -> impl Iterator<Item = &str> {
    segments.iter().filter_map(|s| match s {
        Segment::Param(n) | Segment::Rest(n) => Some(n.as_str()),
        Segment::Literal(_) => None,
    })
}

#[derive(Clone, Debug)]
pub struct RewriteRule {
    source: String,
    regex: Regex,
    destination: Vec<Segment>,
    method: Option<Method>,
    has_query: Option<String>,
}

impl RewriteRule {
    pub fn new(source: &str, destination: &str) -> Result<Self, ConfigError> {
        let segments = parse_segments(source)?;
        let mut pattern = String::from("^");
        for segment in &segments {
            match segment {
                Segment::Literal(l) => {
                    pattern.push('/');
                    pattern.push_str(&regex::escape(l));
                }
                Segment::Param(n) => pattern.push_str(&format!("/(?P<{}>[^/]+)", n)),
                Segment::Rest(n) => pattern.push_str(&format!("(?:/(?P<{}>.*))?", n)),
            }
        }
        pattern.push_str("/?$");
        let regex = Regex::new(&pattern).map_err(|e| ConfigError::InvalidRewrite {
            pattern: source.to_string(),
            reason: e.to_string(),
        })?;

        let destination = parse_segments(destination)?;
        let known: Vec<&str> = capture_names(&segments).collect();
        if let Some(missing) = capture_names(&destination).find(|n| !known.contains(n)) {
            return Err(ConfigError::InvalidRewrite {
                pattern: source.to_string(),
                reason: format!("destination uses unknown capture ':{}'", missing),
            });
        }
        Ok(RewriteRule {
            source: source.to_string(),
            regex,
            destination,
            method: None,
            has_query: None,
        })
    }

    pub fn when_method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn when_query(mut self, param: impl Into<String>) -> Self {
        self.has_query = Some(param.into());
        self
    }

    pub fn from_config(config: &RewriteRuleConfig) -> Result<Self, ConfigError> {
        let mut rule = RewriteRule::new(&config.source, &config.destination)?;
        if let Some(method) = &config.method {
            let method = Method::from_bytes(method.to_ascii_uppercase().as_bytes()).map_err(|e| {
                ConfigError::InvalidRewrite {
                    pattern: config.source.clone(),
                    reason: e.to_string(),
                }
            })?;
            rule = rule.when_method(method);
        }
        if let Some(param) = &config.has_query {
            rule = rule.when_query(param.clone());
        }
        Ok(rule)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// New path if this rule applies. `params` is the decoded query string.
    pub fn apply(&self, method: &Method, path: &str, params: &HashMap<String, String>) -> Option<String> {
        if self.method.as_ref().map(|m| m != method).unwrap_or(false) {
            return None;
        }
        if let Some(param) = &self.has_query {
            if !params.contains_key(param) {
                return None;
            }
        }
        let caps = self.regex.captures(path)?;
        let mut out = String::new();
        for segment in &self.destination {
            let value = match segment {
                Segment::Literal(l) => l.as_str(),
                Segment::Param(n) | Segment::Rest(n) => caps.name(n).map(|m| m.as_str()).unwrap_or(""),
            };
            let value = value.trim_matches('/');
            if !value.is_empty() {
                out.push('/');
                out.push_str(value);
            }
        }
        if out.is_empty() {
            out.push('/');
        }
        Some(out)
    }
}

/// Ordered rule list; first match wins.
#[derive(Clone, Debug, Default)]
pub struct RewriteTable {
    rules: Vec<RewriteRule>,
}

impl RewriteTable {
    pub fn new(rules: Vec<RewriteRule>) -> Self {
        RewriteTable { rules }
    }

    pub fn with_defaults() -> Result<Self, ConfigError> {
        Ok(RewriteTable::new(default_rewrites()?))
    }

    /// Append rules read from config; they rank below the existing ones.
    pub fn extend_from_config(&mut self, configs: &[RewriteRuleConfig]) -> Result<(), ConfigError> {
        for config in configs {
            self.rules.push(RewriteRule::from_config(config)?);
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rewrite(&self, method: &Method, uri: &Uri) -> Option<Uri> {
        let query = uri.query();
        // Undecodable query strings satisfy no query predicate.
        let params = Query::<HashMap<String, String>>::try_from_uri(uri)
            .map(|Query(q)| q)
            .unwrap_or_default();
        let path = self
            .rules
            .iter()
            .find_map(|rule| rule.apply(method, uri.path(), &params))?;
        let path_and_query = match query {
            Some(q) => format!("{}?{}", path, q),
            None => path,
        };
        let mut parts = uri.clone().into_parts();
        parts.path_and_query = Some(PathAndQuery::try_from(path_and_query).ok()?);
        Uri::from_parts(parts).ok()
    }
}

/// Rewrites shipped with the proxy. The `/category` rule must precede the
/// catch-all for `/store/product-categories`.
pub fn default_rewrites() -> Result<Vec<RewriteRule>, ConfigError> {
    Ok(vec![
        RewriteRule::new("/admin/product-categories/category", "/admin/product-categories")?,
        RewriteRule::new("/store/product-categories", "/admin/product-categories")?,
        RewriteRule::new("/store/product-categories/:path*", "/admin/product-categories/:path*")?,
        RewriteRule::new("/api/admin/:path*", "/admin/:path*")?,
    ])
}

/// Layer that rewrites request URIs with a [`RewriteTable`].
#[derive(Clone)]
pub struct RewriteLayer {
    table: Arc<RewriteTable>,
}

impl RewriteLayer {
    pub fn new(table: RewriteTable) -> Self {
        RewriteLayer { table: Arc::new(table) }
    }
}

impl<S> Layer<S> for RewriteLayer {
    type Service = Rewrite<S>;

    fn layer(&self, inner: S) -> Self::Service {
        Rewrite {
            inner,
            table: Arc::clone(&self.table),
        }
    }
}

#[derive(Clone)]
pub struct Rewrite<S> {
    inner: S,
    table: Arc<RewriteTable>,
}

impl<S, B> Service<Request<B>> for Rewrite<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<B>) -> Self::Future {
        if let Some(uri) = self.table.rewrite(req.method(), req.uri()) {
            tracing::debug!(from = %req.uri(), to = %uri, "rewrite");
            *req.uri_mut() = uri;
        }
        self.inner.call(req)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewrite(table: &RewriteTable, method: Method, uri: &str) -> Option<String> {
        table
            .rewrite(&method, &uri.parse::<Uri>().unwrap())
            .map(|u| u.to_string())
    }

    #[test]
    fn default_rules_in_order() {
        let table = RewriteTable::with_defaults().unwrap();
        assert_eq!(
            rewrite(&table, Method::GET, "/admin/product-categories/category?limit=5").as_deref(),
            Some("/admin/product-categories?limit=5")
        );
        assert_eq!(
            rewrite(&table, Method::GET, "/store/product-categories").as_deref(),
            Some("/admin/product-categories")
        );
        assert_eq!(
            rewrite(&table, Method::GET, "/store/product-categories/12/edit").as_deref(),
            Some("/admin/product-categories/12/edit")
        );
        assert_eq!(
            rewrite(&table, Method::DELETE, "/api/admin/products/7").as_deref(),
            Some("/admin/products/7")
        );
        assert_eq!(rewrite(&table, Method::GET, "/admin/products/7"), None);
    }

    #[test]
    fn method_and_query_predicates() {
        let table = RewriteTable::new(vec![
            RewriteRule::new("/legacy/:id", "/admin/products/:id")
                .unwrap()
                .when_method(Method::GET)
                .when_query("fields"),
        ]);
        assert_eq!(
            rewrite(&table, Method::GET, "/legacy/3?fields=title").as_deref(),
            Some("/admin/products/3?fields=title")
        );
        assert_eq!(rewrite(&table, Method::POST, "/legacy/3?fields=title"), None);
        assert_eq!(rewrite(&table, Method::GET, "/legacy/3?expand=x"), None);
        assert_eq!(
            rewrite(&table, Method::GET, "/legacy/3?%66ields=title").as_deref(),
            Some("/admin/products/3?%66ields=title")
        );
    }

    #[test]
    fn bad_patterns_are_rejected() {
        assert!(RewriteRule::new("no-slash", "/x").is_err());
        assert!(RewriteRule::new("/a/:rest*/b", "/x").is_err());
        assert!(RewriteRule::new("/a/:id", "/b/:other").is_err());
        let config = RewriteRuleConfig {
            source: "/a".into(),
            destination: "/b".into(),
            method: Some("get".into()),
            has_query: None,
        };
        assert!(RewriteRule::from_config(&config).is_ok());
    }
}
