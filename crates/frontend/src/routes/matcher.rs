//! Path template matcher.
//!
//! A template such as `/workflows/:workflow` compiles into literal and
//! parameter tokens and matches a whole pathname, anchored at both ends.
//! A parameter followed by more template is bounded to one path segment;
//! a trailing parameter takes the rest of the pathname, slashes included.

use std::collections::BTreeMap;
use thiserror::Error;

/// Path parameter name -> string value.
pub type PathParams = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("template `{0}` must be empty or start with '/'")]
    MissingLeadingSlash(String),
    #[error("template `{0}` has a parameter without a name")]
    EmptyParamName(String),
    #[error("template `{template}`: parameter `{name}` must span a whole segment")]
    PartialSegmentParam { template: String, name: String },
    #[error("template `{template}` declares parameter `{name}` twice")]
    DuplicateParam { template: String, name: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(String),
    Param(String),
}

#[derive(Debug, Clone)]
pub struct RouteMatcher {
    template: &'static str,
    tokens: Vec<Token>,
}

impl RouteMatcher {
    pub fn compile(template: &'static str) -> Result<Self, TemplateError> {
        if !template.is_empty() && !template.starts_with('/') {
            return Err(TemplateError::MissingLeadingSlash(template.to_string()));
        }

        let mut tokens = Vec::new();
        let mut literal = String::new();
        let mut seen: Vec<&str> = Vec::new();

        for (i, segment) in template.split('/').enumerate() {
            if i > 0 {
                literal.push('/');
            }
            match segment.find(':') {
                None => literal.push_str(segment),
                Some(0) => {
                    let name = &segment[1..];
                    if name.is_empty() {
                        return Err(TemplateError::EmptyParamName(template.to_string()));
                    }
                    if name.contains(':') {
                        return Err(TemplateError::PartialSegmentParam {
                            template: template.to_string(),
                            name: name.to_string(),
                        });
                    }
                    if seen.contains(&name) {
                        return Err(TemplateError::DuplicateParam {
                            template: template.to_string(),
                            name: name.to_string(),
                        });
                    }
                    seen.push(name);
                    if !literal.is_empty() {
                        tokens.push(Token::Literal(std::mem::take(&mut literal)));
                    }
                    tokens.push(Token::Param(name.to_string()));
                }
                Some(pos) => {
                    return Err(TemplateError::PartialSegmentParam {
                        template: template.to_string(),
                        name: segment[pos + 1..].to_string(),
                    });
                }
            }
        }
        if !literal.is_empty() {
            tokens.push(Token::Literal(literal));
        }

        Ok(Self { template, tokens })
    }

    pub fn template(&self) -> &'static str {
        self.template
    }

    pub fn is_match(&self, pathname: &str) -> bool {
        self.captures(pathname).is_some()
    }

    /// Matches the whole pathname and returns the percent-decoded parameters.
    pub fn captures(&self, pathname: &str) -> Option<PathParams> {
        let mut rest = pathname;
        let mut params = PathParams::new();

        for (i, token) in self.tokens.iter().enumerate() {
            match token {
                Token::Literal(lit) => rest = rest.strip_prefix(lit.as_str())?,
                Token::Param(name) => {
                    let is_last = i + 1 == self.tokens.len();
                    let end = if is_last {
                        rest.len()
                    } else {
                        rest.find('/').unwrap_or(rest.len())
                    };
                    if end == 0 {
                        return None;
                    }
                    let (value, tail) = rest.split_at(end);
                    params.insert(name.clone(), decode(value));
                    rest = tail;
                }
            }
        }

        rest.is_empty().then_some(params)
    }

    /// Substitutes parameters into the template. Values are percent-encoded;
    /// a missing parameter is left as its `:name` placeholder.
    pub fn build(&self, params: &PathParams) -> String {
        let mut path = String::new();
        for token in &self.tokens {
            match token {
                Token::Literal(lit) => path.push_str(lit),
                Token::Param(name) => match params.get(name) {
                    Some(value) => path.push_str(&urlencoding::encode(value)),
                    None => {
                        log::warn!("route {}: missing path param `{}`", self.template, name);
                        path.push(':');
                        path.push_str(name);
                    }
                },
            }
        }
        path
    }
}

fn decode(value: &str) -> String {
    urlencoding::decode(value)
        .map(|v| v.into_owned())
        .unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> PathParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_static_template_is_anchored() {
        let m = RouteMatcher::compile("/workflows").unwrap();
        assert!(m.is_match("/workflows"));
        assert!(!m.is_match("/workflows/"));
        assert!(!m.is_match("/api/workflows"));
        assert!(!m.is_match("/workflowsx"));
    }

    #[test]
    fn test_empty_and_root() {
        let empty = RouteMatcher::compile("").unwrap();
        assert!(empty.is_match(""));
        assert!(!empty.is_match("/"));

        let root = RouteMatcher::compile("/").unwrap();
        assert!(root.is_match("/"));
        assert!(!root.is_match(""));
        assert!(!root.is_match("/home"));
    }

    #[test]
    fn test_trailing_param_takes_rest() {
        let m = RouteMatcher::compile("/threads/:id").unwrap();
        assert_eq!(m.captures("/threads/t1"), Some(params(&[("id", "t1")])));
        assert_eq!(m.captures("/threads/t1/x"), Some(params(&[("id", "t1/x")])));
        assert_eq!(m.captures("/threads/"), None);
        assert_eq!(m.captures("/threads"), None);
    }

    #[test]
    fn test_inner_param_is_segment_bounded() {
        let m = RouteMatcher::compile("/agents/:agent/threads/:thread").unwrap();
        assert_eq!(
            m.captures("/agents/a1/threads/t1"),
            Some(params(&[("agent", "a1"), ("thread", "t1")]))
        );
        assert_eq!(m.captures("/agents/a1/x/threads/t1"), None);
        assert_eq!(m.captures("/agents//threads/t1"), None);
    }

    #[test]
    fn test_captures_are_decoded() {
        let m = RouteMatcher::compile("/workflows/:workflow").unwrap();
        assert_eq!(
            m.captures("/workflows/my%20flow"),
            Some(params(&[("workflow", "my flow")]))
        );
    }

    #[test]
    fn test_build_inverts_captures() {
        let m = RouteMatcher::compile("/workflow-triggers/email/:receiver").unwrap();
        let p = params(&[("receiver", "er 1")]);
        let path = m.build(&p);
        assert_eq!(path, "/workflow-triggers/email/er%201");
        assert_eq!(m.captures(&path), Some(p));
    }

    #[test]
    fn test_build_keeps_missing_placeholder() {
        let m = RouteMatcher::compile("/agents/:agent").unwrap();
        assert_eq!(m.build(&PathParams::new()), "/agents/:agent");
    }

    #[test]
    fn test_invalid_templates() {
        assert_eq!(
            RouteMatcher::compile("agents").unwrap_err(),
            TemplateError::MissingLeadingSlash("agents".into())
        );
        assert!(matches!(
            RouteMatcher::compile("/agents/:"),
            Err(TemplateError::EmptyParamName(_))
        ));
        assert!(matches!(
            RouteMatcher::compile("/agents/a:id"),
            Err(TemplateError::PartialSegmentParam { .. })
        ));
        assert!(matches!(
            RouteMatcher::compile("/a/:id/b/:id"),
            Err(TemplateError::DuplicateParam { .. })
        ));
    }
}
