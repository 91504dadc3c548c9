use crate::domain::tag::TagInvocation;
use crate::error::{CommerceError, Result};

/// Parses one opening tag of the templating mini-language into a
/// [`TagInvocation`]:
///
/// ```text
/// {{ namespace:subtag[:method] [key="value" ...] }}
/// ```
///
/// Exists so test harnesses and embedders can drive the dispatcher from
/// template text; the host engine's full template parser remains external.
pub fn parse_invocation(input: &str) -> Result<TagInvocation> {
    let trimmed = input.trim();
    let inner = trimmed
        .strip_prefix("{{")
        .and_then(|s| s.strip_suffix("}}"))
        .ok_or_else(|| malformed(input, "missing {{ }} delimiters"))?
        .trim();

    if inner.is_empty() {
        return Err(malformed(input, "empty tag"));
    }
    if inner.starts_with('/') {
        return Err(malformed(input, "closing tag is not an invocation"));
    }

    let (head, rest) = match inner.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (inner, ""),
    };

    let mut segments = head.split(':');
    let namespace = segments.next().unwrap_or_default();
    let path: Vec<String> = segments.map(str::to_string).collect();

    if namespace.is_empty() || path.is_empty() || path.iter().any(String::is_empty) {
        return Err(malformed(input, "expected namespace:subtag[:method]"));
    }

    let mut invocation = TagInvocation::new(namespace, path);
    for (key, value) in parse_parameters(rest, input)? {
        invocation.parameters.insert(key, value);
    }

    Ok(invocation)
}

fn parse_parameters(mut rest: &str, input: &str) -> Result<Vec<(String, String)>> {
    let mut parameters = Vec::new();

    while !rest.is_empty() {
        let (key, after_key) = rest
            .split_once('=')
            .ok_or_else(|| malformed(input, "parameter without ="))?;
        let key = key.trim();
        if key.is_empty() || key.contains(char::is_whitespace) {
            return Err(malformed(input, "parameter name is not a single word"));
        }

        let after_quote = after_key
            .strip_prefix('"')
            .ok_or_else(|| malformed(input, "parameter value must be double-quoted"))?;
        let (value, tail) = after_quote
            .split_once('"')
            .ok_or_else(|| malformed(input, "unterminated parameter value"))?;

        parameters.push((key.to_string(), value.to_string()));
        rest = tail.trim_start();
    }

    Ok(parameters)
}

fn malformed(input: &str, reason: &str) -> CommerceError {
    CommerceError::MalformedInvocation(format!("{reason}: {input}"))
}
