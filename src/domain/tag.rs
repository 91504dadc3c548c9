use std::collections::HashMap;

/// One templating call, already parsed into its parts.
///
/// Constructed per render call and discarded after producing output;
/// nothing is carried across invocations.
#[derive(Debug, PartialEq, Clone)]
pub struct TagInvocation {
    pub namespace: String,
    /// Ordered path segments after the namespace, e.g. `["test", "cheese"]`.
    pub path: Vec<String>,
    pub parameters: HashMap<String, String>,
}

impl TagInvocation {
    pub fn new(namespace: impl Into<String>, path: Vec<String>) -> Self {
        Self {
            namespace: namespace.into(),
            path,
            parameters: HashMap::new(),
        }
    }

    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }
}

/// Ambient context handed to a tag handler: the invocation's parameters.
#[derive(Debug, Default, Clone)]
pub struct TagContext {
    pub parameters: HashMap<String, String>,
}

impl TagContext {
    pub fn from_invocation(invocation: &TagInvocation) -> Self {
        Self {
            parameters: invocation.parameters.clone(),
        }
    }

    /// Looks up a parameter by name.
    pub fn parameter(&self, key: &str) -> Option<&str> {
        self.parameters.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invocation_builder() {
        let invocation = TagInvocation::new("sc", vec!["countries".to_string()])
            .with_parameter("only", "GB|Ireland");

        assert_eq!(invocation.namespace, "sc");
        assert_eq!(invocation.path, vec!["countries"]);
        assert_eq!(
            invocation.parameters.get("only").map(String::as_str),
            Some("GB|Ireland")
        );
    }

    #[test]
    fn test_context_carries_parameters() {
        let invocation =
            TagInvocation::new("sc", vec!["test".to_string()]).with_parameter("limit", "5");
        let context = TagContext::from_invocation(&invocation);

        assert_eq!(context.parameter("limit"), Some("5"));
        assert_eq!(context.parameter("missing"), None);
    }
}
