use crate::domain::tag::{TagContext, TagInvocation};
use crate::error::{CommerceError, Result};
use std::collections::HashMap;
use tracing::debug;

/// Handler closure for the index form and explicitly named methods.
pub type TagMethod = Box<dyn Fn(&TagContext) -> String + Send + Sync>;

/// Fallback closure; receives the unmatched path segment as an argument.
pub type WildcardMethod = Box<dyn Fn(&TagContext, &str) -> String + Send + Sync>;

/// A handler registered under a root tag, reachable via
/// `namespace:subtag[:method]` syntax.
///
/// Resolution is a three-tier map lookup built at registration time: the
/// designated index entry, explicitly named methods, and an optional
/// wildcard fallback. No reflection anywhere.
pub struct SubTag {
    index: TagMethod,
    methods: HashMap<String, TagMethod>,
    wildcard: Option<WildcardMethod>,
}

impl SubTag {
    /// Starts building a sub-tag from its designated index method, invoked
    /// when the path carries no further segment.
    pub fn builder<F>(index: F) -> SubTagBuilder
    where
        F: Fn(&TagContext) -> String + Send + Sync + 'static,
    {
        SubTagBuilder {
            index: Box::new(index),
            methods: HashMap::new(),
            wildcard: None,
        }
    }
}

pub struct SubTagBuilder {
    index: TagMethod,
    methods: HashMap<String, TagMethod>,
    wildcard: Option<WildcardMethod>,
}

impl SubTagBuilder {
    /// Registers an explicitly named method.
    pub fn method<F>(mut self, name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&TagContext) -> String + Send + Sync + 'static,
    {
        self.methods.insert(name.into(), Box::new(handler));
        self
    }

    /// Registers the fallback invoked when no explicit method matches.
    pub fn wildcard<F>(mut self, handler: F) -> Self
    where
        F: Fn(&TagContext, &str) -> String + Send + Sync + 'static,
    {
        self.wildcard = Some(Box::new(handler));
        self
    }

    pub fn build(self) -> SubTag {
        SubTag {
            index: self.index,
            methods: self.methods,
            wildcard: self.wildcard,
        }
    }
}

/// Routes parsed tag invocations to registered sub-tag handlers.
///
/// The handler's return value is substituted verbatim at the tag's position
/// in the rendered template; escaping belongs to the rendering layer.
pub struct TagDispatcher {
    namespace: String,
    subtags: HashMap<String, SubTag>,
}

impl TagDispatcher {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            subtags: HashMap::new(),
        }
    }

    /// Registers a sub-tag under its name (the first path segment it
    /// answers to).
    pub fn register(&mut self, name: impl Into<String>, subtag: SubTag) {
        self.subtags.insert(name.into(), subtag);
    }

    /// Resolves and invokes the handler for one invocation.
    ///
    /// Exact sub-tag match on the first segment is required. Given a match,
    /// an explicitly named method takes priority over the wildcard; the
    /// wildcard only runs when no method of that exact name exists.
    pub fn dispatch(&self, invocation: &TagInvocation) -> Result<String> {
        if invocation.namespace != self.namespace {
            return Err(CommerceError::unknown_tag(
                &invocation.namespace,
                &invocation.path,
            ));
        }

        let (name, rest) = match invocation.path.as_slice() {
            [] => {
                return Err(CommerceError::MalformedInvocation(
                    "tag path is empty".to_string(),
                ));
            }
            [name] => (name, None),
            [name, method] => (name, Some(method.as_str())),
            _ => {
                return Err(CommerceError::MalformedInvocation(format!(
                    "tag path has too many segments: {}",
                    invocation.path.join(":")
                )));
            }
        };

        let subtag = self
            .subtags
            .get(name)
            .ok_or_else(|| CommerceError::unknown_tag(&invocation.namespace, &invocation.path))?;

        let context = TagContext::from_invocation(invocation);

        match rest {
            None => {
                debug!(namespace = %self.namespace, subtag = %name, "dispatching index method");
                Ok((subtag.index)(&context))
            }
            Some(method) => {
                if let Some(handler) = subtag.methods.get(method) {
                    debug!(namespace = %self.namespace, subtag = %name, method, "dispatching explicit method");
                    Ok(handler(&context))
                } else if let Some(wildcard) = &subtag.wildcard {
                    debug!(namespace = %self.namespace, subtag = %name, segment = method, "dispatching wildcard method");
                    Ok(wildcard(&context, method))
                } else {
                    Err(CommerceError::unknown_tag(
                        &invocation.namespace,
                        &invocation.path,
                    ))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatcher() -> TagDispatcher {
        let mut dispatcher = TagDispatcher::new("sc");
        dispatcher.register(
            "test",
            SubTag::builder(|_| "This is the index method.".to_string())
                .method("cheese", |_| "This is the cheese method.".to_string())
                .wildcard(|_, _| "This is the wildcard method.".to_string())
                .build(),
        );
        dispatcher
    }

    fn invoke(path: &[&str]) -> TagInvocation {
        TagInvocation::new("sc", path.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_index_form() {
        let output = dispatcher().dispatch(&invoke(&["test"])).unwrap();
        assert_eq!(output, "This is the index method.");
    }

    #[test]
    fn test_explicit_method_form() {
        let output = dispatcher().dispatch(&invoke(&["test", "cheese"])).unwrap();
        assert_eq!(output, "This is the cheese method.");
    }

    #[test]
    fn test_wildcard_form() {
        let output = dispatcher()
            .dispatch(&invoke(&["test", "something"]))
            .unwrap();
        assert_eq!(output, "This is the wildcard method.");
    }

    #[test]
    fn test_wildcard_receives_unmatched_segment() {
        let mut dispatcher = TagDispatcher::new("sc");
        dispatcher.register(
            "echo",
            SubTag::builder(|_| String::new())
                .wildcard(|_, segment| format!("echo: {segment}"))
                .build(),
        );

        let output = dispatcher
            .dispatch(&invoke(&["echo", "anything-else"]))
            .unwrap();
        assert_eq!(output, "echo: anything-else");
    }

    #[test]
    fn test_unregistered_subtag_fails() {
        let err = dispatcher().dispatch(&invoke(&["nope"])).unwrap_err();
        assert!(matches!(err, CommerceError::UnknownTag { .. }));
    }

    #[test]
    fn test_method_miss_without_wildcard_fails() {
        let mut dispatcher = TagDispatcher::new("sc");
        dispatcher.register(
            "bare",
            SubTag::builder(|_| "index".to_string()).build(),
        );

        let err = dispatcher
            .dispatch(&invoke(&["bare", "missing"]))
            .unwrap_err();
        assert!(matches!(err, CommerceError::UnknownTag { .. }));
    }

    #[test]
    fn test_namespace_mismatch_fails() {
        let invocation = TagInvocation::new("other", vec!["test".to_string()]);
        let err = dispatcher().dispatch(&invocation).unwrap_err();
        assert!(matches!(err, CommerceError::UnknownTag { .. }));
    }

    #[test]
    fn test_empty_and_oversized_paths_are_malformed() {
        let err = dispatcher().dispatch(&invoke(&[])).unwrap_err();
        assert!(matches!(err, CommerceError::MalformedInvocation(_)));

        let err = dispatcher()
            .dispatch(&invoke(&["test", "cheese", "extra"]))
            .unwrap_err();
        assert!(matches!(err, CommerceError::MalformedInvocation(_)));
    }

    #[test]
    fn test_handler_reads_parameters() {
        let mut dispatcher = TagDispatcher::new("sc");
        dispatcher.register(
            "greet",
            SubTag::builder(|ctx| {
                format!("Hello, {}.", ctx.parameter("name").unwrap_or("stranger"))
            })
            .build(),
        );

        let invocation =
            TagInvocation::new("sc", vec!["greet".to_string()]).with_parameter("name", "Joe");
        assert_eq!(dispatcher.dispatch(&invocation).unwrap(), "Hello, Joe.");
    }
}
