use thiserror::Error;

pub type Result<T> = std::result::Result<T, CommerceError>;

#[derive(Error, Debug)]
pub enum CommerceError {
    #[error("invalid payment input: {0}")]
    InvalidPaymentInput(String),
    #[error("refund failed: {0}")]
    RefundFailure(String),
    #[error("unknown gateway: {0}")]
    UnknownGateway(String),
    #[error("unknown tag: {namespace}:{path}")]
    UnknownTag { namespace: String, path: String },
    #[error("malformed tag invocation: {0}")]
    MalformedInvocation(String),
}

impl CommerceError {
    /// Builds an `UnknownTag` error from an invocation's parts.
    pub fn unknown_tag(namespace: &str, path: &[String]) -> Self {
        CommerceError::UnknownTag {
            namespace: namespace.to_string(),
            path: path.join(":"),
        }
    }
}
