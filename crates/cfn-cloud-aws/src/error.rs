//! SDK error mapping

use aws_sdk_cloudformation::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use cfn_cloud::CloudError;

/// Error code CloudFormation uses for request validation failures,
/// including "stack does not exist".
const VALIDATION_ERROR: &str = "ValidationError";

/// Map an SDK error into a [`CloudError`].
pub(crate) fn map_sdk_error<E>(
    operation: &'static str,
    stack_name: Option<&str>,
    err: SdkError<E>,
) -> CloudError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
{
    let code = err.code().map(str::to_string);
    let message = err.message().map(str::to_string);
    let context = DisplayErrorContext(&err).to_string();

    classify(
        operation,
        stack_name,
        code.as_deref(),
        message.as_deref(),
        context,
    )
}

/// Classify provider error metadata.
///
/// CloudFormation has no dedicated "not found" error code: a missing stack is
/// a `ValidationError` whose message reads `Stack with id <name> does not exist`.
pub(crate) fn classify(
    operation: &'static str,
    stack_name: Option<&str>,
    code: Option<&str>,
    message: Option<&str>,
    context: String,
) -> CloudError {
    if let Some(name) = stack_name
        && code == Some(VALIDATION_ERROR)
        && message.is_some_and(|m| m.contains("does not exist"))
    {
        return CloudError::StackNotFound(name.to_string());
    }

    match code {
        Some("ExpiredToken" | "InvalidClientTokenId" | "UnrecognizedClientException") => {
            CloudError::AuthenticationFailed(message.map(str::to_string).unwrap_or(context))
        }
        Some(code) => CloudError::Api {
            operation,
            code: code.to_string(),
            message: message.map(str::to_string).unwrap_or(context),
        },
        // Dispatch/timeout/construction failures carry no service metadata
        None => CloudError::Api {
            operation,
            code: "Unknown".to_string(),
            message: context,
        },
    }
}
