use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Provider-agnostic description of one inference call. Built fresh per
/// invocation, never reused.
#[derive(Debug, Clone, PartialEq)]
pub struct InferenceRequest {
    pub kind: InferenceKind,
    pub instructions: String,
    pub media: Vec<u8>,
    pub media_mime: String,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InferenceKind {
    VisionExtract,
    VisionGrade,
    Transcribe,
}

/// One outbound call to the inference provider per invocation. No retries;
/// the adapter must classify every outcome rather than let transport errors
/// escape. A cancelled token aborts the in-flight call.
#[async_trait]
pub trait InferenceClient: Send + Sync {
    async fn invoke(
        &self,
        request: InferenceRequest,
        cancel: &CancellationToken,
    ) -> Result<String, InferenceClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum InferenceClientError {
    /// Provider rejected the call or was unreachable. Transport-level faults
    /// carry a synthetic status of 0 and the underlying message as detail.
    #[error("upstream returned {status_code}: {detail}")]
    Upstream { status_code: u16, detail: String },
    #[error("inference call cancelled")]
    Cancelled,
}
