use std::time::Duration;

use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use reqwest::multipart;
use tokio_util::sync::CancellationToken;

use crate::application::ports::{
    InferenceClient, InferenceClientError, InferenceKind, InferenceRequest,
};

/// Synthetic status for faults below the HTTP layer (connection refused,
/// DNS, TLS, timeout). Distinguishes "never got a status" from any real one.
const TRANSPORT_FAULT_STATUS: u16 = 0;

pub struct OpenAiInferenceClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    chat_model: String,
    transcription_model: String,
}

impl OpenAiInferenceClient {
    pub fn new(
        api_key: String,
        base_url: &str,
        chat_model: String,
        transcription_model: String,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            chat_model,
            transcription_model,
        })
    }

    async fn invoke_chat(
        &self,
        request: &InferenceRequest,
    ) -> Result<String, InferenceClientError> {
        let b64 = general_purpose::STANDARD.encode(&request.media);
        let data_uri = format!("data:{};base64,{}", request.media_mime, b64);

        let body = serde_json::json!({
            "model": self.chat_model,
            "messages": [
                {
                    "role": "system",
                    "content": request.instructions
                },
                {
                    "role": "user",
                    "content": [
                        {
                            "type": "image_url",
                            "image_url": { "url": data_uri }
                        }
                    ]
                }
            ],
            "max_tokens": request.max_tokens
        });

        let url = format!("{}/chat/completions", self.base_url);

        tracing::debug!(model = %self.chat_model, kind = ?request.kind, "Sending vision chat request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(transport_fault)?;

        read_success_body(response).await
    }

    async fn invoke_transcription(
        &self,
        request: &InferenceRequest,
    ) -> Result<String, InferenceClientError> {
        let url = format!("{}/audio/transcriptions", self.base_url);

        let file_part = multipart::Part::bytes(request.media.clone())
            .file_name("audio.wav")
            .mime_str(&request.media_mime)
            .map_err(transport_fault)?;

        let form = multipart::Form::new()
            .text("model", self.transcription_model.clone())
            .part("file", file_part);

        tracing::debug!(model = %self.transcription_model, "Sending audio for transcription");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(transport_fault)?;

        read_success_body(response).await
    }
}

#[async_trait]
impl InferenceClient for OpenAiInferenceClient {
    async fn invoke(
        &self,
        request: InferenceRequest,
        cancel: &CancellationToken,
    ) -> Result<String, InferenceClientError> {
        let call = async {
            match request.kind {
                InferenceKind::VisionExtract | InferenceKind::VisionGrade => {
                    self.invoke_chat(&request).await
                }
                InferenceKind::Transcribe => self.invoke_transcription(&request).await,
            }
        };

        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::warn!(kind = ?request.kind, "Inference call cancelled");
                Err(InferenceClientError::Cancelled)
            }
            result = call => result,
        }
    }
}

fn transport_fault(e: reqwest::Error) -> InferenceClientError {
    InferenceClientError::Upstream {
        status_code: TRANSPORT_FAULT_STATUS,
        detail: e.to_string(),
    }
}

async fn read_success_body(response: reqwest::Response) -> Result<String, InferenceClientError> {
    let status = response.status();

    if !status.is_success() {
        let detail = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), "Inference provider rejected request");
        return Err(InferenceClientError::Upstream {
            status_code: status.as_u16(),
            detail,
        });
    }

    response.text().await.map_err(transport_fault)
}
