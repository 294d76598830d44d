mod openai_inference_client;

pub use openai_inference_client::OpenAiInferenceClient;
