mod assessment_service;
mod media_decoder;
mod response_extractor;
mod score_engine;

pub use assessment_service::{AssessmentError, AssessmentService};
pub use media_decoder::{decode_media, MediaDecodeError};
pub use response_extractor::{
    extract_feedback, extract_transcript, extract_words, ExtractError,
};
pub use score_engine::score_transcript;
