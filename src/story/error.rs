use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Please share your story through text, audio, image, or video.")]
    MissingContent,
}

impl SubmitError {
    pub fn title(&self) -> &'static str {
        match self {
            SubmitError::MissingContent => "Missing content",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_content_reads_as_toast_text() {
        let err = SubmitError::MissingContent;
        assert_eq!(err.title(), "Missing content");
        assert_eq!(err.to_string(), "Please share your story through text, audio, image, or video.");
    }
}
