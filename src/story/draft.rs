use serde::Serialize;

use super::error::SubmitError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaChannel {
    Audio,
    Image,
    Video,
}

impl MediaChannel {
    pub const ALL: [MediaChannel; 3] = [MediaChannel::Audio, MediaChannel::Image, MediaChannel::Video];

    pub fn name(&self) -> &'static str {
        match self {
            MediaChannel::Audio => "audio",
            MediaChannel::Image => "image",
            MediaChannel::Video => "video",
        }
    }

    /// Value for the file input's `accept` attribute.
    pub fn accept(&self) -> &'static str {
        match self {
            MediaChannel::Audio => "audio/*",
            MediaChannel::Image => "image/*",
            MediaChannel::Video => "video/*",
        }
    }

    pub fn input_id(&self) -> &'static str {
        match self {
            MediaChannel::Audio => "audio-upload",
            MediaChannel::Image => "image-upload",
            MediaChannel::Video => "video-upload",
        }
    }
}

/// Metadata of a file picked in the browser. The contents are never read.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MediaRef {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
}

impl From<&web_sys::File> for MediaRef {
    fn from(file: &web_sys::File) -> Self {
        Self {
            name: file.name(),
            size_bytes: file.size() as u64,
            mime_type: file.type_(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct StoryDraft {
    pub text: String,
    pub audio: Option<MediaRef>,
    pub image: Option<MediaRef>,
    pub video: Option<MediaRef>,
}

impl StoryDraft {
    pub fn set_text(&mut self, text: String) {
        self.text = text;
    }

    /// Stores the first of `files` for the channel. An empty selection keeps
    /// whatever was picked before.
    pub fn select_file<I>(&mut self, channel: MediaChannel, files: I)
    where
        I: IntoIterator<Item = MediaRef>,
    {
        if let Some(first) = files.into_iter().next() {
            *self.slot_mut(channel) = Some(first);
        }
    }

    pub fn file(&self, channel: MediaChannel) -> Option<&MediaRef> {
        match channel {
            MediaChannel::Audio => self.audio.as_ref(),
            MediaChannel::Image => self.image.as_ref(),
            MediaChannel::Video => self.video.as_ref(),
        }
    }

    fn slot_mut(&mut self, channel: MediaChannel) -> &mut Option<MediaRef> {
        match channel {
            MediaChannel::Audio => &mut self.audio,
            MediaChannel::Image => &mut self.image,
            MediaChannel::Video => &mut self.video,
        }
    }

    pub fn has_content(&self) -> bool {
        !self.text.is_empty() || MediaChannel::ALL.iter().any(|c| self.file(*c).is_some())
    }

    pub fn validate(&self) -> Result<(), SubmitError> {
        if self.has_content() {
            Ok(())
        } else {
            Err(SubmitError::MissingContent)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn media(name: &str, mime: &str) -> MediaRef {
        MediaRef {
            name: name.to_string(),
            size_bytes: 1024,
            mime_type: mime.to_string(),
        }
    }

    #[test]
    fn empty_draft_is_missing_content() {
        assert_eq!(StoryDraft::default().validate(), Err(SubmitError::MissingContent));
    }

    #[test]
    fn text_is_stored_verbatim() {
        let mut draft = StoryDraft::default();
        draft.set_text("  he dropped 50 at Rucker  ".to_string());
        assert_eq!(draft.text, "  he dropped 50 at Rucker  ");
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn whitespace_text_counts_as_content() {
        let mut draft = StoryDraft::default();
        draft.set_text(" ".to_string());
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn reselecting_a_channel_keeps_only_the_latest_file() {
        let mut draft = StoryDraft::default();
        draft.select_file(MediaChannel::Audio, vec![media("first.mp3", "audio/mpeg")]);
        draft.select_file(MediaChannel::Audio, vec![media("second.wav", "audio/wav")]);
        assert_eq!(draft.file(MediaChannel::Audio).map(|m| m.name.as_str()), Some("second.wav"));
    }

    #[test]
    fn only_the_first_of_several_files_is_kept() {
        let mut draft = StoryDraft::default();
        draft.select_file(
            MediaChannel::Image,
            vec![media("a.png", "image/png"), media("b.png", "image/png")],
        );
        assert_eq!(draft.image.as_ref().map(|m| m.name.as_str()), Some("a.png"));
    }

    #[test]
    fn empty_selection_keeps_previous_file() {
        let mut draft = StoryDraft::default();
        draft.select_file(MediaChannel::Video, vec![media("clip.mp4", "video/mp4")]);
        draft.select_file(MediaChannel::Video, Vec::new());
        assert!(draft.video.is_some());
    }

    #[test]
    fn channels_are_independent() {
        let mut draft = StoryDraft::default();
        draft.select_file(MediaChannel::Image, vec![media("court.jpg", "image/jpeg")]);
        draft.select_file(MediaChannel::Video, vec![media("dunk.mov", "video/quicktime")]);
        assert!(draft.image.is_some());
        assert!(draft.video.is_some());
        assert!(draft.audio.is_none());
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn draft_serializes_for_logging() {
        let mut draft = StoryDraft::default();
        draft.set_text("hello".to_string());
        draft.select_file(MediaChannel::Audio, vec![media("memo.m4a", "audio/mp4")]);
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["text"], "hello");
        assert_eq!(json["audio"]["name"], "memo.m4a");
        assert!(json["video"].is_null());
    }
}
