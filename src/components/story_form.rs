use yew::prelude::*;
use gloo_timers::callback::Interval;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

use crate::components::notification::Notice;
use crate::config;
use crate::story::draft::{MediaChannel, MediaRef, StoryDraft};
use crate::story::error::SubmitError;
use crate::story::upload::{MockUpload, UploadTick};

const SUCCESS_TITLE: &str = "Story submitted successfully!";
const SUCCESS_DESCRIPTION: &str = "Your Corey Story has been received. You'll receive your animated NFT soon.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoryTab {
    Text,
    Media(MediaChannel),
}

impl StoryTab {
    const ALL: [StoryTab; 4] = [
        StoryTab::Text,
        StoryTab::Media(MediaChannel::Audio),
        StoryTab::Media(MediaChannel::Image),
        StoryTab::Media(MediaChannel::Video),
    ];

    fn label(&self) -> &'static str {
        match self {
            StoryTab::Text => "Text",
            StoryTab::Media(MediaChannel::Audio) => "Audio",
            StoryTab::Media(MediaChannel::Image) => "Image",
            StoryTab::Media(MediaChannel::Video) => "Video",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            StoryTab::Text => "💬",
            StoryTab::Media(MediaChannel::Audio) => "🎵",
            StoryTab::Media(MediaChannel::Image) => "🖼",
            StoryTab::Media(MediaChannel::Video) => "🎬",
        }
    }
}

struct ChannelCopy {
    heading: &'static str,
    hint: &'static str,
    button: &'static str,
}

fn channel_copy(channel: MediaChannel) -> ChannelCopy {
    match channel {
        MediaChannel::Audio => ChannelCopy {
            heading: "Upload Audio",
            hint: "Drag and drop an audio file or click to browse",
            button: "Select Audio File",
        },
        MediaChannel::Image => ChannelCopy {
            heading: "Upload Image",
            hint: "Drag and drop an image or click to browse",
            button: "Select Image",
        },
        MediaChannel::Video => ChannelCopy {
            heading: "Upload Video",
            hint: "Drag and drop a video file or click to browse",
            button: "Select Video",
        },
    }
}

/// Draft and upload progress behind the form, free of any browser handles.
#[derive(Debug)]
pub struct StoryFormState {
    pub draft: StoryDraft,
    pub upload: MockUpload,
}

impl StoryFormState {
    pub fn new() -> Self {
        Self {
            draft: StoryDraft::default(),
            upload: MockUpload::new(config::UPLOAD_STEP),
        }
    }

    /// Starts the mock upload, or leaves everything untouched when the draft
    /// is empty.
    pub fn submit(&mut self) -> Result<(), SubmitError> {
        self.draft.validate()?;
        self.upload.start();
        Ok(())
    }

    /// Advances the upload; yields the success notice on the completing tick.
    pub fn on_tick(&mut self) -> Option<Notice> {
        match self.upload.tick() {
            UploadTick::Advanced(progress) => {
                log::debug!("Upload progress {}%", progress);
                None
            }
            UploadTick::Completed => {
                Some(Notice::new(SUCCESS_TITLE, SUCCESS_DESCRIPTION).with_action("View Status"))
            }
            UploadTick::Idle => None,
        }
    }
}

pub fn rejection_notice(err: &SubmitError) -> Notice {
    Notice::new(err.title(), &err.to_string()).destructive()
}

#[derive(Properties, PartialEq)]
pub struct StoryFormProps {
    pub on_notify: Callback<Notice>,
}

pub enum StoryFormMsg {
    SelectTab(StoryTab),
    SetText(String),
    SelectFiles(MediaChannel, Vec<MediaRef>),
    OpenFilePicker(MediaChannel),
    Submit,
    UploadTick,
}

pub struct StoryForm {
    state: StoryFormState,
    active_tab: StoryTab,
    upload_timer: Option<Interval>,
}

impl Component for StoryForm {
    type Message = StoryFormMsg;
    type Properties = StoryFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: StoryFormState::new(),
            active_tab: StoryTab::Text,
            upload_timer: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            StoryFormMsg::SelectTab(tab) => {
                self.active_tab = tab;
                true
            }
            StoryFormMsg::SetText(text) => {
                self.state.draft.set_text(text);
                true
            }
            StoryFormMsg::SelectFiles(channel, files) => {
                self.state.draft.select_file(channel, files);
                if let Some(file) = self.state.draft.file(channel) {
                    log::debug!("Selected {} file {} ({} bytes)", channel.name(), file.name, file.size_bytes);
                }
                true
            }
            StoryFormMsg::OpenFilePicker(channel) => {
                let input = window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.get_element_by_id(channel.input_id()))
                    .and_then(|el| el.dyn_into::<HtmlElement>().ok());
                match input {
                    Some(input) => input.click(),
                    None => log::warn!("File input {} not found", channel.input_id()),
                }
                false
            }
            StoryFormMsg::Submit => {
                if let Err(e) = self.state.submit() {
                    log::info!("Rejected story submission: {}", e);
                    ctx.props().on_notify.emit(rejection_notice(&e));
                    return false;
                }

                let link = ctx.link().clone();
                // Replacing the handle cancels any previous animation.
                self.upload_timer = Some(Interval::new(config::UPLOAD_TICK_MS, move || {
                    link.send_message(StoryFormMsg::UploadTick);
                }));

                match serde_json::to_string(&self.state.draft) {
                    Ok(json) => log::info!("Submitted story: {}", json),
                    Err(e) => log::warn!("Could not serialize story draft: {}", e),
                }
                true
            }
            StoryFormMsg::UploadTick => {
                let notice = self.state.on_tick();
                if !self.state.upload.in_flight() {
                    self.upload_timer = None;
                }
                if let Some(notice) = notice {
                    ctx.props().on_notify.emit(notice);
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            StoryFormMsg::Submit
        });
        let submitting = self.state.upload.in_flight();

        html! {
            <form class="story-form" onsubmit={onsubmit}>
                <div class="story-tabs" role="tablist">
                    { for StoryTab::ALL.iter().map(|tab| {
                        let tab = *tab;
                        let active = tab == self.active_tab;
                        html! {
                            <button
                                type="button"
                                role="tab"
                                class={classes!("story-tab", active.then(|| "active"))}
                                aria-selected={active.to_string()}
                                onclick={ctx.link().callback(move |_| StoryFormMsg::SelectTab(tab))}
                            >
                                <span class="story-tab-icon">{tab.icon()}</span>
                                <span class="story-tab-label">{tab.label()}</span>
                            </button>
                        }
                    }) }
                </div>

                {
                    match self.active_tab {
                        StoryTab::Text => self.render_text(ctx),
                        StoryTab::Media(channel) => self.render_channel(ctx, channel),
                    }
                }

                if submitting {
                    <div class="upload-status">
                        <div class="upload-status-row">
                            <span>{"Uploading..."}</span>
                            <span>{format!("{}%", self.state.upload.progress())}</span>
                        </div>
                        <div class="progress-track">
                            <div class="progress-indicator" style={format!("width: {}%;", self.state.upload.progress())}></div>
                        </div>
                    </div>
                }

                <div class="story-form-actions">
                    <button type="submit" class="primary-button" disabled={submitting}>
                        { if submitting { "Submitting..." } else { "Submit Your Story" } }
                    </button>
                </div>
            </form>
        }
    }
}

impl StoryForm {
    fn render_text(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="story-field">
                <label class="story-label">{"Your Story"}</label>
                <textarea
                    class="story-textarea"
                    placeholder="Share your memory of Corey 'Homicide' Williams..."
                    value={self.state.draft.text.clone()}
                    oninput={ctx.link().callback(|e: InputEvent| {
                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                        StoryFormMsg::SetText(input.value())
                    })}
                />
            </div>
        }
    }

    fn render_channel(&self, ctx: &Context<Self>, channel: MediaChannel) -> Html {
        let copy = channel_copy(channel);
        let icon = StoryTab::Media(channel).icon();

        let onchange = ctx.link().callback(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let files = input
                .files()
                .and_then(|list| list.get(0))
                .map(|file| MediaRef::from(&file))
                .into_iter()
                .collect::<Vec<_>>();
            StoryFormMsg::SelectFiles(channel, files)
        });

        html! {
            <div class="story-field">
                <label class="story-label">{copy.heading}</label>
                <div class="drop-zone">
                    {
                        match self.state.draft.file(channel) {
                            Some(file) => html! {
                                <div class="selected-file">
                                    <span class="selected-file-icon">{icon}</span>
                                    <span>{&file.name}</span>
                                </div>
                            },
                            None => html! {
                                <>
                                    <div class="drop-zone-icon">{icon}</div>
                                    <p class="drop-zone-hint">{copy.hint}</p>
                                </>
                            },
                        }
                    }
                    <input
                        type="file"
                        name={channel.name()}
                        accept={channel.accept()}
                        id={channel.input_id()}
                        class="hidden-input"
                        onchange={onchange}
                    />
                    <button
                        type="button"
                        class="outline-button"
                        onclick={ctx.link().callback(move |_| StoryFormMsg::OpenFilePicker(channel))}
                    >
                        {copy.button}
                    </button>
                </div>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::notification::ToastVariant;

    fn run_until_idle(state: &mut StoryFormState) -> Vec<Notice> {
        let mut notices = Vec::new();
        for _ in 0..100 {
            notices.extend(state.on_tick());
            if !state.upload.in_flight() {
                break;
            }
        }
        notices
    }

    #[test]
    fn empty_submit_leaves_upload_idle() {
        let mut state = StoryFormState::new();
        let err = state.submit().unwrap_err();

        assert_eq!(err, SubmitError::MissingContent);
        assert_eq!(state.upload.progress(), 0);
        assert!(!state.upload.in_flight());
        assert_eq!(state.on_tick(), None);

        let notice = rejection_notice(&err);
        assert_eq!(notice.title, "Missing content");
        assert_eq!(notice.variant, ToastVariant::Destructive);
    }

    #[test]
    fn text_story_completes_with_one_success_notice() {
        let mut state = StoryFormState::new();
        state.draft.set_text("hello".to_string());
        assert!(state.submit().is_ok());
        assert!(state.upload.in_flight());

        let mut notices = Vec::new();
        for _ in 0..21 {
            notices.extend(state.on_tick());
        }

        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].title, "Story submitted successfully!");
        assert_eq!(notices[0].action.as_deref(), Some("View Status"));
        assert_eq!(state.upload.progress(), 0);
        assert!(!state.upload.in_flight());
        assert!(run_until_idle(&mut state).is_empty());
        assert_eq!(state.draft.text, "hello");
    }

    #[test]
    fn resubmitting_mid_upload_restarts_with_a_single_notice() {
        let mut state = StoryFormState::new();
        state.draft.set_text("hello".to_string());
        state.submit().unwrap();
        for _ in 0..10 {
            assert_eq!(state.on_tick(), None);
        }
        assert_eq!(state.upload.progress(), 50);

        state.submit().unwrap();
        assert_eq!(state.upload.progress(), 0);
        assert!(state.upload.in_flight());

        let notices = run_until_idle(&mut state);
        assert_eq!(notices.len(), 1);
        assert!(!state.upload.in_flight());
    }
}
