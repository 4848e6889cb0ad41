//! Outputs the calculator drives: the ambient status label and the audio cue.
//!
//! Both are write-only and fire-and-forget. The browser implementations
//! below are used by the app; tests substitute recording doubles.

use log::debug;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

/// Receives the ambient label (the window title in the browser).
pub trait StatusSink {
    fn set_label(&self, label: &str);
}

/// Plays the short cue that accompanies every duration change.
pub trait CuePlayer {
    fn play(&self);
}

/// Writes the label to `document.title`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocumentTitle;

impl StatusSink for DocumentTitle {
    fn set_label(&self, label: &str) {
        gloo_utils::document().set_title(label);
    }
}

/// Plays an audio asset by URL.
///
/// Each cue gets its own element, so rapid cues overlap instead of
/// restarting one another. Playback failures are only logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioCue {
    src: String,
}

impl AudioCue {
    pub fn new(src: impl Into<String>) -> Self {
        Self { src: src.into() }
    }

    pub fn src(&self) -> &str {
        &self.src
    }
}

impl CuePlayer for AudioCue {
    fn play(&self) {
        let audio = match HtmlAudioElement::new_with_src(&self.src) {
            Ok(audio) => audio,
            Err(e) => {
                debug!("Audio cue unavailable: {:?}", e);
                return;
            }
        };

        let promise: js_sys::Promise = match audio.play() {
            Ok(promise) => promise,
            Err(e) => {
                debug!("Audio cue could not start: {:?}", e);
                return;
            }
        };

        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                debug!("Audio cue playback rejected: {:?}", e);
            }
        });
    }
}
