use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, error, warn};

use crate::config::SpeechConfig;
use crate::speech::{SpeechRecognizer, SpeechServiceClient, SpeechSynthesizer};
use crate::translate::{RelayClient, TranslateInterface, TranslationRequest};

/// User-visible notices. The view renders these verbatim; internal error
/// detail only ever goes to the logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    EmptyInput,
    NothingToSpeak,
    TranslationFailed,
    RecognitionFailed,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Notice::EmptyInput => "Please enter text to translate.",
            Notice::NothingToSpeak => "No text to convert to speech.",
            Notice::TranslationFailed => "Translation failed. Please try again.",
            Notice::RecognitionFailed => "Speech recognition failed. Please try again.",
        };
        f.write_str(message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Translating,
    IdleWithResult,
    IdleWithError,
}

#[derive(Debug)]
struct ControllerState {
    input_text: String,
    translated_text: String,
    source_lang: String,
    target_lang: String,
    phase: Phase,
    notice: Option<Notice>,
}

/// Controller for the translate page. Holds the page state and drives the
/// relay and speech capabilities, which are injected so platforms and tests
/// can swap them.
pub struct TranslatorController {
    state: Mutex<ControllerState>,
    busy: AtomicBool,
    translator: Arc<dyn TranslateInterface>,
    synthesizer: Arc<dyn SpeechSynthesizer>,
    recognizer: Arc<dyn SpeechRecognizer>,
}

/// Clears the busy flag on drop so every exit path releases it.
struct BusyGuard<'a>(&'a AtomicBool);

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        (!flag.swap(true, Ordering::SeqCst)).then(|| Self(flag))
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl TranslatorController {
    pub fn new(
        translator: Arc<dyn TranslateInterface>,
        synthesizer: Arc<dyn SpeechSynthesizer>,
        recognizer: Arc<dyn SpeechRecognizer>,
    ) -> Self {
        Self {
            state: Mutex::new(ControllerState {
                input_text: String::new(),
                translated_text: String::new(),
                source_lang: "en".to_string(),
                target_lang: "es".to_string(),
                phase: Phase::Idle,
                notice: None,
            }),
            busy: AtomicBool::new(false),
            translator,
            synthesizer,
            recognizer,
        }
    }

    /// Wire a controller to the deployed relay and speech services.
    pub fn from_config(relay_url: String, speech_config: &SpeechConfig) -> Self {
        let speech = Arc::new(SpeechServiceClient::new(speech_config.service_url.clone()));
        Self::new(
            Arc::new(RelayClient::new(relay_url)),
            speech.clone(),
            speech,
        )
    }

    fn state(&self) -> MutexGuard<'_, ControllerState> {
        self.state.lock().expect("controller state poisoned")
    }

    pub fn input_text(&self) -> String {
        self.state().input_text.clone()
    }

    pub fn set_input_text(&self, text: impl Into<String>) {
        self.state().input_text = text.into();
    }

    pub fn translated_text(&self) -> String {
        self.state().translated_text.clone()
    }

    pub fn source_lang(&self) -> String {
        self.state().source_lang.clone()
    }

    pub fn set_source_lang(&self, lang: impl Into<String>) {
        self.state().source_lang = lang.into();
    }

    pub fn target_lang(&self) -> String {
        self.state().target_lang.clone()
    }

    pub fn set_target_lang(&self, lang: impl Into<String>) {
        self.state().target_lang = lang.into();
    }

    pub fn phase(&self) -> Phase {
        self.state().phase
    }

    pub fn notice(&self) -> Option<Notice> {
        self.state().notice
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Send the current input through the relay and replace the displayed
    /// translation with the result.
    pub async fn submit_translation(&self) {
        let request = {
            let mut state = self.state();
            if state.input_text.trim().is_empty() {
                state.notice = Some(Notice::EmptyInput);
                return;
            }
            TranslationRequest {
                text: state.input_text.clone(),
                source_lang: state.source_lang.clone(),
                target_lang: state.target_lang.clone(),
            }
        };

        // A submit while one is in flight is ignored rather than queued or
        // cancelled; the in-flight result wins.
        let Some(_busy) = BusyGuard::acquire(&self.busy) else {
            debug!("translation already in flight, ignoring submit");
            return;
        };
        self.state().phase = Phase::Translating;

        match self.translator.translate(request).await {
            Ok(result) => {
                let mut state = self.state();
                state.translated_text = result.translated_text;
                state.phase = Phase::IdleWithResult;
                state.notice = None;
            }
            Err(err) => {
                error!(error = %err, "translation request failed");
                let mut state = self.state();
                state.phase = Phase::IdleWithError;
                state.notice = Some(Notice::TranslationFailed);
            }
        }
    }

    /// Hand text to the synthesizer, fire and forget.
    pub fn speak(&self, text: &str, lang: &str) {
        if text.trim().is_empty() {
            self.state().notice = Some(Notice::NothingToSpeak);
            return;
        }

        let synthesizer = Arc::clone(&self.synthesizer);
        let text = text.to_string();
        let lang = lang.to_string();
        tokio::spawn(async move {
            if let Err(err) = synthesizer.speak(&text, &lang).await {
                warn!(error = %err, "speech synthesis failed");
            }
        });
    }

    /// Start recognition and replace the input text with the first
    /// transcript. No cancellation or timeout; the recognizer decides when
    /// it is done.
    pub async fn listen(&self, lang: &str) {
        match self.recognizer.recognize(lang).await {
            Ok(transcript) => {
                self.state().input_text = transcript.text;
            }
            Err(err) => {
                warn!(error = %err, "speech recognition failed");
                self.state().notice = Some(Notice::RecognitionFailed);
            }
        }
    }
}
