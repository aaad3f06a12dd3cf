pub mod interface;
pub mod client;

pub use interface::{SpeechError, SpeechRecognizer, SpeechSynthesizer, Transcript};
pub use client::SpeechServiceClient;
