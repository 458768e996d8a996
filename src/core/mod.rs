pub mod tts;

pub use tts::{
    AwsPollyProvider, SpeechProvider, SpeechSynthesisPipeline, SynthesisRequest, Voice,
    VoiceCatalog,
};
