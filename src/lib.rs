pub mod error;
pub mod io;
pub mod models;
pub mod normalize;
pub mod sentiment;
pub mod stages;

pub use error::{AnalysisError, Result};
pub use io::{
    flatten_conferences, parse_conferences_file, parse_conferences_json, parse_topics_file, AnalysisReport,
    HumanReport, ReportMetadata,
};
pub use models::{
    AnalysisConfig, ConferenceKey, Intervention, NormalizedSpeaker, SpeakerGroup, Topic, TurnStats,
    DEFAULT_HEAD_OF_STATE, JOURNALIST_ROLE,
};
pub use normalize::{clean_text, forward_fill, parse_spanish_date, SpeakerNormalizer};
pub use sentiment::{HttpSentimentClient, Prediction, SentimentAnalyzer, SentimentConfig, SentimentLabel};
pub use stages::{run_analysis, segment, top_speakers, turn_taking_stats, TurnCounts, TurnMode};
