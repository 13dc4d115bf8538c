//! Tool registry: one instance per catalog entry, dispatch by name.

use crate::ai::{CompletionProvider, ContentImprover, OpenAiClient, SlopScorer};
use crate::analyzer::{
    AiPhraseDetector, ClicheDetector, PassiveVoiceDetector, ReadabilityCalculator,
    RepetitionFinder, RunOnFinder,
};
use crate::cleaner::{
    EmojiCleaner, FillerWordsCleaner, HedgingCleaner, RedundancyCleaner, WhitespaceNormalizer,
};
use crate::config::Config;
use crate::tools::{Tool, ToolDescriptor, ToolName};
use crate::{ToolArgs, ToolResult};
use std::collections::HashMap;
use std::sync::Arc;

/// Immutable map from identifier to tool, built once from the full catalog.
///
/// Shareable across threads; every call allocates its own working data.
pub struct ToolRegistry {
    tools: HashMap<ToolName, Box<dyn Tool>>,
}

impl ToolRegistry {
    /// Registry with default options. The AI tools use the OpenAI client when
    /// `OPENAI_API_KEY` is set and report a configuration error otherwise.
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    /// Registry whose option defaults and AI client come from `config`
    pub fn from_config(config: &Config) -> Self {
        let provider = OpenAiClient::from_config(&config.ai)
            .map(|client| Arc::new(client) as Arc<dyn CompletionProvider>);
        if provider.is_none() {
            tracing::debug!(
                env = %config.ai.api_key_env,
                "no API key found, AI tools unavailable"
            );
        }
        Self::with_provider(config, provider)
    }

    /// Registry using an explicit completion provider (or none)
    pub fn with_provider(config: &Config, provider: Option<Arc<dyn CompletionProvider>>) -> Self {
        let tools = ToolName::ALL
            .iter()
            .map(|&name| (name, build_tool(name, config, provider.clone())))
            .collect();
        Self { tools }
    }

    pub fn get(&self, name: ToolName) -> Option<&dyn Tool> {
        self.tools.get(&name).map(|t| t.as_ref())
    }

    /// Descriptors for every tool, in catalog order
    pub fn list_tools(&self) -> Vec<ToolDescriptor> {
        ToolName::ALL
            .iter()
            .filter_map(|name| self.tools.get(name))
            .map(|tool| tool.descriptor())
            .collect()
    }

    /// Dispatch by string identifier. Unknown names come back as a failed
    /// result listing the valid ones.
    pub fn invoke(&self, name: &str, args: &ToolArgs) -> ToolResult {
        match name.parse::<ToolName>() {
            Ok(tool) => self.invoke_tool(tool, args),
            Err(e) => {
                tracing::debug!(tool = name, "unknown tool requested");
                ToolResult::failure(e)
            }
        }
    }

    pub fn invoke_tool(&self, name: ToolName, args: &ToolArgs) -> ToolResult {
        let Some(tool) = self.tools.get(&name) else {
            return ToolResult::failure(format!("Tool not registered: {}", name));
        };
        let result = tool.execute(args);
        tracing::debug!(tool = %name, success = result.is_success(), "tool invoked");
        result
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn build_tool(
    name: ToolName,
    config: &Config,
    provider: Option<Arc<dyn CompletionProvider>>,
) -> Box<dyn Tool> {
    let defaults = &config.defaults;
    match name {
        ToolName::DetectAiPhrases => Box::new(AiPhraseDetector),
        ToolName::DetectCliches => Box::new(ClicheDetector),
        ToolName::DetectPassiveVoice => Box::new(PassiveVoiceDetector),
        ToolName::CalculateReadability => Box::new(ReadabilityCalculator),
        ToolName::DetectRepetition => {
            Box::new(RepetitionFinder::with_default_min_length(defaults.min_length))
        }
        ToolName::DetectRunOnSentences => {
            Box::new(RunOnFinder::with_default_max_words(defaults.max_words))
        }
        ToolName::RemoveFillerWords => Box::new(FillerWordsCleaner),
        ToolName::RemoveHedging => Box::new(HedgingCleaner),
        ToolName::RemoveRedundancies => Box::new(RedundancyCleaner),
        ToolName::RemoveEmojis => Box::new(EmojiCleaner),
        ToolName::NormalizeWhitespace => Box::new(WhitespaceNormalizer),
        ToolName::AnalyzeContentForSlop => {
            Box::new(SlopScorer::new(provider, config.ai.api_key_env.clone()))
        }
        ToolName::ImproveContentFromSlop => Box::new(
            ContentImprover::new(provider, config.ai.api_key_env.clone())
                .with_default_tone(defaults.target_tone.clone()),
        ),
    }
}
