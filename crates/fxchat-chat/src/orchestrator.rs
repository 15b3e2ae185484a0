//! Chat orchestrator: extraction, rate lookup and generative fallback.
//!
//! A message either resolves to a full conversion (amount + two currencies)
//! and is answered from the rate service, or it is handed to the text
//! generator. Every failure ends in a canned apology.

use std::sync::Arc;

use fxchat_rates::RateFetcher;

use crate::error::ChatError;
use crate::llm::TextGenerator;
use crate::parser::IntentExtractor;
use crate::response::{conversion_reply, fallback_prompt, ERROR_REPLY};

/// Where a reply came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySource {
    /// Structured conversion answered from the rate service.
    Conversion,
    /// Text produced by the generative fallback.
    Generated,
    /// Canned apology after an error.
    Apology,
}

/// A chat answer and its provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatReply {
    pub text: String,
    pub source: ReplySource,
}

/// Central coordinator for the `/chat` flow.
pub struct ChatOrchestrator {
    extractor: IntentExtractor,
    rates: RateFetcher,
    generator: Arc<dyn TextGenerator>,
}

impl ChatOrchestrator {
    pub fn new(rates: RateFetcher, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            extractor: IntentExtractor::new(),
            rates,
            generator,
        }
    }

    /// Validate and answer a user message.
    ///
    /// Only an empty (or whitespace-only) message is an error; everything
    /// after validation degrades to an apology reply instead of failing.
    pub async fn handle_message(&self, message: &str) -> Result<ChatReply, ChatError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        Ok(self.respond(message).await)
    }

    /// Answer a message, converting any error into [`ERROR_REPLY`].
    pub async fn respond(&self, message: &str) -> ChatReply {
        match self.try_respond(message).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!(error = %e, "Error generating response");
                ChatReply {
                    text: ERROR_REPLY.to_string(),
                    source: ReplySource::Apology,
                }
            }
        }
    }

    async fn try_respond(&self, message: &str) -> Result<ChatReply, ChatError> {
        let intent = self.extractor.extract(message);

        if let Some((amount, from, to)) = intent.complete() {
            // A failed lookup falls through to the generator.
            if let Some(rate) = self.rates.rate(from, to).await {
                tracing::info!(amount, from, to, rate, "Answered conversion from chat");
                return Ok(ChatReply {
                    text: conversion_reply(amount, from, to, rate),
                    source: ReplySource::Conversion,
                });
            }
            tracing::info!(from, to, "No rate for chat conversion, using generator");
        }

        let text = self.generator.generate(&fallback_prompt(message)).await?;
        Ok(ChatReply {
            text,
            source: ReplySource::Generated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use fxchat_rates::{RateError, RateProvider};
    use std::sync::Mutex;

    struct FixedRate(Option<f64>);

    #[async_trait]
    impl RateProvider for FixedRate {
        async fn fetch_rate(&self, _base: &str, target: &str) -> Result<f64, RateError> {
            self.0.ok_or_else(|| RateError::MissingRate(target.to_string()))
        }
    }

    /// Echoes a fixed reply and records every prompt it receives.
    struct ScriptedGenerator {
        reply: Result<String, String>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedGenerator {
        fn ok(text: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(text.to_string()),
                prompts: Mutex::new(Vec::new()),
            })
        }

        fn failing(msg: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(msg.to_string()),
                prompts: Mutex::new(Vec::new()),
            })
        }

        fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, ChatError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply.clone().map_err(ChatError::LlmError)
        }
    }

    fn orchestrator(rate: Option<f64>, generator: Arc<ScriptedGenerator>) -> ChatOrchestrator {
        ChatOrchestrator::new(RateFetcher::new(Arc::new(FixedRate(rate))), generator)
    }

    #[tokio::test]
    async fn test_complete_intent_uses_template() {
        let generator = ScriptedGenerator::ok("unused");
        let orch = orchestrator(Some(0.92), generator.clone());

        let reply = orch.handle_message("Convert 100 USD to EUR").await.unwrap();
        assert_eq!(reply.source, ReplySource::Conversion);
        assert!(reply.text.contains("Converting 100.0 USD to EUR:"));
        assert!(reply.text.contains("1 USD = 0.92 EUR"));
        assert!(reply.text.contains("Converted Amount: 92.0 EUR"));
        assert!(generator.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_usdt_labels_survive_normalization() {
        let orch = orchestrator(Some(150.0), ScriptedGenerator::ok("unused"));
        let reply = orch.handle_message("2 usdt to yen").await.unwrap();
        assert!(reply.text.contains("Converting 2.0 USDT to JPY:"));
        assert!(reply.text.contains("Converted Amount: 300.0 JPY"));
    }

    #[tokio::test]
    async fn test_greeting_goes_to_generator_verbatim() {
        let generator = ScriptedGenerator::ok("Hi! Ask me to convert 100 USD to EUR.");
        let orch = orchestrator(Some(0.92), generator.clone());

        let reply = orch.handle_message("hello").await.unwrap();
        assert_eq!(reply.source, ReplySource::Generated);
        assert_eq!(reply.text, "Hi! Ask me to convert 100 USD to EUR.");

        let prompts = generator.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Address their query: hello"));
    }

    #[tokio::test]
    async fn test_rate_failure_falls_back_to_generator() {
        let generator = ScriptedGenerator::ok("fallback text");
        let orch = orchestrator(None, generator.clone());

        let reply = orch.handle_message("Convert 100 USD to EUR").await.unwrap();
        assert_eq!(reply.source, ReplySource::Generated);
        assert_eq!(reply.text, "fallback text");
        assert_eq!(generator.prompts().len(), 1);
    }

    #[tokio::test]
    async fn test_partial_intent_goes_to_generator() {
        let generator = ScriptedGenerator::ok("which currency?");
        let orch = orchestrator(Some(1.0), generator.clone());

        let reply = orch.handle_message("convert 100 dollar").await.unwrap();
        assert_eq!(reply.source, ReplySource::Generated);
        assert_eq!(reply.text, "which currency?");
    }

    #[tokio::test]
    async fn test_generator_error_becomes_apology() {
        let orch = orchestrator(Some(1.0), ScriptedGenerator::failing("quota exceeded"));

        let reply = orch.handle_message("what is money").await.unwrap();
        assert_eq!(reply.source, ReplySource::Apology);
        assert_eq!(reply.text, ERROR_REPLY);
    }

    #[tokio::test]
    async fn test_empty_message_is_rejected() {
        let orch = orchestrator(Some(1.0), ScriptedGenerator::ok("unused"));
        assert!(matches!(
            orch.handle_message("").await,
            Err(ChatError::EmptyMessage)
        ));
        assert!(matches!(
            orch.handle_message("   \n").await,
            Err(ChatError::EmptyMessage)
        ));
    }

    #[tokio::test]
    async fn test_message_is_trimmed_before_prompting() {
        let generator = ScriptedGenerator::ok("ok");
        let orch = orchestrator(None, generator.clone());

        orch.handle_message("  hi there  ").await.unwrap();
        assert!(generator.prompts()[0].contains("Address their query: hi there\n"));
    }
}
