//! Session state and the mentor orchestrator.
//!
//! One `MentorSession` per interactive session. All operations take
//! `&mut self`, so a session can never have two collaborator calls in
//! flight at once. Every generation follows the atomic replace-or-keep
//! contract: a failed call leaves the previously generated plan or quiz
//! untouched.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{GenerationError, SessionError};
use crate::model::{AnswerSheet, Certification, Identity, ScoreResult, StudyGoal};
use crate::prompts;
use crate::quiz::{self, ParsedQuiz};
use crate::scorer;
use crate::traits::{BlobStore, GenerateRequest, TextGenerator};
use crate::transcript;

/// Generation defaults for the session's provider calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationSettings {
    /// Model identifier passed to the provider.
    pub model: String,
    /// Maximum tokens per generation.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f64,
    /// Key prefix for persisted transcripts.
    pub transcript_prefix: String,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: "meta.llama3-70b-instruct-v1:0".to_string(),
            max_tokens: 2048,
            temperature: 0.7,
            transcript_prefix: "certmaster-answers".to_string(),
        }
    }
}

/// Process-local state for one interactive session. Nothing here outlives
/// the session; durable persistence is limited to transcripts written to
/// the blob store.
#[derive(Debug, Default)]
pub struct SessionState {
    goal: Option<StudyGoal>,
    plan: Option<String>,
    quiz: Option<ParsedQuiz>,
    last_question: Option<String>,
    last_answer: Option<String>,
}

impl SessionState {
    pub fn goal(&self) -> Option<&StudyGoal> {
        self.goal.as_ref()
    }

    pub fn plan(&self) -> Option<&str> {
        self.plan.as_deref()
    }

    pub fn quiz(&self) -> Option<&ParsedQuiz> {
        self.quiz.as_ref()
    }

    pub fn last_question(&self) -> Option<&str> {
        self.last_question.as_deref()
    }

    pub fn last_answer(&self) -> Option<&str> {
        self.last_answer.as_deref()
    }
}

/// One mentor question/answer exchange, with the key it was persisted
/// under when the storage write succeeded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentorExchange {
    pub question: String,
    pub answer: String,
    /// `None` when the transcript could not be persisted; the answer
    /// itself is still available in memory.
    pub stored_key: Option<String>,
}

/// The session orchestrator: owns the state and the collaborators.
pub struct MentorSession {
    identity: Identity,
    state: SessionState,
    generator: Arc<dyn TextGenerator>,
    store: Arc<dyn BlobStore>,
    settings: GenerationSettings,
}

impl MentorSession {
    pub fn new(
        identity: Identity,
        generator: Arc<dyn TextGenerator>,
        store: Arc<dyn BlobStore>,
        settings: GenerationSettings,
    ) -> Self {
        Self {
            identity,
            state: SessionState::default(),
            generator,
            store,
            settings,
        }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Set or replace the certification goal.
    pub fn set_goal(&mut self, certification: Certification, exam_date: NaiveDate) {
        self.state.goal = Some(StudyGoal::new(certification, exam_date));
    }

    /// Days until the exam as of today. Negative for past dates.
    pub fn days_left(&self) -> Result<i64, SessionError> {
        let goal = self.state.goal.ok_or(SessionError::GoalNotSet)?;
        Ok(goal.days_left(chrono::Local::now().date_naive()))
    }

    /// Generate a study plan for the current goal, replacing any prior
    /// plan wholesale. On failure the prior plan is preserved.
    pub async fn generate_plan(&mut self) -> anyhow::Result<&str> {
        let goal = self.state.goal.ok_or(SessionError::GoalNotSet)?;
        let days = goal.days_left(chrono::Local::now().date_naive());
        let prompt = prompts::study_plan(goal.certification.title(), days);

        let response = self.generator.generate(&self.request(prompt)).await?;
        tracing::debug!(
            tokens = response.token_usage.total_tokens,
            latency_ms = response.latency_ms,
            "study plan generated"
        );
        Ok(self.state.plan.insert(response.text).as_str())
    }

    /// Generate a quiz on `topic`, replacing any prior quiz wholesale.
    ///
    /// Blocks the parser cannot structure are surfaced as warnings, not
    /// errors. If nothing parses, the call fails and a previously
    /// generated quiz stays in place.
    pub async fn generate_quiz(&mut self, topic: &str) -> anyhow::Result<&ParsedQuiz> {
        let goal = self.state.goal.ok_or(SessionError::GoalNotSet)?;
        let prompt = prompts::quiz(topic, goal.certification.title());

        let response = self.generator.generate(&self.request(prompt)).await?;
        let parsed = quiz::parse_quiz(&response.text);
        for warning in &parsed.warnings {
            tracing::warn!(block = warning.block, "skipped quiz block: {}", warning.message);
        }
        if parsed.items.is_empty() {
            return Err(GenerationError::UnusableOutput(
                "no quiz questions could be parsed from the model output".into(),
            )
            .into());
        }
        Ok(self.state.quiz.insert(parsed))
    }

    /// Score the current quiz and discard it. Each generated quiz supports
    /// exactly one scoring pass.
    pub fn submit_quiz(&mut self, answers: &AnswerSheet) -> Result<ScoreResult, SessionError> {
        let quiz = self.state.quiz.take().ok_or(SessionError::NoQuiz)?;
        Ok(scorer::score(&quiz.items, answers))
    }

    /// Record a free-text question for the mentor.
    pub fn ask(&mut self, question: &str) -> Result<(), SessionError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(SessionError::EmptyQuestion);
        }
        self.state.last_question = Some(question.to_string());
        Ok(())
    }

    /// Generate the mentor's answer to the last recorded question and
    /// persist the transcript. A storage failure is reported through
    /// `stored_key: None` and a warning; the in-memory answer survives.
    pub async fn mentor_answer(&mut self) -> anyhow::Result<MentorExchange> {
        let question = self
            .state
            .last_question
            .clone()
            .ok_or(SessionError::NoQuestion)?;

        let response = self
            .generator
            .generate(&self.request(prompts::mentor(&question)))
            .await?;
        let answer = response.text;
        self.state.last_answer = Some(answer.clone());

        let key = transcript::transcript_key(&self.settings.transcript_prefix, self.identity.name());
        let payload = transcript::render(&question, &answer);
        let stored_key = match self.store.put(&key, payload.as_bytes()).await {
            Ok(()) => Some(key),
            Err(e) => {
                tracing::warn!("failed to persist transcript: {e:#}");
                None
            }
        };

        Ok(MentorExchange {
            question,
            answer,
            stored_key,
        })
    }

    fn request(&self, prompt: String) -> GenerateRequest {
        GenerateRequest {
            model: self.settings.model.clone(),
            prompt,
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        }
    }
}
