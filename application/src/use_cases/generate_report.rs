//! Generate Report use case
//!
//! Orchestrates the full pipeline for one submission:
//!
//! 1. Credential guard: both keys must be present before anything runs
//! 2. Reframing stage: one model call, split into at most five paragraphs
//! 3. Enrichment stage: one image per paragraph, strictly in order
//! 4. Assembly: blocks joined into the markdown report
//!
//! The session's previous report is cleared once the guard passes, and the
//! new report is stored only when every stage succeeds.

use crate::config::GenerationParams;
use crate::ports::conversation_logger::ConversationLogger;
use crate::ports::image_search::ImageSearchPort;
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::enrich::{EnrichError, EnrichParagraphUseCase};
use crate::use_cases::reframe::{ReframeError, ReframeUseCase};
use relief_domain::{
    CredentialKind, MissingCredential, ReliefSession, Report, Stage, StressInput,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum GenerateReportError {
    #[error(transparent)]
    MissingCredential(#[from] MissingCredential),

    #[error("Reframing failed: {0}")]
    Reframe(#[from] ReframeError),

    #[error("Enrichment failed for paragraph {} of {total}: {source}", .index + 1)]
    Enrich {
        index: usize,
        total: usize,
        #[source]
        source: EnrichError,
    },
}

impl GenerateReportError {
    /// The missing credential, when the guard blocked the run
    pub fn missing_credential(&self) -> Option<CredentialKind> {
        match self {
            GenerateReportError::MissingCredential(missing) => Some(missing.kind()),
            _ => None,
        }
    }
}

/// Use case for generating a stress relief report
pub struct GenerateReportUseCase {
    reframe: ReframeUseCase,
    enrich: EnrichParagraphUseCase,
    params: GenerationParams,
}

impl GenerateReportUseCase {
    pub fn new(
        gateway: Arc<dyn LlmGateway>,
        image_search: Arc<dyn ImageSearchPort>,
        params: GenerationParams,
    ) -> Self {
        Self {
            reframe: ReframeUseCase::new(gateway.clone()),
            enrich: EnrichParagraphUseCase::new(gateway, image_search),
            params,
        }
    }

    /// Create with a conversation logger shared by both stages.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.reframe = self.reframe.with_conversation_logger(logger.clone());
        self.enrich = self.enrich.with_conversation_logger(logger);
        self
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        session: &mut ReliefSession,
        input: StressInput,
    ) -> Result<Report, GenerateReportError> {
        self.execute_with_progress(session, input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        session: &mut ReliefSession,
        input: StressInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<Report, GenerateReportError> {
        let credentials = session.credentials().clone();
        let resolved = credentials.require()?;

        session.begin_submission();

        // Reframing stage
        progress.on_stage_start(&Stage::Reframing, 1);
        let paragraphs = match self
            .reframe
            .execute(resolved.text_generation, &input, &self.params)
            .await
        {
            Ok(paragraphs) => {
                progress.on_task_complete(&Stage::Reframing, 0, true);
                progress.on_stage_complete(&Stage::Reframing);
                paragraphs
            }
            Err(e) => {
                progress.on_task_complete(&Stage::Reframing, 0, false);
                progress.on_stage_complete(&Stage::Reframing);
                return Err(e.into());
            }
        };

        // Enrichment stage, one paragraph at a time
        let total = paragraphs.len();
        progress.on_stage_start(&Stage::Enrichment, total);

        let mut blocks = Vec::with_capacity(total);
        for (index, paragraph) in paragraphs.iter().enumerate() {
            match self
                .enrich
                .execute(
                    resolved,
                    index,
                    paragraph,
                    input.tone(),
                    &self.params,
                    progress,
                )
                .await
            {
                Ok(block) => {
                    progress.on_task_complete(&Stage::Enrichment, index, true);
                    blocks.push(block);
                }
                Err(source) => {
                    warn!("Enrichment of paragraph {}/{} failed: {}", index + 1, total, source);
                    progress.on_task_complete(&Stage::Enrichment, index, false);
                    progress.on_stage_complete(&Stage::Enrichment);
                    return Err(GenerateReportError::Enrich {
                        index,
                        total,
                        source,
                    });
                }
            }
        }
        progress.on_stage_complete(&Stage::Enrichment);

        let report = Report::from_blocks(blocks);
        info!(
            "Report ready: {} block(s), {} bytes",
            report.len(),
            report.markdown().len()
        );

        session.store_report(report.clone());
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::llm_gateway::GatewayError;
    use crate::use_cases::test_support::{
        MockImageSearch, RecordingProgress, ScriptedGateway, full_credentials, paragraphs_reply,
        sample_input,
    };
    use relief_domain::{Credentials, ImageReference, Paragraph, ReportBlock};

    /// Reframe reply with `n` paragraphs, then a query and a URL per paragraph
    fn happy_script(n: usize) -> Vec<Result<String, GatewayError>> {
        let mut replies = vec![Ok(paragraphs_reply(n))];
        for i in 1..=n.min(5) {
            replies.push(Ok(format!("calm theme {}", i)));
            replies.push(Ok(format!(
                "https://media.giphy.com/media/q{}-1/giphy.gif",
                i
            )));
        }
        replies
    }

    fn use_case(gateway: Arc<ScriptedGateway>, search: Arc<MockImageSearch>) -> GenerateReportUseCase {
        GenerateReportUseCase::new(gateway, search, GenerationParams::default())
    }

    #[tokio::test]
    async fn test_five_paragraphs_in_order() {
        let gateway = Arc::new(ScriptedGateway::new(happy_script(5)));
        let search = Arc::new(MockImageSearch::new());
        let mut session = ReliefSession::new(full_credentials());

        let report = use_case(gateway.clone(), search.clone())
            .execute(&mut session, sample_input())
            .await
            .unwrap();

        assert_eq!(report.len(), 5);
        for (i, block) in report.blocks().iter().enumerate() {
            assert_eq!(block.paragraph.text(), format!("P{}", i + 1));
            assert_eq!(
                block.image.url(),
                format!("https://media.giphy.com/media/q{}-1/giphy.gif", i + 1)
            );
        }
        assert_eq!(search.calls(), 5);
        // One reframe session plus one per paragraph
        assert_eq!(gateway.sessions_created(), 6);
        assert_eq!(session.last_report(), Some(&report));
    }

    #[tokio::test]
    async fn test_three_paragraphs_not_padded() {
        let gateway = Arc::new(ScriptedGateway::new(happy_script(3)));
        let search = Arc::new(MockImageSearch::new());
        let mut session = ReliefSession::new(full_credentials());

        let report = use_case(gateway, search.clone())
            .execute(&mut session, sample_input())
            .await
            .unwrap();

        assert_eq!(report.len(), 3);
        assert_eq!(search.calls(), 3);
    }

    #[tokio::test]
    async fn test_eight_paragraphs_truncated_to_five() {
        let gateway = Arc::new(ScriptedGateway::new(happy_script(8)));
        let search = Arc::new(MockImageSearch::new());
        let mut session = ReliefSession::new(full_credentials());

        let report = use_case(gateway, search.clone())
            .execute(&mut session, sample_input())
            .await
            .unwrap();

        assert_eq!(report.len(), 5);
        assert_eq!(report.blocks()[4].paragraph.text(), "P5");
        assert_eq!(search.calls(), 5);
    }

    #[tokio::test]
    async fn test_missing_image_search_key_blocks_all_calls() {
        let gateway = Arc::new(ScriptedGateway::new(happy_script(5)));
        let search = Arc::new(MockImageSearch::new());
        let mut session = ReliefSession::new(
            Credentials::new().with(CredentialKind::TextGeneration, "sk"),
        );

        let err = use_case(gateway.clone(), search.clone())
            .execute(&mut session, sample_input())
            .await
            .unwrap_err();

        assert_eq!(err.missing_credential(), Some(CredentialKind::ImageSearch));
        assert_eq!(gateway.sessions_created(), 0);
        assert_eq!(search.calls(), 0);
    }

    #[tokio::test]
    async fn test_missing_text_key_is_distinct() {
        let gateway = Arc::new(ScriptedGateway::new(happy_script(5)));
        let search = Arc::new(MockImageSearch::new());
        let mut session = ReliefSession::new(
            Credentials::new().with(CredentialKind::ImageSearch, "gk"),
        );

        let err = use_case(gateway.clone(), search.clone())
            .execute(&mut session, sample_input())
            .await
            .unwrap_err();

        assert_eq!(err.missing_credential(), Some(CredentialKind::TextGeneration));
        assert_eq!(gateway.sessions_created(), 0);
        assert_eq!(search.calls(), 0);
    }

    #[tokio::test]
    async fn test_missing_key_keeps_previous_report() {
        let previous = Report::from_blocks(vec![ReportBlock::new(
            Paragraph::new("Earlier"),
            ImageReference::new("https://x/old.gif"),
        )]);
        let mut session = ReliefSession::new(Credentials::new());
        session.store_report(previous.clone());

        let err = use_case(
            Arc::new(ScriptedGateway::new(vec![])),
            Arc::new(MockImageSearch::new()),
        )
        .execute(&mut session, sample_input())
        .await
        .unwrap_err();

        assert!(err.missing_credential().is_some());
        assert_eq!(session.last_report(), Some(&previous));
    }

    #[tokio::test]
    async fn test_enrichment_failure_discards_report() {
        let gateway = Arc::new(ScriptedGateway::new(happy_script(5)));
        let search = Arc::new(MockImageSearch::failing_on(3));
        let mut session = ReliefSession::new(full_credentials());
        session.store_report(Report::from_blocks(vec![]));

        let err = use_case(gateway, search.clone())
            .execute(&mut session, sample_input())
            .await
            .unwrap_err();

        match err {
            GenerateReportError::Enrich { index, total, .. } => {
                assert_eq!(index, 2);
                assert_eq!(total, 5);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(search.calls(), 3);
        assert!(session.last_report().is_none());
    }

    #[tokio::test]
    async fn test_reframe_failure_aborts_before_enrichment() {
        let gateway = Arc::new(ScriptedGateway::new(vec![Err(GatewayError::ConnectionError(
            "dns".to_string(),
        ))]));
        let search = Arc::new(MockImageSearch::new());
        let mut session = ReliefSession::new(full_credentials());

        let err = use_case(gateway, search.clone())
            .execute(&mut session, sample_input())
            .await
            .unwrap_err();

        assert!(matches!(err, GenerateReportError::Reframe(_)));
        assert_eq!(search.calls(), 0);
        assert!(session.last_report().is_none());
    }

    #[tokio::test]
    async fn test_progress_events_follow_paragraph_order() {
        let gateway = Arc::new(ScriptedGateway::new(happy_script(2)));
        let search = Arc::new(MockImageSearch::new());
        let mut session = ReliefSession::new(full_credentials());
        let progress = RecordingProgress::default();

        use_case(gateway, search)
            .execute_with_progress(&mut session, sample_input(), &progress)
            .await
            .unwrap();

        assert_eq!(
            progress.events(),
            vec![
                "start reframing 1",
                "done reframing 0 ok",
                "complete reframing",
                "start enrichment 2",
                "query 0 calm theme 1",
                "done enrichment 0 ok",
                "query 1 calm theme 2",
                "done enrichment 1 ok",
                "complete enrichment",
            ]
        );
    }

    #[tokio::test]
    async fn test_error_message_is_one_based() {
        let gateway = Arc::new(ScriptedGateway::new(happy_script(5)));
        let search = Arc::new(MockImageSearch::failing_on(1));
        let mut session = ReliefSession::new(full_credentials());

        let err = use_case(gateway, search)
            .execute(&mut session, sample_input())
            .await
            .unwrap_err();

        assert!(err.to_string().starts_with("Enrichment failed for paragraph 1 of 5"));
    }
}
