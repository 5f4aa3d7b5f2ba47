//! Session state machine driving one analysis cycle at a time.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use reveo_gemini::{AnalysisError, GeminiClient, MediaAnalyzer};
use reveo_media::{validate_upload, RawUpload};
use reveo_models::{AnalysisStatus, MediaPayload, SubmissionId, VeoPrompt};

use crate::error::SubmitError;

/// Generic end-user notice for a failed analysis. The underlying cause never
/// reaches user-facing copy; it stays in session state for diagnostics.
pub const ERROR_NOTICE: &str =
    "We couldn't process this file. It might be too large or the format is unsupported.";

/// An accepted upload, owned by the session until reset or superseded.
#[derive(Debug, Clone)]
pub struct Submission {
    /// Correlation ID threaded through log lines.
    pub id: SubmissionId,

    /// The validated media payload.
    pub payload: MediaPayload,

    /// When the submission was accepted.
    pub submitted_at: DateTime<Utc>,
}

impl Submission {
    fn new(payload: MediaPayload) -> Self {
        Self {
            id: SubmissionId::new(),
            payload,
            submitted_at: Utc::now(),
        }
    }
}

/// Lifecycle state of the single analysis session.
///
/// Variants own their data, so contradictory combinations (a result without a
/// file, a file while idle) cannot be represented. Presentation layers key
/// their branches on [`SessionState::status`] and read the payload through
/// the accessors.
#[derive(Debug)]
pub enum SessionState {
    /// No file submitted; waiting for input.
    Idle,

    /// The inference request for this submission is in flight.
    Analyzing { submission: Submission },

    /// Analysis succeeded.
    Complete {
        submission: Submission,
        result: VeoPrompt,
        completed_at: DateTime<Utc>,
    },

    /// Analysis failed; the cause is retained for diagnostics only.
    Error {
        submission: Submission,
        cause: AnalysisError,
        failed_at: DateTime<Utc>,
    },
}

impl SessionState {
    /// The presentation-facing status discriminant.
    pub fn status(&self) -> AnalysisStatus {
        match self {
            Self::Idle => AnalysisStatus::Idle,
            Self::Analyzing { .. } => AnalysisStatus::Analyzing,
            Self::Complete { .. } => AnalysisStatus::Complete,
            Self::Error { .. } => AnalysisStatus::Error,
        }
    }

    /// The current submission, present from acceptance until reset.
    pub fn submission(&self) -> Option<&Submission> {
        match self {
            Self::Idle => None,
            Self::Analyzing { submission }
            | Self::Complete { submission, .. }
            | Self::Error { submission, .. } => Some(submission),
        }
    }

    /// The current file, if any.
    pub fn current_file(&self) -> Option<&MediaPayload> {
        self.submission().map(|s| &s.payload)
    }

    /// The current result; present exactly when the status is `Complete`.
    pub fn current_result(&self) -> Option<&VeoPrompt> {
        match self {
            Self::Complete { result, .. } => Some(result),
            _ => None,
        }
    }

    /// The cause of the last failed analysis, for diagnostics only.
    pub fn last_error(&self) -> Option<&AnalysisError> {
        match self {
            Self::Error { cause, .. } => Some(cause),
            _ => None,
        }
    }

    /// The generic user-facing notice when the session is in `Error`.
    pub fn user_notice(&self) -> Option<&'static str> {
        match self {
            Self::Error { .. } => Some(ERROR_NOTICE),
            _ => None,
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::Idle
    }
}

/// A single analysis session.
///
/// Holds the current file, the current result, and the lifecycle state, and
/// exposes the two transitions a presentation layer drives: [`Session::submit`]
/// and [`Session::reset`]. One session runs one analysis at a time.
pub struct Session<A> {
    analyzer: A,
    state: SessionState,
}

impl Session<GeminiClient> {
    /// Create a session backed by the live Gemini client, configured from the
    /// environment. Fails when the API key is absent.
    pub fn from_env() -> Result<Self, AnalysisError> {
        Ok(Self::new(GeminiClient::new()?))
    }
}

impl<A: MediaAnalyzer> Session<A> {
    /// Create an idle session.
    pub fn new(analyzer: A) -> Self {
        Self {
            analyzer,
            state: SessionState::Idle,
        }
    }

    /// Current session state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Current status discriminant.
    pub fn status(&self) -> AnalysisStatus {
        self.state.status()
    }

    /// Submit a file for analysis.
    ///
    /// Permitted from `Idle` and from the terminal states, which re-arm: a
    /// fresh submission implicitly resets first, dropping the previous file,
    /// preview, and result. While an analysis is in flight the submission is
    /// rejected with [`SubmitError::AnalysisInFlight`].
    ///
    /// Validation failures are returned to the caller without touching
    /// session state. Once a submission is accepted the call returns `Ok`
    /// with the final status of the cycle: `Complete` on success, `Error`
    /// when the analysis failed (the cause is retained in session state).
    ///
    /// A submit future dropped mid-analysis leaves the session in
    /// `Analyzing`; [`Session::reset`] recovers it.
    pub async fn submit(&mut self, upload: RawUpload) -> Result<AnalysisStatus, SubmitError> {
        if self.state.status().is_in_progress() {
            return Err(SubmitError::AnalysisInFlight);
        }

        let payload = validate_upload(upload)?;
        let submission = Submission::new(payload);

        info!(
            submission_id = %submission.id,
            kind = %submission.payload.kind,
            size_bytes = submission.payload.len(),
            "Submission accepted"
        );

        // Entering Analyzing supersedes any previous submission: the old
        // file, preview, and result are dropped here.
        self.state = SessionState::Analyzing { submission };

        let outcome = match &self.state {
            SessionState::Analyzing { submission } => {
                self.analyzer.analyze(&submission.payload).await
            }
            _ => unreachable!("state was set to Analyzing above"),
        };

        let SessionState::Analyzing { submission } =
            std::mem::replace(&mut self.state, SessionState::Idle)
        else {
            unreachable!("submit holds exclusive access while analyzing");
        };

        let elapsed_ms = Utc::now()
            .signed_duration_since(submission.submitted_at)
            .num_milliseconds();

        match outcome {
            Ok(result) => {
                info!(
                    submission_id = %submission.id,
                    elapsed_ms,
                    "Analysis complete"
                );
                self.state = SessionState::Complete {
                    submission,
                    result,
                    completed_at: Utc::now(),
                };
                Ok(AnalysisStatus::Complete)
            }
            Err(cause) => {
                warn!(
                    submission_id = %submission.id,
                    elapsed_ms,
                    error = %cause,
                    "Analysis failed"
                );
                self.state = SessionState::Error {
                    submission,
                    cause,
                    failed_at: Utc::now(),
                };
                Ok(AnalysisStatus::Error)
            }
        }
    }

    /// Reset the session to `Idle` from any state.
    ///
    /// Always succeeds, always synchronous, idempotent. Drops the current
    /// file, preview, and result.
    pub fn reset(&mut self) {
        if !matches!(self.state, SessionState::Idle) {
            debug!("Session reset");
        }
        self.state = SessionState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use reveo_gemini::AnalysisResult;
    use reveo_models::MediaKind;

    mockall::mock! {
        Analyzer {}

        #[async_trait]
        impl MediaAnalyzer for Analyzer {
            async fn analyze(&self, payload: &MediaPayload) -> AnalysisResult<VeoPrompt>;
        }
    }

    /// Analyzer whose request never completes; used to park the session in
    /// `Analyzing`.
    struct PendingAnalyzer;

    #[async_trait]
    impl MediaAnalyzer for PendingAnalyzer {
        async fn analyze(&self, _payload: &MediaPayload) -> AnalysisResult<VeoPrompt> {
            std::future::pending().await
        }
    }

    fn sample_prompt(subject: &str) -> VeoPrompt {
        VeoPrompt {
            cinematography: "Locked-off wide shot".to_string(),
            subject: subject.to_string(),
            action: "Standing still".to_string(),
            context_setting: "Empty stage".to_string(),
            style_ambiance: "High-key lighting".to_string(),
            audio: String::new(),
            negative_prompt: "watermarks".to_string(),
        }
    }

    fn png_upload(size: usize) -> RawUpload {
        RawUpload::new("image/png", vec![0u8; size])
    }

    fn jpeg_upload(size: usize) -> RawUpload {
        RawUpload::new("image/jpeg", vec![0u8; size])
    }

    #[tokio::test]
    async fn submit_success_reaches_complete() {
        let mut mock = MockAnalyzer::new();
        mock.expect_analyze()
            .withf(|payload| payload.kind == MediaKind::Image)
            .times(1)
            .returning(|_| Ok(sample_prompt("A dancer")));

        let mut session = Session::new(mock);
        // A 2 MB PNG upload.
        let status = session.submit(png_upload(2 * 1024 * 1024)).await.unwrap();

        assert_eq!(status, AnalysisStatus::Complete);
        assert_eq!(session.status(), AnalysisStatus::Complete);

        let result = session.state().current_result().expect("result present");
        assert_eq!(result.subject, "A dancer");
        assert!(!result.cinematography.is_empty());
        assert!(!result.negative_prompt.is_empty());

        let file = session.state().current_file().expect("file present");
        assert_eq!(file.kind, MediaKind::Image);
        assert!(session.state().user_notice().is_none());
        assert!(session.state().last_error().is_none());
    }

    #[tokio::test]
    async fn submit_analysis_failure_reaches_error_and_reset_recovers() {
        let mut mock = MockAnalyzer::new();
        mock.expect_analyze()
            .times(1)
            .returning(|_| Err(AnalysisError::request_failed("simulated network error")));

        let mut session = Session::new(mock);
        // A valid 1 MB JPEG; the network fails underneath.
        let status = session.submit(jpeg_upload(1024 * 1024)).await.unwrap();

        assert_eq!(status, AnalysisStatus::Error);
        assert_eq!(session.status(), AnalysisStatus::Error);
        assert!(session.state().current_result().is_none());
        assert!(session.state().current_file().is_some());
        assert!(matches!(
            session.state().last_error(),
            Some(AnalysisError::RequestFailed(_))
        ));
        assert_eq!(session.state().user_notice(), Some(ERROR_NOTICE));

        session.reset();
        assert_eq!(session.status(), AnalysisStatus::Idle);
        assert!(session.state().current_file().is_none());
        assert!(session.state().current_result().is_none());
        assert!(session.state().last_error().is_none());
    }

    #[tokio::test]
    async fn rejected_upload_never_reaches_analyzer_or_state() {
        // No expectations: any analyzer call would panic.
        let mock = MockAnalyzer::new();
        let mut session = Session::new(mock);

        let err = session
            .submit(RawUpload::new("text/plain", b"not media".to_vec()))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            SubmitError::Validation(reveo_media::IngestError::UnsupportedType { .. })
        ));
        assert_eq!(session.status(), AnalysisStatus::Idle);
        assert!(session.state().current_file().is_none());
    }

    #[tokio::test]
    async fn rejected_upload_leaves_terminal_state_intact() {
        let mut mock = MockAnalyzer::new();
        mock.expect_analyze()
            .times(1)
            .returning(|_| Ok(sample_prompt("A juggler")));

        let mut session = Session::new(mock);
        session.submit(png_upload(1024)).await.unwrap();
        assert_eq!(session.status(), AnalysisStatus::Complete);

        // Oversized 10 MB video: rejected locally, completed result survives.
        let err = session
            .submit(RawUpload::new("video/mp4", vec![0u8; 10 * 1024 * 1024]))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            SubmitError::Validation(reveo_media::IngestError::FileTooLarge { .. })
        ));
        assert_eq!(session.status(), AnalysisStatus::Complete);
        assert_eq!(
            session.state().current_result().unwrap().subject,
            "A juggler"
        );
    }

    #[tokio::test]
    async fn terminal_states_rearm_on_fresh_submission() {
        let mut calls = 0u32;
        let mut mock = MockAnalyzer::new();
        mock.expect_analyze().times(3).returning(move |_| {
            calls += 1;
            match calls {
                1 => Ok(sample_prompt("First take")),
                2 => Err(AnalysisError::malformed("truncated response")),
                _ => Ok(sample_prompt("Second take")),
            }
        });

        let mut session = Session::new(mock);

        session.submit(png_upload(1024)).await.unwrap();
        assert_eq!(session.status(), AnalysisStatus::Complete);

        // Complete re-arms; the old result is gone even though this run fails.
        let status = session.submit(jpeg_upload(2048)).await.unwrap();
        assert_eq!(status, AnalysisStatus::Error);
        assert!(session.state().current_result().is_none());
        assert_eq!(
            session.state().current_file().unwrap().content_type,
            "image/jpeg"
        );

        // Error re-arms too.
        let status = session.submit(png_upload(4096)).await.unwrap();
        assert_eq!(status, AnalysisStatus::Complete);
        assert_eq!(
            session.state().current_result().unwrap().subject,
            "Second take"
        );
    }

    #[tokio::test]
    async fn reset_is_idempotent_from_any_state() {
        let mock = MockAnalyzer::new();
        let mut session = Session::new(mock);

        assert_eq!(session.status(), AnalysisStatus::Idle);
        session.reset();
        session.reset();
        assert_eq!(session.status(), AnalysisStatus::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn submit_while_analyzing_is_rejected() {
        let mut session = Session::new(PendingAnalyzer);

        {
            let submit = session.submit(png_upload(1024));
            let timed_out =
                tokio::time::timeout(std::time::Duration::from_millis(10), submit).await;
            assert!(timed_out.is_err(), "analysis should still be pending");
        }

        // The dropped submit future left the session analyzing.
        assert_eq!(session.status(), AnalysisStatus::Analyzing);
        assert!(session.state().current_file().is_some());

        let err = session.submit(png_upload(1024)).await.unwrap_err();
        assert!(matches!(err, SubmitError::AnalysisInFlight));
        assert_eq!(session.status(), AnalysisStatus::Analyzing);

        session.reset();
        assert_eq!(session.status(), AnalysisStatus::Idle);
    }
}
