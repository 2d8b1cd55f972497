//! Shared types for the Synthetic Respondents components.
//!
//! Everything that crosses the wire between `synresctl` and `synresd`
//! lives here, together with the common error type.

pub mod audience;
pub mod error;
pub mod persona;
pub mod script;
pub mod status;
pub mod study;
pub mod version;

pub use audience::{Audience, RespondentCount};
pub use error::{Result, SynresError};
pub use persona::{AttributeMap, Persona};
pub use script::{parse_questions, InterviewMode, InterviewScript, ResponseDepth};
pub use status::{HealthStatus, ServiceInfo};
pub use study::{Concept, Interview, QuestionResponse, StudyRequest, StudyResult, Summary};
pub use version::{BUILD_DATE, GIT_SHA, VERSION};

/// Base URL the client talks to unless overridden
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Path of the persona generation endpoint
pub const PERSONAS_GENERATE_PATH: &str = "/api/personas/generate";

/// Path of the study run endpoint
pub const STUDY_RUN_PATH: &str = "/api/study/run";

/// Path of the health endpoint
pub const HEALTH_PATH: &str = "/health";
