//! Structured logging for seo-pipeline workflows.
//!
//! Pipeline phases and the generation agents inside them emit
//! [`PipelineLog`] events as tagged JSON lines on stderr (prefixed with
//! `__WF_EVENT__:`) so that wrapping processes can follow progress, while
//! the console macros at the bottom of this crate print colored
//! human-readable output on stdout.

use serde::{Deserialize, Serialize};

/// Structured logging events emitted by pipeline workflows
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PipelineLog {
    /// Phase started
    PhaseStarted {
        phase: usize,
        name: String,
        total_phases: usize,
    },
    /// Phase completed
    PhaseCompleted { phase: usize, name: String },
    /// Phase failed
    PhaseFailed {
        phase: usize,
        name: String,
        error: String,
    },
    /// Generation agent started (one agent per model call or call group)
    AgentStarted {
        stage_id: String,
        agent_name: String,
        description: String,
    },
    /// Agent progress message
    AgentMessage {
        stage_id: String,
        agent_name: String,
        message: String,
    },
    /// Agent completed
    AgentCompleted {
        stage_id: String,
        agent_name: String,
        result: Option<String>,
    },
    /// Agent failed
    AgentFailed {
        stage_id: String,
        agent_name: String,
        error: String,
    },
    /// State file created (intermediate outputs)
    StateFileCreated {
        phase: usize,
        file_path: String,
        description: String,
    },
}

impl PipelineLog {
    /// Emit this log event to stderr for machine parsing
    pub fn emit(&self) {
        if let Ok(json) = serde_json::to_string(self) {
            use std::io::Write;
            eprintln!("__WF_EVENT__:{}", json);
            // Force flush stderr in async contexts
            let _ = std::io::stderr().flush();
        }
    }
}

/// Helper macros for structured workflow logging
#[macro_export]
macro_rules! log_phase_start {
    ($phase:expr, $name:expr, $total:expr) => {
        $crate::PipelineLog::PhaseStarted {
            phase: $phase,
            name: $name.to_string(),
            total_phases: $total,
        }
        .emit();
    };
}

#[macro_export]
macro_rules! log_phase_complete {
    ($phase:expr, $name:expr) => {
        $crate::PipelineLog::PhaseCompleted {
            phase: $phase,
            name: $name.to_string(),
        }
        .emit();
    };
}

#[macro_export]
macro_rules! log_phase_failed {
    ($phase:expr, $name:expr, $error:expr) => {
        $crate::PipelineLog::PhaseFailed {
            phase: $phase,
            name: $name.to_string(),
            error: $error.to_string(),
        }
        .emit();
    };
}

#[macro_export]
macro_rules! log_agent_start {
    ($stage_id:expr, $agent:expr, $desc:expr) => {
        $crate::PipelineLog::AgentStarted {
            stage_id: $stage_id.to_string(),
            agent_name: $agent.to_string(),
            description: $desc.to_string(),
        }
        .emit();
    };
}

#[macro_export]
macro_rules! log_agent_message {
    ($stage_id:expr, $agent:expr, $msg:expr) => {
        $crate::PipelineLog::AgentMessage {
            stage_id: $stage_id.to_string(),
            agent_name: $agent.to_string(),
            message: $msg.to_string(),
        }
        .emit();
    };
}

#[macro_export]
macro_rules! log_agent_complete {
    ($stage_id:expr, $agent:expr) => {
        $crate::PipelineLog::AgentCompleted {
            stage_id: $stage_id.to_string(),
            agent_name: $agent.to_string(),
            result: None,
        }
        .emit();
    };
    ($stage_id:expr, $agent:expr, $result:expr) => {
        $crate::PipelineLog::AgentCompleted {
            stage_id: $stage_id.to_string(),
            agent_name: $agent.to_string(),
            result: Some($result.to_string()),
        }
        .emit();
    };
}

#[macro_export]
macro_rules! log_agent_failed {
    ($stage_id:expr, $agent:expr, $error:expr) => {
        $crate::PipelineLog::AgentFailed {
            stage_id: $stage_id.to_string(),
            agent_name: $agent.to_string(),
            error: $error.to_string(),
        }
        .emit();
    };
}

#[macro_export]
macro_rules! log_state_file {
    ($phase:expr, $path:expr, $desc:expr) => {
        $crate::PipelineLog::StateFileCreated {
            phase: $phase,
            file_path: $path.to_string(),
            description: $desc.to_string(),
        }
        .emit();
    };
}

// ============================================================================
// Console Logging Macros
// ============================================================================
// Colored stdout output for humans, complementing the structured
// PipelineLog events above.
// ============================================================================

/// Logs the start of a workflow phase with a header and description.
///
/// # Example
/// ```
/// use seo_pipeline_sdk::log_phase_start_console;
/// log_phase_start_console!(1, "Market Research", "Analyze niche and keywords");
/// ```
#[macro_export]
macro_rules! log_phase_start_console {
    ($phase:expr, $title:expr, $description:expr) => {
        println!("\x1b[1;36m═══ STEP {}: {} ═══\x1b[0m", $phase, $title);
        println!("\x1b[36m{}\x1b[0m", $description);
    };
}

/// Logs the completion of a workflow phase.
#[macro_export]
macro_rules! log_phase_complete_console {
    ($phase:expr) => {
        println!("\x1b[32m✓ Step {} complete\x1b[0m", $phase);
    };
}

/// Logs an informational message.
#[macro_export]
macro_rules! log_info {
    ($message:expr) => {
        println!("\x1b[36mℹ {}\x1b[0m", $message);
    };
    ($fmt:expr, $($arg:tt)*) => {
        println!("\x1b[36mℹ {}\x1b[0m", format!($fmt, $($arg)*));
    };
}

/// Logs a warning message.
#[macro_export]
macro_rules! log_warning {
    ($message:expr) => {
        println!("\x1b[33m⚠ Warning: {}\x1b[0m", $message);
    };
    ($fmt:expr, $($arg:tt)*) => {
        println!("\x1b[33m⚠ Warning: {}\x1b[0m", format!($fmt, $($arg)*));
    };
}

/// Logs progress of an operation.
///
/// # Example
/// ```
/// use seo_pipeline_sdk::log_progress;
/// log_progress!(3, 5, "articles");
/// ```
#[macro_export]
macro_rules! log_progress {
    ($current:expr, $total:expr, $item_type:expr) => {
        println!(
            "\x1b[36mProgress: {}/{} {}\x1b[0m",
            $current, $total, $item_type
        );
    };
}

/// Logs that a file has been saved.
#[macro_export]
macro_rules! log_file_saved {
    ($path:expr) => {
        println!("\x1b[32m✓ Saved: {}\x1b[0m", $path);
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_event_serialization() {
        let event = PipelineLog::PhaseStarted {
            phase: 1,
            name: "Market Research".to_string(),
            total_phases: 3,
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "phase_started");
        assert_eq!(json["phase"], 1);
        assert_eq!(json["total_phases"], 3);
    }

    #[test]
    fn test_agent_event_roundtrip() {
        let event = PipelineLog::AgentCompleted {
            stage_id: "research".to_string(),
            agent_name: "Keyword Researcher".to_string(),
            result: Some("10 keywords".to_string()),
        };

        let json = serde_json::to_string(&event).unwrap();
        let back: PipelineLog = serde_json::from_str(&json).unwrap();
        match back {
            PipelineLog::AgentCompleted {
                stage_id, result, ..
            } => {
                assert_eq!(stage_id, "research");
                assert_eq!(result.as_deref(), Some("10 keywords"));
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }
}
