//! Per-visitor form state and the transitions that change it.
//!
//! A [`FormController`] never performs I/O. Each transition updates the
//! [`SessionState`] and, for `submit`, returns an [`Effect`] telling the caller
//! whether a conversion request has to be issued. The caller runs that request
//! and feeds the outcome back through [`FormController::complete`].

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Instant;

use crate::errors::ConvertError;
use crate::models::ConversionResult;

/// Sample program offered by the "Load Example" button.
pub const SAMPLE_JAVA: &str = r#"
public class LinearSearchExample {
    public static void main(String[] args) {
        int[] numbers = {12, 45, 67, 23, 89};
        int target = 23;
        boolean found = false;

        for (int i = 0; i < numbers.length; i++) {
            if (numbers[i] == target) {
                System.out.println("Element found at index: " + i);
                found = true;
                break;
            }
        }

        if (!found) {
            System.out.println("Element not found in the array.");
        }
    }
}
"#;

/// Where the form is in its request lifecycle.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Everything the page renders.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub input: String,
    pub output: String,
    pub status: Status,
    pub error_message: Option<String>,
    pub elapsed_seconds: Option<f64>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        self.status == Status::Loading
    }

    /// Elapsed time the way the page shows it, e.g. `"1.25"`.
    pub fn elapsed_display(&self) -> Option<String> {
        self.elapsed_seconds.map(|s| format!("{:.2}", s))
    }
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Translate { source: String, started: Instant },
}

#[derive(Debug, Default)]
pub struct FormController {
    state: SessionState,
    started: Option<Instant>,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.state.input = input.into();
    }

    /// Starts a conversion of `current_input`.
    ///
    /// Returns [`Effect::None`] while a request is already outstanding, and when the
    /// input is blank (the form then shows the empty-input error instead).
    pub fn submit(&mut self, current_input: impl Into<String>) -> Effect {
        if self.state.is_loading() {
            return Effect::None;
        }

        self.state.input = current_input.into();

        if self.state.input.trim().is_empty() {
            self.state.status = Status::Failed;
            self.state.error_message = Some(ConvertError::EmptyInput.user_message());
            return Effect::None;
        }

        let started = Instant::now();
        self.state.status = Status::Loading;
        self.state.output.clear();
        self.state.error_message = None;
        self.state.elapsed_seconds = None;
        self.state.completed_at = None;
        self.started = Some(started);

        Effect::Translate {
            source: self.state.input.clone(),
            started,
        }
    }

    /// Applies the outcome of the request started by [`FormController::submit`].
    pub fn complete(&mut self, result: ConversionResult) {
        let since_start = self
            .started
            .take()
            .map(|started| started.elapsed().as_secs_f64());

        match result {
            ConversionResult::Success { code, elapsed_seconds } => {
                self.state.status = Status::Succeeded;
                self.state.output = code;
                self.state.error_message = None;
                self.state.elapsed_seconds = Some(elapsed_seconds);
            }
            ConversionResult::Failure { message } => {
                self.state.status = Status::Failed;
                self.state.error_message = Some(message);
                self.state.elapsed_seconds = since_start;
            }
        }
        self.state.completed_at = Some(Utc::now());
    }

    /// Resets the form. An outstanding request is not cancelled and still lands.
    pub fn clear(&mut self) {
        let status = if self.state.is_loading() { Status::Loading } else { Status::Idle };
        self.state = SessionState { status, ..SessionState::default() };
    }

    pub fn load_example(&mut self) {
        self.state.input = SAMPLE_JAVA.to_string();
    }
}
