//! Question/answer core
//!
//! Everything here is independent of the terminal: the controller talks to
//! the network through [`AnswerService`] and to the screen through
//! [`Surface`], so the TUI, the headless `ask` command and the tests all
//! drive the same code.

pub mod client;
pub mod controller;
pub mod demo;
pub mod display;
pub mod error;
pub mod notify;
pub mod payload;
pub mod presenter;
pub mod question;
pub mod state;
pub mod surface;
pub mod typewriter;

pub use client::{AnswerService, HttpAnswerService, QuestionRequest};
pub use controller::{Controller, Outcome};
pub use display::{BlockSnapshot, RegionView, ResponseRegion};
pub use error::{OracleError, ValidationError};
pub use notify::{Notification, Notifier, Phase, Severity};
pub use question::{Question, MIN_QUESTION_CHARS};
pub use surface::Surface;
