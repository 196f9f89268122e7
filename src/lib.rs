//! Marketing contact form: inquiry model, client-side validation, and a
//! submit controller that posts to an external endpoint.

pub mod config;
pub mod controller;
pub mod inquiry;
pub mod notify;
pub mod submit;
pub mod validate;

pub use config::{ConfigError, ContactConfig, SubmitTimeouts};
pub use controller::{CONFIRMATION_MESSAGE, ContactFormController, FormError, FormState};
pub use inquiry::{CompanySize, ContactInquiry, Field, FieldUpdate, HelpTopic};
pub use notify::{Notification, Notifier, TracingNotifier};
pub use submit::{HttpSink, InquirySink, SubmissionError};
pub use validate::{FieldErrors, ValidationError};
