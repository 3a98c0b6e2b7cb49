/// Client side of the assistant service.
///
/// The service exposes two endpoints: `POST /ask` answers a medical question
/// and `GET /logs` returns filtered system log text. Everything in this crate
/// talks to them through the [`MedicalBackend`] trait so the view models can be
/// driven by a stub in tests.
///
/// # Usage
///
/// ```rust,no_run
/// use medassist::api::{HttpBackend, MedicalBackend};
/// use medassist::config::ApiConfig;
///
/// # async fn example() -> Result<(), medassist::api::ApiError> {
/// let backend = HttpBackend::new(ApiConfig::load());
/// let reply = backend.ask("what is fever?").await?;
/// println!("{:?}", reply.answer);
/// # Ok(())
/// # }
/// ```
mod client;
mod error;
mod query;

pub use client::{AskReply, HttpBackend, MedicalBackend};
pub use error::{ApiError, ApiResult};
pub use query::LogQuery;
