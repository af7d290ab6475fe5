//! Declared-interaction mock transport and contract recording.
//!
//! Tests declare interactions up front: a method+path to match plus the
//! canned status/body to return, optionally tagged with a description
//! and named provider states. The mock answers matching requests with
//! the canned response and logs every request it observes. The same
//! declarations can be persisted as a pact-format contract document for
//! cross-service verification; the coordinator itself never depends on
//! that recording.

use crate::transport::{HttpRequest, HttpResponse, Method, Transport, TransportError};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

/// Named precondition the provider must satisfy before the interaction
/// holds ("There are 2 items"). Opaque to the coordinator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderState {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionRequest {
    pub method: Method,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InteractionResponse {
    pub status: u16,
    pub body: Value,
}

/// One declared request/response pair. Description and provider states
/// are optional metadata carried through to the contract record.
#[derive(Debug, Clone, PartialEq)]
pub struct Interaction {
    pub description: Option<String>,
    pub provider_states: Vec<ProviderState>,
    pub request: InteractionRequest,
    pub response: InteractionResponse,
}

impl Interaction {
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>, status: u16, body: Value) -> Self {
        Self {
            description: None,
            provider_states: Vec::new(),
            request: InteractionRequest {
                method,
                path: path.into(),
            },
            response: InteractionResponse { status, body },
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_provider_state(mut self, name: impl Into<String>) -> Self {
        self.provider_states.push(ProviderState { name: name.into() });
        self
    }

    fn matches(&self, request: &HttpRequest) -> bool {
        self.request.method == request.method && self.request.path == request.path
    }
}

#[derive(Debug, Default)]
struct MockInner {
    interactions: RefCell<Vec<Interaction>>,
    observed: RefCell<Vec<HttpRequest>>,
}

/// Transport that answers from declared interactions.
///
/// Clones share the declaration list and the observed-request log, so a
/// test can keep a handle for assertions while the client under test
/// owns another. The later of two declarations for the same method+path
/// wins, mirroring how re-declaring an intercept overrides the earlier
/// one.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    inner: Rc<MockInner>,
}

impl MockTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(&self, interaction: Interaction) {
        self.inner.interactions.borrow_mut().push(interaction);
    }

    /// Every request observed so far, in arrival order, matched or not.
    #[must_use]
    pub fn observed(&self) -> Vec<HttpRequest> {
        self.inner.observed.borrow().clone()
    }

    /// Build the contract record for the declared interactions.
    #[must_use]
    pub fn pact(&self, consumer: &str, provider: &str) -> Pact {
        Pact::new(consumer, provider, self.inner.interactions.borrow().clone())
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.inner.observed.borrow_mut().push(request.clone());
        let interactions = self.inner.interactions.borrow();
        let hit = interactions
            .iter()
            .rev()
            .find(|interaction| interaction.matches(&request))
            .ok_or(TransportError::Unmatched(request.method, request.path))?;
        Ok(HttpResponse {
            status: hit.response.status,
            body: hit.response.body.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct Participant {
    name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct PactRequest {
    method: &'static str,
    path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct PactResponse {
    status: u16,
    #[serde(skip_serializing_if = "Value::is_null")]
    body: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct PactInteraction {
    description: String,
    #[serde(rename = "providerStates", skip_serializing_if = "Vec::is_empty")]
    provider_states: Vec<ProviderState>,
    request: PactRequest,
    response: PactResponse,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct PactSpecification {
    version: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct PactMetadata {
    #[serde(rename = "pactSpecification")]
    pact_specification: PactSpecification,
}

/// Serializable contract document (pact specification 2.0.0).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pact {
    consumer: Participant,
    provider: Participant,
    interactions: Vec<PactInteraction>,
    metadata: PactMetadata,
}

impl Pact {
    fn new(consumer: &str, provider: &str, interactions: Vec<Interaction>) -> Self {
        let interactions = interactions
            .into_iter()
            .map(|interaction| PactInteraction {
                description: interaction.description.unwrap_or_else(|| {
                    format!(
                        "{} {}",
                        interaction.request.method, interaction.request.path
                    )
                }),
                provider_states: interaction.provider_states,
                request: PactRequest {
                    method: interaction.request.method.as_str(),
                    path: interaction.request.path,
                },
                response: PactResponse {
                    status: interaction.response.status,
                    body: interaction.response.body,
                },
            })
            .collect();
        Self {
            consumer: Participant {
                name: consumer.into(),
            },
            provider: Participant {
                name: provider.into(),
            },
            interactions,
            metadata: PactMetadata {
                pact_specification: PactSpecification { version: "2.0.0" },
            },
        }
    }

    /// Persist the contract record.
    ///
    /// # Errors
    /// Returns an error when serialization or the underlying write fails.
    pub fn write_to<W: Write>(&self, writer: W) -> serde_json::Result<()> {
        serde_json::to_writer_pretty(writer, self)
    }
}
