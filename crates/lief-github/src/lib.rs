//! GitHub side of the lief bridge: the REST client used as the dispatcher's
//! source-control collaborator and decoding of webhook event payloads.

mod github_api_client;
mod github_event_payload;
mod repo_ref;

pub use github_api_client::{GithubApiClient, GithubApiConfig, DEFAULT_GITHUB_API_BASE};
pub use github_event_payload::{decode_github_event, EventPayloadError, GithubBridgeEvent};
pub use repo_ref::{RepoRef, RepoRefError};
