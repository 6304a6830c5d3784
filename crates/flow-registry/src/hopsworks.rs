//! Hopsworks model registry client.
//!
//! Talks to the project REST API with an `ApiKey` header, resolves the
//! project once at login and downloads `model.json` artifacts into a local
//! cache directory laid out like [`crate::LocalRegistry`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use flow_config::RegistryConfig;
use flow_core::ModelRef;
use serde::Deserialize;

use crate::MODEL_FILE;
use crate::error::RegistryError;
use crate::http::check_response;

const API_PREFIX: &str = "hopsworks-api/api";

/// The project a session operates in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: u64,
    pub name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectInfo {
    project_id: u64,
    project_name: String,
}

#[derive(Deserialize)]
struct ProjectTeam {
    project: ProjectSummary,
}

#[derive(Deserialize)]
struct ProjectSummary {
    id: u64,
    name: String,
}

/// Authenticated session against one Hopsworks project.
#[derive(Debug, Clone)]
pub struct HopsworksSession {
    http: reqwest::Client,
    host: String,
    api_key: String,
    project: Project,
    cache_dir: PathBuf,
}

impl HopsworksSession {
    /// Log in with the configured API key and resolve the project.
    ///
    /// Uses `config.project` when set, otherwise the first project the key
    /// has access to.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Auth`] when no key is configured or the key
    /// is rejected, [`RegistryError::ProjectNotFound`] when the key has no
    /// projects, or a transport/parse error.
    pub async fn login(config: &RegistryConfig) -> Result<Self, RegistryError> {
        if !config.is_configured() {
            return Err(RegistryError::Auth {
                status: 0,
                message: format!("no API key configured (set {})", flow_config::API_KEY_ENV),
            });
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!("flowcast/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(120))
            .build()?;
        let host = config.host.trim_end_matches('/').to_string();

        let project = resolve_project(
            &http,
            &host,
            &config.api_key,
            Some(config.project.as_str()).filter(|p| !p.is_empty()),
        )
        .await?;
        tracing::info!(project = %project.name, id = project.id, "connected to model registry");

        Ok(Self {
            http,
            host,
            api_key: config.api_key.clone(),
            project,
            cache_dir: config.download_path(),
        })
    }

    #[must_use]
    pub const fn project(&self) -> &Project {
        &self.project
    }

    /// Download a model artifact, reusing an earlier download of the same
    /// version when present.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::ModelNotFound`] on 404, or the usual HTTP,
    /// auth and I/O errors.
    pub async fn download(&self, model: &ModelRef) -> Result<PathBuf, RegistryError> {
        let dest = cached_path(&self.cache_dir, model);
        if tokio::fs::try_exists(&dest).await? {
            tracing::debug!(model = %model, path = %dest.display(), "using cached model");
            return Ok(dest);
        }

        let url = download_url(&self.host, &self.project, model);
        tracing::info!(model = %model, "downloading model");
        let resp = self
            .http
            .get(&url)
            .header(reqwest::header::AUTHORIZATION, auth_header(&self.api_key))
            .send()
            .await?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::ModelNotFound(model.to_string()));
        }
        let bytes = check_response(resp).await?.bytes().await?;

        if let Some(parent) = dest.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let partial = dest.with_extension("json.part");
        tokio::fs::write(&partial, &bytes).await?;
        tokio::fs::rename(&partial, &dest).await?;
        tracing::debug!(model = %model, bytes = bytes.len(), path = %dest.display(), "model saved");
        Ok(dest)
    }
}

async fn resolve_project(
    http: &reqwest::Client,
    host: &str,
    api_key: &str,
    name: Option<&str>,
) -> Result<Project, RegistryError> {
    if let Some(name) = name {
        let url = format!(
            "{host}/{API_PREFIX}/project/getProjectInfo/{}",
            urlencoding::encode(name)
        );
        let resp = http
            .get(&url)
            .header(reqwest::header::AUTHORIZATION, auth_header(api_key))
            .send()
            .await?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::ProjectNotFound(name.to_string()));
        }
        let body = check_response(resp).await?.text().await?;
        return parse_project_info(&body);
    }

    let url = format!("{host}/{API_PREFIX}/project");
    let resp = http
        .get(&url)
        .header(reqwest::header::AUTHORIZATION, auth_header(api_key))
        .send()
        .await?;
    let body = check_response(resp).await?.text().await?;
    first_project(&body)
}

fn auth_header(api_key: &str) -> String {
    format!("ApiKey {api_key}")
}

fn parse_project_info(body: &str) -> Result<Project, RegistryError> {
    let info: ProjectInfo =
        serde_json::from_str(body).map_err(|e| RegistryError::Parse(e.to_string()))?;
    Ok(Project {
        id: info.project_id,
        name: info.project_name,
    })
}

fn first_project(body: &str) -> Result<Project, RegistryError> {
    let teams: Vec<ProjectTeam> =
        serde_json::from_str(body).map_err(|e| RegistryError::Parse(e.to_string()))?;
    teams
        .into_iter()
        .next()
        .map(|t| Project {
            id: t.project.id,
            name: t.project.name,
        })
        .ok_or_else(|| RegistryError::ProjectNotFound("<any>".to_string()))
}

fn download_url(host: &str, project: &Project, model: &ModelRef) -> String {
    format!(
        "{host}/{API_PREFIX}/project/{id}/dataset/download/with_auth/Projects/{project}/Models/{name}/{version}/{MODEL_FILE}?type=DATASET",
        id = project.id,
        project = urlencoding::encode(&project.name),
        name = urlencoding::encode(&model.name),
        version = model.version,
    )
}

fn cached_path(root: &Path, model: &ModelRef) -> PathBuf {
    root.join(&model.name)
        .join(model.version.to_string())
        .join(MODEL_FILE)
}
