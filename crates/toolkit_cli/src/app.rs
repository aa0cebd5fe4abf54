//! Runtime context shared by every command

use std::sync::Arc;

use anyhow::{Context, Result};
use toolkit_catalog::{AccessLevel, Catalog, Session};
use toolkit_theme::{FileStorage, ThemeOverrides, ThemeResolver, ThemeState};

use crate::config::ToolkitConfig;

pub struct App {
    pub config: ToolkitConfig,
    pub catalog: Catalog,
    pub theme: ThemeState,
    pub session: Option<Session>,
}

impl App {
    /// Build the catalog, theme state, and session described by `config`
    pub fn open(config: ToolkitConfig) -> Result<Self> {
        let mut resolver = ThemeResolver::builtin();
        if let Some(path) = &config.theme.overrides {
            let overrides = ThemeOverrides::load(path)
                .with_context(|| format!("Failed to load theme overrides {}", path.display()))?;
            tracing::debug!("applying {} theme overrides", overrides.len());
            resolver = resolver.with_overrides(&overrides);
        }
        for (scheme, category, path) in resolver.validate() {
            tracing::warn!("theme path {} does not resolve for {}/{}", path, scheme, category);
        }

        let catalog = match &config.catalog.path {
            Some(path) => Catalog::load(path)
                .with_context(|| format!("Failed to load catalog {}", path.display()))?,
            None => Catalog::builtin().context("Built-in catalog is invalid")?,
        };

        let storage = FileStorage::in_dir(&config.storage.state_dir);
        let mut theme = ThemeState::init_default(Arc::new(resolver), Box::new(storage));
        theme.on_change(|change| {
            tracing::info!(
                "theme changed to {} / {}",
                change.current.scheme,
                change.current.category
            );
        });

        let session = match &config.session.email {
            Some(email) => Some(
                Session::sign_in(email)
                    .context("Invalid [session] email")?
                    .with_access_level(config.session.access_level),
            ),
            None => None,
        };

        Ok(Self {
            config,
            catalog,
            theme,
            session,
        })
    }

    /// Access level of the signed-in user; anonymous viewers are restricted
    pub fn access_level(&self) -> AccessLevel {
        self.session
            .as_ref()
            .map(Session::access_level)
            .unwrap_or_default()
    }
}
