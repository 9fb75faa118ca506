//! Application context built once at startup.
//!
//! Holds the configuration, the populated route table and the resource store,
//! and hands out URL makers and resources that borrow from it.

use crate::config::{AppConfig, RouteConfig};
use crate::resources::{FileResourceStore, ResourceError, TemplateResource};
use crate::routing::{RouteEntry, RouteTable, UrlMaker};

/// Shared application state.
#[derive(Debug, Clone)]
pub struct App {
    config: AppConfig,
    routes: RouteTable,
    store: FileResourceStore,
}

impl App {
    /// Build the context, registering modules and routes in file order.
    pub fn from_config(config: AppConfig) -> Self {
        let mut routes = RouteTable::new();
        for module in &config.modules {
            routes.add_module(module.clone());
        }
        for route in &config.routes {
            routes.add_route(route.name.clone(), entry_from_config(route));
        }

        let store = FileResourceStore::new(&config.resources.root, config.resources.extension.clone())
            .with_context(config.resources.context.clone());

        tracing::debug!(
            base_url = %config.app_base_url(),
            routes = routes.routes().len(),
            modules = routes.modules().len(),
            "Application context ready"
        );

        Self {
            config,
            routes,
            store,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Mutable access for registrations made after loading the config.
    pub fn routes_mut(&mut self) -> &mut RouteTable {
        &mut self.routes
    }

    pub fn store(&self) -> &FileResourceStore {
        &self.store
    }

    pub fn url_maker(&self) -> UrlMaker<'_> {
        UrlMaker::new(self.config.app_base_url(), &self.routes)
    }

    /// Open a resource from the configured store.
    pub fn resource(
        &self,
        path: impl Into<String>,
    ) -> Result<TemplateResource<&FileResourceStore>, ResourceError> {
        TemplateResource::open(&self.store, path)
    }
}

fn entry_from_config(route: &RouteConfig) -> RouteEntry {
    RouteEntry {
        path: route.path.clone(),
        controller: route.controller.clone(),
        action: route.action.clone(),
        module: route.module.clone(),
        language: route.language.clone(),
        prefix: route.prefix.clone(),
    }
}
