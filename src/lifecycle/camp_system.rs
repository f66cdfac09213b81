use crate::api::{CampsApi, ResourceLinks, TalksApi};
use crate::http::{self, AppState};
use crate::lifecycle::AppConfig;
use crate::projector::Projector;
use crate::repository::{CampRepository, StoreRepository};
use crate::store::{self, CampDb, CampDbError};
use axum::Router;
use entity_store::StoreClient;
use std::sync::Arc;
use tracing::{error, info};

/// Owns the running store and the resource APIs built on top of it.
///
/// ```ignore
/// let system = CampSystem::new(&AppConfig::default())?;
/// axum::serve(listener, system.router()).await?;
/// system.shutdown().await?;
/// ```
pub struct CampSystem {
    base_path: String,
    state: AppState<StoreRepository>,
    store: StoreClient<CampDb>,
    handle: tokio::task::JoinHandle<()>,
}

impl CampSystem {
    /// Spawns the store actor, seeded when `config.seed` is set, and wires both APIs to it.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(config: &AppConfig) -> Result<Self, CampDbError> {
        let db = if config.seed { CampDb::seeded()? } else { CampDb::new() };
        let (actor, client) = store::new(config.store_buffer, db);
        let handle = tokio::spawn(actor.run());

        let links = ResourceLinks::new(&config.base_path);
        let projector = Projector::new();
        let repository = StoreRepository::new(client.clone());
        let state = AppState {
            camps: Arc::new(CampsApi::new(repository.unit_of_work(), projector, links.clone())),
            talks: Arc::new(TalksApi::new(repository, projector, links.clone())),
        };

        info!(base_path = links.base_path(), seeded = config.seed, "Camp system started");
        Ok(Self {
            base_path: links.base_path().to_string(),
            state,
            store: client,
            handle,
        })
    }

    pub fn camps(&self) -> &CampsApi<StoreRepository> {
        &self.state.camps
    }

    pub fn talks(&self) -> &TalksApi<StoreRepository> {
        &self.state.talks
    }

    /// A direct client to the store, bypassing the resource layer.
    pub fn store(&self) -> StoreClient<CampDb> {
        self.store.clone()
    }

    pub fn router(&self) -> Router {
        http::router(self.state.clone(), &self.base_path)
    }

    /// Closes the store and waits for its actor to exit.
    ///
    /// Any router handed out earlier still holds store clients; drop it first or this waits
    /// until it is dropped.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down camp system...");
        drop(self.state);
        drop(self.store);

        if let Err(e) = self.handle.await {
            error!("Store task failed: {:?}", e);
            return Err(format!("Store task failed: {:?}", e));
        }
        info!("Camp system shutdown complete.");
        Ok(())
    }
}
