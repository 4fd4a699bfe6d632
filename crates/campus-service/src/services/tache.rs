//! Tache service
//!
//! Handles tache CRUD and the paged tache search.

use campus_core::entities::NewTache;
use tracing::{info, instrument};

use crate::dto::{
    TacheRequest, TacheResponse, TacheSearchItem, TacheSearchParams, TacheSearchResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Tache service
pub struct TacheService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TacheService<'a> {
    /// Create a new TacheService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<TacheResponse>> {
        let taches = self.ctx.tache_repo().list().await?;
        Ok(taches.into_iter().map(TacheResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<TacheResponse> {
        let tache = self
            .ctx
            .tache_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Tache", id.to_string()))?;
        Ok(TacheResponse::from(tache))
    }

    #[instrument(skip(self, request))]
    pub async fn create(&self, request: TacheRequest) -> ServiceResult<TacheResponse> {
        self.require_projet(request.projet_id).await?;

        let mut tache = NewTache::new(
            request.projet_id,
            request.titre.trim().to_string(),
            request.description.clone(),
        );
        tache.statut = request.statut();
        tache.priorite = request.priorite();
        tache.enabled = request.enabled;

        let tache = self.ctx.tache_repo().create(&tache).await?;
        info!(tache_id = tache.id, projet_id = tache.projet_id, "Tache created");

        Ok(TacheResponse::from(tache))
    }

    #[instrument(skip(self, request))]
    pub async fn update(&self, id: i64, request: TacheRequest) -> ServiceResult<TacheResponse> {
        let mut tache = self
            .ctx
            .tache_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Tache", id.to_string()))?;

        if tache.projet_id != request.projet_id {
            self.require_projet(request.projet_id).await?;
        }

        tache.statut = request.statut();
        tache.priorite = request.priorite();
        tache.projet_id = request.projet_id;
        tache.titre = request.titre.trim().to_string();
        tache.description = request.description;
        tache.enabled = request.enabled;

        self.ctx.tache_repo().update(&tache).await?;
        info!(tache_id = id, "Tache updated");

        Ok(TacheResponse::from(tache))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        self.ctx.tache_repo().delete(id).await?;
        info!(tache_id = id, "Tache deleted");
        Ok(())
    }

    /// Paged search over enabled taches with their projet
    #[instrument(skip(self))]
    pub async fn search(&self, params: TacheSearchParams) -> ServiceResult<TacheSearchResponse> {
        let query = params.into_search(self.ctx.search_page_size());

        let rows = self.ctx.tache_repo().search(&query).await?;
        let total = self.ctx.tache_repo().count_search(&query).await?;

        Ok(TacheSearchResponse::new(
            rows.iter().map(TacheSearchItem::from).collect(),
            total,
            query.page.page(),
            query.page.limit(),
        ))
    }

    async fn require_projet(&self, projet_id: i64) -> ServiceResult<()> {
        self.ctx
            .projet_repo()
            .find_by_id(projet_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| ServiceError::not_found("Projet", projet_id.to_string()))
    }
}
