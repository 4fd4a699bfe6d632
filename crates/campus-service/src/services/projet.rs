//! Projet service
//!
//! Handles projet CRUD, the paged projet search and the projects dashboard.

use std::collections::HashMap;

use campus_core::entities::{NewProjet, Tache};
use tracing::{info, instrument};

use crate::dto::{
    ProjectsDashboardResponse, ProjetDetailResponse, ProjetRequest, ProjetResponse,
    ProjetSearchItem, ProjetSearchParams, ProjetSearchResponse, ProjetWithTaches,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Projet service
pub struct ProjetService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProjetService<'a> {
    /// Create a new ProjetService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Enabled projets, newest first
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<ProjetResponse>> {
        let projets = self.ctx.projet_repo().list_enabled().await?;
        Ok(projets.into_iter().map(ProjetResponse::from).collect())
    }

    /// One projet with its taches
    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<ProjetDetailResponse> {
        let projet = self
            .ctx
            .projet_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Projet", id.to_string()))?;
        let taches = self.ctx.tache_repo().find_by_projet(id).await?;

        Ok(ProjetDetailResponse::from(ProjetWithTaches { projet, taches }))
    }

    #[instrument(skip(self, request))]
    pub async fn create(&self, request: ProjetRequest) -> ServiceResult<ProjetResponse> {
        let mut projet = NewProjet::new(request.nom.trim().to_string(), request.description);
        projet.enabled = request.enabled;

        let projet = self.ctx.projet_repo().create(&projet).await?;
        info!(projet_id = projet.id, "Projet created");

        Ok(ProjetResponse::from(projet))
    }

    #[instrument(skip(self, request))]
    pub async fn update(&self, id: i64, request: ProjetRequest) -> ServiceResult<ProjetResponse> {
        let mut projet = self
            .ctx
            .projet_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Projet", id.to_string()))?;

        projet.update(request.nom.trim().to_string(), request.description, request.enabled);
        self.ctx.projet_repo().update(&projet).await?;
        info!(projet_id = id, "Projet updated");

        Ok(ProjetResponse::from(projet))
    }

    /// Delete a projet; its taches go with it
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        self.ctx.projet_repo().delete(id).await?;
        info!(projet_id = id, "Projet deleted");
        Ok(())
    }

    /// Paged search over enabled projets, each listed with all of its taches
    #[instrument(skip(self))]
    pub async fn search(&self, params: ProjetSearchParams) -> ServiceResult<ProjetSearchResponse> {
        let query = params.into_search(self.ctx.search_page_size());

        let projets = self.ctx.projet_repo().search(&query).await?;
        let total = self.ctx.projet_repo().count_search(&query).await?;

        let ids: Vec<i64> = projets.iter().map(|p| p.id).collect();
        let mut taches_by_projet: HashMap<i64, Vec<Tache>> = HashMap::new();
        if !ids.is_empty() {
            for tache in self.ctx.tache_repo().find_by_projets(&ids).await? {
                taches_by_projet.entry(tache.projet_id).or_default().push(tache);
            }
        }

        let items = projets
            .into_iter()
            .map(|projet| {
                let taches = taches_by_projet.remove(&projet.id).unwrap_or_default();
                ProjetSearchItem::from(&ProjetWithTaches { projet, taches })
            })
            .collect();

        Ok(ProjetSearchResponse::new(
            items,
            total,
            query.page.page(),
            query.page.limit(),
        ))
    }

    /// Totals of the projects admin page
    #[instrument(skip(self))]
    pub async fn dashboard(&self) -> ServiceResult<ProjectsDashboardResponse> {
        let projets = self.ctx.projet_repo();
        let taches = self.ctx.tache_repo();

        Ok(ProjectsDashboardResponse {
            total_projets: projets.count(false).await?,
            total_taches: taches.count(false).await?,
            projets_enabled: projets.count(true).await?,
            taches_enabled: taches.count(true).await?,
        })
    }
}
