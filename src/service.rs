use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{BeerDto, BeerPagedList, BeerStyle, PageRequest, ParseBeerStyleError};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error(transparent)]
    InvalidStyle(#[from] ParseBeerStyleError),
}

/// Query-side catalog operations. The HTTP layer only talks to this trait,
/// so tests can swap in a stub without a database.
#[async_trait]
pub trait BeerService: Send + Sync {
    async fn find_beer_by_id(&self, id: Uuid) -> Result<Option<BeerDto>, ServiceError>;

    async fn list_beers(
        &self,
        beer_name: Option<&str>,
        beer_style: Option<BeerStyle>,
        page: PageRequest,
    ) -> Result<BeerPagedList, ServiceError>;
}
