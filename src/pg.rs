use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{BeerDto, BeerPagedList, BeerStyle, PageRequest, ParseBeerStyleError};
use crate::service::{BeerService, ServiceError};

const SELECT_BEER_BY_ID: &str = "\
    SELECT id, version, beer_name, beer_style, upc, price, quantity_on_hand, \
           created_date, last_modified_date \
    FROM beer WHERE id = $1";

// Optional filters are handled in SQL: a NULL bind disables the clause.
const SELECT_BEER_PAGE: &str = "\
    SELECT id, version, beer_name, beer_style, upc, price, quantity_on_hand, \
           created_date, last_modified_date \
    FROM beer \
    WHERE ($1::text IS NULL OR beer_name ILIKE '%' || $1 || '%') \
      AND ($2::text IS NULL OR beer_style = $2) \
    ORDER BY beer_name \
    LIMIT $3 OFFSET $4";

const COUNT_BEERS: &str = "\
    SELECT COUNT(*) \
    FROM beer \
    WHERE ($1::text IS NULL OR beer_name ILIKE '%' || $1 || '%') \
      AND ($2::text IS NULL OR beer_style = $2)";

/// Postgres-backed [`BeerService`].
pub struct PgBeerService {
    pool: PgPool,
}

impl PgBeerService {
    pub fn new(pool: PgPool) -> Self {
        PgBeerService { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct BeerRow {
    id: Uuid,
    version: i32,
    beer_name: String,
    beer_style: String,
    upc: i64,
    price: Decimal,
    quantity_on_hand: i32,
    created_date: Option<DateTime<Utc>>,
    last_modified_date: Option<DateTime<Utc>>,
}

impl TryFrom<BeerRow> for BeerDto {
    type Error = ParseBeerStyleError;

    fn try_from(row: BeerRow) -> Result<Self, Self::Error> {
        Ok(BeerDto {
            id: row.id,
            version: row.version,
            beer_name: row.beer_name,
            beer_style: row.beer_style.parse()?,
            upc: row.upc,
            price: row.price,
            quantity_on_hand: row.quantity_on_hand,
            created_date: row.created_date,
            last_modified_date: row.last_modified_date,
        })
    }
}

#[async_trait]
impl BeerService for PgBeerService {
    async fn find_beer_by_id(&self, id: Uuid) -> Result<Option<BeerDto>, ServiceError> {
        let row = sqlx::query_as::<_, BeerRow>(SELECT_BEER_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(BeerDto::try_from).transpose()?)
    }

    async fn list_beers(
        &self,
        beer_name: Option<&str>,
        beer_style: Option<BeerStyle>,
        page: PageRequest,
    ) -> Result<BeerPagedList, ServiceError> {
        let style = beer_style.map(|s| s.as_str());

        let total_elements: i64 = sqlx::query_scalar(COUNT_BEERS)
            .bind(beer_name)
            .bind(style)
            .fetch_one(&self.pool)
            .await?;

        let rows = sqlx::query_as::<_, BeerRow>(SELECT_BEER_PAGE)
            .bind(beer_name)
            .bind(style)
            .bind(page.page_size)
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await?;

        let content = rows
            .into_iter()
            .map(BeerDto::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(BeerPagedList::new(content, page, total_elements))
    }
}
