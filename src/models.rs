use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub const DEFAULT_PAGE_NUMBER: i64 = 0;
pub const DEFAULT_PAGE_SIZE: i64 = 25;

/// A single beer catalog entry. Read-only on this API; `version` is the
/// optimistic-lock counter maintained by the persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeerDto {
    pub id: Uuid,
    pub version: i32,
    pub beer_name: String,
    pub beer_style: BeerStyle,
    pub upc: i64,
    pub price: Decimal,
    pub quantity_on_hand: i32,
    pub created_date: Option<DateTime<Utc>>,
    pub last_modified_date: Option<DateTime<Utc>>,
}

impl BeerDto {
    pub fn builder() -> BeerDtoBuilder {
        BeerDtoBuilder::default()
    }
}

/// Fluent builder for [`BeerDto`]. Unset fields fall back to neutral
/// defaults (fresh id, version 0, empty name, LAGER, zero price/stock).
#[derive(Debug, Default)]
pub struct BeerDtoBuilder {
    id: Option<Uuid>,
    version: Option<i32>,
    beer_name: Option<String>,
    beer_style: Option<BeerStyle>,
    upc: Option<i64>,
    price: Option<Decimal>,
    quantity_on_hand: Option<i32>,
    created_date: Option<DateTime<Utc>>,
    last_modified_date: Option<DateTime<Utc>>,
}

impl BeerDtoBuilder {
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn version(mut self, version: i32) -> Self {
        self.version = Some(version);
        self
    }

    pub fn beer_name(mut self, beer_name: impl Into<String>) -> Self {
        self.beer_name = Some(beer_name.into());
        self
    }

    pub fn beer_style(mut self, beer_style: BeerStyle) -> Self {
        self.beer_style = Some(beer_style);
        self
    }

    pub fn upc(mut self, upc: i64) -> Self {
        self.upc = Some(upc);
        self
    }

    pub fn price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    pub fn quantity_on_hand(mut self, quantity_on_hand: i32) -> Self {
        self.quantity_on_hand = Some(quantity_on_hand);
        self
    }

    pub fn created_date(mut self, created_date: DateTime<Utc>) -> Self {
        self.created_date = Some(created_date);
        self
    }

    pub fn last_modified_date(mut self, last_modified_date: DateTime<Utc>) -> Self {
        self.last_modified_date = Some(last_modified_date);
        self
    }

    pub fn build(self) -> BeerDto {
        BeerDto {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            version: self.version.unwrap_or(0),
            beer_name: self.beer_name.unwrap_or_default(),
            beer_style: self.beer_style.unwrap_or(BeerStyle::Lager),
            upc: self.upc.unwrap_or(0),
            price: self.price.unwrap_or_default(),
            quantity_on_hand: self.quantity_on_hand.unwrap_or(0),
            created_date: self.created_date,
            last_modified_date: self.last_modified_date,
        }
    }
}

/// Fixed set of catalog styles. The SCREAMING_SNAKE_CASE names are both the
/// JSON representation and the value stored in the `beer_style` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BeerStyle {
    Lager,
    Pilsner,
    Stout,
    Gose,
    Porter,
    Ale,
    Wheat,
    Ipa,
    PaleAle,
    Saison,
}

impl BeerStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            BeerStyle::Lager => "LAGER",
            BeerStyle::Pilsner => "PILSNER",
            BeerStyle::Stout => "STOUT",
            BeerStyle::Gose => "GOSE",
            BeerStyle::Porter => "PORTER",
            BeerStyle::Ale => "ALE",
            BeerStyle::Wheat => "WHEAT",
            BeerStyle::Ipa => "IPA",
            BeerStyle::PaleAle => "PALE_ALE",
            BeerStyle::Saison => "SAISON",
        }
    }
}

impl fmt::Display for BeerStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown beer style '{0}'")]
pub struct ParseBeerStyleError(pub String);

impl FromStr for BeerStyle {
    type Err = ParseBeerStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LAGER" => Ok(BeerStyle::Lager),
            "PILSNER" => Ok(BeerStyle::Pilsner),
            "STOUT" => Ok(BeerStyle::Stout),
            "GOSE" => Ok(BeerStyle::Gose),
            "PORTER" => Ok(BeerStyle::Porter),
            "ALE" => Ok(BeerStyle::Ale),
            "WHEAT" => Ok(BeerStyle::Wheat),
            "IPA" => Ok(BeerStyle::Ipa),
            "PALE_ALE" => Ok(BeerStyle::PaleAle),
            "SAISON" => Ok(BeerStyle::Saison),
            other => Err(ParseBeerStyleError(other.to_string())),
        }
    }
}

/// Zero-based page coordinates. Missing or out-of-range values fall back to
/// page 0 with 25 elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub page_number: i64,
    pub page_size: i64,
}

impl PageRequest {
    pub fn of(page_number: Option<i64>, page_size: Option<i64>) -> Self {
        PageRequest {
            page_number: page_number.filter(|n| *n >= 0).unwrap_or(DEFAULT_PAGE_NUMBER),
            page_size: page_size.filter(|s| *s >= 1).unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }

    pub fn offset(&self) -> i64 {
        self.page_number * self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        PageRequest::of(None, None)
    }
}

/// One page of beers plus paging metadata. `total_elements` counts the whole
/// result set, so it is never smaller than `content.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeerPagedList {
    pub content: Vec<BeerDto>,
    pub page_number: i64,
    pub page_size: i64,
    pub total_elements: i64,
    pub total_pages: i64,
}

impl BeerPagedList {
    pub fn new(content: Vec<BeerDto>, page: PageRequest, total_elements: i64) -> Self {
        debug_assert!(total_elements >= content.len() as i64);
        let total_pages = if total_elements <= 0 {
            0
        } else {
            (total_elements + page.page_size - 1) / page.page_size
        };
        BeerPagedList {
            content,
            page_number: page.page_number,
            page_size: page.page_size,
            total_elements,
            total_pages,
        }
    }
}
