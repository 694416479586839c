use crate::method::Method;
use crate::{Endpoints, Error};
use chrono::{DateTime, Utc};
use ge_shared_models::wire::first_value;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type PriceSeries = BTreeMap<DateTime<Utc>, i64>;

#[derive(Deserialize, Debug)]
struct GraphResponse {
    #[serde(default)]
    daily: BTreeMap<String, i64>,
    #[serde(default)]
    average: BTreeMap<String, i64>,
}

/// Daily prices and the running average for the last 180 days.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ItemGraph {
    daily: PriceSeries,
    average: PriceSeries,
}

impl ItemGraph {
    pub fn daily(&self) -> &PriceSeries {
        &self.daily
    }

    pub fn average(&self) -> &PriceSeries {
        &self.average
    }

    pub fn latest(&self) -> Option<(DateTime<Utc>, i64)> {
        self.daily.last_key_value().map(|(at, price)| (*at, *price))
    }
}

fn series(raw: BTreeMap<String, i64>) -> Result<PriceSeries, Error> {
    raw.into_iter()
        .map(|(millis, price)| -> Result<(DateTime<Utc>, i64), Error> {
            let at = millis
                .parse::<i64>()
                .ok()
                .and_then(DateTime::from_timestamp_millis)
                .ok_or_else(|| {
                    ge_shared_models::Error::format(format!("invalid graph timestamp {millis:?}"))
                })?;
            Ok((at, price))
        })
        .collect()
}

/// Parses a `graph/{id}.json` body; keys are epoch milliseconds.
pub fn parse_item_graph(body: &[u8]) -> Result<ItemGraph, Error> {
    let raw = first_value::<GraphResponse>(body)?;

    Ok(ItemGraph {
        daily: series(raw.daily)?,
        average: series(raw.average)?,
    })
}

pub struct ItemGraphMethod;

impl Method for ItemGraphMethod {
    type Params = i32;
    type Response = ItemGraph;

    fn url(endpoints: &Endpoints, item_id: &i32) -> Result<Url, Error> {
        endpoints.item_graph(*item_id)
    }

    fn parse(body: &[u8]) -> Result<ItemGraph, Error> {
        parse_item_graph(body)
    }
}
