use crate::{Category, Error, PercentChangeTrend, PriceChangeTrend, PriceTrend};
use bon::bon;
use serde::Serialize;
use std::fmt;
use url::Url;

/// What every item record exposes, whichever API it came from.
pub trait ItemInfo {
    fn id(&self) -> i32;
    fn name(&self) -> &str;
    fn price(&self) -> i64;
    fn description(&self) -> &str;
}

fn check_id(id: i32) -> Result<(), Error> {
    if id < 0 {
        return Err(Error::invalid(format!("invalid id ({id})")));
    }
    Ok(())
}

fn check_not_empty(field: &str, value: &str) -> Result<(), Error> {
    if value.is_empty() {
        return Err(Error::invalid(format!("{field} empty")));
    }
    Ok(())
}

fn parse_url(field: &str, value: &str) -> Result<Url, Error> {
    check_not_empty(field, value)?;
    Url::parse(value).map_err(|e| Error::format(format!("invalid {field} {value:?}: {e}")))
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BasicItemInfo {
    id: i32,
    name: String,
    price: i64,
    description: String,
}

impl BasicItemInfo {
    pub fn new(
        id: i32,
        name: impl Into<String>,
        price: i64,
        description: impl Into<String>,
    ) -> Result<Self, Error> {
        let name = name.into();
        let description = description.into();

        check_id(id)?;
        check_not_empty("name", &name)?;
        if price <= 0 {
            return Err(Error::invalid(format!("invalid price ({price})")));
        }
        check_not_empty("description", &description)?;

        Ok(Self {
            id,
            name,
            price,
            description,
        })
    }
}

impl ItemInfo for BasicItemInfo {
    fn id(&self) -> i32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> i64 {
        self.price
    }

    fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for BasicItemInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BasicItemInfo{{id={}, name={}, price={}, description={}}}",
            self.id, self.name, self.price, self.description
        )
    }
}

/// Full item record from the official item database, including price trends.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DetailedItemInfo {
    id: i32,
    name: String,
    category: Category,
    description: String,
    members_only: bool,
    icon_url: Url,
    large_icon_url: Url,
    type_icon_url: Url,
    current_price_trend: PriceTrend,
    todays_change_trend: PriceChangeTrend,
    day30_change_trend: PercentChangeTrend,
    day90_change_trend: PercentChangeTrend,
    day180_change_trend: PercentChangeTrend,
}

#[bon]
impl DetailedItemInfo {
    #[builder(on(String, into))]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i32,
        name: String,
        category: Category,
        description: String,
        members_only: bool,
        icon_url: String,
        large_icon_url: String,
        type_icon_url: String,
        current_price_trend: PriceTrend,
        todays_change_trend: PriceChangeTrend,
        day30_change_trend: PercentChangeTrend,
        day90_change_trend: PercentChangeTrend,
        day180_change_trend: PercentChangeTrend,
    ) -> Result<Self, Error> {
        check_id(id)?;
        check_not_empty("name", &name)?;
        check_not_empty("description", &description)?;

        Ok(Self {
            id,
            name,
            category,
            description,
            members_only,
            icon_url: parse_url("icon url", &icon_url)?,
            large_icon_url: parse_url("large icon url", &large_icon_url)?,
            type_icon_url: parse_url("type icon url", &type_icon_url)?,
            current_price_trend,
            todays_change_trend,
            day30_change_trend,
            day90_change_trend,
            day180_change_trend,
        })
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn is_members_only(&self) -> bool {
        self.members_only
    }

    pub fn icon_url(&self) -> &Url {
        &self.icon_url
    }

    pub fn large_icon_url(&self) -> &Url {
        &self.large_icon_url
    }

    pub fn type_icon_url(&self) -> &Url {
        &self.type_icon_url
    }

    pub fn current_price_trend(&self) -> PriceTrend {
        self.current_price_trend
    }

    pub fn todays_change_trend(&self) -> PriceChangeTrend {
        self.todays_change_trend
    }

    pub fn day30_change_trend(&self) -> PercentChangeTrend {
        self.day30_change_trend
    }

    pub fn day90_change_trend(&self) -> PercentChangeTrend {
        self.day90_change_trend
    }

    pub fn day180_change_trend(&self) -> PercentChangeTrend {
        self.day180_change_trend
    }

    pub fn price_change(&self) -> i64 {
        self.todays_change_trend.price_change()
    }
}

impl ItemInfo for DetailedItemInfo {
    fn id(&self) -> i32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> i64 {
        self.current_price_trend.price()
    }

    fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for DetailedItemInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DetailedItemInfo{{id={}, name={}, type={}, description={}, membersOnly={}, \
             iconUrl={}, largeIconUrl={}, typeIconUrl={}, currentPriceTrend={}, \
             todaysChangeTrend={}, 30DayChangeTrend={}, 90DayChangeTrend={}, 180DayChangeTrend={}}}",
            self.id,
            self.name,
            self.category,
            self.description,
            self.members_only,
            self.icon_url,
            self.large_icon_url,
            self.type_icon_url,
            self.current_price_trend,
            self.todays_change_trend,
            self.day30_change_trend,
            self.day90_change_trend,
            self.day180_change_trend,
        )
    }
}
