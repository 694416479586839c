use crate::figure::{RawFigure, required, trend_figure};
use crate::method::Method;
use crate::{Endpoints, Error};
use ge_shared_models::wire::first_value;
use ge_shared_models::{
    Category, DetailedItemInfo, PercentChangeTrend, PriceChangeTrend, PriceTrend, Scalar,
    parse_percent, parse_price,
};
use reqwest::Url;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
struct DetailResponse {
    item: RawDetail,
}

#[derive(Deserialize, Debug)]
struct RawDetail {
    icon: Option<String>,
    icon_large: Option<String>,
    id: Option<Scalar>,
    #[serde(rename = "type")]
    kind: Option<String>,
    #[serde(rename = "typeIcon")]
    type_icon: Option<String>,
    name: Option<String>,
    description: Option<String>,
    current: Option<RawFigure>,
    today: Option<RawFigure>,
    day30: Option<RawFigure>,
    day90: Option<RawFigure>,
    day180: Option<RawFigure>,
    members: Option<Scalar>,
}

fn percent_change(field: &str, figure: Option<RawFigure>) -> Result<PercentChangeTrend, Error> {
    let (trend, change) = trend_figure(&required(field, figure)?, "change", parse_percent)?;
    Ok(PercentChangeTrend::new(trend, change))
}

/// Parses a `catalogue/detail.json` body.
pub fn parse_item_detail(body: &[u8]) -> Result<DetailedItemInfo, Error> {
    let raw = first_value::<DetailResponse>(body)?.item;

    let kind = required("type", raw.kind)?;
    let category = Category::from_name(&kind).ok_or_else(|| {
        ge_shared_models::Error::format(format!("unknown item type {kind:?}"))
    })?;

    let (trend, price) = trend_figure(&required("current", raw.current)?, "price", parse_price)?;
    let current_price_trend = PriceTrend::new(trend, price)?;

    let (trend, change) = trend_figure(&required("today", raw.today)?, "price", parse_price)?;
    let todays_change_trend = PriceChangeTrend::new(trend, change);

    let item = DetailedItemInfo::builder()
        .id(required("id", raw.id)?.to_id("id")?)
        .name(required("name", raw.name)?)
        .category(category)
        .description(required("description", raw.description)?)
        .members_only(raw.members.is_some_and(|members| members.to_bool()))
        .icon_url(required("icon", raw.icon)?)
        .large_icon_url(required("icon_large", raw.icon_large)?)
        .type_icon_url(required("typeIcon", raw.type_icon)?)
        .current_price_trend(current_price_trend)
        .todays_change_trend(todays_change_trend)
        .day30_change_trend(percent_change("day30", raw.day30)?)
        .day90_change_trend(percent_change("day90", raw.day90)?)
        .day180_change_trend(percent_change("day180", raw.day180)?)
        .build()?;

    Ok(item)
}

pub struct ItemDetail;

impl Method for ItemDetail {
    type Params = i32;
    type Response = DetailedItemInfo;

    fn url(endpoints: &Endpoints, item_id: &i32) -> Result<Url, Error> {
        endpoints.item_detail(*item_id)
    }

    fn parse(body: &[u8]) -> Result<DetailedItemInfo, Error> {
        parse_item_detail(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ge_shared_models::{ItemInfo, Trend};

    const WHIP: &str = r#"{"item":{
        "icon":"http://services.runescape.com/m=itemdb_rs/4765_obj_sprite.gif?id=4151",
        "icon_large":"http://services.runescape.com/m=itemdb_rs/4765_obj_big.gif?id=4151",
        "id":4151,
        "type":"Melee weapons - high level",
        "typeIcon":"http://www.runescape.com/img/categories/Melee weapons - high level",
        "name":"Abyssal whip",
        "description":"A weapon from the abyss.",
        "current":{"trend":"neutral","price":"1.2m"},
        "today":{"trend":"negative","price":"- 3,456"},
        "members":"true",
        "day30":{"trend":"positive","change":"+12.34%"},
        "day90":{"trend":"negative","change":"-1.0%"},
        "day180":{"trend":"neutral","change":"0.0%"}
    }}"#;

    #[test]
    fn parses_full_detail() {
        let item = parse_item_detail(WHIP.as_bytes()).unwrap();

        assert_eq!(item.id(), 4151);
        assert_eq!(item.name(), "Abyssal whip");
        assert_eq!(item.description(), "A weapon from the abyss.");
        assert_eq!(item.category(), Category::MeleeWeaponsHighLevel);
        assert!(item.is_members_only());
        assert_eq!(item.price(), 1_200_000);
        assert_eq!(item.current_price_trend().trend(), Trend::Neutral);
        assert_eq!(item.price_change(), -3_456);
        assert_eq!(item.todays_change_trend().trend(), Trend::Negative);
        assert!((item.day30_change_trend().percent_change() - 0.1234).abs() < 1e-12);
        assert_eq!(item.day30_change_trend().trend(), Trend::Positive);
        assert!((item.day90_change_trend().percent_change() + 0.01).abs() < 1e-12);
        assert_eq!(item.day180_change_trend().percent_change(), 0.0);
        assert_eq!(
            item.type_icon_url().as_str(),
            "http://www.runescape.com/img/categories/Melee%20weapons%20-%20high%20level"
        );
    }

    #[test]
    fn skips_unknown_fields() {
        let body = WHIP.replace(r#""id":4151,"#, r#""id":"4151","extra":{"nested":[1,2]},"#);
        let item = parse_item_detail(body.as_bytes()).unwrap();
        assert_eq!(item.id(), 4151);
    }

    #[test]
    fn members_defaults_to_false() {
        let body = WHIP.replace(r#""members":"true","#, r#""members":"false","#);
        assert!(!parse_item_detail(body.as_bytes()).unwrap().is_members_only());
    }

    #[test]
    fn unknown_category_is_fatal() {
        let body = WHIP.replace("Melee weapons - high level\",", "Hats\",");
        assert!(matches!(
            parse_item_detail(body.as_bytes()),
            Err(Error::Model(ge_shared_models::Error::Format(_)))
        ));
    }

    #[test]
    fn unknown_trend_is_fatal() {
        let body = WHIP.replace(r#""trend":"positive""#, r#""trend":"up""#);
        assert!(matches!(
            parse_item_detail(body.as_bytes()),
            Err(Error::Model(ge_shared_models::Error::Format(_)))
        ));
    }

    #[test]
    fn bad_price_is_fatal() {
        let body = WHIP.replace(r#""price":"1.2m""#, r#""price":"1.2M""#);
        assert!(matches!(
            parse_item_detail(body.as_bytes()),
            Err(Error::Model(ge_shared_models::Error::Format(_)))
        ));
    }

    #[test]
    fn missing_trend_object_is_fatal() {
        let body = WHIP.replace(r#""day90":{"trend":"negative","change":"-1.0%"},"#, "");
        assert!(parse_item_detail(body.as_bytes()).is_err());
    }

    #[test]
    fn malformed_json_is_fatal() {
        assert!(matches!(
            parse_item_detail(br#"{"item":{"id":1"#),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn repeated_keys_are_rejected() {
        let body = WHIP.replace(
            r#""name":"Abyssal whip","#,
            r#""name":"Abyssal whip","name":"Dragon whip","#,
        );
        assert!(matches!(
            parse_item_detail(body.as_bytes()),
            Err(Error::Json(_))
        ));
    }
}
