use crate::Error;
use ge_shared_models::{Scalar, Trend};
use serde_json::{Map, Value};

/// A nested `{"trend": ..., "<field>": ...}` object.
pub(crate) type RawFigure = Map<String, Value>;

/// Reads the trend and the figure stored under `field`, converting the
/// figure's text with `transform`.
///
/// `current` and `today` carry their figure under `price` as a suffixed
/// number; the `dayN` objects carry a percentage string under `change`.
/// An unknown trend name fails the whole parse.
pub(crate) fn trend_figure<T>(
    figure: &RawFigure,
    field: &str,
    transform: impl Fn(&str) -> Result<T, ge_shared_models::Error>,
) -> Result<(Trend, T), Error> {
    let trend = figure
        .get("trend")
        .ok_or_else(|| ge_shared_models::Error::missing("trend"))?;
    let trend_name = Scalar::from_value("trend", trend)?;
    let trend = Trend::from_name(&trend_name.text()).ok_or_else(|| {
        ge_shared_models::Error::format(format!("unknown trend {:?}", trend_name.text()))
    })?;

    let value = figure
        .get(field)
        .ok_or_else(|| ge_shared_models::Error::missing(field))?;
    let value = transform(&Scalar::from_value(field, value)?.text())?;

    Ok((trend, value))
}

pub(crate) fn required<T>(field: &str, value: Option<T>) -> Result<T, Error> {
    Ok(value.ok_or_else(|| ge_shared_models::Error::missing(field))?)
}
