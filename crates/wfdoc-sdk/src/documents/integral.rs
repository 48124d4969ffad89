use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Number;
use wfdoc_core::is_integral;

// Same integer rule as the validators, so a document that validates always
// decodes. The number is kept as-is since it may not fit an `i64`.
pub(crate) fn integer<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Number, D::Error> {
    let number = Number::deserialize(deserializer)?;
    if is_integral(&number) {
        Ok(number)
    } else {
        Err(D::Error::custom(format!("expected integer, found {number}")))
    }
}

pub(crate) fn integer_pair<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<[Number; 2], D::Error> {
    let [x, y] = <[Number; 2]>::deserialize(deserializer)?;
    if is_integral(&x) && is_integral(&y) {
        Ok([x, y])
    } else {
        Err(D::Error::custom(format!("expected integer pair, found [{x}, {y}]")))
    }
}
