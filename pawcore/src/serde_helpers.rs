use serde::{de, Deserialize, Deserializer};
use std::{
    fmt::Display,
    str::FromStr,
};

/// HTML forms submit an empty string for an unselected option; treat
/// that the same as the field being absent.
pub(crate) fn empty_string_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let opt = Option::<String>::deserialize(de)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => FromStr::from_str(s).map_err(de::Error::custom).map(Some),
    }
}

/// An unchecked checkbox is simply not submitted.
pub(crate) fn checkbox<'de, D>(de: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(de)?;
    Ok(opt
        .map(|s| matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "on" | "true" | "1" | "yes",
        ))
        .unwrap_or(false)
    )
}
