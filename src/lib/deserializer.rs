// SPDX-License-Identifier: Apache-2.0

use std::convert::TryFrom;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::{de, de::Visitor, Deserializer};

// Accepts `100`, `"100"` and `"0x64"`, inspired by
// https://serde.rs/string-or-struct.html
struct IntegerOrString<T>(PhantomData<fn() -> Option<T>>);

impl<'de, T> Visitor<'de> for IntegerOrString<T>
where
    T: FromStr + TryFrom<u64>,
    <T as FromStr>::Err: std::fmt::Display,
    <T as TryFrom<u64>>::Error: std::fmt::Display,
{
    type Value = Option<T>;

    fn expecting(
        &self,
        formatter: &mut std::fmt::Formatter,
    ) -> std::fmt::Result {
        formatter.write_str("integer or string")
    }

    fn visit_str<E>(self, value: &str) -> Result<Option<T>, E>
    where
        E: de::Error,
    {
        let value = value.trim();
        if let Some(hex) = value.strip_prefix("0x") {
            let num = u64::from_str_radix(hex, 16).map_err(de::Error::custom)?;
            self.visit_u64(num)
        } else {
            FromStr::from_str(value).map_err(de::Error::custom).map(Some)
        }
    }

    fn visit_u64<E>(self, value: u64) -> Result<Option<T>, E>
    where
        E: de::Error,
    {
        TryFrom::try_from(value).map_err(de::Error::custom).map(Some)
    }

    fn visit_i64<E>(self, value: i64) -> Result<Option<T>, E>
    where
        E: de::Error,
    {
        let value = u64::try_from(value).map_err(de::Error::custom)?;
        self.visit_u64(value)
    }

    fn visit_none<E>(self) -> Result<Option<T>, E>
    where
        E: de::Error,
    {
        Ok(None)
    }

    fn visit_unit<E>(self) -> Result<Option<T>, E>
    where
        E: de::Error,
    {
        Ok(None)
    }
}

pub(crate) fn option_u16_or_string<'de, D>(
    deserializer: D,
) -> Result<Option<u16>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(IntegerOrString::<u16>(PhantomData))
}

pub(crate) fn option_u64_or_string<'de, D>(
    deserializer: D,
) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(IntegerOrString::<u64>(PhantomData))
}
