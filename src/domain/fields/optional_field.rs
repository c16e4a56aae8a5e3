//! 3상태(tri-state) 선택 필드
//!
//! JSON 본문의 한 필드가 가질 수 있는 세 가지 상태를 구분합니다.
//!
//! | JSON | 상태 |
//! |------|------|
//! | 키 없음 | [`OptionalField::Absent`] |
//! | `"key": null` | [`OptionalField::Null`] |
//! | `"key": "value"` | [`OptionalField::Value`] |
//!
//! ## 역직렬화 규칙
//!
//! 키가 없는 경우를 구분하려면 해당 필드(또는 구조체)에 반드시
//! `#[serde(default)]`를 붙여야 합니다. 그렇지 않으면 serde가 누락된 키를
//! `null`로 취급하여 `Null`이 됩니다.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 요청 본문 필드의 3상태 래퍼
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OptionalField<T> {
    /// 키가 본문에 존재하지 않음
    #[default]
    Absent,
    /// 키가 명시적으로 `null`
    Null,
    /// 키에 값이 존재
    Value(T),
}

impl<T> OptionalField<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, OptionalField::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, OptionalField::Null)
    }

    /// 키가 존재하고 값이 `null`이 아닌 경우에만 `true`
    ///
    /// 부분 수정(PATCH)에서 "명시적으로 제공된 필드"의 기준입니다.
    pub fn is_supplied(&self) -> bool {
        matches!(self, OptionalField::Value(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            OptionalField::Value(value) => Some(value),
            _ => None,
        }
    }

    /// 값만 꺼냅니다. `Absent`와 `Null`은 모두 `None`이 됩니다.
    pub fn into_option(self) -> Option<T> {
        match self {
            OptionalField::Value(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> From<Option<T>> for OptionalField<T> {
    /// 존재하는 키의 값으로 간주합니다. `None`은 `Null`이 됩니다.
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => OptionalField::Value(value),
            None => OptionalField::Null,
        }
    }
}

impl<'de, T> Deserialize<'de> for OptionalField<T>
where
    T: Deserialize<'de>,
{
    /// 이 함수는 키가 존재할 때만 호출됩니다. 키가 없으면 `Default`(`Absent`)가 사용됩니다.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(OptionalField::from)
    }
}

impl<T> Serialize for OptionalField<T>
where
    T: Serialize,
{
    /// `Absent`는 `skip_serializing_if = "OptionalField::is_absent"`와 함께 사용해야
    /// 키 자체가 생략됩니다. 단독으로 직렬화하면 `null`이 됩니다.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            OptionalField::Value(value) => serializer.serialize_some(value),
            _ => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize, Serialize)]
    #[serde(default)]
    struct Sample {
        #[serde(skip_serializing_if = "OptionalField::is_absent")]
        name: OptionalField<String>,
        #[serde(skip_serializing_if = "OptionalField::is_absent")]
        email: OptionalField<String>,
    }

    #[test]
    fn test_distinguishes_three_states() {
        let sample: Sample = serde_json::from_str(r#"{"name": null}"#).unwrap();

        assert!(sample.name.is_null());
        assert!(!sample.name.is_supplied());
        assert!(sample.email.is_absent());

        let sample: Sample = serde_json::from_str(r#"{"email": "a@b.com"}"#).unwrap();
        assert!(sample.name.is_absent());
        assert_eq!(sample.email, OptionalField::Value("a@b.com".to_string()));
        assert!(sample.email.is_supplied());
    }

    #[test]
    fn test_empty_string_is_a_value() {
        let sample: Sample = serde_json::from_str(r#"{"name": ""}"#).unwrap();
        assert_eq!(sample.name, OptionalField::Value(String::new()));
    }

    #[test]
    fn test_wrong_scalar_type_is_rejected() {
        assert!(serde_json::from_str::<Sample>(r#"{"name": 42}"#).is_err());
        assert!(serde_json::from_str::<Sample>(r#"{"name": ["x"]}"#).is_err());
    }

    #[test]
    fn test_serialize_skips_absent_keeps_null() {
        let sample = Sample {
            name: OptionalField::Null,
            email: OptionalField::Absent,
        };
        assert_eq!(serde_json::to_string(&sample).unwrap(), r#"{"name":null}"#);
    }

    #[test]
    fn test_accessors() {
        let field = OptionalField::Value("kim".to_string());
        assert_eq!(field.value().map(String::as_str), Some("kim"));
        assert_eq!(field.into_option(), Some("kim".to_string()));

        assert_eq!(OptionalField::<String>::Null.into_option(), None);
        assert_eq!(OptionalField::<String>::Absent.into_option(), None);
        assert_eq!(OptionalField::from(None::<String>), OptionalField::Null);
    }
}
