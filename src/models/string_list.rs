use serde::{Deserialize, Serialize};
use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::postgres::{PgArgumentBuffer, PgTypeInfo, PgValueRef};
use sqlx::{Decode, Encode, Postgres, Type};

/// Ordered list of strings kept in a TEXT column as a JSON array.
///
/// Used for skills, software proficiency, disciplines and image links. Order is
/// preserved and every list survives `decode(encode(list))` unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StringList(pub Vec<String>);

impl StringList {
    pub fn new(items: Vec<String>) -> Self {
        Self(items)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn to_json(&self) -> String {
        encode(&self.0)
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        decode(raw).map(Self)
    }
}

impl From<Vec<String>> for StringList {
    fn from(items: Vec<String>) -> Self {
        Self(items)
    }
}

pub fn encode(items: &[String]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}

/// Blank input decodes to an empty list; rows written before a list was set hold `''`.
pub fn decode(raw: &str) -> serde_json::Result<Vec<String>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(raw)
}

impl Type<Postgres> for StringList {
    fn type_info() -> PgTypeInfo {
        <String as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <String as Type<Postgres>>::compatible(ty)
    }
}

impl<'q> Encode<'q, Postgres> for StringList {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> IsNull {
        <String as Encode<'q, Postgres>>::encode(self.to_json(), buf)
    }
}

impl<'r> Decode<'r, Postgres> for StringList {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        let raw = <&str as Decode<'r, Postgres>>::decode(value)?;
        Ok(StringList::from_json(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_list_encodes_as_brackets() {
        assert_eq!(encode(&[]), "[]");
        assert_eq!(StringList::default().to_json(), "[]");
    }

    #[test]
    fn list_value_survives_json_text() {
        let skills = StringList::from(list(&["Revit", "quote \" inside", ""]));
        assert_eq!(StringList::from_json(&skills.to_json()).unwrap(), skills);
        assert!(StringList::from_json("").unwrap().is_empty());
    }

    #[test]
    fn encodes_in_order() {
        assert_eq!(
            encode(&list(&["AutoCAD", "Revit", "SketchUp"])),
            r#"["AutoCAD","Revit","SketchUp"]"#
        );
    }

    #[test]
    fn round_trips_awkward_values() {
        let samples = [
            list(&["Adobe Creative Suite", "3D Modeling"]),
            list(&["quote \" inside", "comma, separated", "back\\slash"]),
            list(&["", "  ", "ünïcödé"]),
            list(&["b", "a", "b"]),
        ];
        for sample in samples {
            assert_eq!(decode(&encode(&sample)).unwrap(), sample);
        }
    }

    #[test]
    fn blank_column_decodes_to_empty() {
        assert!(decode("").unwrap().is_empty());
        assert!(decode("[]").unwrap().is_empty());
    }

    #[test]
    fn serializes_as_plain_json_array() {
        let skills = StringList::from(list(&["Rhino", "Grasshopper"]));
        assert_eq!(
            serde_json::to_string(&skills).unwrap(),
            r#"["Rhino","Grasshopper"]"#
        );
    }
}
