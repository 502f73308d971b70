use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// Вместимость и цена хранятся в том виде, в каком пришли: число из JSON
// или строка из формы.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub room_number: String,
    pub seats_available: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Value>,
    pub price_per_hour: Value,
}

// Сырые поля запроса POST /create-room. Проверка наличия
// выполняется в хранилище, здесь только декодирование.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
    pub room_number: Option<Value>,
    pub seats_available: Option<Value>,
    /// `None` - поле не передано; явный `null` сохраняется как `Some(Null)`.
    #[serde(default, deserialize_with = "present_value")]
    pub amenities: Option<Value>,
    pub price_per_hour: Option<Value>,
}

fn present_value<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn explicit_null_amenities_are_kept() {
        let with_null: CreateRoomRequest =
            serde_json::from_value(json!({ "roomNumber": "R1", "amenities": null })).unwrap();
        let without: CreateRoomRequest =
            serde_json::from_value(json!({ "roomNumber": "R1" })).unwrap();

        assert_eq!(with_null.amenities, Some(Value::Null));
        assert_eq!(without.amenities, None);
    }
}
