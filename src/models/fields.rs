//! Приведение сырых полей запроса к типам модели.
//!
//! Тела запросов приходят как JSON или как форма, поэтому числа могут
//! оказаться строками. Поле считается отсутствующим, если оно `null`,
//! `false`, `0` или пустая строка.

use serde_json::Value;

pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map_or(true, |n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Возвращает значение, только если оно "заполнено".
pub fn required(value: Option<Value>) -> Option<Value> {
    value.filter(is_truthy)
}

pub fn to_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        other => other.to_string(),
    }
}
