use serde::Serialize;
use serde_json::Value;

/// 失败时返回给调用方的结构
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub message: String,
    pub error: Value,
}

/// 成功时带提示语的结构，`data` 字段名随接口变化
#[derive(Debug, Serialize)]
pub struct MessageEnvelope {
    pub message: &'static str,
    #[serde(flatten)]
    pub data: Value,
}

#[derive(Debug, Serialize)]
pub struct DataEnvelope {
    pub data: Value,
}

impl MessageEnvelope {
    pub fn new(message: &'static str, field: &str, data: Value) -> Self {
        let mut wrapped = serde_json::Map::new();
        wrapped.insert(field.to_string(), data);
        Self {
            message,
            data: Value::Object(wrapped),
        }
    }
}
