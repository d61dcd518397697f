use std::fmt;
use uuid::Uuid;

/// 小票 id (对调用方不透明)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReceiptId(String);

impl ReceiptId {
    /// 生成新的随机 id (UUID v4，128 位)
    pub fn issue() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ReceiptId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn issued_ids_are_unique() {
        let ids: HashSet<_> = (0..1000).map(|_| ReceiptId::issue()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn issued_id_is_hyphenated_uuid() {
        let id = ReceiptId::issue();
        assert_eq!(id.as_str().len(), 36);
        assert!(Uuid::parse_str(id.as_str()).is_ok());
    }
}
