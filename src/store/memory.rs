use dashmap::DashMap;

use super::id::ReceiptId;

/// 内存积分存储
///
/// 进程内有效，无淘汰、无持久化。DashMap 分片加锁，
/// `put` 返回后同一 id 的 `get` 必然可见。
#[derive(Debug, Default)]
pub struct ReceiptStore {
    points: DashMap<ReceiptId, i64>,
}

impl ReceiptStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录积分 (同 id 重复写入则覆盖)
    pub fn put(&self, id: ReceiptId, points: i64) {
        self.points.insert(id, points);
    }

    /// 查询积分；0 分也是有效记录
    pub fn get(&self, id: &ReceiptId) -> Option<i64> {
        self.points.get(id).map(|entry| *entry.value())
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn put_then_get() {
        let store = ReceiptStore::new();
        let id = ReceiptId::issue();
        store.put(id.clone(), 28);
        assert_eq!(store.get(&id), Some(28));
        assert_eq!(store.get(&id), Some(28));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn zero_points_are_present() {
        let store = ReceiptStore::new();
        let id = ReceiptId::issue();
        store.put(id.clone(), 0);
        assert_eq!(store.get(&id), Some(0));
    }

    #[test]
    fn unknown_id_is_absent() {
        let store = ReceiptStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get(&ReceiptId::from("does-not-exist".to_string())), None);
    }

    #[test]
    fn put_overwrites() {
        let store = ReceiptStore::new();
        let id = ReceiptId::issue();
        store.put(id.clone(), 1);
        store.put(id.clone(), 2);
        assert_eq!(store.get(&id), Some(2));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn concurrent_writers() {
        let store = Arc::new(ReceiptStore::new());
        let handles: Vec<_> = (0..8)
            .map(|n| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    (0..100)
                        .map(|_| {
                            let id = ReceiptId::issue();
                            store.put(id.clone(), n);
                            (id, n)
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            for (id, n) in handle.join().unwrap() {
                assert_eq!(store.get(&id), Some(n));
            }
        }
        assert_eq!(store.len(), 800);
    }
}
