use crate::domain::value_objects::LoanId;
use crate::ports::id_source::LoanIdSource;
use std::sync::atomic::{AtomicI64, Ordering};

/// 連番の貸出IDソース
///
/// プロセス全体で1から始まる連番をアトミックに発行する。
/// 実行中にリセットされることはなく、再起動をまたぐ永続化はしない。
pub struct SequentialIdSource {
    next: AtomicI64,
}

impl SequentialIdSource {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// 指定値から発行を始める
    ///
    /// 永続ストアと組み合わせる場合に、既存の最大IDの次から
    /// 再開するために使う。`first`は正であること。
    pub fn starting_at(first: i64) -> Self {
        Self {
            next: AtomicI64::new(first.max(1)),
        }
    }
}

impl Default for SequentialIdSource {
    fn default() -> Self {
        Self::new()
    }
}

impl LoanIdSource for SequentialIdSource {
    fn next_id(&self) -> LoanId {
        let raw = self.next.fetch_add(1, Ordering::Relaxed);
        // カウンタは1始まりの単調増加なので常に正
        LoanId::new(raw).expect("sequential counter issues positive ids")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_start_at_one_and_increase() {
        let source = SequentialIdSource::new();
        assert_eq!(source.next_id().value(), 1);
        assert_eq!(source.next_id().value(), 2);
        assert_eq!(source.next_id().value(), 3);
    }

    #[test]
    fn test_concurrent_issuance_yields_distinct_ids() {
        use std::collections::HashSet;
        use std::sync::Arc;

        let source = Arc::new(SequentialIdSource::new());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let source = Arc::clone(&source);
            handles.push(std::thread::spawn(move || {
                (0..100).map(|_| source.next_id().value()).collect::<Vec<_>>()
            }));
        }

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(id > 0);
                assert!(seen.insert(id), "id {} issued twice", id);
            }
        }
        assert_eq!(seen.len(), 800);
    }
}
