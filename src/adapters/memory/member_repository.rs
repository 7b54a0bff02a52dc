use crate::domain::member::Member;
use crate::domain::value_objects::MemberId;
use crate::ports::member_repository::{MemberRepository as MemberRepositoryTrait, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory implementation of the member store
///
/// Members are kept in a `HashMap` keyed by member id.
/// Reference implementation, no external persistence.
pub struct MemberRepository {
    members: Mutex<HashMap<MemberId, Member>>,
}

impl MemberRepository {
    pub fn new() -> Self {
        Self {
            members: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for MemberRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MemberRepositoryTrait for MemberRepository {
    /// Missing ids yield `Ok(None)`
    async fn find_by_id(&self, id: MemberId) -> Result<Option<Member>> {
        Ok(self.members.lock().unwrap().get(&id).cloned())
    }

    /// Snapshot of clones; mutating the result does not touch the store
    async fn find_all(&self) -> Result<Vec<Member>> {
        Ok(self.members.lock().unwrap().values().cloned().collect())
    }

    /// An existing record with the same id is fully replaced
    async fn save(&self, member: Member) -> Result<()> {
        self.members.lock().unwrap().insert(member.id(), member);
        Ok(())
    }
}
