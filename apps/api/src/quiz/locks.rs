use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

/// Per-user async mutexes. Submissions for the same user run one at a time;
/// different users never contend beyond the short map lookup.
#[derive(Default)]
pub struct UserLocks {
    locks: Mutex<HashMap<Uuid, Arc<Mutex<()>>>>,
}

impl UserLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to `user_id`. Released when the guard drops.
    pub async fn acquire(&self, user_id: Uuid) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            // Drop entries nobody holds or waits on.
            locks.retain(|id, lock| *id == user_id || Arc::strong_count(lock) > 1);
            locks.entry(user_id).or_default().clone()
        };
        lock.lock_owned().await
    }

    #[cfg(test)]
    async fn tracked(&self) -> usize {
        self.locks.lock().await.len()
    }
}
