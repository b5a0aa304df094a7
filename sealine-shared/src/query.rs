use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifies one issued search query. The generation is compared against
/// the session's current generation to discard responses that were
/// superseded while in flight; the id is for log correlation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryTicket {
    pub id: Uuid,
    pub generation: u64,
}

impl QueryTicket {
    pub fn new(generation: u64) -> Self {
        Self {
            id: Uuid::new_v4(),
            generation,
        }
    }
}
