//! Identifiers for generated `<ng-template>` declarations

use uuid::Uuid;

/// Length of every identifier produced by `RandomIdSource`
pub const ID_LENGTH: usize = 32;

/// Source of opaque template identifiers.
///
/// Tokens only need to be unique within one transformed file; the render
/// context redraws a token it has already handed out.
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random (v4) UUIDs in their simple form: 32 lowercase hex digits
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdSource;

impl RandomIdSource {
    pub fn new() -> Self {
        RandomIdSource
    }
}

impl IdSource for RandomIdSource {
    fn next_id(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}
