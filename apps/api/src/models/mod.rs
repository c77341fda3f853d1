pub mod analysis;
pub mod job;
pub mod resume;

/// Fresh opaque record id.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
