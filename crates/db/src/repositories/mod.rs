//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod account_repo;
pub mod note_repo;
pub mod session_repo;
pub mod slot_repo;
pub mod user_repo;

pub use account_repo::AccountRepo;
pub use note_repo::NoteRepo;
pub use session_repo::SessionRepo;
pub use slot_repo::SlotRepo;
pub use user_repo::UserRepo;
