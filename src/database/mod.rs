pub mod jobs;
pub mod memory;
pub mod pool;
pub mod users;

pub use jobs::{JobRepository, PgJobRepository};
pub use memory::{InMemoryJobRepository, InMemoryUserRepository};
pub use users::{PgUserRepository, UserRepository};
