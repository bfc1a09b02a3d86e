//! Driver Repository Implementations

mod in_memory;
mod postgres;

pub use in_memory::InMemoryDriverRepository;
pub use postgres::PostgresDriverRepository;
