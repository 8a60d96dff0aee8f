pub mod memory_adapter;

#[cfg(feature = "postgres")]
pub mod postgres_adapter;
