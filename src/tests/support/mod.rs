pub mod app_state_builder;
pub mod fixtures;
pub mod http;
pub mod in_memory_store;
