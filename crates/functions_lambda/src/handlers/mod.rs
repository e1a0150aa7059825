pub mod api;
pub mod consumers;
pub mod events;
pub mod hello;
pub mod uuid_batch;
pub mod weather;
