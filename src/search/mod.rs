pub mod results;
pub mod executor;
pub mod batch;
pub mod request_queue;
pub mod paginator;
