pub mod request_dump;

pub use request_dump::request_dump_middleware;
