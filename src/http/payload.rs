//! Payload sources shared by every request.
//!
//! The seed buffer is filled once from the OS random source and then only
//! ever cloned. `Bytes` clones share the allocation, so streaming `n` KiB
//! costs one reference-count bump per chunk rather than `n` KiB of memory.

use std::convert::Infallible;

use axum::body::{Body, Bytes};
use futures_util::stream;
use rand::{rngs::OsRng, RngCore};

/// Success body for requests with nothing else to say.
pub const ACK: &str = "OK";

/// Size of the seed buffer, and of each chunk of a `/data/:size` response.
pub const SEED_LEN: usize = 1024;

/// Fixed 1 KiB of random filler, immutable for the life of the process.
#[derive(Debug, Clone)]
pub struct SeedBuffer(Bytes);

impl SeedBuffer {
    /// Fill a new buffer from the operating system CSPRNG.
    pub fn random() -> Result<Self, rand::Error> {
        let mut buf = vec![0u8; SEED_LEN];
        OsRng.try_fill_bytes(&mut buf)?;
        Ok(Self(Bytes::from(buf)))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Total length of `count` repetitions, if it fits in a `u64`.
    pub fn repeated_len(count: u64) -> Option<u64> {
        count.checked_mul(SEED_LEN as u64)
    }

    /// A response body that yields the buffer `count` times.
    ///
    /// Chunks are produced lazily as hyper polls the body, so a client that
    /// stops reading (or disconnects) stops the generation too.
    pub fn repeated(&self, count: u64) -> Body {
        if count == 0 {
            return Body::empty();
        }
        let chunk = self.0.clone();
        let chunks = stream::iter((0..count).map(move |_| Ok::<_, Infallible>(chunk.clone())));
        Body::from_stream(chunks)
    }
}
