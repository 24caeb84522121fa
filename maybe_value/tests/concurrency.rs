//! Containers are plain immutable values that can be shared across threads.

use std::sync::Arc;
use std::thread;

use maybe_value::{Maybe, State};

const fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn default_payload_is_thread_safe() {
    assert_send_sync::<Maybe<String>>();
    assert_send_sync::<Maybe<Vec<u8>, std::io::Error>>();
}

#[test]
fn shared_container_reads_the_same_everywhere() {
    let shared: Arc<Maybe<u64>> = Arc::new(Maybe::from_value(7));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let maybe = Arc::clone(&shared);
            thread::spawn(move || (maybe.state(), maybe.value().copied()))
        })
        .collect();
    for handle in handles {
        let (state, value) = handle.join().expect("reader thread panicked");
        assert_eq!(state, State::Value);
        assert_eq!(value, Ok(7));
    }
}
