use std::time::Duration;

pub trait Sleeper {
    fn sleep(&self, duration: Duration);
}

/// Blocks the calling worker thread; safe on a multi-threaded tokio runtime.
#[derive(Debug, Default, Clone, Copy)]
pub struct BlockingSleeper;

impl Sleeper for BlockingSleeper {
    fn sleep(&self, duration: Duration) {
        tokio::task::block_in_place(|| std::thread::sleep(duration));
    }
}
