//! User-facing notices
//!
//! A synchronous "alert the user" channel, used by the checker middleware to
//! explain rejections and by action creators to report failed service calls.

/// Shows a message to the user
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

/// Prints notices to stdout, next to the rendered lists
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn alert(&self, message: &str) {
        log::info!("Notice: {}", message);
        println!("! {}", message);
    }
}

#[cfg(test)]
pub use recording::RecordingNotifier;

#[cfg(test)]
mod recording {
    use super::Notifier;
    use parking_lot::Mutex;

    /// Keeps every notice for later inspection
    #[derive(Default)]
    pub struct RecordingNotifier {
        messages: Mutex<Vec<String>>,
    }

    impl RecordingNotifier {
        pub fn messages(&self) -> Vec<String> {
            self.messages.lock().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn alert(&self, message: &str) {
            self.messages.lock().push(message.to_string());
        }
    }
}
