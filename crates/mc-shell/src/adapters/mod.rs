mod notifier;

pub use notifier::TracingNotifier;
