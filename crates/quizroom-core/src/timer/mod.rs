mod countdown;
mod ticker;

pub use countdown::{Countdown, CountdownSignal, CountdownTimer};
pub use ticker::{Clock, ManualClock, MonotonicClock, Ticker};
