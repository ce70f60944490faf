use std::time::{Duration,Instant};

// Cancellable periodic schedule.  wait() sleeps the calling thread
// until the next due tick; a zero delay never sleeps.  reschedule()
// drops the pending tick and starts a fresh schedule at the new
// delay, so no tick fires at the old cadence afterwards.

pub struct Ticker {
    delay:Duration,
    due:Instant
}

impl Ticker {
    pub fn new(delay_ms:u64)->Self {
	let delay = Duration::from_millis(delay_ms);
	Ticker{ delay,due:Instant::now() + delay }
    }

    pub fn delay_ms(&self)->u64 {
	self.delay.as_millis() as u64
    }

    pub fn reschedule(&mut self,delay_ms:u64) {
	self.delay = Duration::from_millis(delay_ms);
	self.due = Instant::now() + self.delay;
    }

    pub fn wait(&mut self) {
	if !self.delay.is_zero() {
	    let now = Instant::now();
	    if self.due > now {
		std::thread::sleep(self.due - now);
	    }
	}
	// fixed-rate schedule; late ticks fire immediately
	self.due += self.delay;
    }
}

#[cfg(test)]
#[test]
fn test_zero_delay_never_sleeps() {
    let mut ticker = Ticker::new(0);
    let t0 = Instant::now();
    for _ in 0..1000 {
	ticker.wait();
    }
    assert!(t0.elapsed() < Duration::from_millis(100));
}

#[cfg(test)]
#[test]
fn test_reschedule_replaces_delay() {
    let mut ticker = Ticker::new(250);
    ticker.reschedule(0);
    assert_eq!(ticker.delay_ms(),0);
    let t0 = Instant::now();
    ticker.wait();
    assert!(t0.elapsed() < Duration::from_millis(100));
}
