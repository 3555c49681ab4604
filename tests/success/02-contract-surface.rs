use std::sync::Arc;

use logwright::{contract, Capture, Level, Record, Sink};

#[contract]
trait KernelEvents {
    #[event(id = 0, level = "trace", message = "tick")]
    fn tick(&self);

    #[event(id = 1, level = "debug", message = "queue {{depth}} is {depth}", name = "QueueDepth")]
    fn queue_sampled(&self, depth: usize, r#virtual: bool);

    #[event(id = 2, level = "warning", message = "load {load} on cpu {cpu}")]
    fn overloaded(&self, cpu: u8, load: f32);
}

#[contract]
trait AuditEvents {
    #[event(id = 0, level = "error", message = "{actor} rejected: {code}")]
    fn rejected(&self, actor: &str, code: i64);
}

struct Quiet;

impl Sink for Quiet {
    fn enabled(&self, _level: Level) -> bool {
        false
    }

    fn emit(&self, _record: &Record<'_>) {
        unreachable!()
    }
}

fn main() {
    assert_eq!(QueueSampledEvent::ID, 1);
    assert_eq!(QueueSampledEvent::NAME, "QueueDepth");
    assert_eq!(QueueSampledEvent::LEVEL, Level::Debug);
    assert_eq!(QueueSampledEvent::TEMPLATE, "queue {{depth}} is {depth}");

    let event = QueueSampledEvent {
        depth: 3,
        r#virtual: true,
    };
    assert_eq!(event.render(), "queue {depth} is 3");
    assert_eq!(event.len(), 2);

    let shared = Arc::new(Quiet);
    let kernel = KernelEventsLogger::new(Arc::clone(&shared));
    kernel.tick();
    kernel.queue_sampled(9, false);
    kernel.overloaded(0, 0.5);

    let audit = AuditEventsLogger::new(Quiet);
    audit.rejected("root", -1);
    let _sink = audit.into_inner();
}
