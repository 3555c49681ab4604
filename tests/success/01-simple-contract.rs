use logwright::{contract, Level, Record, Sink};

#[contract]
pub trait NetworkEvents {
    #[event(id = 0, level = "critical", message = "Could not open socket to `{host_name}`")]
    fn connection_failed(&self, host_name: &str);

    #[event(id = 1, level = "info", message = "{bytes} bytes sent to {host_name}")]
    fn payload_sent(&self, host_name: &str, bytes: u64);
}

struct Stdout;

impl Sink for Stdout {
    fn enabled(&self, level: Level) -> bool {
        level >= Level::Info
    }

    fn emit(&self, record: &Record<'_>) {
        println!("{} {}", record.name(), record.render());
    }
}

fn main() {
    let log = NetworkEventsLogger::new(Stdout);
    log.connection_failed("example.com");
    log.payload_sent("example.com", 42);
    ConnectionFailedEvent::emit(&Stdout, "direct.example");
}
