use chrono::{Duration, Utc};
use ics::{Calendar, Event, Value};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let now = Utc::now();
    let mut cal = Calendar::new();
    cal.set("X-WR-CALNAME", "Demo calendar");

    for (i, summary) in ["Planning, part 1", "Review; bring notes"].iter().enumerate() {
        let start = now + Duration::days(i as i64 + 1);
        let mut event = Event::new();
        event.set("uid", format!("{i}@demo.ics.rs"));
        event.set("dtstamp", now);
        event.set("dtstart", start);
        event.set("dtend", start + Duration::hours(1));
        event.set("summary", *summary);
        event.set("description", "A long description that will not fit on a single line and is therefore folded.\nSecond line.");
        // Skipped with a warning, run with RUST_LOG=warn to see it
        event.set("x-attendees", Value::from_any(3usize));
        cal.add(event).unwrap();
    }

    cal.encode(std::io::stdout().lock()).unwrap();
}
