use itertools::Itertools;

// Join continuation lines back onto the line they belong to
pub fn unfold(input: &[u8]) -> Vec<Vec<u8>> {
    let mut lines: Vec<Vec<u8>> = vec![];
    let text = input.strip_suffix(b"\r\n").unwrap_or(input);
    for physical in split_crlf(text) {
        match physical.strip_prefix(b" ") {
            Some(continuation) => lines.last_mut().unwrap().extend_from_slice(continuation),
            None => lines.push(physical.to_vec()),
        }
    }
    lines
}

pub fn split_crlf(input: &[u8]) -> Vec<&[u8]> {
    let mut out = vec![];
    let mut rest = input;
    while let Some(pos) = rest.windows(2).position(|w| w == b"\r\n") {
        out.push(&rest[..pos]);
        rest = &rest[pos + 2..];
    }
    out.push(rest);
    out
}

pub fn property_names(lines: &[Vec<u8>]) -> Vec<String> {
    lines
        .iter()
        .map(|line| String::from_utf8_lossy(line).into_owned())
        .filter(|line| !line.starts_with("BEGIN:") && !line.starts_with("END:"))
        .map(|line| line.split_once(':').unwrap().0.to_owned())
        .collect_vec()
}

pub mod calendar {
    use chrono::{FixedOffset, TimeZone, Utc};
    use ics::{Calendar, Emitter, Event, Value};

    #[test]
    fn single_event() {
        let mut cal = Calendar::new();
        cal.add(Event::from([("test", "abcd")])).unwrap();
        let mut out = vec![];
        cal.encode(&mut out).unwrap();
        similar_asserts::assert_eq!(
            String::from_utf8(out).unwrap(),
            "BEGIN:VCALENDAR\r\n\
             CALSCAL:GREGORIAN\r\n\
             PRODID:-//ics.rs//iCalendar Encoder//EN\r\n\
             VERSION:2.0\r\n\
             BEGIN:VEVENT\r\n\
             TEST:abcd\r\n\
             END:VEVENT\r\n\
             END:VCALENDAR\r\n"
        );
    }

    #[test]
    fn full_calendar() {
        let mut cal = Calendar::new();
        cal.set("X-WR-CALNAME", "Team, \"Ops\"");
        let start = FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2020, 6, 15, 10, 30, 0)
            .unwrap();
        cal.push(Event::from([
            ("uid", Value::from("1@example.com")),
            ("dtstart", Value::from(start)),
            ("summary", Value::from("Standup; daily")),
            ("description", Value::from("Line one\nLine two")),
        ]));
        cal.push(Event::from([
            ("uid", Value::from("2@example.com")),
            (
                "dtstamp",
                Value::from(Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap()),
            ),
            ("sequence", Value::custom(3)),
        ]));
        let out = String::from_utf8(cal.generate().unwrap()).unwrap();
        insta::assert_snapshot!(out.replace("\r\n", "\n"), @r#"
        BEGIN:VCALENDAR
        CALSCAL:GREGORIAN
        PRODID:-//ics.rs//iCalendar Encoder//EN
        VERSION:2.0
        X-WR-CALNAME:Team\, "Ops"
        BEGIN:VEVENT
        DESCRIPTION:Line one\nLine two
        DTSTART:20200615T083000Z
        SUMMARY:Standup\; daily
        UID:1@example.com
        END:VEVENT
        BEGIN:VEVENT
        DTSTAMP:20200102T030405Z
        SEQUENCE:3
        UID:2@example.com
        END:VEVENT
        END:VCALENDAR
        "#);
    }

    #[test]
    fn events_keep_insertion_order() {
        let mut cal = Calendar::new();
        for uid in ["c", "a", "b"] {
            cal.push(Event::from([("uid", uid)]));
        }
        let out = String::from_utf8(cal.generate().unwrap()).unwrap();
        let uids = out
            .lines()
            .filter_map(|line| line.strip_prefix("UID:"))
            .map(|uid| uid.trim_end_matches('\r'))
            .collect::<Vec<_>>();
        assert_eq!(uids, vec!["c", "a", "b"]);
    }

    #[test]
    fn removed_defaults_are_not_written() {
        let mut cal = Calendar::new();
        cal.remove("calscal");
        let out = String::from_utf8(cal.generate().unwrap()).unwrap();
        assert!(!out.contains("CALSCAL"));
        assert!(out.contains("VERSION:2.0\r\n"));
    }

    #[test]
    fn encoding_is_idempotent() {
        let mut cal = Calendar::new();
        cal.push(Event::from([("summary", "x".repeat(300)), ("uid", "u".to_owned())]));
        assert_eq!(cal.generate().unwrap(), cal.generate().unwrap());
    }

    #[test]
    fn shared_between_threads() {
        let mut cal = Calendar::new();
        cal.push(Event::from([("summary", Value::custom("shared"))]));
        let expected = cal.generate().unwrap();
        std::thread::scope(|scope| {
            let handles = (0..4)
                .map(|_| scope.spawn(|| cal.generate().unwrap()))
                .collect::<Vec<_>>();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}

pub mod folding {
    use crate::{split_crlf, unfold};
    use ics::{Calendar, Emitter, Event, generator::MAX_LINE_OCTETS};

    #[test]
    fn long_values_are_folded() {
        let description = "Ünïcödé and a rather long description, with commas; ".repeat(8);
        let mut cal = Calendar::new();
        cal.push(Event::from([("description", description.as_str())]));
        let out = cal.generate().unwrap();

        assert!(out.ends_with(b"\r\n"));
        let body = out.strip_suffix(b"\r\n").unwrap();
        for line in split_crlf(body) {
            assert!(line.len() <= MAX_LINE_OCTETS, "{} octets", line.len());
            assert!(!line.contains(&b'\r') && !line.contains(&b'\n'));
        }

        let logical = unfold(&out);
        let line = logical
            .iter()
            .find(|line| line.starts_with(b"DESCRIPTION:"))
            .unwrap();
        let value = std::str::from_utf8(&line[b"DESCRIPTION:".len()..]).unwrap();
        assert_eq!(ics::generator::unescape_text(value), description);
    }
}

pub mod ordering {
    use crate::{property_names, unfold};
    use ics::{Emitter, Event};
    use itertools::Itertools;

    #[test]
    fn properties_are_sorted_by_canonical_name() {
        let event = Event::from([
            ("x-custom", "1"),
            ("Dtend", "2"),
            ("attendee", "3"),
            ("DTSTART", "4"),
            ("a-b", "5"),
            ("ab", "6"),
        ]);
        let names = property_names(&unfold(&event.generate().unwrap()));
        assert_eq!(names, vec!["A-B", "AB", "ATTENDEE", "DTEND", "DTSTART", "X-CUSTOM"]);
        assert!(names.iter().tuple_windows().all(|(a, b)| a < b));
    }
}

pub mod errors {
    use ics::{
        Calendar, EncodeError, Encoder, EncoderOptions, Event, Value, generator::Diagnostic,
    };
    use std::io::{self, Write};

    struct LimitedSink {
        written: Vec<u8>,
        capacity: usize,
    }

    impl Write for LimitedSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.written.len() + buf.len() > self.capacity {
                return Err(io::Error::other("disk full"));
            }
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn calendar_with_unsupported() -> Calendar {
        let mut cal = Calendar::new();
        cal.push(Event::from([
            ("summary", Value::from("kept")),
            ("priority", Value::from_any(5i64)),
        ]));
        cal
    }

    #[test]
    fn lenient_skips_property() {
        let cal = calendar_with_unsupported();
        let mut diagnostics: Vec<Diagnostic> = vec![];
        let mut encoder = Encoder::new(vec![]).with_diagnostics(&mut diagnostics);
        encoder.encode_calendar(&cal).unwrap();
        let out = String::from_utf8(encoder.into_inner()).unwrap();

        assert!(out.contains("SUMMARY:kept\r\n"));
        assert!(!out.contains("PRIORITY"));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].to_string(),
            "property PRIORITY: unsupported value type i64, skipped"
        );
    }

    #[test]
    fn default_encode_is_lenient() {
        let mut out = vec![];
        calendar_with_unsupported().encode(&mut out).unwrap();
        assert!(!out.is_empty());
    }

    #[test]
    fn strict_fails() {
        let cal = calendar_with_unsupported();
        let mut encoder = Encoder::new(vec![]).with_options(EncoderOptions {
            strict: true,
            ..Default::default()
        });
        let err = encoder.encode_calendar(&cal).unwrap_err();
        assert_eq!(
            err.to_string(),
            "property PRIORITY: unsupported value type i64"
        );
    }

    #[test]
    fn sink_error_aborts_with_partial_output() {
        let mut cal = Calendar::new();
        cal.push(Event::from([("summary", "first")]));
        cal.push(Event::from([("summary", "second")]));
        let capacity = 80;
        let mut sink = LimitedSink {
            written: vec![],
            capacity,
        };
        let err = Encoder::new(&mut sink).encode_calendar(&cal).unwrap_err();
        assert!(matches!(err, EncodeError::SinkWrite(_)));
        assert!(!sink.written.is_empty());
        assert!(sink.written.len() <= capacity);
        assert!(sink.written.starts_with(b"BEGIN:VCALENDAR\r\n"));
    }

    #[test]
    fn add_unsupported_object() {
        let mut cal = Calendar::new();
        let err = cal.add(42u32).unwrap_err();
        assert!(matches!(err, EncodeError::UnsupportedObjectType("u32")));
        assert!(cal.events().is_empty());
    }
}
