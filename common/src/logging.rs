use log::LevelFilter;

/// Maps the build-time `LOG` value to a level filter. Unset or unknown is `Off`.
pub fn parse_level(level: Option<&str>) -> LevelFilter {
    let Some(level) = level else {
        return LevelFilter::Off;
    };
    match level.trim() {
        s if s.eq_ignore_ascii_case("error") => LevelFilter::Error,
        s if s.eq_ignore_ascii_case("warn") => LevelFilter::Warn,
        s if s.eq_ignore_ascii_case("info") => LevelFilter::Info,
        s if s.eq_ignore_ascii_case("debug") => LevelFilter::Debug,
        s if s.eq_ignore_ascii_case("trace") => LevelFilter::Trace,
        _ => LevelFilter::Off,
    }
}

#[cfg(all(unix, test))]
mod test {
    use super::parse_level;
    use log::LevelFilter;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level(None), LevelFilter::Off);
        assert_eq!(parse_level(Some("error")), LevelFilter::Error);
        assert_eq!(parse_level(Some("WARN")), LevelFilter::Warn);
        assert_eq!(parse_level(Some("Info")), LevelFilter::Info);
        assert_eq!(parse_level(Some(" debug ")), LevelFilter::Debug);
        assert_eq!(parse_level(Some("trace")), LevelFilter::Trace);
    }

    #[test]
    fn test_parse_level_unknown_is_off() {
        assert_eq!(parse_level(Some("")), LevelFilter::Off);
        assert_eq!(parse_level(Some("verbose")), LevelFilter::Off);
    }
}
