pub const MOVIES_PATH: &str = "/api/movies";

pub const USER_AGENT: &str = concat!("Marquee/", env!("CARGO_PKG_VERSION"));

pub mod form {

    pub const DEFAULT_RATING: i32 = 5;

    pub const EARLIEST_YEAR: i32 = 1900;

    pub const MAX_YEARS_AHEAD: i32 = 2;
}

pub mod intervals {
    use std::time::Duration;

    pub const STATUS_PROBE: Duration = Duration::from_secs(60);

    pub const NOTIFICATION_DISPLAY: Duration = Duration::from_secs(3);

    pub const SSE_KEEP_ALIVE: Duration = Duration::from_secs(15);
}

pub mod messages {

    pub const LOAD_FAILED: &str = "Failed to load movies";

    pub const ADD_FAILED: &str = "Failed to add movie";

    pub const UNKNOWN_DIRECTOR: &str = "Unknown Director";

    pub const EMPTY_CATALOG: &str = "No movies yet";
}
