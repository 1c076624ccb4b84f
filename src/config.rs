/// Simulated "thinking" delay before each bot reply, in milliseconds.
pub const BOT_REPLY_DELAY_MS: u32 = 1_000;

/// Query parameter that deep-links straight into a funnel.
pub const FUNNEL_QUERY_PARAM: &str = "funnel";
