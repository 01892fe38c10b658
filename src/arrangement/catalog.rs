//! Track roles, samples and beat patterns used by DayTriptych.

use triptych_core::TrackId;

/// Track routing
pub mod tracks {
    use super::TrackId;

    pub const DRUMS: TrackId = TrackId(1);
    pub const HATS: TrackId = TrackId(2);
    pub const PADS: TrackId = TrackId(3);
    pub const MELODY: TrackId = TrackId(4);
    pub const SNARE_FX: TrackId = TrackId(5);
    pub const CRASHES: TrackId = TrackId(6);
    pub const GHOST: TrackId = TrackId(7);
    pub const VOCALS: TrackId = TrackId(8);
    pub const HAT_FILLS: TrackId = TrackId(9);

    /// Every track with its role, in track order
    pub const ALL: [(TrackId, &str); 9] = [
        (DRUMS, "drums"),
        (HATS, "hats"),
        (PADS, "pads"),
        (MELODY, "melody"),
        (SNARE_FX, "snare/fx"),
        (CRASHES, "crashes"),
        (GHOST, "ghost"),
        (VOCALS, "vocals"),
        (HAT_FILLS, "hat fills"),
    ];

    pub fn role(track: TrackId) -> Option<&'static str> {
        ALL.iter().find(|(t, _)| *t == track).map(|(_, role)| *role)
    }
}

/// Sample names from the renderer's library
pub mod samples {
    pub const DRUM_MAIN: &str = "COMMON_LOVE_DRUMBEAT_1";
    pub const HAT_TICK: &str = "OS_CLOSEDHAT01";
    pub const SNARE_CLAP: &str = "OS_SNARE01";
    pub const CYM_CRASH: &str = "MILKNSIZZ_CRASH_PAD_DEEP_SUB_BASS";

    pub const PAD_SOFT_A: &str = "RD_POP_PADCHORD_1";
    pub const PAD_SOFT_B: &str = "RD_POP_PADCHORD_2";
    pub const PAD_SOFT_C: &str = "RD_POP_PADCHORD_3";

    pub const PIANO_RNBFUNK: &str = "YG_RNB_FUNK_PIANO_1";
    pub const PLUCK_POPKEY: &str = "RD_POP_KEYPLUCK_1";
    pub const BELL_AFROSENSE: &str = "MILKNSIZZ_AFROSENSE_LULLABY_BELLS";
}

/// One-bar patterns in `0`/`-` notation
pub mod patterns {
    // hats, sparse to dense
    pub const HAT_SLEEP: &str = "0---0---0---0---";
    pub const HAT_ENERGY: &str = "0--0-00-0-0-00-0";
    pub const HAT_DROWSY: &str = "0---0----0---0--";
    pub const HAT_DINNER8: &str = "0-0-0-0-0-0-0-0-";
    pub const HAT_QUIET: &str = "0-------------0-";
    pub const HAT_FILL: &str = "0-00-0-000-0-0-0";
    pub const HAT_NIGHT: &str = "0--0----0--0----";

    pub const GHOST_OFF: &str = "-0-0-0-0-0-0-0-0";
    pub const SNARE_BACKBEAT: &str = "----0-------0---";
    pub const ACCENT: &str = "0---------------";

    pub const VOX_A: &str = "0---0-0---0---0-";
    pub const VOX_B: &str = "0-0-0---0-0-0---";

    /// Every named pattern, for validation and listings
    pub const ALL: [(&str, &str); 12] = [
        ("hat_sleep", HAT_SLEEP),
        ("hat_energy", HAT_ENERGY),
        ("hat_drowsy", HAT_DROWSY),
        ("hat_dinner8", HAT_DINNER8),
        ("hat_quiet", HAT_QUIET),
        ("hat_fill", HAT_FILL),
        ("hat_night", HAT_NIGHT),
        ("ghost_off", GHOST_OFF),
        ("snare_backbeat", SNARE_BACKBEAT),
        ("accent", ACCENT),
        ("vox_a", VOX_A),
        ("vox_b", VOX_B),
    ];
}
