//! DayTriptych: a 52-bar R&B/Funk piece at 92 BPM tracing the mood of a day.
//!
//! Each section layers pads, drums, hats and melodic accents, then ramps a
//! few tracks into the next section.

use super::catalog::patterns::{
    ACCENT, GHOST_OFF, HAT_DINNER8, HAT_DROWSY, HAT_ENERGY, HAT_FILL, HAT_NIGHT, HAT_SLEEP,
    SNARE_BACKBEAT, VOX_A, VOX_B,
};
use super::catalog::samples::*;
use super::catalog::tracks::{
    self, CRASHES, DRUMS, GHOST, HATS, HAT_FILLS, MELODY, PADS, SNARE_FX, VOCALS,
};
use anyhow::{Context, Result};
use triptych_core::timeline::{every_other_bar, Renderer, Session, TimelineBuilder};
use triptych_core::types::time::{bar, bars};
use triptych_core::{Section, SessionConfig, TimelineError};

pub const TEMPO_BPM: f64 = 92.0;

pub const SLEEPY_MORNING: Section = Section::new("Sleepy Morning", 1, 9);
pub const ENERGETIC_AM: Section = Section::new("Energetic AM", 9, 21);
pub const DROWSY_AFTERNOON: Section = Section::new("Drowsy Afternoon", 21, 29);
pub const TWILIGHT: Section = Section::new("Twilight", 29, 31);
pub const ENERGETIC_DINNER: Section = Section::new("Energetic Dinner", 31, 43);
pub const DISTINCT_NIGHT: Section = Section::new("Distinct Night", 43, 53);

pub const SECTIONS: [Section; 6] = [
    SLEEPY_MORNING,
    ENERGETIC_AM,
    DROWSY_AFTERNOON,
    TWILIGHT,
    ENERGETIC_DINNER,
    DISTINCT_NIGHT,
];

type Step = Result<(), TimelineError>;

/// 92 BPM, 4/4, tracks 1-9 only
pub fn config() -> SessionConfig {
    SessionConfig::new(TEMPO_BPM).with_tracks(tracks::ALL.iter().map(|(t, _)| *t))
}

/// Open a session on `renderer`, compose the whole piece, finalize
pub fn render<R: Renderer + ?Sized>(renderer: &mut R) -> Result<()> {
    Session::run(renderer, config(), |t| compose(t))
}

/// Compose every section in order against `t`
pub fn compose<R: Renderer + ?Sized>(t: &mut TimelineBuilder<'_, R>) -> Result<()> {
    t.section(&SLEEPY_MORNING, sleepy_morning)
        .context("Sleepy Morning")?;
    t.section(&ENERGETIC_AM, energetic_am)
        .context("Energetic AM")?;
    t.section(&DROWSY_AFTERNOON, drowsy_afternoon)
        .context("Drowsy Afternoon")?;
    t.section(&TWILIGHT, twilight).context("Twilight")?;
    t.section(&ENERGETIC_DINNER, energetic_dinner)
        .context("Energetic Dinner")?;
    t.section(&DISTINCT_NIGHT, distinct_night)
        .context("Distinct Night")?;
    Ok(())
}

/// Staggered entry: pads, then hats at bar 5, drums at 7, a piano accent at 8.5
fn sleepy_morning<R: Renderer + ?Sized>(t: &mut TimelineBuilder<'_, R>) -> Step {
    let s = SLEEPY_MORNING;

    t.place_media(PAD_SOFT_A, PADS, s.start_bar(), s.end_bar())?;
    t.set_gain(PADS, -10.0)?;

    t.beat_pattern(HAT_TICK, HATS, s.at(4), s.end_bar(), HAT_SLEEP)?;
    t.set_gain(HATS, -16.0)?;

    t.place_media(DRUM_MAIN, DRUMS, s.at(6), s.end_bar())?;
    t.set_gain(DRUMS, -8.0)?;

    t.place_media(PIANO_RNBFUNK, MELODY, s.offset(bars(15, 2)), s.offset(bars(17, 2)))?;
    t.set_gain(MELODY, -10.0)?;

    t.ramp_gain(PADS, -10.0, s.before_end(bar(1)), -6.0, s.end_bar())?;

    t.place_media(CYM_CRASH, CRASHES, s.end_bar(), s.end_bar() + bars(1, 2))?;
    Ok(())
}

fn energetic_am<R: Renderer + ?Sized>(t: &mut TimelineBuilder<'_, R>) -> Step {
    let s = ENERGETIC_AM;

    t.place_media(DRUM_MAIN, DRUMS, s.start_bar(), s.end_bar())?;
    t.set_gain(DRUMS, -2.0)?;
    t.place_media(PAD_SOFT_B, PADS, s.start_bar(), s.end_bar())?;
    t.set_gain(PADS, -6.0)?;
    t.beat_pattern(HAT_TICK, HATS, s.start_bar(), s.end_bar(), HAT_ENERGY)?;

    // pluck stabs on the "and" of beats 1 and 3 of every 4-bar phrase
    t.repeat_every(PLUCK_POPKEY, MELODY, &s, bar(4), bars(1, 2), bars(1, 2))?;
    t.repeat_every(PLUCK_POPKEY, MELODY, &s, bar(4), bars(5, 2), bars(1, 2))?;
    t.set_gain(MELODY, -6.0)?;

    t.beat_pattern(SNARE_CLAP, SNARE_FX, s.start_bar(), s.end_bar(), SNARE_BACKBEAT)?;
    t.set_gain(SNARE_FX, -12.0)?;

    t.repeat_pattern_every(HAT_TICK, HAT_FILLS, &s, 8, 3, HAT_FILL)?;
    // second fill sits in the trailing half-phrase the step count drops
    t.beat(HAT_TICK, HAT_FILLS, s.start + 8 + 3, HAT_FILL)?;

    t.place_media(CYM_CRASH, CRASHES, s.before_end(bar(2)), s.end_bar())?;
    t.set_gain(CRASHES, -12.0)?;
    Ok(())
}

fn drowsy_afternoon<R: Renderer + ?Sized>(t: &mut TimelineBuilder<'_, R>) -> Step {
    let s = DROWSY_AFTERNOON;

    t.place_media(PAD_SOFT_C, PADS, s.start_bar(), s.end_bar())?;
    t.set_gain(PADS, -8.0)?;
    t.place_media(DRUM_MAIN, DRUMS, s.start_bar(), s.end_bar())?;
    t.set_gain(DRUMS, -8.0)?;
    t.beat_pattern(HAT_TICK, HATS, s.start_bar(), s.end_bar(), HAT_DROWSY)?;
    t.set_gain(HATS, -14.0)?;

    t.repeat_every(BELL_AFROSENSE, MELODY, &s, bar(6), bars(1, 2), bar(1))?;
    // the 2-bar remainder after the 6-bar step still gets its bell
    t.place_media(BELL_AFROSENSE, MELODY, s.offset(bars(13, 2)), s.offset(bars(15, 2)))?;
    t.set_gain(MELODY, -8.0)?;

    t.beat_pattern(HAT_TICK, GHOST, s.start_bar(), s.end_bar(), GHOST_OFF)?;
    t.set_gain(GHOST, -18.0)?;

    let fade = s.before_end(bar(2));
    t.ramp_gain(DRUMS, -8.0, fade, -14.0, s.end_bar())?;
    t.ramp_gain(HATS, -14.0, fade, -20.0, s.end_bar())?;
    t.ramp_gain(PADS, -8.0, fade, -6.0, s.end_bar())?;
    Ok(())
}

/// Two airy bars: sustained pad and crash, one hat accent
fn twilight<R: Renderer + ?Sized>(t: &mut TimelineBuilder<'_, R>) -> Step {
    let s = TWILIGHT;

    t.place_media(PAD_SOFT_C, PADS, s.start_bar(), s.end_bar())?;
    t.set_gain(PADS, -8.0)?;
    t.place_media(CYM_CRASH, CRASHES, s.start_bar(), s.end_bar())?;
    t.set_gain(CRASHES, -14.0)?;
    t.beat(HAT_TICK, SNARE_FX, s.start + 1, ACCENT)?;
    t.set_gain(SNARE_FX, -18.0)?;
    Ok(())
}

fn energetic_dinner<R: Renderer + ?Sized>(t: &mut TimelineBuilder<'_, R>) -> Step {
    let s = ENERGETIC_DINNER;

    t.place_media(DRUM_MAIN, DRUMS, s.start_bar(), s.end_bar())?;
    t.set_gain(DRUMS, -4.0)?;
    t.place_media(PAD_SOFT_B, PADS, s.start_bar(), s.end_bar())?;
    t.set_gain(PADS, -6.0)?;
    t.beat_pattern(HAT_TICK, HATS, s.start_bar(), s.end_bar(), HAT_DINNER8)?;
    t.set_gain(HATS, -10.0)?;

    t.repeat_pattern_every(HAT_TICK, HAT_FILLS, s.from_offset(3), 8, 0, HAT_FILL)?;
    t.beat(HAT_TICK, HAT_FILLS, s.start + 3 + 8, HAT_FILL)?;

    // off-beat piano, softer than the morning plucks
    t.repeat_every(PIANO_RNBFUNK, MELODY, &s, bar(4), bars(1, 2), bars(1, 2))?;
    t.set_gain(MELODY, -8.0)?;

    let mid = s.midpoint_bar();
    t.beat(HAT_TICK, VOCALS, mid, VOX_A)?;
    t.beat(HAT_TICK, VOCALS, mid + 1, VOX_B)?;
    t.set_gain(VOCALS, -12.0)?;

    let fade = s.before_end(bar(2));
    t.ramp_gain(DRUMS, -4.0, fade, -8.0, s.end_bar())?;
    t.ramp_gain(HAT_FILLS, -10.0, fade, -16.0, s.end_bar())?;
    t.ramp_gain(PADS, -6.0, fade, -8.0, s.end_bar())?;
    Ok(())
}

/// Half-time drums, long bells, and a fade to silence
fn distinct_night<R: Renderer + ?Sized>(t: &mut TimelineBuilder<'_, R>) -> Step {
    let s = DISTINCT_NIGHT;

    t.place_media(PAD_SOFT_C, PADS, s.start_bar(), s.end_bar())?;
    t.set_gain(PADS, -10.0)?;

    t.conditional_place(DRUM_MAIN, DRUMS, &s, every_other_bar, bar(1))?;
    t.set_gain(DRUMS, -12.0)?;

    t.beat_pattern(HAT_TICK, HATS, s.start_bar(), s.end_bar(), HAT_NIGHT)?;
    t.set_gain(HATS, -16.0)?;

    t.repeat_every(BELL_AFROSENSE, MELODY, &s, bar(4), bars(3, 4), bars(7, 4))?;
    // last bell starts in the final 2 bars and rings past the end
    t.place_media(BELL_AFROSENSE, MELODY, s.offset(bars(35, 4)), s.offset(bars(21, 2)))?;
    t.set_gain(MELODY, -10.0)?;

    t.repeat_pattern_every(HAT_TICK, SNARE_FX, s.from_offset(2), 4, 0, ACCENT)?;
    t.set_gain(SNARE_FX, -18.0)?;

    t.ramp_gain(PADS, -10.0, s.before_end(bar(2)), -18.0, s.end_bar())?;
    t.ramp_gain(HATS, -16.0, s.before_end(bar(2)), -60.0, s.end_bar())?;
    t.ramp_gain(DRUMS, -12.0, s.before_end(bar(1)), -60.0, s.end_bar())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use triptych_core::timeline::TimelineRecorder;
    use triptych_core::types::time::BarSpan;
    use triptych_core::TrackId;

    fn recorded() -> TimelineRecorder {
        let mut rec = TimelineRecorder::new();
        render(&mut rec).unwrap();
        rec
    }

    fn starts_on(rec: &TimelineRecorder, track: TrackId, within: &Section) -> Vec<triptych_core::types::Bar> {
        rec.placements()
            .filter(|p| p.track == track && within.span().contains(p.start))
            .map(|p| p.start)
            .collect()
    }

    #[test]
    fn test_sections_tile_52_bars() {
        assert_eq!(SECTIONS[0].start, 1);
        for pair in SECTIONS.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        let total: i64 = SECTIONS.iter().map(|s| s.len()).sum();
        assert_eq!(total, 52);
    }

    #[test]
    fn test_session_framing() {
        let rec = recorded();
        assert!(rec.is_initialized());
        assert_eq!(rec.tempo(), Some(TEMPO_BPM));
        assert_eq!(rec.finalize_count(), 1);
    }

    #[test]
    fn test_morning_piano_accent() {
        let rec = recorded();
        let piano = starts_on(&rec, MELODY, &SLEEPY_MORNING);
        assert_eq!(piano, vec![bars(17, 2)]);
    }

    #[test]
    fn test_morning_pluck_stabs() {
        let rec = recorded();
        let mut plucks = starts_on(&rec, MELODY, &ENERGETIC_AM);
        plucks.sort();
        let expected: Vec<_> = [19, 23, 27, 31, 35, 39].iter().map(|&n| bars(n, 2)).collect();
        assert_eq!(plucks, expected);
    }

    #[test]
    fn test_hat_fills_land_on_fourth_bar_of_each_phrase() {
        let rec = recorded();
        let fills: Vec<i64> = rec
            .beat_events()
            .filter(|e| e.track == HAT_FILLS)
            .map(|e| e.bar)
            .collect();
        assert_eq!(fills, vec![12, 20, 34, 42]);
    }

    #[test]
    fn test_afternoon_bells_keep_remainder() {
        let rec = recorded();
        let bells = starts_on(&rec, MELODY, &DROWSY_AFTERNOON);
        assert_eq!(bells, vec![bars(43, 2), bars(55, 2)]);
    }

    #[test]
    fn test_night_half_time_drums() {
        let rec = recorded();
        let drums: Vec<_> = rec
            .placements()
            .filter(|p| p.track == DRUMS && DISTINCT_NIGHT.span().contains(p.start))
            .map(|p| p.span())
            .collect();
        let expected: Vec<_> = [43, 45, 47, 49, 51]
            .iter()
            .map(|&b| BarSpan::whole(b, b + 1))
            .collect();
        assert_eq!(drums, expected);
    }

    #[test]
    fn test_vocal_chops_straddle_dinner_midpoint() {
        let rec = recorded();
        let vox: Vec<(i64, String)> = rec
            .beat_events()
            .filter(|e| e.track == VOCALS)
            .map(|e| (e.bar, e.pattern.to_string()))
            .collect();
        assert_eq!(vox, vec![(36, VOX_A.to_string()), (37, VOX_B.to_string())]);
    }

    #[test]
    fn test_final_fade_reaches_silence() {
        let rec = recorded();
        let last_drum_ramp = rec
            .gain_directives()
            .filter(|g| g.track == DRUMS && g.is_ramp())
            .last()
            .unwrap();
        assert_eq!(last_drum_ramp.start_bar, Some(bar(52)));
        assert_eq!(last_drum_ramp.value_at(bar(53)), -60.0);
        assert_eq!(last_drum_ramp.value_at(bars(105, 2)), -36.0);
    }

    #[test]
    fn test_only_declared_tracks_used() {
        let rec = recorded();
        let used = rec.tracks();
        assert_eq!(used.len(), 9);
        assert!(used.iter().all(|t| tracks::role(*t).is_some()));
    }

    #[test]
    fn test_last_bell_rings_past_final_bar() {
        let rec = recorded();
        assert_eq!(rec.end_bar(), Some(bars(107, 2)));
    }
}
