#[cfg(test)]
mod tests {
    use triptych::arrangement::catalog::tracks;
    use triptych::arrangement::day_triptych::{self, SECTIONS};
    use triptych::sheet;
    use triptych_core::timeline::{RenderCommand, TimelineRecorder};
    use triptych_core::types::time::bar;

    fn recorded() -> TimelineRecorder {
        let mut rec = TimelineRecorder::new();
        day_triptych::render(&mut rec).unwrap();
        rec
    }

    #[test]
    fn test_composition_is_deterministic() {
        assert_eq!(recorded(), recorded());
    }

    #[test]
    fn test_every_section_has_pads() {
        let rec = recorded();
        for s in SECTIONS {
            let covered = rec
                .placements()
                .any(|p| p.track == tracks::PADS && p.start == s.start_bar() && p.end == s.end_bar());
            assert!(covered, "no pad bed in {}", s.name);
        }
    }

    #[test]
    fn test_runs_about_two_sixteen() {
        let config = day_triptych::config();
        let secs = config.seconds_for(bar(52));
        assert_eq!(sheet::format_duration(secs), "2:16");
    }

    #[test]
    fn test_json_export_round_trips() {
        let rec = recorded();
        let json = rec.to_json().unwrap();
        let back: Vec<RenderCommand> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_slice(), rec.commands());
    }

    #[test]
    fn test_sheet_mentions_every_track() {
        colored::control::set_override(false);
        let rec = recorded();
        let out = sheet::render(
            "DayTriptych",
            &rec,
            &SECTIONS,
            &tracks::ALL,
            &day_triptych::config(),
            true,
        );
        for (track, role) in tracks::ALL {
            assert!(out.contains(&format!("{} {}", track, role)));
        }
        assert!(out.contains("DayTriptych 92 BPM, 52 bars, 2:16"));
        assert!(out.contains("tail rings on to bar 53.5"));
    }
}
