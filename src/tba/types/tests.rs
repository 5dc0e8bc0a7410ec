//! Unit tests for TBA record types

use super::*;
use serde_json::json;

#[cfg(test)]
mod types_tests {
    use super::*;

    #[test]
    fn test_team_deserialization() {
        let json = json!({
            "key": "frc254",
            "team_number": 254,
            "nickname": "The Cheesy Poofs",
            "name": "NASA Ames Research Center/Bellarmine College Preparatory",
            "school_name": "Bellarmine College Preparatory",
            "city": "San Jose",
            "state_prov": "California",
            "country": "USA",
            "address": null,
            "postal_code": "95126",
            "website": "http://www.team254.com",
            "rookie_year": 1999,
            "motto": null
        });

        let team: Team = serde_json::from_value(json).unwrap();
        assert_eq!(team.key, "frc254");
        assert_eq!(team.team_number, 254);
        assert_eq!(team.nickname.as_deref(), Some("The Cheesy Poofs"));
        assert_eq!(team.rookie_year, Some(1999));
        assert!(team.motto.is_none());
        assert_eq!(
            team.location().as_deref(),
            Some("San Jose, California, USA")
        );
    }

    #[test]
    fn test_team_location_skips_empty_parts() {
        let team = Team {
            city: Some("Ottawa".to_string()),
            state_prov: Some("  ".to_string()),
            country: Some("Canada".to_string()),
            ..Team::default()
        };
        assert_eq!(team.location().as_deref(), Some("Ottawa, Canada"));

        assert!(Team::default().location().is_none());
    }

    #[test]
    fn test_event_deserialization_with_null_district() {
        let json = json!({
            "key": "2024mo",
            "name": "Greater Kansas City Regional",
            "event_code": "mo",
            "event_type": 0,
            "event_type_string": "Regional",
            "district": null,
            "city": "Kansas City",
            "state_prov": "MO",
            "country": "USA",
            "start_date": "2024-03-06",
            "end_date": "2024-03-09",
            "year": 2024,
            "timezone": "America/Chicago",
            "website": "https://www.kcfirst.org",
            "location_name": "Hale Arena",
            "address": "1701 American Royal Ct\nKansas City, MO 64102"
        });

        let event: Event = serde_json::from_value(json).unwrap();
        assert_eq!(event.key, "2024mo");
        assert!(event.district.is_none());
        assert_eq!(event.event_type, 0);
        assert_eq!(event.timezone.as_deref(), Some("America/Chicago"));
    }

    #[test]
    fn test_event_deserialization_with_district() {
        let json = json!({
            "key": "2024chcmp",
            "name": "FIRST Chesapeake District Championship",
            "event_code": "chcmp",
            "event_type": 2,
            "district": {
                "abbreviation": "chs",
                "display_name": "FIRST Chesapeake",
                "key": "2024chs",
                "year": 2024
            },
            "start_date": "2024-04-03",
            "end_date": "2024-04-06",
            "year": 2024
        });

        let event: Event = serde_json::from_value(json).unwrap();
        let district = event.district.unwrap();
        assert_eq!(district.display_name, "FIRST Chesapeake");
        assert_eq!(district.abbreviation, "chs");
        assert!(event.website.is_none());
    }

    fn match_json(comp_level: &str, red: i64, blue: i64) -> serde_json::Value {
        json!({
            "key": format!("2024mo_{comp_level}3m1"),
            "comp_level": comp_level,
            "set_number": 3,
            "match_number": 1,
            "alliances": {
                "red": {
                    "score": red,
                    "team_keys": ["frc1986", "frc1939", "frc4522"],
                    "surrogate_team_keys": [],
                    "dq_team_keys": []
                },
                "blue": {
                    "score": blue,
                    "team_keys": ["frc2259", "frc3284", "frc6391"],
                    "surrogate_team_keys": [],
                    "dq_team_keys": []
                }
            },
            "winning_alliance": "",
            "event_key": "2024mo",
            "time": 1709938800,
            "actual_time": null,
            "predicted_time": null,
            "score_breakdown": null,
            "videos": []
        })
    }

    #[test]
    fn test_match_deserialization() {
        let m: Match = serde_json::from_value(match_json("qf", 30, 20)).unwrap();
        assert_eq!(m.comp_level, CompLevel::Quarterfinal);
        assert_eq!(m.alliances.red.team_keys.len(), 3);
        assert_eq!(m.alliances.blue.score, 20);
        assert_eq!(m.scheduled_time(), Some(1709938800));
    }

    #[test]
    fn test_playoff_number_and_round() {
        let m: Match = serde_json::from_value(match_json("qf", 0, 0)).unwrap();
        assert_eq!(m.number(), 3);
        assert_eq!(m.round(), Some(1));
    }

    #[test]
    fn test_qualifier_number_has_no_round() {
        let m: Match = serde_json::from_value(match_json("qm", 0, 0)).unwrap();
        assert_eq!(m.number(), 1);
        assert_eq!(m.round(), None);
    }

    #[test]
    fn test_zero_time_means_unscheduled() {
        let mut m: Match = serde_json::from_value(match_json("qm", 0, 0)).unwrap();
        m.time = Some(0);
        assert_eq!(m.scheduled_time(), None);
        m.time = None;
        assert_eq!(m.scheduled_time(), None);
    }

    #[test]
    fn test_winner_is_strictly_greater_score() {
        let m: Match = serde_json::from_value(match_json("qm", 30, 20)).unwrap();
        assert_eq!(m.alliances.winner(), Some(AllianceColor::Red));

        let m: Match = serde_json::from_value(match_json("qm", 20, 30)).unwrap();
        assert_eq!(m.alliances.winner(), Some(AllianceColor::Blue));

        let m: Match = serde_json::from_value(match_json("qm", 10, 10)).unwrap();
        assert_eq!(m.alliances.winner(), None);
    }

    #[test]
    fn test_unplayed_match_has_no_winner() {
        let m: Match = serde_json::from_value(match_json("qm", -1, -1)).unwrap();
        assert_eq!(m.alliances.winner(), None);
    }

    #[test]
    fn test_alliances_iterate_red_then_blue() {
        let m: Match = serde_json::from_value(match_json("qm", 1, 2)).unwrap();
        let colors: Vec<AllianceColor> = m.alliances.iter().map(|(c, _)| c).collect();
        assert_eq!(colors, vec![AllianceColor::Red, AllianceColor::Blue]);
    }

    #[test]
    fn test_alliance_color_names_match_api_spelling() {
        for color in [AllianceColor::Red, AllianceColor::Blue] {
            let serialized = serde_json::to_string(&color).unwrap();
            assert_eq!(serialized, format!("\"{}\"", color.as_str()));
        }
        assert_eq!(AllianceColor::Red.as_str(), "red");
        assert_eq!(AllianceColor::Blue.to_string(), "Blue");
    }
}
