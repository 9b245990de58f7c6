use ergo_assist::assessment::{AnswerChoice, AssessmentReport};
use serde::Serialize;
use std::io::{self, Write};

const RULE_WIDTH: usize = 50;

pub(crate) fn render_text<W: Write>(out: &mut W, report: &AssessmentReport) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    let profile = &report.profile;

    writeln!(out, "{rule}")?;
    writeln!(out, "Ergonomic assessment ({})", report.generated_on)?;
    writeln!(out, "{rule}")?;

    writeln!(out, "Profile")?;
    writeln!(out, "- Hand size: {}", profile.hand_size.label())?;
    writeln!(out, "- Grip style: {}", profile.grip_style.label())?;
    writeln!(out, "- Session duration: {} minutes", profile.session_duration)?;
    let discomfort = if profile.discomfort_level.is_empty() {
        "none reported"
    } else {
        profile.discomfort_level.as_str()
    };
    writeln!(out, "- Discomfort: {discomfort}")?;
    writeln!(out, "- Keyboard layout: {}", profile.keyboard_layout.label())?;
    match profile.mouse_weight {
        Some(grams) => writeln!(out, "- Mouse weight: {grams}g")?,
        None => writeln!(out, "- Mouse weight: unknown")?,
    }
    writeln!(out, "- Space constraints: {}", profile.space_issue.label())?;
    writeln!(out, "- Game type: {}", profile.game_type.label())?;

    writeln!(
        out,
        "\nRisk: {} point(s), level {}",
        report.risk_points, report.risk_level_label
    )?;
    writeln!(out, "{}", report.risk_summary)?;

    if report.pain_areas.is_empty() {
        writeln!(out, "Pain areas: none")?;
    } else {
        writeln!(out, "Pain areas: {}", report.pain_areas.join(", "))?;
    }

    if !report.contributions.is_empty() {
        writeln!(out, "\nRisk contributors")?;
        for contribution in &report.contributions {
            writeln!(
                out,
                "- {}: +{} ({})",
                contribution.rule.label(),
                contribution.points,
                contribution.notes
            )?;
        }
    }

    if report.recommendations.is_empty() {
        writeln!(out, "\nRecommendations: none")?;
    } else {
        writeln!(out, "\nRecommendations")?;
        for (index, message) in report.recommendations.iter().enumerate() {
            writeln!(out, "{}. {}", index + 1, message)?;
        }
    }

    writeln!(out, "{rule}")
}

pub(crate) fn render_json<W: Write, T: Serialize + ?Sized>(
    out: &mut W,
    value: &T,
) -> Result<(), serde_json::Error> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out).map_err(serde_json::Error::io)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ergo_assist::assessment::{
        evaluate, ErgonomicProfile, GameType, GripStyle, HandSize, KeyboardLayout, SpaceIssue,
    };

    fn report(profile: ErgonomicProfile) -> AssessmentReport {
        let outcome = evaluate(&profile);
        let generated_on = NaiveDate::from_ymd_opt(2025, 3, 14).expect("valid date");
        AssessmentReport::new(&profile, &outcome, generated_on)
    }

    fn strained() -> ErgonomicProfile {
        ErgonomicProfile {
            hand_size: HandSize::Large,
            grip_style: GripStyle::Claw,
            session_duration: 200,
            discomfort_level: "wrist and forearm pain".to_string(),
            keyboard_layout: KeyboardLayout::Wasd,
            mouse_weight: Some(100),
            space_issue: SpaceIssue::Yes,
            game_type: GameType::Fps,
        }
    }

    fn render(report: &AssessmentReport) -> String {
        let mut buffer = Vec::new();
        render_text(&mut buffer, report).expect("render succeeds");
        String::from_utf8(buffer).expect("utf8 output")
    }

    #[test]
    fn text_report_lists_numbered_recommendations() {
        let output = render(&report(strained()));

        assert!(output.contains("Ergonomic assessment (2025-03-14)"));
        assert!(output.contains("- Mouse weight: 100g"));
        assert!(output.contains("Risk: 6 point(s), level high"));
        assert!(output.contains("Pain areas: wrist, forearm"));
        assert!(output.contains("- wrist pain: +2 (wrist discomfort reported)"));
        assert!(output.contains("1. Long sessions detected"));
        assert!(output.contains("9. FPS focus"));
    }

    #[test]
    fn text_report_handles_calm_profiles() {
        let output = render(&report(ErgonomicProfile {
            session_duration: 30,
            discomfort_level: String::new(),
            mouse_weight: None,
            space_issue: SpaceIssue::No,
            ..strained()
        }));

        assert!(output.contains("- Discomfort: none reported"));
        assert!(output.contains("- Mouse weight: unknown"));
        assert!(output.contains("level none"));
        assert!(output.contains("Pain areas: none"));
        assert!(!output.contains("Risk contributors"));
    }

    #[test]
    fn json_output_is_a_single_document() {
        let reports = vec![report(strained()), report(strained())];
        let mut buffer = Vec::new();

        render_json(&mut buffer, &reports).expect("json renders");

        let parsed: serde_json::Value =
            serde_json::from_slice(&buffer).expect("valid json document");
        assert_eq!(parsed.as_array().expect("array").len(), 2);
        assert_eq!(parsed[0]["risk_level"], "high");
    }
}
