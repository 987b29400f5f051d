#[cfg(test)]
mod tests {
    use crate::gaze::{best_candidate, compute_direction, GazeCandidate, GazeCandidates, GazeDirection, GazeRole, GazeRoles};
    use crate::types::Point;

    fn candidate(x: f32, score: f32) -> GazeCandidate {
        GazeCandidate { center: Point::new(x, 50.0), score }
    }

    // =========================================================================
    // Regression Tests: Gaze Direction
    // Convention: pupil left of the eye center = Left, otherwise Right
    // =========================================================================

    #[test]
    fn test_pupil_left_of_eye() {
        let dir = compute_direction(&candidate(100.0, 0.9), &candidate(80.0, 0.9));
        assert_eq!(dir, GazeDirection::Left, "Pupil at 80 inside eye at 100 should look Left");
    }

    #[test]
    fn test_pupil_right_of_eye() {
        let dir = compute_direction(&candidate(100.0, 0.9), &candidate(120.0, 0.9));
        assert_eq!(dir, GazeDirection::Right);
    }

    #[test]
    fn test_centered_pupil_reports_right() {
        // Only a strictly smaller x counts as Left
        let dir = compute_direction(&candidate(100.0, 0.9), &candidate(100.0, 0.9));
        assert_eq!(dir, GazeDirection::Right);
    }

    #[test]
    fn test_best_candidate_prefers_score_regardless_of_order() {
        let low_first = [candidate(10.0, 0.9), candidate(20.0, 0.99)];
        let high_first = [candidate(20.0, 0.99), candidate(10.0, 0.9)];
        assert_eq!(best_candidate(&low_first).unwrap().center.x, 20.0);
        assert_eq!(best_candidate(&high_first).unwrap().center.x, 20.0);
    }

    #[test]
    fn test_best_candidate_ties_keep_first_seen() {
        let tied = [candidate(10.0, 0.8), candidate(20.0, 0.8), candidate(30.0, 0.5)];
        assert_eq!(best_candidate(&tied).unwrap().center.x, 10.0);
        assert!(best_candidate(&[]).is_none());
    }

    #[test]
    fn test_resolve_needs_both_roles() {
        let mut groups = GazeCandidates::new();
        groups.push(GazeRole::Eye, candidate(100.0, 0.9));
        assert!(groups.resolve().is_none(), "Eye without pupil must not report a direction");

        groups.push(GazeRole::Pupil, candidate(80.0, 0.7));
        let gaze = groups.resolve().unwrap();
        assert_eq!(gaze.direction, GazeDirection::Left);
        assert_eq!(gaze.eye.center.x, 100.0);
        assert_eq!(gaze.pupil.center.x, 80.0);
    }

    #[test]
    fn test_resolve_uses_highest_scoring_eye() {
        let mut groups = GazeCandidates::new();
        groups.push(GazeRole::Eye, candidate(60.0, 0.9));
        groups.push(GazeRole::Eye, candidate(100.0, 0.99));
        groups.push(GazeRole::Pupil, candidate(80.0, 0.6));
        // Eye at 60 would give Right; the 0.99 eye at 100 gives Left
        assert_eq!(groups.resolve().unwrap().direction, GazeDirection::Left);
    }

    #[test]
    fn test_roles_are_configurable() {
        let mut roles = GazeRoles::default();
        assert_eq!(roles.role_of("eye"), Some(GazeRole::Eye));
        assert_eq!(roles.role_of("Eye"), None);
        roles.insert("iris", GazeRole::Pupil);
        assert_eq!(roles.role_of("iris"), Some(GazeRole::Pupil));

        let parsed: GazeRoles = serde_json::from_str(r#"{"sclera": "eye", "iris": "pupil"}"#).unwrap();
        assert_eq!(parsed.role_of("sclera"), Some(GazeRole::Eye));
        assert_eq!(parsed.role_of("pupil"), None);
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(GazeDirection::Left.to_string(), "left");
        assert_eq!(GazeDirection::Right.to_string(), "right");
    }
}
