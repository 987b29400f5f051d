use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{Point, Rect};

// =========================================================================
// Roles
// Which class names take part in the direction estimate.
// =========================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GazeRole {
    Eye,
    Pupil,
}

/// Class name to gaze role mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GazeRoles {
    roles: BTreeMap<String, GazeRole>,
}

impl GazeRoles {
    pub fn new(roles: BTreeMap<String, GazeRole>) -> Self {
        Self { roles }
    }

    pub fn insert(&mut self, class_name: impl Into<String>, role: GazeRole) {
        self.roles.insert(class_name.into(), role);
    }

    /// Exact, case-sensitive match on the class name.
    pub fn role_of(&self, class_name: &str) -> Option<GazeRole> {
        self.roles.get(class_name).copied()
    }
}

impl Default for GazeRoles {
    fn default() -> Self {
        let mut roles = BTreeMap::new();
        roles.insert("eye".to_string(), GazeRole::Eye);
        roles.insert("pupil".to_string(), GazeRole::Pupil);
        Self { roles }
    }
}

// =========================================================================
// Candidates
// =========================================================================
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GazeCandidate {
    pub center: Point,
    pub score: f32,
}

impl GazeCandidate {
    pub fn from_rect(rect: &Rect, score: f32) -> Self {
        Self { center: rect.center(), score }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GazeDirection {
    Left,
    Right,
}

impl fmt::Display for GazeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GazeDirection::Left => f.write_str("left"),
            GazeDirection::Right => f.write_str("right"),
        }
    }
}

/// The direction together with the eye and pupil it was derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gaze {
    pub direction: GazeDirection,
    pub eye: GazeCandidate,
    pub pupil: GazeCandidate,
}

/// Per-frame candidate lists, in scan order.
#[derive(Debug, Clone, Default)]
pub struct GazeCandidates {
    eyes: Vec<GazeCandidate>,
    pupils: Vec<GazeCandidate>,
}

impl GazeCandidates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, role: GazeRole, candidate: GazeCandidate) {
        match role {
            GazeRole::Eye => self.eyes.push(candidate),
            GazeRole::Pupil => self.pupils.push(candidate),
        }
    }

    pub fn candidates(&self, role: GazeRole) -> &[GazeCandidate] {
        match role {
            GazeRole::Eye => &self.eyes,
            GazeRole::Pupil => &self.pupils,
        }
    }

    pub fn best(&self, role: GazeRole) -> Option<GazeCandidate> {
        best_candidate(self.candidates(role))
    }

    /// `None` unless both an eye and a pupil were seen this frame.
    pub fn resolve(&self) -> Option<Gaze> {
        let eye = self.best(GazeRole::Eye)?;
        let pupil = self.best(GazeRole::Pupil)?;
        Some(Gaze {
            direction: compute_direction(&eye, &pupil),
            eye,
            pupil,
        })
    }
}

/// Highest score wins; on ties the earliest candidate is kept.
pub fn best_candidate(candidates: &[GazeCandidate]) -> Option<GazeCandidate> {
    let mut best: Option<GazeCandidate> = None;
    for c in candidates {
        match best {
            Some(b) if c.score <= b.score => {}
            _ => best = Some(*c),
        }
    }
    best
}

// Pure function for regression testing
pub fn compute_direction(eye: &GazeCandidate, pupil: &GazeCandidate) -> GazeDirection {
    if pupil.center.x < eye.center.x {
        GazeDirection::Left
    } else {
        GazeDirection::Right
    }
}
