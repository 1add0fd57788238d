//! Curated video recommendations for remediation.
//!
//! Skills resolve through the same alias table as the predefined question
//! bank. A resolved skill gets its full curated list below the score
//! threshold and nothing at or above it; an unresolved skill always gets one
//! generic search-link entry, whatever the score.

use serde::{Deserialize, Serialize};

use crate::assessment::bank::resolve_alias;

/// Scores below this get the curated list for known skills.
/// Kept separate from the analyzer's weak-skill threshold — the two are
/// independently tunable.
pub const VIDEO_SCORE_THRESHOLD: f64 = 40.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoRecommendation {
    #[serde(default)]
    pub skill: String,
    pub video_title: String,
    pub video_url: String,
    pub description: String,
}

struct CuratedVideo {
    title: &'static str,
    url: &'static str,
    description: &'static str,
}

const PYTHON_VIDEOS: &[CuratedVideo] = &[
    CuratedVideo {
        title: "Python for Beginners - Full Course",
        url: "https://www.youtube.com/watch?v=_uQrJ0TkZlc",
        description: "Complete Python tutorial for beginners by Programming with Mosh",
    },
    CuratedVideo {
        title: "Python Tutorial for Beginners",
        url: "https://www.youtube.com/watch?v=rfscVS0vtbw",
        description: "Learn Python basics with freeCodeCamp",
    },
];

const JAVASCRIPT_VIDEOS: &[CuratedVideo] = &[
    CuratedVideo {
        title: "JavaScript Full Course for Beginners",
        url: "https://www.youtube.com/watch?v=PkZNo7MFNFg",
        description: "Complete JavaScript tutorial by freeCodeCamp",
    },
    CuratedVideo {
        title: "JavaScript Tutorial for Beginners",
        url: "https://www.youtube.com/watch?v=W6NZfCO5SIk",
        description: "Learn JavaScript fundamentals with Programming with Mosh",
    },
];

const REACT_VIDEOS: &[CuratedVideo] = &[
    CuratedVideo {
        title: "React Tutorial for Beginners",
        url: "https://www.youtube.com/watch?v=Ke90Tje7VS0",
        description: "Complete React tutorial by Programming with Mosh",
    },
    CuratedVideo {
        title: "React Full Course for Beginners",
        url: "https://www.youtube.com/watch?v=bMknfKXIFA8",
        description: "Learn React from scratch with freeCodeCamp",
    },
];

const SQL_VIDEOS: &[CuratedVideo] = &[
    CuratedVideo {
        title: "SQL Tutorial for Beginners",
        url: "https://www.youtube.com/watch?v=HXV3zeQKqGY",
        description: "Complete SQL tutorial by freeCodeCamp",
    },
    CuratedVideo {
        title: "SQL for Beginners",
        url: "https://www.youtube.com/watch?v=7S_tz1z_5bA",
        description: "Learn SQL basics with Programming with Mosh",
    },
];

fn curated_videos(canonical: &str) -> &'static [CuratedVideo] {
    match canonical {
        "Python" => PYTHON_VIDEOS,
        "JavaScript" => JAVASCRIPT_VIDEOS,
        "React" => REACT_VIDEOS,
        "SQL" => SQL_VIDEOS,
        _ => &[],
    }
}

pub fn recommend(skill: &str, score: f64) -> Vec<VideoRecommendation> {
    let Some(canonical) = resolve_alias(skill) else {
        // Unknown skill: one generic entry, regardless of score.
        return vec![VideoRecommendation {
            skill: skill.to_string(),
            video_title: format!("Learn {skill} - Complete Tutorial"),
            video_url: format!(
                "https://www.youtube.com/results?search_query={skill}+tutorial+beginner"
            ),
            description: format!("Comprehensive tutorial to improve your {skill} skills"),
        }];
    };

    if score >= VIDEO_SCORE_THRESHOLD {
        return Vec::new();
    }

    curated_videos(canonical)
        .iter()
        .map(|v| VideoRecommendation {
            skill: skill.to_string(),
            video_title: v.title.to_string(),
            video_url: v.url.to_string(),
            description: v.description.to_string(),
        })
        .collect()
}
