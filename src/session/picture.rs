use serde::{Deserialize, Serialize};
use std::fmt;

/// The five picture tokens a problem can be visualized with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Picture {
    #[default]
    Apple,
    Star,
    Cat,
    Ball,
    Butterfly,
}

pub const ALL: [Picture; 5] = [
    Picture::Apple,
    Picture::Star,
    Picture::Cat,
    Picture::Ball,
    Picture::Butterfly,
];

impl Picture {
    pub fn emoji(self) -> &'static str {
        match self {
            Picture::Apple => "🍎",
            Picture::Star => "⭐",
            Picture::Cat => "🐱",
            Picture::Ball => "⚽",
            Picture::Butterfly => "🦋",
        }
    }

    /// Korean display name, as shown under each token in the selector.
    pub fn label(self) -> &'static str {
        match self {
            Picture::Apple => "사과",
            Picture::Star => "별",
            Picture::Cat => "고양이",
            Picture::Ball => "공",
            Picture::Butterfly => "나비",
        }
    }

    /// Position in the selector strip.
    pub fn index(self) -> usize {
        ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    pub fn next(self) -> Picture {
        ALL[(self.index() + 1) % ALL.len()]
    }

    pub fn prev(self) -> Picture {
        ALL[(self.index() + ALL.len() - 1) % ALL.len()]
    }
}

impl fmt::Display for Picture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Picture::Apple => "apple",
            Picture::Star => "star",
            Picture::Cat => "cat",
            Picture::Ball => "ball",
            Picture::Butterfly => "butterfly",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_are_stable() {
        let names: Vec<String> = ALL.iter().map(|p| p.to_string()).collect();
        assert_eq!(names, ["apple", "star", "cat", "ball", "butterfly"]);
    }

    #[test]
    fn test_cycle_visits_all_tokens() {
        let mut pic = Picture::Apple;
        let mut seen = Vec::new();
        for _ in 0..ALL.len() {
            seen.push(pic);
            pic = pic.next();
        }
        assert_eq!(pic, Picture::Apple);
        assert_eq!(seen, ALL.to_vec());
        assert_eq!(Picture::Apple.prev(), Picture::Butterfly);
    }
}
