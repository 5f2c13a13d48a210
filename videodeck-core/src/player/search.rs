//! Title and tag search with numbered results.
//!
//! Searching never plays anything by itself. The caller shows the report,
//! reads an answer, and hands it to [`Player::play_search_choice`].

use super::{Player, Report};
use crate::catalog::{Video, VideoCatalog};
use crate::error::PlayerError;

/// Unflagged videos matching a search, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    term: String,
    matches: Vec<Video>,
}

impl SearchResults {
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn matches(&self) -> &[Video] {
        &self.matches
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Numbered results followed by the play prompt, or the no-results line.
    pub fn report(&self) -> Report {
        if self.matches.is_empty() {
            return Report::line(format!("No search results for {}", self.term));
        }

        let mut report = Report::line(format!("Here are the results for {}:", self.term));
        for (position, video) in self.matches.iter().enumerate() {
            report.push(format!("{}) {}", position + 1, video.describe()));
        }
        report.push(
            "Would you like to play any of the above? If yes, specify the number of the video.",
        );
        report.push("If your answer is not a valid number, we will assume it's a no.");
        report
    }

    /// Resolves a 1-based answer. Anything that is not a number within the
    /// result count is a decline.
    pub fn choose(&self, answer: &str) -> Option<&Video> {
        let number = answer.trim().parse::<usize>().ok()?;
        number.checked_sub(1).and_then(|index| self.matches.get(index))
    }
}

impl<C: VideoCatalog> Player<C> {
    fn search_by(&self, term: &str, predicate: impl Fn(&Video) -> bool) -> SearchResults {
        let matches: Vec<Video> = self
            .catalog
            .videos()
            .iter()
            .filter(|video| !self.flags.is_flagged(&video.id))
            .filter(|video| predicate(*video))
            .cloned()
            .collect();

        tracing::debug!("Search {term:?} matched {} videos", matches.len());
        SearchResults {
            term: term.to_string(),
            matches,
        }
    }

    /// Finds unflagged videos whose title contains `term`, ignoring case.
    pub fn search_videos(&self, term: &str) -> SearchResults {
        let needle = term.to_lowercase();
        self.search_by(term, |video| video.title.to_lowercase().contains(&needle))
    }

    /// Finds unflagged videos carrying `tag`, ignoring case.
    pub fn search_videos_tag(&self, tag: &str) -> SearchResults {
        let tag = tag.trim();
        self.search_by(tag, |video| video.has_tag(tag))
    }

    /// Plays the video picked from earlier results. Returns `None` when the
    /// answer declines.
    pub fn play_search_choice(
        &mut self,
        results: &SearchResults,
        answer: &str,
    ) -> Option<Result<Report, PlayerError>> {
        let Some(video) = results.choose(answer) else {
            tracing::debug!("Search choice {answer:?} declined");
            return None;
        };
        Some(self.play_video(video.id.as_str()))
    }
}
