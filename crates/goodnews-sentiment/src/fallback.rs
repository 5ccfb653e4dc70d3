//! Curated stories served when live retrieval fails.

use chrono::{DateTime, SecondsFormat, Utc};
use goodnews_core::resolve_country;

use crate::scorer::Scorer;
use crate::types::{scoring_text, Article};

struct CuratedStory {
    title: &'static str,
    description: &'static str,
    url: &'static str,
    source: &'static str,
    image: &'static str,
    country_code: &'static str,
}

const CURATED_STORIES: &[CuratedStory] = &[
    CuratedStory {
        title: "Scientists Develop Breakthrough Treatment for Rare Disease",
        description: "Researchers at a leading university have successfully developed a new treatment that shows remarkable results in treating a rare genetic condition, offering hope to thousands of patients worldwide.",
        url: "https://example.com/news1",
        source: "Health Today",
        image: "https://images.unsplash.com/photo-1559757148-5c350d0d3c56?w=800&h=400&fit=crop",
        country_code: "us",
    },
    CuratedStory {
        title: "Local Community Raises Record Amount for Children's Hospital",
        description: "A grassroots fundraising campaign has exceeded all expectations, raising over $2 million for the new children's wing at the local hospital, demonstrating incredible community spirit.",
        url: "https://example.com/news2",
        source: "Community News",
        image: "https://images.unsplash.com/photo-1582213782179-e0d53f98f2ca?w=800&h=400&fit=crop",
        country_code: "ca",
    },
    CuratedStory {
        title: "Renewable Energy Project Powers Entire City",
        description: "An innovative solar and wind energy initiative has successfully provided 100% renewable power to a major metropolitan area, marking a significant milestone in sustainable energy.",
        url: "https://example.com/news3",
        source: "Green Energy Report",
        image: "https://images.unsplash.com/photo-1466611653911-95081537e5b7?w=800&h=400&fit=crop",
        country_code: "de",
    },
    CuratedStory {
        title: "International Cooperation Leads to Environmental Protection Success",
        description: "Multiple countries have joined forces in an unprecedented conservation effort that has resulted in the protection of critical wildlife habitats and the recovery of endangered species.",
        url: "https://example.com/news4",
        source: "Environment Watch",
        image: "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?w=800&h=400&fit=crop",
        country_code: "se",
    },
    CuratedStory {
        title: "Students Create App to Help Elderly Stay Connected",
        description: "A group of high school students has developed a user-friendly mobile application that helps elderly residents stay connected with family and access community services more easily.",
        url: "https://example.com/news5",
        source: "Tech Innovation",
        image: "https://images.unsplash.com/photo-1531482615713-2afd69097998?w=800&h=400&fit=crop",
        country_code: "bg",
    },
    CuratedStory {
        title: "Bulgarian Researchers Achieve Breakthrough in Green Tech",
        description: "Scientists in Sofia unveil an innovative method to recycle plastics efficiently, boosting Bulgaria's circular economy and cutting emissions.",
        url: "https://example.com/news-bg-green-tech",
        source: "Sofia Science Daily",
        image: "https://images.unsplash.com/photo-1509395176047-4a66953fd231?w=800&h=400&fit=crop",
        country_code: "bg",
    },
];

/// Build the fallback dataset.
///
/// Every story is timestamped `now` and scored with `scorer`. The set is
/// curated to qualify already, so no recency or positivity filter runs on it.
#[must_use]
pub fn fallback_articles(scorer: &dyn Scorer, now: DateTime<Utc>) -> Vec<Article> {
    let published_at = now.to_rfc3339_opts(SecondsFormat::Millis, true);
    CURATED_STORIES
        .iter()
        .map(|story| Article {
            title: story.title.to_string(),
            description: story.description.to_string(),
            url: story.url.to_string(),
            source: story.source.to_string(),
            published_at: published_at.clone(),
            country: Some(resolve_country(story.country_code)),
            sentiment: scorer.score(&scoring_text(story.title, story.description)),
            url_to_image: Some(story.image.to_string()),
        })
        .collect()
}
