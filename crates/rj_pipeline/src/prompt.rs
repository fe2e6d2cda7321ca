use rj_core::NewsItem;

/// A record can go on air only if both `title` and `content` are present.
/// Presence is the whole test: an empty string still composes.
pub fn is_composable(item: &NewsItem) -> bool {
    item.title.is_some() && item.content.is_some()
}

pub fn composable(batch: &[NewsItem]) -> Vec<&NewsItem> {
    batch.iter().filter(|item| is_composable(item)).collect()
}

/// One `📰 title: content` entry per story, batch order preserved, blank
/// line between entries.
pub fn story_block(stories: &[&NewsItem]) -> String {
    stories
        .iter()
        .map(|item| {
            format!(
                "📰 {}: {}",
                item.title.as_deref().unwrap_or_default(),
                item.content.as_deref().unwrap_or_default()
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// The instruction prompt handed to the generative model. Announces the
/// post-filter story count and embeds the story block verbatim.
pub fn build_prompt(batch: &[NewsItem]) -> String {
    let stories = composable(batch);
    format!(
        "You are a professional radio host creating a spoken radio segment based on {count} news stories.\n\n\
         Instructions:\n\
         - Make the script sound casual, expressive, and engaging, like a real human radio announcer.\n\
         - Group related stories smoothly, using natural transitions between them.\n\
         - Do NOT use the phrase \"news item\" or any numbering.\n\n\
         📰 News stories:\n\
         {block}",
        count = stories.len(),
        block = story_block(&stories),
    )
}
