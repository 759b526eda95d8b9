//! Typewriter animation
//!
//! Reveals text one character per tick into an answer block. The returned
//! future completes once, after the final character has been appended.
//!
//! A block that gets detached mid-animation (the user cleared the display)
//! receives the rest of the text in one go; nobody renders it anymore, and
//! this keeps the owning request cycle from idling through dead ticks.

use super::display::AnswerBlock;
use std::time::Duration;
use tokio::time::sleep;

/// Default delay between two characters
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(30);

/// Append `text` to `target` one character per `interval`
pub async fn reveal(target: &AnswerBlock, text: &str, interval: Duration) {
    if text.is_empty() {
        return;
    }

    target.set_typing(true);

    for (offset, ch) in text.char_indices() {
        if target.is_detached() {
            target.push_str(&text[offset..]);
            break;
        }
        target.push_char(ch);
        sleep(interval).await;
    }

    target.set_typing(false);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::display::{RegionView, ResponseRegion};
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_reveals_in_order_one_char_per_tick() {
        let region = ResponseRegion::new();
        let block = region.open_answer();

        let task = {
            let block = block.clone();
            tokio::spawn(async move { reveal(&block, "abcd", Duration::from_millis(30)).await })
        };

        // Characters land at t=0, 30, 60, 90
        sleep(Duration::from_millis(45)).await;
        let snapshot = block.snapshot();
        assert_eq!(snapshot.text, "ab");
        assert!(snapshot.typing);

        sleep(Duration::from_millis(30)).await;
        assert_eq!(block.text(), "abc");
        assert!(!task.is_finished());

        task.await.unwrap();
        let snapshot = block.snapshot();
        assert_eq!(snapshot.text, "abcd");
        assert!(!snapshot.typing);
    }

    #[tokio::test(start_paused = true)]
    async fn test_completes_only_after_final_character() {
        let block = ResponseRegion::new().open_answer();
        let text = "Paris.";
        let interval = Duration::from_millis(30);

        let start = Instant::now();
        reveal(&block, text, interval).await;

        assert_eq!(block.text(), text);
        assert!(start.elapsed() >= interval * (text.chars().count() as u32 - 1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_text_completes_immediately() {
        let block = ResponseRegion::new().open_answer();
        let start = Instant::now();
        reveal(&block, "", DEFAULT_INTERVAL).await;
        assert_eq!(start.elapsed(), Duration::ZERO);
        assert_eq!(block.snapshot(), Default::default());
    }

    #[tokio::test(start_paused = true)]
    async fn test_multibyte_characters_stay_whole() {
        let block = ResponseRegion::new().open_answer();
        reveal(&block, "São Paulo 🌎", Duration::from_millis(5)).await;
        assert_eq!(block.text(), "São Paulo 🌎");
    }

    #[tokio::test(start_paused = true)]
    async fn test_detached_block_gets_the_rest_at_once() {
        let region = ResponseRegion::new();
        let block = region.open_answer();

        let task = {
            let block = block.clone();
            tokio::spawn(async move {
                reveal(&block, "a long answer", Duration::from_millis(30)).await
            })
        };

        sleep(Duration::from_millis(45)).await;
        region.show_waiting();

        let start = Instant::now();
        task.await.unwrap();
        assert!(start.elapsed() <= Duration::from_millis(30));
        assert_eq!(block.text(), "a long answer");
        assert!(!block.snapshot().typing);
        assert_eq!(region.view(), RegionView::Waiting);
    }
}
