//! Cosmetic cover-image picker for new interview records.

use rand::Rng;

const COVER_IMAGES: &[&str] = &[
    "/covers/adobe.png",
    "/covers/amazon.png",
    "/covers/facebook.png",
    "/covers/hostinger.png",
    "/covers/pinterest.png",
    "/covers/quora.png",
    "/covers/reddit.png",
    "/covers/skype.png",
    "/covers/spotify.png",
    "/covers/telegram.png",
    "/covers/tiktok.png",
    "/covers/yahoo.png",
];

pub fn random_cover_image() -> &'static str {
    let idx = rand::rng().random_range(0..COVER_IMAGES.len());
    COVER_IMAGES[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cover_comes_from_the_known_set() {
        for _ in 0..50 {
            let cover = random_cover_image();
            assert!(COVER_IMAGES.contains(&cover));
            assert!(cover.starts_with("/covers/"));
        }
    }
}
