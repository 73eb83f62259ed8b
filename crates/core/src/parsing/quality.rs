//! TV quality tier inference from release titles.

use once_cell::sync::Lazy;
use regex_lite::Regex;

use crate::indexer::IndexerCategory;

static RESOLUTION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:(?P<r2160>2160p|4k|uhd)|(?P<r1080>1080[pi]|1920x1080)|(?P<r720>720p|1280x720)|(?P<r576>576p)|(?P<r480>480p|640x480|848x480))\b",
    )
    .unwrap()
});

static RAW_HD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:trollhd|rawhd|raw[-. ]hd|mpeg[-. ]?2)\b").unwrap()
});

static SOURCE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:(?P<bluray>blu-?ray|hddvd|bd)|(?P<web>web[-. ]?dl|web[-. ]?rip|webhd|itunes(?:hd)?)|(?P<sd>hdtv|bdrip|brrip|dvd(?:rip)?|ntsc|pal|xvidvd|ws[-. ]dsr|dsr|pdtv|sdtv|tvrip))\b",
    )
    .unwrap()
});

/// Classify a release title into one of the TV categories.
///
/// Resolution markers win (`2160p` → UHD, `720p`/`1080p` → HD,
/// `480p`/`576p` → SD). Without a resolution the source decides: raw HD
/// captures and Blu-ray are HD, every other known source is SD. Titles with
/// no recognizable marker fall back to plain TV.
pub fn tv_category_from_title(title: &str) -> IndexerCategory {
    let normalized = title.trim().replace('_', " ");

    if let Some(caps) = RESOLUTION_PATTERN.captures(&normalized) {
        if caps.name("r2160").is_some() {
            return IndexerCategory::TvUhd;
        }
        if caps.name("r1080").is_some() || caps.name("r720").is_some() {
            return IndexerCategory::TvHd;
        }
        return IndexerCategory::TvSd;
    }

    if RAW_HD_PATTERN.is_match(&normalized) {
        return IndexerCategory::TvHd;
    }

    match SOURCE_PATTERN.captures(&normalized) {
        Some(caps) if caps.name("bluray").is_some() => IndexerCategory::TvHd,
        Some(_) => IndexerCategory::TvSd,
        None => IndexerCategory::Tv,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_tiers() {
        assert_eq!(
            tv_category_from_title("Show.S01E02.2160p.WEB-DL.DDP5.1.HEVC-GRP"),
            IndexerCategory::TvUhd
        );
        assert_eq!(
            tv_category_from_title("Show.S01E02.1080p.WEB.h264-GRP"),
            IndexerCategory::TvHd
        );
        assert_eq!(
            tv_category_from_title("Show S01E02 720p HDTV x264-GRP"),
            IndexerCategory::TvHd
        );
        assert_eq!(
            tv_category_from_title("Show_S01E02_480p_WEB-DL"),
            IndexerCategory::TvSd
        );
    }

    #[test]
    fn test_source_without_resolution() {
        assert_eq!(
            tv_category_from_title("Show.S01E02.HDTV.x264-GRP"),
            IndexerCategory::TvSd
        );
        assert_eq!(
            tv_category_from_title("Show.S01.BluRay.x264-GRP"),
            IndexerCategory::TvHd
        );
        assert_eq!(
            tv_category_from_title("Show.S01E02.DVDRip.XviD-GRP"),
            IndexerCategory::TvSd
        );
        assert_eq!(
            tv_category_from_title("Show.S01E02.RawHD-GRP"),
            IndexerCategory::TvHd
        );
    }

    #[test]
    fn test_unknown_quality_is_plain_tv() {
        assert_eq!(tv_category_from_title("Show S01E02"), IndexerCategory::Tv);
        assert_eq!(tv_category_from_title(""), IndexerCategory::Tv);
    }
}
